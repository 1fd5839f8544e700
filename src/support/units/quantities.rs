use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_meter,
        f64::{Area, Mass, Power, Time},
        mass::gram,
        power::kilowatt,
        time::second,
    },
    typenum::{N1, N2, N5, P1, P2, Z0},
};

/// Mass burning flux, kg/m²·s in SI.
pub type MassFlux = Quantity<ISQ<N2, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Fire growth coefficient of a t-squared fire, W/s² in SI.
pub type FireGrowthCoefficient = Quantity<ISQ<P2, P1, N5, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Fire load per unit floor area, J/m² in SI.
pub type FireLoadDensity = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`MassFlux`] from a value in g/m²·s, the unit fuel tables use.
#[must_use]
pub fn mass_flux_from_grams(value: f64) -> MassFlux {
    Mass::new::<gram>(value) / (Area::new::<square_meter>(1.0) * Time::new::<second>(1.0))
}

/// Creates a [`FireGrowthCoefficient`] from a value in kW/s².
#[must_use]
pub fn growth_coefficient_from_kilowatts(value: f64) -> FireGrowthCoefficient {
    let one_second = Time::new::<second>(1.0);
    Power::new::<kilowatt>(value) / (one_second * one_second)
}

/// Returns a [`FireGrowthCoefficient`] in kW/s².
#[must_use]
pub fn growth_coefficient_in_kilowatts(alpha: FireGrowthCoefficient) -> f64 {
    alpha.value / 1000.0
}

/// Returns a [`FireLoadDensity`] in MJ/m².
#[must_use]
pub fn fire_load_density_in_megajoules(density: FireLoadDensity) -> f64 {
    density.value / 1.0e6
}
