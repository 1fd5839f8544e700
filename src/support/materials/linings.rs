use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

/// A compartment lining (construction) material record.
///
/// Conductivity is stored in kW/m·K, density in kg/m³, and specific heat in
/// kJ/kg·K.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lining {
    key: &'static str,
    name: &'static str,
    conductivity: f64,
    density: f64,
    specific_heat: f64,
}

/// Thermal properties of a lining material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalProperties {
    pub conductivity: ThermalConductivity,
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
}

impl ThermalProperties {
    /// Conductivity in kW/m·K, the value the MQH correlations take as `hk`.
    #[must_use]
    pub fn conductivity_kw_per_m_k(&self) -> f64 {
        self.conductivity.get::<watt_per_meter_kelvin>() / 1000.0
    }
}

impl Lining {
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn thermal_properties(&self) -> ThermalProperties {
        ThermalProperties {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                self.conductivity * 1000.0,
            ),
            density: MassDensity::new::<kilogram_per_cubic_meter>(self.density),
            specific_heat: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(
                self.specific_heat,
            ),
        }
    }
}

pub(super) const LININGS: &[Lining] = &[
    Lining {
        key: "gypsum_board",
        name: "Gypsum Board",
        conductivity: 0.16,
        density: 790.0,
        specific_heat: 1.09,
    },
    Lining {
        key: "concrete",
        name: "Concrete",
        conductivity: 1.6,
        density: 2300.0,
        specific_heat: 0.92,
    },
    Lining {
        key: "brick",
        name: "Brick",
        conductivity: 0.8,
        density: 1600.0,
        specific_heat: 0.84,
    },
];
