use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use super::{ValidationError, finite_result, strictly_positive};

/// Surface areas and volume of a compartment.
///
/// All values share the length unit the dimensions were given in, squared or
/// cubed as appropriate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measures {
    pub floor_area: f64,
    pub wall_area: f64,
    pub total_surface_area: f64,
    pub volume: f64,
}

/// Computes the measures of a rectangular compartment.
///
/// The formulas hold in any consistent length unit, so no conversion is
/// applied.
///
/// ```
/// use fire_models::support::fire::rectangular;
///
/// let room = rectangular(20.0, 15.0, 8.0).unwrap();
/// assert_eq!(room.floor_area, 300.0);
/// assert_eq!(room.wall_area, 560.0);
/// assert_eq!(room.total_surface_area, 1160.0);
/// assert_eq!(room.volume, 2400.0);
/// ```
///
/// # Errors
///
/// Returns a [`ValidationError`] if any dimension is not strictly positive.
pub fn rectangular(length: f64, width: f64, height: f64) -> Result<Measures, ValidationError> {
    let length = strictly_positive("length", length)?;
    let width = strictly_positive("width", width)?;
    let height = strictly_positive("height", height)?;

    let floor_area = length * width;
    let wall_area = 2.0 * (length + width) * height;
    Measures {
        floor_area,
        wall_area,
        total_surface_area: 2.0 * floor_area + wall_area,
        volume: length * width * height,
    }
    .finite()
}

/// Computes the measures of a cylindrical compartment.
///
/// # Errors
///
/// Returns a [`ValidationError`] if either dimension is not strictly positive.
pub fn cylindrical(diameter: f64, height: f64) -> Result<Measures, ValidationError> {
    let diameter = strictly_positive("diameter", diameter)?;
    let height = strictly_positive("height", height)?;

    let radius = diameter / 2.0;
    let floor_area = PI * radius * radius;
    let wall_area = PI * diameter * height;
    Measures {
        floor_area,
        wall_area,
        total_surface_area: 2.0 * floor_area + wall_area,
        volume: floor_area * height,
    }
    .finite()
}

impl Measures {
    /// The total surface area bounds the floor and wall areas.
    fn finite(self) -> Result<Self, ValidationError> {
        finite_result("total_surface_area", self.total_surface_area)?;
        finite_result("volume", self.volume)?;
        Ok(self)
    }
}

/// Ventilation geometry of a compartment with a single opening.
///
/// Construction guarantees that every value is strictly positive and that the
/// opening is no larger than the enclosing surface area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompartmentGeometry {
    total_surface_area: Area,
    opening_area: Area,
    opening_height: Length,
}

impl CompartmentGeometry {
    /// Creates a geometry from its three defining values (`At`, `A0`, `H0`).
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a value is not strictly positive or if
    /// the opening area exceeds the total surface area.
    pub fn new(
        total_surface_area: Area,
        opening_area: Area,
        opening_height: Length,
    ) -> Result<Self, ValidationError> {
        let total_surface_area = strictly_positive("total_surface_area", total_surface_area)?;
        let opening_area = strictly_positive("opening_area", opening_area)?;
        let opening_height = strictly_positive("opening_height", opening_height)?;

        if opening_area > total_surface_area {
            return Err(ValidationError::VentExceedsEnclosure {
                vent: opening_area.get::<square_meter>(),
                enclosure: total_surface_area.get::<square_meter>(),
            });
        }

        Ok(Self {
            total_surface_area,
            opening_area,
            opening_height,
        })
    }

    /// Derives the geometry of a rectangular room with one rectangular opening.
    ///
    /// `At = 2(LW + LH + WH)` and `A0 = opening width · opening height`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a dimension is not strictly positive or
    /// the opening is larger than the room's surfaces.
    pub fn from_dimensions(
        length: Length,
        width: Length,
        height: Length,
        opening_width: Length,
        opening_height: Length,
    ) -> Result<Self, ValidationError> {
        let length = strictly_positive("length", length)?;
        let width = strictly_positive("width", width)?;
        let height = strictly_positive("height", height)?;
        let opening_width = strictly_positive("opening_width", opening_width)?;
        let opening_height = strictly_positive("opening_height", opening_height)?;

        let total_surface_area = (length * width + length * height + width * height) * 2.0;
        Self::new(
            total_surface_area,
            opening_width * opening_height,
            opening_height,
        )
    }

    /// Total enclosing surface area `At`.
    #[must_use]
    pub fn total_surface_area(&self) -> Area {
        self.total_surface_area
    }

    /// Opening area `A0`.
    #[must_use]
    pub fn opening_area(&self) -> Area {
        self.opening_area
    }

    /// Opening height `H0`.
    #[must_use]
    pub fn opening_height(&self) -> Length {
        self.opening_height
    }

    /// Ventilation factor `A0·√H0` in m^(5/2).
    pub(crate) fn ventilation_factor(&self) -> f64 {
        self.opening_area.get::<square_meter>() * self.opening_height.get::<meter>().sqrt()
    }
}
