//! Geodetic coordinates (latitude, longitude and optional height).
//!
//! Angles carry a unit tag so a coordinate can be passed around in whichever
//! unit the caller has on hand. Conversions return a new value and are no-ops
//! when the coordinate is already in the requested unit.

use std::fmt;

/// Unit of the angular components of a geodetic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

/// Latitude and longitude of a point on the ellipsoid surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic2 {
    latitude: f64,
    longitude: f64,
    unit: AngleUnit,
}

impl Geodetic2 {
    /// Create a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            unit: AngleUnit::Degrees,
        }
    }

    /// Create a coordinate from latitude and longitude in radians.
    #[must_use]
    pub const fn from_radians(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            unit: AngleUnit::Radians,
        }
    }

    #[must_use]
    pub fn to_radians(self) -> Self {
        match self.unit {
            AngleUnit::Radians => self,
            AngleUnit::Degrees => {
                Self::from_radians(self.latitude.to_radians(), self.longitude.to_radians())
            }
        }
    }

    #[must_use]
    pub fn to_degrees(self) -> Self {
        match self.unit {
            AngleUnit::Degrees => self,
            AngleUnit::Radians => Self::new(self.latitude.to_degrees(), self.longitude.to_degrees()),
        }
    }

    /// Latitude and longitude in the stored unit.
    #[must_use]
    pub const fn lat_lon(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub const fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Compare two coordinates in radians, regardless of their stored units.
    ///
    /// Longitudes are compared directly, so -180° and 180° are not considered
    /// equal.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let (lat_a, lon_a) = self.to_radians().lat_lon();
        let (lat_b, lon_b) = other.to_radians().lat_lon();
        (lat_a - lat_b).abs() <= epsilon && (lon_a - lon_b).abs() <= epsilon
    }
}

impl fmt::Display for Geodetic2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            AngleUnit::Degrees => write!(f, "{}°, {}°", self.latitude, self.longitude),
            AngleUnit::Radians => write!(f, "{} rad, {} rad", self.latitude, self.longitude),
        }
    }
}

/// Latitude, longitude and height above the ellipsoid surface.
///
/// Height is measured along the surface normal, in the same linear unit as
/// the ellipsoid radii. Negative heights lie inside the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic3 {
    surface: Geodetic2,
    height: f64,
}

impl Geodetic3 {
    /// Create a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            surface: Geodetic2::new(latitude, longitude),
            height,
        }
    }

    /// Create a coordinate from latitude and longitude in radians.
    #[must_use]
    pub const fn from_radians(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            surface: Geodetic2::from_radians(latitude, longitude),
            height,
        }
    }

    /// Attach a height to a surface coordinate.
    #[must_use]
    pub const fn with_height(surface: Geodetic2, height: f64) -> Self {
        Self { surface, height }
    }

    #[must_use]
    pub fn to_radians(self) -> Self {
        Self {
            surface: self.surface.to_radians(),
            ..self
        }
    }

    #[must_use]
    pub fn to_degrees(self) -> Self {
        Self {
            surface: self.surface.to_degrees(),
            ..self
        }
    }

    /// The latitude/longitude part of this coordinate.
    #[must_use]
    pub const fn surface(&self) -> Geodetic2 {
        self.surface
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub const fn lat_lon(&self) -> (f64, f64) {
        self.surface.lat_lon()
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.surface.latitude()
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.surface.longitude()
    }

    #[must_use]
    pub const fn unit(&self) -> AngleUnit {
        self.surface.unit()
    }

    /// Compare angles in radians and heights directly.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.surface.approx_eq(&other.surface, epsilon)
            && (self.height - other.height).abs() <= epsilon
    }
}

impl From<Geodetic2> for Geodetic3 {
    /// A coordinate without height lies on the surface.
    fn from(surface: Geodetic2) -> Self {
        Self::with_height(surface, 0.0)
    }
}

impl fmt::Display for Geodetic3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.surface, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_degrees() {
        let coord = Geodetic2::new(45.0, -90.0);
        assert_eq!(coord.unit(), AngleUnit::Degrees);
        assert_eq!(coord.lat_lon(), (45.0, -90.0));
    }

    #[test]
    fn test_to_radians_converts_once() {
        let rad = Geodetic2::new(180.0, 90.0).to_radians();
        assert_eq!(rad.unit(), AngleUnit::Radians);
        assert!((rad.latitude() - std::f64::consts::PI).abs() < 1e-15);
        assert!((rad.longitude() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);

        // Already in radians: returned unchanged.
        assert_eq!(rad.to_radians(), rad);
    }

    #[test]
    fn test_to_degrees_reverses_to_radians() {
        let original = Geodetic2::new(12.5, -33.25);
        let back = original.to_radians().to_degrees();
        assert_eq!(back.unit(), AngleUnit::Degrees);
        assert!((back.latitude() - 12.5).abs() < 1e-12);
        assert!((back.longitude() + 33.25).abs() < 1e-12);
        assert_eq!(original.to_degrees(), original);
    }

    #[test]
    fn test_geodetic3_delegates_to_surface() {
        let coord = Geodetic3::new(10.0, 20.0, 300.0);
        assert_eq!(coord.lat_lon(), (10.0, 20.0));
        assert_eq!(coord.height(), 300.0);

        let rad = coord.to_radians();
        assert_eq!(rad.unit(), AngleUnit::Radians);
        assert_eq!(rad.height(), 300.0);
        assert!((rad.latitude() - 10f64.to_radians()).abs() < 1e-15);
        assert_eq!(rad.surface(), coord.surface().to_radians());
    }

    #[test]
    fn test_from_geodetic2_has_zero_height() {
        let coord: Geodetic3 = Geodetic2::new(1.0, 2.0).into();
        assert_eq!(coord.height(), 0.0);
        assert_eq!(coord.lat_lon(), (1.0, 2.0));
    }

    #[test]
    fn test_approx_eq_across_units() {
        let deg = Geodetic3::new(30.0, 60.0, 5.0);
        let rad = Geodetic3::from_radians(30f64.to_radians(), 60f64.to_radians(), 5.0);
        assert!(deg.approx_eq(&rad, 1e-12));
        assert!(!deg.approx_eq(&Geodetic3::new(30.0, 60.0, 6.0), 1e-12));
    }

    #[test]
    fn test_display() {
        assert_eq!(Geodetic2::new(1.5, -2.0).to_string(), "1.5°, -2°");
        assert_eq!(
            Geodetic3::from_radians(0.5, 1.0, 10.0).to_string(),
            "0.5 rad, 1 rad, 10"
        );
    }
}
