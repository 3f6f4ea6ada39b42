//! Triaxial ellipsoid and its coordinate transforms.

use glam::DVec3;

use crate::error::{Axis, Error, Result};
use crate::geodetic::{Geodetic2, Geodetic3};

/// Residual of the implicit surface equation at which surface scaling stops.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-10;

/// Upper bound on Newton-Raphson iterations in [`Ellipsoid::scale_to_geodetic_surface`].
pub const MAX_ITERATIONS: usize = 100;

/// WGS84 semi-major axis in meters.
const WGS84_EQUATORIAL_RADIUS: f64 = 6_378_137.0;
/// WGS84 semi-minor axis in meters.
const WGS84_POLAR_RADIUS: f64 = 6_356_752.314_245_179;

/// A triaxial ellipsoid centred on the origin with its axes along x, y and z.
///
/// Squared, fourth-power and reciprocal-squared radii are computed once at
/// construction. The value is immutable, so it can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    radii: DVec3,
    radii_squared: DVec3,
    radii_to_the_fourth: DVec3,
    one_over_radii_squared: DVec3,
}

impl Ellipsoid {
    /// Create an ellipsoid with the given x, y and z radii.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] if any radius is negative or NaN.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::from_radii(DVec3::new(x, y, z))
    }

    /// Create an ellipsoid whose radii are the components of `radii`.
    ///
    /// Zero radii are accepted, but transforms that divide by that axis
    /// degenerate (see [`Error::NumericDegeneracy`]).
    pub fn from_radii(radii: DVec3) -> Result<Self> {
        for (axis, value) in [(Axis::X, radii.x), (Axis::Y, radii.y), (Axis::Z, radii.z)] {
            if value.is_nan() || value < 0.0 {
                return Err(Error::InvalidRadius { axis, value });
            }
        }
        Ok(Self::from_valid_radii(radii))
    }

    /// The WGS84 reference ellipsoid, in meters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::from_valid_radii(DVec3::new(
            WGS84_EQUATORIAL_RADIUS,
            WGS84_EQUATORIAL_RADIUS,
            WGS84_POLAR_RADIUS,
        ))
    }

    /// A sphere of radius one.
    #[must_use]
    pub fn unit_sphere() -> Self {
        Self::from_valid_radii(DVec3::ONE)
    }

    fn from_valid_radii(radii: DVec3) -> Self {
        let radii_squared = radii * radii;
        Self {
            radii,
            radii_squared,
            radii_to_the_fourth: radii_squared * radii_squared,
            one_over_radii_squared: radii_squared.recip(),
        }
    }

    #[must_use]
    pub fn radii(&self) -> DVec3 {
        self.radii
    }

    #[must_use]
    pub fn radii_squared(&self) -> DVec3 {
        self.radii_squared
    }

    #[must_use]
    pub fn radii_to_the_fourth(&self) -> DVec3 {
        self.radii_to_the_fourth
    }

    #[must_use]
    pub fn one_over_radii_squared(&self) -> DVec3 {
        self.one_over_radii_squared
    }

    #[must_use]
    pub fn minimum_radius(&self) -> f64 {
        self.radii.min_element()
    }

    #[must_use]
    pub fn maximum_radius(&self) -> f64 {
        self.radii.max_element()
    }

    /// Outward unit normal of the ellipsoid at a point on its surface.
    ///
    /// This is the normalized gradient of the implicit surface equation. The
    /// point is not checked: for a point off the surface the result is the
    /// normal of the scaled ellipsoid passing through it. The origin yields
    /// non-finite components.
    #[must_use]
    pub fn geodetic_surface_normal(&self, point: DVec3) -> DVec3 {
        (point * self.one_over_radii_squared).normalize()
    }

    /// Outward unit normal at the given latitude and longitude.
    #[must_use]
    pub fn geodetic_surface_normal_from_geodetic(&self, coord: Geodetic2) -> DVec3 {
        let (latitude, longitude) = coord.to_radians().lat_lon();
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let (sin_lon, cos_lon) = longitude.sin_cos();
        DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Convert a geodetic coordinate to Cartesian.
    ///
    /// Accepts either a [`Geodetic2`] (placed on the surface) or a
    /// [`Geodetic3`] (displaced along the surface normal by its height).
    #[must_use]
    pub fn to_cartesian(&self, coord: impl Into<Geodetic3>) -> DVec3 {
        let coord = coord.into();
        let normal = self.geodetic_surface_normal_from_geodetic(coord.surface());
        let k = self.radii_squared * normal;
        let gamma = k.dot(normal).sqrt();
        let surface = k / gamma;
        surface + normal * coord.height()
    }

    /// Project `point` onto the surface along the line through the centre.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericDegeneracy`] for the origin, or when a zero
    /// radius makes the scale factor non-finite.
    pub fn scale_to_geocentric_surface(&self, point: DVec3) -> Result<DVec3> {
        let beta = self.geocentric_scale(point, "scale_to_geocentric_surface")?;
        Ok(point * beta)
    }

    /// Project `point` onto the surface along the surface normal.
    ///
    /// Solves for the normal offset `alpha` with Newton-Raphson, starting from
    /// the geocentric projection. At least one iteration always runs; the
    /// loop stops once the residual of the implicit surface equation is at
    /// most [`CONVERGENCE_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// - [`Error::ConvergenceFailure`] if the tolerance is not reached within
    ///   [`MAX_ITERATIONS`].
    /// - [`Error::NumericDegeneracy`] for the origin or a zero radius.
    pub fn scale_to_geodetic_surface(&self, point: DVec3) -> Result<DVec3> {
        self.scale_to_geodetic_surface_with_limit(point, MAX_ITERATIONS)
    }

    fn scale_to_geodetic_surface_with_limit(
        &self,
        point: DVec3,
        max_iterations: usize,
    ) -> Result<DVec3> {
        const OPERATION: &str = "scale_to_geodetic_surface";

        let beta = self.geocentric_scale(point, OPERATION)?;
        let n = (beta * point * self.one_over_radii_squared).length();
        let mut alpha = (1.0 - beta) * point.length() / n;
        if !alpha.is_finite() {
            return Err(degenerate(OPERATION));
        }

        let point_squared = point * point;
        let mut iterations = 0;
        loop {
            iterations += 1;

            let d = DVec3::ONE + alpha * self.one_over_radii_squared;
            let d_squared = d * d;
            let d_cubed = d_squared * d;

            let s = (point_squared / (self.radii_squared * d_squared)).element_sum() - 1.0;
            if !s.is_finite() {
                return Err(degenerate(OPERATION));
            }

            tracing::trace!(iterations, alpha, residual = s, "newton step");

            if s.abs() <= CONVERGENCE_TOLERANCE {
                let surface = point / d;
                if !surface.is_finite() {
                    return Err(degenerate(OPERATION));
                }
                return Ok(surface);
            }

            if iterations >= max_iterations {
                tracing::debug!(iterations, residual = s, "surface scaling did not converge");
                return Err(Error::ConvergenceFailure {
                    iterations,
                    residual: s,
                });
            }

            let ds_dalpha =
                -2.0 * (point_squared / (self.radii_to_the_fourth * d_cubed)).element_sum();
            alpha -= s / ds_dalpha;
        }
    }

    /// Convert a Cartesian point to latitude, longitude and height.
    ///
    /// Angles are returned in radians. Height is positive outside the
    /// ellipsoid and negative inside.
    pub fn to_geodetic(&self, point: DVec3) -> Result<Geodetic3> {
        let surface = self.scale_to_geodetic_surface(point)?;
        let h = point - surface;
        let height = h.dot(point).signum() * h.length();
        Ok(Geodetic3::with_height(self.surface_to_geodetic(surface), height))
    }

    /// Convert a Cartesian point to the latitude and longitude of its
    /// geodetic surface projection, in radians.
    pub fn to_geodetic_2d(&self, point: DVec3) -> Result<Geodetic2> {
        let surface = self.scale_to_geodetic_surface(point)?;
        Ok(self.surface_to_geodetic(surface))
    }

    fn surface_to_geodetic(&self, surface: DVec3) -> Geodetic2 {
        let n = surface * self.one_over_radii_squared;
        let latitude = (n.z / n.length()).asin();
        let longitude = n.y.atan2(n.x);
        Geodetic2::from_radians(latitude, longitude)
    }

    fn geocentric_scale(&self, point: DVec3, operation: &'static str) -> Result<f64> {
        let beta = 1.0 / (point * point * self.one_over_radii_squared).element_sum().sqrt();
        if beta.is_finite() {
            Ok(beta)
        } else {
            Err(degenerate(operation))
        }
    }
}

fn degenerate(operation: &'static str) -> Error {
    tracing::debug!(operation, "non-finite intermediate value");
    Error::NumericDegeneracy { operation }
}
