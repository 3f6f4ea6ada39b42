//! Cartesian and geodetic coordinate transforms on a triaxial ellipsoid.
//!
//! The central type is [`Ellipsoid`], an immutable shape descriptor that maps
//! between Cartesian points ([`DVec3`]) and geodetic coordinates
//! ([`Geodetic2`], [`Geodetic3`]).
//!
//! # Design principles
//!
//! - **Pure**: Every transform is a function of the ellipsoid and one input
//! - **Thread-safe**: All types are `Copy` values; share them freely
//! - **Fallible where it matters**: Iterative and degenerate cases return
//!   [`Error`] instead of NaN
//!
//! # Example
//!
//! ```
//! use globe::{Ellipsoid, Geodetic3};
//!
//! let wgs84 = Ellipsoid::wgs84();
//! let point = wgs84.to_cartesian(Geodetic3::new(51.5, -0.12, 35.0));
//! let back = wgs84.to_geodetic(point)?.to_degrees();
//! assert!((back.latitude() - 51.5).abs() < 1e-9);
//! assert!((back.height() - 35.0).abs() < 1e-3);
//! # Ok::<(), globe::Error>(())
//! ```

mod ellipsoid;
mod error;
mod geodetic;
mod rotation;

pub use ellipsoid::{CONVERGENCE_TOLERANCE, Ellipsoid, MAX_ITERATIONS};
pub use error::{Axis, Error, Result};
pub use geodetic::{AngleUnit, Geodetic2, Geodetic3};
pub use rotation::rotate_around_axis;

// Re-export the vector type for convenience.
pub use glam::DVec3;
