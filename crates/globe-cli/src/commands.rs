//! Command dispatch.

use globe::{Ellipsoid, Geodetic2, Geodetic3, rotate_around_axis};

use crate::args::{CliArgs, Command};
use crate::error::Result;
use crate::output::Output;

/// Build the ellipsoid selected on the command line.
///
/// Explicit `--radii` take precedence over `--preset`.
pub fn ellipsoid(args: &CliArgs) -> Result<Ellipsoid> {
    let ellipsoid = match args.radii {
        Some(radii) => Ellipsoid::from_radii(radii)?,
        None => args.preset.ellipsoid(),
    };
    tracing::debug!(radii = %ellipsoid.radii(), "using ellipsoid");
    Ok(ellipsoid)
}

/// Run the selected command and return its result.
pub fn run(args: &CliArgs) -> Result<Output> {
    let ellipsoid = ellipsoid(args)?;

    let output = match args.command {
        Command::ToCartesian { lat, lon, height } => {
            let coord = Geodetic3::with_height(Geodetic2::new(lat, lon), height.unwrap_or(0.0));
            Output::Cartesian(ellipsoid.to_cartesian(coord))
        }
        Command::ToGeodetic { point, surface } => {
            if surface {
                Output::Surface(ellipsoid.to_geodetic_2d(point.point())?)
            } else {
                Output::Geodetic(ellipsoid.to_geodetic(point.point())?)
            }
        }
        Command::Normal { point } => {
            Output::Cartesian(ellipsoid.geodetic_surface_normal(point.point()))
        }
        Command::Geocentric { point } => {
            Output::Cartesian(ellipsoid.scale_to_geocentric_surface(point.point())?)
        }
        Command::Geodetic { point } => {
            Output::Cartesian(ellipsoid.scale_to_geodetic_surface(point.point())?)
        }
        Command::Rotate { point, axis, angle } => Output::Cartesian(rotate_around_axis(
            point.point(),
            axis,
            angle.to_radians(),
        )),
    };

    tracing::debug!(?output, "command finished");
    Ok(output)
}
