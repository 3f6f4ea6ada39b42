//! Command-line argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};
use globe::{DVec3, Ellipsoid};

/// Reference shapes selectable with `--preset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// WGS84 reference ellipsoid, in meters.
    #[default]
    Wgs84,
    /// Sphere of radius one.
    Sphere,
}

impl Preset {
    pub fn ellipsoid(self) -> Ellipsoid {
        match self {
            Preset::Wgs84 => Ellipsoid::wgs84(),
            Preset::Sphere => Ellipsoid::unit_sphere(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "globe",
    about = "Convert between Cartesian and geodetic coordinates on an ellipsoid"
)]
pub struct CliArgs {
    /// Reference ellipsoid to use when `--radii` is not given.
    #[arg(long, value_enum, default_value_t = Preset::default())]
    pub preset: Preset,

    /// Explicit ellipsoid radii as `X,Y,Z`. Overrides `--preset`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub radii: Option<DVec3>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// A Cartesian point given as three positional arguments.
#[derive(Args, Debug, Clone, Copy)]
pub struct PointArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: f64,
    #[arg(allow_negative_numbers = true)]
    pub y: f64,
    #[arg(allow_negative_numbers = true)]
    pub z: f64,
}

impl PointArgs {
    pub fn point(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert latitude and longitude (degrees) and optional height to x y z.
    ToCartesian {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Height above the surface, in the unit of the radii.
        #[arg(allow_negative_numbers = true)]
        height: Option<f64>,
    },
    /// Convert x y z to latitude, longitude (degrees) and height.
    ToGeodetic {
        #[command(flatten)]
        point: PointArgs,
        /// Report only latitude and longitude of the surface projection.
        #[arg(long)]
        surface: bool,
    },
    /// Geodetic surface normal at a point on the ellipsoid.
    Normal {
        #[command(flatten)]
        point: PointArgs,
    },
    /// Project a point onto the surface along the line through the centre.
    Geocentric {
        #[command(flatten)]
        point: PointArgs,
    },
    /// Project a point onto the surface along the surface normal.
    Geodetic {
        #[command(flatten)]
        point: PointArgs,
    },
    /// Rotate a point about an axis through the origin.
    Rotate {
        #[command(flatten)]
        point: PointArgs,
        /// Rotation axis as `X,Y,Z`; need not be normalized.
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        axis: DVec3,
        /// Rotation angle in degrees (right-hand rule).
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
    },
}

/// Parse a comma-separated `X,Y,Z` triple.
pub fn parse_vec3(s: &str) -> Result<DVec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected X,Y,Z, got '{s}'"));
    }

    let mut values = [0.0; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .parse::<f64>()
            .map_err(|e| format!("invalid component '{part}': {e}"))?;
    }
    Ok(DVec3::from_array(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("1,2,3"), Ok(DVec3::new(1.0, 2.0, 3.0)));
        assert_eq!(
            parse_vec3(" -1.5, 0 ,2e3"),
            Ok(DVec3::new(-1.5, 0.0, 2000.0))
        );
    }

    #[test]
    fn test_parse_vec3_rejects_malformed() {
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,2,3,4").is_err());
        assert!(parse_vec3("1,two,3").is_err());
        assert!(parse_vec3("").is_err());
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["globe", "normal", "1", "0", "0"]).unwrap();
        assert_eq!(args.preset, Preset::Wgs84);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.radii.is_none());
    }

    #[test]
    fn test_negative_positionals() {
        let args =
            CliArgs::try_parse_from(["globe", "to-cartesian", "-33.9", "-70.6", "-12"]).unwrap();
        match args.command {
            Command::ToCartesian { lat, lon, height } => {
                assert_eq!(lat, -33.9);
                assert_eq!(lon, -70.6);
                assert_eq!(height, Some(-12.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_radii_and_rotate_options() {
        let args = CliArgs::try_parse_from([
            "globe",
            "--radii",
            "2,1,1",
            "--format",
            "json",
            "rotate",
            "1",
            "0",
            "0",
            "--axis",
            "0,0,-1",
            "--angle",
            "-90",
        ])
        .unwrap();
        assert_eq!(args.radii, Some(DVec3::new(2.0, 1.0, 1.0)));
        assert_eq!(args.format, OutputFormat::Json);
        match args.command {
            Command::Rotate { point, axis, angle } => {
                assert_eq!(point.point(), DVec3::X);
                assert_eq!(axis, DVec3::NEG_Z);
                assert_eq!(angle, -90.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_radii_rejected_by_parser() {
        assert!(CliArgs::try_parse_from(["globe", "--radii", "1,2", "normal", "1", "0", "0"]).is_err());
    }
}
