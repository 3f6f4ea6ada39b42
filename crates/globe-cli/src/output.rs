//! Rendering of command results.

use globe::{DVec3, Geodetic2, Geodetic3};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::error::Result;

/// The result of a single command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    Cartesian(DVec3),
    Surface(Geodetic2),
    Geodetic(Geodetic3),
}

#[derive(Serialize)]
struct CartesianJson {
    x: f64,
    y: f64,
    z: f64,
}

/// Angles are always written in degrees.
#[derive(Serialize)]
struct GeodeticJson {
    latitude: f64,
    longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
}

impl GeodeticJson {
    fn new(surface: Geodetic2, height: Option<f64>) -> Self {
        let (latitude, longitude) = surface.to_degrees().lat_lon();
        Self {
            latitude,
            longitude,
            height,
        }
    }
}

impl Output {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Output::Cartesian(v) => format!("{} {} {}", v.x, v.y, v.z),
            Output::Surface(coord) => {
                let (lat, lon) = coord.to_degrees().lat_lon();
                format!("{lat} {lon}")
            }
            Output::Geodetic(coord) => {
                let (lat, lon) = coord.to_degrees().lat_lon();
                format!("{lat} {lon} {}", coord.height())
            }
        }
    }

    fn render_json(&self) -> Result<String> {
        let json = match self {
            Output::Cartesian(v) => serde_json::to_string(&CartesianJson {
                x: v.x,
                y: v.y,
                z: v.z,
            })?,
            Output::Surface(coord) => serde_json::to_string(&GeodeticJson::new(*coord, None))?,
            Output::Geodetic(coord) => serde_json::to_string(&GeodeticJson::new(
                coord.surface(),
                Some(coord.height()),
            ))?,
        };
        Ok(json)
    }
}
