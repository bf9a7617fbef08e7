use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A planar coordinate pair in the ETRS-TM35FIN projected CRS, in meters.
///
/// Field names follow the JSON input shape (`{"x": ..., "y": ...}`): `x` is
/// the value normalized against the meridian arc (valid range roughly
/// 6.58M..7.80M for mainland Finland), `y` carries the 500 km false-easting
/// offset (valid range roughly 50k..761k).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarCoordinate {
    pub x: f64,
    pub y: f64,
}

/// A geographic coordinate pair on WGS84, in decimal degrees.
///
/// Serializes to the JSON output shape `{"lat": ..., "lng": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicCoordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

/// Input/output file encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Csv,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Csv => write!(f, "csv"),
            Format::Json => write!(f, "json"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            other => Err(format!("invalid format: {} (expected csv or json)", other)),
        }
    }
}

/// Output of the transform stage: the converted records, plus how many
/// input records were dropped under per-record recovery.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub converted: Vec<GeographicCoordinate>,
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_coordinate_json_shape() {
        let c: PlanarCoordinate = serde_json::from_str(r#"{"x": 6893500.0, "y": 500000.0}"#).unwrap();
        assert_eq!(c.x, 6893500.0);
        assert_eq!(c.y, 500000.0);
    }

    #[test]
    fn test_geographic_coordinate_json_shape() {
        let c = GeographicCoordinate {
            latitude: 62.0,
            longitude: 27.0,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"lat":62.0,"lng":27.0}"#);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<Format>().unwrap(), Format::Csv);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert!("xml".parse::<Format>().is_err());
    }
}
