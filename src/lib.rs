pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use self::config::{cli::LocalStorage, CliConfig};
pub use self::core::{engine::ConvertEngine, pipeline::ConvertPipeline, projection};
pub use self::domain::model::{Format, GeographicCoordinate, PlanarCoordinate};
pub use self::utils::error::{ConvertError, Result};
