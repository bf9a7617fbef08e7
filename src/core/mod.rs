pub mod engine;
pub mod pipeline;
pub mod projection;

pub use crate::domain::model::{
    Format, GeographicCoordinate, PlanarCoordinate, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
