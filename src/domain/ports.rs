use crate::domain::model::{Format, PlanarCoordinate, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_file(&self) -> &str;
    fn output_file(&self) -> &str;
    fn input_type(&self) -> Format;
    fn output_type(&self) -> Format;
    fn skip_invalid(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<PlanarCoordinate>>;
    fn transform(&self, data: Vec<PlanarCoordinate>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
