use crate::utils::error::{ConvertError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_file_exists(field_name: &str, path: &str) -> Result<()> {
    if !Path::new(path).is_file() {
        return Err(ConvertError::ConfigError {
            message: format!("{}: file does not exist: {}", field_name, path),
        });
    }
    Ok(())
}
