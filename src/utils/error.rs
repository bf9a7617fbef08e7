use std::fmt;
use thiserror::Error;

/// Which coordinate axis failed the domain check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{axis} value {value} is out of range ({min} - {max})")]
    OutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("numeric instability while converting coordinates (non-finite intermediate)")]
    NumericDomain,

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Conversion,
    Input,
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::OutOfRange { .. } | ConvertError::NumericDomain => {
                ErrorCategory::Conversion
            }
            ConvertError::MalformedInput { .. }
            | ConvertError::CsvError(_)
            | ConvertError::SerializationError(_) => ErrorCategory::Input,
            ConvertError::IoError(_) => ErrorCategory::Io,
            ConvertError::ConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::OutOfRange { .. } => ErrorSeverity::Medium,
            ConvertError::NumericDomain => ErrorSeverity::High,
            ConvertError::MalformedInput { .. }
            | ConvertError::CsvError(_)
            | ConvertError::SerializationError(_) => ErrorSeverity::High,
            ConvertError::IoError(_) => ErrorSeverity::Critical,
            ConvertError::ConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::OutOfRange { axis, min, max, .. } => format!(
                "check that the {} values fall inside the TM35FIN envelope ({} - {}), or pass --skip-invalid to drop out-of-range records",
                axis, min, max
            ),
            ConvertError::NumericDomain => {
                "the input lies at the edge of the projection domain; verify the source coordinates".to_string()
            }
            ConvertError::MalformedInput { .. } => {
                "check that every input record is a numeric coordinate pair".to_string()
            }
            ConvertError::CsvError(_) => {
                "check that the CSV input has two numeric fields per line and no header row".to_string()
            }
            ConvertError::SerializationError(_) => {
                "check that the JSON input is an array of {\"x\": <number>, \"y\": <number>} objects".to_string()
            }
            ConvertError::IoError(_) => {
                "check the file paths and their permissions".to_string()
            }
            ConvertError::ConfigError { .. } => {
                "run with --help to see the required arguments".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Conversion => format!("Conversion failed: {}", self),
            ErrorCategory::Input => format!("Could not read the input data: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
