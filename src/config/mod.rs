pub mod cli;

use crate::domain::model::Format;
use crate::domain::ports::ConfigProvider;
use crate::utils::validation::{validate_file_exists, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// CLI arguments. The camelCase flag spelling matches the legacy tool.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tm35fin2wgs84")]
#[command(about = "Convert ETRS-TM35FIN planar coordinates to WGS84 latitude/longitude")]
pub struct CliConfig {
    #[arg(long = "inputFile", value_name = "file", help = "use given file as input")]
    pub input_file: String,

    #[arg(
        long = "outputFile",
        value_name = "file",
        help = "output coordinates to given file"
    )]
    pub output_file: String,

    #[arg(long = "inputType", value_name = "type", value_enum)]
    pub input_type: Format,

    #[arg(long = "outputType", value_name = "type", value_enum)]
    pub output_type: Format,

    #[arg(long, help = "Skip out-of-range records instead of aborting")]
    pub skip_invalid: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn input_type(&self) -> Format {
        self.input_type
    }

    fn output_type(&self) -> Format {
        self.output_type
    }

    fn skip_invalid(&self) -> bool {
        self.skip_invalid
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("inputFile", &self.input_file)?;
        validate_path("outputFile", &self.output_file)?;
        validate_file_exists("inputFile", &self.input_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_rejects_missing_input_file() {
        let config = CliConfig {
            input_file: "/no/such/file.csv".to_string(),
            output_file: "out.csv".to_string(),
            input_type: Format::Csv,
            output_type: Format::Csv,
            skip_invalid: false,
            verbose: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_existing_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "385211.0,6672241.0").unwrap();

        let config = CliConfig {
            input_file: file.path().to_str().unwrap().to_string(),
            output_file: "out.json".to_string(),
            input_type: Format::Csv,
            output_type: Format::Json,
            skip_invalid: false,
            verbose: false,
        };
        assert!(config.validate().is_ok());
    }
}
