use crate::core::projection;
use crate::domain::model::{Format, GeographicCoordinate, PlanarCoordinate, TransformResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{ConvertError, Result};

pub struct ConvertPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn decode_csv(&self, data: &[u8]) -> Result<Vec<PlanarCoordinate>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(data);

        let mut coordinates = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() < 2 {
                return Err(ConvertError::MalformedInput {
                    message: format!("line {}: expected two fields, got {}", line + 1, record.len()),
                });
            }
            // Input field order is y,x.
            let y = parse_field(&record[0], line)?;
            let x = parse_field(&record[1], line)?;
            coordinates.push(PlanarCoordinate { x, y });
        }
        Ok(coordinates)
    }

    fn decode_json(&self, data: &[u8]) -> Result<Vec<PlanarCoordinate>> {
        let coordinates: Vec<PlanarCoordinate> = serde_json::from_slice(data)?;
        Ok(coordinates)
    }

    fn encode_csv(&self, converted: &[GeographicCoordinate]) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        for c in converted {
            // Output field order is longitude,latitude.
            writer.write_record(&[c.longitude.to_string(), c.latitude.to_string()])?;
        }
        writer
            .into_inner()
            .map_err(|e| ConvertError::IoError(e.into_error()))
    }

    fn encode_json(&self, converted: &[GeographicCoordinate]) -> Result<Vec<u8>> {
        let bytes = serde_json::to_vec(converted)?;
        Ok(bytes)
    }
}

fn parse_field(field: &str, line: usize) -> Result<f64> {
    field.parse().map_err(|_| ConvertError::MalformedInput {
        message: format!("line {}: not a number: {}", line + 1, field),
    })
}

impl<S: Storage, C: ConfigProvider> Pipeline for ConvertPipeline<S, C> {
    fn extract(&self) -> Result<Vec<PlanarCoordinate>> {
        tracing::debug!("Reading input from: {}", self.config.input_file());
        let data = self.storage.read_file(self.config.input_file())?;

        match self.config.input_type() {
            Format::Csv => self.decode_csv(&data),
            Format::Json => self.decode_json(&data),
        }
    }

    fn transform(&self, data: Vec<PlanarCoordinate>) -> Result<TransformResult> {
        let mut converted = Vec::with_capacity(data.len());
        let mut skipped = 0;

        for (index, coordinate) in data.into_iter().enumerate() {
            match projection::to_wgs84(coordinate.x, coordinate.y) {
                Ok(c) => converted.push(c),
                Err(e) if self.config.skip_invalid() => {
                    tracing::warn!("Skipping record {}: {}", index + 1, e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(TransformResult { converted, skipped })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output = match self.config.output_type() {
            Format::Csv => self.encode_csv(&result.converted)?,
            Format::Json => self.encode_json(&result.converted)?,
        };

        tracing::debug!(
            "Writing {} bytes to: {}",
            output.len(),
            self.config.output_file()
        );
        self.storage.write_file(self.config.output_file(), &output)?;

        Ok(self.config.output_file().to_string())
    }
}
