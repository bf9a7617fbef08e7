use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting conversion...");

        tracing::info!("Reading input...");
        let coordinates = self.pipeline.extract()?;
        tracing::info!("Read {} records", coordinates.len());

        tracing::info!("Converting...");
        let result = self.pipeline.transform(coordinates)?;
        if result.skipped > 0 {
            tracing::warn!("Skipped {} out-of-range records", result.skipped);
        }
        tracing::info!("Converted {} records", result.converted.len());

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
