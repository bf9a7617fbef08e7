use clap::Parser;
use tm35fin2wgs84::utils::{logger, validation::Validate};
use tm35fin2wgs84::{CliConfig, ConvertEngine, ConvertPipeline, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tm35fin2wgs84");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let pipeline = ConvertPipeline::new(storage, config);
    let engine = ConvertEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("✅ Conversion completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                tm35fin2wgs84::utils::error::ErrorSeverity::Low => 0,
                tm35fin2wgs84::utils::error::ErrorSeverity::Medium => 2,
                tm35fin2wgs84::utils::error::ErrorSeverity::High => 1,
                tm35fin2wgs84::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
