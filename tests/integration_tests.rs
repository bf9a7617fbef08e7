use tempfile::TempDir;
use tm35fin2wgs84::{
    CliConfig, ConvertEngine, ConvertError, ConvertPipeline, Format, LocalStorage,
};

fn write_input(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn config(input: String, output: String, input_type: Format, output_type: Format) -> CliConfig {
    CliConfig {
        input_file: input,
        output_file: output,
        input_type,
        output_type,
        skip_invalid: false,
        verbose: false,
    }
}

fn run(config: CliConfig) -> Result<String, ConvertError> {
    let pipeline = ConvertPipeline::new(LocalStorage::new(), config);
    ConvertEngine::new(pipeline).run()
}

#[test]
fn test_end_to_end_csv_to_json() {
    let temp_dir = TempDir::new().unwrap();
    // Helsinki and Oulu, roughly. CSV carries y first, then x.
    let input = write_input(
        &temp_dir,
        "coords.csv",
        "385211.0,6672241.0\n427465.0,7210700.0\n",
    );
    let output = temp_dir.path().join("coords.json");

    let result = run(config(
        input,
        output.to_str().unwrap().to_string(),
        Format::Csv,
        Format::Json,
    ));
    assert!(result.is_ok());

    let data = std::fs::read(&output).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&data).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 2);

    let helsinki = &records[0];
    assert!(helsinki["lat"].as_f64().unwrap() > 59.0);
    assert!(helsinki["lat"].as_f64().unwrap() < 61.0);
    assert!(helsinki["lng"].as_f64().unwrap() > 24.0);
    assert!(helsinki["lng"].as_f64().unwrap() < 26.0);

    // Oulu is north of Helsinki.
    assert!(records[1]["lat"].as_f64().unwrap() > helsinki["lat"].as_f64().unwrap());
}

#[test]
fn test_end_to_end_json_to_csv() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "coords.json",
        r#"[{"x": 6672241.0, "y": 385211.0}]"#,
    );
    let output = temp_dir.path().join("coords.csv");

    let result = run(config(
        input,
        output.to_str().unwrap().to_string(),
        Format::Json,
        Format::Csv,
    ));
    assert!(result.is_ok());

    let content = std::fs::read_to_string(&output).unwrap();
    let line = content.lines().next().unwrap();
    let fields: Vec<&str> = line.split(',').collect();
    assert_eq!(fields.len(), 2);

    // Output field order is longitude,latitude.
    let lng: f64 = fields[0].parse().unwrap();
    let lat: f64 = fields[1].parse().unwrap();
    assert!(lng > 24.0 && lng < 26.0);
    assert!(lat > 59.0 && lat < 61.0);
}

#[test]
fn test_end_to_end_csv_to_csv_preserves_record_order() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "coords.csv",
        "500000.0,6700000.0\n500000.0,7500000.0\n",
    );
    let output = temp_dir.path().join("out.csv");

    run(config(
        input,
        output.to_str().unwrap().to_string(),
        Format::Csv,
        Format::Csv,
    ))
    .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lats: Vec<f64> = content
        .lines()
        .map(|l| l.split(',').nth(1).unwrap().parse().unwrap())
        .collect();
    assert_eq!(lats.len(), 2);
    assert!(lats[0] < lats[1]);
}

#[test]
fn test_out_of_range_record_aborts_batch_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "coords.csv",
        "385211.0,6672241.0\n385211.0,1.0\n",
    );
    let output = temp_dir.path().join("out.csv");

    let result = run(config(
        input,
        output.to_str().unwrap().to_string(),
        Format::Csv,
        Format::Csv,
    ));

    assert!(matches!(result, Err(ConvertError::OutOfRange { .. })));
    assert!(!output.exists());
}

#[test]
fn test_skip_invalid_converts_remaining_records() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "coords.csv",
        "385211.0,6672241.0\n385211.0,1.0\n427465.0,7210700.0\n",
    );
    let output = temp_dir.path().join("out.json");

    let mut cfg = config(
        input,
        output.to_str().unwrap().to_string(),
        Format::Csv,
        Format::Json,
    );
    cfg.skip_invalid = true;

    run(cfg).unwrap();

    let data = std::fs::read(&output).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&data).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn test_malformed_json_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "coords.json", "[{\"x\": }");
    let output = temp_dir.path().join("out.csv");

    let result = run(config(
        input,
        output.to_str().unwrap().to_string(),
        Format::Json,
        Format::Csv,
    ));

    assert!(matches!(result, Err(ConvertError::SerializationError(_))));
}

#[test]
fn test_missing_input_file_fails_with_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.csv");

    let result = run(config(
        temp_dir
            .path()
            .join("does-not-exist.csv")
            .to_str()
            .unwrap()
            .to_string(),
        output.to_str().unwrap().to_string(),
        Format::Csv,
        Format::Csv,
    ));

    assert!(matches!(result, Err(ConvertError::IoError(_))));
}
