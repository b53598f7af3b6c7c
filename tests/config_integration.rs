use basispath::cli::RunArgs;
use basispath::config::HarnessConfig;
use basispath::HarnessError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_file_loading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("harness.json");
    fs::write(
        &path,
        r#"{
            "paths": { "input": "vectors.csv", "report": "out/report.txt" },
            "options": { "strict": true }
        }"#,
    )
    .unwrap();

    let config = HarnessConfig::from_json_file(&path).unwrap();
    assert_eq!(config.paths.input, PathBuf::from("vectors.csv"));
    assert_eq!(config.paths.expected, PathBuf::from("data/expected.csv"));
    assert_eq!(config.paths.report, PathBuf::from("out/report.txt"));
    assert!(config.options.strict);
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("harness.json");
    fs::write(&path, r#"{"paths": {"input": "from_file.csv"}}"#).unwrap();

    let args = RunArgs {
        config: Some(path),
        input: Some(PathBuf::from("from_flag.csv")),
        ..RunArgs::default()
    };
    let config = args.resolve_config().unwrap();
    assert_eq!(config.paths.input, PathBuf::from("from_flag.csv"));
    assert!(!config.options.strict);
}

#[test]
fn test_config_file_errors() {
    let dir = TempDir::new().unwrap();

    let missing = HarnessConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(missing, HarnessError::Io(_)));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "[1, 2").unwrap();
    let err = HarnessConfig::from_json_file(&bad).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_config_modification() {
    let mut config = HarnessConfig::default();
    config.paths.actual = PathBuf::from("elsewhere/actual.csv");
    config.options.summary_json = Some(PathBuf::from("elsewhere/summary.json"));
    assert!(config.validate().is_ok());

    config.paths.input = PathBuf::new();
    assert!(config.validate().is_err());
}
