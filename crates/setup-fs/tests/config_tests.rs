use rstest::rstest;
use serde::{Deserialize, Serialize};
use setup_fs::{ConfigStore, Error, NormalizedPath};
use tempfile::TempDir;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
    infrastructure: String,
}

fn sample() -> Sample {
    Sample {
        name: "demo".into(),
        infrastructure: "AWS CDK".into(),
    }
}

#[rstest]
#[case("config.json")]
#[case("config.toml")]
#[case("config.yaml")]
#[case("config.yml")]
fn test_save_then_load_by_extension(#[case] file: &str) {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join(file));
    let store = ConfigStore::new();

    store.save(&path, &sample()).unwrap();
    let loaded: Sample = store.load(&path).unwrap();

    assert_eq!(loaded, sample());
}

#[test]
fn test_json_is_two_space_indented() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("config.json"));

    ConfigStore::new().save(&path, &sample()).unwrap();

    let content = std::fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(
        content,
        "{\n  \"name\": \"demo\",\n  \"infrastructure\": \"AWS CDK\"\n}"
    );
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("config.ini"));

    let err = ConfigStore::new().save(&path, &sample()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "ini"));
}

#[test]
fn test_parse_error_names_format() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("broken.json"));
    std::fs::write(path.to_native(), "{ not json").unwrap();

    let err = ConfigStore::new().load::<Sample>(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { ref format, .. } if format == "JSON"));
}
