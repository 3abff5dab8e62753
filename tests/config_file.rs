// tests/config_file.rs
use std::io::Write;

use edux_status::Error;
use edux_status::config::options::FetchConfig;

#[test]
fn loads_partial_toml_over_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "base_url = \"http://127.0.0.1:9000/\"").unwrap();
    writeln!(file, "username = \"novakj\"").unwrap();
    writeln!(file, "workers = 1").unwrap();

    let cfg = FetchConfig::load(file.path()).unwrap();
    assert_eq!(cfg.username.as_deref(), Some("novakj"));
    assert_eq!(cfg.workers, 1);
    assert_eq!(cfg.timeout_secs, FetchConfig::default().timeout_secs);
    assert_eq!(cfg.url("/start"), "http://127.0.0.1:9000/start");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FetchConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
