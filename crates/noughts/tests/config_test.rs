//! Tests for TOML configuration loading.

use noughts::AppConfig;
use noughts_core::Mark;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.title(), "Tic Tac Toe");
    assert_eq!(*config.cell_size(), 100.0);
    assert_eq!(*config.seed(), None);
    assert_eq!(*config.human_mark(), Mark::X);
    assert_eq!(config.restart_key().unwrap(), egui::Key::Enter);
    assert_eq!(config.window_size(), 300.0);
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = AppConfig::from_toml("").unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_full_document() {
    let config = AppConfig::from_toml(
        r#"
        title = "Noughts"
        cell_size = 120.0
        seed = 42
        human_mark = "O"
        restart_key = "Space"
        "#,
    )
    .unwrap();

    assert_eq!(config.title(), "Noughts");
    assert_eq!(*config.cell_size(), 120.0);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(*config.human_mark(), Mark::O);
    assert_eq!(config.restart_key_name(), "Space");
    assert_eq!(config.restart_key().unwrap(), egui::Key::Space);
}

#[test]
fn test_rejects_out_of_range_cell_size() {
    let err = AppConfig::from_toml("cell_size = 5.0").unwrap_err();
    assert!(err.message.contains("cell_size"));
    assert!(AppConfig::from_toml("cell_size = 1000.0").is_err());
}

#[test]
fn test_rejects_unknown_restart_key() {
    let err = AppConfig::from_toml(r#"restart_key = "NotAKey""#).unwrap_err();
    assert!(err.message.contains("NotAKey"));
}

#[test]
fn test_rejects_bad_mark() {
    assert!(AppConfig::from_toml(r#"human_mark = "Z""#).is_err());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 7").unwrap();
    writeln!(file, "cell_size = 80.0").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(config.window_size(), 240.0);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(AppConfig::from_file(&path).is_err());
    assert_eq!(AppConfig::load_or_default(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_overrides_win_and_are_validated() {
    let config = AppConfig::default()
        .with_overrides(Some(3), Some(60.0), Some(Mark::O))
        .unwrap();
    assert_eq!(*config.seed(), Some(3));
    assert_eq!(*config.cell_size(), 60.0);
    assert_eq!(*config.human_mark(), Mark::O);

    let kept = AppConfig::from_toml("seed = 9").unwrap().with_overrides(None, None, None).unwrap();
    assert_eq!(*kept.seed(), Some(9));

    assert!(AppConfig::default().with_overrides(None, Some(0.0), None).is_err());
}
