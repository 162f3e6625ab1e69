use draw_together::draw::{CaptureMode, Color};
use draw_together::settings::Settings;
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load(dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn empty_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "  \n").unwrap();
    assert_eq!(Settings::load(&path).unwrap(), Settings::default());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = Settings::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("deserialize settings file"));
}

#[test]
fn saved_settings_load_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        default_color: Color::BLUE,
        default_thickness: 4.0,
        clamp_thickness: true,
        capture_mode: CaptureMode::LivePreview,
        ..Settings::default()
    };
    settings.save(&path).unwrap();
    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.tool_settings().color, Color::BLUE);
    assert_eq!(loaded.tool_settings().thickness, 4.0);
}

#[test]
fn unusable_toast_duration_loads_as_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    for raw in ["-1.0", "0", "1e300"] {
        std::fs::write(&path, format!(r#"{{"toast_duration": {raw}}}"#)).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert!(loaded.toast_duration > 0.0 && loaded.toast_duration <= 600.0);
    }
}
