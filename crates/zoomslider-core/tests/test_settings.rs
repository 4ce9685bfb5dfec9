use zoomslider_core::consts::{DEFAULT_DISPLAY_HEIGHT, DEFAULT_RASTER_RESOLUTION};
use zoomslider_core::error::ZoomSliderError;
use zoomslider_core::settings::{Settings, SizingPolicy};

#[test]
fn test_settings_defaults() {
    let s = Settings::default();
    assert_eq!(s.sizing, SizingPolicy::AspectLocked);
    assert_eq!(s.display_height, DEFAULT_DISPLAY_HEIGHT);
    assert_eq!(s.display_height, 650);
    assert_eq!(s.raster_resolution, None);
}

#[test]
fn test_independent_defaults() {
    let s = Settings::independent();
    assert_eq!(s.sizing, SizingPolicy::IndependentDimensions);
    assert_eq!(s.raster_resolution, Some(DEFAULT_RASTER_RESOLUTION));
    assert_eq!(s.display_height, 650);
}

#[test]
fn test_sizing_policy_display() {
    assert_eq!(SizingPolicy::AspectLocked.to_string(), "Aspect locked");
    assert_eq!(
        SizingPolicy::IndependentDimensions.to_string(),
        "Independent dimensions"
    );
}

#[test]
fn test_partial_toml_fills_defaults() {
    let s = Settings::from_toml_str("display_height = 400").unwrap();
    assert_eq!(s.display_height, 400);
    assert_eq!(s.sizing, SizingPolicy::AspectLocked);
    assert_eq!(s.display_width, Settings::default().display_width);
}

#[test]
fn test_full_toml() {
    let s = Settings::from_toml_str(
        r#"
sizing = "IndependentDimensions"
display_height = 300
display_width = 900
raster_resolution = 200
"#,
    )
    .unwrap();
    assert_eq!(
        s,
        Settings {
            sizing: SizingPolicy::IndependentDimensions,
            display_height: 300,
            display_width: 900,
            raster_resolution: Some(200),
        }
    );
}

#[test]
fn test_negative_values_are_accepted() {
    let s = Settings::from_toml_str("display_height = -5").unwrap();
    assert_eq!(s.display_height, -5);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = Settings::from_toml_str("display_height = \"tall\"").unwrap_err();
    assert!(matches!(err, ZoomSliderError::Config(_)));
}

#[test]
fn test_toml_written_by_settings_reads_back() {
    let s = Settings::independent();
    let text = s.to_toml_string().unwrap();
    assert!(text.contains("IndependentDimensions"), "got: {text}");
    assert_eq!(Settings::from_toml_str(&text).unwrap(), s);
}

#[test]
fn test_load_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "display_height = 512\n").unwrap();

    let s = Settings::load(&path).unwrap();
    assert_eq!(s.display_height, 512);
}

#[test]
fn test_load_missing_settings_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ZoomSliderError::Io(_)));
}
