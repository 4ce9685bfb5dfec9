use zoomslider_core::settings::{Settings, SizingPolicy};
use zoomslider_core::sizing::{aspect_locked_width, display_size, raster_grid, DisplaySize};

fn independent(width: i32, height: i32) -> Settings {
    Settings {
        sizing: SizingPolicy::IndependentDimensions,
        display_width: width,
        display_height: height,
        raster_resolution: None,
    }
}

// ---------------------------------------------------------------------------
// Aspect-locked sizing
// ---------------------------------------------------------------------------

#[test]
fn test_aspect_locked_width_portrait() {
    // Source shape (200, 100), display height 650.
    assert_eq!(aspect_locked_width(650, 200, 100), 325);
}

#[test]
fn test_aspect_locked_width_rounds_to_nearest() {
    // 650 * 300 / 700 = 278.57...
    assert_eq!(aspect_locked_width(650, 700, 300), 279);
    // 100 * 1 / 3 = 33.33...
    assert_eq!(aspect_locked_width(100, 3, 1), 33);
}

#[test]
fn test_aspect_locked_display_size() {
    let settings = Settings {
        display_height: 650,
        ..Settings::default()
    };
    assert_eq!(display_size(&settings, 200, 100), DisplaySize::new(325, 650));
    assert_eq!(display_size(&settings, 100, 300), DisplaySize::new(1950, 650));
}

#[test]
fn test_aspect_locked_ignores_display_width() {
    let settings = Settings {
        display_width: 12,
        ..Settings::default()
    };
    assert_eq!(display_size(&settings, 100, 100), DisplaySize::new(650, 650));
}

// ---------------------------------------------------------------------------
// Independent sizing
// ---------------------------------------------------------------------------

#[test]
fn test_independent_size_ignores_source_aspect() {
    let settings = independent(800, 400);
    for (h, w) in [(200, 100), (100, 500), (1, 1), (4000, 3000)] {
        assert_eq!(display_size(&settings, h, w), DisplaySize::new(800, 400));
    }
}

// ---------------------------------------------------------------------------
// Unvalidated settings
// ---------------------------------------------------------------------------

#[test]
fn test_zero_height_gives_empty_view() {
    let settings = Settings {
        display_height: 0,
        ..Settings::default()
    };
    let size = display_size(&settings, 200, 100);
    assert_eq!(size, DisplaySize::new(0, 0));
    assert!(size.is_empty());
    assert_eq!(size.pixels(), (0, 0));
}

#[test]
fn test_negative_height_passes_through() {
    let settings = Settings {
        display_height: -10,
        ..Settings::default()
    };
    let size = display_size(&settings, 200, 100);
    assert_eq!(size, DisplaySize::new(-5, -10));
    assert_eq!(size.pixels(), (0, 0));
}

#[test]
fn test_display_size_formatting() {
    assert_eq!(DisplaySize::new(325, 650).to_string(), "325x650");
}

// ---------------------------------------------------------------------------
// Raster grid
// ---------------------------------------------------------------------------

#[test]
fn test_raster_grid_none_keeps_source() {
    assert_eq!(raster_grid(None, 400, 200), (400, 200));
}

#[test]
fn test_raster_grid_caps_longer_axis() {
    assert_eq!(raster_grid(Some(100), 400, 200), (100, 50));
    assert_eq!(raster_grid(Some(100), 200, 400), (50, 100));
}

#[test]
fn test_raster_grid_never_upsamples() {
    assert_eq!(raster_grid(Some(1000), 400, 200), (400, 200));
}

#[test]
fn test_raster_grid_non_positive_resolution_collapses_to_one() {
    assert_eq!(raster_grid(Some(0), 10, 20), (1, 1));
    assert_eq!(raster_grid(Some(-5), 10, 20), (1, 1));
}
