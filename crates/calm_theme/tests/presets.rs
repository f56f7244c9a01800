use calm_theme::{CanvasPalette, ThemePreset, CANVAS_BACKGROUND};
use serde::Deserialize;

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["forest", "mono", "neon", "ocean", "sunset"]);
}

#[test]
fn every_preset_has_distinct_accent_and_secondary() {
    for preset in ThemePreset::all() {
        let palette = preset.palette();
        assert_ne!(
            palette.accent, palette.secondary,
            "Preset {:?} should have two distinct tones",
            preset
        );
        assert_eq!(palette.background, CANVAS_BACKGROUND);
        assert_eq!(palette.accent.a, 1.0);
    }
}

#[test]
fn ocean_matches_the_default_palette() {
    assert_eq!(ThemePreset::Ocean.palette(), CanvasPalette::default());
    assert_eq!(
        ThemePreset::Ocean.palette().secondary.to_rgba8(),
        [58, 143, 183, 255]
    );
}

#[derive(Deserialize)]
struct ProfileRecord {
    name: String,
    theme: ThemePreset,
}

#[test]
fn profile_records_deserialize_theme_ids() {
    let raw = r#"[
        {"id": "lx3k2a9f1", "name": "Sam", "icon": "wave", "theme": "neon"},
        {"id": "lx3k2b0c7", "name": "Ari", "icon": "moon", "theme": "forest"},
        {"id": "lx3k2c4d2", "name": "Jo", "icon": "star", "theme": "lava"}
    ]"#;

    let profiles: Vec<ProfileRecord> = serde_json::from_str(raw).unwrap();
    assert_eq!(profiles[0].name, "Sam");
    assert_eq!(profiles[0].theme, ThemePreset::Neon);
    assert_eq!(profiles[1].theme, ThemePreset::Forest);
    // Ids from older builds decode as the default theme
    assert_eq!(profiles[2].name, "Jo");
    assert_eq!(profiles[2].theme, ThemePreset::Ocean);
    assert_eq!(
        serde_json::to_string(&ThemePreset::Sunset).unwrap(),
        "\"sunset\""
    );
}

#[test]
fn palette_from_hex_matches_preset() {
    let (accent, secondary) = ThemePreset::Mono.hex_pair();
    assert_eq!(
        CanvasPalette::from_hex(accent, secondary).unwrap(),
        ThemePreset::Mono.palette()
    );
}
