//! Profile -> apply -> capture round trips through the public API.

use std::path::Path;

use buildset::modifier::{Identification, Modifier, ModifierSet};
use buildset::profile::BuildProfile;
use buildset::settings::{PlatformGroup, ProjectSettings, SettingsStore};

fn fixture() -> BuildProfile {
    BuildProfile::load(Path::new("tests/fixtures/android-release.json")).expect("fixture loads")
}

#[test]
fn profile_settings_survive_apply_and_capture() {
    let modifiers = ModifierSet::from_profile(&fixture()).unwrap();

    let mut settings = ProjectSettings::default();
    modifiers.apply(&mut settings);

    assert_eq!(settings.application_identifier(PlatformGroup::Android), "com.a.b");
    assert_eq!(settings.bundle_version(), "1.0");
    assert_eq!(settings.android_bundle_version_code(), 3);
    assert_eq!(settings.android_min_sdk(), 21);
    assert_eq!(settings.android_target_sdk(), 33);
    assert_eq!(settings.android_keystore_name(), "release.keystore");
    assert_eq!(
        settings.scripting_define_symbols(PlatformGroup::Android),
        "RELEASE;NO_CHEATS"
    );

    let identity = Identification::capture(PlatformGroup::Android, &settings);
    assert_eq!(
        identity.config_text(),
        "packageName=com.a.b, versionName=1.0, versionCode=3, "
    );
}

#[test]
fn applying_a_captured_family_changes_nothing() {
    let modifiers = ModifierSet::from_profile(&fixture()).unwrap();

    let mut settings = ProjectSettings::default();
    modifiers.apply(&mut settings);
    let before = settings.clone();

    let captured = ModifierSet::capture(PlatformGroup::Android, &settings);
    captured.apply(&mut settings);

    assert_eq!(settings, before);
}

#[test]
fn snapshot_file_round_trips_the_applied_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let modifiers = ModifierSet::from_profile(&fixture()).unwrap();
    let mut settings = ProjectSettings::default();
    modifiers.apply(&mut settings);
    settings.save(&path).unwrap();

    let restored = ProjectSettings::load(&path).unwrap();
    assert_eq!(restored, settings);
}

#[test]
fn rendered_build_path_carries_the_profile_name() {
    let profile = fixture();
    let build_path = profile.resolved_build_path().unwrap();

    let leaf = build_path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(leaf.starts_with("android-release_"));
    assert!(build_path.is_absolute());
}
