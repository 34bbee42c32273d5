//! In-memory project settings snapshot.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PlatformGroup, SettingsStore};
use crate::error::Result;

/// Serializable snapshot of a project's player settings.
///
/// This is the [`SettingsStore`] implementation the CLI and the tests run
/// against: a plain data struct that can be loaded from and saved to a JSON
/// file. In an editor integration the same modifiers would run against a
/// store bridged to the live engine instead.
///
/// # Examples
///
/// ```
/// use buildset::settings::{PlatformGroup, ProjectSettings, SettingsStore};
///
/// let mut settings = ProjectSettings::default();
/// settings.set_application_identifier(PlatformGroup::Android, "com.example.app");
///
/// assert_eq!(
///     settings.application_identifier(PlatformGroup::Android),
///     "com.example.app"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSettings {
    /// Application identifier per platform group.
    ///
    /// Default: empty (no identifiers configured)
    pub application_identifiers: BTreeMap<PlatformGroup, String>,

    /// Human-readable bundle version, shared by all groups.
    ///
    /// Default: "1.0"
    pub bundle_version: String,

    /// Android-only settings.
    pub android: AndroidSettings,

    /// iOS-only settings.
    pub ios: IosSettings,

    /// XR settings.
    pub xr: XrState,

    /// Scripting settings.
    pub scripting: ScriptingState,

    /// Semicolon-joined scripting define symbols per platform group.
    ///
    /// Default: empty
    pub define_symbols: BTreeMap<PlatformGroup, String>,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            application_identifiers: BTreeMap::new(),
            bundle_version: "1.0".to_string(),
            android: AndroidSettings::default(),
            ios: IosSettings::default(),
            xr: XrState::default(),
            scripting: ScriptingState::default(),
            define_symbols: BTreeMap::new(),
        }
    }
}

/// Android-specific settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AndroidSettings {
    /// Integer build counter (versionCode in the manifest).
    ///
    /// Default: 1
    pub bundle_version_code: i32,

    /// Minimum supported SDK level.
    ///
    /// Default: 22
    pub min_sdk_version: i32,

    /// Target SDK level. 0 means "highest installed".
    ///
    /// Default: 0
    pub target_sdk_version: i32,

    /// Keystore file name.
    ///
    /// Default: empty (debug signing)
    pub keystore_name: String,

    /// Keystore password.
    ///
    /// Default: empty
    pub keystore_pass: String,

    /// Key alias name.
    ///
    /// Default: empty
    pub keyalias_name: String,

    /// Key alias password.
    ///
    /// Default: empty
    pub keyalias_pass: String,
}

impl Default for AndroidSettings {
    fn default() -> Self {
        Self {
            bundle_version_code: 1,
            min_sdk_version: 22,
            target_sdk_version: 0,
            keystore_name: String::new(),
            keystore_pass: String::new(),
            keyalias_name: String::new(),
            keyalias_pass: String::new(),
        }
    }
}

/// iOS-specific settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IosSettings {
    /// Free-form build number (CFBundleVersion).
    ///
    /// Default: "0"
    pub build_number: String,
}

impl Default for IosSettings {
    fn default() -> Self {
        Self { build_number: "0".to_string() }
    }
}

/// XR settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XrState {
    /// VR support flag per platform group.
    pub supported: BTreeMap<PlatformGroup, bool>,

    /// Enabled VR devices per platform group, in priority order.
    pub devices: BTreeMap<PlatformGroup, Vec<String>>,

    /// Stereo rendering path name, shared by all groups.
    pub stereo_rendering_path: String,
}

/// Scripting settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptingState {
    /// API compatibility level per platform group.
    pub api_compatibility_levels: BTreeMap<PlatformGroup, String>,

    /// Scripting backend per platform group.
    pub backends: BTreeMap<PlatformGroup, String>,

    /// Scripting runtime version, shared by all groups.
    pub runtime_version: String,
}

impl ProjectSettings {
    /// Loads a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Saves the snapshot to a JSON file, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

impl SettingsStore for ProjectSettings {
    fn application_identifier(&self, group: PlatformGroup) -> String {
        self.application_identifiers.get(&group).cloned().unwrap_or_default()
    }

    fn set_application_identifier(&mut self, group: PlatformGroup, identifier: &str) {
        self.application_identifiers.insert(group, identifier.to_string());
    }

    fn bundle_version(&self) -> String {
        self.bundle_version.clone()
    }

    fn set_bundle_version(&mut self, version: &str) {
        self.bundle_version = version.to_string();
    }

    fn android_bundle_version_code(&self) -> i32 {
        self.android.bundle_version_code
    }

    fn set_android_bundle_version_code(&mut self, code: i32) {
        self.android.bundle_version_code = code;
    }

    fn ios_build_number(&self) -> String {
        self.ios.build_number.clone()
    }

    fn set_ios_build_number(&mut self, number: &str) {
        self.ios.build_number = number.to_string();
    }

    fn android_min_sdk(&self) -> i32 {
        self.android.min_sdk_version
    }

    fn set_android_min_sdk(&mut self, level: i32) {
        self.android.min_sdk_version = level;
    }

    fn android_target_sdk(&self) -> i32 {
        self.android.target_sdk_version
    }

    fn set_android_target_sdk(&mut self, level: i32) {
        self.android.target_sdk_version = level;
    }

    fn android_keystore_name(&self) -> String {
        self.android.keystore_name.clone()
    }

    fn set_android_keystore_name(&mut self, name: &str) {
        self.android.keystore_name = name.to_string();
    }

    fn android_keystore_pass(&self) -> String {
        self.android.keystore_pass.clone()
    }

    fn set_android_keystore_pass(&mut self, pass: &str) {
        self.android.keystore_pass = pass.to_string();
    }

    fn android_keyalias_name(&self) -> String {
        self.android.keyalias_name.clone()
    }

    fn set_android_keyalias_name(&mut self, name: &str) {
        self.android.keyalias_name = name.to_string();
    }

    fn android_keyalias_pass(&self) -> String {
        self.android.keyalias_pass.clone()
    }

    fn set_android_keyalias_pass(&mut self, pass: &str) {
        self.android.keyalias_pass = pass.to_string();
    }

    fn vr_supported(&self, group: PlatformGroup) -> bool {
        self.xr.supported.get(&group).copied().unwrap_or(false)
    }

    fn set_vr_supported(&mut self, group: PlatformGroup, supported: bool) {
        self.xr.supported.insert(group, supported);
    }

    fn vr_devices(&self, group: PlatformGroup) -> Vec<String> {
        self.xr.devices.get(&group).cloned().unwrap_or_default()
    }

    fn set_vr_devices(&mut self, group: PlatformGroup, devices: &[String]) {
        self.xr.devices.insert(group, devices.to_vec());
    }

    fn stereo_rendering_path(&self) -> String {
        self.xr.stereo_rendering_path.clone()
    }

    fn set_stereo_rendering_path(&mut self, path: &str) {
        self.xr.stereo_rendering_path = path.to_string();
    }

    fn api_compatibility_level(&self, group: PlatformGroup) -> String {
        self.scripting.api_compatibility_levels.get(&group).cloned().unwrap_or_default()
    }

    fn set_api_compatibility_level(&mut self, group: PlatformGroup, level: &str) {
        self.scripting.api_compatibility_levels.insert(group, level.to_string());
    }

    fn scripting_backend(&self, group: PlatformGroup) -> String {
        self.scripting.backends.get(&group).cloned().unwrap_or_default()
    }

    fn set_scripting_backend(&mut self, group: PlatformGroup, backend: &str) {
        self.scripting.backends.insert(group, backend.to_string());
    }

    fn scripting_runtime_version(&self) -> String {
        self.scripting.runtime_version.clone()
    }

    fn set_scripting_runtime_version(&mut self, version: &str) {
        self.scripting.runtime_version = version.to_string();
    }

    fn scripting_define_symbols(&self, group: PlatformGroup) -> String {
        self.define_symbols.get(&group).cloned().unwrap_or_default()
    }

    fn set_scripting_define_symbols(&mut self, group: PlatformGroup, symbols: &str) {
        self.define_symbols.insert(group, symbols.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_project_defaults() {
        let settings = ProjectSettings::default();

        assert_eq!(settings.bundle_version(), "1.0");
        assert_eq!(settings.android_bundle_version_code(), 1);
        assert_eq!(settings.ios_build_number(), "0");
        assert_eq!(settings.application_identifier(PlatformGroup::Android), "");
        assert!(!settings.vr_supported(PlatformGroup::Standalone));
    }

    #[test]
    fn identifiers_are_isolated_per_group() {
        let mut settings = ProjectSettings::default();
        settings.set_application_identifier(PlatformGroup::Android, "com.example.droid");
        settings.set_application_identifier(PlatformGroup::Ios, "com.example.ios");

        assert_eq!(settings.application_identifier(PlatformGroup::Android), "com.example.droid");
        assert_eq!(settings.application_identifier(PlatformGroup::Ios), "com.example.ios");
        assert_eq!(settings.application_identifier(PlatformGroup::WebGl), "");
    }

    #[test]
    fn snapshot_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = ProjectSettings::default();
        settings.set_application_identifier(PlatformGroup::Android, "com.example.app");
        settings.set_android_bundle_version_code(7);
        settings.set_vr_devices(PlatformGroup::Android, &["daydream".to_string()]);
        settings.set_scripting_define_symbols(PlatformGroup::Android, "DEBUG;CHEATS");

        settings.save(&path).unwrap();
        let restored = ProjectSettings::load(&path).unwrap();

        assert_eq!(restored, settings);
    }

    #[test]
    fn partial_snapshot_fills_defaults() {
        let settings: ProjectSettings =
            serde_json::from_str(r#"{"bundleVersion": "2.5"}"#).unwrap();

        assert_eq!(settings.bundle_version(), "2.5");
        assert_eq!(settings.android_bundle_version_code(), 1);
        assert_eq!(settings.android_min_sdk(), 22);
    }
}
