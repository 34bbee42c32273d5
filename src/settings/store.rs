//! Abstraction over the engine's global player settings.

use super::PlatformGroup;

/// Facade over the engine's process-wide build settings.
///
/// Modifiers read and write through this trait instead of touching the
/// engine directly, so the same apply/capture code runs against a live
/// editor bridge or against the in-memory [`ProjectSettings`] snapshot used
/// by the CLI and the tests.
///
/// Every operation is a plain synchronous field access and is infallible by
/// contract: a store implementation that can fail underneath (IPC, disk) is
/// expected to surface that on its own channel, not through this trait.
///
/// [`ProjectSettings`]: super::ProjectSettings
pub trait SettingsStore {
    // Application identity

    /// Application (bundle/package) identifier for a platform group.
    fn application_identifier(&self, group: PlatformGroup) -> String;

    /// Sets the application identifier for a platform group.
    fn set_application_identifier(&mut self, group: PlatformGroup, identifier: &str);

    /// Human-readable bundle version string, shared by all groups.
    fn bundle_version(&self) -> String;

    /// Sets the bundle version string.
    fn set_bundle_version(&mut self, version: &str);

    /// Android integer bundle-version-code.
    fn android_bundle_version_code(&self) -> i32;

    /// Sets the Android bundle-version-code.
    fn set_android_bundle_version_code(&mut self, code: i32);

    /// iOS build-number string.
    fn ios_build_number(&self) -> String;

    /// Sets the iOS build-number.
    fn set_ios_build_number(&mut self, number: &str);

    // Android SDK levels

    /// Minimum Android SDK level.
    fn android_min_sdk(&self) -> i32;

    /// Sets the minimum Android SDK level.
    fn set_android_min_sdk(&mut self, level: i32);

    /// Target Android SDK level.
    fn android_target_sdk(&self) -> i32;

    /// Sets the target Android SDK level.
    fn set_android_target_sdk(&mut self, level: i32);

    // Android signing

    /// Android keystore file name.
    fn android_keystore_name(&self) -> String;

    /// Sets the Android keystore file name.
    fn set_android_keystore_name(&mut self, name: &str);

    /// Android keystore password.
    fn android_keystore_pass(&self) -> String;

    /// Sets the Android keystore password.
    fn set_android_keystore_pass(&mut self, pass: &str);

    /// Android key alias name.
    fn android_keyalias_name(&self) -> String;

    /// Sets the Android key alias name.
    fn set_android_keyalias_name(&mut self, name: &str);

    /// Android key alias password.
    fn android_keyalias_pass(&self) -> String;

    /// Sets the Android key alias password.
    fn set_android_keyalias_pass(&mut self, pass: &str);

    // XR

    /// Whether VR support is enabled for a platform group.
    fn vr_supported(&self, group: PlatformGroup) -> bool;

    /// Enables or disables VR support for a platform group.
    fn set_vr_supported(&mut self, group: PlatformGroup, supported: bool);

    /// Enabled VR device names for a platform group, in priority order.
    fn vr_devices(&self, group: PlatformGroup) -> Vec<String>;

    /// Sets the enabled VR device list for a platform group.
    fn set_vr_devices(&mut self, group: PlatformGroup, devices: &[String]);

    /// Stereo rendering path name, shared by all groups.
    fn stereo_rendering_path(&self) -> String;

    /// Sets the stereo rendering path.
    fn set_stereo_rendering_path(&mut self, path: &str);

    // Scripting

    /// API compatibility level for a platform group.
    fn api_compatibility_level(&self, group: PlatformGroup) -> String;

    /// Sets the API compatibility level for a platform group.
    fn set_api_compatibility_level(&mut self, group: PlatformGroup, level: &str);

    /// Scripting backend name for a platform group.
    fn scripting_backend(&self, group: PlatformGroup) -> String;

    /// Sets the scripting backend for a platform group.
    fn set_scripting_backend(&mut self, group: PlatformGroup, backend: &str);

    /// Scripting runtime version, shared by all groups.
    fn scripting_runtime_version(&self) -> String;

    /// Sets the scripting runtime version.
    fn set_scripting_runtime_version(&mut self, version: &str);

    // Defines

    /// Semicolon-joined scripting define symbols for a platform group.
    fn scripting_define_symbols(&self, group: PlatformGroup) -> String;

    /// Sets the semicolon-joined scripting define symbols for a group.
    fn set_scripting_define_symbols(&mut self, group: PlatformGroup, symbols: &str);
}
