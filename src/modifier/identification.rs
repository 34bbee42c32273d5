//! Application identity settings.

use crate::config::ConfigDict;
use crate::error::Result;
use crate::settings::{PlatformGroup, SettingsStore};

use super::Modifier;

/// Package identifier, version name, and version/build code for one target
/// group.
///
/// The version code is a platform-specific channel: on Android it is the
/// integer bundle-version-code rendered as a decimal string, on iOS the
/// free-form build-number string, and on every other group it stays empty
/// and is never written back.
///
/// # Examples
///
/// ```
/// use buildset::modifier::Identification;
/// use buildset::settings::{PlatformGroup, ProjectSettings};
///
/// let settings = ProjectSettings::default();
/// let identity = Identification::capture(PlatformGroup::Android, &settings);
///
/// assert_eq!(identity.version_code(), "1");
/// ```
#[derive(Debug, Clone)]
pub struct Identification {
    target_group: PlatformGroup,

    package_name: String,
    version_name: String,
    // android: version code, ios: build number
    version_code: String,
}

impl Identification {
    /// Creates an empty instance for the given target group.
    pub fn new(target_group: PlatformGroup) -> Self {
        Self {
            target_group,
            package_name: String::new(),
            version_name: String::new(),
            version_code: String::new(),
        }
    }

    /// Snapshots the identity fields currently held by the store.
    pub fn capture(target_group: PlatformGroup, store: &dyn SettingsStore) -> Self {
        let version_code = match target_group {
            PlatformGroup::Android => store.android_bundle_version_code().to_string(),
            PlatformGroup::Ios => store.ios_build_number(),
            _ => String::new(),
        };

        Self {
            target_group,
            package_name: store.application_identifier(target_group),
            version_name: store.bundle_version(),
            version_code,
        }
    }

    /// The target group this instance governs.
    pub fn target_group(&self) -> PlatformGroup {
        self.target_group
    }

    /// The application package/bundle identifier.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// The human-readable version string.
    pub fn version_name(&self) -> &str {
        &self.version_name
    }

    /// The platform-specific version/build code.
    pub fn version_code(&self) -> &str {
        &self.version_code
    }
}

impl Modifier for Identification {
    fn reload(&mut self, dict: &ConfigDict) -> Result<()> {
        self.package_name = dict.get("packageName")?;
        self.version_name = dict.get("versionName")?;
        self.version_code = dict.get("versionCode")?;
        Ok(())
    }

    fn apply(&self, store: &mut dyn SettingsStore) {
        store.set_application_identifier(self.target_group, &self.package_name);
        store.set_bundle_version(&self.version_name);

        match self.target_group {
            PlatformGroup::Android => {
                // An unparsable version code is written as 0.
                let code = self.version_code.parse().unwrap_or(0);
                store.set_android_bundle_version_code(code);
            }
            PlatformGroup::Ios => store.set_ios_build_number(&self.version_code),
            _ => {}
        }
    }

    fn config_text(&self) -> String {
        format!(
            "packageName={}, versionName={}, versionCode={}, ",
            self.package_name, self.version_name, self.version_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigValue;
    use crate::settings::ProjectSettings;

    fn identity_dict(package: &str, version: &str, code: &str) -> ConfigDict {
        let mut dict = ConfigDict::new();
        dict.insert("packageName", ConfigValue::Str(package.to_string()));
        dict.insert("versionName", ConfigValue::Str(version.to_string()));
        dict.insert("versionCode", ConfigValue::Str(code.to_string()));
        dict
    }

    #[test]
    fn config_text_matches_fixed_format() {
        let mut identity = Identification::new(PlatformGroup::Android);
        identity.reload(&identity_dict("com.a.b", "1.0", "3")).unwrap();

        assert_eq!(
            identity.config_text(),
            "packageName=com.a.b, versionName=1.0, versionCode=3, "
        );
    }

    #[test]
    fn reload_round_trips_into_config_text() {
        let mut identity = Identification::new(PlatformGroup::Ios);
        identity.reload(&identity_dict("jp.example.game", "0.9.1", "2020.1-beta")).unwrap();

        let text = identity.config_text();
        assert!(text.contains("packageName=jp.example.game, "));
        assert!(text.contains("versionName=0.9.1, "));
        assert!(text.ends_with("versionCode=2020.1-beta, "));
    }

    #[test]
    fn reload_reports_missing_key() {
        let mut dict = ConfigDict::new();
        dict.insert("packageName", ConfigValue::Str("com.a.b".to_string()));

        let mut identity = Identification::new(PlatformGroup::Android);
        let err = identity.reload(&dict).unwrap_err();
        assert!(err.to_string().contains("versionName"));
    }

    #[test]
    fn reload_does_not_change_target_group() {
        let mut identity = Identification::new(PlatformGroup::WebGl);
        identity.reload(&identity_dict("com.a.b", "1.0", "3")).unwrap();

        assert_eq!(identity.target_group(), PlatformGroup::WebGl);
    }

    #[test]
    fn android_apply_parses_version_code() {
        let mut settings = ProjectSettings::default();
        let mut identity = Identification::new(PlatformGroup::Android);

        identity.reload(&identity_dict("com.a.b", "1.0", "42")).unwrap();
        identity.apply(&mut settings);
        assert_eq!(settings.android.bundle_version_code, 42);

        identity.reload(&identity_dict("com.a.b", "1.0", "abc")).unwrap();
        identity.apply(&mut settings);
        assert_eq!(settings.android.bundle_version_code, 0);

        identity.reload(&identity_dict("com.a.b", "1.0", "")).unwrap();
        identity.apply(&mut settings);
        assert_eq!(settings.android.bundle_version_code, 0);
    }

    #[test]
    fn ios_apply_writes_build_number_verbatim() {
        let mut settings = ProjectSettings::default();
        let mut identity = Identification::new(PlatformGroup::Ios);

        for code in ["", "abc", "1.2.3", "2020.1-beta"] {
            identity.reload(&identity_dict("com.a.b", "1.0", code)).unwrap();
            identity.apply(&mut settings);
            assert_eq!(settings.ios.build_number, code);
        }
    }

    #[test]
    fn other_groups_have_no_version_code_channel() {
        let mut settings = ProjectSettings::default();
        settings.android.bundle_version_code = 42;
        settings.ios.build_number = "9".to_string();

        let captured = Identification::capture(PlatformGroup::Standalone, &settings);
        assert_eq!(captured.version_code(), "");

        let mut identity = Identification::new(PlatformGroup::Standalone);
        identity.reload(&identity_dict("com.a.b", "1.0", "7")).unwrap();
        identity.apply(&mut settings);

        assert_eq!(settings.android.bundle_version_code, 42);
        assert_eq!(settings.ios.build_number, "9");
    }

    #[test]
    fn android_capture_then_apply_is_idempotent() {
        let mut settings = ProjectSettings::default();
        settings.set_application_identifier(PlatformGroup::Android, "com.example.app");
        settings.bundle_version = "3.1".to_string();
        settings.android.bundle_version_code = 1234;
        let before = settings.clone();

        let captured = Identification::capture(PlatformGroup::Android, &settings);
        captured.apply(&mut settings);

        assert_eq!(settings, before);
    }
}
