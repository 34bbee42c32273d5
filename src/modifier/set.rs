//! Modifier family orchestration.

use crate::config::ConfigDict;
use crate::error::Result;
use crate::profile::BuildProfile;
use crate::settings::{PlatformGroup, SettingsStore};

use super::{AndroidSdk, Defines, Identification, Keystore, Modifier, Scripting, Xr};

/// An ordered, heterogeneous family of modifiers driven uniformly.
///
/// Built either from a profile (one modifier per present section, reloaded
/// from it) or by snapshotting a settings store. Application order is fixed
/// regardless of how the profile orders its sections.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use buildset::modifier::ModifierSet;
/// use buildset::profile::BuildProfile;
/// use buildset::settings::ProjectSettings;
///
/// # fn example() -> buildset::Result<()> {
/// let profile = BuildProfile::load(Path::new("profiles/release.json"))?;
/// let modifiers = ModifierSet::from_profile(&profile)?;
///
/// let mut settings = ProjectSettings::default();
/// modifiers.apply(&mut settings);
/// println!("{}", modifiers.config_text());
/// # Ok(())
/// # }
/// ```
pub struct ModifierSet {
    target_group: PlatformGroup,
    entries: Vec<(&'static str, Box<dyn Modifier>)>,
}

impl std::fmt::Debug for ModifierSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModifierSet")
            .field("target_group", &self.target_group)
            .field(
                "entries",
                &self.entries.iter().map(|(key, _)| *key).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ModifierSet {
    /// Builds the family from a profile's sections.
    ///
    /// # Errors
    ///
    /// Propagates the first reload error, naming the offending key.
    pub fn from_profile(profile: &BuildProfile) -> Result<Self> {
        let group = profile.build.target_group;
        let mut entries: Vec<(&'static str, Box<dyn Modifier>)> = Vec::new();

        if let Some(dict) = &profile.identification {
            entries.push(("identification", reloaded(Identification::new(group), dict)?));
        }
        if let Some(dict) = &profile.xr {
            entries.push(("xr", reloaded(Xr::new(group), dict)?));
        }
        if let Some(dict) = &profile.android_sdk {
            entries.push(("androidSdk", reloaded(AndroidSdk::new(group), dict)?));
        }
        if let Some(dict) = &profile.keystore {
            entries.push(("keystore", reloaded(Keystore::new(group), dict)?));
        }
        if let Some(dict) = &profile.scripting {
            entries.push(("scripting", reloaded(Scripting::new(group), dict)?));
        }
        if let Some(dict) = &profile.defines {
            entries.push(("defines", reloaded(Defines::new(group), dict)?));
        }

        Ok(Self { target_group: group, entries })
    }

    /// Snapshots every modifier in the family from the store.
    pub fn capture(group: PlatformGroup, store: &dyn SettingsStore) -> Self {
        let entries: Vec<(&'static str, Box<dyn Modifier>)> = vec![
            ("identification", Box::new(Identification::capture(group, store))),
            ("xr", Box::new(Xr::capture(group, store))),
            ("androidSdk", Box::new(AndroidSdk::capture(group, store))),
            ("keystore", Box::new(Keystore::capture(group, store))),
            ("scripting", Box::new(Scripting::capture(group, store))),
            ("defines", Box::new(Defines::capture(group, store))),
        ];

        Self { target_group: group, entries }
    }

    /// The target group every member governs.
    pub fn target_group(&self) -> PlatformGroup {
        self.target_group
    }

    /// Section names of the members, in apply order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the family is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies every member to the store, in order.
    pub fn apply(&self, store: &mut dyn SettingsStore) {
        for (name, modifier) in &self.entries {
            log::debug!("applying {} settings for {}", name, self.target_group);
            modifier.apply(store);
        }
    }

    /// One labelled description line per member.
    pub fn config_text(&self) -> String {
        self.entries
            .iter()
            .map(|(name, modifier)| format!("{}: {}", name, modifier.config_text()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn reloaded<M: Modifier + 'static>(
    mut modifier: M,
    section: &ConfigDict,
) -> Result<Box<dyn Modifier>> {
    modifier.reload(section)?;
    Ok(Box::new(modifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ProjectSettings;

    fn profile(json: &str) -> BuildProfile {
        serde_json::from_str(json).expect("test profile parses")
    }

    const BASE: &str = r#"{
        "editorPath": "/opt/editor",
        "projectPath": "game",
        "buildBasePath": "builds",
        "buildPath": "out",
        "method": "Builder.Run",
        "build": {"targetGroup": "android", "target": "android"},
        "defines": {"symbols": ["CI"]},
        "identification": {
            "packageName": "com.example.app",
            "versionName": "1.0",
            "versionCode": "3"
        }
    }"#;

    #[test]
    fn members_follow_fixed_order_not_profile_order() {
        // BASE lists defines before identification
        let set = ModifierSet::from_profile(&profile(BASE)).unwrap();

        assert_eq!(set.names(), vec!["identification", "defines"]);
        assert_eq!(set.target_group(), PlatformGroup::Android);
    }

    #[test]
    fn absent_sections_produce_no_members() {
        let minimal = r#"{
            "editorPath": "/opt/editor",
            "projectPath": "game",
            "buildBasePath": "builds",
            "buildPath": "out",
            "method": "Builder.Run",
            "build": {"targetGroup": "ios", "target": "ios"}
        }"#;

        let set = ModifierSet::from_profile(&profile(minimal)).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn apply_writes_every_member() {
        let set = ModifierSet::from_profile(&profile(BASE)).unwrap();
        let mut settings = ProjectSettings::default();

        set.apply(&mut settings);

        assert_eq!(
            settings.application_identifier(PlatformGroup::Android),
            "com.example.app"
        );
        assert_eq!(settings.android.bundle_version_code, 3);
        assert_eq!(settings.scripting_define_symbols(PlatformGroup::Android), "CI");
    }

    #[test]
    fn config_text_labels_each_member() {
        let set = ModifierSet::from_profile(&profile(BASE)).unwrap();

        assert_eq!(
            set.config_text(),
            "identification: packageName=com.example.app, versionName=1.0, versionCode=3, \n\
             defines: defines=CI, "
        );
    }

    #[test]
    fn reload_error_aborts_construction() {
        let broken = BASE.replace(r#""versionCode": "3""#, r#""versionCode": 3"#);
        let err = ModifierSet::from_profile(&profile(&broken)).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("versionCode"));
        assert!(message.contains("expected string"));
    }

    #[test]
    fn capture_snapshots_the_whole_family() {
        let mut settings = ProjectSettings::default();
        settings.set_application_identifier(PlatformGroup::Ios, "com.example.app");
        settings.ios.build_number = "77".to_string();

        let set = ModifierSet::capture(PlatformGroup::Ios, &settings);

        assert_eq!(set.len(), 6);
        assert!(set.config_text().contains("versionCode=77, "));
    }

    #[test]
    fn captured_family_reapplies_without_drift() {
        let mut settings = ProjectSettings::default();
        settings.set_application_identifier(PlatformGroup::Android, "com.example.app");
        settings.android.bundle_version_code = 9;
        settings.set_scripting_define_symbols(PlatformGroup::Android, "A;B");

        // first cycle gives every channel an explicit entry
        let seed = ModifierSet::capture(PlatformGroup::Android, &settings);
        seed.apply(&mut settings);
        let before = settings.clone();

        ModifierSet::capture(PlatformGroup::Android, &settings).apply(&mut settings);

        assert_eq!(settings, before);
    }
}
