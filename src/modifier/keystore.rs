//! Android signing keystore settings.

use crate::config::ConfigDict;
use crate::error::Result;
use crate::settings::{PlatformGroup, SettingsStore};

use super::Modifier;

/// Keystore and key alias credentials for Android signing.
///
/// Android-only, like [`AndroidSdk`](super::AndroidSdk). The passwords are
/// carried and applied but never included in `config_text`.
#[derive(Debug, Clone)]
pub struct Keystore {
    target_group: PlatformGroup,

    keystore_name: String,
    keystore_pass: String,
    keyalias_name: String,
    keyalias_pass: String,
}

impl Keystore {
    /// Creates an empty instance for the given target group.
    pub fn new(target_group: PlatformGroup) -> Self {
        Self {
            target_group,
            keystore_name: String::new(),
            keystore_pass: String::new(),
            keyalias_name: String::new(),
            keyalias_pass: String::new(),
        }
    }

    /// Snapshots the signing settings currently held by the store.
    pub fn capture(target_group: PlatformGroup, store: &dyn SettingsStore) -> Self {
        Self {
            target_group,
            keystore_name: store.android_keystore_name(),
            keystore_pass: store.android_keystore_pass(),
            keyalias_name: store.android_keyalias_name(),
            keyalias_pass: store.android_keyalias_pass(),
        }
    }
}

impl Modifier for Keystore {
    fn reload(&mut self, dict: &ConfigDict) -> Result<()> {
        self.keystore_name = dict.get("keystoreName")?;
        self.keystore_pass = dict.get("keystorePass")?;
        self.keyalias_name = dict.get("keyaliasName")?;
        self.keyalias_pass = dict.get("keyaliasPass")?;
        Ok(())
    }

    fn apply(&self, store: &mut dyn SettingsStore) {
        if self.target_group == PlatformGroup::Android {
            store.set_android_keystore_name(&self.keystore_name);
            store.set_android_keystore_pass(&self.keystore_pass);
            store.set_android_keyalias_name(&self.keyalias_name);
            store.set_android_keyalias_pass(&self.keyalias_pass);
        }
    }

    fn config_text(&self) -> String {
        format!(
            "keystoreName={}, keyaliasName={}, ",
            self.keystore_name, self.keyalias_name
        )
    }
}
