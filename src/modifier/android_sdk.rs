//! Android SDK level settings.

use crate::config::ConfigDict;
use crate::error::Result;
use crate::settings::{PlatformGroup, SettingsStore};

use super::Modifier;

/// Minimum and target Android SDK levels.
///
/// The SDK levels are an Android-only channel: for every other target group
/// `apply` performs no writes.
#[derive(Debug, Clone)]
pub struct AndroidSdk {
    target_group: PlatformGroup,

    min: i32,
    target: i32,
}

impl AndroidSdk {
    /// Creates an empty instance for the given target group.
    pub fn new(target_group: PlatformGroup) -> Self {
        Self { target_group, min: 0, target: 0 }
    }

    /// Snapshots the SDK levels currently held by the store.
    pub fn capture(target_group: PlatformGroup, store: &dyn SettingsStore) -> Self {
        Self {
            target_group,
            min: store.android_min_sdk(),
            target: store.android_target_sdk(),
        }
    }
}

impl Modifier for AndroidSdk {
    fn reload(&mut self, dict: &ConfigDict) -> Result<()> {
        self.min = dict.get("min")?;
        self.target = dict.get("target")?;
        Ok(())
    }

    fn apply(&self, store: &mut dyn SettingsStore) {
        if self.target_group == PlatformGroup::Android {
            store.set_android_min_sdk(self.min);
            store.set_android_target_sdk(self.target);
        }
    }

    fn config_text(&self) -> String {
        format!("min={}, target={}, ", self.min, self.target)
    }
}
