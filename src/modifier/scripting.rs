//! Scripting runtime settings.

use crate::config::ConfigDict;
use crate::error::Result;
use crate::settings::{PlatformGroup, SettingsStore};

use super::Modifier;

/// API compatibility level, scripting backend, and runtime version.
#[derive(Debug, Clone)]
pub struct Scripting {
    target_group: PlatformGroup,

    api_compatibility_level: String,
    backend: String,
    runtime_version: String,
}

impl Scripting {
    /// Creates an empty instance for the given target group.
    pub fn new(target_group: PlatformGroup) -> Self {
        Self {
            target_group,
            api_compatibility_level: String::new(),
            backend: String::new(),
            runtime_version: String::new(),
        }
    }

    /// Snapshots the scripting settings currently held by the store.
    pub fn capture(target_group: PlatformGroup, store: &dyn SettingsStore) -> Self {
        Self {
            target_group,
            api_compatibility_level: store.api_compatibility_level(target_group),
            backend: store.scripting_backend(target_group),
            runtime_version: store.scripting_runtime_version(),
        }
    }
}

impl Modifier for Scripting {
    fn reload(&mut self, dict: &ConfigDict) -> Result<()> {
        self.api_compatibility_level = dict.get("apiCompatibilityLevel")?;
        self.backend = dict.get("backend")?;
        self.runtime_version = dict.get("scriptingRuntimeVersion")?;
        Ok(())
    }

    fn apply(&self, store: &mut dyn SettingsStore) {
        store.set_api_compatibility_level(self.target_group, &self.api_compatibility_level);
        store.set_scripting_backend(self.target_group, &self.backend);
        store.set_scripting_runtime_version(&self.runtime_version);
    }

    fn config_text(&self) -> String {
        format!(
            "apiCompatibilityLevel={}, backend={}, scriptingRuntimeVersion={}, ",
            self.api_compatibility_level, self.backend, self.runtime_version
        )
    }
}
