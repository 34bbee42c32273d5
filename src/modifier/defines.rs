//! Scripting define symbols.

use crate::config::ConfigDict;
use crate::error::Result;
use crate::settings::{PlatformGroup, SettingsStore};

use super::Modifier;

/// Scripting define symbols for one target group.
///
/// The store holds the symbols as one semicolon-joined string; the profile
/// lists them individually.
#[derive(Debug, Clone)]
pub struct Defines {
    target_group: PlatformGroup,

    symbols: Vec<String>,
}

impl Defines {
    /// Creates an empty instance for the given target group.
    pub fn new(target_group: PlatformGroup) -> Self {
        Self { target_group, symbols: Vec::new() }
    }

    /// Snapshots the define symbols currently held by the store.
    pub fn capture(target_group: PlatformGroup, store: &dyn SettingsStore) -> Self {
        let joined = store.scripting_define_symbols(target_group);
        let symbols = joined
            .split(';')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self { target_group, symbols }
    }
}

impl Modifier for Defines {
    fn reload(&mut self, dict: &ConfigDict) -> Result<()> {
        self.symbols = dict.get("symbols")?;
        Ok(())
    }

    fn apply(&self, store: &mut dyn SettingsStore) {
        store.set_scripting_define_symbols(self.target_group, &self.symbols.join(";"));
    }

    fn config_text(&self) -> String {
        format!("defines={}, ", self.symbols.join(";"))
    }
}
