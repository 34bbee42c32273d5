//! Settings modifiers.
//!
//! A modifier owns one group of engine settings and implements the shared
//! three-operation contract: [`reload`](Modifier::reload) from a profile
//! section, [`apply`](Modifier::apply) to a settings store, and
//! [`config_text`](Modifier::config_text) for human-readable description.
//! [`ModifierSet`] drives an ordered, heterogeneous family of them
//! uniformly.
//!
//! # Module Organization
//!
//! - [`identification`] - package identifier, version name, version code
//! - [`xr`] - VR support flag, device list, stereo rendering path
//! - [`android_sdk`] - minimum and target SDK levels
//! - [`keystore`] - Android signing credentials
//! - [`scripting`] - API level, backend, runtime version
//! - [`defines`] - scripting define symbols
//! - [`set`] - the [`ModifierSet`] orchestrator

mod android_sdk;
mod defines;
mod identification;
mod keystore;
mod scripting;
mod set;
mod xr;

pub use android_sdk::AndroidSdk;
pub use defines::Defines;
pub use identification::Identification;
pub use keystore::Keystore;
pub use scripting::Scripting;
pub use set::ModifierSet;
pub use xr::Xr;

use crate::config::ConfigDict;
use crate::error::Result;
use crate::settings::SettingsStore;

/// Shared contract of all settings modifiers.
///
/// Instances go through a two-state lifecycle: empty after construction,
/// populated after the first `reload` (or after snapshot construction via
/// the concrete type's `capture`). `apply` and `config_text` never change
/// state; `reload` may run again at any time.
pub trait Modifier {
    /// Overwrites the in-memory fields from a configuration section.
    ///
    /// # Errors
    ///
    /// Propagates the dictionary accessor's error when a key is absent or
    /// has the wrong shape. The modifier performs no validation of its own.
    fn reload(&mut self, dict: &ConfigDict) -> Result<()>;

    /// Writes the in-memory fields to the settings store.
    fn apply(&self, store: &mut dyn SettingsStore);

    /// Renders the fields as `key=value, ` pairs, trailing separator
    /// included.
    fn config_text(&self) -> String;
}
