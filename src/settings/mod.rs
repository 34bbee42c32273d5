//! Engine settings abstraction.
//!
//! [`SettingsStore`] is the capability modifiers run against;
//! [`ProjectSettings`] is the serializable in-memory implementation used by
//! the CLI and the tests. [`PlatformGroup`] keys the per-platform channels.

mod platform;
mod project;
mod store;

pub use platform::PlatformGroup;
pub use project::{AndroidSettings, IosSettings, ProjectSettings, ScriptingState, XrState};
pub use store::SettingsStore;
