//! XR / VR settings.

use crate::config::ConfigDict;
use crate::error::Result;
use crate::settings::{PlatformGroup, SettingsStore};

use super::Modifier;

/// VR support flag, device list, and stereo rendering path for one target
/// group.
#[derive(Debug, Clone)]
pub struct Xr {
    target_group: PlatformGroup,

    enabled: bool,
    devices: Vec<String>,
    stereo_rendering_path: String,
}

impl Xr {
    /// Creates an empty instance for the given target group.
    pub fn new(target_group: PlatformGroup) -> Self {
        Self {
            target_group,
            enabled: false,
            devices: Vec::new(),
            stereo_rendering_path: String::new(),
        }
    }

    /// Snapshots the XR settings currently held by the store.
    pub fn capture(target_group: PlatformGroup, store: &dyn SettingsStore) -> Self {
        Self {
            target_group,
            enabled: store.vr_supported(target_group),
            devices: store.vr_devices(target_group),
            stereo_rendering_path: store.stereo_rendering_path(),
        }
    }
}

impl Modifier for Xr {
    fn reload(&mut self, dict: &ConfigDict) -> Result<()> {
        self.enabled = dict.get("enabled")?;
        self.devices = dict.get("devices")?;
        self.stereo_rendering_path = dict.get("stereoRenderingPath")?;
        Ok(())
    }

    fn apply(&self, store: &mut dyn SettingsStore) {
        store.set_vr_supported(self.target_group, self.enabled);
        store.set_vr_devices(self.target_group, &self.devices);
        store.set_stereo_rendering_path(&self.stereo_rendering_path);
    }

    fn config_text(&self) -> String {
        format!(
            "enabled={}, devices={}, stereoRenderingPath={}, ",
            self.enabled,
            self.devices.join(";"),
            self.stereo_rendering_path
        )
    }
}
