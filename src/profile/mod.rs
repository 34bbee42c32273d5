//! Build profiles.
//!
//! A build profile is one JSON file describing one build: where the editor
//! and the project live, where the build output goes, which editor method
//! runs the build, and one optional configuration section per settings
//! modifier. Loading a profile also records its name, absolute path, load
//! timestamp, and the project's git revision; those feed the build path
//! template.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Local};
use handlebars::Handlebars;
use path_absolutize::Absolutize;
use serde::Deserialize;
use serde_json::json;

use crate::config::ConfigDict;
use crate::error::Result;
use crate::settings::PlatformGroup;

/// Boolean build pipeline flags.
///
/// The tool itself does not interpret these; they travel to the editor-side
/// build script through `CONFIG_PATH`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    /// Development build.
    pub development: bool,
    /// Allow script debuggers to attach.
    pub allow_debugging: bool,
    /// Keep the generated project editable between builds.
    pub accept_external_modifications_to_player: bool,
    /// Connect the profiler on startup.
    pub connect_with_profiler: bool,
    /// Reveal the built player when done.
    pub show_built_player: bool,
    /// Launch the player after building.
    pub auto_run_player: bool,
    /// Symlink runtime libraries instead of copying.
    pub symlink_libraries: bool,
    /// Force assertions in non-development builds.
    pub force_enable_assertions: bool,
}

/// Build target section of a profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSection {
    /// Platform group the build (and every modifier) targets.
    pub target_group: PlatformGroup,

    /// Concrete build target within the group (e.g. "android", "win64").
    pub target: String,

    /// Pipeline flags.
    #[serde(default)]
    pub options: BuildOptions,
}

/// One build profile.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use buildset::profile::BuildProfile;
///
/// # fn example() -> buildset::Result<()> {
/// let profile = BuildProfile::load(Path::new("profiles/android-release.json"))?;
/// println!("building {} for {}", profile.name, profile.build.target_group);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildProfile {
    /// Editor installation root.
    pub editor_path: PathBuf,

    /// Engine project directory.
    pub project_path: PathBuf,

    /// Directory all build outputs land under.
    pub build_base_path: PathBuf,

    /// Build output subpath, as a template over `{{name}}`, `{{date}}`,
    /// `{{time}}`, `{{revision}}`, `{{targetGroup}}`, and `{{target}}`.
    pub build_path: String,

    /// Editor-side static method executed to run the build.
    pub method: String,

    /// Build target section.
    pub build: BuildSection,

    /// Identity section (package name, version name, version code).
    ///
    /// Default: absent (identity settings untouched)
    #[serde(default)]
    pub identification: Option<ConfigDict>,

    /// XR section.
    ///
    /// Default: absent
    #[serde(default)]
    pub xr: Option<ConfigDict>,

    /// Android SDK levels section.
    ///
    /// Default: absent
    #[serde(default)]
    pub android_sdk: Option<ConfigDict>,

    /// Android signing section.
    ///
    /// Default: absent
    #[serde(default)]
    pub keystore: Option<ConfigDict>,

    /// Scripting runtime section.
    ///
    /// Default: absent
    #[serde(default)]
    pub scripting: Option<ConfigDict>,

    /// Scripting define symbols section.
    ///
    /// Default: absent
    #[serde(default)]
    pub defines: Option<ConfigDict>,

    /// Profile name, the file stem of the loaded path.
    #[serde(skip)]
    pub name: String,

    /// Absolute path the profile was loaded from.
    #[serde(skip)]
    pub file_path: PathBuf,

    /// `HEAD` revision of the project repository, when readable.
    #[serde(skip)]
    pub revision: Option<String>,

    /// Wall-clock time the profile was loaded.
    #[serde(skip, default = "Local::now")]
    pub loaded_at: DateTime<Local>,
}

impl BuildProfile {
    /// Loads a profile from a JSON file and enriches it with name, absolute
    /// path, timestamp, and project revision.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let mut profile: BuildProfile = serde_json::from_str(&data)?;

        profile.file_path = path.absolutize()?.into_owned();
        profile.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        profile.loaded_at = Local::now();
        profile.revision = read_revision(&profile.project_path);

        log::debug!(
            "loaded profile '{}' from {} (revision {})",
            profile.name,
            profile.file_path.display(),
            profile.revision.as_deref().unwrap_or("unknown")
        );

        Ok(profile)
    }

    /// Absolutized project directory.
    pub fn resolved_project_path(&self) -> Result<PathBuf> {
        Ok(self.project_path.absolutize()?.into_owned())
    }

    /// Full build output path: the absolutized base directory joined with
    /// the rendered `build_path` template.
    pub fn resolved_build_path(&self) -> Result<PathBuf> {
        let base = self.build_base_path.absolutize()?.into_owned();
        Ok(base.join(self.render_build_path()?))
    }

    fn render_build_path(&self) -> Result<String> {
        let registry = Handlebars::new();
        let context = json!({
            "name": self.name,
            "date": self.loaded_at.format("%Y%m%d").to_string(),
            "time": self.loaded_at.format("%H%M%S").to_string(),
            "revision": self.revision.clone().unwrap_or_default(),
            "targetGroup": self.build.target_group.as_str(),
            "target": self.build.target,
        });

        Ok(registry.render_template(&self.build_path, &context)?)
    }
}

/// Reads `HEAD` of the project repository, if there is one.
///
/// Unlike every other load failure this one is survivable: the revision
/// only feeds the build path template, so profiles loaded outside a
/// checkout degrade to an empty `{{revision}}`.
fn read_revision(project_path: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(project_path)
        .output();

    match output {
        Ok(out) if out.status.success() => {
            let revision = String::from_utf8_lossy(&out.stdout).trim().to_string();
            (!revision.is_empty()).then_some(revision)
        }
        Ok(out) => {
            log::warn!(
                "git rev-parse failed in {}: {}",
                project_path.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            );
            None
        }
        Err(err) => {
            log::warn!("could not run git in {}: {}", project_path.display(), err);
            None
        }
    }
}
