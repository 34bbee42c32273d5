//! Headless editor build execution.
//!
//! Resolves the editor binary for the host OS, composes the batch-mode
//! argument list, and runs the profile's build method as a child process.
//! The profile path and the rendered build output path are exported to the
//! child as `CONFIG_PATH` and `OUTPUT_PATH`; the editor-side build script
//! reads the full profile back through them.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use path_absolutize::Absolutize;
use tokio::process::Command;

use crate::error::{BuildSetError, Result};
use crate::profile::BuildProfile;

/// Outcome of one editor invocation.
#[derive(Debug)]
pub struct BuildReport {
    /// Combined stdout and stderr of the editor process.
    pub output: String,

    /// Wall-clock duration of the invocation.
    pub duration: Duration,
}

/// Runs headless editor builds for one profile.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use buildset::profile::BuildProfile;
/// use buildset::runner::EditorRunner;
///
/// # async fn example() -> buildset::Result<()> {
/// let profile = BuildProfile::load(Path::new("profiles/release.json"))?;
/// let report = EditorRunner::new(&profile).execute().await?;
/// println!("built in {:?}", report.duration);
/// # Ok(())
/// # }
/// ```
pub struct EditorRunner<'a> {
    profile: &'a BuildProfile,
    log_file: Option<PathBuf>,
}

impl<'a> EditorRunner<'a> {
    /// Creates a runner for the profile.
    pub fn new(profile: &'a BuildProfile) -> Self {
        Self { profile, log_file: None }
    }

    /// Routes the editor's log output to a file (`-logFile`).
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Resolves the editor binary.
    ///
    /// Probes the per-OS layout under the profile's `editorPath` first and
    /// falls back to a `PATH` lookup of the binary name.
    ///
    /// # Errors
    ///
    /// [`BuildSetError::EditorNotFound`] when neither location yields a
    /// binary.
    pub fn editor_binary(&self) -> Result<PathBuf> {
        let composed = compose_editor_binary(&self.profile.editor_path, std::env::consts::OS)?;
        if composed.exists() {
            return Ok(composed);
        }

        let name = composed
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        match which::which(&name) {
            Ok(found) => {
                log::debug!("editor not at {}, using {}", composed.display(), found.display());
                Ok(found)
            }
            Err(_) => Err(BuildSetError::EditorNotFound { path: composed }),
        }
    }

    /// Batch-mode argument list for the given method.
    pub fn batch_args(&self, method: &str) -> Result<Vec<String>> {
        let mut args = vec![
            "-quit".to_string(),
            "-batchmode".to_string(),
            "-nographics".to_string(),
            "-projectPath".to_string(),
            self.profile.resolved_project_path()?.display().to_string(),
        ];

        // the editor requires an absolute -logFile path
        if let Some(log_file) = &self.log_file {
            args.push("-logFile".to_string());
            args.push(log_file.absolutize()?.display().to_string());
        }

        args.push("-executeMethod".to_string());
        args.push(method.to_string());
        Ok(args)
    }

    /// Runs the profile's configured build method.
    pub async fn execute(&self) -> Result<BuildReport> {
        self.execute_method(&self.profile.method).await
    }

    /// Runs an arbitrary editor-side static method.
    ///
    /// # Errors
    ///
    /// [`BuildSetError::EditorFailed`] with the exit code and an output
    /// excerpt when the editor exits nonzero.
    pub async fn execute_method(&self, method: &str) -> Result<BuildReport> {
        let binary = self.editor_binary()?;
        let args = self.batch_args(method)?;
        let project_path = self.profile.resolved_project_path()?;
        let output_path = self.profile.resolved_build_path()?;

        log::info!("running {} {}", binary.display(), args.join(" "));
        log::debug!("CONFIG_PATH={}", self.profile.file_path.display());
        log::debug!("OUTPUT_PATH={}", output_path.display());

        let started = Instant::now();
        let output = Command::new(&binary)
            .args(&args)
            .current_dir(&project_path)
            .env("CONFIG_PATH", &self.profile.file_path)
            .env("OUTPUT_PATH", &output_path)
            .output()
            .await?;
        let duration = started.elapsed();

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(BuildSetError::EditorFailed {
                code: output.status.code(),
                excerpt: tail(&combined, 2000),
            });
        }

        log::info!("editor method {} finished in {:?}", method, duration);
        Ok(BuildReport { output: combined, duration })
    }
}

/// Per-OS editor binary layout under the installation root.
fn compose_editor_binary(editor_path: &Path, os: &str) -> Result<PathBuf> {
    let root = editor_path.absolutize()?.into_owned();
    Ok(match os {
        "windows" => root.join("Editor").join("Unity.exe"),
        "macos" => root.join("Contents").join("MacOS").join("Unity"),
        _ => root.join("Editor").join("Unity"),
    })
}

/// Last `max` bytes of `text`, trimmed to a character boundary.
fn tail(text: &str, max: usize) -> String {
    let mut start = text.len().saturating_sub(max);
    while !text.is_char_boundary(start) {
        start += 1;
    }
    text[start..].to_string()
}
