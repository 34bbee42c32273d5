//! Command line interface for buildset.
//!
//! Argument parsing lives in [`args`]; this module dispatches the
//! subcommands against the library. Errors are wrapped with `anyhow`
//! context at this boundary and rendered by `main`.

mod args;

pub use args::{Args, Command};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::{BuildSetError, CliError};
use crate::modifier::ModifierSet;
use crate::profile::BuildProfile;
use crate::runner::EditorRunner;
use crate::settings::{PlatformGroup, ProjectSettings};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    if let Err(reason) = args.validate() {
        return Err(BuildSetError::from(CliError::InvalidArguments { reason }).into());
    }

    match args.command {
        Command::Describe { profile } => describe(&profile),
        Command::Apply { profile, settings, output } => {
            apply(&profile, settings.as_deref(), output.as_deref())
        }
        Command::Capture { group, settings } => capture(group, &settings),
        Command::Build { profile, log_file } => build(&profile, log_file).await,
    }
}

fn load_profile(path: &Path) -> Result<BuildProfile> {
    BuildProfile::load(path)
        .with_context(|| format!("failed to load profile {}", path.display()))
}

fn describe(profile_path: &Path) -> Result<i32> {
    let profile = load_profile(profile_path)?;
    let modifiers = ModifierSet::from_profile(&profile)?;

    println!("{}", modifiers.config_text());
    Ok(0)
}

fn apply(
    profile_path: &Path,
    settings_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<i32> {
    let profile = load_profile(profile_path)?;
    let modifiers = ModifierSet::from_profile(&profile)?;

    let mut store = match settings_path {
        Some(path) => ProjectSettings::load(path)
            .with_context(|| format!("failed to load settings {}", path.display()))?,
        None => ProjectSettings::default(),
    };

    modifiers.apply(&mut store);
    log::info!(
        "applied {} modifier(s) for {}",
        modifiers.len(),
        modifiers.target_group()
    );

    match output {
        Some(path) => {
            store
                .save(path)
                .with_context(|| format!("failed to write settings {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&store)?),
    }

    Ok(0)
}

fn capture(group: PlatformGroup, settings_path: &Path) -> Result<i32> {
    let store = ProjectSettings::load(settings_path)
        .with_context(|| format!("failed to load settings {}", settings_path.display()))?;

    let modifiers = ModifierSet::capture(group, &store);
    println!("{}", modifiers.config_text());
    Ok(0)
}

async fn build(profile_path: &Path, log_file: Option<PathBuf>) -> Result<i32> {
    let profile = load_profile(profile_path)?;

    let mut runner = EditorRunner::new(&profile);
    if let Some(path) = log_file {
        runner = runner.with_log_file(path);
    }

    let report = runner.execute().await?;
    println!("build finished in {:?}", report.duration);
    Ok(0)
}
