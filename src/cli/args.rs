//! Command line argument parsing and validation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::settings::PlatformGroup;

/// Batch build-settings tool for game engine projects
#[derive(Parser, Debug)]
#[command(
    name = "buildset",
    version,
    about = "Applies build-profile settings to game engine projects",
    long_about = "Loads a JSON build profile, constructs the settings modifiers its sections \
describe, and applies them to a project settings snapshot or drives a headless editor build.

Usage:
  buildset describe --profile profiles/android-release.json
  buildset apply --profile profiles/android-release.json --settings settings.json --output settings.json
  buildset capture --group android --settings settings.json
  buildset build --profile profiles/android-release.json --log-file build.log"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the settings a profile would apply
    Describe {
        /// Build profile JSON file
        #[arg(short, long, value_name = "FILE")]
        profile: PathBuf,
    },

    /// Apply a profile's settings to a project settings snapshot
    Apply {
        /// Build profile JSON file
        #[arg(short, long, value_name = "FILE")]
        profile: PathBuf,

        /// Settings snapshot to start from (fresh project defaults when omitted)
        #[arg(short, long, value_name = "FILE")]
        settings: Option<PathBuf>,

        /// Where to write the updated snapshot (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the settings currently held by a snapshot
    Capture {
        /// Platform group to snapshot
        #[arg(short, long, value_enum)]
        group: PlatformGroup,

        /// Settings snapshot JSON file
        #[arg(short, long, value_name = "FILE")]
        settings: PathBuf,
    },

    /// Run the profile's headless editor build
    Build {
        /// Build profile JSON file
        #[arg(short, long, value_name = "FILE")]
        profile: PathBuf,

        /// Route the editor log to a file
        #[arg(short, long, value_name = "FILE")]
        log_file: Option<PathBuf>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Command::Apply { profile, output: Some(output), .. } = &self.command
            && profile == output
        {
            return Err(format!(
                "--output {} would overwrite the profile itself",
                output.display()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_refuses_to_clobber_the_profile() {
        let args = Args::try_parse_from([
            "buildset", "apply", "--profile", "p.json", "--output", "p.json",
        ])
        .unwrap();

        assert!(args.validate().is_err());
    }

    #[test]
    fn apply_with_distinct_output_is_valid() {
        let args = Args::try_parse_from([
            "buildset", "apply", "--profile", "p.json", "--output", "s.json",
        ])
        .unwrap();

        assert!(args.validate().is_ok());
    }

    #[test]
    fn capture_parses_the_platform_group() {
        let args = Args::try_parse_from([
            "buildset", "capture", "--group", "android", "--settings", "s.json",
        ])
        .unwrap();

        match args.command {
            Command::Capture { group, .. } => assert_eq!(group, PlatformGroup::Android),
            other => panic!("expected capture, got {other:?}"),
        }
    }

    #[test]
    fn unknown_group_is_rejected_at_parse_time() {
        let result = Args::try_parse_from([
            "buildset", "capture", "--group", "ps4", "--settings", "s.json",
        ]);

        assert!(result.is_err());
    }
}
