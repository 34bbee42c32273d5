//! buildset - Batch build-settings tool for game engine projects.
//!
//! This binary loads JSON build profiles and applies their settings to
//! project settings snapshots, or drives headless editor builds.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match buildset::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    process::exit(exit_code);
}
