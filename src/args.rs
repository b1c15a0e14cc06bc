//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "respiro",
    version,
    about = "A guided breathing practice for the terminal"
)]
pub struct CliArgs {
    /// Start with this technique highlighted instead of the default
    #[arg(short, long, value_name = "ID")]
    pub technique: Option<String>,

    /// Session length in seconds (overrides the config file)
    #[arg(short, long, value_name = "SECONDS")]
    pub duration: Option<u32>,

    /// List the available techniques and exit
    #[arg(long)]
    pub list: bool,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
