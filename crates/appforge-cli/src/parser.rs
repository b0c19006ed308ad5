//! Main CLI parser and top-level argument handling.

use clap::Parser;
use clap::builder::FalseyValueParser;

use crate::commands::Commands;

/// Command-line interface for appforge.
#[derive(Parser)]
#[command(name = "appforge")]
#[command(about = "Build and ship storefront apps and themes")]
#[command(version = appforge_build_info::LONG_VERSION)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Do not fetch or display notifications
    #[arg(
        long = "no-notifications",
        global = true,
        env = "APPFORGE_NO_NOTIFICATIONS",
        value_parser = FalseyValueParser::new()
    )]
    pub no_notifications: bool,

    /// Surface present in the current project (repeatable, e.g. --surface app --surface theme)
    #[arg(long = "surface", value_name = "TAG")]
    pub surfaces: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Every `--surface`, whether given before or after the subcommand.
    pub fn active_surfaces(&self) -> Vec<String> {
        let after = self.command.as_ref().map_or(&[][..], Commands::surfaces);
        self.surfaces.iter().chain(after).cloned().collect()
    }
}
