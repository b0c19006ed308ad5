//! Available commands and their notification ids.

use clap::{Args, Subcommand};

/// `--surface` as accepted after a subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SurfaceArgs {
    /// Surface present in the current project (repeatable)
    #[arg(long = "surface", value_name = "TAG")]
    pub surfaces: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved paths for appforge data files
    Paths {
        #[command(flatten)]
        surface: SurfaceArgs,
    },

    /// Inspect and display notifications
    Notifications {
        #[command(subcommand)]
        command: NotificationsCommand,
    },
}

#[derive(Subcommand)]
pub enum NotificationsCommand {
    /// Display the notifications a command would display, and record them as shown
    Check {
        /// Command id to evaluate, e.g. "app:deploy"
        #[arg(long = "command-id")]
        command_id: String,
        #[command(flatten)]
        surface: SurfaceArgs,
    },
    /// List notifications with their eligibility (nothing is recorded)
    List {
        /// Command id to evaluate against (empty matches every command)
        #[arg(long = "command-id", default_value = "")]
        command_id: String,
        /// Include notifications that are not eligible
        #[arg(long)]
        all: bool,
        #[command(flatten)]
        surface: SurfaceArgs,
    },
}

impl Commands {
    /// Colon-delimited id notifications target this command by.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Paths { .. } => "paths",
            Self::Notifications { command } => match command {
                NotificationsCommand::Check { .. } => "notifications:check",
                NotificationsCommand::List { .. } => "notifications:list",
            },
        }
    }

    /// Surfaces given after the subcommand.
    pub fn surfaces(&self) -> &[String] {
        let surface = match self {
            Self::Paths { surface }
            | Self::Notifications {
                command:
                    NotificationsCommand::Check { surface, .. }
                    | NotificationsCommand::List { surface, .. },
            } => surface,
        };
        &surface.surfaces
    }

    /// Whether the command displays notifications itself.
    pub const fn displays_notifications(&self) -> bool {
        matches!(
            self,
            Self::Notifications {
                command: NotificationsCommand::Check { .. }
            }
        )
    }
}
