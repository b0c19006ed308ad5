//! CLI entry point - the composition root.
//!
//! Parses arguments, bootstraps the context, dispatches to a handler, then
//! displays any notifications targeted at the command that ran.

use std::io;

use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use appforge_cli::presentation::TerminalPresenter;
use appforge_cli::{Cli, CliError, Commands, NotificationsCommand, bootstrap_from_env, handlers};

/// Install the global subscriber. Logs go to stderr so they never mix with
/// command output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let surfaces = cli.active_surfaces();
    let presenter = TerminalPresenter::stdout();

    // Only the notifications commands bootstrap eagerly; their failures are
    // the command's failures.
    let ctx = match command {
        Commands::Paths { .. } => {
            handlers::paths::execute()?;
            None
        }
        Commands::Notifications { command } => {
            let ctx = bootstrap_from_env()?;
            match command {
                NotificationsCommand::Check { command_id, .. } => {
                    handlers::notifications::check(
                        &ctx,
                        command_id,
                        &surfaces,
                        &presenter,
                        &mut io::stdout(),
                    )
                    .await?;
                }
                NotificationsCommand::List {
                    command_id, all, ..
                } => {
                    handlers::notifications::list(
                        &ctx,
                        command_id,
                        &surfaces,
                        *all,
                        &mut io::stdout(),
                    )
                    .await?;
                }
            }
            Some(ctx)
        }
    };

    if cli.no_notifications || command.displays_notifications() {
        return Ok(());
    }

    match ctx.map_or_else(bootstrap_from_env, Ok) {
        Ok(ctx) => {
            handlers::notifications::show_for_command(&ctx, command.id(), &surfaces, &presenter)
                .await;
        }
        Err(e) => debug!(command_id = command.id(), error = %e, "Notifications unavailable"),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads `env` bindings
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
