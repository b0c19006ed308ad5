//! Notifications command handlers.

use std::io::Write;

use anyhow::Result;
use appforge_core::{CoreError, Notification, NotificationPresenter};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_row;

/// `notifications check`: display and record what `command_id` would show.
pub async fn check(
    ctx: &CliContext,
    command_id: &str,
    surfaces: &[String],
    presenter: &dyn NotificationPresenter,
    out: &mut impl Write,
) -> Result<Vec<Notification>> {
    let request = ctx.request_context(command_id, surfaces)?;
    let shown = ctx
        .notifications()
        .show_if_needed(&request, presenter)
        .await
        .map_err(|e| CliError::from(CoreError::from(e)))?;

    if shown.is_empty() {
        writeln!(out, "No notifications to show for '{command_id}'.")?;
    }
    Ok(shown)
}

/// `notifications list`: one row per notification with its eligibility.
///
/// Blocked notifications are skipped unless `all` is set. Nothing is
/// recorded as shown.
pub async fn list(
    ctx: &CliContext,
    command_id: &str,
    surfaces: &[String],
    all: bool,
    out: &mut impl Write,
) -> Result<()> {
    let request = ctx.request_context(command_id, surfaces)?;
    let report = ctx
        .notifications()
        .inspect(&request)
        .await
        .map_err(|e| CliError::from(CoreError::from(e)))?;

    let rows: Vec<String> = report
        .iter()
        .filter(|(_, eligibility)| all || eligibility.is_eligible())
        .map(|(n, eligibility)| format_row(n, *eligibility))
        .collect();

    if rows.is_empty() {
        writeln!(out, "No notifications.")?;
    }
    for row in rows {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Display notifications targeted at a command that just finished.
///
/// Never fails: notifications are advisory and must not change the outcome
/// of the command that triggered them.
pub async fn show_for_command(
    ctx: &CliContext,
    command_id: &str,
    surfaces: &[String],
    presenter: &dyn NotificationPresenter,
) {
    let request = match ctx.request_context(command_id, surfaces) {
        Ok(request) => request,
        Err(e) => {
            debug!(%command_id, error = %e, "Skipping notifications");
            return;
        }
    };

    if let Err(e) = ctx.notifications().show_if_needed(&request, presenter).await {
        debug!(%command_id, error = %e, "Notifications unavailable");
    }
}
