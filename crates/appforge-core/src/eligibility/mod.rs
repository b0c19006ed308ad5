//! Notification eligibility engine.
//!
//! Given the loaded notifications and a [`RequestContext`], decides which
//! notifications to show. Every notification must pass five gates, checked
//! in order with short-circuiting:
//!
//! 1. version: running version within `minVersion..=maxVersion`
//! 2. date: today within `minDate..=maxDate`
//! 3. command: command id listed in `commands` (or no restriction)
//! 4. surface: surface tag matches the project or command surface
//! 5. frequency: not shown too recently, per the durable cache
//!
//! Notifications are evaluated independently. The result preserves input
//! order and never contains a notification twice unless the input did.

mod gates;

use std::fmt;

use tracing::{debug, trace, warn};

use crate::domain::{Notification, RequestContext};
use crate::ports::{CacheError, CacheStore};

pub use gates::{
    ALL_SURFACES, ONE_DAY_MS, ONE_WEEK_MS, passes_command_gate, passes_date_gate,
    passes_frequency_gate, passes_surface_gate, passes_version_gate, surface_from_command,
};

/// One of the five eligibility predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    Version,
    Date,
    Command,
    Surface,
    Frequency,
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Version => "version",
            Self::Date => "date",
            Self::Command => "command",
            Self::Surface => "surface",
            Self::Frequency => "frequency",
        };
        f.write_str(s)
    }
}

/// Outcome of evaluating one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    /// Rejected by the first failing gate.
    Blocked(Gate),
}

impl Eligibility {
    pub const fn is_eligible(self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Evaluate all gates for one notification.
///
/// A cache read failure blocks frequency-limited notifications at the
/// frequency gate.
pub fn evaluate(
    notification: &Notification,
    ctx: &RequestContext,
    cache: &dyn CacheStore,
) -> Eligibility {
    let outcome = if !passes_version_gate(notification, &ctx.current_version) {
        Eligibility::Blocked(Gate::Version)
    } else if !passes_date_gate(notification, ctx.today) {
        Eligibility::Blocked(Gate::Date)
    } else if !passes_command_gate(notification, &ctx.command_id) {
        Eligibility::Blocked(Gate::Command)
    } else if !passes_surface_gate(
        notification,
        &ctx.command_id,
        ctx.active_surfaces.as_deref(),
    ) {
        Eligibility::Blocked(Gate::Surface)
    } else if !frequency_allows(notification, ctx, cache) {
        Eligibility::Blocked(Gate::Frequency)
    } else {
        Eligibility::Eligible
    };

    if let Eligibility::Blocked(gate) = outcome {
        trace!(id = %notification.id, %gate, "Notification blocked");
    }
    outcome
}

/// The ordered subset of `notifications` eligible for display.
pub fn select_eligible(
    notifications: &[Notification],
    ctx: &RequestContext,
    cache: &dyn CacheStore,
) -> Vec<Notification> {
    let selected: Vec<Notification> = notifications
        .iter()
        .filter(|n| evaluate(n, ctx, cache).is_eligible())
        .cloned()
        .collect();

    debug!(
        command_id = %ctx.command_id,
        total = notifications.len(),
        eligible = selected.len(),
        "Selected eligible notifications"
    );
    selected
}

fn frequency_allows(
    notification: &Notification,
    ctx: &RequestContext,
    cache: &dyn CacheStore,
) -> bool {
    // Unrestricted notifications never touch the cache.
    if notification.frequency.is_none() {
        return true;
    }

    match last_shown(notification, cache) {
        Ok(last) => passes_frequency_gate(notification, last, ctx.now),
        Err(err) => {
            warn!(id = %notification.id, error = %err, "Cannot read notification history");
            false
        }
    }
}

/// Last display time of `notification` in epoch milliseconds.
///
/// A value that is not an integer is treated as never shown.
fn last_shown(
    notification: &Notification,
    cache: &dyn CacheStore,
) -> Result<Option<i64>, CacheError> {
    let key = notification.cache_key();
    let Some(raw) = cache.get(&key)? else {
        return Ok(None);
    };

    match raw.trim().parse::<i64>() {
        Ok(ms) => Ok(Some(ms)),
        Err(_) => {
            warn!(%key, value = %raw, "Ignoring malformed last-shown timestamp");
            Ok(None)
        }
    }
}
