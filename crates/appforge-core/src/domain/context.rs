//! Per-invocation request context for the eligibility engine.

use chrono::{DateTime, Local, NaiveDate, Utc};
use semver::Version;

/// Everything the engine needs to know about the current invocation.
///
/// Wall-clock defaults are filled in by [`RequestContext::new`] only; the
/// engine itself never reads the clock, so tests pin `today` and `now`
/// through the builder methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Colon-delimited command id such as `app:deploy`. Empty means unknown.
    pub command_id: String,
    /// Surfaces present in the current project. When set, this overrides
    /// the surface derived from the command id.
    pub active_surfaces: Option<Vec<String>>,
    /// Calendar date used by the date gate.
    pub today: NaiveDate,
    /// Instant used by the frequency gate and recorded on display.
    pub now: DateTime<Utc>,
    /// Version compared against notification version bounds.
    pub current_version: Version,
}

impl RequestContext {
    /// Create a context for `command_id` at the current wall-clock time.
    pub fn new(command_id: impl Into<String>, current_version: Version) -> Self {
        let now = Utc::now();
        Self {
            command_id: command_id.into(),
            active_surfaces: None,
            today: now.with_timezone(&Local).date_naive(),
            now,
            current_version,
        }
    }

    /// Restrict surface matching to the given project surfaces.
    #[must_use]
    pub fn with_active_surfaces<I, S>(mut self, surfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_surfaces = Some(surfaces.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    #[must_use]
    pub const fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}
