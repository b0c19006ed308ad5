//! The five eligibility predicates.
//!
//! Each gate is a pure function of the notification and one slice of the
//! request context. Cache access is resolved by the caller, so the frequency
//! gate takes the last-shown timestamp rather than the cache itself.

use chrono::{DateTime, NaiveDate, Utc};
use semver::Version;

use crate::domain::{Frequency, Notification};

/// Surface tag meaning "every surface".
pub const ALL_SURFACES: &str = "all";

/// Minimum gap between displays for [`Frequency::OnceADay`].
pub const ONE_DAY_MS: i64 = 24 * 3600 * 1000;

/// Minimum gap between displays for [`Frequency::OnceAWeek`].
pub const ONE_WEEK_MS: i64 = 7 * ONE_DAY_MS;

/// Inclusive semantic-version range check.
pub fn passes_version_gate(notification: &Notification, current: &Version) -> bool {
    let above_min = notification
        .min_version
        .as_ref()
        .is_none_or(|min| current >= min);
    let below_max = notification
        .max_version
        .as_ref()
        .is_none_or(|max| current <= max);
    above_min && below_max
}

/// Inclusive calendar-date range check.
pub fn passes_date_gate(notification: &Notification, today: NaiveDate) -> bool {
    let started = notification.min_date.is_none_or(|min| min <= today);
    let not_ended = notification.max_date.is_none_or(|max| max >= today);
    started && not_ended
}

/// Exact command-id match. An empty command id matches everything.
pub fn passes_command_gate(notification: &Notification, command_id: &str) -> bool {
    if command_id.is_empty() {
        return true;
    }
    notification
        .commands
        .as_ref()
        .is_none_or(|commands| commands.iter().any(|c| c == command_id))
}

/// The surface a command belongs to: the part before the first `:`.
///
/// Commands without a namespace (and the empty id) map to [`ALL_SURFACES`].
pub fn surface_from_command(command_id: &str) -> &str {
    command_id
        .split_once(':')
        .map_or(ALL_SURFACES, |(surface, _)| surface)
}

/// Surface match.
///
/// Project surfaces, when supplied, take precedence over the command's
/// namespace: only membership in `active_surfaces` counts, and a notification
/// without a surface must find `"all"` in the list to pass.
pub fn passes_surface_gate(
    notification: &Notification,
    command_id: &str,
    active_surfaces: Option<&[String]>,
) -> bool {
    let notification_surface = notification.surface.as_deref().unwrap_or(ALL_SURFACES);

    if let Some(surfaces) = active_surfaces {
        return surfaces.iter().any(|s| s == notification_surface);
    }

    notification_surface == ALL_SURFACES || notification_surface == surface_from_command(command_id)
}

/// Repetition limit given the last display time in epoch milliseconds.
pub fn passes_frequency_gate(
    notification: &Notification,
    last_shown_ms: Option<i64>,
    now: DateTime<Utc>,
) -> bool {
    let elapsed_over = |threshold: i64| {
        last_shown_ms.is_none_or(|last| now.timestamp_millis().saturating_sub(last) > threshold)
    };

    match notification.frequency {
        None | Some(Frequency::Always) => true,
        Some(Frequency::Once) => last_shown_ms.is_none(),
        Some(Frequency::OnceADay) => elapsed_over(ONE_DAY_MS),
        Some(Frequency::OnceAWeek) => elapsed_over(ONE_WEEK_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;
    use chrono::TimeDelta;

    fn notification() -> Notification {
        Notification::new("n1", Severity::Info, "message")
    }

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn surfaces(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_version_gate_min_is_inclusive() {
        let n = notification().with_version_range(Some(v("3.0.0")), None);
        assert!(!passes_version_gate(&n, &v("2.9.9")));
        assert!(passes_version_gate(&n, &v("3.0.0")));
        assert!(passes_version_gate(&n, &v("3.0.1")));
    }

    #[test]
    fn test_version_gate_max_is_inclusive() {
        let n = notification().with_version_range(None, Some(v("3.10.0")));
        assert!(passes_version_gate(&n, &v("3.10.0")));
        assert!(passes_version_gate(&n, &v("3.9.0")));
        assert!(!passes_version_gate(&n, &v("3.10.1")));
    }

    #[test]
    fn test_version_gate_is_not_lexical() {
        // "3.10.0" < "3.9.0" as strings, but not as versions
        let n = notification().with_version_range(Some(v("3.9.0")), None);
        assert!(passes_version_gate(&n, &v("3.10.0")));
    }

    #[test]
    fn test_version_gate_orders_prereleases() {
        let n = notification().with_version_range(Some(v("3.0.0")), Some(v("4.0.0")));
        // Ordered, not range-matched: a prerelease above the floor passes
        assert!(passes_version_gate(&n, &v("3.1.0-pre")));
        assert!(!passes_version_gate(&n, &v("3.0.0-beta.2")));
        assert!(passes_version_gate(&n, &v("4.0.0-rc.1")));
        assert!(!passes_version_gate(&n, &v("4.0.1-rc.1")));
    }

    #[test]
    fn test_version_gate_unbounded() {
        assert!(passes_version_gate(&notification(), &v("0.0.1")));
    }

    #[test]
    fn test_date_gate_bounds_are_inclusive() {
        let n = notification().with_date_range(Some(ymd(2023, 12, 1)), Some(ymd(2024, 1, 1)));
        assert!(!passes_date_gate(&n, ymd(2023, 11, 30)));
        assert!(passes_date_gate(&n, ymd(2023, 12, 1)));
        assert!(passes_date_gate(&n, ymd(2024, 1, 1)));
        assert!(!passes_date_gate(&n, ymd(2024, 1, 2)));
    }

    #[test]
    fn test_command_gate_without_commands_always_passes() {
        let n = notification();
        for id in ["", "app:deploy", "theme:push", "anything"] {
            assert!(passes_command_gate(&n, id), "failed for {id:?}");
        }
    }

    #[test]
    fn test_command_gate_empty_command_id_always_passes() {
        let n = notification().with_commands(["app:deploy"]);
        assert!(passes_command_gate(&n, ""));
    }

    #[test]
    fn test_command_gate_requires_exact_match() {
        let n = notification().with_commands(["app:deploy", "app:init"]);
        assert!(passes_command_gate(&n, "app:deploy"));
        assert!(passes_command_gate(&n, "app:init"));
        assert!(!passes_command_gate(&n, "app"));
        assert!(!passes_command_gate(&n, "app:deploy:extra"));
        assert!(!passes_command_gate(&n, "theme:push"));
    }

    #[test]
    fn test_surface_from_command() {
        assert_eq!(surface_from_command("app:deploy"), "app");
        assert_eq!(surface_from_command("app:function:replay"), "app");
        assert_eq!(surface_from_command("version"), ALL_SURFACES);
        assert_eq!(surface_from_command(""), ALL_SURFACES);
    }

    #[test]
    fn test_surface_gate_from_command() {
        let app = notification().with_surface("app");
        assert!(passes_surface_gate(&app, "app:deploy", None));
        assert!(!passes_surface_gate(&app, "theme:push", None));
    }

    #[test]
    fn test_surface_gate_missing_surface_means_all() {
        let n = notification();
        assert!(passes_surface_gate(&n, "app:deploy", None));
        assert!(passes_surface_gate(&n, "", None));
    }

    #[test]
    fn test_surface_gate_active_surfaces_override_command() {
        let hydrogen = notification().with_surface("hydrogen");
        let active = surfaces(&["app", "theme"]);
        assert!(!passes_surface_gate(
            &hydrogen,
            "hydrogen:deploy",
            Some(active.as_slice())
        ));

        let theme = notification().with_surface("theme");
        assert!(passes_surface_gate(&theme, "app:deploy", Some(active.as_slice())));
    }

    #[test]
    fn test_surface_gate_active_surfaces_need_all_for_untagged() {
        let untagged = notification();
        assert!(!passes_surface_gate(
            &untagged,
            "app:deploy",
            Some(surfaces(&["app"]).as_slice())
        ));
        assert!(passes_surface_gate(
            &untagged,
            "app:deploy",
            Some(surfaces(&["app", "all"]).as_slice())
        ));
    }

    #[test]
    fn test_frequency_gate_absent_or_always() {
        let now = Utc::now();
        let shown = Some(now.timestamp_millis());
        assert!(passes_frequency_gate(&notification(), shown, now));
        let always = notification().with_frequency(Frequency::Always);
        assert!(passes_frequency_gate(&always, shown, now));
    }

    #[test]
    fn test_frequency_gate_once() {
        let now = Utc::now();
        let n = notification().with_frequency(Frequency::Once);
        assert!(passes_frequency_gate(&n, None, now));
        let long_ago = (now - TimeDelta::days(365)).timestamp_millis();
        assert!(!passes_frequency_gate(&n, Some(long_ago), now));
    }

    #[test]
    fn test_frequency_gate_once_a_day() {
        let now = Utc::now();
        let n = notification().with_frequency(Frequency::OnceADay);
        let hours_ago = |h: i64| Some((now - TimeDelta::hours(h)).timestamp_millis());

        assert!(passes_frequency_gate(&n, None, now));
        assert!(!passes_frequency_gate(&n, hours_ago(23), now));
        assert!(!passes_frequency_gate(&n, hours_ago(24), now));
        assert!(passes_frequency_gate(&n, hours_ago(25), now));
    }

    #[test]
    fn test_frequency_gate_once_a_week() {
        let now = Utc::now();
        let n = notification().with_frequency(Frequency::OnceAWeek);
        let days_ago = |d: i64| Some((now - TimeDelta::days(d)).timestamp_millis());

        assert!(passes_frequency_gate(&n, None, now));
        assert!(!passes_frequency_gate(&n, days_ago(6), now));
        assert!(!passes_frequency_gate(&n, days_ago(7), now));
        assert!(passes_frequency_gate(&n, days_ago(8), now));
    }
}
