//! Notification records and the document they are published in.
//!
//! The remote document is deserialized into [`RawNotification`] (strings as
//! they appear on the wire) and then validated into [`Notification`]. A
//! record that fails validation is dropped at load time with a warning; the
//! remaining records are still shown.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::NotificationError;

/// How prominently a notification is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.pad(s)
    }
}

/// How often the same notification may be shown again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Every eligible invocation.
    Always,
    /// Only the first time.
    Once,
    /// At most once per 24 hours.
    OnceADay,
    /// At most once per 7 days.
    OnceAWeek,
}

impl Frequency {
    /// Wire representation of this frequency.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Once => "once",
            Self::OnceADay => "once_a_day",
            Self::OnceAWeek => "once_a_week",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "once" => Ok(Self::Once),
            "once_a_day" => Ok(Self::OnceADay),
            "once_a_week" => Ok(Self::OnceAWeek),
            other => Err(NotificationError::InvalidFrequency {
                value: other.to_string(),
            }),
        }
    }
}

/// A validated notification, ready for the eligibility engine.
///
/// Notifications are never mutated after loading. Showing one only writes
/// its display timestamp to the cache under [`Notification::cache_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
    pub title: Option<String>,
    /// Inclusive lower bound on the running version.
    pub min_version: Option<Version>,
    /// Inclusive upper bound on the running version.
    pub max_version: Option<Version>,
    /// First calendar day the notification may be shown.
    pub min_date: Option<NaiveDate>,
    /// Last calendar day the notification may be shown.
    pub max_date: Option<NaiveDate>,
    /// Command ids this notification is restricted to. `None` means all.
    pub commands: Option<Vec<String>>,
    /// Surface tag. `None` means all surfaces.
    pub surface: Option<String>,
    /// Repetition limit. `None` behaves like [`Frequency::Always`].
    pub frequency: Option<Frequency>,
}

impl Notification {
    /// Create a notification with no restrictions.
    pub fn new(id: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            severity,
            title: None,
            min_version: None,
            max_version: None,
            min_date: None,
            max_date: None,
            commands: None,
            surface: None,
            frequency: None,
        }
    }

    /// Cache key holding the epoch-millisecond timestamp of the last display.
    pub fn cache_key(&self) -> String {
        format!("notification-{}", self.id)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_version_range(mut self, min: Option<Version>, max: Option<Version>) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    #[must_use]
    pub const fn with_date_range(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.min_date = min;
        self.max_date = max;
        self
    }

    #[must_use]
    pub fn with_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands = Some(commands.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_surface(mut self, surface: impl Into<String>) -> Self {
        self.surface = Some(surface.into());
        self
    }

    #[must_use]
    pub const fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }
}

/// A notification record exactly as published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNotification {
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

impl TryFrom<RawNotification> for Notification {
    type Error = NotificationError;

    fn try_from(raw: RawNotification) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err(NotificationError::MissingId);
        }

        Ok(Self {
            min_version: raw.min_version.as_deref().map(parse_version).transpose()?,
            max_version: raw.max_version.as_deref().map(parse_version).transpose()?,
            min_date: raw.min_date.as_deref().map(parse_date).transpose()?,
            max_date: raw.max_date.as_deref().map(parse_date).transpose()?,
            frequency: raw
                .frequency
                .as_deref()
                .map(str::parse::<Frequency>)
                .transpose()?,
            id: raw.id,
            message: raw.message,
            severity: raw.severity,
            title: raw.title,
            commands: raw.commands,
            surface: raw.surface,
        })
    }
}

/// Top-level shape of the published document.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationDocument {
    /// Records are kept untyped here so one bad record cannot sink the rest.
    pub notifications: Vec<serde_json::Value>,
}

/// Parse a notifications document into validated records.
///
/// Fails only when the document itself is malformed. Individual records that
/// do not deserialize or validate are logged and skipped.
pub fn parse_document(raw: &str) -> Result<Vec<Notification>, NotificationError> {
    let document: NotificationDocument = serde_json::from_str(raw)?;

    let notifications = document
        .notifications
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match parse_record(value) {
            Ok(notification) => Some(notification),
            Err(err) => {
                warn!(index, error = %err, "Skipping invalid notification record");
                None
            }
        })
        .collect();

    Ok(notifications)
}

fn parse_record(value: serde_json::Value) -> Result<Notification, NotificationError> {
    let raw: RawNotification = serde_json::from_value(value)?;
    Notification::try_from(raw)
}

/// Parse a version bound, padding partial versions such as `3` or `3.1`.
fn parse_version(raw: &str) -> Result<Version, NotificationError> {
    let trimmed = raw.trim().trim_start_matches('v');
    if let Ok(version) = Version::parse(trimmed) {
        return Ok(version);
    }

    let padded = match trimmed.split('.').count() {
        1 => format!("{trimmed}.0.0"),
        2 => format!("{trimmed}.0"),
        _ => String::new(),
    };

    Version::parse(&padded).map_err(|_| NotificationError::InvalidVersion {
        value: raw.to_string(),
    })
}

/// Parse a date bound given as a calendar date or an RFC 3339 timestamp.
fn parse_date(raw: &str) -> Result<NaiveDate, NotificationError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| {
            DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .map_err(|_| NotificationError::InvalidDate {
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_frequency_from_str_known_values() {
        assert_eq!("always".parse::<Frequency>().unwrap(), Frequency::Always);
        assert_eq!("once".parse::<Frequency>().unwrap(), Frequency::Once);
        assert_eq!(
            "once_a_day".parse::<Frequency>().unwrap(),
            Frequency::OnceADay
        );
        assert_eq!(
            "once_a_week".parse::<Frequency>().unwrap(),
            Frequency::OnceAWeek
        );
    }

    #[test]
    fn test_frequency_from_str_rejects_unknown() {
        let err = "twice_a_day".parse::<Frequency>().unwrap_err();
        assert!(matches!(
            err,
            NotificationError::InvalidFrequency { ref value } if value == "twice_a_day"
        ));
    }

    #[test]
    fn test_frequency_serde_matches_from_str() {
        for frequency in [
            Frequency::Always,
            Frequency::Once,
            Frequency::OnceADay,
            Frequency::OnceAWeek,
        ] {
            let json = serde_json::to_string(&frequency).unwrap();
            assert_eq!(json, format!("\"{}\"", frequency.as_str()));
        }
    }

    #[test]
    fn test_cache_key_uses_id() {
        let n = Notification::new("abc-123", Severity::Info, "hello");
        assert_eq!(n.cache_key(), "notification-abc-123");
    }

    #[test]
    fn test_parse_version_pads_partial_versions() {
        assert_eq!(parse_version("3").unwrap(), Version::new(3, 0, 0));
        assert_eq!(parse_version("3.1").unwrap(), Version::new(3, 1, 0));
        assert_eq!(parse_version("v3.1.4").unwrap(), Version::new(3, 1, 4));
        assert!(parse_version("3.x.y.z").is_err());
        assert!(parse_version("").is_err());
    }

    #[test]
    fn test_parse_date_accepts_date_and_timestamp() {
        assert_eq!(parse_date("2024-01-01").unwrap(), ymd(2024, 1, 1));
        assert_eq!(
            parse_date("2024-03-05T23:30:00-02:00").unwrap(),
            ymd(2024, 3, 6)
        );
        assert!(parse_date("next tuesday").is_err());
    }

    #[test]
    fn test_parse_document_full_record() {
        let raw = r#"{
            "notifications": [{
                "id": "deploy-outage",
                "message": "Deploys are degraded",
                "type": "warning",
                "title": "Heads up",
                "minVersion": "3.50.0",
                "maxVersion": "3.60",
                "minDate": "2024-01-01",
                "maxDate": "2024-02-01",
                "commands": ["app:deploy"],
                "surface": "app",
                "frequency": "once_a_day"
            }]
        }"#;

        let parsed = parse_document(raw).unwrap();
        assert_eq!(parsed.len(), 1);
        let n = &parsed[0];
        assert_eq!(n.id, "deploy-outage");
        assert_eq!(n.severity, Severity::Warning);
        assert_eq!(n.title.as_deref(), Some("Heads up"));
        assert_eq!(n.min_version, Some(Version::new(3, 50, 0)));
        assert_eq!(n.max_version, Some(Version::new(3, 60, 0)));
        assert_eq!(n.min_date, Some(ymd(2024, 1, 1)));
        assert_eq!(n.max_date, Some(ymd(2024, 2, 1)));
        assert_eq!(n.commands, Some(vec!["app:deploy".to_string()]));
        assert_eq!(n.surface.as_deref(), Some("app"));
        assert_eq!(n.frequency, Some(Frequency::OnceADay));
    }

    #[test]
    fn test_parse_document_skips_invalid_records() {
        let raw = r#"{
            "notifications": [
                {"id": "a", "message": "ok", "type": "info"},
                {"id": "b", "message": "bad freq", "type": "info", "frequency": "hourly"},
                {"id": "c", "message": "bad type", "type": "critical"},
                {"id": "", "message": "no id", "type": "info"},
                {"id": "d", "message": "bad version", "type": "error", "minVersion": "latest"},
                {"id": "e", "message": "also ok", "type": "error"}
            ]
        }"#;

        let ids: Vec<String> = parse_document(raw)
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec!["a", "e"]);
    }

    #[test]
    fn test_parse_document_rejects_malformed_json() {
        assert!(matches!(
            parse_document("{not json"),
            Err(NotificationError::Parse(_))
        ));
        assert!(matches!(
            parse_document(r#"{"items": []}"#),
            Err(NotificationError::Parse(_))
        ));
    }

    #[test]
    fn test_raw_notification_roundtrips_wire_names() {
        let raw = RawNotification {
            id: "x".to_string(),
            message: "m".to_string(),
            severity: Severity::Error,
            title: None,
            min_version: Some("1.0.0".to_string()),
            max_version: None,
            min_date: None,
            max_date: None,
            commands: None,
            surface: None,
            frequency: Some("once".to_string()),
        };
        let json = serde_json::to_value(&raw).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["minVersion"], "1.0.0");
        assert!(json.get("maxVersion").is_none());
    }
}
