//! Rows for `notifications list`.

use appforge_core::{Eligibility, Frequency, Notification};

/// One aligned row: id, severity, frequency, eligibility.
pub fn format_row(notification: &Notification, eligibility: Eligibility) -> String {
    let frequency = notification.frequency.map_or("always", Frequency::as_str);
    let status = match eligibility {
        Eligibility::Eligible => "eligible".to_string(),
        Eligibility::Blocked(gate) => format!("blocked by {gate}"),
    };
    format!(
        "{:<28} {:<8} {:<12} {status}",
        notification.id, notification.severity, frequency
    )
}
