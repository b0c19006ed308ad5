//! Boxed, severity-coloured rendering of notifications.

use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, PoisonError};

use appforge_core::{Notification, NotificationPresenter, Severity};

// ANSI color codes
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const BOX_WIDTH: usize = 60;

/// Whether stdout should receive ANSI colour codes.
///
/// True only if stdout is a terminal and `NO_COLOR` is not set.
pub fn use_color() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

const fn tint(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => CYAN,
        Severity::Warning => YELLOW,
        Severity::Error => RED,
    }
}

/// Render `notification` as a box: severity in the top border, the title
/// as a bold headline, then the message body.
pub fn format_notification(notification: &Notification, color: bool) -> String {
    let (tint, bold, reset) = if color {
        (tint(notification.severity), BOLD, RESET)
    } else {
        ("", "", "")
    };

    let label = notification.severity.to_string();
    let fill = BOX_WIDTH.saturating_sub(label.len() + 4);

    let mut out = format!("{tint}╭─ {label} {}{reset}\n", "─".repeat(fill));
    if let Some(title) = &notification.title {
        out.push_str(&format!("{tint}│{reset} {bold}{title}{reset}\n"));
        out.push_str(&format!("{tint}│{reset}\n"));
    }
    for line in notification.message.lines() {
        if line.is_empty() {
            out.push_str(&format!("{tint}│{reset}\n"));
        } else {
            out.push_str(&format!("{tint}│{reset} {line}\n"));
        }
    }
    out.push_str(&format!("{tint}╰{}{reset}\n", "─".repeat(BOX_WIDTH - 1)));
    out
}

/// [`NotificationPresenter`] writing boxed notifications to any writer.
pub struct TerminalPresenter<W: Write + Send> {
    out: Mutex<W>,
    color: bool,
}

impl TerminalPresenter<io::Stdout> {
    /// Presenter on stdout, coloured when stdout is a terminal.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), use_color())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub const fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> NotificationPresenter for TerminalPresenter<W> {
    fn render(&self, notification: &Notification) -> io::Result<()> {
        let text = format_notification(notification, self.color);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{text}")?;
        out.flush()
    }
}
