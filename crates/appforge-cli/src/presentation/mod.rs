//! Terminal presentation.
//!
//! Format-only: eligibility decisions come from the core service.

pub mod eligibility_table;
pub mod terminal_presenter;

pub use eligibility_table::format_row;
pub use terminal_presenter::{TerminalPresenter, format_notification, use_color};
