//! Core domain types.
//!
//! These types are pure data structures with no infrastructure dependencies.
//! Wire formats live next to the validated types they convert into.

mod context;
mod error;
mod notification;

pub use context::RequestContext;
pub use error::NotificationError;
pub use notification::{
    Frequency, Notification, NotificationDocument, RawNotification, Severity, parse_document,
};
