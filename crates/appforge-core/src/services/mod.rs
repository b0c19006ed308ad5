//! Application services that orchestrate ports.
//!
//! Services own no infrastructure. They receive ports as `Arc<dyn Trait>`
//! from the composition root and contain the sequencing logic only.

mod cache_aside;
mod notification_service;

pub use cache_aside::get_or_repopulate;
pub use notification_service::{NOTIFICATIONS_TTL, NotificationService};
