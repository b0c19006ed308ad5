#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultNoticesClient is used through NotificationSourcePort, not through
// its generic backend parameter
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod port;

// ============================================================================
// Public API
// ============================================================================

pub use client::DefaultNoticesClient;
pub use config::{DEFAULT_NOTIFICATIONS_URL, NoticesClientConfig};
pub use error::{NoticesError, NoticesResult};
