#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod eligibility;
pub mod paths;
pub mod ports;
pub mod services;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use domain::{
    Frequency, Notification, NotificationDocument, NotificationError, RawNotification,
    RequestContext, Severity, parse_document,
};
pub use eligibility::{Eligibility, Gate, evaluate, select_eligible};
pub use paths::{PathError, ResolvedPaths, cache_path, data_root};
pub use ports::{
    CacheEntry, CacheError, CacheStore, CoreError, NotificationPresenter, NotificationSourcePort,
    SourcePortError,
};
pub use services::{NOTIFICATIONS_TTL, NotificationService, get_or_repopulate};

// Re-exported so adapters and tests name the same version type as the engine.
pub use semver::Version;
