//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Build the request context from CLI input
//! 2. Call the notification service
//! 3. Format output for the terminal

pub mod notifications;
pub mod paths;
