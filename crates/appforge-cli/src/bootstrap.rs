//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Durable cache (via appforge-cache)
//! - Notifications source (via appforge-notices)
//! - Notification service (via appforge-core)

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use appforge_cache::FileCache;
use appforge_core::{
    CacheStore, CoreError, NotificationService, NotificationSourcePort, RequestContext, Version,
    cache_path,
};
use appforge_notices::{DefaultNoticesClient, NoticesClientConfig};

use crate::error::CliError;

/// Environment variable overriding the notifications document URL.
pub const NOTIFICATIONS_URL_ENV: &str = "APPFORGE_NOTIFICATIONS_URL";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Durable cache file.
    pub cache_path: PathBuf,
    /// Notifications document URL; `None` uses the built-in default.
    pub notifications_url: Option<String>,
    /// Version compared against notification version bounds.
    pub current_version: Version,
}

impl CliConfig {
    /// Resolve configuration from the environment and build metadata.
    pub fn from_env() -> Result<Self, CliError> {
        let notifications_url = env::var(NOTIFICATIONS_URL_ENV)
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            cache_path: cache_path().map_err(CoreError::from)?,
            notifications_url,
            current_version: current_version()?,
        })
    }
}

/// The running build's version.
pub fn current_version() -> Result<Version, CliError> {
    Version::parse(appforge_build_info::SEMVER).map_err(|e| {
        CoreError::Configuration(format!(
            "build version '{}' is not semver: {e}",
            appforge_build_info::SEMVER
        ))
        .into()
    })
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Notification service over the durable cache and remote source.
    pub notifications: NotificationService,
    pub current_version: Version,
}

impl CliContext {
    pub const fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    /// Request context for `command_id` at the current time.
    ///
    /// An empty `surfaces` list means the project surfaces are unknown, so
    /// surface matching falls back to the command's namespace.
    pub fn request_context(
        &self,
        command_id: &str,
        surfaces: &[String],
    ) -> Result<RequestContext, CliError> {
        if surfaces.iter().any(|s| s.trim().is_empty()) {
            return Err(CoreError::Validation("--surface cannot be empty".to_string()).into());
        }

        let ctx = RequestContext::new(command_id, self.current_version.clone());
        Ok(if surfaces.is_empty() {
            ctx
        } else {
            ctx.with_active_surfaces(surfaces.iter().map(|s| s.trim().to_string()))
        })
    }
}

/// Bootstrap the CLI application.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let cache: Arc<dyn CacheStore> = Arc::new(FileCache::open(config.cache_path));

    let client_config = NoticesClientConfig::new()
        .with_user_agent(format!("appforge/{}", appforge_build_info::LONG_VERSION))
        .with_optional_url(config.notifications_url);
    let source: Arc<dyn NotificationSourcePort> =
        Arc::new(DefaultNoticesClient::new(&client_config)?);

    Ok(bootstrap_with(cache, source, config.current_version))
}

/// Bootstrap from [`CliConfig::from_env`].
///
/// Only called by commands that need the notification service; a bad
/// notifications URL never blocks anything else.
pub fn bootstrap_from_env() -> Result<CliContext, CliError> {
    bootstrap(CliConfig::from_env()?)
}

/// Bootstrap with injected ports (for testing).
pub fn bootstrap_with(
    cache: Arc<dyn CacheStore>,
    source: Arc<dyn NotificationSourcePort>,
    current_version: Version,
) -> CliContext {
    CliContext {
        notifications: NotificationService::new(cache, source),
        current_version,
    }
}
