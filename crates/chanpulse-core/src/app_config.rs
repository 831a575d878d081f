use std::path::PathBuf;

use crate::types::ImportWindow;

/// Fully-resolved application configuration.
///
/// Built once at startup by [`crate::config::load_app_config`] and passed
/// explicitly into the importer entry points — nothing downstream reads the
/// process environment.
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Required by the YouTube importer; its absence is only an error when
    /// that importer is actually selected.
    pub youtube_api_key: Option<String>,
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    /// Per-call HTTP timeout so a hung external call cannot stall the run.
    pub api_timeout_secs: u64,
    pub api_max_retries: u32,
    pub api_retry_backoff_base_ms: u64,
    /// Fan-out limit: maximum number of content items per account for which
    /// per-item statistics are fetched in one run.
    pub max_items_per_account: usize,
    /// `Some` when windowing is enabled.
    pub window: Option<ImportWindow>,
    pub profile_csv_path: PathBuf,
    pub content_csv_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[redacted]")
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("api_max_retries", &self.api_max_retries)
            .field("api_retry_backoff_base_ms", &self.api_retry_backoff_base_ms)
            .field("max_items_per_account", &self.max_items_per_account)
            .field("window", &self.window)
            .field("profile_csv_path", &self.profile_csv_path)
            .field("content_csv_path", &self.content_csv_path)
            .finish()
    }
}
