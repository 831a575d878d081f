//! Import command handling: the importer registry and the run entry point.
//!
//! Per-account failures are logged and counted rather than propagated so a
//! single bad account does not abort the full run; only the run's
//! preconditions (config, account listing) are fatal.

mod fetcher;
mod retry;
mod runner;

use std::future::Future;
use std::pin::Pin;

use chanpulse_core::{AppConfig, Platform, RunSummary};

/// A platform's batch importer: one call runs one import batch.
type ImporterFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<RunSummary>> + 'a>>;
type ImporterFn = for<'a> fn(&'a sqlx::PgPool, &'a AppConfig) -> ImporterFuture<'a>;

fn youtube_importer<'a>(pool: &'a sqlx::PgPool, config: &'a AppConfig) -> ImporterFuture<'a> {
    Box::pin(runner::run_youtube_import(pool, config))
}

/// Registry lookup mapping a platform to its importer implementation.
///
/// The entry point selects the importer explicitly through this function;
/// unknown platform tags are rejected earlier, at argument parsing.
fn importer_for(platform: Platform) -> ImporterFn {
    match platform {
        Platform::YouTube => youtube_importer,
    }
}

/// Runs one import batch for `platform` and returns its summary.
///
/// # Errors
///
/// Propagates only fatal startup conditions: missing API key, client
/// construction failure, or an account listing failure. Partial per-account
/// failures are reported through [`RunSummary::errors`] instead.
pub(crate) async fn run_import(
    pool: &sqlx::PgPool,
    config: &AppConfig,
    platform: Platform,
) -> anyhow::Result<RunSummary> {
    importer_for(platform)(pool, config).await
}
