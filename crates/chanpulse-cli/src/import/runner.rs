//! Batch orchestration for one import run.

use chanpulse_core::{AppConfig, Platform, RunSummary};
use chanpulse_db::AccountRow;
use chanpulse_sink::CsvSink;
use chanpulse_youtube::YoutubeClient;

use super::fetcher::{fetch_account, FetchOutcome};

/// Runs one YouTube import batch: list accounts, fetch each, persist each.
///
/// Account listing is the run's precondition — its failure (and a missing
/// API key) is fatal and nothing downstream is attempted. Everything after
/// that is isolated per account; the run completes and returns its summary
/// even when every account partially failed.
///
/// # Errors
///
/// Returns an error if the API key is missing, the client cannot be built,
/// or the account listing query fails.
pub(crate) async fn run_youtube_import(
    pool: &sqlx::PgPool,
    config: &AppConfig,
) -> anyhow::Result<RunSummary> {
    let api_key = config
        .youtube_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("YOUTUBE_API_KEY is not set; cannot run the YouTube importer"))?;

    let client = YoutubeClient::new(api_key, config.api_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build YouTube client: {e}"))?;

    let accounts = chanpulse_db::list_accounts(pool, Platform::YouTube).await?;
    tracing::info!(accounts = accounts.len(), "starting YouTube import batch");

    let sink = CsvSink::new(&config.profile_csv_path, &config.content_csv_path);
    Ok(import_accounts(&client, &sink, config, &accounts).await)
}

/// Fetches and persists each account strictly in source order.
///
/// Accounts are processed one at a time — an account's result is fully
/// persisted before the next account's fetch starts. That bounds concurrent
/// outbound API load and guarantees sink appends for one account never race
/// those of another. Sink failures are logged and counted, never propagated.
pub(crate) async fn import_accounts(
    client: &YoutubeClient,
    sink: &CsvSink,
    config: &AppConfig,
    accounts: &[AccountRow],
) -> RunSummary {
    let mut summary = RunSummary::default();

    for account in accounts {
        let FetchOutcome { result, errors } = fetch_account(client, config, account).await;
        summary.accounts_processed = summary.accounts_processed.saturating_add(1);
        summary.errors = summary.errors.saturating_add(errors);

        if let Some(profile) = &result.profile {
            match sink.append_profile(profile) {
                Ok(rows) => {
                    summary.profiles_written = summary
                        .profiles_written
                        .saturating_add(u32::try_from(rows).unwrap_or(u32::MAX));
                }
                Err(e) => {
                    tracing::error!(account = %account.id, error = %e, "failed to append profile row");
                    summary.errors = summary.errors.saturating_add(1);
                }
            }
        }
        if let Some(items) = &result.items {
            match sink.append_content(items) {
                Ok(rows) => {
                    summary.content_rows_written = summary
                        .content_rows_written
                        .saturating_add(u32::try_from(rows).unwrap_or(u32::MAX));
                }
                Err(e) => {
                    tracing::error!(account = %account.id, error = %e, "failed to append content rows");
                    summary.errors = summary.errors.saturating_add(1);
                }
            }
        }
    }

    summary
}
