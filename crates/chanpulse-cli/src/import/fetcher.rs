//! Per-account fetcher: the partial-failure isolation boundary.

use chanpulse_core::{AccountResult, AppConfig};
use chanpulse_db::AccountRow;
use chanpulse_youtube::YoutubeClient;

use super::retry::retry_with_backoff;

/// What came back for one account, plus how many branches failed.
pub(crate) struct FetchOutcome {
    pub result: AccountResult,
    pub errors: u32,
}

/// Fetches one account's profile and content concurrently.
///
/// The two branches are started together and both are always awaited; a
/// branch that fails (after the caller-side retry policy is exhausted) is
/// logged with its reason and contributes `None` to the corresponding
/// [`AccountResult`] field. Nothing here aborts the account or the batch —
/// one misbehaving account or transient API error must never fail the run.
pub(crate) async fn fetch_account(
    client: &YoutubeClient,
    config: &AppConfig,
    account: &AccountRow,
) -> FetchOutcome {
    let profile_branch = retry_with_backoff(
        config.api_max_retries,
        config.api_retry_backoff_base_ms,
        || client.fetch_profile(&account.id),
    );
    let content_branch = retry_with_backoff(
        config.api_max_retries,
        config.api_retry_backoff_base_ms,
        || {
            client.collect_videos(
                &account.id,
                config.window.as_ref(),
                config.max_items_per_account,
            )
        },
    );

    let (profile_res, items_res) = tokio::join!(profile_branch, content_branch);

    let mut errors = 0u32;
    let profile = match profile_res {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!(account = %account.id, error = %e, "profile fetch failed");
            errors += 1;
            None
        }
    };
    let items = match items_res {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(account = %account.id, error = %e, "content listing failed");
            errors += 1;
            None
        }
    };

    FetchOutcome {
        result: AccountResult { profile, items },
        errors,
    }
}
