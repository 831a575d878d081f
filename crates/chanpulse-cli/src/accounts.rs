//! `accounts` command: inspect the tracked accounts for a platform.

use chanpulse_core::Platform;

/// Prints the accounts the importer would process for `platform`.
///
/// # Errors
///
/// Returns an error if the account listing query fails.
pub(crate) async fn run_accounts_list(
    pool: &sqlx::PgPool,
    platform: Platform,
) -> anyhow::Result<()> {
    let accounts = chanpulse_db::list_accounts(pool, platform).await?;

    if accounts.is_empty() {
        println!("no accounts tracked for {platform}");
        return Ok(());
    }
    for account in &accounts {
        println!("{}\t(source {})", account.id, account.source_id);
    }
    println!("{} accounts tracked for {platform}", accounts.len());
    Ok(())
}
