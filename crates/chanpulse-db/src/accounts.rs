//! Account source: the read-only query supplying the accounts to import.

use sqlx::PgPool;

use crate::DbError;

use chanpulse_core::Platform;

/// A tracked external account, joined to its originating source.
///
/// `id` is the platform-native identifier (e.g. a YouTube channel id) and is
/// never empty for rows returned by [`list_accounts`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRow {
    pub id: String,
    pub platform: String,
    pub source_id: i64,
}

/// Returns all accounts tracked for `platform`, in stable id order.
///
/// The INNER JOIN against `sources` drops accounts whose originating source
/// has been removed. An empty result is `Ok(vec![])`, not an error; a
/// connectivity or query failure is fatal for the run and propagates.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_accounts(pool: &PgPool, platform: Platform) -> Result<Vec<AccountRow>, DbError> {
    let rows = sqlx::query_as::<_, AccountRow>(
        "SELECT ac.id, ac.platform, ac.source_id \
         FROM accounts ac \
         INNER JOIN sources sc ON ac.source_id = sc.id \
         WHERE ac.platform = $1 \
         ORDER BY ac.id",
    )
    .bind(platform.as_tag())
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
