use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use chanpulse_core::{ImportWindow, Platform};

mod accounts;
mod import;

#[derive(Debug, Parser)]
#[command(name = "chanpulse")]
#[command(about = "Periodic importer for social-channel metrics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one import batch for a platform
    Run {
        /// Platform tag (e.g. "YouTube")
        #[arg(long)]
        platform: String,

        /// Window lower bound (RFC 3339); overrides the configured window
        #[arg(long, requires = "published_before")]
        published_after: Option<String>,

        /// Window upper bound (RFC 3339); overrides the configured window
        #[arg(long, requires = "published_after")]
        published_before: Option<String>,
    },
    /// List the accounts tracked for a platform
    Accounts {
        /// Platform tag (e.g. "YouTube")
        #[arg(long)]
        platform: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let mut config = chanpulse_core::load_app_config_from_env()?;
    init_tracing(&config.log_level);

    match cli.command {
        Commands::Run {
            platform,
            published_after,
            published_before,
        } => {
            let platform = parse_platform(&platform)?;
            if let Some(window) = parse_window_override(published_after, published_before)? {
                config.window = Some(window);
            }

            let pool = chanpulse_db::connect_pool(
                &config.database_url,
                chanpulse_db::PoolConfig::from_app_config(&config),
            )
            .await?;

            let summary = import::run_import(&pool, &config, platform).await?;
            println!(
                "processed {} accounts: {} profile rows, {} content rows, {} errors",
                summary.accounts_processed,
                summary.profiles_written,
                summary.content_rows_written,
                summary.errors
            );
            // Partial per-account failures still exit 0; only a run that
            // could not start at all reports failure.
            Ok(())
        }
        Commands::Accounts { platform } => {
            let platform = parse_platform(&platform)?;
            let pool = chanpulse_db::connect_pool(
                &config.database_url,
                chanpulse_db::PoolConfig::from_app_config(&config),
            )
            .await?;
            accounts::run_accounts_list(&pool, platform).await
        }
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_platform(tag: &str) -> anyhow::Result<Platform> {
    Platform::parse(tag).ok_or_else(|| anyhow::anyhow!("unknown platform: \"{tag}\""))
}

/// Builds a window from the CLI override flags. Both flags are present or
/// both absent (clap enforces the pairing).
fn parse_window_override(
    published_after: Option<String>,
    published_before: Option<String>,
) -> anyhow::Result<Option<ImportWindow>> {
    let (Some(after_raw), Some(before_raw)) = (published_after, published_before) else {
        return Ok(None);
    };
    let published_after = parse_bound(&after_raw, "--published-after")?;
    let published_before = parse_bound(&before_raw, "--published-before")?;
    anyhow::ensure!(
        published_after < published_before,
        "--published-after must be earlier than --published-before"
    );
    Ok(Some(ImportWindow {
        published_after,
        published_before,
    }))
}

fn parse_bound(raw: &str, flag: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| anyhow::anyhow!("invalid {flag} value \"{raw}\": {e}"))
}
