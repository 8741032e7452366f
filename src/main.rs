use debtbook::config;
use debtbook::core::{debt, report};
use debtbook::errors::Result;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Initialize database
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!("Database initialized successfully.");

    // 4. Seed initial debts from config.toml, if present
    match config::debts::load_default_config() {
        Ok(seed_config) => {
            let created = config::debts::seed_initial_debts(&db, &seed_config).await?;
            info!(created, "Processed seed configuration.");
        }
        Err(e) => warn!("No seed configuration applied: {e}"),
    }

    // 5. Log the portfolio state
    let summary = report::summarize_portfolio(&db).await?;
    info!(
        debt_count = summary.debt_count,
        total_outstanding = %report::format_amount(summary.total_outstanding),
        average_interest_rate = summary.average_interest_rate,
        "Portfolio summary"
    );

    for entry in debt::get_all_debts(&db).await? {
        let debt_report = report::generate_debt_report(&db, entry.id, Some(5)).await?;
        info!("{}", report::format_debt_line(&debt_report));
    }

    Ok(())
}
