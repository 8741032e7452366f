//! Debt seeding configuration loading from config.toml
//!
//! Loads initial debt definitions from a TOML configuration file. The debts
//! defined in config.toml are used to seed the database on first run; entries
//! whose name already exists are skipped, so seeding is safe to repeat.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of debt configurations to seed
    #[serde(default)]
    pub debts: Vec<DebtConfig>,
}

/// Configuration for a single debt
#[derive(Debug, Deserialize, Clone)]
pub struct DebtConfig {
    /// Name of the debt
    pub name: String,
    /// Original contracted amount owed
    pub principal_amount: f64,
    /// Annual interest rate as a percentage, if known
    pub interest_rate: Option<f64>,
    /// Due date as a quoted `YYYY-MM-DD` string, if any
    pub due_date: Option<NaiveDate>,
    /// Optional free-form description
    pub description: Option<String>,
}

/// Loads debt configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads debt configuration from the default location (./config.toml)
///
/// # Errors
/// Returns an error if the file is missing or does not parse.
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

/// Seeds the configured debts into the store, skipping names that already
/// exist. Returns the number of debts created.
///
/// # Errors
/// Returns an error if a seeded entry fails validation or a store call fails.
pub async fn seed_initial_debts(db: &DatabaseConnection, config: &Config) -> Result<usize> {
    let mut created = 0;

    for entry in &config.debts {
        if crate::core::debt::get_debt_by_name(db, &entry.name)
            .await?
            .is_some()
        {
            debug!(name = %entry.name, "Debt already present, skipping seed entry");
            continue;
        }

        let debt = crate::core::debt::create_debt(
            db,
            entry.name.clone(),
            entry.principal_amount,
            entry.interest_rate,
            entry.due_date,
            entry.description.clone(),
        )
        .await?;
        info!(name = %debt.name, id = debt.id, "Seeded debt from configuration");
        created += 1;
    }

    Ok(created)
}
