//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables
//! are generated from the entity definitions via
//! `Schema::create_table_from_entity`, so the database schema always matches
//! the Rust struct definitions without manual SQL.

use crate::entities::{Debt, DebtTransaction};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Returns the database URL from `DATABASE_URL`, falling back to a local
/// `SQLite` file that is created on first use.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://debtbook.sqlite?mode=rwc".to_string())
}

/// Establishes the database connection for the configured URL.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates the `debts` and `debt_transactions` tables if they do not exist.
///
/// # Errors
/// Returns an error if a table creation statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut debt_table = schema.create_table_from_entity(Debt);
    debt_table.if_not_exists();
    let mut transaction_table = schema.create_table_from_entity(DebtTransaction);
    transaction_table.if_not_exists();

    db.execute(builder.build(&debt_table)).await?;
    db.execute(builder.build(&transaction_table)).await?;

    Ok(())
}
