//! Shared test utilities for `DebtBook`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{debt, transaction, transaction::TransactionKind},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test debt with sensible defaults.
///
/// # Defaults
/// * `principal_amount`: 1000.0
/// * `interest_rate`: None
/// * `due_date`: None
/// * `description`: None
pub async fn create_test_debt(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::debt::Model> {
    debt::create_debt(db, name.to_string(), 1000.0, None, None, None).await
}

/// Creates a test debt with custom parameters.
/// Use this when a test needs a specific principal, rate, or due date.
pub async fn create_custom_debt(
    db: &DatabaseConnection,
    name: &str,
    principal_amount: f64,
    interest_rate: Option<f64>,
    due_date: Option<NaiveDate>,
    description: Option<String>,
) -> Result<entities::debt::Model> {
    debt::create_debt(
        db,
        name.to_string(),
        principal_amount,
        interest_rate,
        due_date,
        description,
    )
    .await
}

/// Creates a payment-kind transaction dated today.
pub async fn create_test_payment(
    db: &DatabaseConnection,
    debt_id: i64,
    amount: f64,
) -> Result<entities::debt_transaction::Model> {
    transaction::create_transaction(db, debt_id, amount, TransactionKind::Payment, None, None)
        .await
}

/// Creates an increase-kind transaction dated today.
pub async fn create_test_increase(
    db: &DatabaseConnection,
    debt_id: i64,
    amount: f64,
) -> Result<entities::debt_transaction::Model> {
    transaction::create_transaction(db, debt_id, amount, TransactionKind::Increase, None, None)
        .await
}

/// Sets up a complete test environment with one debt.
/// Returns (db, debt) for common test scenarios.
pub async fn setup_with_debt() -> Result<(DatabaseConnection, entities::debt::Model)> {
    let db = setup_test_db().await?;
    let debt = create_test_debt(&db, "Test Debt").await?;
    Ok((db, debt))
}
