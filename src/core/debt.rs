//! Debt business logic - Handles all debt-related operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting debts.
//! Validation runs before any store call, so malformed input never reaches
//! the database. Deleting a debt removes its transaction ledger in the same
//! store transaction. All functions are async and return Result types.

use crate::{
    entities::{Debt, DebtTransaction, debt, debt_transaction},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Partial update for a debt. `None` fields are left unchanged; for the
/// optional columns the inner `None` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct DebtUpdate {
    /// New name, if changing
    pub name: Option<String>,
    /// New principal amount, if changing (transactions never touch this)
    pub principal_amount: Option<f64>,
    /// New interest rate; `Some(None)` clears it
    pub interest_rate: Option<Option<f64>>,
    /// New due date; `Some(None)` clears it
    pub due_date: Option<Option<NaiveDate>>,
    /// New description; `Some(None)` clears it
    pub description: Option<Option<String>>,
}

/// Retrieves all debts, ordered alphabetically by name.
pub async fn get_all_debts(db: &DatabaseConnection) -> Result<Vec<debt::Model>> {
    Debt::find()
        .order_by_asc(debt::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific debt by its name, returning None if not found.
///
/// Used by config seeding to skip debts that already exist.
pub async fn get_debt_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<debt::Model>> {
    Debt::find()
        .filter(debt::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a debt by its unique ID, used for direct lookups.
pub async fn get_debt_by_id(db: &DatabaseConnection, debt_id: i64) -> Result<Option<debt::Model>> {
    Debt::find_by_id(debt_id).one(db).await.map_err(Into::into)
}

/// Creates a new debt with an empty transaction ledger.
///
/// The name is trimmed and must be non-empty, the principal must be finite
/// and non-negative, and the interest rate (when given) must be finite and
/// non-negative. Timestamps are set here, not by the caller.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The principal amount is negative or not finite (NaN, infinity)
/// - The interest rate is negative or not finite
/// - The database insert operation fails
pub async fn create_debt(
    db: &DatabaseConnection,
    name: String,
    principal_amount: f64,
    interest_rate: Option<f64>,
    due_date: Option<NaiveDate>,
    description: Option<String>,
) -> Result<debt::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }

    if principal_amount < 0.0 {
        return Err(Error::InvalidAmount {
            amount: principal_amount,
        });
    }

    if !principal_amount.is_finite() {
        return Err(Error::InvalidAmount {
            amount: principal_amount,
        });
    }

    if let Some(rate) = interest_rate {
        if rate < 0.0 || !rate.is_finite() {
            return Err(Error::InvalidRate { rate });
        }
    }

    let now = chrono::Utc::now();

    let debt = debt::ActiveModel {
        name: Set(name.trim().to_string()),
        principal_amount: Set(principal_amount),
        interest_rate: Set(interest_rate),
        due_date: Set(due_date),
        description: Set(description),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    debt.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to an existing debt and refreshes `updated_at`.
///
/// Changed fields are re-validated with the same rules as creation. The
/// debt's transaction ledger is never touched by this function.
///
/// # Errors
/// Returns an error if:
/// - A changed field fails validation
/// - The debt does not exist
/// - The database update operation fails
pub async fn update_debt(
    db: &DatabaseConnection,
    debt_id: i64,
    update: DebtUpdate,
) -> Result<debt::Model> {
    // Validate inputs before touching the store
    if let Some(ref name) = update.name {
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
    }

    if let Some(amount) = update.principal_amount {
        if amount < 0.0 || !amount.is_finite() {
            return Err(Error::InvalidAmount { amount });
        }
    }

    if let Some(Some(rate)) = update.interest_rate {
        if rate < 0.0 || !rate.is_finite() {
            return Err(Error::InvalidRate { rate });
        }
    }

    let mut debt: debt::ActiveModel = Debt::find_by_id(debt_id)
        .one(db)
        .await?
        .ok_or(Error::DebtNotFound { id: debt_id })?
        .into();

    if let Some(name) = update.name {
        debt.name = Set(name.trim().to_string());
    }
    if let Some(amount) = update.principal_amount {
        debt.principal_amount = Set(amount);
    }
    if let Some(rate) = update.interest_rate {
        debt.interest_rate = Set(rate);
    }
    if let Some(due_date) = update.due_date {
        debt.due_date = Set(due_date);
    }
    if let Some(description) = update.description {
        debt.description = Set(description);
    }
    debt.updated_at = Set(chrono::Utc::now());

    debt.update(db).await.map_err(Into::into)
}

/// Deletes a debt and every transaction in its ledger.
///
/// Both deletions run inside one store transaction, so no state is ever
/// observable where transactions survive an absent debt.
///
/// # Errors
/// Returns an error if the debt does not exist or a delete operation fails.
pub async fn delete_debt(db: &DatabaseConnection, debt_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let debt = Debt::find_by_id(debt_id)
        .one(&txn)
        .await?
        .ok_or(Error::DebtNotFound { id: debt_id })?;

    DebtTransaction::delete_many()
        .filter(debt_transaction::Column::DebtId.eq(debt_id))
        .exec(&txn)
        .await?;

    debt.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}
