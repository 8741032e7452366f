//! Ledger transaction business logic - Handles all movements against a debt.
//!
//! This module is the only mutation surface for the transaction ledger.
//! Every write validates its input first and checks that the referenced debt
//! exists before touching the ledger, so a transaction can never reference an
//! absent debt. Derived balances are not stored anywhere; they are recomputed
//! from this ledger on the next read. All functions are async and return
//! Result types for proper error handling throughout the system.

use crate::{
    entities::{Debt, DebtTransaction, debt_transaction},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Kind of ledger movement against a debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Reduces the outstanding balance
    Payment,
    /// Raises the outstanding balance (e.g., an additional draw)
    Increase,
}

impl TransactionKind {
    /// Serialized form used in the database column and JSON payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Increase => "increase",
        }
    }

    /// Parses the serialized form back into a kind.
    ///
    /// # Errors
    /// Returns `Error::InvalidKind` for anything other than `"payment"` or
    /// `"increase"`.
    pub fn parse(kind: &str) -> Result<Self> {
        match kind {
            "payment" => Ok(Self::Payment),
            "increase" => Ok(Self::Increase),
            other => Err(Error::InvalidKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// Partial update for a ledger transaction. `None` fields are left unchanged;
/// for the description the inner `None` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    /// New amount, if changing; must be positive
    pub amount: Option<f64>,
    /// New kind, if changing
    pub kind: Option<TransactionKind>,
    /// New description; `Some(None)` clears it
    pub description: Option<Option<String>>,
    /// New calendar date, if changing
    pub date: Option<NaiveDate>,
}

/// Appends a new transaction to a debt's ledger.
///
/// The amount must be positive and finite; the direction of the movement
/// comes from `kind`, never from the sign. The existence check and the insert
/// run inside one store transaction. When `date` is `None` the movement is
/// dated today (UTC).
///
/// # Errors
/// Returns an error if:
/// - The amount is zero, negative, or not finite (NaN, infinity)
/// - The referenced debt does not exist
/// - The database insert operation fails
pub async fn create_transaction(
    db: &DatabaseConnection,
    debt_id: i64,
    amount: f64,
    kind: TransactionKind,
    description: Option<String>,
    date: Option<NaiveDate>,
) -> Result<debt_transaction::Model> {
    if amount <= 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    if !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }

    // Use a transaction to ensure atomicity
    let txn = db.begin().await?;

    Debt::find_by_id(debt_id)
        .one(&txn)
        .await?
        .ok_or(Error::DebtNotFound { id: debt_id })?;

    let now = chrono::Utc::now();
    let transaction = debt_transaction::ActiveModel {
        debt_id: Set(debt_id),
        amount: Set(amount),
        kind: Set(kind.as_str().to_string()),
        description: Set(description),
        date: Set(date.unwrap_or_else(|| now.date_naive())),
        created_at: Set(now),
        ..Default::default()
    };

    let result = transaction.insert(&txn).await?;

    txn.commit().await?;

    Ok(result)
}

/// Retrieves a debt's full ledger, newest first (date, then insertion order).
///
/// Fails with `DebtNotFound` when the debt itself is absent, so a deleted
/// debt is never mistaken for one with an empty ledger.
pub async fn get_transactions_for_debt(
    db: &DatabaseConnection,
    debt_id: i64,
) -> Result<Vec<debt_transaction::Model>> {
    Debt::find_by_id(debt_id)
        .one(db)
        .await?
        .ok_or(Error::DebtNotFound { id: debt_id })?;

    DebtTransaction::find()
        .filter(debt_transaction::Column::DebtId.eq(debt_id))
        .order_by_desc(debt_transaction::Column::Date)
        .order_by_desc(debt_transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific transaction by its unique ID.
pub async fn get_transaction_by_id(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<debt_transaction::Model>> {
    DebtTransaction::find_by_id(transaction_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Applies a partial update to a transaction in a debt's ledger.
///
/// A transaction reached through the wrong debt is treated as absent, the
/// same as an unknown id.
///
/// # Errors
/// Returns an error if:
/// - The new amount is zero, negative, or not finite
/// - The transaction does not exist or belongs to a different debt
/// - The database update operation fails
pub async fn update_transaction(
    db: &DatabaseConnection,
    debt_id: i64,
    transaction_id: i64,
    update: TransactionUpdate,
) -> Result<debt_transaction::Model> {
    if let Some(amount) = update.amount {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(Error::InvalidAmount { amount });
        }
    }

    let existing = DebtTransaction::find_by_id(transaction_id)
        .one(db)
        .await?
        .ok_or(Error::TransactionNotFound { id: transaction_id })?;

    if existing.debt_id != debt_id {
        return Err(Error::TransactionNotFound { id: transaction_id });
    }

    let mut transaction: debt_transaction::ActiveModel = existing.into();
    if let Some(amount) = update.amount {
        transaction.amount = Set(amount);
    }
    if let Some(kind) = update.kind {
        transaction.kind = Set(kind.as_str().to_string());
    }
    if let Some(description) = update.description {
        transaction.description = Set(description);
    }
    if let Some(date) = update.date {
        transaction.date = Set(date);
    }

    transaction.update(db).await.map_err(Into::into)
}

/// Removes a transaction from a debt's ledger.
///
/// Balances derive from the ledger, so deleting an entry restores the
/// remaining amount to exactly its pre-insert value on the next read.
///
/// # Errors
/// Returns an error if the transaction does not exist, belongs to a different
/// debt, or the delete operation fails.
pub async fn delete_transaction(
    db: &DatabaseConnection,
    debt_id: i64,
    transaction_id: i64,
) -> Result<()> {
    let transaction = DebtTransaction::find_by_id(transaction_id)
        .one(db)
        .await?
        .ok_or(Error::TransactionNotFound { id: transaction_id })?;

    if transaction.debt_id != debt_id {
        return Err(Error::TransactionNotFound { id: transaction_id });
    }

    transaction.delete(db).await?;
    Ok(())
}
