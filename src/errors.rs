//! Unified error types for the debt ledger.
//!
//! Validation variants are raised synchronously, before any store call.
//! Not-found and database variants surface from the store and propagate
//! unchanged to the caller. There are no retries at this layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Debt name cannot be empty")]
    EmptyName,

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Invalid interest rate: {rate}")]
    InvalidRate { rate: f64 },

    #[error("Unknown transaction kind: {kind}")]
    InvalidKind { kind: String },

    #[error("Debt not found: {id}")]
    DebtNotFound { id: i64 },

    #[error("Transaction not found: {id}")]
    TransactionNotFound { id: i64 },

    /// Reserved for optimistic locking; nothing constructs this today.
    #[error("Conflicting write: {message}")]
    Conflict { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
