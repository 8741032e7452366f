/// Balance derivation from the transaction ledger
pub mod balance;

/// Debt command handlers and lookups
pub mod debt;

/// Report generation and portfolio rollups
pub mod report;

/// Ledger transaction command handlers
pub mod transaction;
