/// Database configuration and connection management
pub mod database;

/// Initial debt seeding from config.toml
pub mod debts;
