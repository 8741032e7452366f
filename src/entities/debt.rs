//! Debt entity - Represents one owed obligation.
//!
//! Each debt carries its principal, an optional interest rate and due date,
//! and timestamps. Paid and remaining amounts are never stored on this row;
//! they are derived from the debt's transaction ledger on read.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debts")]
pub struct Model {
    /// Unique identifier for the debt
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the debt (e.g., "Car loan", "Credit card")
    pub name: String,
    /// Original contracted amount owed, independent of later payments or draws
    pub principal_amount: f64,
    /// Annual interest rate as a percentage, if known
    pub interest_rate: Option<f64>,
    /// Calendar date the debt falls due, if any
    pub due_date: Option<Date>,
    /// Optional free-form description
    pub description: Option<String>,
    /// When the debt was created
    pub created_at: DateTimeUtc,
    /// When the debt was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Debt and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One debt has many ledger transactions
    #[sea_orm(has_many = "super::debt_transaction::Entity")]
    DebtTransactions,
}

impl Related<super::debt_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DebtTransactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
