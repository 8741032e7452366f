//! Debt transaction entity - Represents one ledger movement against a debt.
//!
//! Each transaction has a `debt_id`, a positive amount, a `kind` (`"payment"`
//! or `"increase"`), an optional description, and the calendar date it applies
//! to. The ordered set of these rows is the single source of truth for a
//! debt's derived balances.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debt_transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the debt this transaction belongs to
    pub debt_id: i64,
    /// Transaction amount; always positive, direction comes from `kind`
    pub amount: f64,
    /// Kind of movement: `"payment"` reduces the balance, `"increase"` raises it
    pub kind: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Calendar date the movement applies to
    pub date: Date,
    /// When the transaction row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between DebtTransaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one debt
    #[sea_orm(
        belongs_to = "super::debt::Entity",
        from = "Column::DebtId",
        to = "super::debt::Column::Id"
    )]
    Debt,
}

impl Related<super::debt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Debt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
