//! Report generation business logic.
//!
//! Builds per-debt reports and portfolio-level rollups from the transaction
//! ledger. Figures are recomputed fresh on every call; there is no caching
//! layer and no stored aggregate to drift out of sync with the ledger.
//! Formatting helpers return plain strings for whatever surface renders them.

use crate::{
    core::balance,
    entities::{debt, debt_transaction},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

/// Per-debt report with all derived figures.
#[derive(Debug, Clone)]
pub struct DebtReport {
    /// The debt being reported on
    pub debt: debt::Model,
    /// Running sum of payment-kind transactions
    pub paid_amount: f64,
    /// Outstanding balance; negative when overpaid
    pub remaining_amount: f64,
    /// Repayment progress in [0, 100]
    pub progress_percent: u8,
    /// Signed days until the due date, if one is set
    pub days_until_due: Option<i64>,
    /// Most recent transactions, newest first
    pub recent_transactions: Vec<debt_transaction::Model>,
}

/// Portfolio-level rollup across all debts.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    /// Number of debts
    pub debt_count: usize,
    /// Signed sum of every debt's remaining amount; overpaid debts subtract
    pub total_outstanding: f64,
    /// Mean interest rate over debts that have one; 0.0 when none do
    pub average_interest_rate: f64,
}

/// Generates a report for a single debt.
///
/// Derived figures come from the full ledger; `transaction_limit` only trims
/// the list echoed back for display (default 10).
///
/// # Errors
/// Returns `DebtNotFound` if the debt does not exist, or a database error.
pub async fn generate_debt_report(
    db: &DatabaseConnection,
    debt_id: i64,
    transaction_limit: Option<usize>,
) -> Result<DebtReport> {
    let debt = crate::core::debt::get_debt_by_id(db, debt_id)
        .await?
        .ok_or(Error::DebtNotFound { id: debt_id })?;

    let transactions = crate::core::transaction::get_transactions_for_debt(db, debt_id).await?;

    let paid_amount = balance::paid_amount(&transactions);
    let remaining_amount = balance::remaining_amount(debt.principal_amount, &transactions);
    let progress_percent = balance::progress_percent(debt.principal_amount, &transactions);
    let days_until_due =
        balance::days_until_due(debt.due_date, chrono::Utc::now().date_naive());

    let limit = transaction_limit.unwrap_or(10);
    let recent_transactions: Vec<debt_transaction::Model> =
        transactions.into_iter().take(limit).collect();

    Ok(DebtReport {
        debt,
        paid_amount,
        remaining_amount,
        progress_percent,
        days_until_due,
        recent_transactions,
    })
}

/// Rolls up the whole portfolio from the individual ledgers.
///
/// The total is a signed sum: an overpaid debt's negative remaining amount
/// offsets the others rather than being clamped to zero first.
pub async fn summarize_portfolio(db: &DatabaseConnection) -> Result<PortfolioSummary> {
    let debts = crate::core::debt::get_all_debts(db).await?;

    let mut total_outstanding = 0.0;
    let mut rate_sum = 0.0;
    let mut rated_count = 0_usize;

    for debt in &debts {
        let transactions =
            crate::core::transaction::get_transactions_for_debt(db, debt.id).await?;
        total_outstanding += balance::remaining_amount(debt.principal_amount, &transactions);

        if let Some(rate) = debt.interest_rate {
            rate_sum += rate;
            rated_count += 1;
        }
    }

    // Cast safety: rated_count is a small collection size.
    #[allow(clippy::cast_precision_loss)]
    let average_interest_rate = if rated_count == 0 {
        0.0
    } else {
        rate_sum / rated_count as f64
    };

    Ok(PortfolioSummary {
        debt_count: debts.len(),
        total_outstanding,
        average_interest_rate,
    })
}

/// Formats a monetary amount like `$1234.56` or `-$50.00`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${amount:.2}")
    }
}

/// Generates a summary line for a ledger transaction.
///
/// Payments render with a leading `-` (they reduce the outstanding balance),
/// increases with a `+`.
#[must_use]
pub fn format_transaction_summary(transaction: &debt_transaction::Model) -> String {
    let sign = if transaction.kind == "increase" { '+' } else { '-' };
    let desc = transaction.description.as_deref().unwrap_or("(no description)");

    format!(
        "{sign}${:.2} | {} | {} | {desc}",
        transaction.amount, transaction.date, transaction.kind
    )
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80%`. Progress is
/// already guaranteed to be in [0, 100], so integer math suffices.
#[must_use]
pub fn format_progress_bar(progress_percent: u8, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let filled = (usize::from(progress_percent) * length + 50) / 100;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {progress_percent}%")
}

/// One-line rendering of a debt report for logs and plain-text surfaces.
#[must_use]
pub fn format_debt_line(report: &DebtReport) -> String {
    let bar = format_progress_bar(report.progress_percent, None);
    let remaining = format_amount(report.remaining_amount);

    let due = match report.days_until_due {
        None => String::new(),
        Some(days) if days < 0 => format!(" (overdue by {} days)", -days),
        Some(0) => " (due today)".to_string(),
        Some(days) if balance::is_due_soon(days) => format!(" (due soon: {days} days)"),
        Some(days) => format!(" (due in {days} days)"),
    };

    format!("{}: {bar} paid, {remaining} remaining{due}", report.debt.name)
}
