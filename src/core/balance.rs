//! Balance derivation - computes a debt's figures from its transaction ledger.
//!
//! Nothing here touches the database. The transaction list is the single
//! source of truth: paid amount, remaining amount, and progress are recomputed
//! from it on every read instead of being stored on the debt row. All
//! functions are pure and deterministic.

use crate::core::transaction::TransactionKind;
use crate::entities::debt_transaction;
use chrono::NaiveDate;

/// Number of days ahead within which a due date counts as "due soon".
pub const DUE_SOON_DAYS: i64 = 7;

/// Sum of all payment-kind amounts in the ledger. Returns 0.0 for an empty list.
#[must_use]
pub fn paid_amount(transactions: &[debt_transaction::Model]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Payment.as_str())
        .map(|t| t.amount)
        .sum()
}

/// Sum of all increase-kind amounts in the ledger (additional draws).
#[must_use]
pub fn increase_amount(transactions: &[debt_transaction::Model]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Increase.as_str())
        .map(|t| t.amount)
        .sum()
}

/// Outstanding balance: `principal + increases - payments`.
///
/// An overpaid debt yields a negative value; the result is intentionally not
/// clamped so overpayment stays representable. Display layers may floor it.
#[must_use]
pub fn remaining_amount(principal_amount: f64, transactions: &[debt_transaction::Model]) -> f64 {
    principal_amount + increase_amount(transactions) - paid_amount(transactions)
}

/// Repayment progress as a whole percentage in `[0, 100]`.
///
/// Computed as `round(paid / principal * 100)`, clamped at 100 for
/// overpayment. A debt with zero principal always reports 0.
#[must_use]
pub fn progress_percent(principal_amount: f64, transactions: &[debt_transaction::Model]) -> u8 {
    if principal_amount <= 0.0 {
        return 0;
    }

    let percent = (paid_amount(transactions) / principal_amount * 100.0).round();
    // Cast safety: percent is clamped to [0, 100] before the cast.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = percent.clamp(0.0, 100.0) as u8;
    percent
}

/// Signed whole days until the due date, or `None` when no due date is set.
///
/// Negative values mean the debt is overdue by that many days.
#[must_use]
pub fn days_until_due(due_date: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    due_date.map(|due| (due - today).num_days())
}

/// Whether a `days_until_due` value falls inside the "due soon" window.
#[must_use]
pub const fn is_due_soon(days_until_due: i64) -> bool {
    0 <= days_until_due && days_until_due <= DUE_SOON_DAYS
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger_entry(id: i64, amount: f64, kind: TransactionKind) -> debt_transaction::Model {
        debt_transaction::Model {
            id,
            debt_id: 1,
            amount,
            kind: kind.as_str().to_string(),
            description: None,
            date: date(2026, 1, 1),
            created_at: chrono::Utc::now(),
        }
    }

    fn payment(id: i64, amount: f64) -> debt_transaction::Model {
        ledger_entry(id, amount, TransactionKind::Payment)
    }

    fn increase(id: i64, amount: f64) -> debt_transaction::Model {
        ledger_entry(id, amount, TransactionKind::Increase)
    }

    #[test]
    fn test_empty_ledger() {
        assert_eq!(paid_amount(&[]), 0.0);
        assert_eq!(increase_amount(&[]), 0.0);
        // No transactions: remaining is exactly the principal
        assert_eq!(remaining_amount(1000.0, &[]), 1000.0);
        assert_eq!(progress_percent(1000.0, &[]), 0);
    }

    #[test]
    fn test_remaining_amount_formula() {
        let ledger = vec![payment(1, 200.0), increase(2, 500.0), payment(3, 100.0)];

        assert_eq!(paid_amount(&ledger), 300.0);
        assert_eq!(increase_amount(&ledger), 500.0);
        assert_eq!(remaining_amount(1000.0, &ledger), 1000.0 + 500.0 - 300.0);
    }

    #[test]
    fn test_overpayment_yields_negative_remaining() {
        let ledger = vec![payment(1, 150.0)];

        assert_eq!(remaining_amount(100.0, &ledger), -50.0);
        // Progress is clamped even though remaining is not
        assert_eq!(progress_percent(100.0, &ledger), 100);
    }

    #[test]
    fn test_progress_percent_zero_principal() {
        let ledger = vec![payment(1, 50.0)];

        assert_eq!(progress_percent(0.0, &ledger), 0);
        assert_eq!(progress_percent(0.0, &[]), 0);
    }

    #[test]
    fn test_progress_percent_rounds() {
        // 2,000,000 / 15,000,000 = 13.33% -> 13
        let ledger = vec![payment(1, 2_000_000.0)];
        assert_eq!(progress_percent(15_000_000.0, &ledger), 13);

        // 2 / 3 = 66.67% -> 67
        let ledger = vec![payment(1, 2.0)];
        assert_eq!(progress_percent(3.0, &ledger), 67);
    }

    #[test]
    fn test_progress_percent_ignores_increases() {
        let ledger = vec![increase(1, 500_000.0)];
        assert_eq!(progress_percent(1_000_000.0, &ledger), 0);
    }

    #[test]
    fn test_progress_percent_monotonic_in_payments() {
        let mut ledger = vec![increase(0, 400.0)];
        let mut last = progress_percent(1000.0, &ledger);

        for id in 1..=20 {
            ledger.push(payment(id, 100.0));
            let current = progress_percent(1000.0, &ledger);
            assert!(current >= last);
            assert!(current <= 100);
            last = current;
        }

        // 2000 paid against 1000 principal: clamped
        assert_eq!(last, 100);
    }

    #[test]
    fn test_days_until_due() {
        let today = date(2026, 8, 6);

        assert_eq!(days_until_due(None, today), None);
        assert_eq!(days_until_due(Some(date(2026, 8, 6)), today), Some(0));
        assert_eq!(days_until_due(Some(date(2026, 8, 20)), today), Some(14));
        // Overdue by three days
        assert_eq!(days_until_due(Some(date(2026, 8, 3)), today), Some(-3));
    }

    #[test]
    fn test_is_due_soon_window() {
        assert!(is_due_soon(0));
        assert!(is_due_soon(7));
        assert!(!is_due_soon(8));
        assert!(!is_due_soon(-1));
    }
}
