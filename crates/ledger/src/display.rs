//! Render-time formatting consumed by the UI layer.
//!
//! Amounts are stored at full precision and timestamps as UTC instants;
//! everything human-readable is produced here and only here.

use crate::transaction::Transaction;

/// Balance formatted to exactly two fraction digits.
pub fn format_balance(balance: f64) -> String {
    format!("{balance:.2}")
}

impl Transaction {
    /// History line body, e.g. `"Deposit: $100.00"`.
    pub fn summary(&self) -> String {
        format!("{}: ${:.2}", self.kind.label(), self.amount)
    }

    /// Human-readable timestamp paired with the summary in history views.
    pub fn timestamp_display(&self) -> String {
        self.occurred_at.format("%-m/%-d/%Y, %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;

    #[test]
    fn balance_renders_with_two_fraction_digits() {
        assert_eq!(format_balance(0.0), "0.00");
        assert_eq!(format_balance(60.0), "60.00");
        assert_eq!(format_balance(12.5), "12.50");
        assert_eq!(format_balance(0.005), "0.01");
    }

    #[test]
    fn summary_matches_the_history_line_contract() {
        let deposit = Transaction::new(TransactionKind::Deposit, 100.0);
        assert_eq!(deposit.summary(), "Deposit: $100.00");

        let withdrawal = Transaction::new(TransactionKind::Withdraw, 40.129);
        assert_eq!(withdrawal.summary(), "Withdraw: $40.13");
    }

    #[test]
    fn timestamp_display_is_derived_from_the_stored_instant() {
        let tx = Transaction::new(TransactionKind::Deposit, 1.0);
        let rendered = tx.timestamp_display();
        assert!(rendered.contains(", "), "{rendered}");
        assert!(rendered.contains(&tx.occurred_at.format("%Y").to_string()));
    }
}
