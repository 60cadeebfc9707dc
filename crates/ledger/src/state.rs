use serde::{Deserialize, Serialize};
use tracing::debug;

use passbook_core::LedgerError;

use crate::transaction::{Transaction, TransactionKind};

/// Running balance plus ordered transaction history for one account.
///
/// `balance` is a cache of the history sum, kept in step by
/// [`LedgerState::apply_amount`] — the only mutation path. Fields are private
/// so the two can never drift apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    balance: f64,
    /// Most-recent-first, strictly by insertion.
    history: Vec<Transaction>,
}

/// Outcome of a successful mutation: the state to persist plus the created
/// transaction, returned separately for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub new_state: LedgerState,
    pub transaction: Transaction,
}

impl LedgerState {
    /// Zero balance, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// History entries, newest first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Parse caller input into an amount the engine accepts.
    ///
    /// Rejects anything that is not a finite number strictly greater than
    /// zero (`"NaN"` and `"inf"` parse as floats but are not finite).
    pub fn parse_amount(input: &str) -> Result<f64, LedgerError> {
        let trimmed = input.trim();
        let amount: f64 = trimmed
            .parse()
            .map_err(|_| LedgerError::invalid_amount(trimmed))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::invalid_amount(trimmed));
        }
        Ok(amount)
    }

    /// Apply a deposit or withdrawal given raw amount input.
    ///
    /// Pure: `self` is left untouched and no store is involved. A validation
    /// failure therefore leaves no trace anywhere.
    pub fn apply_transaction(
        &self,
        kind: TransactionKind,
        amount_input: &str,
    ) -> Result<Applied, LedgerError> {
        let amount = Self::parse_amount(amount_input)?;
        self.apply_amount(kind, amount)
    }

    /// Apply an already-parsed amount.
    ///
    /// Validation order: amount must be finite and positive, then a
    /// withdrawal must not exceed the current balance.
    pub fn apply_amount(
        &self,
        kind: TransactionKind,
        amount: f64,
    ) -> Result<Applied, LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::invalid_amount(amount.to_string()));
        }
        if kind == TransactionKind::Withdraw && amount > self.balance {
            return Err(LedgerError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }

        let balance = match kind {
            TransactionKind::Deposit => self.balance + amount,
            TransactionKind::Withdraw => self.balance - amount,
        };

        let transaction = Transaction::new(kind, amount);
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.push(transaction.clone());
        history.extend(self.history.iter().cloned());

        debug!(
            id = %transaction.id,
            kind = transaction.kind.label(),
            amount,
            balance,
            "transaction applied"
        );

        Ok(Applied {
            new_state: LedgerState { balance, history },
            transaction,
        })
    }

    /// Recompute the balance by replaying the history oldest-first.
    ///
    /// Exposed for integrity checks; [`LedgerState::balance`] is the O(1)
    /// cached read. Replaying in insertion order reproduces the exact
    /// floating-point operation sequence, so the two always compare equal.
    pub fn replayed_balance(&self) -> f64 {
        self.history.iter().rev().fold(0.0, |acc, t| match t.kind {
            TransactionKind::Deposit => acc + t.amount,
            TransactionKind::Withdraw => acc - t.amount,
        })
    }
}
