//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Storage-level
/// corruption is recovered inside the store (fresh-state fallback) and is
/// never surfaced through this type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// Amount input did not parse as a finite number, or was not positive.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Withdrawal exceeds the current balance. No overdraft, no partial
    /// withdrawal.
    #[error("insufficient balance: requested {requested:.2}, available {available:.2}")]
    InsufficientBalance { requested: f64, available: f64 },

    /// Account identifier failed validation (empty or blank).
    #[error("invalid account id: {0}")]
    InvalidAccountId(String),

    /// A ledger operation was attempted with no account logged in.
    #[error("no active session")]
    NoSession,
}

impl LedgerError {
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount(input.into())
    }

    pub fn invalid_account_id(msg: impl Into<String>) -> Self {
        Self::InvalidAccountId(msg.into())
    }
}
