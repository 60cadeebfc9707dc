use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a ledger mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    /// Human-facing label, as rendered in history lines.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
        }
    }
}

/// One applied mutation. Immutable once created: entries are never edited or
/// deleted, only prepended to a ledger's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Time-ordered tag (UUIDv7) for log correlation.
    pub id: Uuid,
    pub kind: TransactionKind,
    /// Positive and finite; stored exactly as entered. Rounding to two
    /// fraction digits happens only at display time.
    pub amount: f64,
    /// When the mutation was applied (UTC instant; human-readable rendering
    /// is a display concern).
    pub occurred_at: DateTime<Utc>,
}

impl Transaction {
    /// Record a mutation happening now.
    pub fn new(kind: TransactionKind, amount: f64) -> Self {
        Self {
            id: Uuid::now_v7(),
            kind,
            amount,
            occurred_at: Utc::now(),
        }
    }
}
