//! Ledger engine (deposits, withdrawals, running balance).
//!
//! Pure domain logic only: no IO, no persistence concerns. Applying a
//! transaction produces a new [`LedgerState`]; persisting it is the caller's
//! job, which keeps the engine testable as a plain function.

pub mod display;
pub mod state;
pub mod transaction;

pub use display::format_balance;
pub use state::{Applied, LedgerState};
pub use transaction::{Transaction, TransactionKind};
