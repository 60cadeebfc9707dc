//! Account persistence: durable key-value mapping from [`passbook_core::AccountId`]
//! to [`passbook_ledger::LedgerState`], plus the single session pointer.
//!
//! The store favors availability over strict integrity: a missing record and
//! an undecodable record both load as a fresh zero-balance state. The two
//! cases are logged distinctly so data corruption stays detectable.

pub mod account_store;
pub mod file;
pub mod memory;

pub use account_store::AccountStore;
pub use file::FileAccountStore;
pub use memory::InMemoryAccountStore;
