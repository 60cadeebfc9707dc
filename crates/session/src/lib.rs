//! Session context: which account is active, and the load → apply → save
//! orchestration for deposits and withdrawals.
//!
//! The session pointer in the backing store is kept in step with
//! `login`/`logout`, so a later [`Session::resume`] restores the same
//! account. There is no credential check; a login is just a name.

pub mod session;

pub use session::Session;
