use tracing::info;

use passbook_core::{AccountId, LedgerError, LedgerResult};
use passbook_ledger::{Applied, LedgerState, TransactionKind};
use passbook_store::AccountStore;

/// Explicit session context over an injected [`AccountStore`].
///
/// Holds at most one active account and a cached copy of its state for
/// display. Every mutation goes store → engine → store, so the cache is
/// never the source of truth.
#[derive(Debug)]
pub struct Session<S: AccountStore> {
    store: S,
    active: Option<(AccountId, LedgerState)>,
}

impl<S: AccountStore> Session<S> {
    /// Start a session with nobody logged in.
    pub fn new(store: S) -> Self {
        Self {
            store,
            active: None,
        }
    }

    /// Start a session, restoring the account named by the stored session
    /// pointer if there is one.
    pub fn resume(store: S) -> Self {
        let active = store.current_account().map(|id| {
            info!(account = id.as_str(), "resuming previous session");
            let state = store.load(&id);
            (id, state)
        });
        Self { store, active }
    }

    /// Log in under `name`, creating the account on first sight.
    ///
    /// Replaces any previously active account and updates the session
    /// pointer.
    pub fn login(&mut self, name: &str) -> LedgerResult<&LedgerState> {
        let id = AccountId::new(name)?;
        let state = self.store.load(&id);
        if !self.store.contains(&id) {
            // First sight of this account: persist the fresh state so it
            // exists for subsequent loads.
            self.store.save(&id, &state);
        }
        self.store.set_current_account(&id);
        info!(account = id.as_str(), "logged in");
        let (_, state) = self.active.insert((id, state));
        Ok(state)
    }

    /// Log out and clear the stored session pointer.
    pub fn logout(&mut self) {
        if let Some((id, _)) = self.active.take() {
            info!(account = id.as_str(), "logged out");
        }
        self.store.clear_current_account();
    }

    pub fn is_logged_in(&self) -> bool {
        self.active.is_some()
    }

    /// Identifier of the active account, if any.
    pub fn account(&self) -> Option<&AccountId> {
        self.active.as_ref().map(|(id, _)| id)
    }

    /// Cached ledger state of the active account, if any.
    pub fn state(&self) -> Option<&LedgerState> {
        self.active.as_ref().map(|(_, state)| state)
    }

    /// Deposit `amount_input` into the active account.
    pub fn deposit(&mut self, amount_input: &str) -> LedgerResult<Applied> {
        self.apply(TransactionKind::Deposit, amount_input)
    }

    /// Withdraw `amount_input` from the active account.
    pub fn withdraw(&mut self, amount_input: &str) -> LedgerResult<Applied> {
        self.apply(TransactionKind::Withdraw, amount_input)
    }

    /// Load current state, apply the mutation, persist the result.
    ///
    /// On a validation failure nothing is persisted and the cached state is
    /// left as it was.
    fn apply(&mut self, kind: TransactionKind, amount_input: &str) -> LedgerResult<Applied> {
        let Some((id, cached)) = self.active.as_mut() else {
            return Err(LedgerError::NoSession);
        };
        let current = self.store.load(id);
        let applied = current.apply_transaction(kind, amount_input)?;
        self.store.save(id, &applied.new_state);
        *cached = applied.new_state.clone();
        Ok(applied)
    }
}
