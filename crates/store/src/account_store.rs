use std::sync::Arc;

use tracing::{debug, warn};

use passbook_core::AccountId;
use passbook_ledger::LedgerState;

/// Durable key-value mapping from account identifier to ledger state.
///
/// `load` and `save` carry no error channel: a well-formed identifier always
/// loads (falling back to a fresh state), and persistence failures are
/// logged by the implementation rather than surfaced. Last writer wins on
/// `save`; there are no merge semantics.
///
/// The session pointer is a single separate slot in the same backing medium,
/// read on startup to restore the previous session and cleared on logout.
pub trait AccountStore {
    /// Stored state for `id`, or a fresh zero-balance, empty-history state
    /// if no record exists or the record is undecodable.
    fn load(&self, id: &AccountId) -> LedgerState;

    /// Overwrite the stored state for `id` unconditionally.
    fn save(&self, id: &AccountId, state: &LedgerState);

    /// Whether a record exists for `id`. The fresh-state fallback of
    /// [`AccountStore::load`] makes absence otherwise unobservable.
    fn contains(&self, id: &AccountId) -> bool;

    /// Identifier named by the session pointer, if any.
    fn current_account(&self) -> Option<AccountId>;

    fn set_current_account(&self, id: &AccountId);

    fn clear_current_account(&self);
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore + ?Sized,
{
    fn load(&self, id: &AccountId) -> LedgerState {
        (**self).load(id)
    }

    fn save(&self, id: &AccountId, state: &LedgerState) {
        (**self).save(id, state)
    }

    fn contains(&self, id: &AccountId) -> bool {
        (**self).contains(id)
    }

    fn current_account(&self) -> Option<AccountId> {
        (**self).current_account()
    }

    fn set_current_account(&self, id: &AccountId) {
        (**self).set_current_account(id)
    }

    fn clear_current_account(&self) {
        (**self).clear_current_account()
    }
}

/// Decode a raw record, substituting a fresh state when it does not parse.
///
/// Corruption is warned about (distinct from the absent-record `debug!` in
/// the implementations) and never propagated to the caller.
pub(crate) fn decode_record(id: &AccountId, raw: &serde_json::Value) -> LedgerState {
    match serde_json::from_value(raw.clone()) {
        Ok(state) => state,
        Err(err) => {
            warn!(
                account = id.as_str(),
                %err,
                "stored ledger record is corrupt; substituting a fresh state"
            );
            LedgerState::new()
        }
    }
}

/// Log the absent-record case at `debug!` so it reads differently from the
/// corruption `warn!` above.
pub(crate) fn log_absent(id: &AccountId) {
    debug!(account = id.as_str(), "no stored ledger record; starting fresh");
}
