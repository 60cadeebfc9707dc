use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use tracing::error;

use passbook_core::AccountId;
use passbook_ledger::LedgerState;

use crate::account_store::{AccountStore, decode_record, log_absent};

/// In-memory store for tests and ephemeral sessions.
///
/// Records are held as raw JSON values, the same shape the file-backed store
/// persists, so decode failures behave identically across implementations.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    records: RwLock<HashMap<String, Value>>,
    current: RwLock<Option<String>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw record directly, bypassing encoding. Lets tests stage
    /// corrupt records.
    pub fn insert_raw(&self, key: &str, value: Value) {
        if let Ok(mut map) = self.records.write() {
            map.insert(key.to_string(), value);
        }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn load(&self, id: &AccountId) -> LedgerState {
        let map = match self.records.read() {
            Ok(m) => m,
            Err(_) => return LedgerState::new(),
        };
        match map.get(id.as_str()) {
            Some(raw) => decode_record(id, raw),
            None => {
                log_absent(id);
                LedgerState::new()
            }
        }
    }

    fn save(&self, id: &AccountId, state: &LedgerState) {
        match serde_json::to_value(state) {
            Ok(raw) => {
                if let Ok(mut map) = self.records.write() {
                    map.insert(id.as_str().to_string(), raw);
                }
            }
            Err(err) => {
                error!(account = id.as_str(), %err, "failed to encode ledger state");
            }
        }
    }

    fn contains(&self, id: &AccountId) -> bool {
        self.records
            .read()
            .map(|map| map.contains_key(id.as_str()))
            .unwrap_or(false)
    }

    fn current_account(&self) -> Option<AccountId> {
        let current = self.current.read().ok()?;
        current.as_deref().and_then(|s| AccountId::new(s).ok())
    }

    fn set_current_account(&self, id: &AccountId) {
        if let Ok(mut current) = self.current.write() {
            *current = Some(id.as_str().to_string());
        }
    }

    fn clear_current_account(&self) {
        if let Ok(mut current) = self.current.write() {
            *current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passbook_ledger::TransactionKind;
    use serde_json::json;

    fn id(name: &str) -> AccountId {
        AccountId::new(name).unwrap()
    }

    fn state_with_deposit(amount: f64) -> LedgerState {
        LedgerState::new()
            .apply_amount(TransactionKind::Deposit, amount)
            .unwrap()
            .new_state
    }

    #[test]
    fn load_of_unknown_account_is_fresh() {
        let store = InMemoryAccountStore::new();
        let state = store.load(&id("alice"));
        assert_eq!(state.balance(), 0.0);
        assert!(state.history().is_empty());
        assert!(!store.contains(&id("alice")));
    }

    #[test]
    fn load_is_idempotent_without_an_intervening_save() {
        let store = InMemoryAccountStore::new();
        store.save(&id("alice"), &state_with_deposit(10.0));
        assert_eq!(store.load(&id("alice")), store.load(&id("alice")));
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = InMemoryAccountStore::new();
        let state = state_with_deposit(42.5);
        store.save(&id("alice"), &state);
        assert!(store.contains(&id("alice")));
        assert_eq!(store.load(&id("alice")), state);
    }

    #[test]
    fn save_overwrites_unconditionally() {
        let store = InMemoryAccountStore::new();
        store.save(&id("alice"), &state_with_deposit(10.0));
        let second = state_with_deposit(99.0);
        store.save(&id("alice"), &second);
        assert_eq!(store.load(&id("alice")), second);
    }

    #[test]
    fn corrupt_record_loads_as_fresh_state() {
        let store = InMemoryAccountStore::new();
        store.insert_raw("bob", json!({ "balance": "not a number" }));
        let state = store.load(&id("bob"));
        assert_eq!(state.balance(), 0.0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn session_pointer_set_and_clear() {
        let store = InMemoryAccountStore::new();
        assert_eq!(store.current_account(), None);

        store.set_current_account(&id("alice"));
        assert_eq!(store.current_account(), Some(id("alice")));

        store.clear_current_account();
        assert_eq!(store.current_account(), None);
    }
}
