use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use passbook_core::AccountId;
use passbook_ledger::LedgerState;

use crate::account_store::{AccountStore, decode_record, log_absent};

/// On-disk document: every account record plus the session pointer.
///
/// Records stay raw [`Value`]s until an account is actually loaded, so one
/// undecodable record cannot poison the rest of the document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    current_account: Option<String>,
    #[serde(default)]
    accounts: HashMap<String, Value>,
}

/// File-backed store: a single JSON document, re-read on every operation and
/// replaced atomically (write-then-rename) on every write.
///
/// Suited to the single-actor model this ledger assumes; concurrent writers
/// from other processes would race on load-mutate-save.
#[derive(Debug)]
pub struct FileAccountStore {
    path: PathBuf,
}

impl FileAccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> StoreDocument {
        match self.try_read_document() {
            Ok(Some(doc)) => doc,
            Ok(None) => StoreDocument::default(),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    err = format!("{err:#}"),
                    "store file unreadable; treating it as empty"
                );
                StoreDocument::default()
            }
        }
    }

    fn try_read_document(&self) -> anyhow::Result<Option<StoreDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let doc = serde_json::from_slice(&bytes).context("decoding store document")?;
        Ok(Some(doc))
    }

    fn write_document(&self, doc: &StoreDocument) {
        if let Err(err) = self.try_write_document(doc) {
            error!(
                path = %self.path.display(),
                err = format!("{err:#}"),
                "failed to persist store document"
            );
        }
    }

    fn try_write_document(&self, doc: &StoreDocument) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(doc)?)
            .with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("renaming into {}", self.path.display()))?;
        Ok(())
    }
}

impl AccountStore for FileAccountStore {
    fn load(&self, id: &AccountId) -> LedgerState {
        let doc = self.read_document();
        match doc.accounts.get(id.as_str()) {
            Some(raw) => decode_record(id, raw),
            None => {
                log_absent(id);
                LedgerState::new()
            }
        }
    }

    fn save(&self, id: &AccountId, state: &LedgerState) {
        let raw = match serde_json::to_value(state) {
            Ok(raw) => raw,
            Err(err) => {
                error!(account = id.as_str(), %err, "failed to encode ledger state");
                return;
            }
        };
        let mut doc = self.read_document();
        doc.accounts.insert(id.as_str().to_string(), raw);
        self.write_document(&doc);
    }

    fn contains(&self, id: &AccountId) -> bool {
        self.read_document().accounts.contains_key(id.as_str())
    }

    fn current_account(&self) -> Option<AccountId> {
        self.read_document()
            .current_account
            .as_deref()
            .and_then(|s| AccountId::new(s).ok())
    }

    fn set_current_account(&self, id: &AccountId) {
        let mut doc = self.read_document();
        doc.current_account = Some(id.as_str().to_string());
        self.write_document(&doc);
    }

    fn clear_current_account(&self) {
        let mut doc = self.read_document();
        doc.current_account = None;
        self.write_document(&doc);
    }
}
