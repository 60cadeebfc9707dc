//! Strongly-typed account identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Identifier of an account: an opaque, caller-chosen, non-empty string.
///
/// The identifier doubles as the storage key, so it is validated once at
/// construction and treated as opaque everywhere else. Two logins with the
/// same name address the same account; there is no registration step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create an identifier from caller input.
    ///
    /// Leading and trailing whitespace is trimmed; a blank result is
    /// rejected.
    pub fn new(raw: &str) -> Result<Self, LedgerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::invalid_account_id("must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        let id = AccountId::new("alice").unwrap();
        assert_eq!(id.as_str(), "alice");
        assert_eq!(id.to_string(), "alice");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let id = AccountId::new("  bob \n").unwrap();
        assert_eq!(id.as_str(), "bob");
    }

    #[test]
    fn rejects_empty_and_blank_input() {
        assert!(matches!(
            AccountId::new(""),
            Err(LedgerError::InvalidAccountId(_))
        ));
        assert!(matches!(
            AccountId::new("   \t"),
            Err(LedgerError::InvalidAccountId(_))
        ));
    }

    #[test]
    fn serde_round_trips_as_a_bare_string() {
        let id = AccountId::new("carol").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"carol\"");
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
