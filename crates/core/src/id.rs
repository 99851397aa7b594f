//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, ValidationReason};

/// Unique textual key of a stocked item.
///
/// Always non-blank. The original text is kept verbatim (no trimming or case
/// folding), so lookups are exact-match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemNumber(String);

impl ItemNumber {
    /// Field name reported by validation failures.
    pub const FIELD: &'static str = "item_number";

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation(Self::FIELD, ValidationReason::Blank));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for ItemNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<ItemNumber, _>` be queried with `&str`.
impl Borrow<str> for ItemNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemNumber> for String {
    fn from(value: ItemNumber) -> Self {
        value.0
    }
}
