use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, ValueObject};

/// Closed set of categories an item can be filed under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Doors,
    Windows,
    Floors,
    Wood,
    Tables,
    Chairs,
}

impl ValueObject for ItemCategory {}

impl ItemCategory {
    /// Every category, in menu order.
    pub const ALL: [ItemCategory; 6] = [
        ItemCategory::Doors,
        ItemCategory::Windows,
        ItemCategory::Floors,
        ItemCategory::Wood,
        ItemCategory::Tables,
        ItemCategory::Chairs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemCategory::Doors => "Doors",
            ItemCategory::Windows => "Windows",
            ItemCategory::Floors => "Floors",
            ItemCategory::Wood => "Wood",
            ItemCategory::Tables => "Tables",
            ItemCategory::Chairs => "Chairs",
        }
    }

    /// Resolve a 1-based position in [`ItemCategory::ALL`], as shown by numbered menus.
    pub fn from_menu_index(index: usize) -> Result<Self, DomainError> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| {
                DomainError::invalid_argument(format!(
                    "item category must be a number between 1 and {}",
                    Self::ALL.len()
                ))
            })
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ItemCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::invalid_argument(format!("unknown item category: {s}")))
    }
}
