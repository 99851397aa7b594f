use std::collections::HashMap;

use stockroom_core::{DomainError, DomainResult, ItemNumber};

use crate::config::RegistryConfig;
use crate::item::{Item, NewItem};
use crate::table::{self, DEFAULT_DECIMAL_PLACES};

/// Placeholder rendered for a registry without entries.
pub const EMPTY_TABLE: &str = "[Empty]";

/// In-memory store of items keyed by item number.
///
/// The registry exclusively owns its items. Every accessor hands out clones,
/// so nothing a caller does with a returned [`Item`] can reach the stored
/// state; changes go through the registry's own operations, which validate
/// before writing.
///
/// Iteration order follows the underlying hash map: unspecified, but the
/// same for every read between two mutations.
#[derive(Debug, Clone)]
pub struct Registry {
    items: HashMap<ItemNumber, Item>,
    display_decimal_places: usize,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            display_decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-filled with the sample records.
    pub fn with_sample_data() -> DomainResult<Self> {
        let mut registry = Self::new();
        registry.fill_with_sample_data()?;
        Ok(registry)
    }

    pub fn from_config(config: &RegistryConfig) -> DomainResult<Self> {
        let mut registry = Self {
            items: HashMap::new(),
            display_decimal_places: table::decimal_places(config.display_decimal_places)?,
        };
        if config.seed_sample_data {
            registry.fill_with_sample_data()?;
        }
        Ok(registry)
    }

    /// Register every sample record. Fails on the first one already taken.
    pub fn fill_with_sample_data(&mut self) -> DomainResult<()> {
        for new in crate::sample::sample_items() {
            self.register_new_item(new)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate and store a new item.
    ///
    /// The key is checked before anything else, so a duplicate is reported
    /// even when other fields are invalid too.
    pub fn register_new_item(&mut self, new: NewItem) -> DomainResult<()> {
        if self.item_number_taken(&new.item_number) {
            return Err(DomainError::duplicate(new.item_number));
        }
        let item = Item::new(new)?;
        self.items.insert(item.item_number().clone(), item);
        Ok(())
    }

    pub fn item_number_taken(&self, item_number: &str) -> bool {
        self.items.contains_key(item_number)
    }

    /// Copy of the stored item.
    pub fn get_item(&self, item_number: &str) -> DomainResult<Item> {
        self.item(item_number).cloned()
    }

    /// Copies of the requested items, in request order.
    pub fn get_items<S: AsRef<str>>(&self, item_numbers: &[S]) -> DomainResult<Vec<Item>> {
        item_numbers
            .iter()
            .map(|n| self.get_item(n.as_ref()))
            .collect()
    }

    /// Copies of every stored item.
    pub fn get_all(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    /// Remove an entry. Returns whether anything was removed.
    pub fn delete_item_entry(&mut self, item_number: &str) -> bool {
        self.items.remove(item_number).is_some()
    }

    /// Add (positive `delta`) or withdraw (negative `delta`) units.
    pub fn change_amount_in_storage(&mut self, item_number: &str, delta: i64) -> DomainResult<()> {
        let item = self.item_mut(item_number)?;
        let current = item.amount_in_storage();
        let amount = current.checked_add(delta).ok_or_else(|| {
            DomainError::invalid_argument(format!("changing {current} units by {delta} overflows"))
        })?;
        if amount < 0 {
            return Err(DomainError::invalid_state(format!(
                "cannot withdraw {} units of {item_number}, only {current} in storage",
                delta.unsigned_abs()
            )));
        }
        item.set_amount_in_storage(amount)
    }

    pub fn increase_amount_in_storage(
        &mut self,
        item_number: &str,
        amount: i64,
    ) -> DomainResult<()> {
        require_magnitude(amount)?;
        self.change_amount_in_storage(item_number, amount)
    }

    pub fn decrease_amount_in_storage(
        &mut self,
        item_number: &str,
        amount: i64,
    ) -> DomainResult<()> {
        require_magnitude(amount)?;
        self.change_amount_in_storage(item_number, -amount)
    }

    pub fn set_item_price(&mut self, item_number: &str, price: i64) -> DomainResult<()> {
        self.item_mut(item_number)?.set_price(price)
    }

    pub fn set_item_discount(&mut self, item_number: &str, percent_off: f64) -> DomainResult<()> {
        self.item_mut(item_number)?.set_discount(percent_off)
    }

    pub fn set_item_description(
        &mut self,
        item_number: &str,
        description: impl Into<String>,
    ) -> DomainResult<()> {
        self.item_mut(item_number)?.set_description(description)
    }

    /// Item numbers containing `term`, ignoring case.
    pub fn search_by_item_number(&self, term: &str) -> Vec<ItemNumber> {
        let term = term.to_lowercase();
        self.items
            .keys()
            .filter(|number| number.as_str().to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    /// Item numbers of items whose description contains `term`, ignoring case.
    pub fn search_by_description(&self, term: &str) -> Vec<ItemNumber> {
        let term = term.to_lowercase();
        self.items
            .values()
            .filter(|item| item.description().to_lowercase().contains(&term))
            .map(|item| item.item_number().clone())
            .collect()
    }

    /// Every item as an aligned table, or [`EMPTY_TABLE`] when there are none.
    pub fn render_table(&self, decimal_places: i32) -> DomainResult<String> {
        let rendered = table::create_table(self.items.values(), decimal_places)?;
        Ok(rendered.unwrap_or_else(|| EMPTY_TABLE.to_string()))
    }

    fn item(&self, item_number: &str) -> DomainResult<&Item> {
        self.items
            .get(item_number)
            .ok_or_else(|| DomainError::not_found(item_number))
    }

    fn item_mut(&mut self, item_number: &str) -> DomainResult<&mut Item> {
        self.items
            .get_mut(item_number)
            .ok_or_else(|| DomainError::not_found(item_number))
    }
}

impl core::fmt::Display for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match table::render_rows(self.items.values(), self.display_decimal_places) {
            Some(rendered) => f.write_str(&rendered),
            None => f.write_str(EMPTY_TABLE),
        }
    }
}

fn require_magnitude(amount: i64) -> DomainResult<()> {
    if amount < 0 {
        return Err(DomainError::invalid_argument(format!(
            "amount must be zero or a positive value, got {amount}"
        )));
    }
    Ok(())
}
