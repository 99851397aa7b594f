//! Thread-safe handle around a [`Registry`].
//!
//! Mutations take the write lock, so exactly one is in flight at a time;
//! reads share the read lock and never overlap a mutation.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::{DomainError, DomainResult, ItemNumber};

use crate::item::{Item, NewItem};
use crate::registry::Registry;

/// Cloneable, shareable registry handle. Clones refer to the same store.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self::new(registry)
    }
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Registry>> {
        self.inner
            .read()
            .map_err(|_| DomainError::invalid_state("registry lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Registry>> {
        self.inner
            .write()
            .map_err(|_| DomainError::invalid_state("registry lock poisoned"))
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.read()?.is_empty())
    }

    pub fn register_new_item(&self, new: NewItem) -> DomainResult<()> {
        let item_number = new.item_number.clone();
        self.write()?.register_new_item(new)?;
        tracing::debug!(item_number = %item_number, "registered item");
        Ok(())
    }

    pub fn item_number_taken(&self, item_number: &str) -> DomainResult<bool> {
        Ok(self.read()?.item_number_taken(item_number))
    }

    pub fn get_item(&self, item_number: &str) -> DomainResult<Item> {
        self.read()?.get_item(item_number)
    }

    pub fn get_items<S: AsRef<str>>(&self, item_numbers: &[S]) -> DomainResult<Vec<Item>> {
        self.read()?.get_items(item_numbers)
    }

    pub fn get_all(&self) -> DomainResult<Vec<Item>> {
        Ok(self.read()?.get_all())
    }

    pub fn delete_item_entry(&self, item_number: &str) -> DomainResult<bool> {
        let removed = self.write()?.delete_item_entry(item_number);
        if removed {
            tracing::debug!(item_number, "deleted item entry");
        }
        Ok(removed)
    }

    pub fn change_amount_in_storage(&self, item_number: &str, delta: i64) -> DomainResult<()> {
        let mut registry = self.write()?;
        registry.change_amount_in_storage(item_number, delta)?;
        let amount = registry.get_item(item_number)?.amount_in_storage();
        drop(registry);
        tracing::debug!(item_number, delta, amount, "changed amount in storage");
        Ok(())
    }

    pub fn increase_amount_in_storage(&self, item_number: &str, amount: i64) -> DomainResult<()> {
        self.write()?.increase_amount_in_storage(item_number, amount)?;
        tracing::debug!(item_number, amount, "increased amount in storage");
        Ok(())
    }

    pub fn decrease_amount_in_storage(&self, item_number: &str, amount: i64) -> DomainResult<()> {
        self.write()?.decrease_amount_in_storage(item_number, amount)?;
        tracing::debug!(item_number, amount, "decreased amount in storage");
        Ok(())
    }

    pub fn set_item_price(&self, item_number: &str, price: i64) -> DomainResult<()> {
        self.write()?.set_item_price(item_number, price)?;
        tracing::debug!(item_number, price, "set item price");
        Ok(())
    }

    pub fn set_item_discount(&self, item_number: &str, percent_off: f64) -> DomainResult<()> {
        self.write()?.set_item_discount(item_number, percent_off)?;
        tracing::debug!(item_number, percent_off, "set item discount");
        Ok(())
    }

    pub fn set_item_description(
        &self,
        item_number: &str,
        description: impl Into<String>,
    ) -> DomainResult<()> {
        self.write()?.set_item_description(item_number, description)?;
        tracing::debug!(item_number, "set item description");
        Ok(())
    }

    pub fn search_by_item_number(&self, term: &str) -> DomainResult<Vec<ItemNumber>> {
        Ok(self.read()?.search_by_item_number(term))
    }

    pub fn search_by_description(&self, term: &str) -> DomainResult<Vec<ItemNumber>> {
        Ok(self.read()?.search_by_description(term))
    }

    pub fn render_table(&self, decimal_places: i32) -> DomainResult<String> {
        self.read()?.render_table(decimal_places)
    }

    /// Copy of the whole registry as it is right now.
    pub fn snapshot(&self) -> DomainResult<Registry> {
        Ok(self.read()?.clone())
    }
}
