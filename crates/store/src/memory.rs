//! In-memory pantry store for tests/dev.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use despensa_core::{Category, ItemId, PantryItem, UserId};

use crate::error::StoreError;
use crate::store::PantryStore;

/// In-memory [`PantryStore`].
///
/// Ids are issued monotonically, which is the property the removal
/// tie-break ("highest id wins") relies on. A `BTreeMap` keeps listing
/// order stable across calls.
#[derive(Debug)]
pub struct InMemoryPantryStore {
    inner: RwLock<BTreeMap<ItemId, OwnedItem>>,
    next_id: AtomicU64,
}

#[derive(Debug, Clone)]
struct OwnedItem {
    owner: UserId,
    item: PantryItem,
}

impl InMemoryPantryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryPantryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::unavailable("store lock poisoned")
}

impl PantryStore for InMemoryPantryStore {
    fn list_items(&self, user: &UserId) -> Result<Vec<PantryItem>, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map
            .values()
            .filter(|owned| owned.owner == *user)
            .map(|owned| owned.item.clone())
            .collect())
    }

    fn create_item(
        &self,
        user: &UserId,
        name: &str,
        quantity: u32,
        category: Option<Category>,
    ) -> Result<PantryItem, StoreError> {
        let id = ItemId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let item = PantryItem {
            id,
            name: name.to_string(),
            quantity,
            category,
            added_at: Utc::now(),
        };

        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(
            id,
            OwnedItem {
                owner: user.clone(),
                item: item.clone(),
            },
        );
        Ok(item)
    }

    fn set_quantity(&self, id: ItemId, quantity: u32) -> Result<PantryItem, StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let owned = map.get_mut(&id).ok_or(StoreError::NotFound)?;
        owned.item.quantity = quantity;
        Ok(owned.item.clone())
    }

    fn delete_item(&self, id: ItemId) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(&id).ok_or(StoreError::NotFound)?;
        Ok(())
    }
}
