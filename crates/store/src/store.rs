//! The pantry store trait.

use std::sync::Arc;

use despensa_core::{Category, ItemId, PantryItem, UserId};

use crate::error::StoreError;

/// Persistent pantry access, one user's items at a time.
///
/// Operations are synchronous from the interpreter's point of view and may
/// block; callers convert failures into spoken responses rather than letting
/// them propagate.
pub trait PantryStore: Send + Sync {
    /// All items owned by `user`, in store order.
    fn list_items(&self, user: &UserId) -> Result<Vec<PantryItem>, StoreError>;

    /// Create a new item for `user`; the store assigns the id.
    fn create_item(
        &self,
        user: &UserId,
        name: &str,
        quantity: u32,
        category: Option<Category>,
    ) -> Result<PantryItem, StoreError>;

    /// Overwrite an item's quantity.
    fn set_quantity(&self, id: ItemId, quantity: u32) -> Result<PantryItem, StoreError>;

    /// Remove an item entirely.
    fn delete_item(&self, id: ItemId) -> Result<(), StoreError>;
}

impl<S> PantryStore for Arc<S>
where
    S: PantryStore + ?Sized,
{
    fn list_items(&self, user: &UserId) -> Result<Vec<PantryItem>, StoreError> {
        (**self).list_items(user)
    }

    fn create_item(
        &self,
        user: &UserId,
        name: &str,
        quantity: u32,
        category: Option<Category>,
    ) -> Result<PantryItem, StoreError> {
        (**self).create_item(user, name, quantity, category)
    }

    fn set_quantity(&self, id: ItemId, quantity: u32) -> Result<PantryItem, StoreError> {
        (**self).set_quantity(id, quantity)
    }

    fn delete_item(&self, id: ItemId) -> Result<(), StoreError> {
        (**self).delete_item(id)
    }
}
