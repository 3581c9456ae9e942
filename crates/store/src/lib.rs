//! `despensa-store` — the pantry store boundary.
//!
//! The interpreter consumes the persistent pantry through the [`PantryStore`]
//! trait: list items for a user, create an item, set an item's quantity,
//! delete an item. The store guarantees atomicity of single-item updates;
//! the interpreter guarantees it never caches items across turns.
//!
//! Two implementations ship here: [`InMemoryPantryStore`] for tests/dev and
//! [`RestPantryStore`] for the REST-shaped reference deployment.

pub mod error;
pub mod memory;
pub mod rest;
pub mod store;

pub use error::StoreError;
pub use memory::InMemoryPantryStore;
pub use rest::RestPantryStore;
pub use store::PantryStore;
