//! REST client for the hosted pantry store.
//!
//! The reference deployment exposes the store as a small JSON API:
//!
//! ```text
//! GET    /users/:user/items        -> [PantryItem]
//! POST   /users/:user/items        -> PantryItem
//! PUT    /items/:id                -> PantryItem
//! DELETE /items/:id                -> ()
//! ```
//!
//! Calls are blocking with a bounded timeout; the interpreter treats the
//! store as synchronous within a turn.

use std::time::Duration;

use serde::Serialize;

use despensa_core::{Category, ItemId, PantryItem, UserId};

use crate::error::StoreError;
use crate::store::PantryStore;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// [`PantryStore`] backed by the REST pantry service.
pub struct RestPantryStore {
    agent: ureq::Agent,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct CreateItemBody<'a> {
    name: &'a str,
    quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
}

#[derive(Debug, Serialize)]
struct SetQuantityBody {
    quantity: u32,
}

impl RestPantryStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { agent, base_url }
    }

    fn user_items_url(&self, user: &UserId) -> String {
        format!("{}/users/{}/items", self.base_url, user)
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/items/{}", self.base_url, id)
    }
}

fn request_error(err: ureq::Error) -> StoreError {
    tracing::debug!(error = %err, "pantry store request failed");
    match err {
        ureq::Error::Status(404, _) => StoreError::NotFound,
        ureq::Error::Status(code, _) => StoreError::Status(code),
        ureq::Error::Transport(t) => StoreError::unavailable(t.to_string()),
    }
}

fn decode<T: serde::de::DeserializeOwned>(response: ureq::Response) -> Result<T, StoreError> {
    response
        .into_json::<T>()
        .map_err(|e| StoreError::decode(e.to_string()))
}

impl PantryStore for RestPantryStore {
    fn list_items(&self, user: &UserId) -> Result<Vec<PantryItem>, StoreError> {
        let response = self
            .agent
            .get(&self.user_items_url(user))
            .call()
            .map_err(request_error)?;
        decode(response)
    }

    fn create_item(
        &self,
        user: &UserId,
        name: &str,
        quantity: u32,
        category: Option<Category>,
    ) -> Result<PantryItem, StoreError> {
        let body = CreateItemBody {
            name,
            quantity,
            category,
        };
        let response = self
            .agent
            .post(&self.user_items_url(user))
            .send_json(&body)
            .map_err(request_error)?;
        decode(response)
    }

    fn set_quantity(&self, id: ItemId, quantity: u32) -> Result<PantryItem, StoreError> {
        let response = self
            .agent
            .put(&self.item_url(id))
            .send_json(&SetQuantityBody { quantity })
            .map_err(request_error)?;
        decode(response)
    }

    fn delete_item(&self, id: ItemId) -> Result<(), StoreError> {
        self.agent
            .delete(&self.item_url(id))
            .call()
            .map_err(request_error)?;
        Ok(())
    }
}
