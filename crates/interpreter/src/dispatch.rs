//! The intent dispatcher.
//!
//! One conversational turn in, one spoken response out. The dispatcher owns
//! no state between invocations: everything it needs is reconstructed from
//! the request type, the intent name and the caller-echoed session
//! attributes. Every branch answers, including when the pantry store is
//! unreachable; a storage failure never propagates past [`Interpreter::handle_turn`].

use despensa_core::{Category, DomainError, UserId};
use despensa_store::{PantryStore, StoreError};
use thiserror::Error;

use crate::extract::parse_command;
use crate::matching::{Removal, reconcile, resolve_target, total_quantity};
use crate::page::build_page;
use crate::response::SpeechResponse;
use crate::speech;
use crate::utterance::{SessionAttributes, Utterance};

/// Items spoken per list page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

const PRODUCT_SLOT: &str = "producto";
const QUANTITY_SLOT: &str = "cantidad";

/// The supported intents, resolved from `(request_type, intent_name)`.
///
/// Keeping this a closed enum makes the dispatch table enumerable and
/// exhaustively testable; anything unrecognized lands on [`Intent::Fallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Launch,
    AddProduct,
    ListProducts,
    NextProducts,
    RemoveProduct,
    ClearPantry,
    CheckProduct,
    Yes,
    No,
    Stop,
    Cancel,
    SessionEnded,
    Fallback,
}

impl Intent {
    pub fn resolve(request_type: &str, intent_name: Option<&str>) -> Intent {
        match request_type {
            "LaunchRequest" => Intent::Launch,
            "SessionEndedRequest" => Intent::SessionEnded,
            "IntentRequest" => match intent_name.unwrap_or("") {
                "AddProductIntent" => Intent::AddProduct,
                "ListProductsIntent" => Intent::ListProducts,
                "NextProductsIntent" => Intent::NextProducts,
                "RemoveProductIntent" => Intent::RemoveProduct,
                "ClearPantryIntent" => Intent::ClearPantry,
                "CheckProductIntent" => Intent::CheckProduct,
                "AMAZON.YesIntent" => Intent::Yes,
                "AMAZON.NoIntent" => Intent::No,
                "AMAZON.StopIntent" => Intent::Stop,
                "AMAZON.CancelIntent" => Intent::Cancel,
                _ => Intent::Fallback,
            },
            _ => Intent::Fallback,
        }
    }
}

/// Everything that can go wrong inside one turn. Never escapes the
/// dispatcher: each kind maps onto a spoken recovery in `handle_turn`.
#[derive(Debug, Error)]
enum TurnError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The conversational pantry command interpreter.
pub struct Interpreter<S> {
    store: S,
    page_size: usize,
}

impl<S: PantryStore> Interpreter<S> {
    pub fn new(store: S) -> Self {
        Self::with_page_size(store, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(store: S, page_size: usize) -> Self {
        Self {
            store,
            page_size: page_size.max(1),
        }
    }

    /// Process one turn. Never fails: clarification, no-match and storage
    /// errors all resolve to speech, with the session left open.
    pub fn handle_turn(&self, user: &UserId, utterance: &Utterance) -> SpeechResponse {
        let intent = Intent::resolve(&utterance.request_type, utterance.intent_name.as_deref());
        tracing::debug!(?intent, "dispatching turn");

        let outcome = match intent {
            Intent::Launch => Ok(SpeechResponse::open(speech::greeting())),
            Intent::AddProduct => self.add_product(user, utterance),
            Intent::ListProducts => self.list_page(user, 0),
            Intent::NextProducts => self.list_page(user, utterance.session.offset()),
            Intent::RemoveProduct => self.remove_product(user, utterance),
            Intent::ClearPantry => self.clear_pantry(user),
            Intent::CheckProduct => self.check_product(user, utterance),
            Intent::Yes => Ok(SpeechResponse::open(speech::acknowledged())),
            Intent::No | Intent::Stop | Intent::Cancel | Intent::SessionEnded => {
                Ok(SpeechResponse::closing(speech::goodbye()))
            }
            Intent::Fallback => Ok(SpeechResponse::open(speech::fallback())),
        };

        // Every failure kind resolves to speech; the session stays open so
        // the user can try again.
        outcome.unwrap_or_else(|error| match error {
            TurnError::Domain(DomainError::Validation(reason)) => {
                tracing::debug!(user = %user, ?intent, reason = %reason, "asking for clarification");
                SpeechResponse::open(speech::clarify())
            }
            TurnError::Domain(DomainError::NotFound(term)) => {
                tracing::debug!(user = %user, ?intent, term = %term, "no pantry match");
                SpeechResponse::open(speech::not_found(&term))
            }
            TurnError::Store(error) => {
                tracing::warn!(user = %user, ?intent, %error, "store failure during turn");
                SpeechResponse::open(speech::store_trouble())
            }
        })
    }

    fn add_product(
        &self,
        user: &UserId,
        utterance: &Utterance,
    ) -> Result<SpeechResponse, TurnError> {
        let command = parse_command(
            utterance.slot(QUANTITY_SLOT),
            utterance.slot(PRODUCT_SLOT),
        )
        .validated()?;

        let category = Category::guess(&command.name);
        let created =
            self.store
                .create_item(user, &command.name, command.quantity, category)?;
        tracing::info!(user = %user, item = %created.id, quantity = command.quantity, "product added");

        Ok(SpeechResponse::open(speech::added(
            &command.name,
            command.quantity,
        )))
    }

    fn list_page(&self, user: &UserId, offset: usize) -> Result<SpeechResponse, TurnError> {
        let items = self.store.list_items(user)?;
        // Zero-quantity entries are logically absent; they stay in the store
        // until deleted but are not spoken.
        let items: Vec<_> = items.into_iter().filter(|i| i.quantity > 0).collect();
        if items.is_empty() {
            return Ok(SpeechResponse::open(speech::pantry_empty()));
        }

        let page = build_page(&items, offset, self.page_size, |item| {
            if item.quantity == 1 {
                item.name.clone()
            } else {
                format!("{} {}", item.quantity, item.name)
            }
        });

        if page.text.is_empty() {
            return Ok(SpeechResponse::open(speech::no_more_items()));
        }

        let mut response =
            SpeechResponse::open(speech::list_page(&page.text, page.has_more));
        if page.has_more {
            response = response
                .with_attributes(SessionAttributes::with_offset(page.next_offset as u64));
        }
        Ok(response)
    }

    fn remove_product(
        &self,
        user: &UserId,
        utterance: &Utterance,
    ) -> Result<SpeechResponse, TurnError> {
        let command = parse_command(
            utterance.slot(QUANTITY_SLOT),
            utterance.slot(PRODUCT_SLOT),
        )
        .validated()?;

        let items = self.store.list_items(user)?;
        let target = resolve_target(&items, &command.name)
            .ok_or_else(|| DomainError::not_found(&command.name))?;

        match reconcile(target.quantity, command.quantity) {
            Removal::Delete => {
                self.store.delete_item(target.id)?;
                tracing::info!(user = %user, item = %target.id, "product removed");
                Ok(SpeechResponse::open(speech::removed(&target.name)))
            }
            Removal::Decrement(remaining) => {
                self.store.set_quantity(target.id, remaining)?;
                tracing::info!(user = %user, item = %target.id, remaining, "product decremented");
                Ok(SpeechResponse::open(speech::decremented(
                    &target.name,
                    command.quantity,
                    remaining,
                )))
            }
        }
    }

    fn clear_pantry(&self, user: &UserId) -> Result<SpeechResponse, TurnError> {
        let items = self.store.list_items(user)?;
        for item in &items {
            // Best-effort: one failed delete does not abort the rest, and
            // the user still hears success.
            if let Err(error) = self.store.delete_item(item.id) {
                tracing::warn!(user = %user, item = %item.id, %error, "clear: delete failed, continuing");
            }
        }
        tracing::info!(user = %user, count = items.len(), "pantry cleared");
        Ok(SpeechResponse::open(speech::cleared()))
    }

    fn check_product(
        &self,
        user: &UserId,
        utterance: &Utterance,
    ) -> Result<SpeechResponse, TurnError> {
        let command = parse_command(None, utterance.slot(PRODUCT_SLOT)).validated()?;

        let items = self.store.list_items(user)?;
        let total = total_quantity(&items, &command.name);
        Ok(SpeechResponse::open(speech::stock(&command.name, total)))
    }
}
