//! Webhook application wiring (Axum router + services).
//!
//! - `routes.rs`: the webhook + health handlers
//! - `dto.rs`: the inbound platform envelope and its lowering into an
//!   `Utterance`

use std::sync::Arc;

use axum::{Extension, Router};

use despensa_interpreter::Interpreter;
use despensa_store::PantryStore;

pub mod dto;
pub mod routes;

/// Shared per-process services.
pub struct AppServices {
    pub interpreter: Interpreter<Arc<dyn PantryStore>>,
}

/// Build the full router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(store: Arc<dyn PantryStore>, page_size: usize) -> Router {
    let services = Arc::new(AppServices {
        interpreter: Interpreter::with_page_size(store, page_size),
    });

    routes::router().layer(Extension(services))
}
