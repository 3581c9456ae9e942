use std::sync::Arc;

use despensa_store::{InMemoryPantryStore, PantryStore, RestPantryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    despensa_observability::init();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let page_size = std::env::var("PAGE_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(despensa_interpreter::DEFAULT_PAGE_SIZE);

    let store: Arc<dyn PantryStore> = match std::env::var("PANTRY_STORE_URL") {
        Ok(url) => Arc::new(RestPantryStore::new(url)),
        Err(_) => {
            tracing::warn!("PANTRY_STORE_URL not set; using in-memory dev store");
            Arc::new(InMemoryPantryStore::new())
        }
    };

    let app = despensa_api::app::build_app(store, page_size);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
