use std::sync::Arc;

use despensa_store::InMemoryPantryStore;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build the app (same router as prod) against a fresh in-memory
        // store, bound to an ephemeral port.
        let store = Arc::new(InMemoryPantryStore::new());
        let app = despensa_api::app::build_app(store, 5);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn launch_envelope(user_id: &str) -> serde_json::Value {
    json!({
        "session": { "user": { "userId": user_id } },
        "request": { "type": "LaunchRequest" }
    })
}

fn intent_envelope(user_id: &str, intent: &str, slots: serde_json::Value) -> serde_json::Value {
    json!({
        "session": { "user": { "userId": user_id } },
        "request": {
            "type": "IntentRequest",
            "intent": { "name": intent, "slots": slots }
        }
    })
}

async fn turn(
    client: &reqwest::Client,
    base_url: &str,
    envelope: &serde_json::Value,
) -> serde_json::Value {
    let res = client
        .post(base_url)
        .json(envelope)
        .send()
        .await
        .expect("webhook request failed");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    res.json().await.expect("webhook answered non-JSON")
}

fn speech_text(envelope: &serde_json::Value) -> &str {
    envelope["response"]["outputSpeech"]["text"]
        .as_str()
        .expect("envelope carried no speech text")
}

#[tokio::test]
async fn health_endpoint_answers() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn launch_add_and_list_over_http() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let user = "amzn1.ask.account.TEST";

    // Launch: greeting, session open, no attributes.
    let greeting = turn(&client, &server.base_url, &launch_envelope(user)).await;
    assert!(speech_text(&greeting).contains("despensa"));
    assert_eq!(greeting["response"]["shouldEndSession"], false);
    assert!(greeting.get("sessionAttributes").is_none());

    // Add "3 cocacolas" with a valueless quantity slot.
    let added = turn(
        &client,
        &server.base_url,
        &intent_envelope(
            user,
            "AddProductIntent",
            json!({ "producto": { "name": "producto", "value": "3 cocacolas" } }),
        ),
    )
    .await;
    assert_eq!(speech_text(&added), "He añadido 3 cocacolas a tu despensa.");

    // List: the item is spoken back.
    let listed = turn(
        &client,
        &server.base_url,
        &intent_envelope(user, "ListProductsIntent", json!({})),
    )
    .await;
    assert!(speech_text(&listed).contains("3 cocacolas"));
    assert_eq!(listed["response"]["shouldEndSession"], false);
}

#[tokio::test]
async fn pagination_offset_is_echoed_through_session_attributes() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let user = "amzn1.ask.account.PAGER";

    for i in 0..7 {
        turn(
            &client,
            &server.base_url,
            &intent_envelope(
                user,
                "AddProductIntent",
                json!({ "producto": { "name": "producto", "value": format!("producto{i}") } }),
            ),
        )
        .await;
    }

    let first = turn(
        &client,
        &server.base_url,
        &intent_envelope(user, "ListProductsIntent", json!({})),
    )
    .await;
    assert_eq!(first["sessionAttributes"]["offset"], 5);

    // Echo the attributes back, as the platform would.
    let next = turn(
        &client,
        &server.base_url,
        &json!({
            "session": {
                "user": { "userId": user },
                "attributes": first["sessionAttributes"]
            },
            "request": {
                "type": "IntentRequest",
                "intent": { "name": "NextProductsIntent" }
            }
        }),
    )
    .await;
    assert!(speech_text(&next).contains("producto6"));
    assert!(next.get("sessionAttributes").is_none());
}

#[tokio::test]
async fn degenerate_envelopes_still_get_a_spoken_answer() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // No user id.
    let res = turn(
        &client,
        &server.base_url,
        &json!({ "request": { "type": "LaunchRequest" } }),
    )
    .await;
    assert!(!speech_text(&res).is_empty());
    assert_eq!(res["response"]["shouldEndSession"], false);

    // Not an envelope at all.
    let res = turn(&client, &server.base_url, &json!({ "foo": 1 })).await;
    assert!(!speech_text(&res).is_empty());
    assert_eq!(res["response"]["shouldEndSession"], false);

    // Stop ends the session.
    let res = turn(
        &client,
        &server.base_url,
        &intent_envelope("u", "AMAZON.StopIntent", json!({})),
    )
    .await;
    assert_eq!(res["response"]["shouldEndSession"], true);
}
