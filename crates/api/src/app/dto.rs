//! Inbound platform envelope.
//!
//! The voice platform sends loosely-typed nested JSON; everything is
//! validated into a strict [`Utterance`] here, at the boundary. Absent or
//! malformed pieces become absent slots/attributes, never faults.

use std::collections::HashMap;

use serde::Deserialize;

use despensa_core::UserId;
use despensa_interpreter::Utterance;

#[derive(Debug, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub session: Option<Session>,
    pub request: Request,
}

#[derive(Debug, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub intent: Option<IntentPayload>,
}

#[derive(Debug, Deserialize)]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub slots: Option<HashMap<String, SlotPayload>>,
}

#[derive(Debug, Deserialize)]
pub struct SlotPayload {
    #[serde(default)]
    pub value: Option<String>,
}

impl RequestEnvelope {
    pub fn user_id(&self) -> Option<UserId> {
        let user = self.session.as_ref()?.user.as_ref()?;
        if user.user_id.is_empty() {
            return None;
        }
        Some(UserId::new(user.user_id.clone()))
    }

    /// Lower the raw envelope into the interpreter's input contract.
    pub fn into_utterance(self) -> Utterance {
        let session = self
            .session
            .as_ref()
            .and_then(|s| s.attributes.clone())
            .map(|attrs| serde_json::from_value(attrs).unwrap_or_default())
            .unwrap_or_default();

        let (intent_name, slots) = match self.request.intent {
            Some(intent) => {
                let slots = intent
                    .slots
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|(key, slot)| slot.value.map(|value| (key, value)))
                    .collect();
                (Some(intent.name), slots)
            }
            None => (None, HashMap::new()),
        };

        Utterance {
            request_type: self.request.request_type,
            intent_name,
            slots,
            session,
        }
    }
}
