//! The per-turn input contract and caller-echoed session state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One conversational turn's input, validated at the transport boundary.
///
/// Built from the raw platform envelope; absent or malformed slots simply
/// do not appear in `slots`. Discarded after the turn, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub request_type: String,
    pub intent_name: Option<String>,
    pub slots: HashMap<String, String>,
    pub session: SessionAttributes,
}

impl Utterance {
    pub fn new(request_type: impl Into<String>, intent_name: Option<&str>) -> Self {
        Self {
            request_type: request_type.into(),
            intent_name: intent_name.map(str::to_string),
            slots: HashMap::new(),
            session: SessionAttributes::default(),
        }
    }

    /// Launch turn (no intent).
    pub fn launch() -> Self {
        Self::new("LaunchRequest", None)
    }

    /// Intent turn.
    pub fn intent(name: &str) -> Self {
        Self::new("IntentRequest", Some(name))
    }

    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.session.offset = Some(offset);
        self
    }

    /// Slot lookup with the platform-casing shim: the exact key first, then
    /// the variant with the first character's case flipped. Some voice
    /// platforms capitalize slot keys inconsistently across locales.
    pub fn slot(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.slots.get(key) {
            return Some(value.as_str());
        }
        self.slots.get(&flip_first_case(key)).map(String::as_str)
    }
}

fn flip_first_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let flipped: String = if first.is_uppercase() {
                first.to_lowercase().collect()
            } else {
                first.to_uppercase().collect()
            };
            format!("{}{}", flipped, chars.as_str())
        }
    }
}

/// Caller-echoed cross-turn state.
///
/// The server treats this as opaque beyond `offset`: it reads `offset` when
/// present (default 0) and emits a new one only while more list results
/// remain. Serialized back to the caller only when non-empty, so absence of
/// the key stays meaningful to the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl SessionAttributes {
    pub fn with_offset(offset: u64) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.offset.is_none()
    }

    /// The pagination offset to resume from; stale or absent values fall
    /// back to the start of the list.
    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0) as usize
    }
}
