//! The turn's output contract and the platform response envelope.

use serde::{Deserialize, Serialize};

use crate::utterance::SessionAttributes;

/// What the interpreter decided to say, and whether the session goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResponse {
    pub speech: String,
    pub should_end_session: bool,
    pub attributes: SessionAttributes,
}

impl SpeechResponse {
    /// A reply that keeps the session open.
    pub fn open(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            should_end_session: false,
            attributes: SessionAttributes::default(),
        }
    }

    /// A reply that ends the session.
    pub fn closing(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            should_end_session: true,
            attributes: SessionAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: SessionAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Render the platform envelope.
    pub fn into_envelope(self) -> ResponseEnvelope {
        ResponseEnvelope::from(self)
    }
}

/// Voice-platform response envelope.
///
/// Session attributes are attached only when non-empty: some platforms
/// treat the mere presence of the key as meaningful, so an empty map must
/// be omitted rather than sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(
        rename = "sessionAttributes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub session_attributes: Option<SessionAttributes>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
    #[serde(rename = "shouldEndSession")]
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl From<SpeechResponse> for ResponseEnvelope {
    fn from(speech: SpeechResponse) -> Self {
        let session_attributes = if speech.attributes.is_empty() {
            None
        } else {
            Some(speech.attributes)
        };

        ResponseEnvelope {
            version: "1.0".to_string(),
            session_attributes,
            response: ResponseBody {
                output_speech: OutputSpeech {
                    kind: "PlainText".to_string(),
                    text: speech.speech,
                },
                should_end_session: speech.should_end_session,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_attributes_are_omitted_from_the_envelope() {
        let envelope = SpeechResponse::open("hola").into_envelope();
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("sessionAttributes").is_none());
        assert_eq!(json["response"]["outputSpeech"]["text"], "hola");
        assert_eq!(json["response"]["outputSpeech"]["type"], "PlainText");
        assert_eq!(json["response"]["shouldEndSession"], false);
    }

    #[test]
    fn non_empty_attributes_are_attached() {
        let envelope = SpeechResponse::open("hola")
            .with_attributes(SessionAttributes::with_offset(5))
            .into_envelope();
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["sessionAttributes"]["offset"], 5);
    }

    #[test]
    fn closing_replies_end_the_session() {
        let envelope = SpeechResponse::closing("adiós").into_envelope();
        assert!(envelope.response.should_end_session);
    }
}
