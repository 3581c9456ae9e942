//! `despensa-interpreter` — the conversational pantry command interpreter.
//!
//! Turns one voice-assistant utterance (request type, intent, slots, echoed
//! session attributes) into deterministic pantry mutations and a spoken
//! response. The interpreter is stateless across turns: the only cross-turn
//! state is the pagination offset the caller echoes back.
//!
//! Layering, leaf-first:
//! - `extract`: quantity/name extraction from loosely-filled slots
//! - `page`: bounded list pages with continuation state
//! - `matching`: fuzzy candidate resolution and removal reconciliation
//! - `speech`: Spanish sentence rendering
//! - `utterance` / `response`: the turn's input and output contracts
//! - `dispatch`: the intent dispatcher orchestrating the pantry store

pub mod dispatch;
pub mod extract;
pub mod matching;
pub mod page;
pub mod response;
pub mod speech;
pub mod utterance;

pub use dispatch::{DEFAULT_PAGE_SIZE, Intent, Interpreter};
pub use extract::{QuantityName, extract_quantity_and_name, parse_command};
pub use matching::{Removal, reconcile, resolve_target, total_quantity};
pub use page::{Page, build_page};
pub use response::{ResponseEnvelope, SpeechResponse};
pub use utterance::{SessionAttributes, Utterance};
