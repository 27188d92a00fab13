//! Lex code hook event adaptations
//!
//! Amazon Lex (V1) invokes a code hook with the same envelope both while
//! eliciting slots and at fulfillment; only `invocationSource` differs.
//!
use serde::{Deserialize, Deserializer};
use serde_json::error::Error as JsonError;
use std::{collections::HashMap, io::Read};

/// Slot name to captured value. Slots Lex has not filled yet are `null`.
pub type Slots = HashMap<String, Option<String>>;

/// Opaque string attributes that Lex carries across a session.
pub type SessionAttributes = HashMap<String, String>;

/// The stage of the conversation a code hook is invoked for.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationSource {
    /// Invoked on each user input while the bot elicits slots.
    DialogCodeHook,
    /// Invoked once every slot is filled and the intent is ready.
    FulfillmentCodeHook,
}

/// A Lex code hook event.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LexEvent {
    pub message_version: Option<String>,
    pub invocation_source: InvocationSource,
    pub user_id: Option<String>,
    pub input_transcript: Option<String>,
    #[serde(default, deserialize_with = "nullable_default")]
    pub session_attributes: SessionAttributes,
    #[serde(default, deserialize_with = "nullable_default")]
    pub request_attributes: HashMap<String, String>,
    pub bot: Option<Bot>,
    pub output_dialog_mode: Option<String>,
    #[serde(default)]
    pub current_intent: CurrentIntent,
}

impl LexEvent {
    /// The name of the intent Lex recognized, if any.
    pub fn intent_name(&self) -> Option<&str> {
        self.current_intent.name.as_deref()
    }

    /// The value captured for slot `name`. Unknown and unfilled slots are both `None`.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent.slots.get(name).and_then(|v| v.as_deref())
    }
}

/// The bot that produced the event.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Bot {
    pub name: Option<String>,
    pub alias: Option<String>,
    pub version: Option<String>,
}

/// The intent Lex matched for the user's input.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable_default")]
    pub slots: Slots,
    pub confirmation_status: Option<String>,
}

fn nullable_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a `LexEvent` from a `Read` impl providing JSON events.
pub fn from_reader<R>(rdr: R) -> Result<LexEvent, JsonError>
where
    R: Read,
{
    serde_json::from_reader(rdr)
}

/// Deserializes a `LexEvent` from a string of JSON text.
pub fn from_str(s: &str) -> Result<LexEvent, JsonError> {
    serde_json::from_str(s)
}
