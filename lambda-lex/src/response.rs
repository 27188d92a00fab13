//! Response types

use crate::request::{SessionAttributes, Slots};
use serde::Serialize;

/// The reply a code hook returns to Lex.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LexResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

/// What Lex should do next, tagged by `type` on the wire.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum DialogAction {
    /// Re-prompt the user for `slot_to_elicit`.
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<Message>,
    },
    /// Let Lex pick the next action from the bot configuration.
    Delegate { slots: Slots },
    /// End the conversation.
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
    CustomPayload,
}

impl Message {
    /// A `PlainText` message.
    pub fn plain_text<S>(content: S) -> Self
    where
        S: Into<String>,
    {
        Message {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

impl LexResponse {
    pub fn elicit_slot<N, S>(
        session_attributes: SessionAttributes,
        intent_name: N,
        slots: Slots,
        slot_to_elicit: S,
        message: Option<Message>,
    ) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        LexResponse {
            session_attributes,
            dialog_action: DialogAction::ElicitSlot {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit: slot_to_elicit.into(),
                message,
            },
        }
    }

    pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> Self {
        LexResponse {
            session_attributes,
            dialog_action: DialogAction::Delegate { slots },
        }
    }

    pub fn close(session_attributes: SessionAttributes, fulfillment_state: FulfillmentState, message: Message) -> Self {
        LexResponse {
            session_attributes,
            dialog_action: DialogAction::Close {
                fulfillment_state,
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FulfillmentState, LexResponse, Message};
    use maplit::hashmap;
    use serde_json::{self, json};

    #[test]
    fn serialize_elicit_slot() {
        let resp = LexResponse::elicit_slot(
            hashmap! { "channel".to_string() => "web".to_string() },
            "RecommendPortfolio",
            hashmap! { "age".to_string() => None },
            "age",
            Some(Message::plain_text("How old are you?")),
        );
        assert_eq!(
            serde_json::to_value(&resp).expect("failed to serialize response"),
            json!({
                "sessionAttributes": { "channel": "web" },
                "dialogAction": {
                    "type": "ElicitSlot",
                    "intentName": "RecommendPortfolio",
                    "slots": { "age": null },
                    "slotToElicit": "age",
                    "message": { "contentType": "PlainText", "content": "How old are you?" }
                }
            })
        );
    }

    #[test]
    fn serialize_elicit_slot_without_message() {
        let resp = LexResponse::elicit_slot(Default::default(), "RecommendPortfolio", Default::default(), "age", None);
        assert_eq!(
            serde_json::to_string(&resp).expect("failed to serialize response"),
            r#"{"sessionAttributes":{},"dialogAction":{"type":"ElicitSlot","intentName":"RecommendPortfolio","slots":{},"slotToElicit":"age"}}"#
        );
    }

    #[test]
    fn serialize_delegate() {
        let resp = LexResponse::delegate(Default::default(), hashmap! { "age".to_string() => Some("33".to_string()) });
        assert_eq!(
            serde_json::to_string(&resp).expect("failed to serialize response"),
            r#"{"sessionAttributes":{},"dialogAction":{"type":"Delegate","slots":{"age":"33"}}}"#
        );
    }

    #[test]
    fn serialize_close() {
        let resp = LexResponse::close(Default::default(), FulfillmentState::Fulfilled, Message::plain_text("Done"));
        assert_eq!(
            serde_json::to_string(&resp).expect("failed to serialize response"),
            r#"{"sessionAttributes":{},"dialogAction":{"type":"Close","fulfillmentState":"Fulfilled","message":{"contentType":"PlainText","content":"Done"}}}"#
        );
    }

    #[test]
    fn serialize_ssml_content_type() {
        let message = Message {
            content_type: super::ContentType::Ssml,
            content: "<speak>Hi</speak>".into(),
        };
        assert_eq!(
            serde_json::to_value(&message).expect("failed to serialize message"),
            json!({ "contentType": "SSML", "content": "<speak>Hi</speak>" })
        );
    }
}
