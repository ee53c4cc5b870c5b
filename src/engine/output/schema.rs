//! Data model for the outbound reply.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeState {
    Fulfilled,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub session_state: ResponseSessionState,
    pub messages: Vec<Message>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSessionState {
    pub dialog_action: DialogAction,
    pub intent: ResponseIntent,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DialogAction {
    #[serde(rename = "type")]
    pub kind: DialogActionType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogActionType {
    Close,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseIntent {
    pub name: String,
    pub state: OutcomeState,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    PlainText,
}

impl Response {
    pub fn intent_name(&self) -> &str {
        &self.session_state.intent.name
    }

    pub fn state(&self) -> OutcomeState {
        self.session_state.intent.state
    }

    /// Text of the single message block.
    pub fn content(&self) -> &str {
        self.messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}
