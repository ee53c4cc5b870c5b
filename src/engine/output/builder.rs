//! Wraps a handler's outcome into the reply envelope.

use crate::engine::output::schema::{
    ContentType, DialogAction, DialogActionType, Message, OutcomeState, Response, ResponseIntent,
    ResponseSessionState,
};

pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Every reply closes the dialog and carries exactly one plain-text message.
    pub fn build(intent_name: &str, state: OutcomeState, message: impl Into<String>) -> Response {
        Response {
            session_state: ResponseSessionState {
                dialog_action: DialogAction {
                    kind: DialogActionType::Close,
                },
                intent: ResponseIntent {
                    name: intent_name.to_string(),
                    state,
                },
            },
            messages: vec![Message {
                content_type: ContentType::PlainText,
                content: message.into(),
            }],
        }
    }

    pub fn fulfilled(intent_name: &str, message: impl Into<String>) -> Response {
        Self::build(intent_name, OutcomeState::Fulfilled, message)
    }

    pub fn failed(intent_name: &str, message: impl Into<String>) -> Response {
        Self::build(intent_name, OutcomeState::Failed, message)
    }
}
