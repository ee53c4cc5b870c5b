//! Fulfillment handler for a campus chat bot: routes `CheckAttendanceMarks`
//! and `GetTimeTable` intents to read-only record lookups and replies with a
//! closed, plain-text dialog turn.

pub mod commands;
pub mod config;
pub mod engine;
pub mod request;
pub mod store;

pub use commands::{build_dispatcher, handle_event, handle_json, BootstrapError};
pub use config::Config;
pub use engine::output::{OutcomeState, Response};
pub use engine::{Dispatcher, StudentKeyPolicy};
pub use request::IntentRequest;
