//! Public façade for the engine layer.

pub mod orchestrator;
pub mod output;
pub mod student;
pub mod timetable;
pub mod types;

pub use orchestrator::Dispatcher;
pub use types::{HandlerError, Reply, StudentKeyPolicy};
