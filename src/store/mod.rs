//! Record store collaborators: student records and the weekly timetable.
//! Read-only; point lookups by key and full scans.

pub mod memory;
pub mod traits;
pub mod types;

#[cfg(feature = "dynamodb")]
pub mod dynamo;

pub use memory::{Fixture, MemoryStore};
pub use traits::RecordStore;
pub use types::*;

#[cfg(feature = "dynamodb")]
pub use dynamo::{DynamoSettings, DynamoStore};
