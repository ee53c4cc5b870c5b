//! Public exports for building & formatting replies.

pub mod builder;
pub mod formatter;
pub mod schema;
pub mod templates;

pub use builder::ResponseBuilder;
pub use formatter::{format_day_schedule, format_student, format_timetable};
pub use schema::*;
