//! Fixed reply texts.

use std::fmt::Display;

pub const MISSING_STUDENT_ID: &str =
    "⚠️ **Error:** Missing Student ID. Please provide a valid Student ID.";

pub const STUDENT_NOT_FOUND: &str =
    "⚠️ **Error:** Student ID not found. Please check and try again!";

pub const NO_MARKS: &str = "No marks available";

pub const STUDENT_SIGN_OFF: &str = "✅ Keep up the good work! Let me know if you need more info.";

pub const NO_TIMETABLE_DATA: &str = "⚠️ No timetable data available.";

pub const UNKNOWN_DAY: &str = "Unknown Day";
pub const UNKNOWN_TIME: &str = "Unknown Time";
pub const UNKNOWN_COURSE: &str = "Unknown Course";

pub fn no_timetable_for(day: &str) -> String {
    format!("⚠️ No timetable found for **{}**.", day)
}

pub fn unrecognized_intent(name: &str) -> String {
    format!("❌ **Error:** Intent '{}' not recognized.", name)
}

pub fn system_error(fault: impl Display) -> String {
    format!("❌ **System Error:** {}. Please try again later.", fault)
}
