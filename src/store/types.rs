use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    Backend(String),
    #[error("Malformed record '{key}': {reason}")]
    Malformed { key: String, reason: String },
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Fixture(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Fixture(err.to_string())
    }
}

/// A kind of item held in its own table, addressed by a single string key.
pub trait Record: DeserializeOwned + Send + Sync + 'static {
    /// Attribute holding the primary key.
    const KEY: &'static str;
    /// Table name used when none is configured.
    const DEFAULT_TABLE: &'static str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "Student_id")]
    pub student_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    /// Percentage, when recorded.
    #[serde(rename = "Attendance", default)]
    pub attendance: Option<f64>,
    #[serde(rename = "Marks", default)]
    pub marks: BTreeMap<String, f64>,
}

impl Record for StudentRecord {
    const KEY: &'static str = "Student_id";
    const DEFAULT_TABLE: &'static str = "StudentRecords";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    #[serde(rename = "Day", default)]
    pub day: Option<String>,
    #[serde(rename = "Slots", default)]
    pub slots: Vec<ScheduleSlot>,
}

impl Record for TimetableEntry {
    const KEY: &'static str = "Day";
    const DEFAULT_TABLE: &'static str = "Timetable";
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleSlot {
    #[serde(rename = "Hour", default)]
    pub hour: Option<String>,
    #[serde(rename = "Course", default)]
    pub course: Option<String>,
}

impl ScheduleSlot {
    pub fn new(hour: &str, course: &str) -> Self {
        Self {
            hour: Some(hour.to_string()),
            course: Some(course.to_string()),
        }
    }
}

/// Decode one raw store item into its typed record.
pub fn decode_item<R: Record>(key: &str, item: serde_json::Value) -> StoreResult<R> {
    serde_json::from_value(item).map_err(|e| StoreError::Malformed {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
