use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    CheckAttendanceMarks,
    GetTimeTable,
}

impl IntentKind {
    pub const STUDENT_ID_SLOT: &'static str = "StudentID";
    pub const DAY_SLOT: &'static str = "Day";

    /// Exact, case-sensitive match on the intent name.
    pub fn select_intent(name: &str) -> Option<Self> {
        match name {
            "CheckAttendanceMarks" => Some(IntentKind::CheckAttendanceMarks),
            "GetTimeTable" => Some(IntentKind::GetTimeTable),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IntentKind::CheckAttendanceMarks => "CheckAttendanceMarks",
            IntentKind::GetTimeTable => "GetTimeTable",
        }
    }
}
