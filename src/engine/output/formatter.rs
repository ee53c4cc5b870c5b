//! Renders store records as chat text. Inputs are only borrowed.

use crate::engine::output::templates::{
    NO_MARKS, NO_TIMETABLE_DATA, STUDENT_SIGN_OFF, UNKNOWN_COURSE, UNKNOWN_DAY, UNKNOWN_TIME,
};
use crate::store::{StudentRecord, TimetableEntry};

/// One day: a header line, then one line per class.
pub fn format_day_schedule(entry: &TimetableEntry) -> String {
    let day = entry.day.as_deref().unwrap_or(UNKNOWN_DAY);

    if entry.slots.is_empty() {
        return format!("📅 **{}**: No scheduled classes.", day);
    }

    let lines: Vec<String> = entry
        .slots
        .iter()
        .map(|slot| {
            format!(
                "⏰ {} - {}",
                slot.hour.as_deref().unwrap_or(UNKNOWN_TIME),
                slot.course.as_deref().unwrap_or(UNKNOWN_COURSE)
            )
        })
        .collect();

    format!("📅 **{}**\n{}", day, lines.join("\n"))
}

/// Several days separated by a blank line, in the order given.
pub fn format_timetable(entries: &[TimetableEntry]) -> String {
    if entries.is_empty() {
        return NO_TIMETABLE_DATA.to_string();
    }

    entries
        .iter()
        .map(format_day_schedule)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_student(student: &StudentRecord) -> String {
    let attendance = match student.attendance {
        Some(pct) => format!("{}%", pct),
        None => "N/A".to_string(),
    };

    let marks = if student.marks.is_empty() {
        NO_MARKS.to_string()
    } else {
        student
            .marks
            .iter()
            .map(|(subject, score)| format!("📖 {}: {}%", subject, score))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "📌 Student Information\n\
         👤 Name: {}\n\
         🆔 Student ID: {}\n\n\
         📚 Academic Performance\n\
         📅 Attendance: {}\n\
         📝 Marks:\n{}\n\n\
         {}",
        student.name, student.student_id, attendance, marks, STUDENT_SIGN_OFF
    )
}
