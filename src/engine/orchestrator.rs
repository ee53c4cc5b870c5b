//! Entry point for one turn: intent name → handler → reply envelope.

use crate::engine::output::{templates, Response, ResponseBuilder};
use crate::engine::student::StudentHandler;
use crate::engine::timetable::TimetableHandler;
use crate::engine::types::StudentKeyPolicy;
use crate::request::{IntentKind, IntentRequest};
use crate::store::{RecordStore, StudentRecord, TimetableEntry};
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Holds no per-turn state; share it behind an `Arc` across invocations.
pub struct Dispatcher {
    students: StudentHandler,
    timetable: TimetableHandler,
}

impl Dispatcher {
    pub fn new(
        students: Arc<dyn RecordStore<StudentRecord>>,
        timetable: Arc<dyn RecordStore<TimetableEntry>>,
        policy: StudentKeyPolicy,
    ) -> Self {
        Self {
            students: StudentHandler::new(students, policy),
            timetable: TimetableHandler::new(timetable),
        }
    }

    /// Route one request. Always yields a well-formed envelope.
    pub async fn dispatch(&self, request: &IntentRequest) -> Response {
        let request_id = Uuid::new_v4();
        let name = request.intent_name();
        let span = info_span!(
            "turn",
            %request_id,
            intent = name,
            session = request.session_id.as_deref().unwrap_or("-")
        );

        async move {
            info!(
                source = ?request.invocation_source,
                transcript = ?request.input_transcript,
                "Dispatching intent"
            );

            let response = match IntentKind::select_intent(name) {
                Some(IntentKind::CheckAttendanceMarks) => self.students.handle(request).await,
                Some(IntentKind::GetTimeTable) => self.timetable.handle(request).await,
                None => {
                    warn!("Unrecognized intent");
                    ResponseBuilder::failed(name, templates::unrecognized_intent(name))
                }
            };

            info!(state = ?response.state(), "Turn complete");
            response
        }
        .instrument(span)
        .await
    }
}
