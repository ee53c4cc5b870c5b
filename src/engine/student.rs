//! `CheckAttendanceMarks`: attendance and marks for one student.

use crate::engine::output::{format_student, templates, Response, ResponseBuilder};
use crate::engine::types::{HandlerResult, Reply, StudentKeyPolicy};
use crate::request::{IntentKind, IntentRequest};
use crate::store::{RecordStore, StudentRecord};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

pub struct StudentHandler {
    store: Arc<dyn RecordStore<StudentRecord>>,
    policy: StudentKeyPolicy,
}

impl StudentHandler {
    pub fn new(store: Arc<dyn RecordStore<StudentRecord>>, policy: StudentKeyPolicy) -> Self {
        Self { store, policy }
    }

    /// Never fails; faults come back as a `Failed` reply.
    pub async fn handle(&self, request: &IntentRequest) -> Response {
        let reply = match self.lookup(request).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Student lookup failed");
                Reply::failed(templates::system_error(&e))
            }
        };
        ResponseBuilder::build(request.intent_name(), reply.state, reply.message)
    }

    #[instrument(skip(self, request))]
    async fn lookup(&self, request: &IntentRequest) -> HandlerResult<Reply> {
        let requested = match request.slot(IntentKind::STUDENT_ID_SLOT).filled() {
            Some(id) => id,
            None => {
                warn!("StudentID slot missing");
                return Ok(Reply::failed(templates::MISSING_STUDENT_ID));
            }
        };

        let key = self.policy.resolve(requested);
        debug!(
            requested,
            typed = ?request.original_value(IntentKind::STUDENT_ID_SLOT),
            key,
            "Querying student record"
        );

        match self.store.get(key).await? {
            Some(student) => Ok(Reply::fulfilled(format_student(&student))),
            None => {
                warn!(key, "Student record not found");
                Ok(Reply::failed(templates::STUDENT_NOT_FOUND))
            }
        }
    }
}
