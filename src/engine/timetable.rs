//! `GetTimeTable`: one day's classes, or the whole week.

use crate::engine::output::{format_day_schedule, format_timetable, templates, Response, ResponseBuilder};
use crate::engine::types::{HandlerResult, Reply};
use crate::request::{IntentKind, IntentRequest};
use crate::store::{RecordStore, TimetableEntry};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

pub struct TimetableHandler {
    store: Arc<dyn RecordStore<TimetableEntry>>,
}

impl TimetableHandler {
    pub fn new(store: Arc<dyn RecordStore<TimetableEntry>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, request: &IntentRequest) -> Response {
        let reply = match self.lookup(request).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Timetable lookup failed");
                Reply::failed(templates::system_error(&e))
            }
        };
        ResponseBuilder::build(request.intent_name(), reply.state, reply.message)
    }

    /// A day with no entry is still a fulfilled answer.
    #[instrument(skip(self, request))]
    async fn lookup(&self, request: &IntentRequest) -> HandlerResult<Reply> {
        let message = match request.slot(IntentKind::DAY_SLOT).filled() {
            Some(day) => {
                debug!(
                    day,
                    typed = ?request.original_value(IntentKind::DAY_SLOT),
                    "Querying single day"
                );
                match self.store.get(day).await? {
                    Some(entry) => format_day_schedule(&entry),
                    None => {
                        warn!(day, "No timetable entry for day");
                        templates::no_timetable_for(day)
                    }
                }
            }
            None => {
                let week = self.store.scan().await?;
                debug!(days = week.len(), "Scanned full timetable");
                format_timetable(&week)
            }
        };

        Ok(Reply::fulfilled(message))
    }
}
