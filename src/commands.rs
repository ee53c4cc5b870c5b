use crate::config::{Config, StoreBackend};
use crate::engine::output::{templates, Response, ResponseBuilder};
use crate::engine::Dispatcher;
use crate::request::IntentRequest;
use crate::store::{Fixture, RecordStore, StoreError, StudentRecord, TimetableEntry};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Store setup failed: {0}")]
    Store(#[from] StoreError),
    #[error("Store backend '{0}' is not compiled in")]
    BackendDisabled(&'static str),
}

type Tables = (
    Arc<dyn RecordStore<StudentRecord>>,
    Arc<dyn RecordStore<TimetableEntry>>,
);

/* ---------- 1.  SETUP ---------- */

/// Build the dispatcher and its store backend from configuration.
pub async fn build_dispatcher(config: &Config) -> Result<Dispatcher, BootstrapError> {
    let (students, timetable) = match config.store.backend {
        StoreBackend::Memory => memory_tables(config)?,
        StoreBackend::Dynamodb => dynamo_tables(config).await?,
    };

    let policy = config.student_key_policy();
    info!(backend = ?config.store.backend, policy = ?policy, "Dispatcher ready");

    Ok(Dispatcher::new(students, timetable, policy))
}

fn memory_tables(config: &Config) -> Result<Tables, BootstrapError> {
    let fixture = match config.store.fixture_path {
        Some(ref path) => Fixture::from_file(path)?,
        None => Fixture::default(),
    };
    let (students, timetable) = fixture.into_stores();
    let students: Arc<dyn RecordStore<StudentRecord>> = Arc::new(students);
    let timetable: Arc<dyn RecordStore<TimetableEntry>> = Arc::new(timetable);
    Ok((students, timetable))
}

#[cfg(feature = "dynamodb")]
async fn dynamo_tables(config: &Config) -> Result<Tables, BootstrapError> {
    use crate::store::dynamo::{connect, DynamoSettings, DynamoStore};

    let client = connect(&DynamoSettings {
        region: config.store.region.clone(),
        endpoint_url: config.store.endpoint_url.clone(),
    })
    .await;

    let students: Arc<dyn RecordStore<StudentRecord>> = Arc::new(DynamoStore::<StudentRecord>::new(
        client.clone(),
        config.store.student_table.as_str(),
    ));
    let timetable: Arc<dyn RecordStore<TimetableEntry>> = Arc::new(
        DynamoStore::<TimetableEntry>::new(client, config.store.timetable_table.as_str()),
    );
    Ok((students, timetable))
}

#[cfg(not(feature = "dynamodb"))]
async fn dynamo_tables(_config: &Config) -> Result<Tables, BootstrapError> {
    Err(BootstrapError::BackendDisabled("dynamodb"))
}

/* ---------- 2.  PER-TURN ---------- */

/// Handle one raw event. An event that does not deserialize still gets a
/// `Failed` envelope, echoing the intent name when it can be read.
pub async fn handle_event(dispatcher: &Dispatcher, event: serde_json::Value) -> Response {
    let name = event
        .pointer("/sessionState/intent/name")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    match serde_json::from_value::<IntentRequest>(event) {
        Ok(request) => dispatcher.dispatch(&request).await,
        Err(e) => {
            error!(error = %e, "Unreadable event");
            ResponseBuilder::failed(&name, templates::system_error(e))
        }
    }
}

/// Same as [`handle_event`], starting from JSON text.
pub async fn handle_json(dispatcher: &Dispatcher, raw: &str) -> Response {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(event) => handle_event(dispatcher, event).await,
        Err(e) => {
            error!(error = %e, "Event is not valid JSON");
            ResponseBuilder::failed("", templates::system_error(e))
        }
    }
}
