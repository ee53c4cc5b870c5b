//! End-to-end: raw fulfillment events through the public API against the
//! bundled fixture.

use serde_json::{json, Value};
use std::path::PathBuf;
use unibot_lib::config::StoreBackend;
use unibot_lib::{build_dispatcher, handle_event, handle_json, Config, Dispatcher, OutcomeState};

async fn fixture_dispatcher(fixed_student_id: Option<&str>) -> Dispatcher {
    let mut config = Config::default();
    config.store.backend = StoreBackend::Memory;
    config.store.fixture_path =
        Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/records.json"));
    config.lookup.fixed_student_id = fixed_student_id.map(String::from);
    build_dispatcher(&config).await.unwrap()
}

fn event(intent: &str, slots: Value) -> Value {
    json!({
        "sessionId": "test-session",
        "inputTranscript": "what is on today",
        "invocationSource": "FulfillmentCodeHook",
        "bot": {"name": "CampusBot", "version": "DRAFT", "localeId": "en_US"},
        "sessionState": {
            "intent": {"name": intent, "slots": slots, "state": "ReadyForFulfillment"}
        }
    })
}

fn slot(value: &str) -> Value {
    json!({"shape": "Scalar", "value": {"originalValue": value, "interpretedValue": value, "resolvedValues": [value]}})
}

/// Every reply, on every path, has this exact outer shape.
fn assert_contract(response: &unibot_lib::Response) -> Value {
    let value = serde_json::to_value(response).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(value["sessionState"]["dialogAction"], json!({"type": "Close"}));
    let state = value["sessionState"]["intent"]["state"].as_str().unwrap();
    assert!(state == "Fulfilled" || state == "Failed");
    let messages = value["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["contentType"], "PlainText");
    assert!(messages[0]["content"].is_string());
    value
}

#[tokio::test]
async fn attendance_for_known_student() {
    let dispatcher = fixture_dispatcher(None).await;
    let response = handle_event(
        &dispatcher,
        event("CheckAttendanceMarks", json!({"StudentID": slot("RA2211028010180")})),
    )
    .await;

    let value = assert_contract(&response);
    assert_eq!(value["sessionState"]["intent"]["name"], "CheckAttendanceMarks");
    assert_eq!(response.state(), OutcomeState::Fulfilled);
    assert!(response.content().contains("👤 Name: Diya Iyer"));
    assert!(response.content().contains("📅 Attendance: 93.5%"));
}

#[tokio::test]
async fn fixed_demo_id_answers_any_student() {
    let dispatcher = fixture_dispatcher(Some("RA2211028010179")).await;
    let response = handle_event(
        &dispatcher,
        event("CheckAttendanceMarks", json!({"StudentID": slot("RA2211028010181")})),
    )
    .await;

    assert_contract(&response);
    assert_eq!(response.state(), OutcomeState::Fulfilled);
    assert!(response.content().contains("👤 Name: Aarav Sharma"));
}

#[tokio::test]
async fn student_without_marks() {
    let dispatcher = fixture_dispatcher(None).await;
    let response = handle_event(
        &dispatcher,
        event("CheckAttendanceMarks", json!({"StudentID": slot("RA2211028010181")})),
    )
    .await;

    assert_contract(&response);
    assert!(response.content().contains("📅 Attendance: N/A"));
    assert!(response.content().contains("No marks available"));
}

#[tokio::test]
async fn null_student_slot() {
    let dispatcher = fixture_dispatcher(None).await;
    let response = handle_event(&dispatcher, event("CheckAttendanceMarks", json!({"StudentID": null}))).await;

    assert_contract(&response);
    assert_eq!(response.state(), OutcomeState::Failed);
    assert!(response.content().contains("Missing Student ID"));
}

#[tokio::test]
async fn friday_has_no_classes() {
    let dispatcher = fixture_dispatcher(None).await;
    let response = handle_event(&dispatcher, event("GetTimeTable", json!({"Day": slot("Friday")}))).await;

    assert_contract(&response);
    assert_eq!(response.state(), OutcomeState::Fulfilled);
    assert_eq!(response.content(), "📅 **Friday**: No scheduled classes.");
}

#[tokio::test]
async fn whole_week_when_no_day() {
    let dispatcher = fixture_dispatcher(None).await;
    let response = handle_event(&dispatcher, event("GetTimeTable", json!({"Day": null}))).await;

    assert_contract(&response);
    assert_eq!(response.state(), OutcomeState::Fulfilled);
    let days: Vec<&str> = response
        .content()
        .split("\n\n")
        .map(|block| block.lines().next().unwrap())
        .collect();
    assert_eq!(
        days,
        vec![
            "📅 **Monday**",
            "📅 **Tuesday**",
            "📅 **Wednesday**",
            "📅 **Thursday**",
            "📅 **Friday**: No scheduled classes."
        ]
    );
}

#[tokio::test]
async fn null_slots_map_lists_whole_week() {
    let dispatcher = fixture_dispatcher(None).await;
    let raw = r#"{"sessionState": {"intent": {"name": "GetTimeTable", "slots": null}}}"#;
    let response = handle_json(&dispatcher, raw).await;

    assert_contract(&response);
    assert_eq!(response.state(), OutcomeState::Fulfilled);
    assert!(response.content().starts_with("📅 **Monday**"));
    assert!(response.content().ends_with("📅 **Friday**: No scheduled classes."));
}

#[tokio::test]
async fn null_resolved_values_still_answer_the_day() {
    let dispatcher = fixture_dispatcher(None).await;
    let day = json!({"shape": "Scalar", "value": {
        "originalValue": "friday",
        "interpretedValue": "Friday",
        "resolvedValues": null
    }});
    let response = handle_event(&dispatcher, event("GetTimeTable", json!({"Day": day}))).await;

    assert_contract(&response);
    assert_eq!(response.state(), OutcomeState::Fulfilled);
    assert_eq!(response.content(), "📅 **Friday**: No scheduled classes.");
}

#[tokio::test]
async fn unknown_intent_from_json() {
    let dispatcher = fixture_dispatcher(None).await;
    let raw = r#"{"sessionState": {"intent": {"name": "BookLibraryRoom"}}}"#;
    let response = handle_json(&dispatcher, raw).await;

    let value = assert_contract(&response);
    assert_eq!(value["sessionState"]["intent"]["name"], "BookLibraryRoom");
    assert_eq!(
        response.content(),
        "❌ **Error:** Intent 'BookLibraryRoom' not recognized."
    );
}

#[tokio::test]
async fn undecodable_event_still_gets_envelope() {
    let dispatcher = fixture_dispatcher(None).await;
    let bad = json!({"sessionState": {"intent": {"name": "GetTimeTable", "slots": "Monday"}}});
    let response = handle_event(&dispatcher, bad).await;

    let value = assert_contract(&response);
    assert_eq!(value["sessionState"]["intent"]["name"], "GetTimeTable");
    assert_eq!(response.state(), OutcomeState::Failed);
    assert!(response.content().starts_with("❌ **System Error:**"));
}

#[tokio::test]
async fn invalid_json_text() {
    let dispatcher = fixture_dispatcher(None).await;
    let response = handle_json(&dispatcher, "{not json").await;

    assert_contract(&response);
    assert_eq!(response.state(), OutcomeState::Failed);
    assert_eq!(response.intent_name(), "");
}

#[tokio::test]
async fn missing_fixture_fails_bootstrap() {
    let mut config = Config::default();
    config.store.fixture_path = Some(PathBuf::from("/definitely/not/here.json"));
    assert!(build_dispatcher(&config).await.is_err());
}
