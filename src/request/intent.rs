use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Explicit `null` reads as the field's default, same as a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Inbound fulfillment event. Everything is optional on the wire; absent
/// fields deserialize to their defaults instead of failing.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IntentRequest {
    pub session_id: Option<String>,
    pub input_transcript: Option<String>,
    pub invocation_source: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub session_state: SessionState,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    #[serde(deserialize_with = "null_as_default")]
    pub intent: Intent,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Intent {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// A slot the bot defines but the user has not filled arrives as `null`.
    #[serde(deserialize_with = "null_as_default")]
    pub slots: HashMap<String, Option<Slot>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Slot {
    pub value: Option<SlotValue>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SlotValue {
    pub interpreted_value: Option<String>,
    pub original_value: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub resolved_values: Vec<String>,
}

/// Outcome of reading one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLookup<'a> {
    /// Present with a non-empty interpreted value.
    Filled(&'a str),
    /// Named in the payload but carrying no usable value.
    Empty,
    /// Not named in the payload at all.
    Absent,
}

impl<'a> SlotLookup<'a> {
    pub fn filled(self) -> Option<&'a str> {
        match self {
            SlotLookup::Filled(v) => Some(v),
            SlotLookup::Empty | SlotLookup::Absent => None,
        }
    }
}

impl IntentRequest {
    pub fn new(intent_name: &str) -> Self {
        Self {
            session_state: SessionState {
                intent: Intent {
                    name: intent_name.to_string(),
                    slots: HashMap::new(),
                },
            },
            ..Default::default()
        }
    }

    /// Builder used by callers and tests to attach an interpreted slot value.
    pub fn with_slot(mut self, name: &str, interpreted: Option<&str>) -> Self {
        let slot = interpreted.map(|v| Slot {
            value: Some(SlotValue {
                interpreted_value: Some(v.to_string()),
                original_value: Some(v.to_string()),
                resolved_values: Vec::new(),
            }),
        });
        self.session_state
            .intent
            .slots
            .insert(name.to_string(), slot);
        self
    }

    pub fn intent_name(&self) -> &str {
        &self.session_state.intent.name
    }

    /// What the user actually typed for a slot, before Lex interpreted it.
    pub fn original_value(&self, name: &str) -> Option<&str> {
        self.session_state
            .intent
            .slots
            .get(name)?
            .as_ref()?
            .value
            .as_ref()?
            .original_value
            .as_deref()
    }

    pub fn slot(&self, name: &str) -> SlotLookup<'_> {
        match self.session_state.intent.slots.get(name) {
            None => SlotLookup::Absent,
            Some(slot) => match slot
                .as_ref()
                .and_then(|s| s.value.as_ref())
                .and_then(|v| v.interpreted_value.as_deref())
            {
                Some(v) if !v.is_empty() => SlotLookup::Filled(v),
                _ => SlotLookup::Empty,
            },
        }
    }
}
