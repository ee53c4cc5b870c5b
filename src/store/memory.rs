//! In-process tables backed by JSON documents.

use crate::store::traits::RecordStore;
use crate::store::types::{decode_item, Record, StoreResult, StudentRecord, TimetableEntry};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Items are kept undecoded so a bad document fails at read time, the same
/// way a remote table would.
pub struct MemoryStore<R> {
    items: Vec<Value>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> MemoryStore<R> {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items,
            _record: PhantomData,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn key_of(item: &Value) -> Option<&str> {
        item.get(R::KEY).and_then(Value::as_str)
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    #[instrument(skip(self), fields(table = R::DEFAULT_TABLE))]
    async fn get(&self, key: &str) -> StoreResult<Option<R>> {
        let found = self
            .items
            .iter()
            .find(|item| Self::key_of(item) == Some(key))
            .cloned();

        debug!(hit = found.is_some(), "memory lookup");

        found.map(|item| decode_item(key, item)).transpose()
    }

    #[instrument(skip(self), fields(table = R::DEFAULT_TABLE))]
    async fn scan(&self) -> StoreResult<Vec<R>> {
        debug!(count = self.items.len(), "memory scan");

        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let key = Self::key_of(item)
                    .map(String::from)
                    .unwrap_or_else(|| format!("#{}", i));
                decode_item(&key, item.clone())
            })
            .collect()
    }
}

/// On-disk layout of a fixture file.
#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub students: Vec<Value>,
    #[serde(default)]
    pub timetable: Vec<Value>,
}

impl Fixture {
    pub fn from_str(content: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            crate::store::StoreError::Fixture(format!(
                "cannot read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let fixture = Self::from_str(&content)?;
        info!(
            path = %path.as_ref().display(),
            students = fixture.students.len(),
            days = fixture.timetable.len(),
            "Fixture loaded"
        );
        Ok(fixture)
    }

    pub fn into_stores(self) -> (MemoryStore<StudentRecord>, MemoryStore<TimetableEntry>) {
        (
            MemoryStore::new(self.students),
            MemoryStore::new(self.timetable),
        )
    }
}
