//! DynamoDB tables: `GetItem` for lookups, a single `Scan` for listings.

use crate::store::traits::RecordStore;
use crate::store::types::{decode_item, Record, StoreError, StoreResult};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use std::marker::PhantomData;
use tracing::{debug, info, instrument};

/// Connection settings shared by every table.
#[derive(Debug, Clone, Default)]
pub struct DynamoSettings {
    pub region: Option<String>,
    /// Custom endpoint, e.g. LocalStack.
    pub endpoint_url: Option<String>,
}

/// Build a client from the default AWS provider chain.
pub async fn connect(settings: &DynamoSettings) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(ref region) = settings.region {
        loader = loader.region(Region::new(region.clone()));
    }

    let aws_config = loader.load().await;
    let mut builder = aws_sdk_dynamodb::config::Builder::from(&aws_config);

    if let Some(ref endpoint) = settings.endpoint_url {
        builder = builder.endpoint_url(endpoint);
    }

    info!(
        region = ?settings.region,
        endpoint = ?settings.endpoint_url,
        "DynamoDB client initialized"
    );

    Client::from_conf(builder.build())
}

pub struct DynamoStore<R> {
    client: Client,
    table_name: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> DynamoStore<R> {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for DynamoStore<R> {
    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn get(&self, key: &str) -> StoreResult<Option<R>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(R::KEY, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::Backend(DisplayErrorContext(&e).to_string()))?;

        debug!(hit = output.item().is_some(), "get_item");

        output
            .item()
            .map(|item| decode_item(key, item_to_json(key, item)?))
            .transpose()
    }

    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn scan(&self) -> StoreResult<Vec<R>> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StoreError::Backend(DisplayErrorContext(&e).to_string()))?;

        debug!(count = output.items().len(), "scan");

        output
            .items()
            .iter()
            .map(|item| {
                let key = match item.get(R::KEY) {
                    Some(AttributeValue::S(k)) => k.clone(),
                    _ => String::from("<no key>"),
                };
                decode_item(&key, item_to_json(&key, item)?)
            })
            .collect()
    }
}

/// Convert a DynamoDB item to a JSON object so it can go through serde.
pub fn item_to_json(key: &str, item: &HashMap<String, AttributeValue>) -> StoreResult<Value> {
    let mut object = Map::new();
    for (name, attr) in item {
        object.insert(name.clone(), attribute_to_json(key, attr)?);
    }
    Ok(Value::Object(object))
}

fn attribute_to_json(key: &str, attr: &AttributeValue) -> StoreResult<Value> {
    let malformed = |reason: String| StoreError::Malformed {
        key: key.to_string(),
        reason,
    };

    let value = match attr {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => Value::Number(
            parse_number(n).ok_or_else(|| malformed(format!("invalid number '{}'", n)))?,
        ),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(list) => Value::Array(
            list.iter()
                .map(|v| attribute_to_json(key, v))
                .collect::<StoreResult<Vec<_>>>()?,
        ),
        AttributeValue::M(map) => item_to_json(key, map)?,
        AttributeValue::Ss(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(
            set.iter()
                .map(|n| {
                    parse_number(n)
                        .map(Value::Number)
                        .ok_or_else(|| malformed(format!("invalid number '{}'", n)))
                })
                .collect::<StoreResult<Vec<_>>>()?,
        ),
        other => return Err(malformed(format!("unsupported attribute type {:?}", other))),
    };

    Ok(value)
}

fn parse_number(raw: &str) -> Option<Number> {
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Number::from(i));
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}
