// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::config::consts::UNKNOWN_ITEM_NAME;

/// Field used to label an item in notifications.
pub const NAME_KEY: &str = "name";
/// Field added to every processed record holding the processing time.
pub const PROCESSED_AT_KEY: &str = "processed_at";
/// Field added to every processed record holding the processor identifier.
pub const PROCESSOR_KEY: &str = "processor";

/// Open-ended record supplied by the caller.
///
/// Items have no schema. The optional `name` field is only used for display.
///
/// # Example
/// ```
/// use showcase::collector::Item;
///
/// let item = Item::new().with("name", "Item 1").with("value", 100);
/// assert_eq!(item.display_name(), "Item 1");
/// assert_eq!(Item::new().display_name(), "Unknown");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The item's label: its `name` string, the JSON rendering of a non-string
    /// `name`, or `"Unknown"` when the field is absent.
    pub fn display_name(&self) -> Cow<'_, str> {
        match self.0.get(NAME_KEY) {
            Some(Value::String(name)) => Cow::Borrowed(name.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
            None => Cow::Borrowed(UNKNOWN_ITEM_NAME),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Item> for Map<String, Value> {
    fn from(item: Item) -> Self {
        item.0
    }
}

/// A copy of an [`Item`] annotated with when and by whom it was processed.
///
/// Serializes as one flat JSON object: the source fields followed by
/// `processed_at` and `processor`, which win over source fields of the same name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "Map<String, Value>")]
pub struct ProcessedItem {
    item: Item,
    processed_at: String,
    processor: String,
}

impl ProcessedItem {
    pub fn new(item: Item, processed_at: DateTime<Utc>, processor: impl Into<String>) -> Self {
        Self {
            item,
            processed_at: processed_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            processor: processor.into(),
        }
    }

    /// The copied source item, without the added fields.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// ISO-8601 processing timestamp in UTC.
    pub fn processed_at(&self) -> &str {
        &self.processed_at
    }

    pub fn processor(&self) -> &str {
        &self.processor
    }

    /// Flatten into a single record of source fields plus the two added fields.
    pub fn into_record(self) -> Map<String, Value> {
        let mut record: Map<String, Value> = self.item.into();
        record.insert(PROCESSED_AT_KEY.to_string(), Value::String(self.processed_at));
        record.insert(PROCESSOR_KEY.to_string(), Value::String(self.processor));
        record
    }
}

impl From<ProcessedItem> for Map<String, Value> {
    fn from(processed: ProcessedItem) -> Self {
        processed.into_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap()
    }

    #[test]
    fn test_display_name_variants() {
        assert_eq!(Item::new().with("name", "Widget").display_name(), "Widget");
        assert_eq!(Item::new().with("value", 1).display_name(), "Unknown");
        assert_eq!(Item::new().with("name", 42).display_name(), "42");
        assert_eq!(Item::new().with("name", Value::Null).display_name(), "null");
        assert!(Item::new().is_empty());
    }

    #[test]
    fn test_item_deserializes_from_any_json_object() {
        let item: Item = serde_json::from_value(json!({"name": "a", "tags": [1, 2]})).unwrap();
        assert_eq!(item.len(), 2);
        assert_eq!(item.get("tags"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_record_adds_exactly_two_fields() {
        let item = Item::new().with("name", "Item 1").with("value", 100);
        let processed = ProcessedItem::new(item.clone(), fixed_time(), "DemoProcessor");

        let record = processed.into_record();
        assert_eq!(record.len(), item.len() + 2);
        assert_eq!(record["name"], json!("Item 1"));
        assert_eq!(record["value"], json!(100));
        assert_eq!(record[PROCESSED_AT_KEY], json!("2025-03-14T15:09:26.000000Z"));
        assert_eq!(record[PROCESSOR_KEY], json!("DemoProcessor"));
    }

    #[test]
    fn test_added_fields_override_source_fields() {
        let item = Item::new().with("processor", "spoofed");
        let processed = ProcessedItem::new(item, fixed_time(), "Real");

        let value = serde_json::to_value(&processed).unwrap();
        assert_eq!(value["processor"], json!("Real"));
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_serialized_keys_keep_insertion_order() {
        let item = Item::new().with("name", "Item 1").with("value", 100);
        let processed = ProcessedItem::new(item, fixed_time(), "DemoProcessor");

        let value = serde_json::to_value(&processed).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "value", PROCESSED_AT_KEY, PROCESSOR_KEY]);

        assert_eq!(
            serde_json::to_string(&processed).unwrap(),
            r#"{"name":"Item 1","value":100,"processed_at":"2025-03-14T15:09:26.000000Z","processor":"DemoProcessor"}"#
        );
    }

    #[test]
    fn test_timestamp_is_parseable_iso8601() {
        let processed = ProcessedItem::new(Item::new(), Utc::now(), "p");
        assert!(DateTime::parse_from_rfc3339(processed.processed_at()).is_ok());
    }
}
