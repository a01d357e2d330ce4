// ABOUTME: Activity record model as received from the remote tracking service
// ABOUTME: Verbatim JSON object with accessors for the few fields the pipeline reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

const ID_FIELD: &str = "id";
const TYPE_FIELD: &str = "type";
const NAME_FIELD: &str = "name";
const START_DATE_LOCAL_FIELD: &str = "start_date_local";
const MOVING_TIME_FIELD: &str = "moving_time";
const ELAPSED_TIME_FIELD: &str = "elapsed_time";
const DISTANCE_FIELD: &str = "distance";

/// Opaque activity identifier.
///
/// The service uses strings (`"i12345"`) but numbers are accepted as well and
/// serialized back in their original form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityId {
    /// Textual identifier
    Text(String),
    /// Numeric identifier
    Number(Number),
}

impl ActivityId {
    /// Build an identifier from a raw JSON value.
    ///
    /// Returns `None` for null, the empty string, zero, and any value that is
    /// neither a string nor a number.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self::Text(s.clone())),
            Value::Number(n) if !is_zero(n) => Some(Self::Number(n.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ActivityId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

fn is_zero(n: &Number) -> bool {
    n.as_f64() == Some(0.0)
}

/// Whether a JSON value counts as set: not null, false, zero, or empty
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !is_zero(n),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// A single activity as listed by the remote service.
///
/// The object is kept exactly as received. Fields are read leniently, so a
/// value of an unexpected type is passed through instead of failing the
/// whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Activity {
    fields: Map<String, Value>,
}

impl Activity {
    fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Validated identifier, `None` when missing, empty, or zero
    #[must_use]
    pub fn identifier(&self) -> Option<ActivityId> {
        self.fields.get(ID_FIELD).and_then(ActivityId::from_value)
    }

    /// Whether the category tag equals `category` exactly
    #[must_use]
    pub fn is_category(&self, category: &str) -> bool {
        self.text(TYPE_FIELD) == Some(category)
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text(NAME_FIELD)
    }

    /// Local start timestamp as sent by the service
    #[must_use]
    pub fn start_date_local(&self) -> Option<&Value> {
        self.field(START_DATE_LOCAL_FIELD)
    }

    /// Moving time unless unset or zero, else elapsed time
    #[must_use]
    pub fn duration(&self) -> Option<&Value> {
        self.field(MOVING_TIME_FIELD)
            .filter(|moving| is_set(moving))
            .or_else(|| self.field(ELAPSED_TIME_FIELD))
    }

    /// Distance as sent by the service
    #[must_use]
    pub fn distance(&self) -> Option<&Value> {
        self.field(DISTANCE_FIELD)
    }
}
