// ABOUTME: Per-activity sensor stream payload in its two known schema variants
// ABOUTME: Detects records-form vs channels-form payloads and extracts named channels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{Map, Value};

use crate::constants::channels;

/// Samples of one channel, passed through without resampling.
pub type ChannelData = Vec<Value>;

/// Raw stream payload for one activity.
///
/// The service does not commit to one response shape, so the payload is
/// classified by its outer container:
///
/// ```json
/// [{"type": "heartrate", "data": [120, 121]}, {"type": "cadence", "data": [80]}]
/// {"heartrate": [120, 121], "velocity_smooth": [2.9, 3.0]}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StreamPayload {
    /// Sequence of `{type, data}` records
    Records(Vec<Value>),
    /// Mapping from channel name to samples
    Channels(Map<String, Value>),
    /// Any other JSON shape (scalar or null)
    Unrecognized(Value),
}

impl From<Value> for StreamPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(records) => Self::Records(records),
            Value::Object(channels) => Self::Channels(channels),
            other => Self::Unrecognized(other),
        }
    }
}

impl StreamPayload {
    /// Whether the payload carries nothing worth persisting
    ///
    /// Empty containers and null, false, zero, or empty-string scalars are
    /// empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Records(records) => records.is_empty(),
            Self::Channels(channels) => channels.is_empty(),
            Self::Unrecognized(value) => match value {
                Value::Bool(b) => !b,
                Value::Number(n) => n.as_f64() == Some(0.0),
                Value::String(s) => s.is_empty(),
                _ => value.is_null(),
            },
        }
    }

    /// Samples of the named channel; empty when absent or malformed.
    ///
    /// In records form the first object whose `type` equals `name` wins.
    /// Non-object elements are skipped.
    #[must_use]
    pub fn channel(&self, name: &str) -> ChannelData {
        let data = match self {
            Self::Records(records) => records
                .iter()
                .filter_map(Value::as_object)
                .find(|record| {
                    record.get(channels::RECORD_TYPE_FIELD).and_then(Value::as_str) == Some(name)
                })
                .and_then(|record| record.get(channels::RECORD_DATA_FIELD)),
            Self::Channels(map) => map.get(name),
            Self::Unrecognized(_) => None,
        };

        data.and_then(Value::as_array).cloned().unwrap_or_default()
    }

    /// Heart rate samples
    #[must_use]
    pub fn heartrate(&self) -> ChannelData {
        self.channel(channels::HEARTRATE)
    }

    /// Smoothed velocity samples
    #[must_use]
    pub fn velocity_smooth(&self) -> ChannelData {
        self.channel(channels::VELOCITY_SMOOTH)
    }

    /// Back to raw JSON for persistence
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Records(records) => Value::Array(records),
            Self::Channels(channels) => Value::Object(channels),
            Self::Unrecognized(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channels_form() {
        let payload = StreamPayload::from(json!({
            "heartrate": [1, 2, 3],
            "velocity_smooth": [4, 5]
        }));

        assert!(matches!(payload, StreamPayload::Channels(_)));
        assert_eq!(payload.heartrate(), vec![json!(1), json!(2), json!(3)]);
        assert_eq!(payload.velocity_smooth(), vec![json!(4), json!(5)]);
    }

    #[test]
    fn test_channels_form_missing_key() {
        let payload = StreamPayload::from(json!({"heartrate": [1]}));
        assert!(payload.velocity_smooth().is_empty());
    }

    #[test]
    fn test_records_form_ignores_unknown_channels() {
        let payload = StreamPayload::from(json!([
            {"type": "heartrate", "data": [10, 20]},
            {"type": "cadence", "data": [1]}
        ]));

        assert!(matches!(payload, StreamPayload::Records(_)));
        assert_eq!(payload.heartrate(), vec![json!(10), json!(20)]);
        assert!(payload.velocity_smooth().is_empty());
    }

    #[test]
    fn test_records_form_skips_non_objects() {
        let payload = StreamPayload::from(json!([
            "garbage",
            42,
            null,
            {"type": "velocity_smooth", "data": [2.5, 2.75]}
        ]));

        assert_eq!(payload.velocity_smooth(), vec![json!(2.5), json!(2.75)]);
        assert!(payload.heartrate().is_empty());
    }

    #[test]
    fn test_records_form_first_match_wins() {
        let payload = StreamPayload::from(json!([
            {"type": "heartrate", "data": [1]},
            {"type": "heartrate", "data": [2]}
        ]));
        assert_eq!(payload.heartrate(), vec![json!(1)]);
    }

    #[test]
    fn test_malformed_channel_data_is_empty() {
        let records = StreamPayload::from(json!([{"type": "heartrate", "data": "oops"}]));
        assert!(records.heartrate().is_empty());

        let missing_data = StreamPayload::from(json!([{"type": "heartrate"}]));
        assert!(missing_data.heartrate().is_empty());

        let channels = StreamPayload::from(json!({"heartrate": {"not": "a list"}}));
        assert!(channels.heartrate().is_empty());
    }

    #[test]
    fn test_unrecognized_shapes() {
        for value in [json!(null), json!(7), json!("text"), json!(true)] {
            let payload = StreamPayload::from(value);
            assert!(matches!(payload, StreamPayload::Unrecognized(_)));
            assert!(payload.heartrate().is_empty());
            assert!(payload.velocity_smooth().is_empty());
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(StreamPayload::from(json!([])).is_empty());
        assert!(StreamPayload::from(json!({})).is_empty());
        assert!(StreamPayload::from(json!(null)).is_empty());
        assert!(!StreamPayload::from(json!([{"type": "watts", "data": []}])).is_empty());
    }

    #[test]
    fn test_falsy_scalars_are_empty() {
        for value in [json!(0), json!(0.0), json!(false), json!("")] {
            assert!(StreamPayload::from(value).is_empty());
        }
        for value in [json!(7), json!(true), json!("text")] {
            assert!(!StreamPayload::from(value).is_empty());
        }
    }
}
