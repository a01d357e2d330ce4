// ABOUTME: Canonical merged record combining activity metadata with two sensor channels
// ABOUTME: Channels are always present as arrays so downstream consumers never null-check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Activity, ActivityId, ChannelData, StreamPayload};

/// One activity after merging, in the shape the visualization consumes.
///
/// Metadata fields are copied verbatim, whatever their JSON type. `duration`
/// is left out of the serialized record when neither moving nor elapsed time
/// is known. `datetime` and `distance` are written as `null` in that
/// situation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedActivity {
    /// Activity identifier, in its original JSON type
    pub id: ActivityId,
    /// Local start timestamp, verbatim
    #[serde(default)]
    pub datetime: Value,
    /// Moving time, else elapsed time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    /// Distance, verbatim
    #[serde(default)]
    pub distance: Value,
    /// Heart rate samples
    #[serde(default)]
    pub heartrate: ChannelData,
    /// Smoothed velocity samples
    #[serde(rename = "velocity_smooth", default)]
    pub velocity: ChannelData,
}

impl ProcessedActivity {
    /// Assemble the record for `activity`.
    ///
    /// `streams` is `None` when no usable stream artifact exists, which
    /// yields empty channels.
    #[must_use]
    pub fn assemble(id: ActivityId, activity: &Activity, streams: Option<&StreamPayload>) -> Self {
        let (heartrate, velocity) = streams.map_or_else(
            || (Vec::new(), Vec::new()),
            |payload| (payload.heartrate(), payload.velocity_smooth()),
        );

        Self {
            id,
            datetime: activity.start_date_local().cloned().unwrap_or_default(),
            duration: activity.duration().cloned(),
            distance: activity.distance().cloned().unwrap_or_default(),
            heartrate,
            velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn activity(value: Value) -> Activity {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_assemble_without_streams() {
        let source = activity(json!({
            "id": "i1",
            "start_date_local": "2025-03-01T07:15:00",
            "moving_time": 1500,
            "elapsed_time": 1600,
            "distance": 5012.4
        }));

        let record = ProcessedActivity::assemble(ActivityId::from("i1"), &source, None);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            json!({
                "id": "i1",
                "datetime": "2025-03-01T07:15:00",
                "duration": 1500,
                "distance": 5012.4,
                "heartrate": [],
                "velocity_smooth": []
            })
        );
    }

    #[test]
    fn test_duration_omitted_when_unknown() {
        let source = activity(json!({"id": 9}));
        let record = ProcessedActivity::assemble(source.identifier().unwrap(), &source, None);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], json!(9));
        assert!(json.get("duration").is_none());
        assert_eq!(json["datetime"], Value::Null);
        assert_eq!(json["distance"], Value::Null);
    }

    #[test]
    fn test_assemble_with_streams() {
        let source = activity(json!({"id": "i2", "elapsed_time": 1800}));
        let payload = StreamPayload::from(json!({"heartrate": [140, 141]}));

        let record = ProcessedActivity::assemble(ActivityId::from("i2"), &source, Some(&payload));

        assert_eq!(record.duration, Some(json!(1800)));
        assert_eq!(record.heartrate, vec![json!(140), json!(141)]);
        assert!(record.velocity.is_empty());
    }
}
