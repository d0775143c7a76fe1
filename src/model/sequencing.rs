use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::serde_helpers::null_default;

/// Pickup/delivery timing hints attached to the order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequencing {
    #[serde(default, deserialize_with = "null_default")]
    pub travel_time_details: Vec<TravelTimeDetail>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelTimeDetail {
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_default")]
    pub min_travel_time: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub max_travel_time: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub transport_mode: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}
