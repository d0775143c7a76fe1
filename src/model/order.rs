use crate::model::{Bill, Customer, Item, Sequencing};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::serde_helpers::null_default;

/// A single customer transaction as delivered by the ordering channel.
///
/// The renderer reads `customer` and `items`; everything else is carried through
/// so that the whole document round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "null_default")]
    pub producer_order_id: String,
    #[serde(default)]
    pub delivery_short_order_id: Option<String>,
    #[serde(default)]
    pub provider_order_id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub provider_id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub channel: String,
    #[serde(default, deserialize_with = "null_default")]
    pub pickup_intent: String,
    #[serde(default, deserialize_with = "null_default")]
    pub location_number: String,
    #[serde(default, deserialize_with = "null_default")]
    pub merchant_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub customer: Customer,
    #[serde(default, deserialize_with = "null_default")]
    pub order_preparation: String,
    #[serde(deserialize_with = "null_default")]
    pub items: Vec<Item>,
    #[serde(default, deserialize_with = "null_default")]
    pub sequencing: Sequencing,
    #[serde(default, deserialize_with = "null_default")]
    pub delivery_attempts: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub bill: Bill,
    #[serde(default)]
    pub order_notes: Option<String>,
}

impl Order {
    /// Creates an order holding only a customer and its items.
    ///
    /// # Arguments
    /// * `customer` - Who the labels are printed for
    /// * `items` - Line items, one label each
    pub fn new(customer: Customer, items: Vec<Item>) -> Self {
        Self {
            producer_order_id: String::new(),
            delivery_short_order_id: None,
            provider_order_id: None,
            provider_id: String::new(),
            channel: String::new(),
            pickup_intent: String::new(),
            location_number: String::new(),
            merchant_id: String::new(),
            timestamp: None,
            customer,
            order_preparation: String::new(),
            items,
            sequencing: Sequencing::default(),
            delivery_attempts: 0,
            bill: Bill::default(),
            order_notes: None,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
