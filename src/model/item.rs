use serde::{Deserialize, Serialize};
use super::serde_helpers::null_default;

/// A line item of the order. Each item becomes one label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "null_default")]
    pub child_items: Vec<ChildItem>,
    #[serde(default)]
    pub custom_instructions: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub sum_of_prices_after_discounts: i64,
    pub sku_number: String,
    #[serde(default, deserialize_with = "null_default")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub price_amount: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub discount_amount: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub price_after_discount: i64,
}

impl Item {
    /// Creates an item with the given SKU and child SKUs; money fields stay zero.
    pub fn new<I, S>(sku_number: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sku_number: sku_number.into(),
            quantity: 1,
            child_items: children.into_iter().map(ChildItem::new).collect(),
            ..Self::default()
        }
    }

    /// Number of modifiers nested under this item. Drives the label height.
    pub fn child_count(&self) -> usize {
        self.child_items.len()
    }
}

/// A modifier or add-on nested under an [`Item`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildItem {
    pub sku_number: String,
    #[serde(default, deserialize_with = "null_default")]
    pub quantity: i64,
    #[serde(default)]
    pub price_amount: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub discount_amount: i64,
    #[serde(default)]
    pub price_after_discount: Option<i64>,
}

impl ChildItem {
    pub fn new(sku_number: impl Into<String>) -> Self {
        Self {
            sku_number: sku_number.into(),
            quantity: 1,
            ..Self::default()
        }
    }
}
