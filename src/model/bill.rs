use serde::{Deserialize, Serialize};
use super::serde_helpers::null_default;

/// Totals and payment for the order. Not printed on labels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default, deserialize_with = "null_default")]
    pub receipt_number: String,
    #[serde(default, deserialize_with = "null_default")]
    pub subtotal_amount: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub total_tax_amount: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub total_amount: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub tax_labels: Vec<TaxLabel>,
    #[serde(default, deserialize_with = "null_default")]
    pub tenders: Vec<Tender>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxLabel {
    #[serde(default, deserialize_with = "null_default")]
    pub tax_label: String,
    #[serde(default, deserialize_with = "null_default")]
    pub tax_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    #[serde(default, deserialize_with = "null_default")]
    pub tender_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub amount: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub currency_code: String,
}
