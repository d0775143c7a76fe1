use serde::{Deserialize, Serialize};

/// The person the order belongs to.
///
/// Only `display_name` and `last_initial` end up on a label; the rest is carried
/// through from the document untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "customerXID", default)]
    pub customer_xid: Option<String>,
    pub display_name: String,
    pub last_initial: String,
    #[serde(default)]
    pub reward_tier_number: Option<i64>,
}

impl Customer {
    /// Creates a customer with just the fields a label needs.
    pub fn new(display_name: impl Into<String>, last_initial: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            last_initial: last_initial.into(),
            ..Self::default()
        }
    }

    /// The name line printed on every label, e.g. `"Dana K."`.
    pub fn label_name(&self) -> String {
        format!("{} {}.", self.display_name, self.last_initial)
    }
}
