use serde::{Deserialize, Serialize};

use super::address::Address;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub recipient_address: Address,
    pub sender_address: Address,
    pub value: f64,
}

impl Transaction {
    /// A transaction is valid once it carries a non-empty id.
    pub fn is_valid(&self) -> bool {
        matches!(&self.id, Some(id) if !id.is_empty())
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Transaction {
        self.id = Some(id.into());
        self
    }
}
