//! Variables and result shape of the `orderGroup` GraphQL query.

use super::aggregate::OrderGroupDto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderGroupVariables {
    /// Serialized as `null` when the page URL carries no `og` parameter.
    pub order_group: Option<String>,
}

/// `data` section of the query response. The group is kept as raw JSON so a
/// malformed group can be told apart from a malformed envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderGroupQueryData {
    #[serde(default)]
    pub order_group: Option<serde_json::Value>,
}

impl OrderGroupQueryData {
    /// Decodes the group. `Ok(None)` means the server returned `null`.
    pub fn decode(self) -> Result<Option<OrderGroupDto>, String> {
        match self.order_group {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| format!("Malformed order group: {}", e)),
        }
    }
}
