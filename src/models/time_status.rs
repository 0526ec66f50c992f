use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStatus {
    pub within_time: bool,
    pub current_time: String, // zone-local, "HH.MM.SS"
}
