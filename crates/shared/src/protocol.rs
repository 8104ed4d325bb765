use serde::{Deserialize, Serialize};

use crate::domain::SteeringParameters;

/// Operation tag carried by every steering payload.
pub const STEER_OP: &str = "steer";

/// Outbound wire payload. The serialized shape is the contract a real
/// inference backend must accept:
///
/// ```json
/// { "t": 1700000000000, "op": "steer", "params": { "brightness": 1.0, ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteerPayload {
    #[serde(rename = "t")]
    pub timestamp_ms: i64,
    pub op: String,
    pub params: SteeringParameters,
}

impl SteerPayload {
    pub fn new(params: SteeringParameters, timestamp_ms: i64) -> Self {
        Self {
            timestamp_ms,
            op: STEER_OP.to_string(),
            params,
        }
    }

    /// Serialize for the transport. A flat struct of numbers and a static
    /// tag cannot fail to serialize, so the error arm collapses to an
    /// empty frame.
    pub fn to_wire(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Pretty-printed form for the read-only payload viewer.
    pub fn to_display(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
