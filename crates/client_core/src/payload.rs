use shared::{domain::SteeringParameters, protocol::SteerPayload};

/// Build the outbound payload from a parameter snapshot and the current
/// epoch time. Pure; callers rebuild on every parameter change rather than
/// caching, since both the timestamp and the values are inputs.
pub fn build_payload(params: &SteeringParameters, now_ms: i64) -> SteerPayload {
    SteerPayload::new(*params, now_ms)
}
