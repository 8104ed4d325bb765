use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure kinds at the transport boundary. The simulated channel never
/// produces these; a real transport implementation must map its failures
/// onto them so the dispatcher can apply a per-kind policy.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum TransportError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("send rejected: {0}")]
    SendRejected(String),
    #[error("timed out after {0} ms")]
    Timeout(u64),
}
