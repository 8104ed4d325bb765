//! UI events and error modeling for the steering panel controller.

use shared::error::TransportError;

pub enum UiEvent {
    ChannelOpened,
    ChannelClosed,
    /// Acknowledgment text echoed by the channel for a sent payload.
    AckReceived(String),
    /// Pretty-printed form of the payload the dispatcher actually sent.
    PayloadSent(String),
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Send,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_transport(context: UiErrorContext, err: &TransportError) -> Self {
        let message = match err {
            TransportError::ConnectionFailed(detail) => {
                format!("Channel connection failed: {detail}")
            }
            TransportError::SendRejected(detail) => {
                format!("Payload rejected by the transport: {detail}")
            }
            TransportError::Timeout(ms) => format!("Transport timed out after {ms} ms"),
        };
        Self { context, message }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
