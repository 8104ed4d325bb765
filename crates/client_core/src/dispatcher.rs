use shared::{error::TransportError, protocol::SteerPayload};

use crate::channel::SteerTransport;

/// Policy layer between freshly built payloads and the transport. With
/// auto-send on, every payload change is forwarded immediately; with it
/// off, only the explicit send action forwards, using whatever payload the
/// caller built at that moment.
///
/// Error policy at the transport boundary: no retry, the payload is
/// dropped and the error is returned for the caller to surface.
#[derive(Debug, Default)]
pub struct Dispatcher {
    auto_send: bool,
    last_sent: Option<SteerPayload>,
}

impl Dispatcher {
    pub fn new(auto_send: bool) -> Self {
        Self {
            auto_send,
            last_sent: None,
        }
    }

    pub fn auto_send(&self) -> bool {
        self.auto_send
    }

    pub fn set_auto_send(&mut self, auto_send: bool) {
        self.auto_send = auto_send;
    }

    /// React to a rebuilt payload. Returns true when the payload was handed
    /// to the transport.
    pub fn payload_changed(
        &mut self,
        transport: &mut dyn SteerTransport,
        payload: &SteerPayload,
    ) -> Result<bool, TransportError> {
        if !self.auto_send {
            return Ok(false);
        }
        self.forward(transport, payload)?;
        Ok(true)
    }

    /// Explicit user-triggered send of the most recently built payload.
    pub fn send_now(
        &mut self,
        transport: &mut dyn SteerTransport,
        payload: &SteerPayload,
    ) -> Result<(), TransportError> {
        self.forward(transport, payload)
    }

    fn forward(
        &mut self,
        transport: &mut dyn SteerTransport,
        payload: &SteerPayload,
    ) -> Result<(), TransportError> {
        let frame = payload.to_wire();
        transport.send(&frame)?;
        // A frame silently dropped by a not-yet-open simulator still counts
        // as issued; only a transport error leaves last_sent untouched.
        self.last_sent = Some(payload.clone());
        tracing::debug!(bytes = frame.len(), "steer payload handed to transport");
        Ok(())
    }

    /// Last payload actually handed to the transport, distinct from the
    /// latest built payload.
    pub fn last_sent(&self) -> Option<&SteerPayload> {
        self.last_sent.as_ref()
    }
}
