//! Channel commands queued from UI to the channel worker.

use shared::protocol::SteerPayload;

pub enum ChannelCommand {
    /// A freshly rebuilt payload; the worker's dispatch policy decides
    /// whether it goes out.
    Forward { payload: SteerPayload },
    /// Explicit user-triggered send of the payload built at action time.
    SendNow { payload: SteerPayload },
    SetAutoSend(bool),
    Shutdown,
}
