//! Core steering pipeline: parameter store, payload builder, simulated
//! channel, dispatch policy, and the preview mapping. Everything here is
//! synchronous and single-owner; determinism in tests comes from the
//! injected clock and RNG rather than real timers.

pub mod channel;
pub mod dispatcher;
pub mod params;
pub mod payload;
pub mod preview;

pub use channel::{
    ChannelEvent, ChannelState, Clock, ManualClock, SimulatedChannel, SteerTransport, SystemClock,
    ACK_PREFIX, DEFAULT_CONNECT_DELAY_MS,
};
pub use dispatcher::Dispatcher;
pub use params::ParameterStore;
pub use payload::build_payload;
pub use preview::{preview_frame, PreviewFrame};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod lib_tests;

#[cfg(test)]
#[path = "tests/channel_tests.rs"]
mod channel_tests;
