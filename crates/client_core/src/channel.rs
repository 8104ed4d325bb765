//! Simulated request/response channel with an injectable clock.
//!
//! The simulator stands in for a real transport: it accepts serialized
//! payloads and eventually yields acknowledgment strings. Events are
//! delivered through an explicit queue drained by `poll_event`, so a
//! single-threaded caller can observe lifecycle transitions without
//! callbacks.

use std::collections::VecDeque;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use chrono::Utc;
use shared::error::TransportError;

/// Connect delay of the reference channel, in milliseconds.
pub const DEFAULT_CONNECT_DELAY_MS: i64 = 300;

/// Prefix of every simulated acknowledgment; the suffix is the byte length
/// of the frame that produced it.
pub const ACK_PREFIX: &str = "ack:";

/// Millisecond clock abstraction so tests can advance time deterministically.
pub trait Clock: Send {
    fn now_ms(&self) -> i64;
}

/// Wall-clock time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Hand-advanced clock for tests. Clones share the same underlying instant.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Arc<AtomicI64>);

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self(Arc::new(AtomicI64::new(start_ms)))
    }

    pub fn advance(&self, delta_ms: i64) {
        self.0.fetch_add(delta_ms, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Connecting,
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEvent {
    Opened,
    MessageReceived(String),
    Closed,
}

/// Contract a real transport must honor to replace the simulator: accept a
/// serialized payload, eventually yield an acknowledgment, and report
/// lifecycle transitions through the polled event queue.
pub trait SteerTransport: Send {
    fn state(&self) -> ChannelState;
    fn send(&mut self, frame: &str) -> Result<(), TransportError>;
    fn close(&mut self);
    fn poll_event(&mut self) -> Option<ChannelEvent>;
}

/// Mock channel: opens after a fixed delay, acknowledges every frame with
/// `ack:<byte length>`, and never fails. Sends outside the Open state are
/// dropped silently, matching the reference behavior.
pub struct SimulatedChannel<C: Clock> {
    clock: C,
    state: ChannelState,
    opens_at_ms: i64,
    events: VecDeque<ChannelEvent>,
}

impl<C: Clock> SimulatedChannel<C> {
    pub fn connect(clock: C, connect_delay_ms: i64) -> Self {
        let opens_at_ms = clock.now_ms() + connect_delay_ms;
        tracing::debug!(connect_delay_ms, "simulated channel connecting");
        Self {
            clock,
            state: ChannelState::Connecting,
            opens_at_ms,
            events: VecDeque::new(),
        }
    }

    /// Advance the connect transition if the delay has elapsed. Called on
    /// every send/poll so the caller never has to schedule a timer.
    fn pump(&mut self) {
        if self.state == ChannelState::Connecting && self.clock.now_ms() >= self.opens_at_ms {
            self.state = ChannelState::Open;
            self.events.push_back(ChannelEvent::Opened);
            tracing::info!("simulated channel open");
        }
    }
}

impl<C: Clock> SteerTransport for SimulatedChannel<C> {
    fn state(&self) -> ChannelState {
        self.state
    }

    fn send(&mut self, frame: &str) -> Result<(), TransportError> {
        self.pump();
        match self.state {
            ChannelState::Open => {
                // Synchronous echo keeps acks in send order.
                self.events
                    .push_back(ChannelEvent::MessageReceived(format!(
                        "{ACK_PREFIX}{}",
                        frame.len()
                    )));
                Ok(())
            }
            state => {
                tracing::debug!(?state, "dropping frame, channel not open");
                Ok(())
            }
        }
    }

    fn close(&mut self) {
        if self.state != ChannelState::Closed {
            self.state = ChannelState::Closed;
            self.events.push_back(ChannelEvent::Closed);
            tracing::info!("simulated channel closed");
        }
    }

    fn poll_event(&mut self) -> Option<ChannelEvent> {
        self.pump();
        self.events.pop_front()
    }
}
