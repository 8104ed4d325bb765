use crate::channel::{
    ChannelEvent, ChannelState, ManualClock, SimulatedChannel, SteerTransport,
    DEFAULT_CONNECT_DELAY_MS,
};

fn channel() -> (ManualClock, SimulatedChannel<ManualClock>) {
    let clock = ManualClock::new(0);
    let channel = SimulatedChannel::connect(clock.clone(), DEFAULT_CONNECT_DELAY_MS);
    (clock, channel)
}

#[test]
fn opens_only_after_the_connect_delay() {
    let (clock, mut channel) = channel();
    assert_eq!(channel.state(), ChannelState::Connecting);
    assert_eq!(channel.poll_event(), None);

    clock.advance(DEFAULT_CONNECT_DELAY_MS - 1);
    assert_eq!(channel.poll_event(), None);

    clock.advance(1);
    assert_eq!(channel.poll_event(), Some(ChannelEvent::Opened));
    assert_eq!(channel.state(), ChannelState::Open);
    // Opened is raised exactly once.
    assert_eq!(channel.poll_event(), None);
}

#[test]
fn send_before_open_has_no_observable_effect() {
    let (clock, mut channel) = channel();
    channel.send("{\"op\":\"steer\"}").unwrap();
    assert_eq!(channel.poll_event(), None);

    clock.advance(DEFAULT_CONNECT_DELAY_MS);
    // Only the open transition surfaces; the early frame was dropped.
    assert_eq!(channel.poll_event(), Some(ChannelEvent::Opened));
    assert_eq!(channel.poll_event(), None);
}

#[test]
fn acks_carry_the_frame_byte_length_in_send_order() {
    let (clock, mut channel) = channel();
    clock.advance(DEFAULT_CONNECT_DELAY_MS);
    assert_eq!(channel.poll_event(), Some(ChannelEvent::Opened));

    channel.send("abc").unwrap();
    channel.send("abcdefgh").unwrap();

    assert_eq!(
        channel.poll_event(),
        Some(ChannelEvent::MessageReceived("ack:3".to_string()))
    );
    assert_eq!(
        channel.poll_event(),
        Some(ChannelEvent::MessageReceived("ack:8".to_string()))
    );
    assert_eq!(channel.poll_event(), None);
}

#[test]
fn close_is_idempotent_and_raises_a_single_closed_event() {
    let (clock, mut channel) = channel();
    clock.advance(DEFAULT_CONNECT_DELAY_MS);
    assert_eq!(channel.poll_event(), Some(ChannelEvent::Opened));

    channel.close();
    channel.close();

    assert_eq!(channel.poll_event(), Some(ChannelEvent::Closed));
    assert_eq!(channel.poll_event(), None);
    assert_eq!(channel.state(), ChannelState::Closed);
}

#[test]
fn closing_while_connecting_prevents_the_open_transition() {
    let (clock, mut channel) = channel();
    channel.close();
    clock.advance(DEFAULT_CONNECT_DELAY_MS * 2);

    assert_eq!(channel.poll_event(), Some(ChannelEvent::Closed));
    assert_eq!(channel.poll_event(), None);
    assert_eq!(channel.state(), ChannelState::Closed);
}

#[test]
fn sends_after_close_are_silently_dropped() {
    let (clock, mut channel) = channel();
    clock.advance(DEFAULT_CONNECT_DELAY_MS);
    assert_eq!(channel.poll_event(), Some(ChannelEvent::Opened));
    channel.close();
    assert_eq!(channel.poll_event(), Some(ChannelEvent::Closed));

    channel.send("late").unwrap();
    assert_eq!(channel.poll_event(), None);
}
