//! Channel worker thread: owns the simulated channel session and the
//! dispatch policy, services the UI command queue, and pumps channel
//! events back to the UI.

use std::thread;
use std::time::Duration;

use client_core::{ChannelEvent, Dispatcher, SimulatedChannel, SteerTransport, SystemClock};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use shared::error::TransportError;

use crate::backend_bridge::commands::ChannelCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Poll granularity for the connect-delay transition while the command
/// queue is idle.
const EVENT_PUMP_INTERVAL: Duration = Duration::from_millis(16);

pub fn launch(
    cmd_rx: Receiver<ChannelCommand>,
    ui_tx: Sender<UiEvent>,
    connect_delay_ms: i64,
    auto_send: bool,
) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Connecting to inference channel...".to_string()));
        let mut channel = SimulatedChannel::connect(SystemClock, connect_delay_ms);
        let mut dispatcher = Dispatcher::new(auto_send);

        loop {
            match cmd_rx.recv_timeout(EVENT_PUMP_INTERVAL) {
                Ok(ChannelCommand::Forward { payload }) => {
                    match dispatcher.payload_changed(&mut channel, &payload) {
                        Ok(true) => {
                            let _ = ui_tx.try_send(UiEvent::PayloadSent(payload.to_display()));
                        }
                        Ok(false) => {}
                        Err(err) => report_send_error(&ui_tx, err),
                    }
                }
                Ok(ChannelCommand::SendNow { payload }) => {
                    match dispatcher.send_now(&mut channel, &payload) {
                        Ok(()) => {
                            let _ = ui_tx.try_send(UiEvent::PayloadSent(payload.to_display()));
                        }
                        Err(err) => report_send_error(&ui_tx, err),
                    }
                }
                Ok(ChannelCommand::SetAutoSend(on)) => dispatcher.set_auto_send(on),
                Ok(ChannelCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {}
            }
            pump_channel_events(&mut channel, &ui_tx);
        }

        // UI teardown closes the session; drain the final Closed event.
        channel.close();
        pump_channel_events(&mut channel, &ui_tx);
        tracing::info!("channel worker stopped");
    });
}

fn pump_channel_events(channel: &mut dyn SteerTransport, ui_tx: &Sender<UiEvent>) {
    while let Some(event) = channel.poll_event() {
        let ui_event = match event {
            ChannelEvent::Opened => UiEvent::ChannelOpened,
            ChannelEvent::MessageReceived(ack) => UiEvent::AckReceived(ack),
            ChannelEvent::Closed => UiEvent::ChannelClosed,
        };
        let _ = ui_tx.try_send(ui_event);
    }
}

fn report_send_error(ui_tx: &Sender<UiEvent>, err: TransportError) {
    tracing::warn!(error = %err, "transport rejected payload");
    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_transport(
        UiErrorContext::Send,
        &err,
    )));
}
