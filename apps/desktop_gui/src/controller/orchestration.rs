//! Command orchestration helpers from UI actions to the channel worker
//! queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::ChannelCommand;

pub fn dispatch_channel_command(
    cmd_tx: &Sender<ChannelCommand>,
    cmd: ChannelCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        ChannelCommand::Forward { .. } => "forward_payload",
        ChannelCommand::SendNow { .. } => "send_now",
        ChannelCommand::SetAutoSend(_) => "set_auto_send",
        ChannelCommand::Shutdown => "shutdown",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->channel command"),
        Err(TrySendError::Full(_)) => {
            *status = "Channel command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Channel worker disconnected; restart the app".to_string();
        }
    }
}
