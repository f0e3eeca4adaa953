//! Command orchestration helpers from UI actions to the backend command
//! queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::StatusBanner;

/// Queues a command for the worker. Returns whether it was accepted so the
/// caller can roll back optimistic state; failures surface in the banner.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    banner: &mut Option<StatusBanner>,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::SubmitContact { .. } => "submit_contact",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *banner = Some(StatusBanner::error(
                "The submission queue is full; please retry",
            ));
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *banner = Some(StatusBanner::error(
                "The delivery worker is not running (possible startup failure); restart the app and retry",
            ));
            false
        }
    }
}
