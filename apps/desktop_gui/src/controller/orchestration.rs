//! Command orchestration helpers from catalog state transitions to the backend queue.

use client_core::StoreCommand;
use crossbeam_channel::{Sender, TrySendError};

/// Queues `commands` for the backend worker and returns the ones that could
/// not be delivered, so their requests can be failed back into the catalog.
pub fn dispatch_store_commands(
    cmd_tx: &Sender<StoreCommand>,
    commands: Vec<StoreCommand>,
    status: &mut String,
) -> Vec<StoreCommand> {
    let mut undelivered = Vec::new();
    for command in commands {
        let request = command.request();
        let op = command.op();
        match cmd_tx.try_send(command) {
            Ok(()) => tracing::debug!(%request, %op, "queued ui->backend command"),
            Err(TrySendError::Full(command)) => {
                tracing::warn!(%request, %op, "backend command queue full; dropping command");
                *status = "UI command queue is full; please retry".to_string();
                undelivered.push(command);
            }
            Err(TrySendError::Disconnected(command)) => {
                tracing::error!(%request, %op, "backend command processor disconnected");
                *status =
                    "Backend command processor disconnected (possible startup/runtime failure)"
                        .to_string();
                undelivered.push(command);
            }
        }
    }
    undelivered
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
