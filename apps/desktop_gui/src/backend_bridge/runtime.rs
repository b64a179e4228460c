//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{execute_command, HttpBookStore, StoreCommand};
use crossbeam_channel::{Receiver, Sender};

use crate::controller::events::UiEvent;

/// Spawns the backend worker. Each command runs as its own task, so calls may
/// overlap; ordering is resolved by the catalog state machine.
pub fn launch(store: HttpBookStore, cmd_rx: Receiver<StoreCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.send(UiEvent::BackendFailed(format!(
                    "failed to build runtime: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let store = Arc::new(store);
            let _ = ui_tx.send(UiEvent::Info(format!(
                "Backend worker ready ({})",
                store.api_base_url()
            )));

            while let Ok(command) = cmd_rx.recv() {
                let store = Arc::clone(&store);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = execute_command(store.as_ref(), command).await;
                    if ui_tx.send(UiEvent::Catalog(event)).is_err() {
                        tracing::debug!("ui closed; dropping store completion");
                    }
                });
            }
            tracing::debug!("command queue closed; backend worker exiting");
        });
    });
}
