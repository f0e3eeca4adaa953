//! Runtime bridge between the UI command queue and the form-relay client.
//! The worker owns its tokio runtime; the UI thread never blocks on the
//! network.

use std::thread;

use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use contact::delivery::FormRelay;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Delivery worker starting...".to_string()));

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed {
                    detail: format!("failed to build the worker runtime: {err}"),
                });
                tracing::error!("failed to build the delivery worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let relay = match FormRelay::new() {
                Ok(relay) => relay,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::WorkerFailed {
                        detail: format!("failed to build the HTTP client: {err}"),
                    });
                    tracing::error!("failed to build the form relay client: {err}");
                    return;
                }
            };

            let _ = ui_tx.try_send(UiEvent::Info("Delivery worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitContact { endpoint, message } => {
                        match relay.deliver(&endpoint, &message).await {
                            Ok(()) => {
                                tracing::info!("contact submission delivered");
                                let _ = ui_tx.try_send(UiEvent::ContactDelivered);
                            }
                            Err(err) => {
                                tracing::warn!("contact delivery failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::ContactFailed {
                                    detail: err.to_string(),
                                });
                            }
                        }
                    }
                }
            }

            tracing::info!("delivery worker shutting down; command queue closed");
        });
    });
}
