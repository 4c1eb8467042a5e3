//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::SimulationClient;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::WorkerStartupFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::WorkerReady);
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::RunSimulation {
                        request_id,
                        server_url,
                        bell_state,
                        shots,
                    } => {
                        let client = SimulationClient::new(server_url);
                        match client.run_simulation(bell_state, shots).await {
                            Ok(outcome) => {
                                let _ = ui_tx.try_send(UiEvent::SimulationCompleted {
                                    request_id,
                                    outcome: Box::new(outcome),
                                });
                            }
                            Err(err) => {
                                tracing::warn!(?err, request_id, "simulation request failed");
                                let _ = ui_tx.try_send(UiEvent::SimulationFailed {
                                    request_id,
                                    message: err.to_string(),
                                });
                            }
                        }
                    }
                }
            }
        });
    });
}
