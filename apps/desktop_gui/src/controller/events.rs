//! Events flowing from the backend worker to the UI thread.

use client_core::SimulationOutcome;

pub enum UiEvent {
    WorkerReady,
    WorkerStartupFailed(String),
    SimulationCompleted {
        request_id: u64,
        outcome: Box<SimulationOutcome>,
    },
    SimulationFailed {
        request_id: u64,
        message: String,
    },
}
