//! Backend commands queued from UI to backend worker.

use shared::domain::BellState;

pub enum BackendCommand {
    RunSimulation {
        request_id: u64,
        server_url: String,
        bell_state: BellState,
        shots: u32,
    },
}
