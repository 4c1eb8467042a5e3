use base64::{engine::general_purpose::STANDARD, Engine as _};
use shared::{
    domain::BellState,
    error::{ApiError, ErrorCode},
    protocol::{SimulationResponse, DEFAULT_SHOTS},
};
use sim::{
    bell_circuit, render_bloch, render_circuit, render_histogram, sample_counts, RenderError,
    Statevector,
};

#[derive(Debug, Clone)]
pub struct ApiContext {
    pub max_shots: u32,
}

/// Runs one simulation: parse and validate inputs, evolve the statevector,
/// sample measurements, and render the three artifacts. Rendering is
/// CPU-bound and runs on a blocking task.
pub async fn run_simulation(
    ctx: &ApiContext,
    bell_state: &str,
    shots: Option<u32>,
) -> Result<SimulationResponse, ApiError> {
    let state: BellState = bell_state
        .parse()
        .map_err(|err: shared::domain::UnknownBellState| {
            ApiError::new(ErrorCode::Validation, err.to_string())
        })?;

    let shots = shots.unwrap_or(DEFAULT_SHOTS);
    if shots == 0 {
        return Err(ApiError::new(
            ErrorCode::Validation,
            "shots must be a positive integer",
        ));
    }
    if shots > ctx.max_shots {
        return Err(ApiError::new(
            ErrorCode::Validation,
            format!("shots exceeds the configured cap of {}", ctx.max_shots),
        ));
    }

    tokio::task::spawn_blocking(move || simulate(state, shots))
        .await
        .map_err(|err| ApiError::new(ErrorCode::Internal, err.to_string()))?
        .map_err(|err| ApiError::new(ErrorCode::Internal, err.to_string()))
}

fn simulate(state: BellState, shots: u32) -> Result<SimulationResponse, RenderError> {
    let gates = bell_circuit(state);
    let statevector = Statevector::from_circuit(&gates);
    let counts = sample_counts(
        &statevector.probabilities(),
        shots,
        &mut rand::thread_rng(),
    );

    let circuit_png = render_circuit(&gates)?;
    let bloch_png = render_bloch(&[statevector.bloch_vector(0), statevector.bloch_vector(1)])?;
    let hist_png = render_histogram(&counts, shots)?;

    Ok(SimulationResponse {
        bell_state: state,
        shots,
        bell_label: state.label().to_string(),
        description: state.description().to_string(),
        phase_info: state.phase_info().to_string(),
        statevector: statevector.ket_string(),
        circuit_image: STANDARD.encode(circuit_png),
        bloch_image: STANDARD.encode(bloch_png),
        hist_image: STANDARD.encode(hist_png),
    })
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
