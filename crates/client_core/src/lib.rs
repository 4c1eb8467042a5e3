//! HTTP client for the Bell-state simulation backend. Issues the single
//! retrieval-style request the result view needs and decodes the returned
//! artifacts into owned bytes.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use shared::{
    domain::{ArtifactKind, BellState},
    protocol::{run_simulation_route, SimulationResponse},
};
use thiserror::Error;

/// Failure of the trigger action. Non-success status, transport failure,
/// and malformed payloads are all surfaced to the user as the same generic
/// message; the variant detail is kept for logs.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Simulation failed.")]
    Status(StatusCode),
    #[error("Simulation failed.")]
    Transport(#[source] reqwest::Error),
    #[error("Simulation failed.")]
    MalformedResponse(#[source] reqwest::Error),
    #[error("Simulation failed.")]
    BadImagePayload(#[source] base64::DecodeError),
}

/// Decoded PNG bytes of the three artifacts, keyed by [`ArtifactKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationArtifacts {
    pub circuit_png: Vec<u8>,
    pub bloch_png: Vec<u8>,
    pub histogram_png: Vec<u8>,
}

impl SimulationArtifacts {
    pub fn bytes(&self, kind: ArtifactKind) -> &[u8] {
        match kind {
            ArtifactKind::Circuit => &self.circuit_png,
            ArtifactKind::Bloch => &self.bloch_png,
            ArtifactKind::Histogram => &self.histogram_png,
        }
    }
}

/// Everything one successful run produces. Replaced wholesale on each
/// subsequent success; the controller holds at most one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub bell_state: BellState,
    pub shots: u32,
    pub bell_label: String,
    pub description: String,
    pub phase_info: String,
    pub statevector: String,
    pub artifacts: SimulationArtifacts,
}

pub struct SimulationClient {
    http: Client,
    server_url: String,
}

impl SimulationClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            server_url,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Issues exactly one GET carrying the selected state and shot count as
    /// query parameters.
    pub async fn run_simulation(
        &self,
        bell_state: BellState,
        shots: u32,
    ) -> Result<SimulationOutcome, ClientError> {
        tracing::debug!(%bell_state, shots, "requesting simulation");
        let response = self
            .http
            .get(format!("{}{}", self.server_url, run_simulation_route()))
            .query(&[
                ("bell_state", bell_state.wire_id().to_string()),
                ("shots", shots.to_string()),
            ])
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "simulation request rejected");
            return Err(ClientError::Status(status));
        }

        let body: SimulationResponse = response
            .json()
            .await
            .map_err(ClientError::MalformedResponse)?;

        let artifacts = SimulationArtifacts {
            circuit_png: decode_image(&body.circuit_image)?,
            bloch_png: decode_image(&body.bloch_image)?,
            histogram_png: decode_image(&body.hist_image)?,
        };

        Ok(SimulationOutcome {
            bell_state: body.bell_state,
            shots: body.shots,
            bell_label: body.bell_label,
            description: body.description,
            phase_info: body.phase_info,
            statevector: body.statevector,
            artifacts,
        })
    }
}

/// Accepts both a bare base64 payload and a `data:` URI carrying one.
fn decode_image(payload: &str) -> Result<Vec<u8>, ClientError> {
    let b64 = payload
        .rsplit_once("base64,")
        .map(|(_, tail)| tail)
        .unwrap_or(payload);
    STANDARD
        .decode(b64.trim())
        .map_err(ClientError::BadImagePayload)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
