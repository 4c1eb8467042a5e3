use serde::{Deserialize, Serialize};

use crate::domain::BellState;

pub const DEFAULT_SHOTS: u32 = 1024;
pub const MAX_SHOTS: u32 = 1_000_000;

pub fn run_simulation_route() -> &'static str {
    "/run_simulation"
}

/// Query parameters of the simulation request. Constructed fresh per
/// invocation; `shots` falls back to [`DEFAULT_SHOTS`] when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationQuery {
    pub bell_state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
}

/// Response body of a successful simulation run. The three image fields
/// carry base64-encoded PNG bytes; `statevector` is the display string the
/// client shows verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub bell_state: BellState,
    pub shots: u32,
    pub bell_label: String,
    pub description: String,
    pub phase_info: String,
    pub statevector: String,
    pub circuit_image: String,
    pub bloch_image: String,
    pub hist_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_the_documented_field_names() {
        let response = SimulationResponse {
            bell_state: BellState::PhiPlus,
            shots: 1024,
            bell_label: "|Φ⁺⟩ = (|00⟩ + |11⟩)/√2".to_string(),
            description: String::new(),
            phase_info: String::new(),
            statevector: "0.707|00⟩ + 0.707|11⟩".to_string(),
            circuit_image: "AAAA".to_string(),
            bloch_image: "BBBB".to_string(),
            hist_image: "CCCC".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["bell_state"], "bell_phi_plus");
        assert_eq!(value["circuit_image"], "AAAA");
        assert_eq!(value["bloch_image"], "BBBB");
        assert_eq!(value["hist_image"], "CCCC");
        assert_eq!(value["statevector"], "0.707|00⟩ + 0.707|11⟩");
    }

    #[test]
    fn query_omits_missing_shots() {
        let query = SimulationQuery {
            bell_state: "bell_phi_plus".to_string(),
            shots: None,
        };
        let value = serde_json::to_value(&query).unwrap();
        assert!(value.get("shots").is_none());
    }
}
