use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four maximally entangled two-qubit basis states offered by the
/// selector. Wire identifiers match the query parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BellState {
    #[serde(rename = "bell_phi_plus")]
    PhiPlus,
    #[serde(rename = "bell_phi_minus")]
    PhiMinus,
    #[serde(rename = "bell_psi_plus")]
    PsiPlus,
    #[serde(rename = "bell_psi_minus")]
    PsiMinus,
}

#[derive(Debug, Error)]
#[error("unknown bell state identifier '{0}'")]
pub struct UnknownBellState(pub String);

impl BellState {
    pub const ALL: [BellState; 4] = [
        BellState::PhiPlus,
        BellState::PhiMinus,
        BellState::PsiPlus,
        BellState::PsiMinus,
    ];

    pub fn wire_id(self) -> &'static str {
        match self {
            BellState::PhiPlus => "bell_phi_plus",
            BellState::PhiMinus => "bell_phi_minus",
            BellState::PsiPlus => "bell_psi_plus",
            BellState::PsiMinus => "bell_psi_minus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BellState::PhiPlus => "|Φ⁺⟩ = (|00⟩ + |11⟩)/√2",
            BellState::PhiMinus => "|Φ⁻⟩ = (|00⟩ − |11⟩)/√2",
            BellState::PsiPlus => "|Ψ⁺⟩ = (|01⟩ + |10⟩)/√2",
            BellState::PsiMinus => "|Ψ⁻⟩ = (|01⟩ − |10⟩)/√2",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BellState::PhiPlus => "Perfect correlation between both qubits in-phase.",
            BellState::PhiMinus => "Phase-shifted correlation between qubits.",
            BellState::PsiPlus => "Qubits are opposite but with equal phase.",
            BellState::PsiMinus => "Opposite qubits with π phase difference.",
        }
    }

    pub fn phase_info(self) -> &'static str {
        match self {
            BellState::PhiPlus => "In-phase superposition across |00⟩ and |11⟩.",
            BellState::PhiMinus => "Relative phase of π between |00⟩ and |11⟩.",
            BellState::PsiPlus => "Anti-correlated but in-phase superposition.",
            BellState::PsiMinus => "Used in teleportation and superdense coding.",
        }
    }
}

impl fmt::Display for BellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_id())
    }
}

impl FromStr for BellState {
    type Err = UnknownBellState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bell_phi_plus" => Ok(BellState::PhiPlus),
            "bell_phi_minus" => Ok(BellState::PhiMinus),
            "bell_psi_plus" => Ok(BellState::PsiPlus),
            "bell_psi_minus" => Ok(BellState::PsiMinus),
            other => Err(UnknownBellState(other.to_string())),
        }
    }
}

/// One of the three rendered outputs of a simulation run. The tag-to-field
/// mapping is fixed here so callers never dispatch on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Circuit,
    Bloch,
    Histogram,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Circuit,
        ArtifactKind::Bloch,
        ArtifactKind::Histogram,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ArtifactKind::Circuit => "circuit",
            ArtifactKind::Bloch => "bloch",
            ArtifactKind::Histogram => "histogram",
        }
    }

    /// Suggested filename for the download action.
    pub fn file_name(self) -> String {
        format!("{}.png", self.key())
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ArtifactKind::Circuit => "Circuit",
            ArtifactKind::Bloch => "Bloch sphere",
            ArtifactKind::Histogram => "Histogram",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_state_wire_ids_round_trip() {
        for state in BellState::ALL {
            assert_eq!(state.wire_id().parse::<BellState>().unwrap(), state);
        }
    }

    #[test]
    fn rejects_unknown_bell_state_identifier() {
        let err = "phi_plus_plus".parse::<BellState>().unwrap_err();
        assert!(err.to_string().contains("phi_plus_plus"));
    }

    #[test]
    fn bell_state_serde_uses_wire_identifiers() {
        let json = serde_json::to_string(&BellState::PhiPlus).unwrap();
        assert_eq!(json, "\"bell_phi_plus\"");
        let back: BellState = serde_json::from_str("\"bell_psi_minus\"").unwrap();
        assert_eq!(back, BellState::PsiMinus);
    }

    #[test]
    fn artifact_download_names_use_key_and_png_extension() {
        assert_eq!(ArtifactKind::Circuit.file_name(), "circuit.png");
        assert_eq!(ArtifactKind::Bloch.file_name(), "bloch.png");
        assert_eq!(ArtifactKind::Histogram.file_name(), "histogram.png");
    }
}
