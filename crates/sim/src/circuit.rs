use shared::domain::BellState;

/// Gate on a two-qubit register. Qubit indices are 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    H(u8),
    X(u8),
    Z(u8),
    Cx { control: u8, target: u8 },
}

/// Gate sequence preparing the requested Bell state from |00⟩.
///
/// Every circuit starts with H on qubit 0 followed by CX(0→1), which yields
/// |Φ⁺⟩; the other three states differ by local corrections on qubit 1.
pub fn bell_circuit(state: BellState) -> Vec<Gate> {
    let mut gates = vec![Gate::H(0), Gate::Cx { control: 0, target: 1 }];
    match state {
        BellState::PhiPlus => {}
        BellState::PhiMinus => gates.push(Gate::Z(1)),
        BellState::PsiPlus => gates.push(Gate::X(1)),
        BellState::PsiMinus => {
            gates.push(Gate::X(1));
            gates.push(Gate::Z(1));
        }
    }
    gates
}
