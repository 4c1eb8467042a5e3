use num_complex::Complex64;

use crate::circuit::Gate;

const AMP_EPSILON: f64 = 1e-9;
const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Pure state of a two-qubit register. Amplitude index is little-endian:
/// bit 0 of the index is qubit 0, bit 1 is qubit 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    amps: [Complex64; 4],
}

impl Statevector {
    /// |00⟩.
    pub fn zero() -> Self {
        let mut amps = [Complex64::new(0.0, 0.0); 4];
        amps[0] = Complex64::new(1.0, 0.0);
        Self { amps }
    }

    pub fn from_circuit(gates: &[Gate]) -> Self {
        let mut state = Self::zero();
        for gate in gates {
            state.apply(*gate);
        }
        state
    }

    pub fn amplitudes(&self) -> &[Complex64; 4] {
        &self.amps
    }

    pub fn apply(&mut self, gate: Gate) {
        match gate {
            Gate::H(q) => self.apply_h(q),
            Gate::X(q) => self.apply_x(q),
            Gate::Z(q) => self.apply_z(q),
            Gate::Cx { control, target } => self.apply_cx(control, target),
        }
    }

    fn apply_h(&mut self, qubit: u8) {
        let stride = 1usize << qubit;
        for base in self.pair_bases(qubit) {
            let lo = self.amps[base];
            let hi = self.amps[base + stride];
            self.amps[base] = (lo + hi) * FRAC_1_SQRT_2;
            self.amps[base + stride] = (lo - hi) * FRAC_1_SQRT_2;
        }
    }

    fn apply_x(&mut self, qubit: u8) {
        let stride = 1usize << qubit;
        for base in self.pair_bases(qubit) {
            self.amps.swap(base, base + stride);
        }
    }

    fn apply_z(&mut self, qubit: u8) {
        let stride = 1usize << qubit;
        for index in 0..self.amps.len() {
            if index & stride != 0 {
                self.amps[index] = -self.amps[index];
            }
        }
    }

    fn apply_cx(&mut self, control: u8, target: u8) {
        let control_bit = 1usize << control;
        let target_bit = 1usize << target;
        for index in 0..self.amps.len() {
            if index & control_bit != 0 && index & target_bit == 0 {
                self.amps.swap(index, index | target_bit);
            }
        }
    }

    /// Indices whose `qubit` bit is zero, i.e. the low member of each
    /// amplitude pair a single-qubit gate acts on.
    fn pair_bases(&self, qubit: u8) -> impl Iterator<Item = usize> {
        let stride = 1usize << qubit;
        (0..4usize).filter(move |index| index & stride == 0)
    }

    pub fn probabilities(&self) -> [f64; 4] {
        let mut probs = [0.0f64; 4];
        for (slot, amp) in probs.iter_mut().zip(self.amps.iter()) {
            *slot = amp.norm_sqr();
        }
        probs
    }

    /// Bloch vector (x, y, z) of one qubit's reduced density matrix. For the
    /// Bell states this is the zero vector; kept general for other circuits.
    pub fn bloch_vector(&self, qubit: u8) -> [f64; 3] {
        let mut rho01 = Complex64::new(0.0, 0.0);
        let mut pop0 = 0.0f64;
        let mut pop1 = 0.0f64;
        let stride = 1usize << qubit;
        for base in self.pair_bases(qubit) {
            let lo = self.amps[base];
            let hi = self.amps[base + stride];
            rho01 += lo * hi.conj();
            pop0 += lo.norm_sqr();
            pop1 += hi.norm_sqr();
        }
        [2.0 * rho01.re, -2.0 * rho01.im, pop0 - pop1]
    }

    /// Human-readable ket expansion, e.g. `0.707|00⟩ + 0.707|11⟩`. Basis
    /// labels are written qubit-1 first, matching the histogram outcome keys.
    pub fn ket_string(&self) -> String {
        let mut out = String::new();
        for (index, amp) in self.amps.iter().enumerate() {
            if amp.norm() < AMP_EPSILON {
                continue;
            }
            let real_only = amp.im.abs() < AMP_EPSILON;
            let negative = real_only && amp.re < 0.0;
            if out.is_empty() {
                if negative {
                    out.push('−');
                }
            } else {
                out.push_str(if negative { " − " } else { " + " });
            }
            let coeff = if real_only {
                format!("{:.3}", amp.re.abs())
            } else {
                format!("({:+.3}{:+.3}i)", amp.re, amp.im)
            };
            out.push_str(&coeff);
            out.push_str(&format!("|{:02b}⟩", index));
        }
        if out.is_empty() {
            out.push_str("0");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::bell_circuit;
    use shared::domain::BellState;

    fn amp(state: &Statevector, index: usize) -> Complex64 {
        state.amplitudes()[index]
    }

    #[test]
    fn phi_plus_superposes_00_and_11() {
        let state = Statevector::from_circuit(&bell_circuit(BellState::PhiPlus));
        assert!((amp(&state, 0).re - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((amp(&state, 3).re - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!(amp(&state, 1).norm() < 1e-12);
        assert!(amp(&state, 2).norm() < 1e-12);
    }

    #[test]
    fn phi_minus_carries_a_relative_phase() {
        let state = Statevector::from_circuit(&bell_circuit(BellState::PhiMinus));
        assert!((amp(&state, 0).re - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((amp(&state, 3).re + FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn psi_states_occupy_the_anti_correlated_basis() {
        for state_kind in [BellState::PsiPlus, BellState::PsiMinus] {
            let state = Statevector::from_circuit(&bell_circuit(state_kind));
            assert!(amp(&state, 0).norm() < 1e-12);
            assert!(amp(&state, 3).norm() < 1e-12);
            assert!((amp(&state, 1).norm() - FRAC_1_SQRT_2).abs() < 1e-12);
            assert!((amp(&state, 2).norm() - FRAC_1_SQRT_2).abs() < 1e-12);
        }
    }

    #[test]
    fn probabilities_sum_to_one() {
        for state_kind in BellState::ALL {
            let state = Statevector::from_circuit(&bell_circuit(state_kind));
            let total: f64 = state.probabilities().iter().sum();
            assert!((total - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn bell_states_have_maximally_mixed_single_qubit_reductions() {
        for state_kind in BellState::ALL {
            let state = Statevector::from_circuit(&bell_circuit(state_kind));
            for qubit in [0u8, 1u8] {
                let [x, y, z] = state.bloch_vector(qubit);
                assert!(x.abs() < 1e-12 && y.abs() < 1e-12 && z.abs() < 1e-12);
            }
        }
    }

    #[test]
    fn plus_x_state_points_along_x() {
        let mut state = Statevector::zero();
        state.apply(Gate::H(0));
        let [x, y, z] = state.bloch_vector(0);
        assert!((x - 1.0).abs() < 1e-12);
        assert!(y.abs() < 1e-12 && z.abs() < 1e-12);
    }

    #[test]
    fn ket_string_formats_signs_and_basis_labels() {
        let phi_plus = Statevector::from_circuit(&bell_circuit(BellState::PhiPlus));
        assert_eq!(phi_plus.ket_string(), "0.707|00⟩ + 0.707|11⟩");

        let phi_minus = Statevector::from_circuit(&bell_circuit(BellState::PhiMinus));
        assert_eq!(phi_minus.ket_string(), "0.707|00⟩ − 0.707|11⟩");

        let psi_plus = Statevector::from_circuit(&bell_circuit(BellState::PsiPlus));
        assert_eq!(psi_plus.ket_string(), "0.707|01⟩ + 0.707|10⟩");
    }
}
