use rand::Rng;

/// Draws `shots` independent measurement outcomes from the outcome
/// distribution. Returned counts are indexed like the statevector
/// amplitudes and always sum to `shots`.
pub fn sample_counts<R: Rng + ?Sized>(probs: &[f64; 4], shots: u32, rng: &mut R) -> [u64; 4] {
    let mut counts = [0u64; 4];
    for _ in 0..shots {
        let draw: f64 = rng.gen();
        let mut cumulative = 0.0;
        let mut outcome = probs.len() - 1;
        for (index, p) in probs.iter().enumerate() {
            cumulative += p;
            if draw < cumulative {
                outcome = index;
                break;
            }
        }
        counts[outcome] += 1;
    }
    counts
}

/// Outcome key for an amplitude index, qubit 1 first (`"10"` means qubit 1
/// measured 1, qubit 0 measured 0).
pub fn outcome_key(index: usize) -> String {
    format!("{:02b}", index & 0b11)
}
