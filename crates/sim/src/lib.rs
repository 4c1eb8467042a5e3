//! Two-qubit Bell-state simulation core: circuit construction, statevector
//! evolution, measurement sampling, and PNG rendering of the artifacts the
//! result view displays.

pub mod circuit;
pub mod render;
pub mod sampling;
pub mod statevector;

pub use circuit::{bell_circuit, Gate};
pub use render::{render_bloch, render_circuit, render_histogram, RenderError};
pub use sampling::{outcome_key, sample_counts};
pub use statevector::Statevector;
