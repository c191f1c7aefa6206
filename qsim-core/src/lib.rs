//! # ⚛️ qsim-core — State-Vector Quantum Simulation
//!
//! Dense simulation of small quantum registers: an n-qubit state is a vector
//! of `2^n` complex amplitudes, single-qubit gates are 2×2 unitaries embedded
//! by index pairing, and measurement samples the Born distribution before
//! collapsing the register.
//!
//! ## Computational Complexity
//!
//! **Gate application — O(2^n):**
//! - One pass over the amplitude vector, pairing each index with its
//!   partner that differs only in the target bit
//! - O(2^n) extra space for the new register
//! - The full 2^n × 2^n operator (O(4^n)) is never materialised
//!
//! **Measurement — O(2^n):**
//! - Cumulative scan of `|aᵢ|²` in index order
//! - In-place collapse
//!
//! **Scalability:**
//! - n ≤ 20: ✓ Excellent (≤ 16 MiB per register)
//! - 20 < n ≤ [`MAX_QUBITS`]: △ memory bound
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          Circuit                                │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate (2×2 matrix) × target qubit         │  │
//! │  └───────────────────────────────────────────┘  │
//! │                      │ apply                    │
//! │  ┌───────────────────▼───────────────────────┐  │
//! │  │  Register (2^n amplitudes, unit norm)     │  │
//! │  └───────────────────────────────────────────┘  │
//! │                      │ measure(rng)             │
//! │  ┌───────────────────▼───────────────────────┐  │
//! │  │  Measurement (index, |ket⟩)               │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsim_core::{Gate, Register};
//! use rand::SeedableRng;
//!
//! let reg = Register::new(2)?;
//! let reg = Gate::h().apply_at(&reg, 0)?;
//! let mut reg = Gate::h().apply_at(&reg, 1)?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let outcome = reg.measure(&mut rng);
//! assert_eq!(outcome.ket().chars().count(), 4); // |xy⟩
//! # Ok::<(), qsim_core::QuantumError>(())
//! ```

pub mod circuit;
pub mod error;
pub mod gates;
pub mod ket;
pub mod register;

pub use circuit::{Circuit, Operation};
pub use error::{QuantumError, QuantumResult};
pub use gates::{Gate, GateKind, Matrix2x2, UNITARY_TOLERANCE};
pub use ket::{index_to_bits, index_to_ket, ket_to_index};
pub use register::{Measurement, Register, NORM_TOLERANCE};

/// Re-exported so callers share the amplitude type
pub use num_complex::Complex64;

/// Largest register accepted (`2^26` amplitudes, 1 GiB)
pub const MAX_QUBITS: usize = 26;

#[cfg(test)]
mod tests;
