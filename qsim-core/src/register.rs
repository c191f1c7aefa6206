//! n-qubit register backed by a dense amplitude vector

use std::fmt;

use num_complex::Complex64;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{QuantumError, QuantumResult};
use crate::ket;
use crate::MAX_QUBITS;

/// Tolerance used when checking `Σ|aᵢ|² = 1`
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Quantum register of `n` qubits.
///
/// `state[i]` is the amplitude of the basis state whose bit string, read with
/// qubit 0 as the most significant bit, equals `i`. The vector always has
/// exactly `2^n` entries and unit norm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegisterData", into = "RegisterData")]
pub struct Register {
    num_qubits: usize,
    state: Vec<Complex64>,
}

/// Wire form; deserialization goes back through [`Register::from_amplitudes`].
#[derive(Serialize, Deserialize)]
struct RegisterData {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl TryFrom<RegisterData> for Register {
    type Error = QuantumError;

    fn try_from(data: RegisterData) -> QuantumResult<Self> {
        Register::from_amplitudes(data.num_qubits, data.amplitudes)
    }
}

impl From<Register> for RegisterData {
    fn from(reg: Register) -> Self {
        Self {
            num_qubits: reg.num_qubits,
            amplitudes: reg.state,
        }
    }
}

fn dimension(num_qubits: usize) -> QuantumResult<usize> {
    if num_qubits == 0 || num_qubits > MAX_QUBITS {
        return Err(QuantumError::InvalidQubitCount(num_qubits));
    }
    Ok(1usize << num_qubits)
}

fn ground_state(dim: usize) -> Vec<Complex64> {
    let mut state = vec![Complex64::new(0.0, 0.0); dim];
    state[0] = Complex64::new(1.0, 0.0);
    state
}

impl Register {
    /// Ground state `|0…0⟩`.
    pub fn new(num_qubits: usize) -> QuantumResult<Self> {
        let dim = dimension(num_qubits)?;
        Ok(Self {
            num_qubits,
            state: ground_state(dim),
        })
    }

    /// Builds a register from caller-supplied amplitudes, normalising them.
    ///
    /// An all-zero vector is replaced by the ground state.
    pub fn from_amplitudes(
        num_qubits: usize,
        amplitudes: impl Into<Vec<Complex64>>,
    ) -> QuantumResult<Self> {
        let dim = dimension(num_qubits)?;
        let state = amplitudes.into();

        if state.len() != dim {
            return Err(QuantumError::DimensionMismatch {
                expected: dim,
                actual: state.len(),
            });
        }
        Self::from_raw(num_qubits, state)
    }

    /// Computational basis state `|index⟩`.
    pub fn basis(num_qubits: usize, index: usize) -> QuantumResult<Self> {
        let dim = dimension(num_qubits)?;
        if index >= dim {
            return Err(QuantumError::BasisOutOfRange { index, num_qubits });
        }
        let mut state = vec![Complex64::new(0.0, 0.0); dim];
        state[index] = Complex64::new(1.0, 0.0);
        Ok(Self { num_qubits, state })
    }

    /// Wraps an already-sized vector and renormalises it. Length is the caller's
    /// responsibility.
    ///
    /// Fails with [`QuantumError::NonFiniteAmplitude`] on the first NaN or
    /// infinite component.
    pub(crate) fn from_raw(num_qubits: usize, mut state: Vec<Complex64>) -> QuantumResult<Self> {
        debug_assert_eq!(state.len(), 1usize << num_qubits);
        if let Some(index) = state.iter().position(|a| !a.is_finite()) {
            return Err(QuantumError::NonFiniteAmplitude { index });
        }
        normalize(&mut state);
        Ok(Self { num_qubits, state })
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Length of the amplitude vector (`2^n`).
    pub fn dim(&self) -> usize {
        self.state.len()
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.state
    }

    /// `Σ|aᵢ|²`; equal to 1 within [`NORM_TOLERANCE`] at rest.
    pub fn norm_sqr(&self) -> f64 {
        self.state.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Born-rule distribution in index order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.iter().map(|a| a.norm_sqr()).collect()
    }

    pub fn probability(&self, index: usize) -> Option<f64> {
        self.state.get(index).map(|a| a.norm_sqr())
    }

    /// `[P(qubit = 0), P(qubit = 1)]`
    pub fn marginal(&self, qubit: usize) -> QuantumResult<[f64; 2]> {
        if qubit >= self.num_qubits {
            return Err(QuantumError::TargetOutOfRange {
                target: qubit,
                num_qubits: self.num_qubits,
            });
        }
        let shift = self.num_qubits - 1 - qubit;
        let p1: f64 = self
            .state
            .iter()
            .enumerate()
            .filter(|(i, _)| (i >> shift) & 1 == 1)
            .map(|(_, a)| a.norm_sqr())
            .sum();
        Ok([self.norm_sqr() - p1, p1])
    }

    /// Measures every qubit at once, collapsing the register.
    ///
    /// Draws one value uniform on `[0, 1)` from `rng`; see [`Register::collapse_with`].
    pub fn measure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Measurement {
        let r: f64 = rng.gen_range(0.0..1.0);
        self.collapse_with(r)
    }

    /// Collapses the register using a pre-drawn uniform value `r ∈ [0, 1)`.
    ///
    /// Picks the smallest index with non-zero probability whose cumulative
    /// probability reaches `r`. If rounding leaves `r` above the final
    /// cumulative value, the last index with non-zero probability wins.
    pub fn collapse_with(&mut self, r: f64) -> Measurement {
        let mut cumulative = 0.0;
        let mut selected = None;
        let mut last_possible = 0;

        for (i, amp) in self.state.iter().enumerate() {
            let p = amp.norm_sqr();
            if p == 0.0 {
                continue;
            }
            cumulative += p;
            last_possible = i;
            if cumulative >= r {
                selected = Some(i);
                break;
            }
        }

        let index = selected.unwrap_or(last_possible);
        let probability = self.state[index].norm_sqr();

        self.state.fill(Complex64::new(0.0, 0.0));
        self.state[index] = Complex64::new(1.0, 0.0);

        tracing::trace!(index, probability, "register collapsed");

        Measurement {
            index,
            num_qubits: self.num_qubits,
            probability,
        }
    }
}

/// Divides by `√Σ|aᵢ|²`; only an all-zero vector becomes `|0…0⟩`.
///
/// Components are first divided by the largest modulus so the sum of squares
/// stays in range for very large or very small finite input.
fn normalize(state: &mut [Complex64]) {
    let largest = state.iter().map(|a| a.norm()).fold(0.0, f64::max);
    if largest == 0.0 {
        state.fill(Complex64::new(0.0, 0.0));
        state[0] = Complex64::new(1.0, 0.0);
        return;
    }

    for a in state.iter_mut() {
        *a /= largest;
    }
    let scale = 1.0 / state.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
    for a in state.iter_mut() {
        *a *= scale;
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a) in self.state.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}: {:.6} {:+.6}i",
                ket::index_to_ket(i, self.num_qubits),
                a.re,
                a.im
            )?;
        }
        Ok(())
    }
}

/// Outcome of a full-register measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Basis index the register collapsed to
    pub index: usize,
    pub num_qubits: usize,
    /// Probability of this outcome before the collapse
    pub probability: f64,
}

impl Measurement {
    /// `n`-character bit string, qubit 0 first.
    pub fn bits(&self) -> String {
        ket::index_to_bits(self.index, self.num_qubits)
    }

    /// Ket form, e.g. `|01⟩`.
    pub fn ket(&self) -> String {
        ket::index_to_ket(self.index, self.num_qubits)
    }

    /// Value read on one qubit.
    pub fn bit(&self, qubit: usize) -> Option<bool> {
        (qubit < self.num_qubits).then(|| (self.index >> (self.num_qubits - 1 - qubit)) & 1 == 1)
    }

    /// Number of qubits that read `1`.
    pub fn ones(&self) -> u32 {
        self.index.count_ones()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ket())
    }
}
