//! Cost models scanned by the grid search
//!
//! Each problem owns its ansatz (which gates, at which angles) and a score
//! for a single measured outcome. The two bundled models do not share a
//! scale or a direction: one is minimised, the other maximised.

use std::fmt;

use qsim_core::{Circuit, Gate, Measurement};
use serde::{Deserialize, Serialize};

use crate::error::QaoaResult;

/// Direction of optimisation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Minimize,
    Maximize,
}

impl Objective {
    /// Strict comparison; on ties the incumbent is kept.
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Self::Minimize => candidate < incumbent,
            Self::Maximize => candidate > incumbent,
        }
    }

    /// Starting incumbent that any finite value beats.
    pub fn worst(self) -> f64 {
        match self {
            Self::Minimize => f64::INFINITY,
            Self::Maximize => f64::NEG_INFINITY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minimize => "min",
            Self::Maximize => "max",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A QAOA-style problem: parametrised circuit plus per-shot score.
pub trait Problem: Send + Sync {
    fn name(&self) -> &'static str;

    fn num_qubits(&self) -> usize;

    fn objective(&self) -> Objective;

    /// Ansatz prepared from `|0…0⟩` for angles (γ, β).
    fn circuit(&self, gamma: f64, beta: f64) -> QaoaResult<Circuit>;

    /// Score of one measured outcome; the estimator averages these.
    fn score(&self, outcome: &Measurement) -> f64;

    /// Human-readable reading of an outcome.
    fn describe(&self, outcome: &Measurement) -> String {
        outcome.ket()
    }
}

/// One bin, one item, one qubit: `|0⟩` empty, `|1⟩` filled.
///
/// Cost Hamiltonian `H_C = -2.5·I - 7.5·Z`, realised as `Rz(15γ)`; mixer `Rx(2β)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleItemBin;

impl SingleItemBin {
    /// Energy of an empty bin
    pub const EMPTY_ENERGY: f64 = 100.0;
    /// Energy of a filled bin
    pub const FILLED_ENERGY: f64 = -5.0;
}

impl Problem for SingleItemBin {
    fn name(&self) -> &'static str {
        "1x1 bin packing"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn objective(&self) -> Objective {
        Objective::Minimize
    }

    fn circuit(&self, gamma: f64, beta: f64) -> QaoaResult<Circuit> {
        Ok(Circuit::new(1)
            .then(Gate::h(), 0)?
            .then(Gate::rz(15.0 * gamma), 0)?
            .then(Gate::rx(2.0 * beta), 0)?)
    }

    fn score(&self, outcome: &Measurement) -> f64 {
        if outcome.index == 0 {
            Self::EMPTY_ENERGY
        } else {
            Self::FILLED_ENERGY
        }
    }

    fn describe(&self, outcome: &Measurement) -> String {
        let label = if outcome.index == 0 { "empty (0)" } else { "filled (1)" };
        label.to_string()
    }
}

/// Two items, one qubit each; the score is the number of packed items.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairBin;

impl Problem for PairBin {
    fn name(&self) -> &'static str {
        "2x1 bin packing"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn circuit(&self, gamma: f64, beta: f64) -> QaoaResult<Circuit> {
        Ok(Circuit::new(2)
            .on_all(Gate::h())
            .on_all(Gate::rz(2.0 * gamma))
            .on_all(Gate::rx(2.0 * beta)))
    }

    fn score(&self, outcome: &Measurement) -> f64 {
        f64::from(outcome.ones())
    }
}
