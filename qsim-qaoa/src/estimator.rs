//! Shot-based expectation estimates

use qsim_core::{Measurement, Register};
use rand::Rng;

use crate::error::{QaoaError, QaoaResult};
use crate::problem::Problem;

/// Prepares the ansatz at (γ, β) and measures it once.
pub fn run_shot<P, R>(problem: &P, gamma: f64, beta: f64, rng: &mut R) -> QaoaResult<Measurement>
where
    P: Problem + ?Sized,
    R: Rng + ?Sized,
{
    let mut reg = prepare(problem, gamma, beta)?;
    Ok(reg.measure(rng))
}

/// Mean score over `shots` independent measurements at (γ, β).
///
/// The prepared state does not depend on the shot, so it is built once and
/// each shot measures a fresh copy.
pub fn estimate_expectation<P, R>(
    problem: &P,
    gamma: f64,
    beta: f64,
    shots: usize,
    rng: &mut R,
) -> QaoaResult<f64>
where
    P: Problem + ?Sized,
    R: Rng + ?Sized,
{
    if shots == 0 {
        return Err(QaoaError::ZeroShots);
    }

    let prepared = prepare(problem, gamma, beta)?;
    let total: f64 = (0..shots)
        .map(|_| {
            let mut shot = prepared.clone();
            problem.score(&shot.measure(rng))
        })
        .sum();

    Ok(total / shots as f64)
}

/// Exact `Σ pᵢ · score(i)` from the amplitudes, without sampling.
pub fn exact_expectation<P>(problem: &P, gamma: f64, beta: f64) -> QaoaResult<f64>
where
    P: Problem + ?Sized,
{
    let reg = prepare(problem, gamma, beta)?;
    let n = reg.num_qubits();
    Ok(reg
        .probabilities()
        .into_iter()
        .enumerate()
        .map(|(index, p)| {
            p * problem.score(&Measurement {
                index,
                num_qubits: n,
                probability: p,
            })
        })
        .sum())
}

fn prepare<P: Problem + ?Sized>(problem: &P, gamma: f64, beta: f64) -> QaoaResult<Register> {
    Ok(problem.circuit(gamma, beta)?.run_from_ground()?)
}
