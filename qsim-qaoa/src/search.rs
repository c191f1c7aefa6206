//! Brute-force scan of the (γ, β) grid

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::error::QaoaResult;
use crate::estimator::estimate_expectation;
use crate::problem::{Objective, Problem};

/// Best grid point found by a scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub gamma: f64,
    pub beta: f64,
    /// Estimated expectation at (`gamma`, `beta`)
    pub value: f64,
    pub objective: Objective,
    /// Grid points evaluated
    pub evaluations: usize,
}

/// Fixed-step grid search.
///
/// γ is the outer axis and β the inner one; the first point reaching the best
/// value is kept.
#[derive(Debug, Clone)]
pub struct GridSearch {
    config: SearchConfig,
}

impl GridSearch {
    pub fn new(config: SearchConfig) -> QaoaResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn run<P, R>(&self, problem: &P, rng: &mut R) -> QaoaResult<SearchOutcome>
    where
        P: Problem + ?Sized,
        R: Rng + ?Sized,
    {
        let objective = problem.objective();
        let betas = self.config.beta_points();

        let mut best = SearchOutcome {
            gamma: 0.0,
            beta: 0.0,
            value: objective.worst(),
            objective,
            evaluations: 0,
        };

        for gamma in self.config.gamma_points() {
            for &beta in &betas {
                let value = estimate_expectation(problem, gamma, beta, self.config.shots, rng)?;
                best.evaluations += 1;
                tracing::debug!(gamma, beta, value, "grid point evaluated");

                if objective.is_better(value, best.value) {
                    best.gamma = gamma;
                    best.beta = beta;
                    best.value = value;
                }
            }
        }

        tracing::info!(
            problem = problem.name(),
            gamma = best.gamma,
            beta = best.beta,
            value = best.value,
            evaluations = best.evaluations,
            "grid search finished"
        );

        Ok(best)
    }
}
