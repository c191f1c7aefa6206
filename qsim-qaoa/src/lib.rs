//! # 🎯 qsim-qaoa — Shot-Based QAOA Parameter Sweep
//!
//! Drives [`qsim_core`] the way a minimal QAOA loop does: for every (γ, β) on
//! a fixed grid, prepare the ansatz, measure it `shots` times, average the
//! per-shot score, and keep the best grid point.
//!
//! ## Computational Complexity
//!
//! **Grid search — O(G × B × (C + S × 2^n)):**
//! - G × B grid points (32 × 16 with the defaults)
//! - C gate applications to prepare the ansatz, once per point
//! - S shots, each an O(2^n) copy and measurement
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          GridSearch (SearchConfig)              │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  estimate_expectation(γ, β, shots)        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Problem: circuit(γ, β) + score(outcome)  │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsim_qaoa::{GridSearch, PairBin, SearchConfig};
//! use rand::SeedableRng;
//!
//! let config = SearchConfig { step: 0.5, shots: 50, ..Default::default() };
//! let search = GridSearch::new(config)?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let best = search.run(&PairBin, &mut rng)?;
//! assert!(best.value >= 0.0 && best.value <= 2.0);
//! # Ok::<(), qsim_qaoa::QaoaError>(())
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod problem;
pub mod search;

pub use config::{DEFAULT_SHOTS, DEFAULT_STEP, SearchConfig};
pub use error::{QaoaError, QaoaResult};
pub use estimator::{estimate_expectation, exact_expectation, run_shot};
pub use problem::{Objective, PairBin, Problem, SingleItemBin};
pub use search::{GridSearch, SearchOutcome};
