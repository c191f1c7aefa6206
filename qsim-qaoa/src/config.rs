//! Search configuration from `.env` files and environment variables
//!
//! | Variable         | Default | Meaning                          |
//! |------------------|---------|----------------------------------|
//! | `QSIM_GAMMA_MAX` | π       | upper bound of the γ axis        |
//! | `QSIM_BETA_MAX`  | π/2     | upper bound of the β axis        |
//! | `QSIM_STEP`      | 0.1     | grid spacing on both axes        |
//! | `QSIM_SHOTS`     | 1000    | measurements per grid point      |
//! | `QSIM_SEED`      | unset   | RNG seed; entropy when unset     |
//!
//! Missing or unparsable values fall back to the default.

use std::env;
use std::f64::consts::{FRAC_PI_2, PI};
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{QaoaError, QaoaResult};

pub const DEFAULT_STEP: f64 = 0.1;
pub const DEFAULT_SHOTS: usize = 1000;
/// Upper bound on (γ, β) pairs accepted by [`SearchConfig::validate`]
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Slack for the last grid point so `0.1 · 31 ≤ π` style bounds are not lost to rounding
const GRID_EPSILON: f64 = 1e-9;

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

/// Parameters of the (γ, β) grid scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub gamma_max: f64,
    pub beta_max: f64,
    pub step: f64,
    pub shots: usize,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            gamma_max: PI,
            beta_max: FRAC_PI_2,
            step: DEFAULT_STEP,
            shots: DEFAULT_SHOTS,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Reads the `QSIM_*` variables, loading `.env` first.
    pub fn from_env() -> Self {
        ensure_loaded();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SearchConfig::from_env`] with an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            gamma_max: parsed(&lookup, "QSIM_GAMMA_MAX").unwrap_or(defaults.gamma_max),
            beta_max: parsed(&lookup, "QSIM_BETA_MAX").unwrap_or(defaults.beta_max),
            step: parsed(&lookup, "QSIM_STEP").unwrap_or(defaults.step),
            shots: parsed(&lookup, "QSIM_SHOTS").unwrap_or(defaults.shots),
            seed: parsed(&lookup, "QSIM_SEED"),
        }
    }

    pub fn validate(&self) -> QaoaResult<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(QaoaError::InvalidConfig(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        for (name, max) in [("gamma_max", self.gamma_max), ("beta_max", self.beta_max)] {
            if !(max.is_finite() && max >= 0.0) {
                return Err(QaoaError::InvalidConfig(format!(
                    "{name} must be non-negative, got {max}"
                )));
            }
        }
        let size = axis_len(self.gamma_max, self.step)
            .zip(axis_len(self.beta_max, self.step))
            .and_then(|(g, b)| g.checked_mul(b))
            .filter(|&size| size <= MAX_GRID_POINTS);
        if size.is_none() {
            return Err(QaoaError::InvalidConfig(format!(
                "step {} gives more than {MAX_GRID_POINTS} grid points",
                self.step
            )));
        }
        if self.shots == 0 {
            return Err(QaoaError::ZeroShots);
        }
        Ok(())
    }

    /// γ values scanned, ascending from 0.
    pub fn gamma_points(&self) -> Vec<f64> {
        axis(self.gamma_max, self.step)
    }

    /// β values scanned, ascending from 0.
    pub fn beta_points(&self) -> Vec<f64> {
        axis(self.beta_max, self.step)
    }

    /// Number of (γ, β) pairs evaluated by a full scan.
    pub fn grid_size(&self) -> usize {
        self.gamma_points().len() * self.beta_points().len()
    }
}

/// `⌊max / step⌋ + 1`, or `None` when it does not fit in [`MAX_GRID_POINTS`]
fn axis_len(max: f64, step: f64) -> Option<usize> {
    let last = (max / step + GRID_EPSILON).floor();
    (last >= 0.0 && last < MAX_GRID_POINTS as f64).then(|| last as usize + 1)
}

/// `i · step` for `i = 0..=⌊max / step⌋`; empty for a config `validate` rejects.
fn axis(max: f64, step: f64) -> Vec<f64> {
    let count = axis_len(max, step).unwrap_or(0);
    (0..count).map(|i| i as f64 * step).collect()
}
