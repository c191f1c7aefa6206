//! # Quantum Gates
//!
//! Single-qubit gates as 2×2 complex matrices, embedded into an n-qubit
//! register by index pairing.
//!
//! ## Gates
//!
//! - **Fixed**: I, X, Y, Z (Pauli), H (Hadamard), S, T (phase)
//! - **Rotation**: Rx, Ry, Rz
//! - **Custom**: any unitary via [`Gate::from_matrix`]

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;

use crate::error::{QuantumError, QuantumResult};
use crate::register::Register;

/// Tolerance for the `M·M† = I` check
pub const UNITARY_TOLERANCE: f64 = 1e-10;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// Complex 2×2 matrix, `elements[row][col]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2x2 {
    pub elements: [[Complex64; 2]; 2],
}

impl Matrix2x2 {
    pub const fn new(m00: Complex64, m01: Complex64, m10: Complex64, m11: Complex64) -> Self {
        Self {
            elements: [[m00, m01], [m10, m11]],
        }
    }

    pub const fn identity() -> Self {
        Self::new(ONE, ZERO, ZERO, ONE)
    }

    /// Matrix product `self · other`
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Conjugate transpose
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2::new(a.conj(), c.conj(), b.conj(), d.conj())
    }

    /// Element-wise comparison within `tol`
    pub fn approx_eq(&self, other: &Matrix2x2, tol: f64) -> bool {
        self.elements
            .iter()
            .flatten()
            .zip(other.elements.iter().flatten())
            .all(|(x, y)| (x - y).norm() < tol)
    }

    pub fn is_unitary(&self, tol: f64) -> bool {
        self.mul(&self.dagger()).approx_eq(&Matrix2x2::identity(), tol)
    }
}

/// What a gate is, for display and serialization
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    Identity,
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    /// S = √Z
    S,
    /// T = π/8 gate
    T,
    /// Generic phase `diag(1, e^{iφ})`
    Phase(f64),
    Rx(f64),
    Ry(f64),
    Rz(f64),
    /// Built from an arbitrary unitary matrix
    Custom,
}

impl GateKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "I",
            Self::PauliX => "X",
            Self::PauliY => "Y",
            Self::PauliZ => "Z",
            Self::Hadamard => "H",
            Self::S => "S",
            Self::T => "T",
            Self::Phase(_) => "P",
            Self::Rx(_) => "Rx",
            Self::Ry(_) => "Ry",
            Self::Rz(_) => "Rz",
            Self::Custom => "U",
        }
    }

    /// Angle of parametrised gates
    pub fn angle(&self) -> Option<f64> {
        match *self {
            Self::Phase(t) | Self::Rx(t) | Self::Ry(t) | Self::Rz(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle() {
            Some(theta) => write!(f, "{}({:.4})", self.name(), theta),
            None => f.write_str(self.name()),
        }
    }
}

/// Immutable single-qubit gate.
///
/// Gates carry no state; one value can be applied any number of times to
/// registers of any size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GateData", into = "GateData")]
pub struct Gate {
    kind: GateKind,
    matrix: Matrix2x2,
}

/// Wire form; named gates are rebuilt from their kind and must carry the
/// matching matrix, custom ones go through [`Gate::from_matrix`].
#[derive(Serialize, Deserialize)]
struct GateData {
    kind: GateKind,
    matrix: Matrix2x2,
}

impl TryFrom<GateData> for Gate {
    type Error = QuantumError;

    fn try_from(data: GateData) -> QuantumResult<Self> {
        let Some(gate) = Gate::from_kind(data.kind) else {
            return Gate::from_matrix(data.matrix);
        };
        if !gate.matrix.approx_eq(&data.matrix, UNITARY_TOLERANCE) {
            return Err(QuantumError::KindMismatch(gate.to_string()));
        }
        Ok(gate)
    }
}

impl From<Gate> for GateData {
    fn from(gate: Gate) -> Self {
        Self {
            kind: gate.kind,
            matrix: gate.matrix,
        }
    }
}

impl Gate {
    const fn fixed(kind: GateKind, matrix: Matrix2x2) -> Self {
        Self { kind, matrix }
    }

    /// Wraps an arbitrary matrix, rejecting non-unitary input.
    pub fn from_matrix(matrix: Matrix2x2) -> QuantumResult<Self> {
        if !matrix.is_unitary(UNITARY_TOLERANCE) {
            return Err(QuantumError::NonUnitary);
        }
        Ok(Self::fixed(GateKind::Custom, matrix))
    }

    /// Named gate for `kind`; `None` for [`GateKind::Custom`].
    pub fn from_kind(kind: GateKind) -> Option<Self> {
        let gate = match kind {
            GateKind::Identity => Self::identity(),
            GateKind::PauliX => Self::x(),
            GateKind::PauliY => Self::y(),
            GateKind::PauliZ => Self::z(),
            GateKind::Hadamard => Self::h(),
            GateKind::S => Self::s(),
            GateKind::T => Self::t(),
            GateKind::Phase(phi) => Self::phase(phi),
            GateKind::Rx(t) => Self::rx(t),
            GateKind::Ry(t) => Self::ry(t),
            GateKind::Rz(t) => Self::rz(t),
            GateKind::Custom => return None,
        };
        Some(gate)
    }

    pub fn identity() -> Self {
        Self::fixed(GateKind::Identity, Matrix2x2::identity())
    }

    /// Pauli-X (bit flip)
    pub fn x() -> Self {
        Self::fixed(GateKind::PauliX, Matrix2x2::new(ZERO, ONE, ONE, ZERO))
    }

    pub fn y() -> Self {
        Self::fixed(GateKind::PauliY, Matrix2x2::new(ZERO, -I, I, ZERO))
    }

    /// Pauli-Z (phase flip)
    pub fn z() -> Self {
        Self::fixed(GateKind::PauliZ, Matrix2x2::new(ONE, ZERO, ZERO, -ONE))
    }

    pub fn h() -> Self {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Self::fixed(GateKind::Hadamard, Matrix2x2::new(h, h, h, -h))
    }

    pub fn s() -> Self {
        Self::fixed(GateKind::S, Matrix2x2::new(ONE, ZERO, ZERO, I))
    }

    pub fn t() -> Self {
        Self::fixed(
            GateKind::T,
            Matrix2x2::new(ONE, ZERO, ZERO, Complex64::from_polar(1.0, FRAC_PI_4)),
        )
    }

    pub fn phase(phi: f64) -> Self {
        Self::fixed(
            GateKind::Phase(phi),
            Matrix2x2::new(ONE, ZERO, ZERO, Complex64::from_polar(1.0, phi)),
        )
    }

    /// Rotation about X by `theta` radians
    pub fn rx(theta: f64) -> Self {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let s = Complex64::new(0.0, -(theta / 2.0).sin());
        Self::fixed(GateKind::Rx(theta), Matrix2x2::new(c, s, s, c))
    }

    /// Rotation about Y by `theta` radians
    pub fn ry(theta: f64) -> Self {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let s = Complex64::new((theta / 2.0).sin(), 0.0);
        Self::fixed(GateKind::Ry(theta), Matrix2x2::new(c, -s, s, c))
    }

    /// Rotation about Z by `theta` radians
    pub fn rz(theta: f64) -> Self {
        let half = theta / 2.0;
        Self::fixed(
            GateKind::Rz(theta),
            Matrix2x2::new(
                Complex64::from_polar(1.0, -half),
                ZERO,
                ZERO,
                Complex64::from_polar(1.0, half),
            ),
        )
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn matrix(&self) -> &Matrix2x2 {
        &self.matrix
    }

    /// Inverse gate (conjugate transpose)
    pub fn dagger(&self) -> Gate {
        let kind = match self.kind {
            GateKind::Identity => GateKind::Identity,
            GateKind::PauliX => GateKind::PauliX,
            GateKind::PauliY => GateKind::PauliY,
            GateKind::PauliZ => GateKind::PauliZ,
            GateKind::Hadamard => GateKind::Hadamard,
            GateKind::Phase(phi) => GateKind::Phase(-phi),
            GateKind::Rx(t) => GateKind::Rx(-t),
            GateKind::Ry(t) => GateKind::Ry(-t),
            GateKind::Rz(t) => GateKind::Rz(-t),
            GateKind::S | GateKind::T | GateKind::Custom => GateKind::Custom,
        };
        Self::fixed(kind, self.matrix.dagger())
    }

    /// Applies the gate to qubit `target` and returns the new register.
    ///
    /// `target` may be omitted (`None`) only for 1-qubit registers. The input
    /// register is left untouched.
    ///
    /// For every basis index `i`, with `bit` the target qubit's value in `i`
    /// and `j = i ^ mask` its partner (same index, target bit flipped):
    ///
    /// ```text
    /// new[i] = m[bit][0]·old[i₀] + m[bit][1]·old[i₁]
    /// ```
    ///
    /// where `i₀` / `i₁` is whichever of `i`, `j` has the target bit cleared / set.
    ///
    /// One O(2^n) pass; the 2^n × 2^n operator is never built.
    ///
    /// A gate built from a non-finite angle yields NaN amplitudes, reported as
    /// [`QuantumError::NonFiniteAmplitude`].
    pub fn apply(
        &self,
        register: &Register,
        target: Option<usize>,
    ) -> QuantumResult<Register> {
        let n = register.num_qubits();
        let target = match target {
            Some(t) if t < n => t,
            Some(t) => {
                return Err(QuantumError::TargetOutOfRange {
                    target: t,
                    num_qubits: n,
                });
            }
            None if n == 1 => 0,
            None => return Err(QuantumError::MissingTarget { num_qubits: n }),
        };

        let shift = n - 1 - target;
        let mask = 1usize << shift;
        let old = register.amplitudes();
        let m = &self.matrix.elements;

        let state = (0..old.len())
            .map(|i| {
                let bit = (i >> shift) & 1;
                let j = i ^ mask;
                // columns are indexed by the target's value, not by i/j order
                let (zero_part, one_part) = if bit == 0 { (old[i], old[j]) } else { (old[j], old[i]) };
                m[bit][0] * zero_part + m[bit][1] * one_part
            })
            .collect();

        tracing::trace!(gate = %self.kind, target, num_qubits = n, "gate applied");

        Register::from_raw(n, state)
    }

    /// Shorthand for `apply(register, Some(target))`.
    pub fn apply_at(&self, register: &Register, target: usize) -> QuantumResult<Register> {
        self.apply(register, Some(target))
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
