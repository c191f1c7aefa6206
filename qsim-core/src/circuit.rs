//! Ordered list of single-qubit gate applications

use serde::{Deserialize, Serialize};

use crate::error::{QuantumError, QuantumResult};
use crate::gates::Gate;
use crate::register::Register;

/// One step of a circuit
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub gate: Gate,
    pub target: usize,
}

/// Fixed-width circuit of single-qubit gates.
///
/// Targets are validated when an operation is added (deserialization
/// included), so [`Circuit::run`] can only fail on a register of the wrong
/// width.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircuitData", into = "CircuitData")]
pub struct Circuit {
    num_qubits: usize,
    ops: Vec<Operation>,
}

#[derive(Serialize, Deserialize)]
struct CircuitData {
    num_qubits: usize,
    ops: Vec<Operation>,
}

impl TryFrom<CircuitData> for Circuit {
    type Error = QuantumError;

    fn try_from(data: CircuitData) -> QuantumResult<Self> {
        let mut circuit = Circuit::new(data.num_qubits);
        for op in data.ops {
            circuit.push(op.gate, op.target)?;
        }
        Ok(circuit)
    }
}

impl From<Circuit> for CircuitData {
    fn from(circuit: Circuit) -> Self {
        Self {
            num_qubits: circuit.num_qubits,
            ops: circuit.ops,
        }
    }
}

impl Circuit {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            ops: Vec::new(),
        }
    }

    /// Appends `gate` on `target`.
    pub fn push(&mut self, gate: Gate, target: usize) -> QuantumResult<&mut Self> {
        if target >= self.num_qubits {
            return Err(QuantumError::TargetOutOfRange {
                target,
                num_qubits: self.num_qubits,
            });
        }
        self.ops.push(Operation { gate, target });
        Ok(self)
    }

    /// By-value variant of [`Circuit::push`] for chaining.
    pub fn then(mut self, gate: Gate, target: usize) -> QuantumResult<Self> {
        self.push(gate, target)?;
        Ok(self)
    }

    /// Appends `gate` on every qubit, qubit 0 first.
    pub fn on_all(mut self, gate: Gate) -> Self {
        self.ops
            .extend((0..self.num_qubits).map(|target| Operation { gate, target }));
        self
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    /// Applies every operation in order, returning the final register.
    pub fn run(&self, input: &Register) -> QuantumResult<Register> {
        if input.num_qubits() != self.num_qubits {
            return Err(QuantumError::QubitCountMismatch {
                expected: self.num_qubits,
                actual: input.num_qubits(),
            });
        }
        self.ops
            .iter()
            .try_fold(input.clone(), |reg, op| op.gate.apply_at(&reg, op.target))
    }

    /// Runs the circuit on `|0…0⟩`.
    pub fn run_from_ground(&self) -> QuantumResult<Register> {
        self.run(&Register::new(self.num_qubits)?)
    }
}
