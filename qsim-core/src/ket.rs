//! Ket notation ↔ basis index conversion
//!
//! Qubit 0 is the most significant bit: on a 3-qubit register the index `4`
//! is `|100⟩`.

use crate::error::{QuantumError, QuantumResult};

/// Renders `index` as an `n`-character bit string, qubit 0 first.
pub fn index_to_bits(index: usize, num_qubits: usize) -> String {
    (0..num_qubits)
        .map(|q| if (index >> (num_qubits - 1 - q)) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Renders `index` as a ket, e.g. `|01⟩`.
pub fn index_to_ket(index: usize, num_qubits: usize) -> String {
    format!("|{}⟩", index_to_bits(index, num_qubits))
}

/// Parses a ket (`|01⟩`, `|01>`) or a bare bit string (`01`) into its basis index.
///
/// The leftmost bit is the most significant one. Characters other than `0`
/// and `1` inside the delimiters are rejected.
pub fn ket_to_index(ket: &str) -> QuantumResult<usize> {
    let trimmed = ket.trim();
    let body = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let body = body
        .strip_suffix('⟩')
        .or_else(|| body.strip_suffix('>'))
        .unwrap_or(body);

    if body.is_empty() || body.len() > usize::BITS as usize {
        return Err(QuantumError::InvalidKet(ket.to_string()));
    }

    body.chars().try_fold(0usize, |acc, c| match c {
        '0' => Ok(acc << 1),
        '1' => Ok((acc << 1) | 1),
        _ => Err(QuantumError::InvalidKet(ket.to_string())),
    })
}
