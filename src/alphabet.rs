// src/alphabet.rs
//! Letter/index mapping and permutation helpers used across the core
//!
//! Everything downstream of the settings layer works on `u8` indices
//! 0–25; letters only appear at the boundaries. Keep this light — if it
//! grows, split further.

use crate::consts::ALPHABET_LEN;
use crate::error::EnigmaError;

/// The machine alphabet in index order.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Index of a letter, case-insensitive. `None` for anything outside A–Z.
pub fn index_of(symbol: char) -> Option<u8> {
    if symbol.is_ascii_alphabetic() {
        Some(symbol.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Uppercase letter at an index. The index is taken modulo 26.
pub fn letter_at(index: u8) -> char {
    (b'A' + index % ALPHABET_LEN as u8) as char
}

/// Whether `table` is a bijection over 0–25: every value in range,
/// every value hit exactly once.
pub fn is_bijection(table: &[u8; 26]) -> bool {
    let mut seen = [false; ALPHABET_LEN];
    for &value in table {
        if value as usize >= ALPHABET_LEN || seen[value as usize] {
            return false;
        }
        seen[value as usize] = true;
    }
    true
}

/// Inverse of a bijective table. Caller guarantees `is_bijection`.
pub fn invert(table: &[u8; 26]) -> [u8; 26] {
    let mut inverse = [0u8; 26];
    for (index, &value) in table.iter().enumerate() {
        inverse[value as usize] = index as u8;
    }
    inverse
}

/// Parse a 26-letter wiring string into an index table, validating that
/// it forms a permutation of the alphabet.
pub fn parse_wiring(wiring: &str) -> Result<[u8; 26], EnigmaError> {
    let mut table = [0u8; 26];
    let mut count = 0usize;
    for (slot, symbol) in wiring.chars().enumerate() {
        if slot >= ALPHABET_LEN {
            return Err(EnigmaError::WiringNotBijective);
        }
        table[slot] = index_of(symbol).ok_or(EnigmaError::InvalidSymbol(symbol))?;
        count += 1;
    }
    if count != ALPHABET_LEN || !is_bijection(&table) {
        return Err(EnigmaError::WiringNotBijective);
    }
    Ok(table)
}
