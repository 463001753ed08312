// src/enums.rs
//! Closed wiring catalogs
//!
//! Central location for the serde-derived enums that represent
//! user-visible choices: which rotors fill the stack and which reflector
//! closes the circuit. Keeping the catalog as enums means an invalid
//! selection cannot survive deserialization.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five selectable rotor wirings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
}

/// Available reflectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum ReflectorId {
    #[default]
    B,
    // Future:
    // A,
    // C,
}

impl RotorId {
    /// Every rotor in the catalog, in display order.
    pub const ALL: [RotorId; 5] = [RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V];

    /// Substitution alphabet in A–Z contact order.
    pub fn wiring_str(self) -> &'static str {
        match self {
            RotorId::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorId::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorId::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorId::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorId::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    /// Turnover letter: stepping onto this position carries the step to
    /// the next rotor in the stack.
    pub fn notch_letter(self) -> char {
        match self {
            RotorId::I => 'Q',
            RotorId::II => 'E',
            RotorId::III => 'V',
            RotorId::IV => 'J',
            RotorId::V => 'Z',
        }
    }

    /// Turnover position as an alphabet index.
    pub fn notch_index(self) -> u8 {
        self.notch_letter() as u8 - b'A'
    }

    /// Decoded wiring table. Structural validation happens when a
    /// `Rotor` is built from it.
    pub fn wiring(self) -> &'static [u8; 26] {
        &ROTOR_TABLES[self as usize]
    }
}

impl ReflectorId {
    /// Substitution alphabet in A–Z contact order.
    pub fn wiring_str(self) -> &'static str {
        match self {
            ReflectorId::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
        }
    }

    /// Decoded wiring table. Structural validation happens when a
    /// `Reflector` is built from it.
    pub fn wiring(self) -> &'static [u8; 26] {
        match self {
            ReflectorId::B => &REFLECTOR_B_TABLE,
        }
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::IV => "IV",
            RotorId::V => "V",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectorId::B => f.write_str("B"),
        }
    }
}

static ROTOR_TABLES: Lazy<[[u8; 26]; 5]> =
    Lazy::new(|| RotorId::ALL.map(|id| decode(id.wiring_str())));

static REFLECTOR_B_TABLE: Lazy<[u8; 26]> = Lazy::new(|| decode(ReflectorId::B.wiring_str()));

/// Catalog strings are uppercase A–Z, 26 long; plain byte math suffices.
fn decode(wiring: &str) -> [u8; 26] {
    let mut table = [0u8; 26];
    for (slot, byte) in wiring.bytes().enumerate() {
        table[slot] = byte - b'A';
    }
    table
}
