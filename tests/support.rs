// tests/support.rs
//! Shared helpers for the integration suites

use enigma_engine::{Machine, RotorId, Settings};

/// Settings literal without the boilerplate.
#[allow(dead_code)] // not every suite builds raw settings
pub fn settings(
    rotors: [RotorId; 3],
    positions: [char; 3],
    plugboard: &[(char, char)],
) -> Settings {
    Settings {
        rotors: rotors.to_vec(),
        positions: positions.to_vec(),
        plugboard: plugboard.to_vec(),
        ..Settings::default()
    }
}

/// A machine that is known-good by construction.
#[allow(dead_code)]
pub fn machine(rotors: [RotorId; 3], positions: [char; 3], plugboard: &[(char, char)]) -> Machine {
    Machine::new(&settings(rotors, positions, plugboard)).expect("valid test settings")
}
