// src/config/defaults.rs
use crate::enums::RotorId;

pub(super) fn default_rotors() -> Vec<RotorId> {
    vec![RotorId::I, RotorId::II, RotorId::III]
}

pub(super) fn default_positions() -> Vec<char> {
    vec!['A', 'A', 'A']
}
