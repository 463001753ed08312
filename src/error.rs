// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnigmaError {
    #[error("rotor wiring is not a permutation of the alphabet")]
    WiringNotBijective,

    #[error("reflector wiring maps {0} to itself")]
    ReflectorFixedPoint(char),

    #[error("reflector wiring is not an involution")]
    ReflectorNotInvolutive,

    #[error("letter {0} appears in more than one plugboard pair")]
    PlugboardConflict(char),

    #[error("plugboard pair connects {0} to itself")]
    DegeneratePair(char),

    #[error("expected 3 rotors, got {0}")]
    RotorCount(usize),

    #[error("expected one start position per rotor slot, got {0}")]
    PositionCount(usize),

    #[error("symbol {0:?} is not a letter of the alphabet")]
    InvalidSymbol(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings file: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("malformed settings JSON: {0}")]
    SettingsJson(#[from] serde_json::Error),
}
