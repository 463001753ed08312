// src/core/machine.rs
//! Machine: the 3-rotor cipher engine
//!
//! Owns the rotor stack, the reflector and the plugboard, and drives
//! the stepping protocol and the per-letter signal path. One machine
//! per processing session; construction is fail-fast, so a machine
//! that exists is fully valid and processing letters cannot fail.
//!
//! ```text
//! +-----------+   +------+   +--------+   +-------+   +-----------+
//! | reflector |<->| left |<->| middle |<->| right |<->| plugboard |
//! +-----------+   +------+   +--------+   +-------+   +-----------+
//! ```
//!
//! The machine is self-reciprocal: enciphering and deciphering are the
//! same operation, provided both runs start from the same positions.

use log::debug;
use serde::Serialize;
use std::fmt;

use crate::alphabet;
use crate::config::Settings;
use crate::consts::ROTOR_SLOTS;
use crate::core::plugboard::Plugboard;
use crate::core::reflector::Reflector;
use crate::core::rotor::Rotor;
use crate::enums::RotorId;
use crate::error::EnigmaError;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

pub struct Machine {
    /// Stack in (left, middle, right) order; the signal enters at the right.
    rotors: [Rotor; 3],
    reflector: Reflector,
    plugboard: Plugboard,
    choices: [RotorId; 3],
    start_positions: [u8; 3],
    strict: bool,
}

/// Read-only view of the machine state, for display by a hosting layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub rotor_choices: [RotorId; 3],
    pub rotor_positions: [char; 3],
    pub plugboard_pairs: Vec<(char, char)>,
}

impl Machine {
    /// Builds a machine from validated settings.
    ///
    /// Every structural invariant is re-checked here regardless of where
    /// the settings came from: exactly 3 rotors and start letters, rotor
    /// wirings bijective, reflector a fixed-point-free involution,
    /// plugboard pairs disjoint and non-degenerate.
    pub fn new(settings: &Settings) -> Result<Self, EnigmaError> {
        if settings.rotors.len() != ROTOR_SLOTS {
            return Err(EnigmaError::RotorCount(settings.rotors.len()));
        }
        if settings.positions.len() != ROTOR_SLOTS {
            return Err(EnigmaError::PositionCount(settings.positions.len()));
        }

        let mut choices = [RotorId::I; 3];
        choices.copy_from_slice(&settings.rotors);

        let mut start_positions = [0u8; 3];
        for (slot, &letter) in settings.positions.iter().enumerate() {
            start_positions[slot] =
                alphabet::index_of(letter).ok_or(EnigmaError::InvalidSymbol(letter))?;
        }

        let rotors = [
            Rotor::from_id(choices[LEFT], start_positions[LEFT])?,
            Rotor::from_id(choices[MIDDLE], start_positions[MIDDLE])?,
            Rotor::from_id(choices[RIGHT], start_positions[RIGHT])?,
        ];
        let reflector = Reflector::from_id(settings.reflector)?;
        let plugboard = Plugboard::new(&settings.plugboard)?;

        debug!(
            "machine configured: rotors {} {} {}, start positions {:?}, {} plugboard pair(s)",
            choices[LEFT],
            choices[MIDDLE],
            choices[RIGHT],
            settings.positions,
            settings.plugboard.len(),
        );

        Ok(Machine {
            rotors,
            reflector,
            plugboard,
            choices,
            start_positions,
            strict: settings.strict_input,
        })
    }

    /// Runs a text through the machine.
    ///
    /// Letters are substituted case-insensitively with the case of the
    /// input preserved in the output. Anything else passes through
    /// unchanged without consuming machine state — unless strict input
    /// was configured, in which case the first non-letter fails with
    /// [`EnigmaError::InvalidSymbol`].
    pub fn process(&mut self, text: &str) -> Result<String, EnigmaError> {
        let mut output = String::with_capacity(text.len());
        for symbol in text.chars() {
            match alphabet::index_of(symbol) {
                Some(index) => {
                    let substituted = self.encipher_index(index);
                    let letter = alphabet::letter_at(substituted);
                    if symbol.is_ascii_lowercase() {
                        output.push(letter.to_ascii_lowercase());
                    } else {
                        output.push(letter);
                    }
                }
                None if self.strict => return Err(EnigmaError::InvalidSymbol(symbol)),
                None => output.push(symbol),
            }
        }
        Ok(output)
    }

    /// Read-only state view. Does not mutate the machine.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rotor_choices: self.choices,
            rotor_positions: [
                alphabet::letter_at(self.rotors[LEFT].position()),
                alphabet::letter_at(self.rotors[MIDDLE].position()),
                alphabet::letter_at(self.rotors[RIGHT].position()),
            ],
            plugboard_pairs: self.plugboard.pairs(),
        }
    }

    /// Current rotor positions as indices, in (left, middle, right) order.
    pub fn positions(&self) -> [u8; 3] {
        [
            self.rotors[LEFT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[RIGHT].position(),
        ]
    }

    /// Re-keys the rotors to new start letters. The new letters also
    /// become the positions [`reset`](Self::reset) returns to.
    pub fn set_positions(&mut self, positions: [char; 3]) -> Result<(), EnigmaError> {
        let mut indices = [0u8; 3];
        for (slot, &letter) in positions.iter().enumerate() {
            indices[slot] = alphabet::index_of(letter).ok_or(EnigmaError::InvalidSymbol(letter))?;
        }
        self.start_positions = indices;
        self.reset();
        Ok(())
    }

    /// Replaces the plugboard. Validation failure leaves the previous
    /// pairs in place.
    pub fn set_plugboard(&mut self, pairs: &[(char, char)]) -> Result<(), EnigmaError> {
        self.plugboard = Plugboard::new(pairs)?;
        Ok(())
    }

    /// Returns the rotors to the configured start positions.
    pub fn reset(&mut self) {
        for (slot, rotor) in self.rotors.iter_mut().enumerate() {
            rotor.set_position(self.start_positions[slot]);
        }
    }

    /// One keypress worth of rotor motion, applied before substitution.
    ///
    /// The right rotor always steps; its notch carries the step to the
    /// middle rotor. The middle rotor's notch condition is then checked
    /// on its own — whether or not the middle rotor just stepped — and
    /// when it holds, the middle rotor steps again together with the
    /// left rotor. This reproduces the ratchet anomaly where the middle
    /// rotor advances twice within a single keypress.
    fn advance(&mut self) {
        if self.rotors[RIGHT].step() {
            self.rotors[MIDDLE].step();
        }
        if self.rotors[MIDDLE].at_notch() {
            self.rotors[MIDDLE].step();
            self.rotors[LEFT].step();
        }
    }

    /// Full signal path for one letter index.
    fn encipher_index(&mut self, index: u8) -> u8 {
        self.advance();
        let mut signal = self.plugboard.substitute(index);
        for slot in [RIGHT, MIDDLE, LEFT] {
            signal = self.rotors[slot].forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for slot in [LEFT, MIDDLE, RIGHT] {
            signal = self.rotors[slot].backward(signal);
        }
        self.plugboard.substitute(signal)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "rotors: {} {} {}",
            self.rotor_choices[0], self.rotor_choices[1], self.rotor_choices[2]
        )?;
        writeln!(
            f,
            "positions: {} {} {}",
            self.rotor_positions[0], self.rotor_positions[1], self.rotor_positions[2]
        )?;
        let pairs: Vec<String> = self
            .plugboard_pairs
            .iter()
            .map(|(a, b)| format!("{a}{b}"))
            .collect();
        write!(f, "plugboard: {}", pairs.join(" "))
    }
}
