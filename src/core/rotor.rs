// src/core/rotor.rs
//! Rotor: the atomic substitution unit of the machine
//!
//! A rotor holds a fixed wiring permutation and a mutable rotational
//! position. The wiring is applied relative to the current offset, so
//! the same wiring substitutes differently as the rotor turns. The
//! inverse table is derived once at construction for the return pass.

use crate::alphabet;
use crate::consts::ALPHABET_LEN;
use crate::enums::RotorId;
use crate::error::EnigmaError;

const LEN: u8 = ALPHABET_LEN as u8;

pub struct Rotor {
    wiring: [u8; 26],
    inverse: [u8; 26],
    notch: u8,
    position: u8,
}

impl Rotor {
    /// Builds a rotor from a raw wiring table.
    ///
    /// # Errors
    /// [`EnigmaError::WiringNotBijective`] if the table is not a
    /// permutation of the alphabet.
    pub fn new(wiring: [u8; 26], notch: u8, position: u8) -> Result<Self, EnigmaError> {
        if !alphabet::is_bijection(&wiring) {
            return Err(EnigmaError::WiringNotBijective);
        }
        Ok(Rotor {
            inverse: alphabet::invert(&wiring),
            wiring,
            notch: notch % LEN,
            position: position % LEN,
        })
    }

    /// Builds a catalog rotor at the given start position.
    pub fn from_id(id: RotorId, position: u8) -> Result<Self, EnigmaError> {
        Self::new(*id.wiring(), id.notch_index(), position)
    }

    /// Substitution toward the reflector.
    ///
    /// The signal enters at `index`, meets the wiring at the contact
    /// offset by the current position, and leaves shifted back by the
    /// same offset. All arithmetic mod 26.
    pub fn forward(&self, index: u8) -> u8 {
        let contact = (index % LEN + self.position) % LEN;
        let exit = self.wiring[contact as usize];
        (exit + LEN - self.position) % LEN
    }

    /// Substitution away from the reflector — exact inverse of
    /// [`forward`](Self::forward) at the same position.
    pub fn backward(&self, index: u8) -> u8 {
        let contact = (index % LEN + self.position) % LEN;
        let exit = self.inverse[contact as usize];
        (exit + LEN - self.position) % LEN
    }

    /// Advances the rotor one position. Returns whether the new position
    /// lines up with the notch, which carries the step to the next rotor
    /// in the stack.
    pub fn step(&mut self) -> bool {
        self.position = (self.position + 1) % LEN;
        self.position == self.notch
    }

    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn set_position(&mut self, position: u8) {
        self.position = position % LEN;
    }

    pub fn notch(&self) -> u8 {
        self.notch
    }
}
