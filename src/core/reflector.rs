// src/core/reflector.rs
//! Reflector: the fixed involution that turns the signal around
//!
//! Reciprocity of the whole machine rests on two properties checked
//! here: the wiring is an involution (applying it twice is the
//! identity) and no letter reflects to itself.

use crate::alphabet;
use crate::consts::ALPHABET_LEN;
use crate::enums::ReflectorId;
use crate::error::EnigmaError;

pub struct Reflector {
    wiring: [u8; 26],
}

impl Reflector {
    /// Builds a reflector from a raw wiring table.
    ///
    /// # Errors
    /// - [`EnigmaError::WiringNotBijective`] if the table is not a
    ///   permutation of the alphabet.
    /// - [`EnigmaError::ReflectorFixedPoint`] if some letter maps to
    ///   itself.
    /// - [`EnigmaError::ReflectorNotInvolutive`] if applying the table
    ///   twice does not return every letter to itself.
    pub fn new(wiring: [u8; 26]) -> Result<Self, EnigmaError> {
        if !alphabet::is_bijection(&wiring) {
            return Err(EnigmaError::WiringNotBijective);
        }
        for index in 0..ALPHABET_LEN {
            let image = wiring[index] as usize;
            if image == index {
                return Err(EnigmaError::ReflectorFixedPoint(alphabet::letter_at(
                    index as u8,
                )));
            }
            if wiring[image] as usize != index {
                return Err(EnigmaError::ReflectorNotInvolutive);
            }
        }
        Ok(Reflector { wiring })
    }

    /// Builds a catalog reflector.
    pub fn from_id(id: ReflectorId) -> Result<Self, EnigmaError> {
        Self::new(*id.wiring())
    }

    pub fn reflect(&self, index: u8) -> u8 {
        self.wiring[(index as usize) % ALPHABET_LEN]
    }
}
