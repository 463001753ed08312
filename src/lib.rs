// src/lib.rs
//! enigma-engine — rotor cipher machine core
//!
//! Simulates the cipher engine of the classical 3-rotor machine:
//!
//! - Rotor stack with the historical double-stepping anomaly
//! - Fixed-point-free involutive reflector
//! - Configurable plugboard pairs
//! - Self-reciprocal: enciphering and deciphering are the same operation
//!
//! # Architecture
//!
//! ```text
//! Rotor       (atomic unit — wiring permutation + rotational position)
//!     × 3 stacked (left, middle, right)
//! Reflector   (fixed involution turning the signal around)
//! Plugboard   (letter pairs applied on the way in and out)
//! Machine     (orchestrator — stepping protocol + signal path)
//! ```
//!
//! # Examples
//!
//! ```
//! use enigma_engine::{Machine, Settings};
//!
//! let settings = Settings::default();
//!
//! let mut encoder = Machine::new(&settings).unwrap();
//! let ciphertext = encoder.process("Attack at dawn").unwrap();
//!
//! let mut decoder = Machine::new(&settings).unwrap();
//! assert_eq!(decoder.process(&ciphertext).unwrap(), "Attack at dawn");
//! ```

pub mod alphabet;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use config::Settings;
pub use crate::core::{Machine, Plugboard, Reflector, Result as CoreResult, Rotor, Snapshot};
pub use enums::{ReflectorId, RotorId};
pub use error::EnigmaError;
