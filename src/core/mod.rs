// src/core/mod.rs
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use machine::{Machine, Snapshot};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;

pub type Result<T> = std::result::Result<T, crate::error::EnigmaError>;
