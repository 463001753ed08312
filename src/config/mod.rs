// src/config/mod.rs
//! Settings layer for the machine
//!
//! Structured, validated machine settings with TOML loading and JSON
//! save/load. Parsing user-facing text (pair lists typed into a form)
//! is the hosting layer's job — this module only deals in structured
//! values, and the core re-validates them on construction either way.

pub use settings::{load, load_from, Settings};

mod defaults;
mod settings;
