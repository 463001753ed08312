// src/config/settings.rs
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::defaults::{default_positions, default_rotors};
use crate::alphabet;
use crate::consts::{DEFAULT_SETTINGS_FILE, MAX_PLUGBOARD_PAIRS, ROTOR_SLOTS, SETTINGS_ENV};
use crate::enums::{ReflectorId, RotorId};
use crate::error::EnigmaError;

/// One machine's worth of settings.
///
/// Counts and pair structure are not enforced at parse time; the engine
/// re-validates everything at construction, so a hand-edited file with
/// four rotors fails there with a precise error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Catalog choices in (left, middle, right) order.
    #[serde(default = "default_rotors")]
    pub rotors: Vec<RotorId>,

    /// Start letter per rotor slot, same order.
    #[serde(default = "default_positions")]
    pub positions: Vec<char>,

    /// Disjoint letter pairs; empty means no cables.
    #[serde(default)]
    pub plugboard: Vec<(char, char)>,

    #[serde(default)]
    pub reflector: ReflectorId,

    /// Fail on non-letter input instead of passing it through.
    #[serde(default)]
    pub strict_input: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rotors: default_rotors(),
            positions: default_positions(),
            plugboard: Vec::new(),
            reflector: ReflectorId::default(),
            strict_input: false,
        }
    }
}

impl Settings {
    /// Draws a fresh random setting: three distinct rotors, random start
    /// letters, and a random set of disjoint plugboard pairs.
    ///
    /// Distinct rotors are a generator choice, not an engine rule — the
    /// engine accepts repeats.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut catalog = RotorId::ALL.to_vec();
        catalog.shuffle(rng);
        catalog.truncate(ROTOR_SLOTS);

        let positions = (0..ROTOR_SLOTS)
            .map(|_| alphabet::letter_at(rng.random_range(0..26)))
            .collect();

        let mut letters: Vec<char> = alphabet::LETTERS.chars().collect();
        letters.shuffle(rng);
        let pair_count = rng.random_range(0..=MAX_PLUGBOARD_PAIRS);
        let plugboard = letters
            .chunks(2)
            .take(pair_count)
            .map(|pair| (pair[0], pair[1]))
            .collect();

        Settings {
            rotors: catalog,
            positions,
            plugboard,
            reflector: ReflectorId::default(),
            strict_input: false,
        }
    }

    /// Parses settings from a TOML document. Missing fields fall back
    /// to the defaults.
    pub fn from_toml_str(document: &str) -> Result<Self, EnigmaError> {
        Ok(toml::from_str(document)?)
    }

    /// Writes the settings as pretty-printed JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), EnigmaError> {
        let document = serde_json::to_string_pretty(self)?;
        fs::write(path, document)?;
        Ok(())
    }

    /// Reads settings back from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, EnigmaError> {
        let document = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&document)?)
    }
}

/// Loads settings from the path in `ENIGMA_SETTINGS`, falling back to
/// `enigma.toml`, falling back to the built-in defaults when no file
/// exists.
pub fn load() -> Result<Settings, EnigmaError> {
    let path = std::env::var(SETTINGS_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_FILE.to_string());
    if Path::new(&path).exists() {
        load_from(&path)
    } else {
        warn!("settings file {path} not found — using built-in defaults");
        Ok(Settings::default())
    }
}

/// Loads settings from a TOML file at an explicit path.
pub fn load_from(path: impl AsRef<Path>) -> Result<Settings, EnigmaError> {
    let document = fs::read_to_string(&path)?;
    let settings = Settings::from_toml_str(&document)?;
    debug!(
        "loaded settings from {}: rotors {:?}",
        path.as_ref().display(),
        settings.rotors
    );
    Ok(settings)
}
