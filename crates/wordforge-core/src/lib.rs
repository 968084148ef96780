//! Core contracts and helpers for wordforge.
//!
//! This crate defines the character-class and leetspeak tables, the
//! generation configuration, and the personal-information profile shared
//! across the engine and the CLI.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod profile;

pub use alphabet::{CharClass, leet};
pub use config::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, GenerationConfig};
pub use error::{Error, Result};
pub use profile::PersonalInfo;
