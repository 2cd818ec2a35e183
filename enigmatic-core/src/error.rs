//! Typed errors for key handling, cipher orchestration, and text analysis.
//!
//! Callers are expected to pattern-match on these variants rather than parse
//! message strings; the `Display` output is for reporting to the user.

use crate::machine::MachineError;
use thiserror::Error;

/// A candidate key violated one of the combinatorial key constraints.
///
/// Validation checks constraints in a fixed order and reports the first
/// violation it encounters, so a malformed key yields exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The key did not name exactly three rotors.
    #[error("expected exactly 3 rotors, found {found}")]
    RotorCount {
        /// Number of rotor identifiers the candidate supplied.
        found: usize,
    },
    /// A rotor identifier was not one of I, II, III, IV, V.
    #[error("unknown rotor '{0}' (expected one of I, II, III, IV, V)")]
    UnknownRotor(String),
    /// The same rotor was named in two slots.
    #[error("rotor '{0}' appears more than once")]
    DuplicateRotor(String),
    /// The reflector identifier was not B or C.
    #[error("unknown reflector '{0}' (expected B or C)")]
    UnknownReflector(String),
    /// The key did not carry exactly three ring settings.
    #[error("expected exactly 3 ring settings, found {found}")]
    RingSettingCount {
        /// Number of ring settings the candidate supplied.
        found: usize,
    },
    /// A ring setting was not an integer between 1 and 26.
    #[error("ring setting '{0}' must be an integer between 1 and 26")]
    InvalidRingSetting(String),
    /// A plugboard entry was not a pair of two distinct letters.
    #[error("plugboard entry '{0}' must be two distinct letters, e.g. 'AB'")]
    InvalidPlugPair(String),
    /// A letter was wired into more than one plugboard pair.
    #[error("plugboard letter '{0}' is used in more than one pair")]
    DuplicatePlugLetter(char),
    /// The initial position was not three uppercase letters.
    #[error("initial position '{0}' must be three letters, e.g. 'AQX'")]
    InvalidPosition(String),
}

/// Failures raised while orchestrating an encryption or decryption.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The supplied key failed validation.
    #[error("invalid key: {0}")]
    Key(#[from] KeyError),
    /// Decryption was attempted with a key that never recorded the initial
    /// rotor position of its message.
    #[error("key carries no initial position; it cannot decrypt a message")]
    MissingInitialPosition,
    /// The cipher machine failed while encrypting.
    #[error("encryption failed: {0}")]
    Encryption(#[source] MachineError),
    /// The cipher machine failed while decrypting.
    #[error("decryption failed: {0}")]
    Decryption(#[source] MachineError),
}

/// Failures raised by the text analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The input text was empty; frequency percentages are undefined for a
    /// zero-length sample.
    #[error("cannot analyze an empty text")]
    EmptyText,
}
