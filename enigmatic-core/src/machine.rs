//! The narrow interface to the cipher-simulation collaborator.
//!
//! The orchestrator never manipulates rotors directly; it configures a
//! machine from a validated [`Key`](crate::key::Key), sets the rotor display,
//! and feeds text through it. Any simulator implementing these traits can
//! stand in, which keeps the core free of electromechanical detail and lets
//! tests drive the orchestrator with a stub.

use crate::key::{Key, Position};
use thiserror::Error;

/// Failures reported by a cipher machine implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The machine rejected the supplied settings.
    #[error("invalid machine settings: {0}")]
    Configuration(String),
    /// The machine failed while processing a character stream.
    #[error("processing failed: {0}")]
    Processing(String),
}

/// A configured cipher machine, ready to process one message.
///
/// `process` is a deterministic character-by-character substitution that
/// advances internal rotor state as it consumes input. The substitution is
/// self-inverse: feeding the ciphertext through a machine with identical
/// configuration and starting position reproduces the input text. How
/// non-letter characters are handled is the implementation's contract; the
/// historical simulator substitutes `X` for them.
pub trait CipherMachine {
    /// Turns the rotors to the given display position.
    fn set_position(&mut self, position: Position);

    /// Feeds `text` through the machine and returns the substituted stream.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::Processing`] if the machine cannot consume
    /// the stream.
    fn process(&mut self, text: &str) -> Result<String, MachineError>;
}

/// A factory that builds a machine from a validated key.
pub trait MachineBackend {
    /// The machine type this backend produces.
    type Machine: CipherMachine;

    /// Builds a machine wired with the key's rotors, reflector, ring
    /// settings, and plugboard.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::Configuration`] if the backend cannot realize
    /// the settings.
    fn configure(&self, key: &Key) -> Result<Self::Machine, MachineError>;
}
