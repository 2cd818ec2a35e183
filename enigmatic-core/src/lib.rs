//! # Enigmatic Core Library
//!
//! This library provides the core functionality of the Enigmatic tool: key
//! generation and validation for an Enigma-style rotor cipher, the
//! encrypt/decrypt orchestration around a pluggable cipher machine, and a
//! small statistics engine for analyzing text samples.
//!
//! The rotor machine itself is deliberately *not* implemented here. The
//! orchestrator drives any simulator that implements the traits in
//! [`machine`], so the core stays testable with a stub and the real
//! electromechanical simulation lives in its own crate.

/// Statistical analysis of text samples (frequency, entropy, n-grams).
pub mod analysis;
/// Encrypt/decrypt orchestration around a pluggable cipher machine.
pub mod cipher;
/// Error types shared across the library.
pub mod error;
/// Key material: rotors, reflector, ring settings, plugboard, position.
pub mod key;
/// The narrow interface to the external cipher-simulation collaborator.
pub mod machine;
