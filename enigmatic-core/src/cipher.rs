//! Encrypt/decrypt orchestration.
//!
//! [`Cipher`] sequences key preparation, configures the machine backend, and
//! manages the initial-position contract: every encryption draws a fresh
//! three-letter rotor display, records it in the returned key, and every
//! decryption replays the stored display. A key therefore travels with
//! everything needed to decrypt the message it produced.

use crate::error::CipherError;
use crate::key::{self, Key, Position};
use crate::machine::{CipherMachine, MachineBackend};
use log::info;
use rand::Rng;

/// The result of an encryption: the ciphertext and the key that produced it.
///
/// `key` is a new value carrying the freshly drawn initial position; the
/// caller must keep it (or serialize it) to ever decrypt the ciphertext.
#[derive(Debug, Clone)]
pub struct Encryption {
    /// The enciphered text.
    pub ciphertext: String,
    /// The key used, with `initial_position` attached.
    pub key: Key,
}

/// Orchestrates encryption and decryption over a machine backend.
///
/// Each call is a complete, independent transaction; the only state carried
/// between calls is the [`Key`] the caller threads through.
#[derive(Debug, Clone)]
pub struct Cipher<B> {
    backend: B,
}

impl<B: MachineBackend> Cipher<B> {
    /// Creates an orchestrator over the given machine backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Encrypts `plaintext`, generating a random key if none is supplied.
    ///
    /// The plaintext is folded to uppercase before processing; non-letter
    /// characters are handed to the machine as-is and handled per its
    /// contract. The returned [`Encryption`] carries the positioned key --
    /// without it the ciphertext is not recoverable.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Encryption`] if the machine fails to configure
    /// or to process the stream.
    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        plaintext: &str,
        key: Option<Key>,
    ) -> Result<Encryption, CipherError> {
        let key = key.unwrap_or_else(|| {
            info!("no key supplied, generating a random key");
            key::generate(rng)
        });
        let position = Position::random(rng);
        let key = key.with_position(position);

        let mut machine = self.backend.configure(&key).map_err(CipherError::Encryption)?;
        machine.set_position(position);
        let ciphertext = machine
            .process(&plaintext.to_uppercase())
            .map_err(CipherError::Encryption)?;

        Ok(Encryption { ciphertext, key })
    }

    /// Decrypts `ciphertext` with a key that has encrypted before.
    ///
    /// The machine is configured exactly as for encryption and turned to the
    /// key's stored initial position. Afterwards every `X` in the raw stream
    /// is replaced with a space and the result is title-cased. The `X`
    /// convention is lossy: a genuine `X` in the original plaintext is
    /// indistinguishable from an encoded space and comes back as one.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MissingInitialPosition`] if the key never
    /// recorded a position, or [`CipherError::Decryption`] if the machine
    /// fails.
    pub fn decrypt(&self, ciphertext: &str, key: &Key) -> Result<String, CipherError> {
        let position = key
            .initial_position()
            .ok_or(CipherError::MissingInitialPosition)?;

        let mut machine = self.backend.configure(key).map_err(CipherError::Decryption)?;
        machine.set_position(position);
        let raw = machine
            .process(&ciphertext.to_uppercase())
            .map_err(CipherError::Decryption)?;

        Ok(title_case(&raw.replace('X', " ")))
    }
}

/// Capitalizes the first letter of each whitespace-delimited word and
/// lowercases the rest, preserving the whitespace itself.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
