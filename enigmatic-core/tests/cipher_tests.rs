#![allow(missing_docs)]
//! Orchestrator tests against a stub machine.
//!
//! The stub substitutes each letter with its alphabet mirror (A<->Z, B<->Y,
//! ...), which is involutive like the real rotor machine, and replaces
//! non-letters with `X` the way the historical simulator does. This keeps
//! the core tests independent of the real machine crate.

use enigmatic_core::cipher::{Cipher, title_case};
use enigmatic_core::error::CipherError;
use enigmatic_core::key::{self, Key, Position, RawKey};
use enigmatic_core::machine::{CipherMachine, MachineBackend, MachineError};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct MirrorBackend;

struct MirrorMachine {
    position: Option<Position>,
}

impl CipherMachine for MirrorMachine {
    fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    fn process(&mut self, text: &str) -> Result<String, MachineError> {
        if self.position.is_none() {
            return Err(MachineError::Processing("no position set".to_string()));
        }
        Ok(text
            .chars()
            .map(|ch| {
                let ch = ch.to_ascii_uppercase();
                let ch = if ch.is_ascii_uppercase() { ch } else { 'X' };
                char::from(b'Z' - (ch as u8 - b'A'))
            })
            .collect())
    }
}

impl MachineBackend for MirrorBackend {
    type Machine = MirrorMachine;

    fn configure(&self, _key: &Key) -> Result<MirrorMachine, MachineError> {
        Ok(MirrorMachine { position: None })
    }
}

/// A backend whose configuration always fails.
struct BrokenBackend;

impl MachineBackend for BrokenBackend {
    type Machine = MirrorMachine;

    fn configure(&self, _key: &Key) -> Result<MirrorMachine, MachineError> {
        Err(MachineError::Configuration("jammed rotor".to_string()))
    }
}

fn test_key() -> Key {
    key::validate(&RawKey {
        rotors: vec!["I".into(), "II".into(), "III".into()],
        reflector: "B".into(),
        ring_settings: "1 1 1".into(),
        plugboard: String::new(),
        initial_position: None,
    })
    .unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn encrypt_attaches_a_position_without_touching_the_callers_key() {
    let cipher = Cipher::new(MirrorBackend);
    let mut rng = StdRng::seed_from_u64(1);
    let key = test_key();

    let encryption = cipher
        .encrypt(&mut rng, "HELLO", Some(key.clone()))
        .unwrap_or_else(|e| panic!("{e}"));

    // The caller's key is untouched; the returned one carries the position.
    assert!(key.initial_position().is_none());
    assert!(encryption.key.initial_position().is_some());
    assert_eq!(encryption.key.rotors(), key.rotors());
    assert_eq!(encryption.key.ring_settings(), key.ring_settings());
}

#[test]
fn encrypt_without_a_key_generates_one() {
    let cipher = Cipher::new(MirrorBackend);
    let mut rng = StdRng::seed_from_u64(2);

    let encryption = cipher
        .encrypt(&mut rng, "HELLO", None)
        .unwrap_or_else(|e| panic!("{e}"));

    assert!(encryption.key.initial_position().is_some());
    assert_eq!(encryption.ciphertext.len(), 5);
}

#[test]
fn round_trip_recovers_the_title_cased_plaintext() {
    let cipher = Cipher::new(MirrorBackend);
    let mut rng = StdRng::seed_from_u64(3);

    let encryption = cipher
        .encrypt(&mut rng, "ATTACK AT DAWN", Some(test_key()))
        .unwrap_or_else(|e| panic!("{e}"));
    let plaintext = cipher
        .decrypt(&encryption.ciphertext, &encryption.key)
        .unwrap_or_else(|e| panic!("{e}"));

    // Spaces were carried as X through the machine and restored on the way
    // out, then the words were title-cased.
    assert_eq!(plaintext, "Attack At Dawn");
}

#[test]
fn lowercase_plaintext_is_folded_before_processing() {
    let cipher = Cipher::new(MirrorBackend);
    let mut rng = StdRng::seed_from_u64(4);

    let upper = cipher
        .encrypt(&mut rng, "RUST", Some(test_key()))
        .unwrap_or_else(|e| panic!("{e}"));
    let mut rng = StdRng::seed_from_u64(4);
    let lower = cipher
        .encrypt(&mut rng, "rust", Some(test_key()))
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(upper.ciphertext, lower.ciphertext);
}

#[test]
fn decrypt_without_an_initial_position_is_rejected() {
    let cipher = Cipher::new(MirrorBackend);
    let err = cipher.decrypt("SVOOL", &test_key()).unwrap_err();
    assert!(matches!(err, CipherError::MissingInitialPosition));
}

#[test]
fn backend_failures_are_wrapped_per_direction() {
    let cipher = Cipher::new(BrokenBackend);
    let mut rng = StdRng::seed_from_u64(5);

    let err = cipher.encrypt(&mut rng, "HELLO", None).unwrap_err();
    assert!(matches!(err, CipherError::Encryption(_)));

    let positioned = test_key().with_position(Position::random(&mut rng));
    let err = cipher.decrypt("SVOOL", &positioned).unwrap_err();
    assert!(matches!(err, CipherError::Decryption(_)));
}

#[test]
fn title_case_capitalizes_each_whitespace_delimited_word() {
    assert_eq!(title_case("HELLO WORLD"), "Hello World");
    assert_eq!(title_case("hello  twice\tspaced"), "Hello  Twice\tSpaced");
    assert_eq!(title_case(""), "");
}
