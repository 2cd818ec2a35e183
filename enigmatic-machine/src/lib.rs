//! # Enigmatic Machine
//!
//! A simulator for the historical electromechanical rotor cipher, plugged
//! into `enigmatic-core` through its machine traits. It reproduces the
//! classic behavior the orchestrator relies on: the substitution is
//! self-inverse under matching configuration and starting position, rotors
//! step before every key press with the double-step anomaly, and non-letter
//! input is substituted with `X` before enciphering.

use enigmatic_core::key::{Key, Position, Reflector};
use enigmatic_core::machine::{CipherMachine, MachineBackend, MachineError};
use log::debug;

mod rotor;

use rotor::Scrambler;

/// The letter substituted for any non-A-Z input character.
const REPLACEMENT: u8 = b'X' - b'A';

const fn reflector_wiring(reflector: Reflector) -> &'static str {
    match reflector {
        Reflector::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
        Reflector::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    }
}

/// Builds [`RotorMachine`]s from validated keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl MachineBackend for Simulator {
    type Machine = RotorMachine;

    fn configure(&self, key: &Key) -> Result<RotorMachine, MachineError> {
        debug!(
            "configuring machine: rotors {:?}, reflector {}, rings {:?}, {} plug pairs",
            key.rotors(),
            key.reflector(),
            key.ring_settings(),
            key.plugboard().len()
        );
        Ok(RotorMachine::from_key(key))
    }
}

/// A configured three-rotor machine with reflector and plugboard.
pub struct RotorMachine {
    left: Scrambler,
    middle: Scrambler,
    right: Scrambler,
    reflector: [u8; 26],
    plugboard: [u8; 26],
}

impl RotorMachine {
    fn from_key(key: &Key) -> Self {
        let rotors = key.rotors();
        let rings = key.ring_settings();

        let mut plugboard = [0u8; 26];
        for (i, slot) in plugboard.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for pair in key.plugboard() {
            let (a, b) = pair.letters();
            let a = a as u8 - b'A';
            let b = b as u8 - b'A';
            plugboard[a as usize] = b;
            plugboard[b as usize] = a;
        }

        let (reflector, _) = rotor::wiring_tables(reflector_wiring(key.reflector()));

        Self {
            left: Scrambler::new(rotors[0], rings[0]),
            middle: Scrambler::new(rotors[1], rings[1]),
            right: Scrambler::new(rotors[2], rings[2]),
            reflector,
            plugboard,
        }
    }

    /// Advances the rotors as a key press would, including the double step:
    /// a middle rotor sitting on its notch steps itself and the left rotor.
    fn step_rotors(&mut self) {
        if self.middle.at_notch() {
            self.left.step();
            self.middle.step();
        } else if self.right.at_notch() {
            self.middle.step();
        }
        self.right.step();
    }

    /// Enciphers one letter index: steps the rotors, then runs the signal
    /// through plugboard, rotors, reflector, and back.
    fn key_press(&mut self, letter: u8) -> u8 {
        self.step_rotors();
        let c = self.plugboard[letter as usize];
        let c = self.right.ahead(c);
        let c = self.middle.ahead(c);
        let c = self.left.ahead(c);
        let c = self.reflector[c as usize];
        let c = self.left.behind(c);
        let c = self.middle.behind(c);
        let c = self.right.behind(c);
        self.plugboard[c as usize]
    }
}

impl CipherMachine for RotorMachine {
    fn set_position(&mut self, position: Position) {
        let [left, middle, right] = position.letters();
        self.left.set_position(left as u8 - b'A');
        self.middle.set_position(middle as u8 - b'A');
        self.right.set_position(right as u8 - b'A');
    }

    fn process(&mut self, text: &str) -> Result<String, MachineError> {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            let ch = ch.to_ascii_uppercase();
            let letter = if ch.is_ascii_uppercase() {
                ch as u8 - b'A'
            } else {
                REPLACEMENT
            };
            out.push(char::from(b'A' + self.key_press(letter)));
        }
        Ok(out)
    }
}
