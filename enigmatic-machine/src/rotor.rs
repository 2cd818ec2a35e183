//! A single mounted rotor: historical wiring, ring setting, and stepping.

use enigmatic_core::key::Rotor;

/// Historical wiring and turnover notch for each rotor.
const fn rotor_data(rotor: Rotor) -> (&'static str, u8) {
    match rotor {
        Rotor::I => ("EKMFLGDQVZNTOWYHXUSPAIBRCJ", b'Q' - b'A'),
        Rotor::II => ("AJDKSIRUXBLHWTMCQGZNPYFVOE", b'E' - b'A'),
        Rotor::III => ("BDFHJLCPRTXVZNYEIWGAKMUSQO", b'V' - b'A'),
        Rotor::IV => ("ESOVPZJAYQUIRHXLNFTGKDCMWB", b'J' - b'A'),
        Rotor::V => ("VZBRGITYUPSDNHLXAWMJQOFECK", b'Z' - b'A'),
    }
}

/// Builds the forward and inverse contact tables from a wiring alphabet.
pub(crate) fn wiring_tables(alphabet: &str) -> ([u8; 26], [u8; 26]) {
    let mut forward = [0u8; 26];
    let mut inverse = [0u8; 26];
    for (entry, byte) in alphabet.bytes().enumerate() {
        let exit = byte - b'A';
        forward[entry] = exit;
        inverse[exit as usize] = entry as u8;
    }
    (forward, inverse)
}

/// One rotor mounted in a slot, tracking its display position.
///
/// Contacts are letter indices 0..26. The ring setting offsets the wiring
/// relative to the display, so two rotors at the same display letter but
/// different ring settings scramble differently.
pub(crate) struct Scrambler {
    forward: [u8; 26],
    inverse: [u8; 26],
    notch: u8,
    ring: u8,
    position: u8,
}

impl Scrambler {
    /// Mounts `rotor` with a 1-based ring setting, displaying 'A'.
    pub(crate) fn new(rotor: Rotor, ring_setting: u8) -> Self {
        let (wiring, notch) = rotor_data(rotor);
        let (forward, inverse) = wiring_tables(wiring);
        Self {
            forward,
            inverse,
            notch,
            ring: ring_setting - 1,
            position: 0,
        }
    }

    /// Turns the rotor so the given letter index shows in the window.
    pub(crate) const fn set_position(&mut self, position: u8) {
        self.position = position;
    }

    /// Whether the displayed letter sits on the turnover notch.
    pub(crate) const fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Advances the rotor by one place.
    pub(crate) const fn step(&mut self) {
        self.position = (self.position + 1) % 26;
    }

    /// Offset between the entry contacts and the wiring core.
    const fn shift(&self) -> u8 {
        (26 + self.position - self.ring) % 26
    }

    /// Carries a signal from the entry side through the wiring.
    pub(crate) const fn ahead(&self, contact: u8) -> u8 {
        let shift = self.shift();
        let entry = (contact + shift) % 26;
        (self.forward[entry as usize] + 26 - shift) % 26
    }

    /// Carries a signal back from the reflector side through the wiring.
    pub(crate) const fn behind(&self, contact: u8) -> u8 {
        let shift = self.shift();
        let entry = (contact + shift) % 26;
        (self.inverse[entry as usize] + 26 - shift) % 26
    }
}
