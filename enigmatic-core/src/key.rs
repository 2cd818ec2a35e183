//! Key material for the rotor cipher.
//!
//! A [`Key`] can only be obtained from [`generate`] or [`validate`], so a
//! value of this type always satisfies the combinatorial key constraints:
//! three distinct rotors, a known reflector, ring settings within 1-26, and a
//! plugboard whose pairs never share a letter. Keys serialize through
//! [`RawKey`], the JSON shape used by key files, and deserializing a key runs
//! the same validation.

use crate::error::KeyError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Historical plugboards max out at ten wired pairs.
const MAX_PLUG_PAIRS: usize = 10;

/// One of the five historical rotors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotor {
    /// Rotor I.
    I,
    /// Rotor II.
    II,
    /// Rotor III.
    III,
    /// Rotor IV.
    IV,
    /// Rotor V.
    V,
}

impl Rotor {
    /// Every rotor available to the key generator.
    pub const ALL: [Self; 5] = [Self::I, Self::II, Self::III, Self::IV, Self::V];
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
        };
        f.write_str(name)
    }
}

impl FromStr for Rotor {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" => Ok(Self::I),
            "II" => Ok(Self::II),
            "III" => Ok(Self::III),
            "IV" => Ok(Self::IV),
            "V" => Ok(Self::V),
            other => Err(KeyError::UnknownRotor(other.to_string())),
        }
    }
}

/// One of the two historical reflectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reflector {
    /// Reflector B.
    B,
    /// Reflector C.
    C,
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::B => "B",
            Self::C => "C",
        })
    }
}

impl FromStr for Reflector {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            other => Err(KeyError::UnknownReflector(other.to_string())),
        }
    }
}

/// A plugboard pair: two distinct letters swapped before and after the
/// rotor stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlugPair(char, char);

impl PlugPair {
    /// The two letters wired together, always ASCII uppercase.
    #[must_use]
    pub const fn letters(&self) -> (char, char) {
        (self.0, self.1)
    }
}

impl fmt::Display for PlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// The rotor display at the start of a message: three uppercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position([char; 3]);

impl Position {
    /// Draws a uniformly random display position.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| {
            char::from(b'A' + rng.random_range(0..26))
        }))
    }

    /// The three display letters, left to right.
    #[must_use]
    pub const fn letters(&self) -> [char; 3] {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for Position {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.chars().collect();
        if letters.len() != 3 || letters.iter().any(|c| !c.is_ascii_alphabetic()) {
            return Err(KeyError::InvalidPosition(s.to_string()));
        }
        Ok(Self([
            letters[0].to_ascii_uppercase(),
            letters[1].to_ascii_uppercase(),
            letters[2].to_ascii_uppercase(),
        ]))
    }
}

/// A complete, validated cipher key.
///
/// The `initial_position` starts out absent and is attached exactly once,
/// when the orchestrator encrypts a message with this key. A key without it
/// can encrypt (a fresh position is drawn) but can never decrypt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawKey", try_from = "RawKey")]
pub struct Key {
    rotors: [Rotor; 3],
    reflector: Reflector,
    ring_settings: [u8; 3],
    plugboard: Vec<PlugPair>,
    initial_position: Option<Position>,
}

impl Key {
    /// The three rotors, in order from the leftmost (slowest) slot.
    #[must_use]
    pub const fn rotors(&self) -> [Rotor; 3] {
        self.rotors
    }

    /// The reflector.
    #[must_use]
    pub const fn reflector(&self) -> Reflector {
        self.reflector
    }

    /// The ring settings, positionally aligned with [`Self::rotors`],
    /// each between 1 and 26.
    #[must_use]
    pub const fn ring_settings(&self) -> [u8; 3] {
        self.ring_settings
    }

    /// The plugboard pairs. No letter appears in two pairs.
    #[must_use]
    pub fn plugboard(&self) -> &[PlugPair] {
        &self.plugboard
    }

    /// The rotor display recorded when this key encrypted a message, if any.
    #[must_use]
    pub const fn initial_position(&self) -> Option<Position> {
        self.initial_position
    }

    /// Returns a copy of this key carrying the given initial position.
    ///
    /// The orchestrator returns the positioned key as a new value instead of
    /// mutating the caller's copy; the caller decides which one to keep.
    #[must_use]
    pub fn with_position(&self, position: Position) -> Self {
        Self {
            initial_position: Some(position),
            ..self.clone()
        }
    }
}

/// The JSON wire form of a key, as stored in key files.
///
/// `ring_settings` is a space-separated string of three integers and
/// `plugboard` a space-separated string of letter pairs (possibly empty),
/// matching the key sheets the original tool exchanged. Convert to a typed
/// [`Key`] with [`validate`] or `TryFrom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawKey {
    /// Rotor identifiers, left to right, e.g. `["IV", "I", "III"]`.
    pub rotors: Vec<String>,
    /// Reflector identifier, `"B"` or `"C"`.
    pub reflector: String,
    /// Space-separated ring settings, e.g. `"7 2 26"`.
    pub ring_settings: String,
    /// Space-separated plugboard pairs, e.g. `"AB CD"`. May be empty.
    #[serde(default)]
    pub plugboard: String,
    /// Three-letter initial rotor display; present only after an encryption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_position: Option<String>,
}

impl From<Key> for RawKey {
    fn from(key: Key) -> Self {
        Self {
            rotors: key.rotors.iter().map(ToString::to_string).collect(),
            reflector: key.reflector.to_string(),
            ring_settings: key
                .ring_settings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            plugboard: key
                .plugboard
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            initial_position: key.initial_position.map(|p| p.to_string()),
        }
    }
}

impl TryFrom<RawKey> for Key {
    type Error = KeyError;

    fn try_from(raw: RawKey) -> Result<Self, Self::Error> {
        validate(&raw)
    }
}

/// Generates a random key.
///
/// Rotor order is the sample order (order is significant: it assigns rotors
/// to slots), ring settings are drawn independently, and the plugboard is a
/// random disjoint pairing capped at ten pairs. The generated key carries no
/// initial position; one is attached when the key first encrypts.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Key {
    let mut rotor_pool = Rotor::ALL.to_vec();
    rotor_pool.shuffle(rng);

    let reflector = if rng.random_bool(0.5) {
        Reflector::B
    } else {
        Reflector::C
    };

    let ring_settings = std::array::from_fn(|_| rng.random_range(1..=26));

    let mut letters: Vec<char> = ('A'..='Z').collect();
    letters.shuffle(rng);
    let mut plugboard = Vec::with_capacity(MAX_PLUG_PAIRS);
    while letters.len() > 1 && plugboard.len() < MAX_PLUG_PAIRS {
        if let (Some(a), Some(b)) = (letters.pop(), letters.pop()) {
            plugboard.push(PlugPair(a, b));
        }
    }

    Key {
        rotors: [rotor_pool[0], rotor_pool[1], rotor_pool[2]],
        reflector,
        ring_settings,
        plugboard,
        initial_position: None,
    }
}

/// Validates a candidate key against the key constraints.
///
/// Constraints are checked in a fixed order (rotors, reflector, ring
/// settings, plugboard, position) and the first violation is returned; a
/// valid candidate comes back as a typed [`Key`] with its initial position
/// preserved when present.
pub fn validate(raw: &RawKey) -> Result<Key, KeyError> {
    if raw.rotors.len() != 3 {
        return Err(KeyError::RotorCount {
            found: raw.rotors.len(),
        });
    }
    let mut rotors = [Rotor::I; 3];
    for (slot, name) in rotors.iter_mut().zip(&raw.rotors) {
        *slot = name.parse()?;
    }
    for (i, rotor) in rotors.iter().enumerate() {
        if rotors[..i].contains(rotor) {
            return Err(KeyError::DuplicateRotor(rotor.to_string()));
        }
    }

    let reflector: Reflector = raw.reflector.parse()?;

    let fields: Vec<&str> = raw.ring_settings.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(KeyError::RingSettingCount {
            found: fields.len(),
        });
    }
    let mut ring_settings = [0u8; 3];
    for (slot, field) in ring_settings.iter_mut().zip(&fields) {
        *slot = field
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=26).contains(n))
            .ok_or_else(|| KeyError::InvalidRingSetting((*field).to_string()))?;
    }

    let mut plugboard = Vec::new();
    let mut wired: Vec<char> = Vec::new();
    for entry in raw.plugboard.split_whitespace() {
        let letters: Vec<char> = entry.chars().collect();
        if letters.len() != 2 || letters.iter().any(|c| !c.is_ascii_alphabetic()) {
            return Err(KeyError::InvalidPlugPair(entry.to_string()));
        }
        let a = letters[0].to_ascii_uppercase();
        let b = letters[1].to_ascii_uppercase();
        if a == b {
            return Err(KeyError::InvalidPlugPair(entry.to_string()));
        }
        for letter in [a, b] {
            if wired.contains(&letter) {
                return Err(KeyError::DuplicatePlugLetter(letter));
            }
            wired.push(letter);
        }
        plugboard.push(PlugPair(a, b));
    }

    let initial_position = match &raw.initial_position {
        Some(s) => Some(s.parse()?),
        None => None,
    };

    Ok(Key {
        rotors,
        reflector,
        ring_settings,
        plugboard,
        initial_position,
    })
}
