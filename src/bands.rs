//! Frequency Bands
//!
//! Categorizes content by an intrinsic frequency derived from its SHA-256
//! signature. Bands are successive powers of the golden ratio above a base:
//!
//! | Sector        | Range                          |
//! |---------------|--------------------------------|
//! | Science       | [base,      base·φ)            |
//! | Health        | [base·φ,    base·φ²)           |
//! | Industry      | [base·φ²,   base·φ³)           |
//! | Entertainment | [base·φ³,   base·φ⁴)           |
//! | Core          | anything else                  |
//!
//! Signatures can also be mirrored through φ and spread over four
//! base-1000 glome coordinates.

use crate::encoder::{encode, EncodedValue};
use num_bigint::BigUint;
use crate::GOLDEN_RATIO;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Categorical sector of the memory palace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Science,
    Health,
    Industry,
    Entertainment,
    Core,
}

impl Sector {
    /// Banded sectors in ascending frequency order.
    pub const BANDED: [Sector; 4] = [
        Sector::Science,
        Sector::Health,
        Sector::Industry,
        Sector::Entertainment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sector::Science => "Science",
            Sector::Health => "Health",
            Sector::Industry => "Industry",
            Sector::Entertainment => "Entertainment",
            Sector::Core => "Core",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// SHA-256 digest of the content read as a big-endian integer.
pub fn content_signature(bytes: &[u8]) -> EncodedValue {
    let digest = Sha256::digest(bytes);
    encode(&digest)
}

/// Mirror a signature through the golden ratio: floor(signature ÷ φ).
pub fn mirror_signature(signature: &EncodedValue) -> EncodedValue {
    signature.div_phi()
}

/// Four base-1000 digits of a signature, least significant first.
///
/// # Examples
///
/// ```
/// use latticesync::bands::glome_coordinates;
/// use latticesync::EncodedValue;
///
/// let coords = glome_coordinates(&EncodedValue::from(12_345_678_901_234u64));
/// assert_eq!(coords, [234, 901, 678, 345]);
/// ```
pub fn glome_coordinates(signature: &EncodedValue) -> [u16; 4] {
    let mut rest: BigUint = signature.as_biguint().clone();
    let mut coords = [0u16; 4];
    for coord in coords.iter_mut() {
        let digit = &rest % 1000u32;
        *coord = digit.iter_u32_digits().next().unwrap_or(0) as u16;
        rest /= 1000u32;
    }
    coords
}

/// Golden-ratio frequency bands above a base frequency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBands {
    pub base: f64,
}

impl Default for FrequencyBands {
    fn default() -> Self {
        FrequencyBands { base: 1000.0 }
    }
}

impl FrequencyBands {
    pub fn new(base: f64) -> Self {
        FrequencyBands { base }
    }

    /// Lower and upper bound of the band at `level` (0-based).
    pub fn band(&self, level: usize) -> (f64, f64) {
        let power = level as i32;
        (
            self.base * GOLDEN_RATIO.powi(power),
            self.base * GOLDEN_RATIO.powi(power + 1),
        )
    }

    /// Integer span that intrinsic frequencies are reduced into: floor(base·φ⁴).
    pub fn span(&self) -> u64 {
        (self.base * GOLDEN_RATIO.powi(4)) as u64
    }

    /// Intrinsic frequency of some content: signature mod span.
    ///
    /// # Examples
    ///
    /// ```
    /// use latticesync::bands::FrequencyBands;
    ///
    /// let bands = FrequencyBands::default();
    /// let f = bands.intrinsic_frequency(b"LatticeSync_Core.py");
    /// assert!(f >= 0.0 && f < bands.span() as f64);
    /// ```
    pub fn intrinsic_frequency(&self, bytes: &[u8]) -> f64 {
        let span = self.span();
        if span == 0 {
            return 0.0;
        }
        content_signature(bytes).residue(span) as f64
    }

    /// Sector whose band contains `frequency`.
    pub fn classify(&self, frequency: f64) -> Sector {
        Sector::BANDED
            .iter()
            .enumerate()
            .find(|(level, _)| {
                let (low, high) = self.band(*level);
                low <= frequency && frequency < high
            })
            .map(|(_, sector)| *sector)
            .unwrap_or(Sector::Core)
    }

    /// Frequency and sector of some content.
    pub fn categorize(&self, bytes: &[u8]) -> (f64, Sector) {
        let frequency = self.intrinsic_frequency(bytes);
        (frequency, self.classify(frequency))
    }
}

/// Categorize with the default bands.
pub fn categorize(bytes: &[u8]) -> (f64, Sector) {
    FrequencyBands::default().categorize(bytes)
}
