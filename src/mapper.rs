//! Resonance Mapper
//!
//! Reduces an [`EncodedValue`] to bounded display scalars:
//! - `normalized = (value mod 101) / 100`, in [0, 1]
//! - `angle = normalized × golden angle × k`, with offsets `cos/sin(angle) × d`
//! - `brightness = 0.9 + 0.1 × |sin(normalized × π × φ)|`, in [0.9, 1.0]
//! - `torque = |cos(normalized × π × φ)| × 100` rounded to 2 places, in [0, 100]
//! - `lattice_index = value mod 1010`, a valid index into the default lattice
//!
//! The modulo reductions happen in bignum arithmetic. Only the bounded
//! residues are converted to floating point.

use crate::encoder::{encode, EncodedValue};
use crate::lattice::{lattice_points, LatticePoint, NODE_COUNT};
use crate::{GOLDEN_ANGLE, GOLDEN_RATIO};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Modulus for the normalized scalar.
pub const NORMALIZE_MODULUS: u64 = 101;

/// Configuration for the display-offset derivation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResonanceConfig {
    /// Integer multiplier k applied to the golden angle
    pub angle_multiplier: u32,
    /// Distance d of the display offset from its origin
    pub offset_distance: f64,
}

impl Default for ResonanceConfig {
    fn default() -> Self {
        ResonanceConfig {
            angle_multiplier: 5,
            offset_distance: 10.0,
        }
    }
}

impl ResonanceConfig {
    /// Faster angular sweep (k = 10)
    pub fn wide() -> Self {
        ResonanceConfig {
            angle_multiplier: 10,
            ..Self::default()
        }
    }
}

/// Bounded scalars derived from one encoded value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Resonance {
    pub value: EncodedValue,
    pub normalized: f64,
    pub angle: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub brightness: f64,
    pub torque: f64,
    pub lattice_index: usize,
}

impl Resonance {
    /// The node of the default lattice selected by `lattice_index`.
    pub fn lattice_point(&self) -> LatticePoint {
        // lattice_index < NODE_COUNT by construction
        lattice_points()[self.lattice_index]
    }
}

/// Maps encoded values to [`Resonance`] reports.
#[derive(Clone, Debug, Default)]
pub struct ResonanceMapper {
    config: ResonanceConfig,
}

impl ResonanceMapper {
    pub fn new(config: ResonanceConfig) -> Self {
        ResonanceMapper { config }
    }

    pub fn config(&self) -> &ResonanceConfig {
        &self.config
    }

    /// Map an encoded value to its resonance scalars.
    ///
    /// # Examples
    ///
    /// ```
    /// use latticesync::{encode_str, ResonanceConfig, ResonanceMapper};
    ///
    /// let mapper = ResonanceMapper::new(ResonanceConfig::wide());
    /// let r = mapper.map(&encode_str("Axiomatic Sync"));
    /// assert_eq!(r.normalized, 0.25);
    /// assert_eq!(r.torque, 29.55);
    /// assert_eq!(r.lattice_index, 227);
    /// ```
    pub fn map(&self, value: &EncodedValue) -> Resonance {
        let normalized = normalize(value);
        let angle = normalized * GOLDEN_ANGLE * f64::from(self.config.angle_multiplier);
        let (sin, cos) = angle.sin_cos();
        let resonance = Resonance {
            value: value.clone(),
            normalized,
            angle,
            offset_x: cos * self.config.offset_distance,
            offset_y: sin * self.config.offset_distance,
            brightness: brightness(normalized),
            torque: torque(normalized),
            lattice_index: lattice_index(value),
        };
        tracing::trace!(
            normalized,
            torque = resonance.torque,
            lattice_index = resonance.lattice_index,
            "mapped value"
        );
        resonance
    }
}

/// `(value mod 101) / 100`
pub fn normalize(value: &EncodedValue) -> f64 {
    value.residue(NORMALIZE_MODULUS) as f64 / 100.0
}

/// `|cos(normalized × π × φ)| × 100`, rounded to two decimal places.
pub fn torque(normalized: f64) -> f64 {
    round2((normalized * PI * GOLDEN_RATIO).cos().abs() * 100.0)
}

/// `0.9 + 0.1 × |sin(normalized × π × φ)|`
pub fn brightness(normalized: f64) -> f64 {
    0.9 + 0.1 * (normalized * PI * GOLDEN_RATIO).sin().abs()
}

/// `value mod 1010`
pub fn lattice_index(value: &EncodedValue) -> usize {
    value.residue(NODE_COUNT as u64) as usize
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Map with the default configuration.
pub fn map(value: &EncodedValue) -> Resonance {
    ResonanceMapper::default().map(value)
}

/// Encode then map with the default configuration.
pub fn map_bytes(bytes: &[u8]) -> Resonance {
    map(&encode(bytes))
}
