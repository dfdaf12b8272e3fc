//! LatticeSync - Deterministic Resonance Mapping
//!
//! Copyright (c) 2025 LatticeSync Contributors
//! Licensed under MIT License
//!
//! Folds arbitrary byte sequences into arbitrary-precision integers and
//! reduces them to bounded, reproducible display scalars and positions on a
//! fixed torus lattice.
//!
//! # Overview
//!
//! - [`encoder`]: big-endian base-256 fold of bytes into a bignum
//! - [`lattice`]: memoized 1010-node torus point set
//! - [`mapper`]: normalized scalar, angle/offsets, brightness, torque, lattice index
//! - [`genome`]: nucleotide signatures and GC-content stability
//! - [`bands`]: SHA-256 content frequency and sector classification
//! - [`alignment`]: golden-ratio alignment of byte streams
//! - [`discovery`]: stability-peak gate and nearest-signature catalogue match
//! - [`handshake`]: φ-salted 15-digit identity keys
//! - [`cli`]: command-line interface
//!
//! # Quick Start
//!
//! ```
//! use latticesync::{encode_str, map, lattice_points};
//!
//! let value = encode_str("Axiomatic Sync");
//! let resonance = map(&value);
//!
//! assert!((0.0..=1.0).contains(&resonance.normalized));
//! assert!((0.9..=1.0).contains(&resonance.brightness));
//! assert!(resonance.lattice_index < lattice_points().len());
//! ```

pub mod alignment;
pub mod bands;
pub mod cli;
pub mod discovery;
pub mod encoder;
pub mod genome;
pub mod handshake;
pub mod lattice;
pub mod mapper;

/// Golden ratio φ, used as a frequency multiplier.
pub const GOLDEN_RATIO: f64 = 1.61803398875;

/// Numerator of the exact rational form of [`GOLDEN_RATIO`].
pub const PHI_NUMERATOR: u64 = 161_803_398_875;

/// Denominator of the exact rational form of [`GOLDEN_RATIO`].
pub const PHI_DENOMINATOR: u64 = 100_000_000_000;

/// Golden angle π(3 − √5) in radians (≈137.5°).
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

// Re-export main types for convenience
pub use alignment::{golden_alignment, PhiLock};
pub use bands::{
    categorize, content_signature, glome_coordinates, mirror_signature, FrequencyBands, Sector,
};
pub use discovery::{is_stability_peak, nearest_signature, Catalogue, Product};
pub use encoder::{
    decode, decode_manifold, decode_utf8, encode, encode_manifold, encode_str, EncodedValue,
    ManifoldError, ManifoldPoint,
};
pub use genome::{gc_stability, sequence_signature, smash_index};
pub use handshake::omega_key;
pub use lattice::{
    generate, lattice_point, lattice_points, LatticeError, LatticePoint, TorusParams, NODE_COUNT,
};
pub use mapper::{map, map_bytes, Resonance, ResonanceConfig, ResonanceMapper};
