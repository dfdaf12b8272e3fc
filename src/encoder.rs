//! Byte-Sequence Encoder
//!
//! Folds a byte sequence into a single non-negative arbitrary-precision
//! integer using big-endian positional base-256 encoding:
//! - `encode([])` is exactly zero
//! - each byte shifts the accumulator left by 8 bits and ORs itself in
//! - leading zero bytes carry no information (`[0x00, 0x41]` == `[0x41]`)
//!
//! A value can also be spread into a manifold triple `(v·φ, v/φ, v)`. The
//! scaled axes are computed with the exact rational form of φ, so decoding
//! can verify a triple without any floating-point conversion.

use crate::{PHI_DENOMINATOR, PHI_NUMERATOR};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Serialize, Serializer};
use std::fmt;
use std::string::FromUtf8Error;

/// Arbitrary-precision non-negative integer produced by [`encode`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodedValue(BigUint);

impl EncodedValue {
    /// Zero, the encoding of the empty sequence.
    pub fn zero() -> Self {
        EncodedValue(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Borrow the underlying big integer.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Reduce modulo a small positive integer.
    ///
    /// The reduction is carried out in bignum arithmetic; only the bounded
    /// remainder is ever converted to a machine integer.
    ///
    /// # Panics
    /// Panics if `modulus` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use latticesync::encoder::encode;
    ///
    /// let v = encode(b"\x01\x00");
    /// assert_eq!(v.residue(101), 256 % 101);
    /// ```
    pub fn residue(&self, modulus: u64) -> u64 {
        let rem = &self.0 % BigUint::from(modulus);
        // rem < modulus <= u64::MAX, so it has at most one 64-bit digit
        rem.iter_u64_digits().next().unwrap_or(0)
    }

    /// Number of significant bits (zero for the empty encoding).
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// The value multiplied by 256, i.e. the encoding of the same bytes
    /// followed by a trailing zero byte.
    pub fn scaled_by_byte(&self) -> Self {
        EncodedValue(&self.0 << 8u32)
    }

    /// floor(value × φ)
    pub fn mul_phi(&self) -> Self {
        EncodedValue(&self.0 * PHI_NUMERATOR / PHI_DENOMINATOR)
    }

    /// floor(value ÷ φ)
    ///
    /// ```
    /// use latticesync::EncodedValue;
    ///
    /// assert_eq!(EncodedValue::from(1_000_000u64).div_phi().to_string(), "618033");
    /// ```
    pub fn div_phi(&self) -> Self {
        EncodedValue(&self.0 * PHI_DENOMINATOR / PHI_NUMERATOR)
    }
}

impl From<BigUint> for EncodedValue {
    fn from(value: BigUint) -> Self {
        EncodedValue(value)
    }
}

impl From<u64> for EncodedValue {
    fn from(value: u64) -> Self {
        EncodedValue(BigUint::from(value))
    }
}

impl fmt::Display for EncodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Serializes as a decimal string.
impl Serialize for EncodedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Encode a byte sequence into an [`EncodedValue`].
///
/// Equivalent to starting from zero and computing `acc = acc * 256 + byte`
/// for every byte in input order. Never fails and never overflows.
///
/// # Examples
///
/// ```
/// use latticesync::encoder::encode;
///
/// assert!(encode(&[]).is_zero());
/// assert_eq!(encode(&[0x01, 0x00]), encode(&[0x01]).scaled_by_byte());
/// assert_eq!(encode(&[0x00, 0x41]).to_string(), "65");
/// ```
pub fn encode(bytes: &[u8]) -> EncodedValue {
    // from_bytes_be is the same big-endian base-256 fold, and yields zero for
    // an empty slice
    EncodedValue(BigUint::from_bytes_be(bytes))
}

/// Encode the UTF-8 bytes of a string.
pub fn encode_str(text: &str) -> EncodedValue {
    encode(text.as_bytes())
}

/// Recover the minimal big-endian byte string for an encoded value.
///
/// Zero decodes to an empty vector. Leading zero bytes of the original input
/// cannot be recovered.
///
/// # Examples
///
/// ```
/// use latticesync::encoder::{decode, encode};
///
/// assert_eq!(decode(&encode(b"torus")), b"torus");
/// assert_eq!(decode(&encode(b"\x00A")), b"A");
/// assert!(decode(&encode(b"")).is_empty());
/// ```
pub fn decode(value: &EncodedValue) -> Vec<u8> {
    if value.is_zero() {
        return Vec::new();
    }
    value.0.to_bytes_be()
}

/// Decode an encoded value back into a UTF-8 string.
pub fn decode_utf8(value: &EncodedValue) -> Result<String, FromUtf8Error> {
    String::from_utf8(decode(value))
}

/// Axis of a [`ManifoldPoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors from [`decode_manifold`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManifoldError {
    /// A scaled axis does not hold `z` scaled by φ.
    RatioMismatch { axis: Axis },
    /// The recovered bytes are not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for ManifoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifoldError::RatioMismatch { axis } => {
                write!(f, "manifold {axis} coordinate does not conform to the golden ratio")
            }
            ManifoldError::InvalidUtf8 => write!(f, "manifold value is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ManifoldError {}

/// Coordinate triple `(z·φ, z/φ, z)`; `z` carries the value losslessly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManifoldPoint {
    pub x: EncodedValue,
    pub y: EncodedValue,
    pub z: EncodedValue,
}

impl ManifoldPoint {
    pub fn from_value(value: EncodedValue) -> Self {
        ManifoldPoint {
            x: value.mul_phi(),
            y: value.div_phi(),
            z: value,
        }
    }

    /// Check both scaled axes against `z`.
    pub fn verify(&self) -> Result<(), ManifoldError> {
        if self.x != self.z.mul_phi() {
            return Err(ManifoldError::RatioMismatch { axis: Axis::X });
        }
        if self.y != self.z.div_phi() {
            return Err(ManifoldError::RatioMismatch { axis: Axis::Y });
        }
        Ok(())
    }
}

/// Encode a string as a manifold triple.
///
/// # Examples
///
/// ```
/// use latticesync::encoder::{decode_manifold, encode_manifold};
///
/// let point = encode_manifold("Jan Sloot");
/// assert_eq!(decode_manifold(&point).unwrap(), "Jan Sloot");
/// ```
pub fn encode_manifold(text: &str) -> ManifoldPoint {
    ManifoldPoint::from_value(encode_str(text))
}

/// Verify a manifold triple and recover its string.
pub fn decode_manifold(point: &ManifoldPoint) -> Result<String, ManifoldError> {
    point.verify()?;
    decode_utf8(&point.z).map_err(|_| ManifoldError::InvalidUtf8)
}
