//! Golden Alignment
//!
//! Measures how a byte stream's structure relates to the golden ratio.
//! "Mass" is the byte sum, "flow" the total absolute delta between
//! neighbouring bytes. Their ratio, scaled by half the log-length, is folded
//! into the band [1, 2] by repeated division or multiplication by φ.

use crate::GOLDEN_RATIO;

/// Alignment of a byte stream, folded into [1, 2].
///
/// Degenerate inputs: empty -> 0.0, a single byte or a constant stream -> 1.0.
///
/// # Examples
///
/// ```
/// use latticesync::alignment::golden_alignment;
///
/// assert_eq!(golden_alignment(b""), 0.0);
/// assert_eq!(golden_alignment(b"aaaa"), 1.0);
/// let a = golden_alignment(b"fn main() { println!(\"phi\"); }");
/// assert!((1.0..=2.0).contains(&a));
/// ```
pub fn golden_alignment(bytes: &[u8]) -> f64 {
    if bytes.is_empty() {
        return 0.0;
    }
    if bytes.len() < 2 {
        return 1.0;
    }

    let mass: u64 = bytes.iter().map(|&b| u64::from(b)).sum();
    let flow: u64 = bytes
        .windows(2)
        .map(|w| u64::from(w[0].abs_diff(w[1])))
        .sum();
    if flow == 0 {
        return 1.0;
    }

    let raw = (mass as f64 / flow as f64) * ((bytes.len() as f64).ln() / 2.0);
    fold_into_band(raw)
}

/// Fold a positive ratio into [1, 2] by powers of φ.
fn fold_into_band(mut ratio: f64) -> f64 {
    if !(ratio.is_finite() && ratio > 0.0) {
        return 1.0;
    }
    while ratio > 2.0 {
        ratio /= GOLDEN_RATIO;
    }
    while ratio < 1.0 {
        ratio *= GOLDEN_RATIO;
    }
    ratio
}

/// Scanner that locks onto the first candidate aligned with φ.
#[derive(Clone, Debug, PartialEq)]
pub struct PhiLock {
    /// Maximum distance from φ that still counts as aligned
    pub tolerance: f64,
}

impl Default for PhiLock {
    fn default() -> Self {
        PhiLock { tolerance: 0.005 }
    }
}

impl PhiLock {
    pub fn new(tolerance: f64) -> Self {
        PhiLock { tolerance }
    }

    pub fn is_aligned(&self, bytes: &[u8]) -> bool {
        (golden_alignment(bytes) - GOLDEN_RATIO).abs() <= self.tolerance
    }

    /// Index of the first aligned candidate, if any.
    pub fn scan<I, T>(&self, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let found = candidates
            .into_iter()
            .position(|c| self.is_aligned(c.as_ref()));
        match found {
            Some(index) => tracing::debug!(index, "phi lock achieved"),
            None => tracing::debug!("no candidate aligned with phi"),
        }
        found
    }
}
