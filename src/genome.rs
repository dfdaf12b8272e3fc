//! Genome Signatures
//!
//! Deterministic reductions of DNA strings:
//! - nucleotide signature: `acc = acc × 4 + code` with A=1, T=2, C=3, G=4
//! - smash index: signature mod 1010, a position on the default lattice
//! - GC-content stability: share of G/C bases in the sequence
//!
//! Bases are matched case-insensitively; any other character is skipped by
//! the signature but still counts toward the stability denominator.

use crate::encoder::EncodedValue;
use crate::lattice::NODE_COUNT;
use num_bigint::BigUint;
use num_traits::Zero;

/// Nucleotide code, or `None` for characters outside {A, T, C, G}.
pub fn nucleotide_code(base: char) -> Option<u8> {
    match base.to_ascii_uppercase() {
        'A' => Some(1),
        'T' => Some(2),
        'C' => Some(3),
        'G' => Some(4),
        _ => None,
    }
}

/// Fold a DNA string into its nucleotide signature.
///
/// # Examples
///
/// ```
/// use latticesync::genome::sequence_signature;
///
/// // A=1, T=2 -> 1 * 4 + 2
/// assert_eq!(sequence_signature("at").to_string(), "6");
/// assert!(sequence_signature("").is_zero());
/// ```
pub fn sequence_signature(sequence: &str) -> EncodedValue {
    let mut acc = BigUint::zero();
    for code in sequence.chars().filter_map(nucleotide_code) {
        acc = (acc << 2u32) + code;
    }
    EncodedValue::from(acc)
}

/// Lattice position of a DNA string: its signature mod 1010.
pub fn smash_index(sequence: &str) -> usize {
    sequence_signature(sequence).residue(NODE_COUNT as u64) as usize
}

/// GC-content stability: (G + C count) ÷ character count.
///
/// An empty sequence has stability 0.
///
/// # Examples
///
/// ```
/// use latticesync::genome::gc_stability;
///
/// let s = gc_stability("AGATTACAGGAT");
/// assert!((s - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn gc_stability(sequence: &str) -> f64 {
    let mut total = 0usize;
    let mut gc = 0usize;
    for base in sequence.chars() {
        total += 1;
        if matches!(base.to_ascii_uppercase(), 'G' | 'C') {
            gc += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    gc as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_stability_agattacaggat() {
        // A,G,A,T,T,A,C,A,G,G,A,T -> G,C,G,G
        assert_eq!(gc_stability("AGATTACAGGAT"), 4.0 / 12.0);
    }

    #[test]
    fn test_gc_stability_edges() {
        assert_eq!(gc_stability(""), 0.0);
        assert_eq!(gc_stability("GCgc"), 1.0);
        assert_eq!(gc_stability("ATAT"), 0.0);
        // non-bases dilute the ratio
        assert_eq!(gc_stability("G-N-"), 0.25);
    }

    #[test]
    fn test_signature_skips_unknown_characters() {
        assert_eq!(sequence_signature("A-T"), sequence_signature("AT"));
        assert_eq!(sequence_signature("gattaca"), sequence_signature("GATTACA"));
    }

    #[test]
    fn test_signature_gattaca() {
        // G A T T A C A -> 4,1,2,2,1,3,1
        let expected = [4u64, 1, 2, 2, 1, 3, 1].iter().fold(0u64, |acc, &c| acc * 4 + c);
        assert_eq!(sequence_signature("GATTACA"), EncodedValue::from(expected));
        assert_eq!(smash_index("GATTACA"), (expected % 1010) as usize);
    }

    #[test]
    fn test_long_sequence_signature_is_exact() {
        let seq = "G".repeat(200);
        let sig = sequence_signature(&seq);
        // every step multiplies by 4, so the value needs roughly 2 bits per base
        assert!(sig.bits() >= 400);
        assert!(smash_index(&seq) < NODE_COUNT);
    }
}
