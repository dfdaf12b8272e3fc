//! Discovery Gate
//!
//! Gates discoveries on a stability peak around 1/φ and matches the ones
//! that pass against a catalogue of products by nearest SHA-256 signature.

use crate::bands::{content_signature, Sector};
use crate::encoder::EncodedValue;
use crate::GOLDEN_RATIO;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Stability at the center of the peak window (1/φ).
pub const STABILITY_THRESHOLD: f64 = 1.0 / GOLDEN_RATIO;

/// Half-width of the peak window.
pub const PEAK_WINDOW: f64 = 0.05;

/// True when `stability` lies strictly within [`PEAK_WINDOW`] of 1/φ.
pub fn is_stability_peak(stability: f64) -> bool {
    (stability - STABILITY_THRESHOLD).abs() < PEAK_WINDOW
}

/// A science-sector reading at a stability peak bridges into industry.
pub fn resonance_bridge(stability: f64, sector: Sector) -> bool {
    sector == Sector::Science && is_stability_peak(stability)
}

fn abs_diff(a: &BigUint, b: &BigUint) -> BigUint {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

/// Index of the candidate closest to `target`. Ties go to the earliest.
///
/// # Examples
///
/// ```
/// use latticesync::discovery::nearest_signature;
/// use latticesync::EncodedValue;
///
/// let candidates = [EncodedValue::from(10u64), EncodedValue::from(40u64)];
/// assert_eq!(nearest_signature(&EncodedValue::from(30u64), &candidates), Some(1));
/// assert_eq!(nearest_signature(&EncodedValue::from(25u64), &candidates), Some(0));
/// assert_eq!(nearest_signature(&EncodedValue::from(1u64), std::iter::empty()), None);
/// ```
pub fn nearest_signature<'a, I>(target: &EncodedValue, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a EncodedValue>,
{
    let target = target.as_biguint();
    let mut best: Option<(usize, BigUint)> = None;
    for (index, candidate) in candidates.into_iter().enumerate() {
        let diff = abs_diff(target, candidate.as_biguint());
        let closer = match &best {
            Some((_, min)) => diff < *min,
            None => true,
        };
        if closer {
            best = Some((index, diff));
        }
    }
    best.map(|(index, _)| index)
}

/// A catalogue entry derived from a seed string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub seed: String,
    pub base_value: u64,
}

impl Product {
    pub fn new(name: impl Into<String>, seed: impl Into<String>, base_value: u64) -> Self {
        Product {
            name: name.into(),
            seed: seed.into(),
            base_value,
        }
    }

    /// Scaled value for a discovery of the given stability.
    pub fn market_potential(&self, stability: f64) -> f64 {
        self.base_value as f64 * (1.0 + stability)
    }
}

/// Outcome of a discovery that passed the stability gate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Match {
    pub product: Product,
    pub stability: f64,
    pub market_potential: f64,
}

/// Products with their precomputed seed signatures.
#[derive(Clone, Debug)]
pub struct Catalogue {
    products: Vec<Product>,
    signatures: Vec<EncodedValue>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Catalogue::new(vec![
            Product::new(
                "Axiomatic Encryption SDK",
                "secure_channel_protocol_v1.0_axiomatic",
                1_000_000,
            ),
            Product::new(
                "Torus Pinch Compression",
                "torus_pinch_data_compression_manifold",
                5_000_000,
            ),
            Product::new(
                "Resonant Database Engine",
                "categorical_resonance_database_sync",
                3_500_000,
            ),
        ])
    }
}

impl Catalogue {
    pub fn new(products: Vec<Product>) -> Self {
        let signatures = products
            .iter()
            .map(|p| content_signature(p.seed.as_bytes()))
            .collect();
        Catalogue {
            products,
            signatures,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product whose seed signature is nearest to the discovery's.
    pub fn best_match(&self, discovery: &[u8]) -> Option<&Product> {
        let signature = content_signature(discovery);
        nearest_signature(&signature, &self.signatures).map(|i| &self.products[i])
    }

    /// Gate a discovery on its stability, then match it.
    ///
    /// Returns `None` when the stability is off-peak or the catalogue is empty.
    pub fn process(&self, discovery: &[u8], stability: f64) -> Option<Match> {
        if !is_stability_peak(stability) {
            tracing::debug!(stability, "stability peak not detected");
            return None;
        }
        let product = self.best_match(discovery)?;
        tracing::debug!(product = %product.name, stability, "discovery matched");
        Some(Match {
            product: product.clone(),
            stability,
            market_potential: product.market_potential(stability),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_window() {
        assert!(is_stability_peak(STABILITY_THRESHOLD));
        assert!(is_stability_peak(0.57));
        assert!(is_stability_peak(0.66));
        assert!(!is_stability_peak(0.56));
        assert!(!is_stability_peak(0.7));
        assert!(!is_stability_peak(f64::NAN));
    }

    #[test]
    fn test_resonance_bridge_requires_science() {
        assert!(resonance_bridge(0.62, Sector::Science));
        assert!(!resonance_bridge(0.62, Sector::Health));
        assert!(!resonance_bridge(0.9, Sector::Science));
    }

    #[test]
    fn test_nearest_signature_prefers_first_on_tie() {
        let candidates = [
            EncodedValue::from(10u64),
            EncodedValue::from(30u64),
            EncodedValue::from(30u64),
        ];
        assert_eq!(nearest_signature(&EncodedValue::from(20u64), &candidates), Some(0));
        assert_eq!(nearest_signature(&EncodedValue::from(31u64), &candidates), Some(1));
    }

    #[test]
    fn test_seed_matches_its_own_product() {
        let catalogue = Catalogue::default();
        for product in catalogue.products() {
            let found = catalogue.best_match(product.seed.as_bytes()).unwrap();
            assert_eq!(found, product);
        }
    }

    #[test]
    fn test_process_gates_then_matches() {
        let catalogue = Catalogue::default();
        let discovery = b"A novel algorithm for prime number distribution analysis";

        assert!(catalogue.process(discovery, 0.9).is_none());

        let found = catalogue.process(discovery, STABILITY_THRESHOLD).unwrap();
        assert_eq!(found.product.name, "Axiomatic Encryption SDK");
        assert_eq!(found.market_potential, 1_000_000.0 * (1.0 + STABILITY_THRESHOLD));
    }

    #[test]
    fn test_empty_catalogue_has_no_match() {
        let catalogue = Catalogue::new(Vec::new());
        assert!(catalogue.process(b"anything", STABILITY_THRESHOLD).is_none());
    }
}
