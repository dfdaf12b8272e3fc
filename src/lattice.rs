//! Torus Lattice Point-Set
//!
//! A fixed, ordered set of 3D nodes sampled on a torus surface:
//! - 101 samples of θ over [0, 2π] (outer loop, both endpoints included)
//! - 10 samples of φ over [0, 2π] (inner loop, both endpoints included)
//! - 1010 points total; the first and last θ rows coincide
//!
//! The default lattice (R = 21, r = 13) is generated once per process and
//! shared read-only through a write-once cell. Consumers index into it by
//! position, so iteration order is part of the contract.

use crate::GOLDEN_RATIO;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::sync::OnceLock;

/// Number of nodes in the default lattice.
pub const NODE_COUNT: usize = 1010;

/// Offset added to distances in [`total_resonance`] so coincident points stay finite.
pub const RESONANCE_EPSILON: f64 = 1e-9;

static LATTICE: OnceLock<Vec<LatticePoint>> = OnceLock::new();

/// Errors from checked lattice lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeError::IndexOutOfRange { index, len } => {
                write!(f, "lattice index {index} out of range for {len} nodes")
            }
        }
    }
}

impl std::error::Error for LatticeError {}

/// A node of the lattice in 3D space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatticePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LatticePoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        LatticePoint { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &LatticePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Torus geometry and sampling resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TorusParams {
    /// Major radius R
    pub major_radius: f64,
    /// Minor radius r
    pub minor_radius: f64,
    /// Samples of θ (outer loop), endpoints inclusive
    pub major_steps: usize,
    /// Samples of φ (inner loop), endpoints inclusive
    pub minor_steps: usize,
}

impl Default for TorusParams {
    fn default() -> Self {
        TorusParams {
            major_radius: 21.0,
            minor_radius: 13.0,
            major_steps: 101,
            minor_steps: 10,
        }
    }
}

impl TorusParams {
    /// Self-intersecting horn torus (r > R), pinched at the origin.
    pub fn pinched() -> Self {
        TorusParams {
            major_radius: 1.0,
            minor_radius: GOLDEN_RATIO,
            ..Self::default()
        }
    }

    /// Total number of nodes this parametrization produces.
    pub fn node_count(&self) -> usize {
        self.major_steps * self.minor_steps
    }
}

/// Sample `steps` angles over [0, 2π] with both endpoints included.
fn angle(index: usize, steps: usize) -> f64 {
    if steps < 2 {
        return 0.0;
    }
    2.0 * PI * (index as f64 / (steps - 1) as f64)
}

/// Generate the lattice for the given parameters (uncached).
///
/// Row-major order: θ is the outer loop, φ the inner loop.
///
/// # Examples
///
/// ```
/// use latticesync::lattice::{generate, TorusParams};
///
/// let nodes = generate(&TorusParams::default());
/// assert_eq!(nodes.len(), 1010);
/// // θ = 0, φ = 0 sits on the outer equator
/// assert!((nodes[0].x - 34.0).abs() < 1e-12);
/// ```
pub fn generate(params: &TorusParams) -> Vec<LatticePoint> {
    let mut nodes = Vec::with_capacity(params.node_count());
    for i in 0..params.major_steps {
        let theta = angle(i, params.major_steps);
        let ring = params.major_radius + params.minor_radius * theta.cos();
        let z = params.minor_radius * theta.sin();
        for j in 0..params.minor_steps {
            let phi = angle(j, params.minor_steps);
            nodes.push(LatticePoint::new(ring * phi.cos(), ring * phi.sin(), z));
        }
    }
    nodes
}

/// The process-wide default lattice (R = 21, r = 13, 101 × 10 nodes).
///
/// Computed on first access and immutable afterwards; every call returns the
/// same slice.
///
/// # Examples
///
/// ```
/// use latticesync::lattice::lattice_points;
///
/// let a = lattice_points();
/// let b = lattice_points();
/// assert_eq!(a.len(), 1010);
/// assert!(std::ptr::eq(a, b));
/// ```
pub fn lattice_points() -> &'static [LatticePoint] {
    LATTICE.get_or_init(|| {
        let params = TorusParams::default();
        tracing::debug!(
            nodes = params.node_count(),
            major_radius = params.major_radius,
            minor_radius = params.minor_radius,
            "initializing resonance lattice"
        );
        generate(&params)
    })
}

/// Checked lookup into the default lattice.
pub fn lattice_point(index: usize) -> Result<LatticePoint, LatticeError> {
    let nodes = lattice_points();
    nodes
        .get(index)
        .copied()
        .ok_or(LatticeError::IndexOutOfRange {
            index,
            len: nodes.len(),
        })
}

/// Resonant frequency between two nodes: φ divided by their distance.
///
/// Coincident nodes resonate infinitely.
pub fn resonant_frequency(a: &LatticePoint, b: &LatticePoint) -> f64 {
    let distance = a.distance(b);
    if distance == 0.0 {
        return f64::INFINITY;
    }
    GOLDEN_RATIO / distance
}

/// Total resonance of a point against every node of a lattice.
pub fn total_resonance(point: &LatticePoint, nodes: &[LatticePoint]) -> f64 {
    nodes
        .iter()
        .map(|node| GOLDEN_RATIO / (node.distance(point) + RESONANCE_EPSILON))
        .sum()
}

/// Collapse a stream of 3D points into one resonance value per point.
pub fn collapse(points: &[LatticePoint], nodes: &[LatticePoint]) -> Vec<f64> {
    points.iter().map(|p| total_resonance(p, nodes)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_count_and_order() {
        let nodes = lattice_points();
        assert_eq!(nodes.len(), NODE_COUNT);

        // index = i * 10 + j; check θ = π (i = 50), φ = 0 -> inner equator
        let inner = nodes[50 * 10];
        assert!((inner.x - 8.0).abs() < 1e-9);
        assert!(inner.y.abs() < 1e-9);
        assert!(inner.z.abs() < 1e-9);

        // θ = π/2 (i = 25) sits on top of the tube
        let top = nodes[25 * 10 + 3];
        assert!((top.z - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_endpoint_rows_coincide() {
        let nodes = lattice_points();
        for j in 0..10 {
            let first = nodes[j];
            let last = nodes[100 * 10 + j];
            assert!(first.distance(&last) < 1e-9, "row mismatch at j={}", j);
        }
        // φ endpoints coincide within each row as well
        assert!(nodes[0].distance(&nodes[9]) < 1e-9);
    }

    #[test]
    fn test_points_lie_on_torus() {
        let params = TorusParams::default();
        for p in lattice_points() {
            let ring = (p.x * p.x + p.y * p.y).sqrt() - params.major_radius;
            let tube = (ring * ring + p.z * p.z).sqrt();
            assert!((tube - params.minor_radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cache_matches_fresh_generation() {
        let fresh = generate(&TorusParams::default());
        assert_eq!(fresh.as_slice(), lattice_points());
    }

    #[test]
    fn test_checked_lookup() {
        assert_eq!(lattice_point(0).unwrap(), lattice_points()[0]);
        assert_eq!(lattice_point(1009).unwrap(), lattice_points()[1009]);
        let err = lattice_point(1010).unwrap_err();
        assert_eq!(err, LatticeError::IndexOutOfRange { index: 1010, len: 1010 });
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_pinched_params() {
        let params = TorusParams::pinched();
        assert_eq!(params.node_count(), NODE_COUNT);
        let nodes = generate(&params);
        // θ = π collapses the ring to R - r < 0, through the origin region
        let p = nodes[50 * 10];
        assert!((p.x - (1.0 - GOLDEN_RATIO)).abs() < 1e-9);
    }

    #[test]
    fn test_resonant_frequency() {
        let a = LatticePoint::new(0.0, 0.0, 0.0);
        let b = LatticePoint::new(3.0, 4.0, 0.0);
        assert!((resonant_frequency(&a, &b) - GOLDEN_RATIO / 5.0).abs() < 1e-12);
        assert!(resonant_frequency(&a, &a).is_infinite());
    }

    #[test]
    fn test_collapse_one_value_per_point() {
        let nodes = generate(&TorusParams::pinched());
        let points = vec![
            LatticePoint::new(1.0, 1.1, 0.9),
            LatticePoint::new(5.0, 5.5, 4.5),
        ];
        let stream = collapse(&points, &nodes);
        assert_eq!(stream.len(), 2);
        assert!(stream.iter().all(|v| v.is_finite() && *v > 0.0));
        // nearer the lattice resonates more strongly
        assert!(stream[0] > stream[1]);
    }

    #[test]
    fn test_total_resonance_on_node_is_finite() {
        let nodes = lattice_points();
        let r = total_resonance(&nodes[0], nodes);
        assert!(r.is_finite());
        assert!(r > GOLDEN_RATIO);
    }
}
