use itertools::{iproduct, Itertools};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::{
    conic::{ConicSection, Sign},
    math::{is_valid, Scalar},
    r2::R2,
};

pub const DEFAULT_PARTITIONS: usize = 100;
pub const DEFAULT_MAX_ITERATIONS: usize = 200;
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Roots kept per scan (per branch-sign combination), even when more sign changes are bracketed.
pub const MAX_ROOTS: usize = 2;

/// Knobs for the sampling-plus-bisection root finder behind [`intersect_conics`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectConfig {
    /// Number of equal sub-intervals `[xmin, xmax]` is split into before bracketing.
    pub partitions: usize,
    /// Bisection steps per bracket before giving up.
    pub max_iterations: usize,
    /// Convergence bound on `|G(x)|`, and the x-gap under which two roots are merged.
    pub epsilon: f64,
}

impl Default for IntersectConfig {
    fn default() -> Self {
        IntersectConfig {
            partitions: DEFAULT_PARTITIONS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Sign class of a sampled value. Zero counts as [`Bucket::Pos`]; anything non-finite is [`Bucket::NaN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Pos,
    Neg,
    NaN,
}

impl Bucket {
    pub fn of<D: Scalar>(v: D) -> Self {
        if !is_valid(v) {
            Bucket::NaN
        } else if v < D::zero() {
            Bucket::Neg
        } else {
            Bucket::Pos
        }
    }
}

/// Bisect the bracket `[lo, hi]` (whose buckets differ) until `|g(mid)| < ε`.
///
/// A NaN endpoint carries no ordering information, so a NaN midpoint always replaces the NaN endpoint, and a numeric
/// midpoint that matches neither endpoint replaces the NaN one. Returns `None` when `max_iterations` is exhausted (e.g.
/// the bracket straddles a domain boundary rather than a root) or when a NaN appears strictly inside a numeric bracket.
pub fn bisect<D: Scalar>(
    g: &impl Fn(D) -> D,
    lo: (D, Bucket),
    hi: (D, Bucket),
    max_iterations: usize,
    ε: D,
) -> Option<D> {
    let (mut lo, mut hi) = (lo, hi);
    let two = D::int(2);
    for _ in 0..max_iterations {
        let mid = (lo.0 + hi.0) / two;
        let v = g(mid);
        let bucket = Bucket::of(v);
        if bucket == Bucket::NaN {
            if lo.1 == Bucket::NaN {
                lo.0 = mid;
            } else if hi.1 == Bucket::NaN {
                hi.0 = mid;
            } else {
                debug!("bisect: NaN at {} inside numeric bracket [{}, {}]", mid, lo.0, hi.0);
                return None;
            }
            continue;
        }
        if v.abs() < ε {
            return Some(mid);
        }
        if bucket == lo.1 {
            lo.0 = mid;
        } else if bucket == hi.1 {
            hi.0 = mid;
        } else if lo.1 == Bucket::NaN {
            lo = (mid, bucket);
        } else {
            hi = (mid, bucket);
        }
    }
    debug!("bisect: no convergence in {} iterations, bracket [{}, {}] ({:?}, {:?})", max_iterations, lo.0, hi.0, lo.1, hi.1);
    None
}

/// Roots of `g` over `[xmin, xmax]`: sample `config.partitions + 1` evenly spaced points, bisect every adjacent pair
/// whose buckets differ, drop roots within `config.epsilon` of one already found, and stop after [`MAX_ROOTS`].
pub fn scan_roots<D: Scalar>(g: impl Fn(D) -> D, xmin: D, xmax: D, config: &IntersectConfig) -> Vec<D> {
    let ε = D::lit(config.epsilon);
    let n = config.partitions.max(1);
    let step = (xmax - xmin) / D::int(n as i32);
    let samples: Vec<(D, Bucket)> = (0..=n)
        .map(|i| xmin + step * D::int(i as i32))
        .map(|x| (x, Bucket::of(g(x))))
        .collect();
    let mut roots: Vec<D> = Vec::new();
    for (&lo, &hi) in samples.iter().tuple_windows() {
        if roots.len() >= MAX_ROOTS {
            break;
        }
        if lo.1 == hi.1 {
            continue;
        }
        trace!("scan_roots: bracket [{}, {}] ({:?}, {:?})", lo.0, hi.0, lo.1, hi.1);
        if let Some(x) = bisect(&g, lo, hi, config.max_iterations, ε) {
            if roots.iter().any(|r| (x - *r).abs() < ε) {
                debug!("scan_roots: dropping {}, within {} of an earlier root", x, ε);
            } else {
                roots.push(x);
            }
        }
    }
    roots
}

/// Points where `c1` and `c2` meet with `x ∈ [xmin, xmax]`.
///
/// Each of the four branch pairs `(s1, s2)` is scanned for roots of `G(x) = y(x, c1, s1) − y(x, c2, s2)`, and each root
/// becomes `(x, y(x, c1, s1))`. Points found by different branch pairs are not merged, so a tangency can be reported
/// more than once.
pub fn intersect_conics<D: Scalar>(
    c1: &ConicSection<D>,
    c2: &ConicSection<D>,
    xmin: D,
    xmax: D,
    config: &IntersectConfig,
) -> Vec<R2<D>> {
    let ε = D::lit(config.epsilon);
    let mut points = Vec::new();
    for (s1, s2) in iproduct!(Sign::ALL, Sign::ALL) {
        let g = |x: D| c1.branch_y(x, s1) - c2.branch_y(x, s2);
        let roots = scan_roots(g, xmin, xmax, config);
        debug!("intersect_conics: branches ({:?}, {:?}): roots {:?}", s1, s2, roots);
        for x in roots {
            let y = c1.branch_y(x, s1);
            let y2 = c2.branch_y(x, s2);
            let agree = (y - y2).abs() < ε;
            if !agree {
                warn!("intersect_conics: branches ({:?}, {:?}) disagree at x = {}: {} vs {}", s1, s2, x, y, y2);
            }
            debug_assert!(agree, "branch y mismatch at x = {}: {} vs {}", x, y, y2);
            points.push(R2 { x, y });
        }
    }
    points
}

impl<D: Scalar> ConicSection<D> {
    /// [`intersect_conics`] with the default [`IntersectConfig`].
    pub fn intersections(&self, other: &ConicSection<D>, xmin: D, xmax: D) -> Vec<R2<D>> {
        intersect_conics(self, other, xmin, xmax, &IntersectConfig::default())
    }
}
