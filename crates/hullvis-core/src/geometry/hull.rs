//! Convex hull construction over integer point sets.
//!
//! Angular sort around a lowest-point pivot followed by a single stack-style
//! pruning pass. The comparator works on cross-product signs only, so the
//! ordering is exact and free of floating-point tie-break drift.

use std::cmp::Ordering;

use super::{Point, cross_z};

/// Computes hull index lists, reusing its scratch allocation across calls.
///
/// The input slice is never reordered; results index into it as given.
/// Each call recomputes the hull from scratch, so the builder carries no
/// state between frames beyond spare capacity.
#[derive(Debug, Default)]
pub struct ConvexHullBuilder {
    indices: Vec<usize>,
}

impl ConvexHullBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the convex hull of `points`, returned as indices into the
    /// slice in a consistent angular walk order starting at the pivot (the
    /// first point with minimum y).
    ///
    /// With three or more non-collinear points the result traces a strictly
    /// convex polygon containing every input point: collinear edge points
    /// and interior points are excluded. Degenerate inputs (empty, single,
    /// all-identical, all-collinear) yield 0, 1 or 2 indices.
    pub fn compute(&mut self, points: &[Point]) -> &[usize] {
        self.indices.clear();
        if points.is_empty() {
            return &self.indices;
        }

        self.indices.extend(0..points.len());

        // Pivot: minimum y, first occurrence on ties.
        let pivot_pos = points
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.y)
            .map(|(i, _)| i)
            .expect("points is non-empty");
        self.indices.swap(0, pivot_pos);

        let pivot_idx = self.indices[0];
        let pivot = points[pivot_idx];

        // Duplicates of the pivot have no defined angle around it; drop
        // them before sorting. Duplicates of other points are kept.
        self.indices.retain(|&i| i == pivot_idx || points[i] != pivot);

        if self.indices.len() < 3 {
            return &self.indices;
        }

        self.indices[1..].sort_by(|&a, &b| polar_cmp(pivot, points[a], points[b]));

        // Pruning pass: keep only strict corners. Z >= 0 at the middle
        // point of a triple means collinear-or-wrong-turn, so the middle
        // point is dropped and the previous corner is re-examined.
        let mut kept = 2;
        for scan in 2..self.indices.len() {
            let candidate = self.indices[scan];
            while kept >= 2 {
                let prev = points[self.indices[kept - 2]];
                let current = points[self.indices[kept - 1]];
                if cross_z(prev, current, points[candidate]) >= 0 {
                    kept -= 1;
                } else {
                    break;
                }
            }
            self.indices[kept] = candidate;
            kept += 1;
        }

        // Closing edge back to the pivot.
        while kept >= 3 {
            let prev = points[self.indices[kept - 2]];
            let current = points[self.indices[kept - 1]];
            if cross_z(prev, current, points[self.indices[0]]) >= 0 {
                kept -= 1;
            } else {
                break;
            }
        }

        self.indices.truncate(kept);
        &self.indices
    }
}

/// One-shot convex hull; see [`ConvexHullBuilder::compute`].
pub fn convex_hull(points: &[Point]) -> Vec<usize> {
    ConvexHullBuilder::new().compute(points).to_vec()
}

/// Ordering of two points by polar angle around `pivot`.
///
/// Candidates on opposite sides of the vertical axis through the pivot (or
/// with either on the axis itself) are ordered by their x offsets alone,
/// which handles the wrap-around at the axis. Candidates strictly on the
/// same side are ordered by the sign of their cross product: negative means
/// `p` precedes `q`. Both branches are sign tests on i64 products.
fn polar_cmp(pivot: Point, p: Point, q: Point) -> Ordering {
    let ax = p.x as i64 - pivot.x as i64;
    let ay = p.y as i64 - pivot.y as i64;
    let bx = q.x as i64 - pivot.x as i64;
    let by = q.y as i64 - pivot.y as i64;

    if ax * bx <= 0 {
        ax.cmp(&bx)
    } else {
        (ax * by - ay * bx).cmp(&0)
    }
}
