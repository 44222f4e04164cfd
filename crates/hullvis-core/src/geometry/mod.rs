//! Integer 2D geometry primitives shared by the hull builder and the demos.

pub mod hull;

pub use hull::{ConvexHullBuilder, convex_hull};

use serde::{Deserialize, Serialize};

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Z component of the cross product of the edge vectors (b - a) and (c - a).
///
/// Positive for a left turn at `b`, negative for a right turn, zero when
/// the three points are collinear. Products are taken in i64 so i32
/// coordinates cannot overflow.
pub fn cross_z(a: Point, b: Point, c: Point) -> i64 {
    let abx = b.x as i64 - a.x as i64;
    let aby = b.y as i64 - a.y as i64;
    let acx = c.x as i64 - a.x as i64;
    let acy = c.y as i64 - a.y as i64;
    abx * acy - aby * acx
}
