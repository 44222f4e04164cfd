//! Hullvis Algorithmic Core
//!
//! Pure logic behind the hullvis demos: integer 2D geometry with the convex
//! hull builder, in-place raster operations, and the point motion
//! simulation. No image or OS dependencies live here.

pub mod geometry;
pub mod raster;
pub mod sim;

// Re-export commonly used types
pub use geometry::{ConvexHullBuilder, Point, convex_hull, cross_z};
pub use raster::threshold;
pub use sim::{PointCloud, SimConfig};
