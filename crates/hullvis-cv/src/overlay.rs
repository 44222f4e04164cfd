//! Software overlay rendering for the demo frames.

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use hullvis_core::Point;

use crate::region::Region;

pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const CYAN: Rgb<u8> = Rgb([0, 255, 255]);

/// Which overlay layers get drawn, and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    pub draw_points: bool,
    pub draw_vertices: bool,
    pub draw_edges: bool,
    pub point_radius: i32,
    pub vertex_radius: i32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            draw_points: true,
            draw_vertices: true,
            draw_edges: true,
            point_radius: 2,
            vertex_radius: 4,
        }
    }
}

/// Set a pixel if it lies inside the frame.
#[inline]
fn plot(frame: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < frame.width() && (y as u32) < frame.height() {
        frame.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line between two points, clipped to the frame.
pub fn draw_line(frame: &mut RgbImage, from: Point, to: Point, color: Rgb<u8>) {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (from.x, from.y);

    loop {
        plot(frame, x, y, color);
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Midpoint circle outline, clipped to the frame.
pub fn draw_circle(frame: &mut RgbImage, center: Point, radius: i32, color: Rgb<u8>) {
    if radius <= 0 {
        plot(frame, center.x, center.y, color);
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        for (px, py) in [
            (center.x + x, center.y + y),
            (center.x - x, center.y + y),
            (center.x + x, center.y - y),
            (center.x - x, center.y - y),
            (center.x + y, center.y + x),
            (center.x - y, center.y + x),
            (center.x + y, center.y - x),
            (center.x - y, center.y - x),
        ] {
            plot(frame, px, py, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Rectangle outline.
pub fn draw_rect(frame: &mut RgbImage, region: Region, color: Rgb<u8>) {
    if region.is_empty() {
        return;
    }
    let tl = Point::new(region.x, region.y);
    let tr = Point::new(region.x + region.width - 1, region.y);
    let bl = Point::new(region.x, region.y + region.height - 1);
    let br = Point::new(region.x + region.width - 1, region.y + region.height - 1);
    draw_line(frame, tl, tr, color);
    draw_line(frame, tr, br, color);
    draw_line(frame, br, bl, color);
    draw_line(frame, bl, tl, color);
}

/// Render the point cloud and its hull: small markers on every point,
/// edges between consecutive hull points with the closing edge back to the
/// start, and heavier markers on the hull vertices on top.
pub fn draw_hull(frame: &mut RgbImage, points: &[Point], hull: &[usize], config: &OverlayConfig) {
    if config.draw_points {
        for &p in points {
            draw_circle(frame, p, config.point_radius, RED);
        }
    }

    if config.draw_edges && hull.len() >= 2 {
        for (i, &idx) in hull.iter().enumerate() {
            let next = hull[(i + 1) % hull.len()];
            draw_line(frame, points[idx], points[next], RED);
        }
    }

    if config.draw_vertices {
        for &idx in hull {
            draw_circle(frame, points[idx], config.vertex_radius, GREEN);
        }
    }
}
