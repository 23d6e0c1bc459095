//! Small geometric helpers shared by the path, boundary and engine.
//!
//! Distance and (extrapolating) linear interpolation come straight from
//! [`glam::Vec2`]; this module only adds what glam does not provide.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Midpoint of the segment `a`-`b`.
#[inline]
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Vertices of a regular polygon with `sides` corners.
///
/// Vertices are evenly spaced by `2π / sides`, starting at the top
/// (angle offset `-π/2`) and traversed in one consistent direction so the
/// result is a simple, non-self-intersecting ring.
///
/// ### Parameters
/// - `sides` - Number of corners; callers validate `sides >= 3`.
/// - `center` - Center of the polygon.
/// - `radius` - Distance from the center to every vertex.
pub fn regular_polygon(sides: usize, center: Vec2, radius: f32) -> Vec<Vec2> {
    let step = TAU / sides as f32;
    (0..sides)
        .map(|i| {
            let angle = -FRAC_PI_2 + step * i as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
