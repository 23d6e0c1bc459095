//! The fixed containment polygon.

use crate::geometry;
use glam::Vec2;

/// A simple closed polygon, fixed for the lifetime of one growth run.
///
/// The last vertex implicitly connects back to the first. The engine never
/// mutates a boundary after creating it; a configuration change means a new
/// run and a freshly generated boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertices in traversal order.
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from vertices in traversal order.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    /// Creates a regular polygon, vertex ordering as in
    /// [`geometry::regular_polygon`].
    pub fn regular(sides: usize, center: Vec2, radius: f32) -> Self {
        Self::new(geometry::regular_polygon(sides, center, radius))
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Even-odd ray-casting containment test.
    ///
    /// Correct for simple (non-self-intersecting) polygons; points exactly
    /// on an edge classify deterministically to one side. Polygons with
    /// fewer than 3 vertices contain nothing.
    pub fn contains(&self, p: Vec2) -> bool {
        let v = &self.vertices;
        let n = v.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (v[i], v[j]);
            // Count crossings of the horizontal ray running to +x.
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ])
    }

    #[test]
    fn square_contains_interior_points() {
        let sq = unit_square();
        assert!(sq.contains(Vec2::ZERO));
        assert!(sq.contains(Vec2::new(0.9, -0.9)));
    }

    #[test]
    fn square_excludes_exterior_points() {
        let sq = unit_square();
        assert!(!sq.contains(Vec2::new(1.5, 0.0)));
        assert!(!sq.contains(Vec2::new(0.0, -2.0)));
        assert!(!sq.contains(Vec2::new(-3.0, 3.0)));
    }

    #[test]
    fn concave_polygon_is_handled() {
        // An L shape; the notch at the upper right is outside.
        let l_shape = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(0.0, 2.0),
        ]);

        assert!(l_shape.contains(Vec2::new(0.5, 0.5)));
        assert!(l_shape.contains(Vec2::new(0.5, 1.5)));
        assert!(!l_shape.contains(Vec2::new(1.5, 1.5)));
    }

    #[test]
    fn regular_polygon_contains_its_center() {
        let center = Vec2::new(10.0, -4.0);
        let pent = Polygon::regular(5, center, 3.0);
        assert!(pent.contains(center));
        assert!(!pent.contains(center + Vec2::new(3.5, 0.0)));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let line = Polygon::new(vec![Vec2::ZERO, Vec2::new(1.0, 0.0)]);
        assert!(!line.contains(Vec2::new(0.5, 0.0)));
        assert!(!Polygon::new(Vec::new()).contains(Vec2::ZERO));
    }
}
