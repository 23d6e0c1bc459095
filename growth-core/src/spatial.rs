//! Uniform grid for radius-bounded neighbor queries.
//!
//! The grid is ephemeral: the engine rebuilds it from the current path at
//! the start of every step, because splits and prunes changed the point set
//! since the last one. It carries no invariant beyond reflecting the
//! positions it was last rebuilt from.

use crate::types::NodeIndex;
use glam::Vec2;

/// A dense cell grid over the bounding box of the indexed point set.
///
/// Cells are square with side `cell_size`; each cell stores the indices of
/// the points that fall inside it. With `cell_size` equal to the query
/// radius, a radius query only has to visit a 3x3 cell neighborhood.
#[derive(Debug)]
pub struct SpatialGrid {
    cell_size: f32,
    min: Vec2,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<NodeIndex>>,
}

impl SpatialGrid {
    /// Creates an empty grid with the given cell size.
    ///
    /// ### Panics
    /// Panics in debug builds if `cell_size` is not positive.
    pub fn new(cell_size: f32) -> Self {
        debug_assert!(cell_size > 0.0);
        Self {
            cell_size,
            min: Vec2::ZERO,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
        }
    }

    /// Discards previous contents and indexes exactly the given points.
    ///
    /// Cell storage is reused across rebuilds to avoid reallocation.
    /// Duplicate positions are fine; they simply share a cell.
    pub fn rebuild(&mut self, points: &[Vec2]) {
        for cell in &mut self.cells {
            cell.clear();
        }

        if points.is_empty() {
            self.cols = 0;
            self.rows = 0;
            return;
        }

        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        self.min = min;

        self.cols = ((max.x - min.x) / self.cell_size).floor() as usize + 1;
        self.rows = ((max.y - min.y) / self.cell_size).floor() as usize + 1;
        self.cells.resize_with(self.cols * self.rows, Vec::new);

        for (i, p) in points.iter().enumerate() {
            let (cx, cy) = self.cell_of(*p);
            self.cells[cy * self.cols + cx].push(i);
        }
    }

    /// Pushes into `out` the index of every indexed point within `radius`
    /// of `center` (inclusive), in no particular order.
    ///
    /// `points` must be the slice the grid was last rebuilt from; actual
    /// distances are measured against it. The queried node's own index is
    /// returned like any other match, so callers filtering self-matches
    /// must do so by index.
    pub fn query_radius(
        &self,
        points: &[Vec2],
        center: Vec2,
        radius: f32,
        out: &mut Vec<NodeIndex>,
    ) {
        out.clear();
        if self.cols == 0 || radius < 0.0 {
            return;
        }

        let r2 = radius * radius;
        let reach = (radius / self.cell_size).ceil() as isize;
        // Unclamped cell coordinates; the query center may lie outside the
        // indexed bounding box.
        let cx = ((center.x - self.min.x) / self.cell_size).floor() as isize;
        let cy = ((center.y - self.min.y) / self.cell_size).floor() as isize;

        for y in (cy - reach)..=(cy + reach) {
            if y < 0 || y >= self.rows as isize {
                continue;
            }
            let row = y as usize * self.cols;
            for x in (cx - reach)..=(cx + reach) {
                if x < 0 || x >= self.cols as isize {
                    continue;
                }
                for &i in &self.cells[row + x as usize] {
                    if points[i].distance_squared(center) <= r2 {
                        out.push(i);
                    }
                }
            }
        }
    }

    fn cell_of(&self, p: Vec2) -> (usize, usize) {
        // Clamp against float rounding on the bounding box edge.
        let cx = (((p.x - self.min.x) / self.cell_size).floor() as usize).min(self.cols - 1);
        let cy = (((p.y - self.min.y) / self.cell_size).floor() as usize).min(self.rows - 1);
        (cx, cy)
    }
}
