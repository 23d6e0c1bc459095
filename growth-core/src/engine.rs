//! The differential-growth engine and its per-step pipeline.
//!
//! One call to [`Engine::step_growth`] runs:
//! 1. **Rebuild** — the spatial grid is rebuilt from the current path
//!    (the point set changed since last step via splits and prunes).
//! 2. **Force pass** — every node, in sequence order, receives Brownian
//!    jitter, per-neighbor repulsion, attraction to its cycle neighbors,
//!    alignment to their midpoint and a weak containment pull. Updates are
//!    sequential and in place: later nodes see the already-updated
//!    positions of earlier nodes in the same pass.
//! 3. **Split pass** — edges at least `max_distance` long gain a new node
//!    at their exact midpoint.
//! 4. **Prune pass** — edges shorter than `least_min_distance` collapse by
//!    removing the predecessor node. Nodes inserted by the split pass are
//!    visible here.

use crate::config::{Config, Scaled};
use crate::error::ConfigError;
use crate::geometry;
use crate::path::Path;
use crate::polygon::Polygon;
use crate::spatial::SpatialGrid;
use crate::types::NodeIndex;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Side count of the initial seed polyline.
const SEED_SIDES: usize = 6;

/// Interpolation factor of the containment pull toward the center. A weak,
/// constant-rate correction rather than a hard clamp.
const CONTAINMENT_PULL: f32 = 0.01;

/// Minimum viable cycle size; pruning never goes below this, and a path
/// that somehow ends up smaller is treated as a terminal state.
const MIN_NODES: usize = 3;

/// Fixed center of a run: the boundary and seed are generated around it
/// and the containment pull aims at it.
const CENTER: Vec2 = Vec2::ZERO;

/// Structural changes made by one [`Engine::step_growth`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepStats {
    /// Nodes inserted by the split pass.
    pub splits: usize,
    /// Nodes removed by the prune pass.
    pub prunes: usize,
    /// `true` if the configured node ceiling was reached this step; the
    /// split pass stops inserting once the ceiling is hit.
    pub at_ceiling: bool,
}

/// Owns the evolving path, the fixed boundary polygon and the per-step
/// spatial grid.
///
/// The driver constructs the engine once per run, calls
/// [`Engine::begin_growth`] to initialize state, then
/// [`Engine::step_growth`] once per frame, reading back [`Engine::path`]
/// and [`Engine::boundary`] for display.
#[derive(Debug)]
pub struct Engine {
    config: Config,
    params: Scaled,
    path: Path,
    boundary: Polygon,
    grid: SpatialGrid,
    rng: StdRng,
    seed: u64,
    /// Scratch buffer for repulsion queries, reused across nodes.
    neighbors: Vec<NodeIndex>,
}

impl Engine {
    /// Validates the configuration and creates an engine.
    ///
    /// The path and boundary are empty until [`Engine::begin_growth`] runs.
    /// The same `seed` always reproduces the same trajectory.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let params = config.scaled();
        // A zero repulsion radius disables repulsion entirely; any positive
        // cell size keeps the grid well-formed.
        let cell_size = if params.repulsion_radius > 0.0 {
            params.repulsion_radius
        } else {
            params.max_distance
        };

        Ok(Self {
            config,
            params,
            path: Path::new(),
            boundary: Polygon::new(Vec::new()),
            grid: SpatialGrid::new(cell_size),
            rng: StdRng::seed_from_u64(seed),
            seed,
            neighbors: Vec::new(),
        })
    }

    /// Starts (or restarts) a run.
    ///
    /// Builds the boundary polygon and the hexagonal seed path around the
    /// run center and reseeds the random source, so a reset replays the
    /// exact same trajectory.
    pub fn begin_growth(&mut self) {
        self.boundary = Polygon::regular(
            self.config.boundary_sides as usize,
            CENTER,
            self.params.boundary_radius,
        );
        self.path = Path::regular(SEED_SIDES, CENTER, self.params.seed_radius);
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// Advances the simulation by one step.
    ///
    /// A path below the minimum cycle size is terminal: the call returns
    /// without touching it, and the caller may restart via
    /// [`Engine::begin_growth`].
    pub fn step_growth(&mut self) -> StepStats {
        let mut stats = StepStats::default();
        if self.path.len() < MIN_NODES {
            return stats;
        }

        self.grid.rebuild(&self.path.nodes);

        for i in 0..self.path.len() {
            self.apply_brownian(i);
            self.apply_repulsion(i);
            self.apply_attraction(i);
            self.apply_alignment(i);
            self.apply_containment(i);
        }

        stats.splits = self.split_pass();
        stats.prunes = self.prune_pass();
        stats.at_ceiling = self.at_capacity();
        stats
    }

    /// Current path nodes, in cycle order, for rendering as a closed shape.
    pub fn path(&self) -> &[Vec2] {
        &self.path.nodes
    }

    /// Boundary polygon vertices, for rendering as a stroked closed shape.
    pub fn boundary(&self) -> &[Vec2] {
        &self.boundary.vertices
    }

    /// The configuration this engine was constructed with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn at_capacity(&self) -> bool {
        self.config
            .max_nodes
            .is_some_and(|cap| self.path.len() >= cap)
    }

    /// Uniform noise in `[-amplitude/2, +amplitude/2]` per coordinate.
    fn apply_brownian(&mut self, i: NodeIndex) {
        let half = self.params.jitter * 0.5;
        if half <= 0.0 {
            return;
        }
        let dx = self.rng.random_range(-half..=half);
        let dy = self.rng.random_range(-half..=half);
        self.path.nodes[i] += Vec2::new(dx, dy);
    }

    /// One away-push per indexed point within the repulsion radius.
    ///
    /// Pushes apply sequentially, not as one averaged displacement, so a
    /// node with `k` close neighbors receives `k` successive pushes. The
    /// node's own grid entry is skipped by index, which also keeps
    /// coincident nodes from producing degenerate directions.
    fn apply_repulsion(&mut self, i: NodeIndex) {
        let force = self.config.repulsion_force;
        let radius = self.params.repulsion_radius;
        if force <= 0.0 || radius <= 0.0 {
            return;
        }

        let center = self.path.nodes[i];
        self.grid
            .query_radius(&self.path.nodes, center, radius, &mut self.neighbors);
        for &j in &self.neighbors {
            if j == i {
                continue;
            }
            let node = self.path.nodes[i];
            self.path.nodes[i] = node.lerp(self.path.nodes[j], -force);
        }
    }

    /// Pull toward each cycle neighbor whose edge is longer than the prune
    /// threshold; shorter edges are left to the prune pass.
    fn apply_attraction(&mut self, i: NodeIndex) {
        let force = self.config.attraction_force;
        if force <= 0.0 {
            return;
        }
        let least = self.params.least_min_distance;
        for j in [self.path.prev_index(i), self.path.next_index(i)] {
            if j == i {
                continue;
            }
            let node = self.path.nodes[i];
            let target = self.path.nodes[j];
            if node.distance(target) > least {
                self.path.nodes[i] = node.lerp(target, force);
            }
        }
    }

    /// Pull toward the midpoint of the two cycle neighbors.
    fn apply_alignment(&mut self, i: NodeIndex) {
        let force = self.config.alignment_force;
        if force <= 0.0 {
            return;
        }
        let mid = geometry::midpoint(
            self.path.nodes[self.path.prev_index(i)],
            self.path.nodes[self.path.next_index(i)],
        );
        let node = self.path.nodes[i];
        self.path.nodes[i] = node.lerp(mid, force);
    }

    /// Weak pull toward the run center for nodes outside the boundary.
    fn apply_containment(&mut self, i: NodeIndex) {
        let node = self.path.nodes[i];
        if !self.boundary.contains(node) {
            self.path.nodes[i] = node.lerp(CENTER, CONTAINMENT_PULL);
        }
    }

    /// Inserts a midpoint node into every edge at least `max_distance`
    /// long.
    ///
    /// The cursor accounts for insertions as they happen: a node inserted
    /// mid-sequence is stepped over rather than re-examined, and the bound
    /// excludes nodes appended for the wraparound edge. Stops inserting
    /// once the node ceiling is reached.
    fn split_pass(&mut self) -> usize {
        let max = self.params.max_distance;
        let mut splits = 0;
        let mut i = 0;
        let mut end = self.path.len();
        while i < end {
            if self.at_capacity() {
                break;
            }
            if self.path.edge_to_prev(i) >= max {
                let prev = self.path.prev_index(i);
                let mid = geometry::midpoint(self.path.nodes[prev], self.path.nodes[i]);
                if i == 0 {
                    // The edge wraps from the last node to the first;
                    // appending keeps the midpoint between them in cycle
                    // order.
                    self.path.nodes.push(mid);
                    i += 1;
                } else {
                    self.path.nodes.insert(i, mid);
                    end += 1;
                    i += 2;
                }
                splits += 1;
            } else {
                i += 1;
            }
        }
        splits
    }

    /// Collapses every edge shorter than `least_min_distance` by removing
    /// the predecessor node, never shrinking the path below the minimum
    /// cycle size.
    fn prune_pass(&mut self) -> usize {
        let least = self.params.least_min_distance;
        let mut prunes = 0;
        let mut i = 0;
        while i < self.path.len() {
            if self.path.len() <= MIN_NODES {
                break;
            }
            if self.path.edge_to_prev(i) < least {
                let prev = self.path.prev_index(i);
                self.path.nodes.remove(prev);
                prunes += 1;
                if prev > i {
                    // Removed the tail predecessor of node 0; move on.
                    i += 1;
                }
                // Otherwise the current node slid into the removed slot
                // and the next candidate already sits at `i`.
            } else {
                i += 1;
            }
        }
        prunes
    }
}
