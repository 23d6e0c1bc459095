use crate::error::ConfigError;

/// Fixed divisor converting design-space distances (fractions in `[0, 1]`)
/// into world units together with [`Config::canvas_width`].
pub const DESIGN_SCALE: f32 = 100.0;

/// Boundary polygon radius as a fraction of the canvas width.
pub const BOUNDARY_RADIUS_FRAC: f32 = 0.45;

/// Seed polyline radius as a fraction of the canvas width.
pub const SEED_RADIUS_FRAC: f32 = 0.1;

/// Simulation configuration, immutable for the duration of one run.
///
/// Force coefficients are dimensionless interpolation factors. Distance-like
/// fields (`brownian_range`, `least_min_distance`, `repulsion_radius`,
/// `max_distance`) are expressed in design space and scaled to world units
/// by `canvas_width / DESIGN_SCALE` before use.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Per-neighbor push-away strength, in `[0, 1]`.
    pub repulsion_force: f32,
    /// Pull toward cycle-adjacent neighbors, in `[0, 1]`.
    pub attraction_force: f32,
    /// Pull toward the midpoint of the two cycle neighbors, in `[0, 1]`.
    pub alignment_force: f32,
    /// Brownian jitter amplitude, in `[0, 0.1]` of design space.
    pub brownian_range: f32,
    /// Prune threshold: edges shorter than this collapse, in `[0, 1]`.
    pub least_min_distance: f32,
    /// Radius of the repulsion neighbor query, in `[0, 1]`.
    pub repulsion_radius: f32,
    /// Split threshold: edges at least this long split, in `[0, 1]`.
    pub max_distance: f32,
    /// Side count of the containment polygon; fewer than 3 is rejected.
    pub boundary_sides: u32,
    /// Reference canvas width defining the world-unit scale.
    pub canvas_width: f32,
    /// Optional ceiling on the node count; when reached the split pass
    /// stops inserting and the step reports it to the caller.
    pub max_nodes: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repulsion_force: 0.3,
            attraction_force: 0.5,
            alignment_force: 0.45,
            brownian_range: 0.01,
            least_min_distance: 0.2,
            repulsion_radius: 0.6,
            max_distance: 0.7,
            boundary_sides: 6,
            canvas_width: 600.0,
            max_nodes: None,
        }
    }
}

impl Config {
    /// Checks every field against its allowed range.
    ///
    /// ### Returns
    /// `Ok(())` if the configuration can start a run, otherwise the first
    /// [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let forces = [
            ("repulsion_force", self.repulsion_force),
            ("attraction_force", self.attraction_force),
            ("alignment_force", self.alignment_force),
        ];
        for (name, value) in forces {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ForceOutOfRange { name, value });
            }
        }

        if !(0.0..=0.1).contains(&self.brownian_range) {
            return Err(ConfigError::BrownianOutOfRange(self.brownian_range));
        }

        let distances = [
            ("least_min_distance", self.least_min_distance),
            ("repulsion_radius", self.repulsion_radius),
            ("max_distance", self.max_distance),
        ];
        for (name, value) in distances {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::DistanceOutOfRange { name, value });
            }
        }

        if self.least_min_distance >= self.max_distance {
            return Err(ConfigError::ThresholdsInverted {
                least_min_distance: self.least_min_distance,
                max_distance: self.max_distance,
            });
        }

        if self.boundary_sides < 3 {
            return Err(ConfigError::TooFewBoundarySides(self.boundary_sides));
        }

        if !(self.canvas_width > 0.0) {
            return Err(ConfigError::NonPositiveCanvasWidth(self.canvas_width));
        }

        Ok(())
    }

    /// Converts the design-space fields into world units.
    pub(crate) fn scaled(&self) -> Scaled {
        let unit = self.canvas_width / DESIGN_SCALE;
        Scaled {
            jitter: self.brownian_range * unit,
            least_min_distance: self.least_min_distance * unit,
            repulsion_radius: self.repulsion_radius * unit,
            max_distance: self.max_distance * unit,
            boundary_radius: self.canvas_width * BOUNDARY_RADIUS_FRAC,
            seed_radius: self.canvas_width * SEED_RADIUS_FRAC,
        }
    }
}

/// World-unit distances derived from a validated [`Config`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scaled {
    pub jitter: f32,
    pub least_min_distance: f32,
    pub repulsion_radius: f32,
    pub max_distance: f32,
    pub boundary_radius: f32,
    pub seed_radius: f32,
}
