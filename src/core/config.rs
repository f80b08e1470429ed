use crate::error::{Error, Result};
use glam::DVec2;

/// World constants shared by both per-tick passes.
///
/// The boundary is an axis-aligned rectangle centered on the origin;
/// gravity is a fixed acceleration added once per particle per force pass.
/// Both are set up once and passed explicitly into the passes; there is no
/// module-level shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Gravity acceleration vector (world units per second squared).
    pub gravity: DVec2,
    /// Containment rectangle width (> 0).
    pub boundary_width: f64,
    /// Containment rectangle height (> 0).
    pub boundary_height: f64,
}

impl SimConfig {
    /// Create a config after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if a gravity component is NaN/inf or a
    ///   boundary dimension is non-finite or <= 0.
    pub fn new(gravity: DVec2, boundary_width: f64, boundary_height: f64) -> Result<Self> {
        let config = Self {
            gravity,
            boundary_width,
            boundary_height,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the invariants of an already-built config.
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(Error::InvalidParam("gravity must be finite".into()));
        }
        if !self.boundary_width.is_finite() || self.boundary_width <= 0.0 {
            return Err(Error::InvalidParam(
                "boundary_width must be finite and > 0".into(),
            ));
        }
        if !self.boundary_height.is_finite() || self.boundary_height <= 0.0 {
            return Err(Error::InvalidParam(
                "boundary_height must be finite and > 0".into(),
            ));
        }
        Ok(())
    }

    /// Half extents of the containment rectangle. Positions are clamped to
    /// `[-half.x, half.x] × [-half.y, half.y]`.
    #[inline]
    pub fn half_extents(&self) -> DVec2 {
        DVec2::new(self.boundary_width, self.boundary_height) * 0.5
    }

    /// Whether `point` lies inside the containment rectangle (walls
    /// inclusive).
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        let half = self.half_extents();
        point.x >= -half.x && point.x <= half.x && point.y >= -half.y && point.y <= half.y
    }
}

impl Default for SimConfig {
    /// The stock world: a 1600 × 900 boundary with gravity `(0, -500)`.
    fn default() -> Self {
        Self {
            gravity: DVec2::new(0.0, -500.0),
            boundary_width: 1600.0,
            boundary_height: 900.0,
        }
    }
}

/// Startup grid layout: `cols × rows` molecules at rest with fixed spacing.
///
/// Molecule `(i, j)` spawns at
/// `(i, j) * (radius + spacing) + offset - (cols² - cols, rows² - rows)`;
/// the quadratic term recenters the block for the stock layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Number of grid columns (> 0).
    pub cols: usize,
    /// Number of grid rows (> 0).
    pub rows: usize,
    /// Radius given to every seeded molecule (> 0).
    pub radius: f64,
    /// Extra gap between neighboring grid cells (>= 0).
    pub spacing: f64,
    /// World-space offset added to every spawn position.
    pub offset: DVec2,
}

impl GridLayout {
    /// Create a layout after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if the grid is empty, `radius` is non-finite
    ///   or <= 0, `spacing` is non-finite or < 0, or `offset` is NaN/inf.
    pub fn new(cols: usize, rows: usize, radius: f64, spacing: f64, offset: DVec2) -> Result<Self> {
        let layout = Self {
            cols,
            rows,
            radius,
            spacing,
            offset,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Validate the invariants of an already-built layout.
    pub fn validate(&self) -> Result<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(Error::InvalidParam("grid must have cols > 0 and rows > 0".into()));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(Error::InvalidParam(
                "spacing must be finite and >= 0".into(),
            ));
        }
        if !self.offset.is_finite() {
            return Err(Error::InvalidParam("offset must be finite".into()));
        }
        Ok(())
    }

    /// Number of molecules the layout seeds.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.cols * self.rows
    }
}

impl Default for GridLayout {
    /// The stock block: 10 × 10 molecules of radius 10 with spacing 5,
    /// centered on the origin.
    fn default() -> Self {
        Self {
            cols: 10,
            rows: 10,
            radius: 10.0,
            spacing: 5.0,
            offset: DVec2::ZERO,
        }
    }
}
