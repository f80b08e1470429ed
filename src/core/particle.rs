use crate::error::{Error, Result};
use glam::DVec2;

/// Scales a molecule's radius into its influence distance: a molecule reacts
/// to neighbors closer than `radius * EFFECT_RADIUS_FACTOR`.
pub const EFFECT_RADIUS_FACTOR: f64 = 3.0;

/// Opaque sRGB tag carried by every molecule for the renderer's benefit.
/// The physics passes never read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// White.
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Light blue.
    pub const LIGHT_BLUE: Color = Color::new(173, 216, 230);
    /// Blue.
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// Create a color from sRGB channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A fluid molecule: a circle with position, velocity, and inert bulk
/// properties.
///
/// Fields:
/// - `position`: world-space coordinates, origin at the boundary center
/// - `velocity`: world units per second
/// - `radius`: circle radius (> 0); also scales the influence distance
/// - `mass`: stored and validated (> 0); read only by the kinetic-energy
///   diagnostic, no force term uses it
/// - `color`: render tag, irrelevant to physics
/// - `viscosity`: stored and validated (> 0); currently read by nothing
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position (x, y).
    pub position: DVec2,
    /// Velocity (vx, vy).
    pub velocity: DVec2,
    /// Circle radius (> 0).
    pub radius: f64,
    /// Mass (> 0); inert in force computation.
    pub mass: f64,
    /// Render color tag.
    pub color: Color,
    /// Viscosity (> 0); inert in force computation.
    pub viscosity: f64,
}

impl Particle {
    /// Create a new molecule after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `radius`, `mass`, or `viscosity` is
    ///   non-positive or any numeric component is NaN/inf.
    pub fn new(
        position: DVec2,
        velocity: DVec2,
        radius: f64,
        mass: f64,
        color: Color,
        viscosity: f64,
    ) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !viscosity.is_finite() || viscosity <= 0.0 {
            return Err(Error::InvalidParam(
                "viscosity must be finite and > 0".into(),
            ));
        }
        if !position.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !velocity.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            position,
            velocity,
            radius,
            mass,
            color,
            viscosity,
        })
    }

    /// Distance within which this molecule reacts to a neighbor.
    #[inline]
    pub fn influence_radius(&self) -> f64 {
        self.radius * EFFECT_RADIUS_FACTOR
    }

    /// Returns the molecule's kinetic energy: 1/2 m |v|^2.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Set position (validated as finite).
    pub fn set_position(&mut self, position: DVec2) -> Result<()> {
        if !position.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        self.position = position;
        Ok(())
    }

    /// Set velocity (validated as finite).
    pub fn set_velocity(&mut self, velocity: DVec2) -> Result<()> {
        if !velocity.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        self.velocity = velocity;
        Ok(())
    }
}
