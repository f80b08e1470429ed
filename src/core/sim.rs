use crate::core::config::{GridLayout, SimConfig};
use crate::core::forces::accumulate_forces;
use crate::core::integrate::integrate_positions;
use crate::core::particle::{Color, Particle};
use crate::error::{Error, Result};
use glam::DVec2;
use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// Colors the grid seeder draws from, uniformly at random per molecule.
const SEED_PALETTE: [Color; 3] = [Color::WHITE, Color::LIGHT_BLUE, Color::BLUE];

/// A fixed set of molecules in a rectangular boundary, advanced tick by tick.
///
/// Owns the molecule collection, the world constants, and the random source
/// used for seeding colors and breaking up coincident positions. The
/// collection is created once by the grid seeder and never resized.
#[derive(Debug)]
pub struct Simulation {
    time_now: f64,
    config: SimConfig,
    pub particles: Vec<Particle>,
    rng: StdRng,
}

impl Simulation {
    /// Create a simulation seeded with a grid of resting molecules.
    ///
    /// Molecule `(i, j)` spawns at
    /// `(i, j) * (radius + spacing) + offset - (cols^2 - cols, rows^2 - rows)`
    /// with zero velocity, unit mass and viscosity, and a palette color drawn
    /// from the seeded RNG. Pass `Some(seed)` for reproducible runs; `None`
    /// seeds from the thread RNG.
    pub fn new(layout: GridLayout, config: SimConfig, seed: Option<u64>) -> Result<Self> {
        layout.validate()?;
        config.validate()?;

        let mut rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };

        let pitch = layout.radius + layout.spacing;
        let cols = layout.cols as f64;
        let rows = layout.rows as f64;
        let recenter = DVec2::new(cols * cols - cols, rows * rows - rows);

        let mut particles = Vec::with_capacity(layout.particle_count());
        for i in 0..layout.cols {
            for j in 0..layout.rows {
                let cell = DVec2::new(i as f64, j as f64);
                let position = cell * pitch + layout.offset - recenter;
                let color = SEED_PALETTE[rng.random_range(0..SEED_PALETTE.len())];
                particles.push(Particle::new(
                    position,
                    DVec2::ZERO,
                    layout.radius,
                    1.0,
                    color,
                    1.0,
                )?);
            }
        }

        Ok(Self {
            time_now: 0.0,
            config,
            particles,
            rng,
        })
    }

    /// Advance one tick: update all velocities, then all positions.
    ///
    /// The force pass runs to completion before any position moves, so every
    /// pair interaction reads the positions the tick started with. Swapping
    /// or interleaving the passes changes the simulation.
    pub fn step(&mut self, delta_time: f64) -> Result<()> {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return Err(Error::InvalidParam(
                "delta_time must be finite and > 0".into(),
            ));
        }

        accumulate_forces(&mut self.particles, &self.config, delta_time);
        integrate_positions(&mut self.particles, &self.config, delta_time, &mut self.rng);

        self.time_now += delta_time;
        Ok(())
    }

    /// Returns current simulation time (the sum of stepped deltas).
    pub fn time(&self) -> f64 {
        self.time_now
    }

    /// Number of molecules.
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// Positions as a Vec.
    pub fn positions(&self) -> Vec<DVec2> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Velocities as a Vec.
    pub fn velocities(&self) -> Vec<DVec2> {
        self.particles.iter().map(|p| p.velocity).collect()
    }

    /// Compute total kinetic energy (diagnostic).
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| p.kinetic_energy()).sum()
    }

    /// The world constants this simulation runs under.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
