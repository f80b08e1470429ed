//! Core simulation: molecule state, world constants, and the two per-tick
//! passes (velocity accumulation, then position integration).

pub mod config;
pub mod forces;
pub mod integrate;
pub mod particle;
pub mod sim;

pub use config::{GridLayout, SimConfig};
pub use forces::accumulate_forces;
pub use integrate::{integrate_positions, random_unit_vector};
pub use particle::{Color, Particle, EFFECT_RADIUS_FACTOR};
pub use sim::Simulation;
