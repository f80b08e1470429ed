//! Position pass: Euler step, boundary clamp, and coincidence break-up.

use crate::core::config::SimConfig;
use crate::core::particle::Particle;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Advance every molecule's position by one tick and keep it inside the
/// boundary.
///
/// Per molecule, in order: move by `velocity * delta_time`, clamp the
/// position componentwise to the boundary half-extents, zero velocity on
/// clamp, then displace away from any molecule occupying exactly the same
/// position.
///
/// Velocity zeroing keys off the x-axis clamp twice: an x clamp zeroes both
/// `velocity.x` and `velocity.y`, while a y-only clamp zeroes neither. That
/// asymmetry is part of the simulation's established feel and is pinned by
/// tests; do not "even it out".
///
/// Coincidence resolution compares positions with exact floating-point
/// equality, so it fires only when two molecules agree on both coordinates
/// exactly. Each match displaces this molecule by a uniformly random unit
/// direction scaled by its radius, and the scan continues against the
/// displaced position. The displacement is not re-clamped until the next
/// tick, so a freshly nudged molecule may overhang the boundary by up to
/// one radius.
pub fn integrate_positions<R: Rng + ?Sized>(
    particles: &mut [Particle],
    config: &SimConfig,
    delta_time: f64,
    rng: &mut R,
) {
    let half = config.half_extents();

    for i in 0..particles.len() {
        let p = &mut particles[i];
        p.position += p.velocity * delta_time;

        let unclamped = p.position;
        p.position = p.position.clamp(-half, half);

        // Both zeroing branches test the x delta; a y-only clamp leaves
        // velocity untouched.
        if p.position.x != unclamped.x {
            p.velocity.x = 0.0;
        }
        if p.position.x != unclamped.x {
            p.velocity.y = 0.0;
        }

        for j in 0..particles.len() {
            if j == i {
                continue;
            }
            // Exact coordinate coincidence only; near-misses are left alone.
            if particles[j].position == particles[i].position {
                let nudge = random_unit_vector(rng) * particles[i].radius;
                particles[i].position += nudge;
            }
        }
    }
}

/// A unit vector in a uniformly random direction.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> DVec2 {
    DVec2::from_angle(rng.random_range(0.0..TAU))
}
