//! Velocity pass: per-neighbor impulses, wall anti-stick, and gravity.

use crate::core::config::SimConfig;
use crate::core::particle::Particle;

/// Gain on the distance-proportional neighbor impulse.
const NEIGHBOR_GAIN: f64 = 100.0;

/// Gain on the wall anti-stick impulse.
const WALL_GAIN: f64 = 1000.0;

/// Wall proximity margin, in units of the molecule's radius.
const WALL_MARGIN_FACTOR: f64 = 2.0;

/// Update every molecule's velocity in place from its in-range neighbors,
/// wall proximity, and gravity.
///
/// One sequential pass over the slice. Positions are only read here, never
/// written, so every pair interaction sees the positions the tick started
/// with regardless of iteration order.
///
/// For molecule `i`, every other molecule `j` within
/// `particles[i].influence_radius()` contributes an impulse along
/// `d = position[j] - position[i]` with magnitude `|d| * delta_time *
/// NEIGHBOR_GAIN`: it points toward the neighbor and grows with separation
/// inside the range, a springy cohesion kernel rather than SPH smoothing.
/// A zero-length `d` contributes nothing.
///
/// Each qualifying neighbor also re-applies the wall anti-stick nudge: a
/// molecule within `radius * WALL_MARGIN_FACTOR` of a boundary edge has its
/// velocity kicked inward by `delta_time * WALL_GAIN` on that axis. Crowded
/// molecules near a wall therefore receive proportionally more kicks; an
/// isolated molecule receives none.
///
/// Gravity is added exactly once per molecule after its neighbor scan.
pub fn accumulate_forces(particles: &mut [Particle], config: &SimConfig, delta_time: f64) {
    let half = config.half_extents();

    for i in 0..particles.len() {
        for j in 0..particles.len() {
            if j == i {
                continue;
            }

            let delta = particles[j].position - particles[i].position;
            let dist = delta.length();
            if dist > particles[i].influence_radius() {
                continue;
            }

            let p = &mut particles[i];
            p.velocity += delta.normalize_or_zero() * dist * delta_time * NEIGHBOR_GAIN;

            let margin = p.radius * WALL_MARGIN_FACTOR;
            let kick = delta_time * WALL_GAIN;
            if p.position.x <= -half.x + margin {
                p.velocity.x += kick;
            }
            if p.position.x >= half.x - margin {
                p.velocity.x -= kick;
            }
            if p.position.y <= -half.y + margin {
                p.velocity.y += kick;
            }
            if p.position.y >= half.y - margin {
                p.velocity.y -= kick;
            }
        }

        particles[i].velocity += config.gravity * delta_time;
    }
}
