//! Seed reproducibility: where randomness enters and where it must not.
//!
//! The simulation consults its RNG in exactly two places: palette draws at
//! seeding time and the break-up nudge for coincident molecules. Everything
//! else is pure arithmetic, so equal seeds must reproduce runs bit for bit.

use fluidsim::core::{Color, GridLayout, SimConfig, Simulation};
use glam::DVec2;

/// Equal seeds deal the same colors, and only palette colors.
#[test]
fn same_seed_reproduces_colors() -> fluidsim::error::Result<()> {
    let a = Simulation::new(GridLayout::default(), SimConfig::default(), Some(21))?;
    let b = Simulation::new(GridLayout::default(), SimConfig::default(), Some(21))?;
    let palette = [Color::WHITE, Color::LIGHT_BLUE, Color::BLUE];
    for (i, (pa, pb)) in a.particles.iter().zip(b.particles.iter()).enumerate() {
        assert_eq!(pa.color, pb.color, "molecule {} drew different colors", i);
        assert!(
            palette.contains(&pa.color),
            "molecule {} wears a color outside the palette: {:?}",
            i,
            pa.color
        );
    }
    Ok(())
}

/// Two runs of the stock world from the same seed stay bitwise identical
/// through 200 ticks.
#[test]
fn same_seed_reproduces_trajectories() -> fluidsim::error::Result<()> {
    let mut a = Simulation::new(GridLayout::default(), SimConfig::default(), Some(7))?;
    let mut b = Simulation::new(GridLayout::default(), SimConfig::default(), Some(7))?;
    for _ in 0..200 {
        a.step(1.0 / 60.0)?;
        b.step(1.0 / 60.0)?;
    }
    assert_eq!(a.positions(), b.positions(), "positions diverged");
    assert_eq!(a.velocities(), b.velocities(), "velocities diverged");
    Ok(())
}

/// A lone molecule never triggers a nudge, so its trajectory is the same
/// under any seed: the seed feeds only the random draws, not the physics.
#[test]
fn single_molecule_trajectory_is_seed_independent() -> fluidsim::error::Result<()> {
    let layout = GridLayout::new(1, 1, 10.0, 5.0, DVec2::ZERO)?;
    let mut a = Simulation::new(layout, SimConfig::default(), Some(1))?;
    let mut b = Simulation::new(layout, SimConfig::default(), Some(2))?;
    for _ in 0..100 {
        a.step(1.0 / 60.0)?;
        b.step(1.0 / 60.0)?;
    }
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.velocities(), b.velocities());
    Ok(())
}

/// Forcing two molecules onto the same coordinates makes the next tick
/// consume one angle draw; with equal seeds both runs nudge the same
/// molecule in the same direction.
#[test]
fn coincidence_nudge_is_seed_deterministic() -> fluidsim::error::Result<()> {
    let layout = GridLayout::new(2, 1, 10.0, 5.0, DVec2::ZERO)?;
    let config = SimConfig::new(DVec2::ZERO, 1600.0, 900.0)?;
    let mut a = Simulation::new(layout, config, Some(11))?;
    let mut b = Simulation::new(layout, config, Some(11))?;
    let shared = a.particles[0].position;
    a.particles[1].position = shared;
    b.particles[1].position = shared;

    a.step(0.1)?;
    b.step(0.1)?;

    assert_eq!(a.positions(), b.positions(), "nudges diverged across runs");
    let after = a.positions();
    assert_ne!(after[0], after[1], "the pair must no longer coincide");
    assert!(
        ((after[0] - shared).length() - layout.radius).abs() < 1e-9,
        "the scanning molecule moves by exactly one radius"
    );
    assert_eq!(after[1], shared, "the other molecule stays put");
    Ok(())
}

/// Without a seed the simulation still builds and steps; only
/// reproducibility is given up.
#[test]
fn unseeded_simulation_runs() -> fluidsim::error::Result<()> {
    let mut sim = Simulation::new(GridLayout::default(), SimConfig::default(), None)?;
    assert_eq!(sim.num_particles(), 100);
    for _ in 0..10 {
        sim.step(1.0 / 60.0)?;
    }
    for position in sim.positions() {
        assert!(position.is_finite());
        assert!(sim.config().contains(position));
    }
    Ok(())
}
