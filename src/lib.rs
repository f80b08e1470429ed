use glam::DVec2;
use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub mod core;
pub mod error;

use crate::core::{GridLayout, SimConfig, Simulation};

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// FluidSim Python-facing wrapper around the Rust Simulation core.
///
/// - __new__(cols, rows, radius, spacing, offset, boundary, gravity, seed)
/// - step(delta_time)
/// - get_positions() / get_velocities() -> np.ndarray, shape (N, 2)
/// - set_positions() / set_velocities() from arrays of the same shape
/// - get_radii() / get_colors() / get_boundary() for the render feed
#[pyclass]
pub struct FluidSim {
    sim: Simulation,
}

#[pymethods]
impl FluidSim {
    /// Initialize a molecule grid inside a rectangular boundary.
    ///
    /// Parameters
    /// - cols, rows: grid dimensions (ints, > 0)
    /// - radius: molecule radius (float, > 0)
    /// - spacing: extra gap between grid cells (float, >= 0)
    /// - offset: (x, y) world offset added to every spawn position
    /// - boundary: (width, height) of the containment rectangle
    /// - gravity: (gx, gy) acceleration applied every tick
    /// - seed: RNG seed (int) for reproducibility; None for nondeterministic
    ///
    /// Errors: raises ValueError on invalid parameters.
    #[new]
    #[pyo3(signature = (
        cols=10,
        rows=10,
        radius=10.0,
        spacing=5.0,
        offset=(0.0, 0.0),
        boundary=(1600.0, 900.0),
        gravity=(0.0, -500.0),
        seed=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        cols: usize,
        rows: usize,
        radius: f64,
        spacing: f64,
        offset: (f64, f64),
        boundary: (f64, f64),
        gravity: (f64, f64),
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let layout = GridLayout::new(cols, rows, radius, spacing, DVec2::new(offset.0, offset.1))
            .map_err(py_err)?;
        let config = SimConfig::new(DVec2::new(gravity.0, gravity.1), boundary.0, boundary.1)
            .map_err(py_err)?;
        let sim = Simulation::new(layout, config, seed).map_err(py_err)?;
        Ok(Self { sim })
    }

    /// Advance the simulation by one tick of `delta_time` seconds (releases
    /// the GIL during computation).
    fn step(&mut self, py: Python<'_>, delta_time: f64) -> PyResult<()> {
        py.detach(|| self.sim.step(delta_time)).map_err(py_err)
    }

    /// Return positions as a NumPy array of shape (N, 2), dtype=float64.
    fn get_positions<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<f64>>> {
        let n = self.sim.num_particles();
        let mut arr = Array2::<f64>::zeros((n, 2));
        for (i, p) in self.sim.particles.iter().enumerate() {
            arr[[i, 0]] = p.position.x;
            arr[[i, 1]] = p.position.y;
        }
        let pyarr = arr.into_pyarray(py);
        Ok(pyarr.to_owned().into())
    }

    /// Return velocities as a NumPy array of shape (N, 2), dtype=float64.
    fn get_velocities<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<f64>>> {
        let n = self.sim.num_particles();
        let mut arr = Array2::<f64>::zeros((n, 2));
        for (i, p) in self.sim.particles.iter().enumerate() {
            arr[[i, 0]] = p.velocity.x;
            arr[[i, 1]] = p.velocity.y;
        }
        let pyarr = arr.into_pyarray(py);
        Ok(pyarr.to_owned().into())
    }

    /// Set all molecule positions from a NumPy array of shape (N, 2),
    /// dtype=float64. Values must be finite; the caller is responsible for
    /// keeping them inside the boundary.
    fn set_positions<'py>(&mut self, positions: PyReadonlyArray2<'py, f64>) -> PyResult<()> {
        let arr = positions.as_array();
        let n = self.sim.num_particles();
        if arr.ndim() != 2 || arr.shape()[0] != n || arr.shape()[1] != 2 {
            return Err(py_err(format!(
                "positions must have shape ({}, 2), got {:?}",
                n,
                arr.shape()
            )));
        }
        for i in 0..n {
            let value = DVec2::new(arr[[i, 0]], arr[[i, 1]]);
            self.sim.particles[i].set_position(value).map_err(py_err)?;
        }
        Ok(())
    }

    /// Set all molecule velocities from a NumPy array of shape (N, 2),
    /// dtype=float64. Values must be finite.
    fn set_velocities<'py>(&mut self, velocities: PyReadonlyArray2<'py, f64>) -> PyResult<()> {
        let arr = velocities.as_array();
        let n = self.sim.num_particles();
        if arr.ndim() != 2 || arr.shape()[0] != n || arr.shape()[1] != 2 {
            return Err(py_err(format!(
                "velocities must have shape ({}, 2), got {:?}",
                n,
                arr.shape()
            )));
        }
        for i in 0..n {
            let value = DVec2::new(arr[[i, 0]], arr[[i, 1]]);
            self.sim.particles[i].set_velocity(value).map_err(py_err)?;
        }
        Ok(())
    }

    /// Return molecule radii as a NumPy array of shape (N,), dtype=float64.
    fn get_radii<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray1<f64>>> {
        let radii: Vec<f64> = self.sim.particles.iter().map(|p| p.radius).collect();
        Ok(radii.into_pyarray(py).to_owned().into())
    }

    /// Return molecule colors as a NumPy array of shape (N, 3), dtype=uint8.
    fn get_colors<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<u8>>> {
        let n = self.sim.num_particles();
        let mut arr = Array2::<u8>::zeros((n, 3));
        for (i, p) in self.sim.particles.iter().enumerate() {
            arr[[i, 0]] = p.color.r;
            arr[[i, 1]] = p.color.g;
            arr[[i, 2]] = p.color.b;
        }
        Ok(arr.into_pyarray(py).to_owned().into())
    }

    /// Return the containment rectangle as (width, height).
    fn get_boundary(&self) -> PyResult<(f64, f64)> {
        let config = self.sim.config();
        Ok((config.boundary_width, config.boundary_height))
    }

    /// Return the gravity vector as (gx, gy).
    fn get_gravity(&self) -> PyResult<(f64, f64)> {
        let gravity = self.sim.config().gravity;
        Ok((gravity.x, gravity.y))
    }

    /// Return the total kinetic energy (diagnostic).
    fn get_kinetic_energy(&self) -> PyResult<f64> {
        Ok(self.sim.kinetic_energy())
    }

    /// Return the accumulated simulation time.
    fn get_time(&self) -> PyResult<f64> {
        Ok(self.sim.time())
    }

    /// Number of molecules.
    fn num_particles(&self) -> PyResult<usize> {
        Ok(self.sim.num_particles())
    }
}

/// The fluidsim Python module entry point.
#[pymodule]
fn fluidsim(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<FluidSim>()?;
    Ok(())
}
