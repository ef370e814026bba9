use rayon::prelude::*;

use crate::config::SimulationParameters;
use crate::errors::SolverError;
use crate::sim::materials::Material;
use crate::sim::observer::{NullObserver, StepControl, StepObserver};

use super::boundary::Boundaries;
use super::field::TemperatureField;
use super::grid::SlabGrid;

/// Node count above which a row update is parallelized across nodes.
///
/// Within one row every node reads only the previous row, so the split has no
/// observable effect on results.
const PARALLEL_NODE_THRESHOLD: usize = 2048;

/// Explicit (forward Euler) finite-volume solver for transient 1D conduction
/// through a slab.
///
/// Left boundary: imposed temperature through a half-cell conduction path.
/// Right boundary: convective exchange through half-cell conduction and film
/// resistance in series.
///
/// Stability is the caller's responsibility: the explicit scheme diverges when
/// `dt` exceeds the Fourier bound (see [`ExplicitWallSolver::max_stable_dt`]);
/// the solver never checks or enforces it.
#[derive(Debug, Clone)]
pub struct ExplicitWallSolver {
    grid: SlabGrid,
    material: Material,
    boundaries: Boundaries,
    time_step_s: f64,
    num_steps: usize,
    initial_temperature_c: f64,
}

impl ExplicitWallSolver {
    /// Build a solver from validated parameters.
    ///
    /// Fails fast with [`SolverError::InvalidConfiguration`] or
    /// [`SolverError::DegenerateBoundaryCondition`] before any iteration; once
    /// constructed, a run cannot fail.
    pub fn new(params: &SimulationParameters) -> Result<Self, SolverError> {
        params.validate()?;
        let grid = SlabGrid::build(params.thickness_m, params.num_cells, params.area_m2)?;
        Ok(Self {
            grid,
            material: params.material,
            boundaries: params.boundaries(),
            time_step_s: params.time_step_s,
            num_steps: params.num_steps(),
            initial_temperature_c: params.initial_temperature_c,
        })
    }

    pub fn grid(&self) -> &SlabGrid {
        &self.grid
    }

    /// Total number of time rows of the run: floor(D/dt).
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Largest time step for which the explicit update keeps a non-negative
    /// coefficient on every node's own old value  [s].
    ///
    /// Advisory only; derived from the worst per-node conductance sum.
    pub fn max_stable_dt(&self) -> f64 {
        let k = self.material.conductivity;
        let g_int = k * self.grid.area / self.grid.dx;
        let g_left = self.boundaries.left.conductance(k, &self.grid);
        let g_right = self.boundaries.right.conductance(k, &self.grid);

        let worst = if self.grid.num_cells == 1 {
            // Single node touches both boundaries at once.
            g_left + g_right
        } else {
            (g_left + g_int).max(g_int + g_right).max(2.0 * g_int)
        };
        self.material.volumetric_capacity() * self.grid.cell_volume / worst
    }

    /// Run the full simulation, discarding progress reports.
    pub fn run(&self) -> TemperatureField {
        self.run_with(&mut NullObserver)
    }

    /// Run the full simulation, reporting every completed row to `observer`.
    ///
    /// Row 0 is the uniform initial condition; rows `1..num_steps` are filled
    /// strictly forward in time, each computed from the previous row alone.
    /// If the observer requests [`StepControl::Stop`] the field is truncated
    /// to the rows completed so far and returned.
    pub fn run_with(&self, observer: &mut dyn StepObserver) -> TemperatureField {
        let mut field = TemperatureField::new(
            self.num_steps,
            self.grid.num_cells,
            self.time_step_s,
            self.initial_temperature_c,
        );

        for t in 1..self.num_steps {
            {
                let (prev, next) = field.rows_split_mut(t);
                self.step_row(prev, next);
            }
            let control = observer.on_step(t, self.num_steps, field.time_at(t), field.row(t));
            if control == StepControl::Stop {
                field.truncate(t + 1);
                break;
            }
        }

        field
    }

    /// Compute row `t` from row `t-1`.
    ///
    /// For every node: left flux + right flux, divided by the thermal mass of
    /// the control volume scaled by the time step (rho*C*V/dt).  Reads come
    /// exclusively from `prev`, so node order cannot bias the result.
    fn step_row(&self, prev: &[f64], next: &mut [f64]) {
        let k = self.material.conductivity;
        let g_int = k * self.grid.area / self.grid.dx;
        let g_left = self.boundaries.left.conductance(k, &self.grid);
        let g_right = self.boundaries.right.conductance(k, &self.grid);
        let t_left = self.boundaries.left.temperature_c;
        let t_air = self.boundaries.right.air_temperature_c;
        let mass_per_step =
            self.material.volumetric_capacity() * self.grid.cell_volume / self.time_step_s;
        let last = prev.len() - 1;

        let update = |m: usize| {
            let t_m = prev[m];
            let flux_left = if m == 0 {
                g_left * (t_left - t_m)
            } else {
                g_int * (prev[m - 1] - t_m)
            };
            let flux_right = if m == last {
                g_right * (t_air - t_m)
            } else {
                g_int * (prev[m + 1] - t_m)
            };
            t_m + (flux_left + flux_right) / mass_per_step
        };

        if prev.len() >= PARALLEL_NODE_THRESHOLD {
            next.par_iter_mut()
                .enumerate()
                .for_each(|(m, v)| *v = update(m));
        } else {
            for (m, v) in next.iter_mut().enumerate() {
                *v = update(m);
            }
        }
    }
}
