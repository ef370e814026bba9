use serde::{Deserialize, Serialize};

use crate::errors::SolverError;
use crate::sim::heat_transfer::boundary::{Boundaries, ConvectiveExchange, ImposedTemperature};
use crate::sim::materials::Material;

/// Immutable configuration of one simulation run.
///
/// Field names carry units; the left boundary imposes a temperature, the
/// right boundary exchanges convectively with ambient air.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Number of spatial control volumes (mMax).
    pub num_cells: usize,
    /// Slab thickness  [m].
    pub thickness_m: f64,
    /// Simulated physical duration  [s].
    pub duration_s: f64,
    /// Simulation time step  [s].
    pub time_step_s: f64,
    /// Logging interval for the boundary-node history  [s].
    pub log_interval_s: f64,
    /// Slab material (rho, C, k).
    pub material: Material,
    /// Cross-section area  [m^2].
    pub area_m2: f64,
    /// Imposed temperature on the left surface  [C].
    pub left_temperature_c: f64,
    /// Ambient air temperature on the right side  [C].
    pub right_air_temperature_c: f64,
    /// Convective coefficient on the right side  [W/(m^2*K)].
    pub right_h_w_per_m2_k: f64,
    /// Uniform initial slab temperature  [C].
    pub initial_temperature_c: f64,
}

impl SimulationParameters {
    /// Check the whole configuration before any iteration.
    ///
    /// Non-positive sizes, durations and material properties are
    /// [`SolverError::InvalidConfiguration`]; a zero conductivity or
    /// convective coefficient would divide by zero inside a flux term and is
    /// reported as [`SolverError::DegenerateBoundaryCondition`] instead of
    /// surfacing later as a NaN.
    pub fn validate(&self) -> Result<(), SolverError> {
        let invalid = |msg: String| Err(SolverError::InvalidConfiguration(msg));

        if self.num_cells == 0 {
            return invalid("node count must be at least 1".to_string());
        }
        if self.thickness_m <= 0.0 {
            return invalid(format!("slab thickness must be positive, got {}", self.thickness_m));
        }
        if self.duration_s <= 0.0 {
            return invalid(format!("duration must be positive, got {}", self.duration_s));
        }
        if self.time_step_s <= 0.0 {
            return invalid(format!("time step must be positive, got {}", self.time_step_s));
        }
        if self.log_interval_s <= 0.0 {
            return invalid(format!(
                "log interval must be positive, got {}",
                self.log_interval_s
            ));
        }
        if self.area_m2 <= 0.0 {
            return invalid(format!("cross-section area must be positive, got {}", self.area_m2));
        }
        if self.material.density <= 0.0 {
            return invalid(format!("density must be positive, got {}", self.material.density));
        }
        if self.material.specific_heat <= 0.0 {
            return invalid(format!(
                "specific heat must be positive, got {}",
                self.material.specific_heat
            ));
        }
        if self.material.conductivity <= 0.0 {
            return Err(SolverError::DegenerateBoundaryCondition(format!(
                "conductivity must be positive, got {}",
                self.material.conductivity
            )));
        }
        if self.right_h_w_per_m2_k <= 0.0 {
            return Err(SolverError::DegenerateBoundaryCondition(format!(
                "convective coefficient must be positive, got {}",
                self.right_h_w_per_m2_k
            )));
        }
        Ok(())
    }

    /// Number of time rows of the run: floor(D/dt).
    pub fn num_steps(&self) -> usize {
        (self.duration_s / self.time_step_s).floor() as usize
    }

    /// The two boundary conditions described by this configuration.
    pub fn boundaries(&self) -> Boundaries {
        Boundaries {
            left: ImposedTemperature {
                temperature_c: self.left_temperature_c,
            },
            right: ConvectiveExchange {
                h_w_per_m2_k: self.right_h_w_per_m2_k,
                air_temperature_c: self.right_air_temperature_c,
            },
        }
    }
}

impl Default for SimulationParameters {
    /// The reference scenario: a 1 m slab split into 20 cells, simulated for
    /// one hour at 0.1 s steps, cold imposed surface on the left and hot air
    /// with a strong film coefficient on the right.
    fn default() -> Self {
        Self {
            num_cells: 20,
            thickness_m: 1.0,
            duration_s: 3600.0,
            time_step_s: 0.1,
            log_interval_s: 72.0,
            material: Material {
                density: 480.0,
                specific_heat: 800.0,
                conductivity: 35.0,
            },
            area_m2: 1.0,
            left_temperature_c: 10.0,
            right_air_temperature_c: 100.0,
            right_h_w_per_m2_k: 10_000.0,
            initial_temperature_c: 35.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let params = SimulationParameters::default();
        params.validate().unwrap();
        assert_eq!(params.num_steps(), 36_000);
    }

    #[test]
    fn test_num_steps_floors() {
        let mut params = SimulationParameters::default();
        params.duration_s = 10.0;
        params.time_step_s = 0.3;
        assert_eq!(params.num_steps(), 33);
    }

    #[test]
    fn test_invalid_configuration_variants() {
        let base = SimulationParameters::default();

        let mut p = base.clone();
        p.num_cells = 0;
        assert!(matches!(p.validate(), Err(SolverError::InvalidConfiguration(_))));

        let mut p = base.clone();
        p.duration_s = 0.0;
        assert!(matches!(p.validate(), Err(SolverError::InvalidConfiguration(_))));

        let mut p = base.clone();
        p.time_step_s = -0.1;
        assert!(matches!(p.validate(), Err(SolverError::InvalidConfiguration(_))));

        let mut p = base.clone();
        p.material.density = 0.0;
        assert!(matches!(p.validate(), Err(SolverError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_degenerate_boundary_variants() {
        let base = SimulationParameters::default();

        let mut p = base.clone();
        p.material.conductivity = 0.0;
        assert!(matches!(
            p.validate(),
            Err(SolverError::DegenerateBoundaryCondition(_))
        ));

        let mut p = base;
        p.right_h_w_per_m2_k = 0.0;
        assert!(matches!(
            p.validate(),
            Err(SolverError::DegenerateBoundaryCondition(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let params = SimulationParameters::default();
        let json = serde_json::to_string_pretty(&params).unwrap();
        let back: SimulationParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn test_boundaries_mapping() {
        let params = SimulationParameters::default();
        let b = params.boundaries();
        assert_eq!(b.left.temperature_c, 10.0);
        assert_eq!(b.right.air_temperature_c, 100.0);
        assert_eq!(b.right.h_w_per_m2_k, 10_000.0);
    }
}
