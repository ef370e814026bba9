use serde::{Deserialize, Serialize};

/// Homogeneous solid material of the slab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Density in kg/m^3.
    pub density: f64,
    /// Specific heat capacity in J/(kg*K).
    pub specific_heat: f64,
    /// Thermal conductivity in W/(m*K).
    pub conductivity: f64,
}

impl Material {
    /// Volumetric heat capacity: rho * c_p  [J/(m^3*K)].
    pub fn volumetric_capacity(&self) -> f64 {
        self.density * self.specific_heat
    }

    /// Thermal diffusivity: k / (rho * c_p)  [m^2/s].
    pub fn diffusivity(&self) -> f64 {
        self.conductivity / self.volumetric_capacity()
    }
}
