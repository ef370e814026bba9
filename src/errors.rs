use thiserror::Error;

/// Errors raised while validating a simulation setup.
///
/// All of these are detected before the time loop starts; once a solver is
/// constructed, stepping is plain arithmetic with no failure path.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Non-positive node count, thickness, duration, time step or other
    /// physical property.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Zero (or negative) conductivity or convective coefficient, which would
    /// divide by zero inside a flux computation.
    #[error("degenerate boundary condition: {0}")]
    DegenerateBoundaryCondition(String),
}
