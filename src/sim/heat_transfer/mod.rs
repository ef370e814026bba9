//! Explicit finite-volume heat transfer through a 1D slab.
//!
//! # Architecture
//!
//! ```text
//! SimulationParameters ──► SlabGrid::build() ──► ExplicitWallSolver
//!                                                      │
//!                                          run() / run_with(observer)
//!                                                      │
//!                                                      ▼
//!                                              TemperatureField
//! ```
//!
//! The solver marches forward in time: row `t` of the field is computed from
//! row `t-1` alone, one energy balance per control volume, with an imposed
//! temperature on the left surface and a convective exchange on the right.

pub mod boundary;
pub mod field;
pub mod grid;
pub mod solver;

pub use boundary::{Boundaries, ConvectiveExchange, ImposedTemperature};
pub use field::TemperatureField;
pub use grid::SlabGrid;
pub use solver::ExplicitWallSolver;
