pub mod config;
pub mod errors;
pub mod sim;

// Prelude
pub use config::SimulationParameters;
pub use errors::SolverError;
pub use sim::heat_transfer::{
    Boundaries, ConvectiveExchange, ExplicitWallSolver, ImposedTemperature, SlabGrid,
    TemperatureField,
};
pub use sim::materials::Material;
pub use sim::observer::{NullObserver, ObserverChain, StepControl, StepObserver};
pub use sim::progress::ConsoleProgress;
pub use sim::recorder::{HistoryRecorder, HistorySample};
