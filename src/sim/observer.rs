/// Decision returned by an observer after each completed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
    Continue,
    /// Stop cooperatively between time steps; the solver returns whatever
    /// rows have been completed.
    Stop,
}

/// A read-only consumer of solver progress.
///
/// Observers can report progress to a console, record samples for export, or
/// request a cooperative stop. They receive a borrowed row and cannot mutate
/// solver state.
pub trait StepObserver {
    /// Human-readable identifier for debugging / telemetry.
    fn name(&self) -> &'static str;

    /// Called after row `step` (1-based within `1..num_steps`) is finalized.
    /// `row` is the temperature of every node at `time_s`.
    fn on_step(&mut self, step: usize, num_steps: usize, time_s: f64, row: &[f64]) -> StepControl;
}

/// Observer that ignores every report.
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn name(&self) -> &'static str {
        "null"
    }

    fn on_step(&mut self, _: usize, _: usize, _: f64, _: &[f64]) -> StepControl {
        StepControl::Continue
    }
}

/// Executes a sequence of observers on every step.
///
/// Observers are borrowed, not owned, so the caller keeps access to their
/// accumulated state (e.g. a recorder's samples) after the run.
#[derive(Default)]
pub struct ObserverChain<'a> {
    observers: Vec<&'a mut dyn StepObserver>,
}

impl<'a> ObserverChain<'a> {
    pub fn new() -> Self {
        Self { observers: vec![] }
    }

    pub fn with(mut self, observer: &'a mut dyn StepObserver) -> Self {
        self.observers.push(observer);
        self
    }
}

impl StepObserver for ObserverChain<'_> {
    fn name(&self) -> &'static str {
        "observer_chain"
    }

    /// All observers see every step; a stop request from any of them wins.
    fn on_step(&mut self, step: usize, num_steps: usize, time_s: f64, row: &[f64]) -> StepControl {
        let mut control = StepControl::Continue;
        for observer in self.observers.iter_mut() {
            if observer.on_step(step, num_steps, time_s, row) == StepControl::Stop {
                control = StepControl::Stop;
            }
        }
        control
    }
}
