use std::io::Write;

use super::observer::{StepControl, StepObserver};

/// Console progress bar rewritten in place with a carriage return.
///
/// Renders a 50-character `=`/`-` bar plus a percentage, e.g.
/// `[=========-----...] 18.0% ...thermal simulation`.  Redraws are throttled
/// to 0.1% increments so a tight solver loop is not dominated by terminal
/// writes.
pub struct ConsoleProgress {
    status: String,
    bar_len: usize,
    last_percent_tenths: Option<u64>,
}

impl ConsoleProgress {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            bar_len: 50,
            last_percent_tenths: None,
        }
    }

    /// Fraction of the run completed after `step` of `num_steps` rows.
    ///
    /// Row 0 is the initial condition, so the final computed row is
    /// `num_steps - 1` and maps to 100%.
    fn fraction(step: usize, num_steps: usize) -> f64 {
        if num_steps <= 1 {
            1.0
        } else {
            step as f64 / (num_steps - 1) as f64
        }
    }

    fn render(&self, step: usize, num_steps: usize) -> String {
        let fraction = Self::fraction(step, num_steps).clamp(0.0, 1.0);
        let filled = (self.bar_len as f64 * fraction).round() as usize;
        let percents = (fraction * 1000.0).round() / 10.0;
        format!(
            "[{}{}] {percents}% ...{}\r",
            "=".repeat(filled),
            "-".repeat(self.bar_len - filled),
            self.status
        )
    }
}

impl StepObserver for ConsoleProgress {
    fn name(&self) -> &'static str {
        "console_progress"
    }

    fn on_step(&mut self, step: usize, num_steps: usize, _: f64, _: &[f64]) -> StepControl {
        let tenths = (Self::fraction(step, num_steps) * 1000.0).round() as u64;
        if self.last_percent_tenths != Some(tenths) {
            self.last_percent_tenths = Some(tenths);
            let line = self.render(step, num_steps);
            let mut out = std::io::stdout().lock();
            // A failed terminal write must not abort the simulation.
            let _ = out.write_all(line.as_bytes());
            let _ = out.flush();
        }
        StepControl::Continue
    }
}
