/// Space-time temperature record of one solver run.
///
/// Row-major `[num_steps][num_cells]` array: row `t` holds every node's
/// temperature at physical time `t * dt`.  Rows are written strictly forward
/// in time by the solver and are read-only to every consumer afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureField {
    num_cells: usize,
    time_step_s: f64,
    data: Vec<f64>,
}

impl TemperatureField {
    /// Allocate the full field with row 0 set to the uniform initial
    /// temperature.  Remaining rows start at the same value and are
    /// overwritten as the solver advances.
    pub(crate) fn new(
        num_steps: usize,
        num_cells: usize,
        time_step_s: f64,
        initial_temperature_c: f64,
    ) -> Self {
        Self {
            num_cells,
            time_step_s,
            data: vec![initial_temperature_c; num_steps * num_cells],
        }
    }

    /// Number of recorded time rows.
    pub fn num_steps(&self) -> usize {
        if self.num_cells == 0 {
            0
        } else {
            self.data.len() / self.num_cells
        }
    }

    /// Number of spatial nodes per row.
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// Simulation time step  [s].
    pub fn time_step_s(&self) -> f64 {
        self.time_step_s
    }

    /// Physical time of row `t`  [s].
    pub fn time_at(&self, t: usize) -> f64 {
        t as f64 * self.time_step_s
    }

    /// Temperatures of row `t`.
    ///
    /// Panics if `t` is out of range, like any slice index.
    pub fn row(&self, t: usize) -> &[f64] {
        &self.data[t * self.num_cells..(t + 1) * self.num_cells]
    }

    /// Last recorded row, if any.
    pub fn last_row(&self) -> Option<&[f64]> {
        self.num_steps().checked_sub(1).map(|t| self.row(t))
    }

    /// Iterate over `(time_s, row)` pairs in time order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, &[f64])> {
        self.data
            .chunks_exact(self.num_cells.max(1))
            .enumerate()
            .map(move |(t, row)| (self.time_at(t), row))
    }

    /// Iterate over every `stride`-th row (always including row 0), the
    /// decimated subsequence used for plotting and animation.
    pub fn rows_every(&self, stride: usize) -> impl Iterator<Item = (f64, &[f64])> {
        let stride = stride.max(1);
        self.rows().step_by(stride)
    }

    /// Minimum and maximum temperature over the whole field.
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        let mut it = self.data.iter().copied();
        let first = it.next()?;
        let mut min = first;
        let mut max = first;
        for v in it {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }

    /// Borrow row `t-1` immutably and row `t` mutably at the same time.
    ///
    /// The explicit update rule reads only old-row values, so the solver needs
    /// exactly this split view while filling row `t`.
    pub(crate) fn rows_split_mut(&mut self, t: usize) -> (&[f64], &mut [f64]) {
        let m = self.num_cells;
        let (done, rest) = self.data.split_at_mut(t * m);
        (&done[(t - 1) * m..], &mut rest[..m])
    }

    /// Drop all rows from `num_steps` onward (cooperative-stop support).
    pub(crate) fn truncate(&mut self, num_steps: usize) {
        self.data.truncate(num_steps * self.num_cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_initial_row() {
        let field = TemperatureField::new(5, 3, 0.1, 35.0);
        assert_eq!(field.num_steps(), 5);
        assert_eq!(field.num_cells(), 3);
        assert_eq!(field.row(0), &[35.0, 35.0, 35.0]);
        assert!((field.time_at(4) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_split_rows_are_disjoint() {
        let mut field = TemperatureField::new(3, 2, 1.0, 0.0);
        {
            let (prev, next) = field.rows_split_mut(1);
            assert_eq!(prev.len(), 2);
            next[0] = 1.0;
            next[1] = 2.0;
        }
        assert_eq!(field.row(1), &[1.0, 2.0]);
        assert_eq!(field.row(0), &[0.0, 0.0]);
    }

    #[test]
    fn test_rows_every_includes_first_row() {
        let field = TemperatureField::new(10, 1, 0.5, 7.0);
        let times: Vec<f64> = field.rows_every(4).map(|(t, _)| t).collect();
        assert_eq!(times, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_truncate() {
        let mut field = TemperatureField::new(10, 2, 0.5, 7.0);
        field.truncate(4);
        assert_eq!(field.num_steps(), 4);
    }

    #[test]
    fn test_temperature_range() {
        let mut field = TemperatureField::new(2, 2, 1.0, 5.0);
        {
            let (_, next) = field.rows_split_mut(1);
            next[0] = -1.0;
            next[1] = 9.0;
        }
        assert_eq!(field.temperature_range(), Some((-1.0, 9.0)));
    }
}
