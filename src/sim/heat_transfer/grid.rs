use crate::errors::SolverError;

/// Control-volume geometry of a 1D slab discretization.
///
/// The slab of thickness `R` is split into `num_cells` equal control volumes;
/// each cell's node sits at its centroid, so half a cell separates each
/// boundary surface from the nearest node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabGrid {
    /// Number of control volumes.
    pub num_cells: usize,
    /// Elementary length: thickness / num_cells  [m].
    pub dx: f64,
    /// Cross-section area  [m^2].
    pub area: f64,
    /// Control-volume volume: area * dx  [m^3].
    pub cell_volume: f64,
}

impl SlabGrid {
    /// Derive the grid from slab thickness, node count and cross-section area.
    pub fn build(thickness_m: f64, num_cells: usize, area_m2: f64) -> Result<SlabGrid, SolverError> {
        if num_cells == 0 {
            return Err(SolverError::InvalidConfiguration(
                "node count must be at least 1".to_string(),
            ));
        }
        if thickness_m <= 0.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "slab thickness must be positive, got {thickness_m}"
            )));
        }
        if area_m2 <= 0.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "cross-section area must be positive, got {area_m2}"
            )));
        }

        let dx = thickness_m / num_cells as f64;
        Ok(SlabGrid {
            num_cells,
            dx,
            area: area_m2,
            cell_volume: area_m2 * dx,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_geometry() {
        let grid = SlabGrid::build(1.0, 20, 1.0).unwrap();
        assert_eq!(grid.num_cells, 20);
        assert!((grid.dx - 0.05).abs() < 1e-12);
        assert!((grid.cell_volume - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_grid_scales_volume_with_area() {
        let grid = SlabGrid::build(0.3, 3, 12.0).unwrap();
        assert!((grid.dx - 0.1).abs() < 1e-12);
        assert!((grid.cell_volume - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_grid_rejects_bad_inputs() {
        assert!(matches!(
            SlabGrid::build(1.0, 0, 1.0),
            Err(SolverError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SlabGrid::build(0.0, 5, 1.0),
            Err(SolverError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SlabGrid::build(1.0, 5, -2.0),
            Err(SolverError::InvalidConfiguration(_))
        ));
    }
}
