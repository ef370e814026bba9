use wall1d::{ExplicitWallSolver, Material, SimulationParameters};

fn thin_slab() -> SimulationParameters {
    SimulationParameters {
        num_cells: 10,
        thickness_m: 0.1,
        duration_s: 600.0,
        time_step_s: 0.05,
        log_interval_s: 10.0,
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

/// Held long enough, the field converges to the linear resistance-chain
/// profile between the two boundary-implied temperatures.
#[test]
fn test_steady_state_is_linear_between_boundaries() {
    let params = thin_slab();
    let solver = ExplicitWallSolver::new(&params).unwrap();
    assert!(
        params.time_step_s < solver.max_stable_dt(),
        "setup must be stable, bound = {}",
        solver.max_stable_dt()
    );

    // 600 s >> diffusion time rho*C*R^2/k ~ 110 s.
    let field = solver.run();
    let grid = solver.grid();

    let k = params.material.conductivity;
    let r_total = params.thickness_m / k + 1.0 / params.right_h_w_per_m2_k;
    let q = (params.right_air_temperature_c - params.left_temperature_c) / r_total;

    let last = field.last_row().unwrap();
    for (m, &t) in last.iter().enumerate() {
        let expected = params.left_temperature_c + q * (m as f64 + 0.5) * grid.dx / k;
        assert!(
            (t - expected).abs() < 1e-6,
            "node {m}: got {t}, expected {expected}"
        );
    }
}

/// Between the two final recorded rows the field must be essentially frozen.
#[test]
fn test_steady_state_stops_changing() {
    let solver = ExplicitWallSolver::new(&thin_slab()).unwrap();
    let field = solver.run();
    let n = field.num_steps();
    for (a, b) in field.row(n - 1).iter().zip(field.row(n - 2)) {
        assert!((a - b).abs() < 1e-9, "residual drift {}", (a - b).abs());
    }
}

/// Two independently constructed solvers produce bit-identical fields.
#[test]
fn test_runs_are_reproducible() {
    let params = thin_slab();
    let a = ExplicitWallSolver::new(&params).unwrap().run();
    let b = ExplicitWallSolver::new(&params).unwrap().run();
    assert_eq!(a.num_steps(), b.num_steps());
    for ((_, ra), (_, rb)) in a.rows().zip(b.rows()) {
        assert_eq!(ra, rb);
    }
}

/// The hand-checked 3-node scenario exercised through the public API.
#[test]
fn test_reference_scenario_first_step() {
    let params = SimulationParameters {
        num_cells: 3,
        thickness_m: 1.0,
        duration_s: 0.5,
        time_step_s: 0.1,
        ..thin_slab()
    };
    let solver = ExplicitWallSolver::new(&params).unwrap();
    let field = solver.run();

    let dx = 1.0 / 3.0;
    let mass = 480.0 * 800.0 * dx / 0.1;
    let expected = [
        35.0 + 2.0 * 35.0 / dx * (10.0 - 35.0) / mass,
        35.0,
        35.0 + 1.0 / (dx / 70.0 + 1.0 / 10_000.0) * (100.0 - 35.0) / mass,
    ];
    for (m, (&got, want)) in field.row(1).iter().zip(expected).enumerate() {
        assert!((got - want).abs() < 1e-9, "node {m}: {got} vs {want}");
    }
}

/// Equilibrium start: symmetric boundaries equal to T0 keep every row at T0.
#[test]
fn test_equilibrium_invariance() {
    let params = SimulationParameters {
        left_temperature_c: 35.0,
        right_air_temperature_c: 35.0,
        duration_s: 10.0,
        ..thin_slab()
    };
    let field = ExplicitWallSolver::new(&params).unwrap().run();
    assert!(field.num_steps() > 1);
    for (_, row) in field.rows() {
        assert!(row.iter().all(|&v| v == 35.0));
    }
}
