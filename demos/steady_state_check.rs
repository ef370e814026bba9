use anyhow::Result;

use wall1d::{ConsoleProgress, ExplicitWallSolver, Material, SimulationParameters};

/// Demonstrate the explicit wall solver and verify against the analytical
/// steady state.
///
/// With the left surface held at TG and the right side exchanging with air at
/// T_air through a film coefficient h, the steady profile is linear through
/// the slab: the resistance chain from the left surface to the air is
/// `R/k + 1/h` (per unit area), and node `m` sits `(m + 0.5) * dx` into it.
fn main() -> Result<()> {
    let params = SimulationParameters {
        num_cells: 20,
        thickness_m: 0.2,
        duration_s: 3600.0,
        time_step_s: 0.1,
        log_interval_s: 60.0,
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
    };

    let solver = ExplicitWallSolver::new(&params)?;
    let grid = *solver.grid();

    println!("Explicit 1D Wall Solver — Steady-State Verification");
    println!("{:=<60}", "");
    println!();
    println!(
        "  Slab: {} m, {} cells, dt = {} s (stability bound {:.4} s)",
        params.thickness_m,
        grid.num_cells,
        params.time_step_s,
        solver.max_stable_dt()
    );
    println!(
        "  TG = {} C | T_air = {} C, h = {} W/(m2*K)",
        params.left_temperature_c, params.right_air_temperature_c, params.right_h_w_per_m2_k
    );
    println!();

    let mut progress = ConsoleProgress::new("steady-state run");
    let field = solver.run_with(&mut progress);
    println!();
    println!();

    // Analytical steady state: per-area flux through the whole chain, then a
    // linear walk from the left surface to each node centroid.
    let k = params.material.conductivity;
    let h = params.right_h_w_per_m2_k;
    let r_total = params.thickness_m / k + 1.0 / h;
    let q = (params.right_air_temperature_c - params.left_temperature_c) / r_total;

    println!("  Analytical flux: {q:.4} W/m2 (R_total = {r_total:.6} m2*K/W)");
    println!();
    println!("    {:>4}  {:>12}  {:>12}  {:>10}", "Cell", "Solver [C]", "Exact [C]", "Err [C]");
    println!("    {:-<44}", "");

    let last = field.last_row().expect("non-empty run");
    let mut max_err = 0.0_f64;
    for (m, &t_solver) in last.iter().enumerate() {
        let x = (m as f64 + 0.5) * grid.dx;
        let t_exact = params.left_temperature_c + q * x / k;
        let err = (t_solver - t_exact).abs();
        max_err = max_err.max(err);
        println!("    {m:>4}  {t_solver:>12.4}  {t_exact:>12.4}  {err:>10.2e}");
    }
    println!("    {:-<44}", "");
    println!("  Max node error: {max_err:.2e} C");

    // Residual drift between the two last recorded rows.
    let n = field.num_steps();
    let drift = field
        .row(n - 1)
        .iter()
        .zip(field.row(n - 2))
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max);
    println!("  Max change over the final step: {drift:.2e} C");
    println!();

    if max_err < 1e-4 && drift < 1e-9 {
        println!("  PASS: converged to the resistance-chain profile");
    } else {
        println!("  FAIL: max error {max_err:.2e} C, drift {drift:.2e} C");
    }

    Ok(())
}
