use std::fs;

use anyhow::{Context, Result};

use wall1d::sim::export::{HeatmapExporter, ProfileGifExporter, write_history_csv};
use wall1d::{
    ConsoleProgress, ExplicitWallSolver, HistoryRecorder, ObserverChain, SimulationParameters,
};

/// Run a transient 1D wall simulation and export its results.
///
/// Usage: `wall1d [config.json]`.  Without an argument the reference scenario
/// is used; with one, parameters are read from a JSON file (the same shape
/// `serde_json` produces for [`SimulationParameters`]).
fn main() -> Result<()> {
    let params = match std::env::args().nth(1) {
        Some(path) => {
            let text =
                fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?
        }
        None => SimulationParameters::default(),
    };

    let solver = ExplicitWallSolver::new(&params)?;
    let grid = *solver.grid();

    println!("1D Wall Transient Conduction");
    println!("{:=<60}", "");
    println!("  Slab:       {} m, {} cells (dx = {} m)", params.thickness_m, grid.num_cells, grid.dx);
    println!(
        "  Material:   rho = {} kg/m3, C = {} J/(kg*K), k = {} W/(m*K)",
        params.material.density, params.material.specific_heat, params.material.conductivity
    );
    println!(
        "  Boundaries: left {} C imposed | right air {} C, h = {} W/(m2*K)",
        params.left_temperature_c, params.right_air_temperature_c, params.right_h_w_per_m2_k
    );
    println!(
        "  Time:       {} s in {} steps of {} s",
        params.duration_s,
        solver.num_steps(),
        params.time_step_s
    );
    let dt_max = solver.max_stable_dt();
    if params.time_step_s > dt_max {
        println!(
            "  WARNING: dt = {} s exceeds the explicit stability bound ({dt_max:.4} s); \
             expect divergence",
            params.time_step_s
        );
    }
    println!();

    let mut progress = ConsoleProgress::new("wall 1D transient");
    let mut recorder = HistoryRecorder::new(params.log_interval_s);
    let mut observers = ObserverChain::new().with(&mut progress).with(&mut recorder);
    let field = solver.run_with(&mut observers);
    println!();

    if let Some(last) = field.last_row() {
        println!(
            "  Final profile after {} s: left node {:.3} C, right node {:.3} C",
            field.time_at(field.num_steps().saturating_sub(1)),
            last[0],
            last[last.len() - 1]
        );
    }

    write_history_csv("wall1d_history.csv", recorder.samples())?;
    HeatmapExporter::default().export_png(&field, "wall1d_field.png")?;
    ProfileGifExporter::default().export_gif(&field, "wall1d_profile.gif")?;
    println!("  Wrote wall1d_history.csv, wall1d_field.png, wall1d_profile.gif");

    Ok(())
}
