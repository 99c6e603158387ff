//! Run a short RF discharge with the standard diagnostics.
//!
//! Uses the first benchmark preset, shortened so the example finishes
//! quickly, and writes the averaged densities to the working directory.

use glow_engine::{diagnostics, Parameters, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut parameters = Parameters::case_1();
    parameters.nx = 33;
    parameters.ny = 65;
    parameters.n_initial = 10_000;
    parameters.particle_weight =
        parameters.n0 * parameters.lx * parameters.ly / parameters.n_initial as f64;
    parameters.n_steps = 5_000;
    parameters.n_steps_avg = 500;

    let mut simulation = Simulation::new(parameters)?;
    diagnostics::setup_events(&mut simulation, ".")?;
    simulation.run()?;

    let state = simulation.state();
    println!(
        "Done: {} electrons, {} ions alive",
        state.electrons.len(),
        state.ions.len()
    );
    Ok(())
}
