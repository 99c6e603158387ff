//! Trailing-window density averaging over full runs.

mod common;

use common::tiny;
use glow_engine::diagnostics::AverageFieldAction;
use glow_engine::{SimEvent, Simulation};

fn accumulated_count(n_steps: usize, n_steps_avg: usize) -> usize {
    let mut sim = Simulation::new(tiny(n_steps, n_steps_avg)).unwrap();
    let averager = AverageFieldAction::new(sim.parameters()).unwrap();
    let handle = sim.events().add_action(SimEvent::Step, averager);
    sim.run().unwrap();
    let averager = handle.upgrade().expect("bus keeps the averager alive");
    let averager = averager.borrow();
    assert_eq!(averager.electron_sum().count(), averager.ion_sum().count());
    averager.electron_sum().count()
}

#[test]
fn window_of_two_accumulates_exactly_two_samples() {
    assert_eq!(accumulated_count(6, 2), 2);
}

#[test]
fn zero_window_accumulates_nothing() {
    assert_eq!(accumulated_count(6, 0), 0);
}

#[test]
fn full_window_accumulates_every_step() {
    assert_eq!(accumulated_count(4, 4), 4);
}

#[test]
fn window_sums_reflect_live_particle_counts() {
    // Zero field, zero-temperature populations, and a cold background
    // gas: every relative velocity is zero, so nothing moves, no
    // particle reaches a wall, and no collision channel opens. Each
    // accumulated sample then deposits the full population and the sum
    // totals count × population exactly.
    let mut p = tiny(2, 2);
    p.te = 0.0;
    p.ti = 0.0;
    p.tg = 0.0;
    let mut sim = Simulation::new(p).unwrap();
    let averager = AverageFieldAction::new(sim.parameters()).unwrap();
    let handle = sim.events().add_action(SimEvent::Step, averager);
    sim.run().unwrap();

    let state = sim.state();
    let averager = handle.upgrade().unwrap();
    let averager = averager.borrow();
    let expected = (averager.electron_sum().count() * state.electrons.len()) as f64;
    let total: f64 = averager.electron_sum().sum().total();
    assert!(
        (total - expected).abs() < 1e-9,
        "sum {total} != count × population {expected}"
    );
}
