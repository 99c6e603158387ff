//! Event lifecycle over a full run.

mod common;

use common::{tiny, RecordingAction};
use glow_engine::diagnostics::ProgressAction;
use glow_engine::{SimEvent, Simulation};

#[test]
fn lifecycle_fires_start_steps_end_in_order() {
    let mut sim = Simulation::new(tiny(3, 0)).unwrap();
    let (start, start_log) = RecordingAction::new();
    let (step, step_log) = RecordingAction::new();
    let (end, end_log) = RecordingAction::new();
    sim.events().add_action(SimEvent::Start, start);
    sim.events().add_action(SimEvent::Step, step);
    sim.events().add_action(SimEvent::End, end);

    sim.run().unwrap();

    assert_eq!(*start_log.borrow(), vec![(SimEvent::Start, 0)]);
    assert_eq!(
        *step_log.borrow(),
        vec![(SimEvent::Step, 0), (SimEvent::Step, 1), (SimEvent::Step, 2)]
    );
    // End observes the last completed step.
    assert_eq!(*end_log.borrow(), vec![(SimEvent::End, 2)]);
}

#[test]
fn actions_on_the_same_event_run_in_registration_order() {
    let mut sim = Simulation::new(tiny(1, 0)).unwrap();
    let (first, first_log) = RecordingAction::new();
    let (second, second_log) = RecordingAction::new();
    sim.events().add_action(SimEvent::Step, first);
    sim.events().add_action(SimEvent::Step, second);
    sim.run().unwrap();
    assert_eq!(first_log.borrow().len(), 1);
    assert_eq!(second_log.borrow().len(), 1);
}

#[test]
fn progress_printer_survives_a_single_step_run() {
    let mut sim = Simulation::new(tiny(1, 0)).unwrap();
    sim.events()
        .add_action(SimEvent::Step, ProgressAction::default());
    sim.run().unwrap();
}

#[test]
fn progress_printer_survives_summary_steps() {
    // A tight interval forces the summary branch (including the
    // percentage denominator) to execute during a short run.
    let mut sim = Simulation::new(tiny(25, 0)).unwrap();
    sim.events().add_action(SimEvent::Step, ProgressAction::new(10));
    sim.run().unwrap();
}

#[test]
fn populations_survive_a_quiet_run() {
    // Zero field, thermal particles, absorbing walls: most of the 25
    // initial particles stay inside over a handful of short steps.
    let mut sim = Simulation::new(tiny(3, 0)).unwrap();
    sim.run().unwrap();
    let state = sim.state();
    assert!(state.electrons.len() > 0);
    assert!(state.ions.len() > 0);
}
