//! Shared fixtures for the orchestrator integration tests.

#![allow(dead_code)]

use glow_engine::{EventAction, Parameters, SimEvent, StateView};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A small, fast parameter set: 5×5 grid, zero drive voltage, zero
/// particle weight. The field stays identically zero, so the run
/// exercises the full pipeline without any numerical stiffness.
pub fn tiny(n_steps: usize, n_steps_avg: usize) -> Parameters {
    let mut p = Parameters::case_1();
    p.nx = 5;
    p.ny = 5;
    p.lx = 0.01;
    p.ly = 0.01;
    p.n_initial = 25;
    p.n_steps = n_steps;
    p.n_steps_avg = n_steps_avg;
    p.particle_weight = 0.0;
    p.volt = 0.0;
    p.seed = 77;
    p
}

/// Records every notification it receives as `(event, step)`.
pub struct RecordingAction {
    log: Rc<RefCell<Vec<(SimEvent, usize)>>>,
}

impl RecordingAction {
    pub fn new() -> (Self, Rc<RefCell<Vec<(SimEvent, usize)>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl EventAction for RecordingAction {
    fn notify(&mut self, event: SimEvent, state: &StateView<'_>) {
        self.log.borrow_mut().push((event, state.step));
    }
}

/// A fresh scratch directory under the system temp dir.
pub fn scratch_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_nanos());
    let dir = std::env::temp_dir().join(format!(
        "glow-{tag}-{}-{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
