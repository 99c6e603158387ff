//! Built-in diagnostic event actions.
//!
//! The standard wiring ([`setup_events`]) registers a start banner, a
//! step progress printer, a trailing-window density averager, and a
//! save-on-end writer that depends on the averager through a [`Weak`]
//! handle. The progress output goes to stdout; everything else reports
//! through the `log` facade.

use crate::events::{EventAction, SimEvent};
use crate::parameters::Parameters;
use crate::simulation::Simulation;
use crate::state::StateView;
use glow_space::{AverageGrid, GridError};
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Weak;
use std::time::Instant;

/// Prints a one-line banner when the run starts.
pub struct StartBanner;

impl EventAction for StartBanner {
    fn notify(&mut self, _event: SimEvent, _state: &StateView<'_>) {
        println!("Starting simulation");
    }
}

/// Periodic progress printer for the step loop.
///
/// Every `interval / 10` steps it prints a tick mark; every `interval`
/// steps a summary block with the average step duration, per-particle
/// time, and live particle counts. Step 0 only initializes the timer.
pub struct ProgressAction {
    interval: usize,
    timer: Option<Instant>,
    initial_step: usize,
}

impl ProgressAction {
    /// Summary interval used by the standard wiring.
    pub const DEFAULT_INTERVAL: usize = 1000;

    /// A printer reporting every `interval` steps (minimum 10, so the
    /// tick-mark sub-interval stays non-zero).
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(10),
            timer: None,
            initial_step: 0,
        }
    }
}

impl Default for ProgressAction {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

impl EventAction for ProgressAction {
    fn notify(&mut self, _event: SimEvent, state: &StateView<'_>) {
        let step = state.step;
        if step == 0 {
            self.timer = Some(Instant::now());
            self.initial_step = 0;
            return;
        }

        if step % (self.interval / 10) == 0 {
            print!("-");
        }
        if step % self.interval != 0 {
            return;
        }
        println!();

        let elapsed_ms = self
            .timer
            .map_or(0.0, |t0| t0.elapsed().as_secs_f64() * 1e3);
        let steps_timed = (step - self.initial_step).max(1);
        let step_ms = elapsed_ms / steps_timed as f64;
        self.timer = Some(Instant::now());
        self.initial_step = step;

        let n_steps = state.parameters.n_steps;
        // n_steps = 1 never reaches here (step 0 returns early), but the
        // denominator is clamped anyway.
        let progress = step as f64 / (n_steps - 1).max(1) as f64;
        let population = state.electrons.len() + state.ions.len();
        let per_particle_us = if population > 0 {
            step_ms * 1e3 / population as f64
        } else {
            0.0
        };

        println!("Info (Step: {}/{}, {:.2}%):", step, n_steps, progress * 100.0);
        println!("    Avg step duration: {step_ms:.2}ms ({per_particle_us:.2e}us/p)");
        println!("    Sim electrons: {}", state.electrons.len());
        println!("    Sim ions: {}", state.ions.len());
        println!();
    }
}

/// Accumulates both density grids over the trailing averaging window.
///
/// With a window of `k` steps out of `n`, accumulation happens for
/// every step with `step >= n - k` (0-based), so exactly `k` samples
/// land in the sums. A zero-width window accumulates nothing.
pub struct AverageFieldAction {
    electron_sum: AverageGrid,
    ion_sum: AverageGrid,
    first_step: usize,
}

impl AverageFieldAction {
    /// Build an averager sized for the run described by `parameters`.
    ///
    /// # Errors
    ///
    /// [`GridError`] if the parameters describe a degenerate grid.
    pub fn new(parameters: &Parameters) -> Result<Self, GridError> {
        let prop = parameters.grid()?;
        Ok(Self {
            electron_sum: AverageGrid::new(prop),
            ion_sum: AverageGrid::new(prop),
            first_step: parameters.n_steps.saturating_sub(parameters.n_steps_avg),
        })
    }

    /// The accumulated electron count sums.
    pub fn electron_sum(&self) -> &AverageGrid {
        &self.electron_sum
    }

    /// The accumulated ion count sums.
    pub fn ion_sum(&self) -> &AverageGrid {
        &self.ion_sum
    }
}

impl EventAction for AverageFieldAction {
    fn notify(&mut self, _event: SimEvent, state: &StateView<'_>) {
        if state.step < self.first_step {
            return;
        }
        for (sum, sample) in [
            (&mut self.electron_sum, state.electron_density),
            (&mut self.ion_sum, state.ion_density),
        ] {
            if let Err(e) = sum.add(sample) {
                log::warn!("density accumulation skipped at step {}: {e}", state.step);
            }
        }
    }
}

/// Writes the averaged densities to disk when the run ends.
///
/// Holds a non-owning handle to the [`AverageFieldAction`]; if the
/// averager has been dropped by the time `End` fires, the writer skips
/// silently and produces no files.
pub struct SaveDataAction {
    averager: Weak<RefCell<AverageFieldAction>>,
    out_dir: PathBuf,
}

impl SaveDataAction {
    /// Electron density output filename.
    pub const ELECTRON_FILE: &'static str = "density_e.txt";
    /// Ion density output filename.
    pub const ION_FILE: &'static str = "density_i.txt";

    /// A writer targeting `out_dir`, reading from `averager`.
    pub fn new(averager: Weak<RefCell<AverageFieldAction>>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            averager,
            out_dir: out_dir.into(),
        }
    }

    /// Convert an accumulated count sum to a physical density and write
    /// it as `nx` rows of `ny` space-separated values.
    fn write_density(path: &Path, sum: &AverageGrid, p: &Parameters) -> io::Result<()> {
        let scale = p.particle_weight / (p.dx() * p.dy());
        let mut out = BufWriter::new(File::create(path)?);
        let grid = sum.sum();
        for i in 0..p.nx {
            for j in 0..p.ny {
                if j > 0 {
                    write!(out, " ")?;
                }
                write!(out, "{}", grid.get(i, j) * scale)?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}

impl EventAction for SaveDataAction {
    fn notify(&mut self, _event: SimEvent, state: &StateView<'_>) {
        let Some(averager) = self.averager.upgrade() else {
            return;
        };
        let averager = averager.borrow();
        let p = state.parameters;
        for (name, sum) in [
            (Self::ELECTRON_FILE, averager.electron_sum()),
            (Self::ION_FILE, averager.ion_sum()),
        ] {
            let path = self.out_dir.join(name);
            if let Err(e) = Self::write_density(&path, sum, p) {
                log::error!("failed to write {}: {e}", path.display());
            }
        }
    }
}

/// Register the standard diagnostics on `simulation`, writing output
/// files into `out_dir`.
///
/// # Errors
///
/// [`GridError`] if the averager cannot be sized from the parameters.
pub fn setup_events(
    simulation: &mut Simulation,
    out_dir: impl Into<PathBuf>,
) -> Result<(), GridError> {
    let averager = AverageFieldAction::new(simulation.parameters())?;
    let events = simulation.events();
    events.add_action(SimEvent::Start, StartBanner);
    events.add_action(SimEvent::Step, ProgressAction::default());
    let handle = events.add_action(SimEvent::Step, averager);
    events.add_action(SimEvent::End, SaveDataAction::new(handle, out_dir));
    Ok(())
}
