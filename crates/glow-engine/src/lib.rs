//! Discharge simulation orchestrator.
//!
//! This crate ties the kernels together: [`Parameters`] configures a
//! run, [`Simulation`] executes the per-step pipeline, and diagnostics
//! observe it through the [`EventBus`] without touching the state.
//!
//! ```no_run
//! use glow_engine::{diagnostics, Parameters, Simulation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut simulation = Simulation::new(Parameters::case_1())?;
//! diagnostics::setup_events(&mut simulation, ".")?;
//! simulation.run()?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diagnostics;
pub mod events;
pub mod parameters;
pub mod reactions;
pub mod simulation;
pub mod state;

pub use events::{EventAction, EventBus, SimEvent};
pub use parameters::{ConfigError, Parameters};
pub use simulation::{field_regions, RunError, Simulation};
pub use state::StateView;
