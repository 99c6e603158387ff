//! Read-only projection of the simulation state for event actions.

use crate::parameters::Parameters;
use glow_particle::ChargedSpecies;
use glow_space::ScalarGrid;

/// What event actions get to see.
///
/// A fresh view is constructed for every notification; all references
/// are shared, so an action can observe but never mutate the run.
pub struct StateView<'a> {
    /// The run's parameters.
    pub parameters: &'a Parameters,
    /// Current step (0-based).
    pub step: usize,
    /// Current simulation time (s): `step × dt`.
    pub time: f64,
    /// Electron population.
    pub electrons: &'a ChargedSpecies,
    /// Ion population.
    pub ions: &'a ChargedSpecies,
    /// Deposited electron count grid for the current step.
    pub electron_density: &'a ScalarGrid,
    /// Deposited ion count grid for the current step.
    pub ion_density: &'a ScalarGrid,
}
