//! The discharge simulation orchestrator.

use crate::events::{EventBus, SimEvent};
use crate::parameters::{ConfigError, Parameters};
use crate::reactions;
use crate::state::StateView;
use glow_collisions::{Spawned, TableError};
use glow_core::Vec2;
use glow_em::{
    charge_density, electric_field, DomainProp, Region, RegionError, SolverError,
    StructPoissonSolver,
};
use glow_interpolate::{field_at_particles, weight_to_grid};
use glow_particle::{
    absorbing_rectangle, maxwellian_emitter, move_particles, BoundaryError, ChargedSpecies,
    TiledBoundarySet,
};
use glow_space::{GridError, ScalarGrid, VectorGrid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Errors that abort a run.
///
/// The simulation state is left as of the last completed step; nothing
/// is rolled back.
#[derive(Debug)]
pub enum RunError {
    /// The particle boundary specification was rejected.
    Boundary(BoundaryError),
    /// The field boundary regions were rejected.
    Region(RegionError),
    /// The Poisson solve failed.
    Solver(SolverError),
    /// A grid operation failed (shape mismatch).
    Grid(GridError),
    /// A built-in cross-section table was rejected.
    Table(TableError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boundary(e) => write!(f, "particle boundary: {e}"),
            Self::Region(e) => write!(f, "field boundary: {e}"),
            Self::Solver(e) => write!(f, "poisson solver: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Table(e) => write!(f, "cross-section table: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Boundary(e) => Some(e),
            Self::Region(e) => Some(e),
            Self::Solver(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Table(e) => Some(e),
        }
    }
}

impl From<BoundaryError> for RunError {
    fn from(e: BoundaryError) -> Self {
        Self::Boundary(e)
    }
}

impl From<RegionError> for RunError {
    fn from(e: RegionError) -> Self {
        Self::Region(e)
    }
}

impl From<SolverError> for RunError {
    fn from(e: SolverError) -> Self {
        Self::Solver(e)
    }
}

impl From<GridError> for RunError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<TableError> for RunError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

/// Build the four field boundary regions for the discharge domain.
///
/// The powered electrode sits on the bottom edge (`y = 0`) and carries
/// `volt · sin(2π f t)`; the top edge is grounded; the two sides are
/// zero-gradient, closing the rectangle.
pub fn field_regions(p: &Parameters) -> Vec<Region> {
    let (i1, j1) = (p.nx as i32 - 1, p.ny as i32 - 1);
    let (volt, f) = (p.volt, p.f);
    vec![
        Region {
            kind: glow_em::CellKind::FixedValue,
            min: (0, 0),
            max: (i1, 0),
            value: Box::new(move |t| volt * (std::f64::consts::TAU * f * t).sin()),
        },
        Region::fixed((0, j1), (i1, j1), 0.0),
        Region::zero_gradient((0, 0), (0, j1)),
        Region::zero_gradient((i1, 0), (i1, j1)),
    ]
}

/// A configured discharge simulation.
///
/// Construction validates the parameters and allocates the state;
/// [`run`](Simulation::run) executes the step loop, firing
/// [`SimEvent`]s for any registered diagnostics.
pub struct Simulation {
    parameters: Parameters,
    events: EventBus,
    step: usize,
    time: f64,
    electrons: ChargedSpecies,
    ions: ChargedSpecies,
    electron_density: ScalarGrid,
    ion_density: ScalarGrid,
    rho: ScalarGrid,
    phi: ScalarGrid,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Validate `parameters` and set up an unseeded simulation.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for any violated parameter invariant.
    pub fn new(parameters: Parameters) -> Result<Self, ConfigError> {
        parameters.validate()?;
        let prop = parameters.grid()?;
        let c = parameters.constants;
        Ok(Self {
            events: EventBus::new(),
            step: 0,
            time: 0.0,
            electrons: ChargedSpecies::new(-c.qe, c.m_e),
            ions: ChargedSpecies::new(c.qe, parameters.m_ion),
            electron_density: ScalarGrid::new(prop),
            ion_density: ScalarGrid::new(prop),
            rho: ScalarGrid::new(prop),
            phi: ScalarGrid::new(prop),
            rng: ChaCha8Rng::seed_from_u64(parameters.seed),
            parameters,
        })
    }

    /// The run's parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The event bus, for registering diagnostics before the run.
    pub fn events(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// A read-only view of the current state.
    pub fn state(&self) -> StateView<'_> {
        StateView {
            parameters: &self.parameters,
            step: self.step,
            time: self.time,
            electrons: &self.electrons,
            ions: &self.ions,
            electron_density: &self.electron_density,
            ion_density: &self.ion_density,
        }
    }

    fn fire(&self, event: SimEvent) {
        let state = self.state();
        self.events.notify(event, &state);
    }

    /// Seed both populations from Maxwellian distributions.
    fn set_initial_conditions(&mut self) {
        let p = &self.parameters;
        let (n, te, ti, lx, ly) = (p.n_initial, p.te, p.ti, p.lx, p.ly);
        let (m_e, m_ion, kb) = (p.constants.m_e, p.m_ion, p.constants.kb);
        self.electrons
            .add(n, maxwellian_emitter(te, lx, ly, m_e, kb, &mut self.rng));
        self.ions
            .add(n, maxwellian_emitter(ti, lx, ly, m_ion, kb, &mut self.rng));
    }

    fn absorb_spawned(&mut self, spawned: Spawned, projectile_is_electron: bool) {
        let (proj, partner) = if projectile_is_electron {
            (&mut self.electrons, &mut self.ions)
        } else {
            (&mut self.ions, &mut self.electrons)
        };
        for (x, v) in spawned.projectile {
            proj.push(x, v);
        }
        for (x, v) in spawned.partner {
            partner.push(x, v);
        }
    }

    /// Execute the configured run.
    ///
    /// Pipeline per step: deposit both species → combine into the net
    /// charge grid → Poisson solve → derive E → gather at particles →
    /// push → absorb at the walls → collide both species → fire `Step`.
    /// `Start` fires once before the loop and `End` once after it.
    ///
    /// # Errors
    ///
    /// [`RunError`] on any kernel failure; the state of the last
    /// completed step is kept.
    pub fn run(&mut self) -> Result<(), RunError> {
        let p = self.parameters.clone();
        let prop = p.grid()?;
        log::debug!(
            "run starting: {} steps, {} initial particles per species",
            p.n_steps,
            p.n_initial
        );

        self.set_initial_conditions();

        let electron_mcc = reactions::electron_reaction_set(&p)?;
        let ion_mcc = reactions::ion_reaction_set(&p)?;

        let c = p.constants;
        let domain = DomainProp {
            prop,
            source_scale: c.qe / (c.eps0 * p.dx() * p.dy()),
        };
        let solver = StructPoissonSolver::new(domain, field_regions(&p))?;
        let boundaries = TiledBoundarySet::new(prop, &absorbing_rectangle(p.nx, p.ny), p.dt)?;

        let mut efield = VectorGrid::new(prop);
        let mut electron_field: Vec<Vec2> = Vec::new();
        let mut ion_field: Vec<Vec2> = Vec::new();

        self.step = 0;
        self.time = 0.0;
        self.fire(SimEvent::Start);

        for step in 0..p.n_steps {
            self.step = step;
            self.time = step as f64 * p.dt;

            weight_to_grid(&self.electrons, &mut self.electron_density);
            weight_to_grid(&self.ions, &mut self.ion_density);
            charge_density(
                p.particle_weight,
                &self.ion_density,
                &self.electron_density,
                &mut self.rho,
            )?;

            solver.solve(&mut self.phi, &self.rho, self.time)?;
            electric_field(&self.phi, &mut efield)?;

            field_at_particles(&efield, &self.electrons, &mut electron_field);
            field_at_particles(&efield, &self.ions, &mut ion_field);

            move_particles(&mut self.electrons, &electron_field, p.dt);
            move_particles(&mut self.ions, &ion_field, p.dt);

            boundaries.apply(&mut self.electrons);
            boundaries.apply(&mut self.ions);

            let spawned = electron_mcc.react_all(&mut self.electrons, &mut self.rng);
            self.absorb_spawned(spawned, true);
            let spawned = ion_mcc.react_all(&mut self.ions, &mut self.rng);
            self.absorb_spawned(spawned, false);

            self.fire(SimEvent::Step);
        }

        self.fire(SimEvent::End);
        log::debug!(
            "run finished: {} electrons, {} ions alive",
            self.electrons.len(),
            self.ions.len()
        );
        Ok(())
    }
}
