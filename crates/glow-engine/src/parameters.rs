//! Simulation parameters, validation, and the four benchmark presets.

use glow_core::Constants;
use glow_space::{GridError, GridProp};
use std::fmt;

/// Full parameter set for one discharge run.
///
/// All fields are public: presets are starting points and callers are
/// expected to override individual values (shorter runs, different
/// seeds). [`validate`](Parameters::validate) re-checks the structural
/// invariants before a run starts.
#[derive(Clone, Debug)]
pub struct Parameters {
    /// Grid nodes along x.
    pub nx: usize,
    /// Grid nodes along y (the discharge axis).
    pub ny: usize,
    /// RF drive frequency (Hz).
    pub f: f64,
    /// Timestep (s).
    pub dt: f64,
    /// Domain extent along x (m).
    pub lx: f64,
    /// Domain extent along y (m).
    pub ly: f64,
    /// Background neutral gas density (m⁻³).
    pub ng: f64,
    /// Neutral gas temperature (K).
    pub tg: f64,
    /// Initial electron temperature (K).
    pub te: f64,
    /// Initial ion temperature (K).
    pub ti: f64,
    /// Initial plasma density (m⁻³).
    pub n0: f64,
    /// Ion mass (kg).
    pub m_ion: f64,
    /// Drive voltage amplitude (V) on the powered electrode.
    pub volt: f64,
    /// Macro-particles per cell used to size the initial population.
    pub ppc: usize,
    /// Number of simulation steps.
    pub n_steps: usize,
    /// Width of the trailing averaging window (steps).
    pub n_steps_avg: usize,
    /// Physical particles represented by one macro-particle.
    pub particle_weight: f64,
    /// Initial macro-particle count per species.
    pub n_initial: usize,
    /// RNG seed for deterministic runs.
    pub seed: u64,
    /// Injected physical constants.
    pub constants: Constants,
}

/// Errors from parameter validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A grid axis has fewer than two nodes.
    GridTooSmall {
        /// Which axis (`"nx"` or `"ny"`).
        axis: &'static str,
        /// The offending node count.
        extent: usize,
    },
    /// A parameter that must be strictly positive is not.
    NonPositive {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A parameter that must be finite and non-negative is not.
    Negative {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// `n_steps` is zero; a run must take at least one step.
    ZeroSteps,
    /// The averaging window is wider than the run.
    AveragingWindowTooLarge {
        /// Requested window width.
        window: usize,
        /// Total number of steps.
        steps: usize,
    },
    /// The grid description was rejected downstream.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { axis, extent } => {
                write!(f, "grid axis {axis} needs at least 2 nodes, got {extent}")
            }
            Self::NonPositive { name, value } => {
                write!(f, "parameter {name} must be a finite positive number, got {value}")
            }
            Self::Negative { name, value } => {
                write!(f, "parameter {name} must be finite and non-negative, got {value}")
            }
            Self::ZeroSteps => write!(f, "n_steps must be at least 1"),
            Self::AveragingWindowTooLarge { window, steps } => {
                write!(f, "averaging window of {window} steps exceeds the {steps}-step run")
            }
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl Parameters {
    /// Shared scaffold for the benchmark presets. Case-specific knobs
    /// are the gas density, initial plasma density, drive voltage, and
    /// the timestep divisor (`dt = 1 / (divisor · f)`).
    fn preset(ng: f64, n0: f64, volt: f64, dt_divisor: f64, seed: u64) -> Self {
        let f = 13.56e6;
        let (nx, ny) = (65, 129);
        let (lx, ly) = (0.01, 0.067);
        let ppc = 50;
        let n_initial = ppc * (nx - 1) * (ny - 1);
        Self {
            nx,
            ny,
            f,
            dt: 1.0 / (dt_divisor * f),
            lx,
            ly,
            ng,
            tg: 300.0,
            te: 30_000.0,
            ti: 300.0,
            n0,
            m_ion: 6.67e-27,
            volt,
            ppc,
            n_steps: 512_000,
            n_steps_avg: 12_800,
            particle_weight: n0 * lx * ly / n_initial as f64,
            n_initial,
            seed,
            constants: Constants::SI,
        }
    }

    /// High-pressure benchmark: 9.64×10²⁰ m⁻³ helium, 450 V drive.
    pub fn case_1() -> Self {
        Self::preset(9.64e20, 2.56e14, 450.0, 400.0, 1)
    }

    /// Mid-pressure benchmark: 3.21×10²⁰ m⁻³ helium, 200 V drive.
    pub fn case_2() -> Self {
        Self::preset(3.21e20, 5.12e14, 200.0, 512.0, 2)
    }

    /// Low-pressure benchmark: 9.64×10¹⁹ m⁻³ helium, 150 V drive.
    pub fn case_3() -> Self {
        Self::preset(9.64e19, 5.12e14, 150.0, 1024.0, 3)
    }

    /// Lowest-pressure benchmark: 3.21×10¹⁹ m⁻³ helium, 120 V drive.
    pub fn case_4() -> Self {
        Self::preset(3.21e19, 3.84e14, 120.0, 2048.0, 4)
    }

    /// Node spacing along x: `lx / (nx - 1)`.
    pub fn dx(&self) -> f64 {
        self.lx / (self.nx - 1) as f64
    }

    /// Node spacing along y: `ly / (ny - 1)`.
    pub fn dy(&self) -> f64 {
        self.ly / (self.ny - 1) as f64
    }

    /// The grid description these parameters define.
    pub fn grid(&self) -> Result<GridProp, GridError> {
        GridProp::new(self.nx, self.ny, self.lx, self.ly)
    }

    /// Check the structural invariants a run relies on.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`]; the first violated invariant is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nx < 2 {
            return Err(ConfigError::GridTooSmall {
                axis: "nx",
                extent: self.nx,
            });
        }
        if self.ny < 2 {
            return Err(ConfigError::GridTooSmall {
                axis: "ny",
                extent: self.ny,
            });
        }
        let positive = [
            ("f", self.f),
            ("dt", self.dt),
            ("lx", self.lx),
            ("ly", self.ly),
            ("ng", self.ng),
            ("m_ion", self.m_ion),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        // Zero temperatures (cold populations) and zero weight (pure
        // orchestration tests) are meaningful; negatives are not.
        let non_negative = [
            ("tg", self.tg),
            ("te", self.te),
            ("ti", self.ti),
            ("n0", self.n0),
            ("particle_weight", self.particle_weight),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if self.n_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.n_steps_avg > self.n_steps {
            return Err(ConfigError::AveragingWindowTooLarge {
                window: self.n_steps_avg,
                steps: self.n_steps,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for p in [
            Parameters::case_1(),
            Parameters::case_2(),
            Parameters::case_3(),
            Parameters::case_4(),
        ] {
            p.validate().unwrap();
        }
    }

    #[test]
    fn preset_weight_matches_initial_density() {
        let p = Parameters::case_2();
        let represented = p.particle_weight * p.n_initial as f64;
        assert!((represented - p.n0 * p.lx * p.ly).abs() / represented < 1e-12);
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        let mut p = Parameters::case_1();
        p.ny = 1;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::GridTooSmall { axis: "ny", extent: 1 })
        ));
    }

    #[test]
    fn non_positive_timestep_is_rejected() {
        let mut p = Parameters::case_1();
        p.dt = 0.0;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::NonPositive { name: "dt", .. })
        ));
    }

    #[test]
    fn nan_temperature_is_rejected() {
        let mut p = Parameters::case_1();
        p.te = f64::NAN;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::Negative { name: "te", .. })
        ));
    }

    #[test]
    fn zero_weight_is_allowed() {
        let mut p = Parameters::case_1();
        p.particle_weight = 0.0;
        p.validate().unwrap();
    }

    #[test]
    fn oversized_averaging_window_is_rejected() {
        let mut p = Parameters::case_1();
        p.n_steps = 10;
        p.n_steps_avg = 11;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::AveragingWindowTooLarge { window: 11, steps: 10 })
        ));
    }

    #[test]
    fn zero_steps_is_rejected() {
        let mut p = Parameters::case_1();
        p.n_steps = 0;
        p.n_steps_avg = 0;
        assert!(matches!(p.validate(), Err(ConfigError::ZeroSteps)));
    }

    #[test]
    fn spacing_is_derived() {
        let p = Parameters::case_1();
        assert!((p.dx() - p.lx / (p.nx - 1) as f64).abs() < 1e-18);
        assert!((p.dy() - p.ly / (p.ny - 1) as f64).abs() < 1e-18);
    }
}
