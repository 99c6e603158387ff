//! Injected physical-constants table.
//!
//! The simulation never reads process-wide constant globals; every
//! component that needs a physical constant receives a [`Constants`]
//! value from its caller. Tests can substitute fabricated values to
//! decouple numerical checks from CODATA data.

/// Physical constants used by the simulation kernels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constants {
    /// Elementary charge (C).
    pub qe: f64,
    /// Boltzmann constant (J/K).
    pub kb: f64,
    /// Vacuum permittivity (F/m).
    pub eps0: f64,
    /// Electron mass (kg).
    pub m_e: f64,
}

impl Constants {
    /// CODATA SI values.
    pub const SI: Constants = Constants {
        qe: 1.602_176_634e-19,
        kb: 1.380_649e-23,
        eps0: 8.854_187_812_8e-12,
        m_e: 9.109_383_701_5e-31,
    };
}

impl Default for Constants {
    fn default() -> Self {
        Self::SI
    }
}
