//! Energy-dependent cross-section tables.

use std::fmt;

/// Errors from cross-section table construction.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// The table has no points.
    Empty,
    /// Energies are not strictly increasing.
    NotMonotonic {
        /// Index of the first out-of-order point.
        index: usize,
    },
    /// A cross-section value is negative or not finite.
    InvalidValue {
        /// Index of the offending point.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cross-section table is empty"),
            Self::NotMonotonic { index } => {
                write!(f, "cross-section energies not strictly increasing at point {index}")
            }
            Self::InvalidValue { index, value } => {
                write!(f, "cross-section value at point {index} must be finite and >= 0, got {value}")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// A tabulated cross section over energy (eV → m²), linearly
/// interpolated and clamped at both ends.
#[derive(Clone, Debug)]
pub struct CrossSection {
    energies: Vec<f64>,
    sigmas: Vec<f64>,
}

impl CrossSection {
    /// Build a table from `(energy, sigma)` points.
    ///
    /// # Errors
    ///
    /// - [`TableError::Empty`] for an empty table.
    /// - [`TableError::NotMonotonic`] if energies do not strictly
    ///   increase.
    /// - [`TableError::InvalidValue`] for a negative or non-finite
    ///   sigma.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, TableError> {
        if points.is_empty() {
            return Err(TableError::Empty);
        }
        for (k, window) in points.windows(2).enumerate() {
            if window[1].0 <= window[0].0 {
                return Err(TableError::NotMonotonic { index: k + 1 });
            }
        }
        for (k, &(_, sigma)) in points.iter().enumerate() {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(TableError::InvalidValue {
                    index: k,
                    value: sigma,
                });
            }
        }
        Ok(Self {
            energies: points.iter().map(|p| p.0).collect(),
            sigmas: points.iter().map(|p| p.1).collect(),
        })
    }

    /// A constant cross section (single-point table).
    pub fn constant(sigma: f64) -> Result<Self, TableError> {
        Self::from_points(&[(0.0, sigma)])
    }

    /// Interpolated cross section at `energy` (eV).
    pub fn value(&self, energy: f64) -> f64 {
        let n = self.energies.len();
        if energy <= self.energies[0] {
            return self.sigmas[0];
        }
        if energy >= self.energies[n - 1] {
            return self.sigmas[n - 1];
        }
        // partition_point: first index with energy[k] > energy.
        let hi = self.energies.partition_point(|&e| e <= energy);
        let lo = hi - 1;
        let frac = (energy - self.energies[lo]) / (self.energies[hi] - self.energies[lo]);
        self.sigmas[lo] + frac * (self.sigmas[hi] - self.sigmas[lo])
    }

    /// The tabulated energy points (used for the null-collision
    /// frequency scan).
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }
}
