//! Scalar and vector node grids.

use crate::error::GridError;
use glow_core::Vec2;

/// Shared shape and physical-extent description for a grid.
///
/// Node spacing is derived, not stored independently: `dx = lx/(nx-1)`,
/// `dy = ly/(ny-1)`. The struct is immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridProp {
    nx: usize,
    ny: usize,
    lx: f64,
    ly: f64,
}

impl GridProp {
    /// Build a grid description, validating shape and extents.
    ///
    /// # Errors
    ///
    /// - [`GridError::AxisTooSmall`] if `nx` or `ny` is below 2. A
    ///   1-node axis has no cell spacing and degenerates the boundary
    ///   regions into a single point.
    /// - [`GridError::NonPositiveExtent`] if `lx` or `ly` is not a
    ///   finite positive number.
    pub fn new(nx: usize, ny: usize, lx: f64, ly: f64) -> Result<Self, GridError> {
        if nx < 2 {
            return Err(GridError::AxisTooSmall {
                axis: "nx",
                extent: nx,
            });
        }
        if ny < 2 {
            return Err(GridError::AxisTooSmall {
                axis: "ny",
                extent: ny,
            });
        }
        if !lx.is_finite() || lx <= 0.0 {
            return Err(GridError::NonPositiveExtent {
                axis: "lx",
                value: lx,
            });
        }
        if !ly.is_finite() || ly <= 0.0 {
            return Err(GridError::NonPositiveExtent {
                axis: "ly",
                value: ly,
            });
        }
        Ok(Self { nx, ny, lx, ly })
    }

    /// Node count along x.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Node count along y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Physical extent along x.
    pub fn lx(&self) -> f64 {
        self.lx
    }

    /// Physical extent along y.
    pub fn ly(&self) -> f64 {
        self.ly
    }

    /// Node spacing along x: `lx / (nx - 1)`.
    pub fn dx(&self) -> f64 {
        self.lx / (self.nx - 1) as f64
    }

    /// Node spacing along y: `ly / (ny - 1)`.
    pub fn dy(&self) -> f64 {
        self.ly / (self.ny - 1) as f64
    }

    /// Total node count.
    pub fn node_count(&self) -> usize {
        self.nx * self.ny
    }

    /// Row-major flat index of node `(i, j)`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny);
        i * self.ny + j
    }
}

/// A row-major nx×ny grid of `f64` node values.
///
/// Used for densities, charge density, and potential. Kernels that
/// produce a grid overwrite every node; nothing relies on clearing
/// between steps.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarGrid {
    prop: GridProp,
    data: Vec<f64>,
}

impl ScalarGrid {
    /// Allocate a zero-filled grid with the given description.
    pub fn new(prop: GridProp) -> Self {
        Self {
            data: vec![0.0; prop.node_count()],
            prop,
        }
    }

    /// Grid shape and extents.
    pub fn prop(&self) -> &GridProp {
        &self.prop
    }

    /// Value at node `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.prop.index(i, j)]
    }

    /// Set the value at node `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.prop.index(i, j);
        self.data[idx] = value;
    }

    /// Add to the value at node `(i, j)`.
    #[inline]
    pub fn add(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.prop.index(i, j);
        self.data[idx] += value;
    }

    /// Overwrite every node with `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Flat row-major node data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable flat row-major node data.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Sum of all node values.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// A row-major nx×ny grid of [`Vec2`] node values (the electric field).
#[derive(Clone, Debug, PartialEq)]
pub struct VectorGrid {
    prop: GridProp,
    data: Vec<Vec2>,
}

impl VectorGrid {
    /// Allocate a zero-filled vector grid with the given description.
    pub fn new(prop: GridProp) -> Self {
        Self {
            data: vec![Vec2::ZERO; prop.node_count()],
            prop,
        }
    }

    /// Grid shape and extents.
    pub fn prop(&self) -> &GridProp {
        &self.prop
    }

    /// Value at node `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Vec2 {
        self.data[self.prop.index(i, j)]
    }

    /// Set the value at node `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: Vec2) {
        let idx = self.prop.index(i, j);
        self.data[idx] = value;
    }

    /// Flat row-major node data.
    pub fn data(&self) -> &[Vec2] {
        &self.data
    }

    /// Mutable flat row-major node data.
    pub fn data_mut(&mut self) -> &mut [Vec2] {
        &mut self.data
    }
}
