//! Windowed accumulation grid for time-averaged diagnostics.

use crate::error::GridError;
use crate::grid::{GridProp, ScalarGrid};

/// Running per-node sum plus a sample counter.
///
/// The sum is exposed undivided; whoever consumes it decides how to
/// normalize (the save writer converts counts to physical densities,
/// other consumers may want the raw mean).
#[derive(Clone, Debug)]
pub struct AverageGrid {
    sum: ScalarGrid,
    count: usize,
}

impl AverageGrid {
    /// Allocate an empty accumulator with the given shape.
    pub fn new(prop: GridProp) -> Self {
        Self {
            sum: ScalarGrid::new(prop),
            count: 0,
        }
    }

    /// Accumulate one sample grid.
    ///
    /// # Errors
    ///
    /// [`GridError::ShapeMismatch`] if `sample` has a different shape.
    pub fn add(&mut self, sample: &ScalarGrid) -> Result<(), GridError> {
        let lp = self.sum.prop();
        let rp = sample.prop();
        if (lp.nx(), lp.ny()) != (rp.nx(), rp.ny()) {
            return Err(GridError::ShapeMismatch {
                left: (lp.nx(), lp.ny()),
                right: (rp.nx(), rp.ny()),
            });
        }
        for (acc, v) in self.sum.data_mut().iter_mut().zip(sample.data()) {
            *acc += v;
        }
        self.count += 1;
        Ok(())
    }

    /// The running, undivided sum.
    pub fn sum(&self) -> &ScalarGrid {
        &self.sum
    }

    /// Number of samples accumulated so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop() -> GridProp {
        GridProp::new(3, 3, 1.0, 1.0).unwrap()
    }

    #[test]
    fn accumulates_sum_and_count() {
        let mut avg = AverageGrid::new(prop());
        let mut sample = ScalarGrid::new(prop());
        sample.fill(2.0);

        avg.add(&sample).unwrap();
        avg.add(&sample).unwrap();

        assert_eq!(avg.count(), 2);
        for &v in avg.sum().data() {
            assert_eq!(v, 4.0);
        }
    }

    #[test]
    fn fresh_accumulator_is_empty() {
        let avg = AverageGrid::new(prop());
        assert_eq!(avg.count(), 0);
        assert!(avg.sum().data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let mut avg = AverageGrid::new(prop());
        let other = ScalarGrid::new(GridProp::new(4, 3, 1.0, 1.0).unwrap());
        match avg.add(&other) {
            Err(GridError::ShapeMismatch { left, right }) => {
                assert_eq!(left, (3, 3));
                assert_eq!(right, (4, 3));
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
        // A failed add must not bump the counter.
        assert_eq!(avg.count(), 0);
    }
}
