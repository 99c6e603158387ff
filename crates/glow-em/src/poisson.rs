//! Structured Poisson solver with edge boundary regions.
//!
//! Solves `∇²φ = -scale·ρ` on the uniform node grid by successive
//! over-relaxation (SOR). Boundary conditions are given as an ordered
//! list of [`Region`]s: inclusive node-index segments on the grid edges
//! tagged fixed-value (Dirichlet) or zero-gradient (Neumann). The four
//! edges must be fully covered; where a fixed-value segment meets a
//! zero-gradient segment at a corner, the fixed value wins.

use glow_space::{GridProp, ScalarGrid};
use std::fmt;

/// A boundary value rule, evaluated with the current simulation time.
///
/// Constant edges ignore the argument; the driven electrode supplies
/// `volt · sin(2π f t)`.
pub type BoundaryValue = Box<dyn Fn(f64) -> f64>;

/// Boundary condition kind for a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Dirichlet: the potential is pinned to the region's value rule.
    FixedValue,
    /// Neumann: zero normal gradient (mirror of the adjacent interior
    /// node). The value rule is ignored.
    ZeroGradient,
}

/// One boundary region: an inclusive node-index segment on a grid edge.
pub struct Region {
    /// Condition kind.
    pub kind: CellKind,
    /// Lower inclusive corner `(i, j)`.
    pub min: (i32, i32),
    /// Upper inclusive corner `(i, j)`.
    pub max: (i32, i32),
    /// Value rule, called with the current simulation time.
    pub value: BoundaryValue,
}

impl Region {
    /// Fixed-value region with a constant value.
    pub fn fixed(min: (i32, i32), max: (i32, i32), value: f64) -> Self {
        Self {
            kind: CellKind::FixedValue,
            min,
            max,
            value: Box::new(move |_| value),
        }
    }

    /// Zero-gradient region.
    pub fn zero_gradient(min: (i32, i32), max: (i32, i32)) -> Self {
        Self {
            kind: CellKind::ZeroGradient,
            min,
            max,
            value: Box::new(|_| 0.0),
        }
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("kind", &self.kind)
            .field("min", &self.min)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}

/// Domain description handed to the solver.
#[derive(Clone, Copy, Debug)]
pub struct DomainProp {
    /// Grid shape and physical extents.
    pub prop: GridProp,
    /// Multiplier applied to the source grid before solving.
    ///
    /// The engine passes a weighted particle count as ρ; the scale
    /// `qe / (ε₀ · dx · dy)` converts it to the Poisson source term
    /// with the constants injected by the caller.
    pub source_scale: f64,
}

/// Errors from region validation at solver construction.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionError {
    /// A region corner lies outside the grid.
    OutOfBounds {
        /// Lower corner of the offending region.
        min: (i32, i32),
        /// Upper corner of the offending region.
        max: (i32, i32),
    },
    /// A region is not a segment of one of the four grid edges.
    NotOnEdge {
        /// Lower corner of the offending region.
        min: (i32, i32),
        /// Upper corner of the offending region.
        max: (i32, i32),
    },
    /// The regions do not cover the full grid perimeter.
    Unclosed {
        /// An uncovered perimeter node.
        node: (usize, usize),
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { min, max } => {
                write!(f, "boundary region {min:?}..{max:?} out of grid bounds")
            }
            Self::NotOnEdge { min, max } => {
                write!(f, "boundary region {min:?}..{max:?} is not on a grid edge")
            }
            Self::Unclosed { node } => {
                write!(f, "boundary regions leave perimeter node {node:?} uncovered")
            }
        }
    }
}

impl std::error::Error for RegionError {}

/// Errors from a solve.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// SOR did not reach the residual tolerance.
    NotConverged {
        /// Iterations performed.
        iterations: usize,
        /// Final residual (max node update magnitude).
        residual: f64,
    },
    /// The potential or source grid does not match the solver's shape.
    ShapeMismatch {
        /// Shape the solver was built for.
        expected: (usize, usize),
        /// Shape it was handed.
        got: (usize, usize),
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConverged {
                iterations,
                residual,
            } => write!(
                f,
                "poisson solve did not converge after {iterations} iterations (residual {residual:e})"
            ),
            Self::ShapeMismatch { expected, got } => write!(
                f,
                "grid shape {}x{} does not match solver domain {}x{}",
                got.0, got.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// Per-node role, resolved once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeKind {
    Interior,
    /// Dirichlet node; index into the region list for the value rule.
    Fixed(usize),
    /// Neumann node; flat index of the interior node it mirrors.
    Mirror(usize),
}

/// SOR Poisson solver for a rectangular domain with edge regions.
pub struct StructPoissonSolver {
    domain: DomainProp,
    regions: Vec<Region>,
    kinds: Vec<NodeKind>,
    omega: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl fmt::Debug for StructPoissonSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructPoissonSolver")
            .field("domain", &self.domain)
            .field("regions", &self.regions)
            .field("omega", &self.omega)
            .field("tolerance", &self.tolerance)
            .field("max_iterations", &self.max_iterations)
            .finish_non_exhaustive()
    }
}

impl StructPoissonSolver {
    /// Default over-relaxation factor.
    const OMEGA: f64 = 1.8;
    /// Default residual tolerance (max node update per sweep).
    const TOLERANCE: f64 = 1e-8;
    /// Default iteration cap.
    const MAX_ITERATIONS: usize = 20_000;

    /// Build a solver, resolving and validating the boundary regions.
    ///
    /// # Errors
    ///
    /// - [`RegionError::OutOfBounds`] / [`RegionError::NotOnEdge`] for a
    ///   malformed region.
    /// - [`RegionError::Unclosed`] if the regions leave any perimeter
    ///   node uncovered.
    pub fn new(domain: DomainProp, regions: Vec<Region>) -> Result<Self, RegionError> {
        let prop = domain.prop;
        let (nx, ny) = (prop.nx(), prop.ny());
        let (ni, nj) = (nx as i32, ny as i32);
        let mut kinds = vec![NodeKind::Interior; prop.node_count()];

        // Resolve zero-gradient regions first so fixed-value segments
        // win where they meet at corners.
        let mut ordered: Vec<(usize, &Region)> = regions.iter().enumerate().collect();
        ordered.sort_by_key(|(_, r)| match r.kind {
            CellKind::ZeroGradient => 0,
            CellKind::FixedValue => 1,
        });

        for (ridx, region) in ordered {
            let ((i0, j0), (i1, j1)) = (region.min, region.max);
            let in_bounds = |i: i32, j: i32| (0..ni).contains(&i) && (0..nj).contains(&j);
            if !in_bounds(i0, j0) || !in_bounds(i1, j1) {
                return Err(RegionError::OutOfBounds {
                    min: region.min,
                    max: region.max,
                });
            }
            let on_edge = (j0 == j1 && (j0 == 0 || j0 == nj - 1))
                || (i0 == i1 && (i0 == 0 || i0 == ni - 1));
            if !on_edge {
                return Err(RegionError::NotOnEdge {
                    min: region.min,
                    max: region.max,
                });
            }
            for i in i0.min(i1)..=i0.max(i1) {
                for j in j0.min(j1)..=j0.max(j1) {
                    let (iu, ju) = (i as usize, j as usize);
                    let node = prop.index(iu, ju);
                    kinds[node] = match region.kind {
                        CellKind::FixedValue => NodeKind::Fixed(ridx),
                        CellKind::ZeroGradient => {
                            // Mirror the adjacent interior node.
                            let (mi, mj) = if ju == 0 {
                                (iu, 1)
                            } else if ju == ny - 1 {
                                (iu, ny - 2)
                            } else if iu == 0 {
                                (1, ju)
                            } else {
                                (nx - 2, ju)
                            };
                            NodeKind::Mirror(prop.index(mi, mj))
                        }
                    };
                }
            }
        }

        // Closure check: every perimeter node must be covered.
        for i in 0..nx {
            for j in 0..ny {
                let on_perimeter = i == 0 || i == nx - 1 || j == 0 || j == ny - 1;
                if on_perimeter && kinds[prop.index(i, j)] == NodeKind::Interior {
                    return Err(RegionError::Unclosed { node: (i, j) });
                }
            }
        }

        Ok(Self {
            domain,
            regions,
            kinds,
            omega: Self::OMEGA,
            tolerance: Self::TOLERANCE,
            max_iterations: Self::MAX_ITERATIONS,
        })
    }

    /// Override the SOR tuning knobs (relaxation factor, tolerance,
    /// iteration cap).
    pub fn with_tuning(mut self, omega: f64, tolerance: f64, max_iterations: usize) -> Self {
        self.omega = omega;
        self.tolerance = tolerance;
        self.max_iterations = max_iterations;
        self
    }

    /// Solve for the potential given the source grid.
    ///
    /// `phi` is used as the initial guess (warm start from the previous
    /// step) and overwritten with the solution. `time` is handed to the
    /// fixed-value region rules.
    ///
    /// # Errors
    ///
    /// - [`SolverError::ShapeMismatch`] if either grid disagrees with
    ///   the solver's domain.
    /// - [`SolverError::NotConverged`] if the residual tolerance is not
    ///   met within the iteration cap. Not recoverable here; the run
    ///   aborts with the last completed step's state intact.
    pub fn solve(
        &self,
        phi: &mut ScalarGrid,
        rho: &ScalarGrid,
        time: f64,
    ) -> Result<(), SolverError> {
        let prop = self.domain.prop;
        let expected = (prop.nx(), prop.ny());
        for shape in [
            (phi.prop().nx(), phi.prop().ny()),
            (rho.prop().nx(), rho.prop().ny()),
        ] {
            if shape != expected {
                return Err(SolverError::ShapeMismatch {
                    expected,
                    got: shape,
                });
            }
        }

        let (nx, ny) = expected;
        let (dx2, dy2) = (prop.dx() * prop.dx(), prop.dy() * prop.dy());
        let diag = 2.0 / dx2 + 2.0 / dy2;

        // Evaluate each region's value rule once per solve.
        let values: Vec<f64> = self.regions.iter().map(|r| (r.value)(time)).collect();

        // Pin Dirichlet nodes before sweeping.
        for i in 0..nx {
            for j in 0..ny {
                if let NodeKind::Fixed(r) = self.kinds[prop.index(i, j)] {
                    phi.set(i, j, values[r]);
                }
            }
        }

        let mut residual = f64::INFINITY;
        for iteration in 0..self.max_iterations {
            residual = 0.0;
            for i in 1..nx - 1 {
                for j in 1..ny - 1 {
                    let source = self.domain.source_scale * rho.get(i, j);
                    let neighbours = (phi.get(i - 1, j) + phi.get(i + 1, j)) / dx2
                        + (phi.get(i, j - 1) + phi.get(i, j + 1)) / dy2;
                    let gauss = (neighbours + source) / diag;
                    let old = phi.get(i, j);
                    let new = old + self.omega * (gauss - old);
                    residual = residual.max((new - old).abs());
                    phi.set(i, j, new);
                }
            }
            // Refresh zero-gradient nodes from their mirrors.
            for i in 0..nx {
                for j in 0..ny {
                    if let NodeKind::Mirror(src) = self.kinds[prop.index(i, j)] {
                        let v = phi.data()[src];
                        phi.set(i, j, v);
                    }
                }
            }
            if residual < self.tolerance {
                log::trace!(
                    "poisson converged after {} iterations (residual {:e})",
                    iteration + 1,
                    residual
                );
                return Ok(());
            }
        }

        log::debug!(
            "poisson failed to converge after {} iterations (residual {:e})",
            self.max_iterations,
            residual
        );
        Err(SolverError::NotConverged {
            iterations: self.max_iterations,
            residual,
        })
    }

    /// The domain this solver was built for.
    pub fn domain(&self) -> &DomainProp {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glow_space::GridProp;

    fn domain(nx: usize, ny: usize) -> DomainProp {
        DomainProp {
            prop: GridProp::new(nx, ny, 1.0, 1.0).unwrap(),
            source_scale: 1.0,
        }
    }

    /// The four regions the engine builds: driven bottom, grounded top,
    /// zero-gradient sides.
    fn closed_regions(nx: usize, ny: usize, bottom: f64) -> Vec<Region> {
        let (i1, j1) = (nx as i32 - 1, ny as i32 - 1);
        vec![
            Region::fixed((0, 0), (i1, 0), bottom),
            Region::fixed((0, j1), (i1, j1), 0.0),
            Region::zero_gradient((0, 0), (0, j1)),
            Region::zero_gradient((i1, 0), (i1, j1)),
        ]
    }

    #[test]
    fn unclosed_boundary_is_rejected() {
        let (nx, ny) = (5, 5);
        let mut regions = closed_regions(nx, ny, 0.0);
        regions.pop(); // drop the right edge
        match StructPoissonSolver::new(domain(nx, ny), regions) {
            Err(RegionError::Unclosed { node }) => assert_eq!(node.0, nx - 1),
            other => panic!("expected Unclosed, got {other:?}"),
        }
    }

    #[test]
    fn interior_region_is_rejected() {
        let regions = vec![Region::fixed((1, 1), (3, 1), 0.0)];
        match StructPoissonSolver::new(domain(5, 5), regions) {
            Err(RegionError::NotOnEdge { .. }) => {}
            other => panic!("expected NotOnEdge, got {other:?}"),
        }
    }

    #[test]
    fn out_of_bounds_region_is_rejected() {
        let regions = vec![Region::fixed((0, 0), (5, 0), 0.0)];
        match StructPoissonSolver::new(domain(5, 5), regions) {
            Err(RegionError::OutOfBounds { .. }) => {}
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn solver_formats_for_diagnostics() {
        // Construction results are formatted in failure messages; the
        // value rules are elided rather than blocking the render.
        let solver = StructPoissonSolver::new(domain(5, 5), closed_regions(5, 5, 0.0));
        let rendered = format!("{solver:?}");
        assert!(rendered.contains("StructPoissonSolver"), "{rendered}");
        assert!(rendered.contains("FixedValue"), "{rendered}");
    }

    #[test]
    fn laplace_with_zero_boundaries_is_zero() {
        let (nx, ny) = (9, 9);
        let solver = StructPoissonSolver::new(domain(nx, ny), closed_regions(nx, ny, 0.0)).unwrap();
        let prop = GridProp::new(nx, ny, 1.0, 1.0).unwrap();
        let mut phi = ScalarGrid::new(prop);
        let rho = ScalarGrid::new(prop);
        solver.solve(&mut phi, &rho, 0.0).unwrap();
        for &v in phi.data() {
            assert!(v.abs() < 1e-6, "expected ~0, got {v}");
        }
    }

    #[test]
    fn laplace_between_plates_is_linear_in_y() {
        // Bottom at 1 V, top at 0 V, no charge: phi varies linearly in y
        // and the zero-gradient sides do not disturb it.
        let (nx, ny) = (9, 9);
        let solver = StructPoissonSolver::new(domain(nx, ny), closed_regions(nx, ny, 1.0)).unwrap();
        let prop = GridProp::new(nx, ny, 1.0, 1.0).unwrap();
        let mut phi = ScalarGrid::new(prop);
        let rho = ScalarGrid::new(prop);
        solver.solve(&mut phi, &rho, 0.0).unwrap();

        for i in 0..nx {
            for j in 0..ny {
                let expected = 1.0 - j as f64 / (ny - 1) as f64;
                assert!(
                    (phi.get(i, j) - expected).abs() < 1e-5,
                    "node ({i},{j}): got {}, expected {expected}",
                    phi.get(i, j)
                );
            }
        }
    }

    #[test]
    fn time_dependent_rule_sees_the_solve_time() {
        let (nx, ny) = (5, 5);
        let (i1, j1) = (4, 4);
        let regions = vec![
            Region {
                kind: CellKind::FixedValue,
                min: (0, 0),
                max: (i1, 0),
                value: Box::new(|t| 2.0 * t),
            },
            Region::fixed((0, j1), (i1, j1), 0.0),
            Region::zero_gradient((0, 0), (0, j1)),
            Region::zero_gradient((i1, 0), (i1, j1)),
        ];
        let solver = StructPoissonSolver::new(domain(nx, ny), regions).unwrap();
        let prop = GridProp::new(nx, ny, 1.0, 1.0).unwrap();
        let mut phi = ScalarGrid::new(prop);
        let rho = ScalarGrid::new(prop);
        solver.solve(&mut phi, &rho, 3.0).unwrap();
        assert!((phi.get(2, 0) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn iteration_cap_reports_not_converged() {
        let (nx, ny) = (9, 9);
        let solver = StructPoissonSolver::new(domain(nx, ny), closed_regions(nx, ny, 1.0))
            .unwrap()
            .with_tuning(1.8, 1e-12, 2);
        let prop = GridProp::new(nx, ny, 1.0, 1.0).unwrap();
        let mut phi = ScalarGrid::new(prop);
        let rho = ScalarGrid::new(prop);
        match solver.solve(&mut phi, &rho, 0.0) {
            Err(SolverError::NotConverged { iterations: 2, .. }) => {}
            other => panic!("expected NotConverged, got {other:?}"),
        }
    }
}
