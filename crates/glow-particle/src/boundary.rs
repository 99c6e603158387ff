//! Absorbing particle boundaries on the domain edges.
//!
//! Boundaries are specified as tiles: inclusive node-index segments
//! lying on one of the four grid edges, each tagged with a behavior.
//! The set is built once from the grid description and the timestep;
//! `dt` lets `apply` back-project a particle's straight-line motion to
//! find where it crossed the domain border.

use crate::species::ChargedSpecies;
use glow_space::GridProp;
use smallvec::SmallVec;
use std::fmt;

/// Behavior of a boundary tile when a particle crosses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    /// The particle is removed from the population.
    Absorbing,
}

/// One boundary tile: an inclusive node-index segment on a grid edge.
///
/// Corners use the grid's 0-indexed convention; a full bottom edge on
/// an nx×ny grid is `min = (0, 0)`, `max = (nx - 1, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TiledBoundary {
    /// Lower inclusive corner `(i, j)`.
    pub min: (i32, i32),
    /// Upper inclusive corner `(i, j)`.
    pub max: (i32, i32),
    /// What happens to particles crossing this tile.
    pub kind: BoundaryKind,
}

/// Errors from boundary-set construction.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryError {
    /// A tile corner lies outside the grid.
    OutOfBounds {
        /// The offending tile.
        tile: TiledBoundary,
    },
    /// A tile does not lie on one of the four grid edges.
    NotOnEdge {
        /// The offending tile.
        tile: TiledBoundary,
    },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { tile } => {
                write!(f, "boundary tile {:?}..{:?} out of grid bounds", tile.min, tile.max)
            }
            Self::NotOnEdge { tile } => {
                write!(f, "boundary tile {:?}..{:?} is not on a grid edge", tile.min, tile.max)
            }
        }
    }
}

impl std::error::Error for BoundaryError {}

/// Which domain edge a tile lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Bottom,
    Top,
    Left,
    Right,
}

/// A validated tile resolved onto an edge, with its covered index range.
#[derive(Clone, Copy, Debug)]
struct ResolvedTile {
    edge: Edge,
    lo: i32,
    hi: i32,
    kind: BoundaryKind,
}

/// The full particle-boundary specification for a rectangular domain.
#[derive(Debug)]
pub struct TiledBoundarySet {
    prop: GridProp,
    tiles: SmallVec<[ResolvedTile; 4]>,
    dt: f64,
}

impl TiledBoundarySet {
    /// Build a boundary set from edge tiles.
    ///
    /// # Errors
    ///
    /// - [`BoundaryError::OutOfBounds`] if a corner index falls outside
    ///   `[0, nx-1] x [0, ny-1]`.
    /// - [`BoundaryError::NotOnEdge`] if a tile is not a segment of one
    ///   of the four grid edges.
    pub fn new(
        prop: GridProp,
        tiles: &[TiledBoundary],
        dt: f64,
    ) -> Result<Self, BoundaryError> {
        let (ni, nj) = (prop.nx() as i32, prop.ny() as i32);
        let mut resolved = SmallVec::new();
        for &tile in tiles {
            let ((i0, j0), (i1, j1)) = (tile.min, tile.max);
            let in_bounds =
                |i: i32, j: i32| (0..ni).contains(&i) && (0..nj).contains(&j);
            if !in_bounds(i0, j0) || !in_bounds(i1, j1) {
                return Err(BoundaryError::OutOfBounds { tile });
            }
            let edge = if j0 == 0 && j1 == 0 {
                Edge::Bottom
            } else if j0 == nj - 1 && j1 == nj - 1 {
                Edge::Top
            } else if i0 == 0 && i1 == 0 {
                Edge::Left
            } else if i0 == ni - 1 && i1 == ni - 1 {
                Edge::Right
            } else {
                return Err(BoundaryError::NotOnEdge { tile });
            };
            let (lo, hi) = match edge {
                Edge::Bottom | Edge::Top => (i0.min(i1), i0.max(i1)),
                Edge::Left | Edge::Right => (j0.min(j1), j0.max(j1)),
            };
            resolved.push(ResolvedTile {
                edge,
                lo,
                hi,
                kind: tile.kind,
            });
        }
        Ok(Self {
            prop,
            tiles: resolved,
            dt,
        })
    }

    /// Remove particles that crossed an absorbing tile during the last
    /// push.
    ///
    /// Must run after the pusher so crossings are evaluated against the
    /// post-move position. Removal is swap-remove; ordering is not
    /// preserved.
    pub fn apply(&self, species: &mut ChargedSpecies) {
        let (lx, ly) = (self.prop.lx(), self.prop.ly());
        let mut i = species.len();
        while i > 0 {
            i -= 1;
            let x = species.positions()[i];
            if (0.0..=lx).contains(&x.x) && (0.0..=ly).contains(&x.y) {
                continue;
            }
            let v = species.velocities()[i];
            if let Some((edge, along)) = self.crossing(x, v.xy()) {
                if self.absorbs(edge, along) {
                    species.swap_remove(i);
                }
            }
        }
    }

    /// Find which edge the straight-line motion ending at `x` crossed,
    /// and the physical coordinate along that edge.
    ///
    /// Back-projects one timestep (`x_prev = x - v dt`) and intersects
    /// the segment with the domain border, taking the earliest crossing.
    fn crossing(&self, x: glow_core::Vec2, v: glow_core::Vec2) -> Option<(Edge, f64)> {
        let (lx, ly) = (self.prop.lx(), self.prop.ly());
        let prev = glow_core::Vec2::new(x.x - v.x * self.dt, x.y - v.y * self.dt);
        let d = x - prev;

        let mut best: Option<(f64, Edge, f64)> = None;
        let mut consider = |t: f64, edge: Edge, along: f64| {
            if t.is_finite() && (0.0..=1.0).contains(&t) {
                match best {
                    Some((bt, _, _)) if bt <= t => {}
                    _ => best = Some((t, edge, along)),
                }
            }
        };

        if d.y < 0.0 {
            let t = (0.0 - prev.y) / d.y;
            consider(t, Edge::Bottom, prev.x + t * d.x);
        }
        if d.y > 0.0 {
            let t = (ly - prev.y) / d.y;
            consider(t, Edge::Top, prev.x + t * d.x);
        }
        if d.x < 0.0 {
            let t = (0.0 - prev.x) / d.x;
            consider(t, Edge::Left, prev.y + t * d.y);
        }
        if d.x > 0.0 {
            let t = (lx - prev.x) / d.x;
            consider(t, Edge::Right, prev.y + t * d.y);
        }

        match best {
            Some((_, edge, along)) => Some((edge, along)),
            // Degenerate motion (zero displacement but out of domain):
            // fall back to the nearest violated edge.
            None => {
                if x.y < 0.0 {
                    Some((Edge::Bottom, x.x))
                } else if x.y > ly {
                    Some((Edge::Top, x.x))
                } else if x.x < 0.0 {
                    Some((Edge::Left, x.y))
                } else if x.x > lx {
                    Some((Edge::Right, x.y))
                } else {
                    None
                }
            }
        }
    }

    /// Whether an absorbing tile on `edge` covers the node nearest to
    /// the physical coordinate `along` the edge.
    fn absorbs(&self, edge: Edge, along: f64) -> bool {
        let (spacing, n) = match edge {
            Edge::Bottom | Edge::Top => (self.prop.dx(), self.prop.nx() as i32),
            Edge::Left | Edge::Right => (self.prop.dy(), self.prop.ny() as i32),
        };
        let idx = ((along / spacing).round() as i32).clamp(0, n - 1);
        self.tiles.iter().any(|t| {
            t.edge == edge
                && t.kind == BoundaryKind::Absorbing
                && (t.lo..=t.hi).contains(&idx)
        })
    }
}

/// Build the four all-absorbing edge tiles for an nx×ny grid.
pub fn absorbing_rectangle(nx: usize, ny: usize) -> [TiledBoundary; 4] {
    let (i1, j1) = (nx as i32 - 1, ny as i32 - 1);
    let absorbing = |min, max| TiledBoundary {
        min,
        max,
        kind: BoundaryKind::Absorbing,
    };
    [
        absorbing((0, 0), (i1, 0)),
        absorbing((0, j1), (i1, j1)),
        absorbing((0, 0), (0, j1)),
        absorbing((i1, 0), (i1, j1)),
    ]
}
