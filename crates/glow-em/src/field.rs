//! Electric field derivation: E = -∇φ.

use glow_core::Vec2;
use glow_space::{GridError, ScalarGrid, VectorGrid};

/// Compute the negative gradient of the potential on the same grid.
///
/// Central differences on interior nodes, one-sided differences on the
/// edges. Fully overwrites `out`.
///
/// # Errors
///
/// [`GridError::ShapeMismatch`] if `out` has a different shape.
pub fn electric_field(phi: &ScalarGrid, out: &mut VectorGrid) -> Result<(), GridError> {
    let prop = *phi.prop();
    if (out.prop().nx(), out.prop().ny()) != (prop.nx(), prop.ny()) {
        return Err(GridError::ShapeMismatch {
            left: (prop.nx(), prop.ny()),
            right: (out.prop().nx(), out.prop().ny()),
        });
    }
    let (nx, ny) = (prop.nx(), prop.ny());
    let (dx, dy) = (prop.dx(), prop.dy());

    for i in 0..nx {
        for j in 0..ny {
            let ex = if i == 0 {
                -(phi.get(1, j) - phi.get(0, j)) / dx
            } else if i == nx - 1 {
                -(phi.get(nx - 1, j) - phi.get(nx - 2, j)) / dx
            } else {
                -(phi.get(i + 1, j) - phi.get(i - 1, j)) / (2.0 * dx)
            };
            let ey = if j == 0 {
                -(phi.get(i, 1) - phi.get(i, 0)) / dy
            } else if j == ny - 1 {
                -(phi.get(i, ny - 1) - phi.get(i, ny - 2)) / dy
            } else {
                -(phi.get(i, j + 1) - phi.get(i, j - 1)) / (2.0 * dy)
            };
            out.set(i, j, Vec2::new(ex, ey));
        }
    }
    Ok(())
}
