//! Charge-density combination of the two species density grids.

use glow_space::{GridError, ScalarGrid};

/// Combine the per-species deposited counts into a net weighted count:
/// `out = weight * (ion - electron)` per node.
///
/// Sign convention: ions positive, electrons negative. The result is a
/// weighted macro-particle count, not yet a physical charge density;
/// the Poisson solver applies the conversion through its configured
/// source scale.
///
/// # Errors
///
/// [`GridError::ShapeMismatch`] if any grid shape disagrees.
pub fn charge_density(
    weight: f64,
    ion_density: &ScalarGrid,
    electron_density: &ScalarGrid,
    out: &mut ScalarGrid,
) -> Result<(), GridError> {
    let shape = |g: &ScalarGrid| (g.prop().nx(), g.prop().ny());
    for g in [ion_density, electron_density] {
        if shape(g) != shape(out) {
            return Err(GridError::ShapeMismatch {
                left: shape(out),
                right: shape(g),
            });
        }
    }
    for ((o, ni), ne) in out
        .data_mut()
        .iter_mut()
        .zip(ion_density.data())
        .zip(electron_density.data())
    {
        *o = weight * (ni - ne);
    }
    Ok(())
}
