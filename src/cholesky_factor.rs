extern crate ndarray;

use ndarray::*;

use crate::error::*;
use crate::parameter_layout::*;

///Zeroes `factor` and fills its upper triangle from the Cholesky-factor
///block of `parameters`, following the row-major order of [`TriangularWalk`].
///`factor` is resized to `dimension x dimension` if it has the wrong shape.
pub fn build_cholesky_factor(parameters : ArrayView1<f64>, layout : &ParameterLayout,
                             factor : &mut Array2<f64>) -> Result<()> {
    layout.check_parameters("setup_distribution", parameters)?;

    let n = layout.dimension();
    if (factor.dim() != (n, n)) {
        *factor = Array::zeros((n, n));
    } else {
        factor.fill(0.0);
    }

    for slot in layout.triangular_walk() {
        factor[[slot.row, slot.col]] = parameters[[n + slot.slot,]];
    }
    Ok(())
}

///Allocating variant of [`build_cholesky_factor`].
pub fn cholesky_factor_from_parameters(parameters : ArrayView1<f64>,
                                       layout : &ParameterLayout) -> Result<Array2<f64>> {
    let n = layout.dimension();
    let mut factor = Array::zeros((n, n));
    build_cholesky_factor(parameters, layout, &mut factor)?;
    Ok(factor)
}
