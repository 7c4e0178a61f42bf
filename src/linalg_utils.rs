extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::{SolveTriangular, UPLO, Diag};

use crate::error::*;

///Yields the index of the first NaN or infinite entry of `vec`, if any.
pub fn first_non_finite_index(vec : ArrayView1<f64>) -> Option<usize> {
    vec.iter().position(|x| !x.is_finite())
}

///Returns true iff `one` and `two` hold bit-for-bit the same values, so that
///NaN entries compare equal to themselves.
pub fn identical(one : ArrayView1<f64>, two : ArrayView1<f64>) -> bool {
    one.len() == two.len() && one.iter().zip(two.iter()).all(|(x, y)| x.to_bits() == y.to_bits())
}

///Fails with [`DistributionError::NonFinite`] if `vec` has a non-finite entry.
pub fn check_finite(operation : &'static str, vec : ArrayView1<f64>) -> Result<()> {
    match (first_non_finite_index(vec)) {
        Some(index) => {
            warn!("{} produced a non-finite value at index {}", operation, index);
            Err(DistributionError::NonFinite { operation, index })
        },
        None => Ok(())
    }
}

///Checks the diagonal of `triangular` in order. A NaN or infinite entry fails
///with [`DistributionError::NonFinite`], and an entry whose magnitude is at
///most `thresh` fails with [`DistributionError::SingularFactor`].
pub fn check_nonsingular_diagonal(operation : &'static str, triangular : ArrayView2<f64>,
                                  thresh : f64) -> Result<()> {
    let n = triangular.shape()[0].min(triangular.shape()[1]);
    for i in 0..n {
        let value = triangular[[i, i]];
        if (!value.is_finite()) {
            warn!("{}: Cholesky factor diagonal entry {} is {}", operation, i, value);
            return Err(DistributionError::NonFinite { operation, index : i });
        }
        if (value.abs() <= thresh) {
            warn!("Singular Cholesky factor: diagonal entry {} is {}", i, value);
            return Err(DistributionError::SingularFactor { index : i, value });
        }
    }
    Ok(())
}

///Solves `upper * x = rhs` for upper-triangular `upper`, refusing singular
///systems instead of yielding NaN/Inf.
pub fn solve_upper_triangular(operation : &'static str, upper : &Array2<f64>, rhs : &Array1<f64>,
                              thresh : f64) -> Result<Array1<f64>> {
    check_nonsingular_diagonal(operation, upper.view(), thresh)?;
    match (upper.solve_triangular(UPLO::Upper, Diag::NonUnit, rhs)) {
        Ok(solution) => Ok(solution),
        Err(err) => {
            error!("{}: triangular solve failed: {:?}", operation, err);
            Err(DistributionError::TriangularSolveFailed {
                operation,
                message : format!("{:?}", err)
            })
        }
    }
}

///Computes `upper * upper^T`.
pub fn outer_gram(upper : ArrayView2<f64>) -> Array2<f64> {
    upper.dot(&upper.t())
}
