use serde::{Serialize, Deserialize};

use crate::params::*;

///Runtime knobs for a [`crate::gaussian_distribution::GaussianDistribution`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionSettings {
    ///Diagonal entries of the Cholesky factor with absolute value at or below
    ///this are reported as [`crate::error::DistributionError::SingularFactor`].
    pub singular_diagonal_thresh : f64,
    ///When set, draws, cached solutions and gradient entries are checked
    ///for NaN/Inf and reported as [`crate::error::DistributionError::NonFinite`].
    pub check_finite : bool,
    ///When set, draws and precomputes verify that the parameters they are given
    ///are the ones last set up, reporting
    ///[`crate::error::DistributionError::StaleSolution`] otherwise. This costs one
    ///pass over the parameter vector per draw. Gradient lookups never compare.
    pub verify_call_order : bool
}

impl Default for DistributionSettings {
    fn default() -> DistributionSettings {
        DistributionSettings {
            singular_diagonal_thresh : SINGULAR_DIAGONAL_THRESH,
            check_finite : true,
            verify_call_order : true
        }
    }
}
