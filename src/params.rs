//Diagonal entries of the Cholesky factor with magnitude at or below this
//are treated as singular when solving against the factor
pub const SINGULAR_DIAGONAL_THRESH : f64 = 1e-12;

pub const DEFAULT_TEST_THRESH : f64 = 1e-9;

//Looser threshold for statistical tests over a finite number of draws
pub const SAMPLE_MOMENT_TEST_THRESH : f64 = 0.2;

pub const FINITE_DIFFERENCE_STEP : f64 = 1e-6;

///Number of parameters needed to describe a Gaussian over `dimension` attributes:
///`dimension` means plus the `dimension * (dimension + 1) / 2` free entries
///of the upper-triangular Cholesky factor.
pub fn num_parameters(dimension : usize) -> usize {
    dimension * (dimension + 3) / 2
}

///Number of free entries in an upper-triangular `dimension x dimension` matrix.
pub fn num_cholesky_factor_entries(dimension : usize) -> usize {
    dimension * (dimension + 1) / 2
}
