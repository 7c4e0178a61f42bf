use thiserror::Error;

pub type Result<T> = std::result::Result<T, DistributionError>;

///Errors surfaced by the Gaussian random-coefficient distribution.
///
///Most variants are contract violations by the caller (see
///[`DistributionError::is_contract_violation`]). [`DistributionError::SingularFactor`]
///and [`DistributionError::NonFinite`] are numerical failures which the outer
///optimizer is expected to treat as a rejected step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("attribute dimension must be positive; found {dimension}")]
    InvalidDimension { dimension : usize },
    #[error("{operation}: parameter vector has length {found}, expected {expected}")]
    ParameterLengthMismatch { operation : &'static str, expected : usize, found : usize },
    #[error("{operation}: beta vector has length {found}, expected {expected}")]
    BetaLengthMismatch { operation : &'static str, expected : usize, found : usize },
    #[error("row index {row} out of range for {num_parameters} parameters")]
    RowIndexOutOfRange { row : usize, num_parameters : usize },
    #[error("column index {col} out of range for {dimension} attributes")]
    ColumnIndexOutOfRange { col : usize, dimension : usize },
    #[error("{operation} called before setup_distribution")]
    DistributionNotSetUp { operation : &'static str },
    #[error("gradient queried before sampling_accumulate_precompute")]
    SolutionNotCached,
    #[error("parameters differ from those last passed to setup_distribution")]
    StaleSolution,
    #[error("scripted Gaussian source needs at least one value")]
    EmptyGaussianScript,
    #[error("Cholesky factor is singular: diagonal entry {index} is {value}")]
    SingularFactor { index : usize, value : f64 },
    #[error("{operation} produced a non-finite value at index {index}")]
    NonFinite { operation : &'static str, index : usize },
    #[error("{operation}: triangular solve failed: {message}")]
    TriangularSolveFailed { operation : &'static str, message : String },
}

impl DistributionError {
    ///Returns true iff this error stems from the caller violating the
    ///calling contract, rather than from degenerate parameter values.
    pub fn is_contract_violation(&self) -> bool {
        match (self) {
            DistributionError::SingularFactor { .. } |
            DistributionError::NonFinite { .. } |
            DistributionError::TriangularSolveFailed { .. } => false,
            _ => true
        }
    }
}
