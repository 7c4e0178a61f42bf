//! Gaussian random coefficients for simulated-maximum-likelihood estimation
//! of mixed logit discrete choice models.
//!
//! A single flat parameter vector holds the mean of the coefficients followed
//! by the free entries of an upper-triangular Cholesky factor of their covariance.
//! [`crate::gaussian_distribution::GaussianDistribution`] unpacks that vector,
//! draws coefficient vectors from the distribution it describes, and evaluates
//! the Jacobian of a draw with respect to the parameters one entry at a time,
//! using a single cached triangular solve per draw.
//!
//! For starting points, see [`crate::gaussian_distribution::GaussianDistribution`]
//! and [`crate::random_coefficient_distribution::RandomCoefficientDistribution`].

#![allow(unused_parens)]

#[macro_use] extern crate log;
extern crate lapack_src;

pub mod params;
pub mod error;
pub mod settings;
pub mod parameter_layout;
pub mod cholesky_factor;
pub mod gaussian_source;
pub mod linalg_utils;
pub mod gaussian_distribution;
pub mod random_coefficient_distribution;
pub mod test_utils;
