extern crate ndarray;

use ndarray::*;

use crate::error::*;
use crate::gaussian_source::*;
use crate::gaussian_distribution::*;

///A parameterized distribution over the random coefficients of a mixed logit
///model, as seen by the simulated-maximum-likelihood estimator. The estimator
///calls [`RandomCoefficientDistribution::setup_distribution`] once per parameter
///update, then for each simulation draw calls
///[`RandomCoefficientDistribution::draw_beta`],
///[`RandomCoefficientDistribution::sampling_accumulate_precompute`], and queries
///[`RandomCoefficientDistribution::attribute_gradient_with_respect_to_parameter`].
pub trait RandomCoefficientDistribution {
    fn num_parameters(&self) -> usize;

    ///The number of random coefficients in each draw.
    fn num_attributes(&self) -> usize;

    fn setup_distribution(&mut self, parameters : ArrayView1<f64>) -> Result<()>;

    fn draw_beta(&self, parameters : ArrayView1<f64>, source : &mut dyn GaussianSource) -> Result<Array1<f64>>;

    fn sampling_accumulate_precompute(&mut self, parameters : ArrayView1<f64>, beta : ArrayView1<f64>) -> Result<()>;

    ///The derivative of `beta[col_index]` with respect to `parameters[row_index]`.
    fn attribute_gradient_with_respect_to_parameter(&self, parameters : ArrayView1<f64>, beta : ArrayView1<f64>,
                                                    row_index : usize, col_index : usize) -> Result<f64>;
}

impl RandomCoefficientDistribution for GaussianDistribution {
    fn num_parameters(&self) -> usize {
        GaussianDistribution::num_parameters(self)
    }

    fn num_attributes(&self) -> usize {
        self.dimension()
    }

    fn setup_distribution(&mut self, parameters : ArrayView1<f64>) -> Result<()> {
        GaussianDistribution::setup_distribution(self, parameters)
    }

    fn draw_beta(&self, parameters : ArrayView1<f64>, source : &mut dyn GaussianSource) -> Result<Array1<f64>> {
        GaussianDistribution::draw_beta(self, parameters, source)
    }

    fn sampling_accumulate_precompute(&mut self, parameters : ArrayView1<f64>, beta : ArrayView1<f64>) -> Result<()> {
        GaussianDistribution::sampling_accumulate_precompute(self, parameters, beta)
    }

    fn attribute_gradient_with_respect_to_parameter(&self, parameters : ArrayView1<f64>, beta : ArrayView1<f64>,
                                                    row_index : usize, col_index : usize) -> Result<f64> {
        GaussianDistribution::attribute_gradient_with_respect_to_parameter(self, parameters, beta, row_index, col_index)
    }
}
