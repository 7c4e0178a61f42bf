extern crate ndarray;

use ndarray::*;

use crate::error::*;
use crate::settings::*;
use crate::parameter_layout::*;
use crate::cholesky_factor::*;
use crate::gaussian_source::*;
use crate::linalg_utils::*;

///The Gaussian distribution over random coefficients used by the mixed logit
///discrete choice model. A single parameter vector holds the mean followed by
///the upper-triangular Cholesky factor `U` (see [`ParameterLayout`]), and draws
///are `beta = U z + mean` for standard-normal `z`, so that the covariance of
///`beta` is `U U^T`.
///
///This struct is the mutable per-estimator state: the layout tables, the
///assembled factor, and the triangular solve cached for the current draw.
///Calls must happen in the order
///
/// 1. [`GaussianDistribution::setup_distribution`] whenever the parameters change,
/// 2. [`GaussianDistribution::draw_beta`] to draw a `beta`,
/// 3. [`GaussianDistribution::sampling_accumulate_precompute`] for that `beta`,
/// 4. [`GaussianDistribution::attribute_gradient_with_respect_to_parameter`] as often as needed.
///
///Out-of-order calls are reported as contract violations. Concurrent users
///should each own a separate [`GaussianDistribution`].
#[derive(Clone, Debug)]
pub struct GaussianDistribution {
    layout : ParameterLayout,
    settings : DistributionSettings,
    cholesky_factor : Array2<f64>,
    ///The parameters the factor was last assembled from
    setup_parameters : Option<Array1<f64>>,
    ///Solution to `cholesky_factor * x = beta - mean` for the last precomputed
    ///`beta`. Cleared on every setup, so it never outlives its parameters.
    cached_solution : Option<Array1<f64>>
}

impl GaussianDistribution {
    pub fn new(dimension : usize) -> Result<GaussianDistribution> {
        GaussianDistribution::with_settings(dimension, DistributionSettings::default())
    }

    pub fn with_settings(dimension : usize, settings : DistributionSettings) -> Result<GaussianDistribution> {
        let layout = ParameterLayout::new(dimension)?;
        debug!("Gaussian distribution over {} attributes with {} parameters",
               dimension, layout.num_parameters());
        Ok(GaussianDistribution {
            layout,
            settings,
            cholesky_factor : Array::zeros((dimension, dimension)),
            setup_parameters : None,
            cached_solution : None
        })
    }

    ///Builds a distribution from a list of attribute dimensions (only the first
    ///is used), returning the number of parameters it expects alongside it.
    pub fn init(attribute_dimensions : &[usize]) -> Result<(usize, GaussianDistribution)> {
        let layout = ParameterLayout::from_attribute_dimensions(attribute_dimensions)?;
        let distribution = GaussianDistribution::new(layout.dimension())?;
        Ok((distribution.num_parameters(), distribution))
    }

    pub fn layout(&self) -> &ParameterLayout {
        &self.layout
    }

    pub fn settings(&self) -> &DistributionSettings {
        &self.settings
    }

    pub fn dimension(&self) -> usize {
        self.layout.dimension()
    }

    pub fn num_parameters(&self) -> usize {
        self.layout.num_parameters()
    }

    pub fn is_set_up(&self) -> bool {
        self.setup_parameters.is_some()
    }

    ///The upper-triangular factor assembled by the last call to
    ///[`GaussianDistribution::setup_distribution`] (all zeros before that).
    pub fn cholesky_factor(&self) -> &Array2<f64> {
        &self.cholesky_factor
    }

    pub fn cached_solution(&self) -> Option<&Array1<f64>> {
        self.cached_solution.as_ref()
    }

    ///Assembles the Cholesky factor from `parameters`. Must be called every time
    ///the parameters change, and invalidates any cached solution.
    pub fn setup_distribution(&mut self, parameters : ArrayView1<f64>) -> Result<()> {
        build_cholesky_factor(parameters, &self.layout, &mut self.cholesky_factor)?;
        self.setup_parameters = Some(parameters.to_owned());
        self.cached_solution = None;
        debug!("Set up Cholesky factor of dimension {}", self.dimension());
        Ok(())
    }

    fn check_set_up(&self, operation : &'static str, parameters : ArrayView1<f64>) -> Result<()> {
        self.layout.check_parameters(operation, parameters)?;
        match (&self.setup_parameters) {
            None => Err(DistributionError::DistributionNotSetUp { operation }),
            Some(setup_parameters) => {
                if (self.settings.verify_call_order && !identical(setup_parameters.view(), parameters)) {
                    warn!("{} called with parameters other than those set up", operation);
                    return Err(DistributionError::StaleSolution);
                }
                Ok(())
            }
        }
    }

    ///Draws `beta = U z + mean`, taking `dimension` standard-normal variates from `source`.
    pub fn draw_beta<G : GaussianSource + ?Sized>(&self, parameters : ArrayView1<f64>,
                                                  source : &mut G) -> Result<Array1<f64>> {
        let mut beta = Array::zeros((self.dimension(),));
        self.draw_beta_into(parameters, source, &mut beta)?;
        Ok(beta)
    }

    ///Like [`GaussianDistribution::draw_beta`], but writes into `beta_out`,
    ///resizing it if needed.
    pub fn draw_beta_into<G : GaussianSource + ?Sized>(&self, parameters : ArrayView1<f64>,
                                                       source : &mut G,
                                                       beta_out : &mut Array1<f64>) -> Result<()> {
        self.check_set_up("draw_beta", parameters)?;
        check_nonsingular_diagonal("draw_beta", self.cholesky_factor.view(), self.settings.singular_diagonal_thresh)?;

        let n = self.dimension();
        let random_gaussian_vector : Array1<f64> = (0..n).map(|_| source.next_gaussian(1.0)).collect();

        let mean = self.layout.mean_view(parameters);
        let mut beta = self.cholesky_factor.dot(&random_gaussian_vector);
        beta += &mean;

        if (self.settings.check_finite) {
            check_finite("draw_beta", beta.view())?;
        }
        trace!("Drew beta {}", beta);
        *beta_out = beta;
        Ok(())
    }

    ///Solves `U x = beta - mean` once for the given draw and caches `x` for
    ///subsequent gradient queries against `beta`. This is where the parameters
    ///are checked against those set up; gradient queries only check that a
    ///solution is cached, and answering them for the draw that was precomputed
    ///is up to the caller.
    pub fn sampling_accumulate_precompute(&mut self, parameters : ArrayView1<f64>,
                                          beta : ArrayView1<f64>) -> Result<()> {
        let operation = "sampling_accumulate_precompute";
        self.check_set_up(operation, parameters)?;
        self.layout.check_beta(operation, beta)?;
        self.cached_solution = None;

        let mean = self.layout.mean_view(parameters);
        let right_hand_side = &beta - &mean;
        let solution = solve_upper_triangular(operation, &self.cholesky_factor, &right_hand_side,
                                              self.settings.singular_diagonal_thresh)?;
        if (self.settings.check_finite) {
            check_finite(operation, solution.view())?;
        }
        trace!("Cached triangular solve {}", solution);

        self.cached_solution = Some(solution);
        Ok(())
    }

    ///Returns the `(row_index, col_index)` entry of the Jacobian of `beta` with respect
    ///to the parameters, where `row_index` ranges over parameters and `col_index` over
    ///attributes. The mean block is the identity. Each Cholesky-factor parameter
    ///`U[r, c]` only moves `beta[r]`, and does so at rate `x[c]` where `x` is the
    ///cached solution.
    pub fn attribute_gradient_with_respect_to_parameter(&self, parameters : ArrayView1<f64>,
                                                        beta : ArrayView1<f64>,
                                                        row_index : usize, col_index : usize) -> Result<f64> {
        let operation = "attribute_gradient_with_respect_to_parameter";
        self.layout.check_parameters(operation, parameters)?;
        self.layout.check_beta(operation, beta)?;
        if (row_index >= self.num_parameters()) {
            return Err(DistributionError::RowIndexOutOfRange {
                row : row_index,
                num_parameters : self.num_parameters()
            });
        }
        if (col_index >= self.dimension()) {
            return Err(DistributionError::ColumnIndexOutOfRange {
                col : col_index,
                dimension : self.dimension()
            });
        }
        let cached_solution = match (&self.cached_solution) {
            Some(cached_solution) => cached_solution,
            None if !self.is_set_up() => return Err(DistributionError::DistributionNotSetUp { operation }),
            None => return Err(DistributionError::SolutionNotCached)
        };

        if (self.layout.is_mean_parameter(row_index)) {
            return Ok(if (row_index == col_index) {1.0} else {0.0});
        }

        let nonzero_column_index = self.layout.nonzero_column_indices()[row_index];
        if (nonzero_column_index != col_index) {
            return Ok(0.0);
        }
        let solution_index = row_index - self.layout.start_indices()[row_index] + nonzero_column_index;
        Ok(cached_solution[[solution_index,]])
    }

    ///Materializes the full `num_parameters x dimension` Jacobian of `beta` with
    ///respect to the parameters. Only intended for diagnostics, since the
    ///per-entry accessor avoids the `O(dimension * num_parameters)` cost.
    pub fn dense_jacobian(&self, parameters : ArrayView1<f64>, beta : ArrayView1<f64>) -> Result<Array2<f64>> {
        let mut result = Array::zeros((self.num_parameters(), self.dimension()));
        for row_index in 0..self.num_parameters() {
            for col_index in 0..self.dimension() {
                result[[row_index, col_index]] =
                    self.attribute_gradient_with_respect_to_parameter(parameters, beta, row_index, col_index)?;
            }
        }
        Ok(result)
    }

    ///The covariance `U U^T` of draws under the current setup.
    pub fn covariance(&self) -> Result<Array2<f64>> {
        if (!self.is_set_up()) {
            return Err(DistributionError::DistributionNotSetUp { operation : "covariance" });
        }
        Ok(outer_gram(self.cholesky_factor.view()))
    }
}
