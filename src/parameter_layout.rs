extern crate ndarray;

use ndarray::*;
use serde::{Serialize, Deserialize};

use crate::error::*;
use crate::params::*;

///One entry of the upper-triangular Cholesky factor, as visited by a
///[`TriangularWalk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriangularSlot {
    ///Index of this entry within the triangular block of the parameter vector
    pub slot : usize,
    pub row : usize,
    pub col : usize,
    ///Index within the triangular block at which `row` began
    pub row_start : usize
}

///Walks the free entries of a `dimension x dimension` upper-triangular matrix
///in row-major order. Row 0 contributes `dimension` entries, row 1 contributes
///`dimension - 1`, and so on down to a single entry in the last row.
pub struct TriangularWalk {
    num_entries : usize,
    slot : usize,
    limit : usize,
    add : usize,
    row : usize,
    row_start : usize
}

impl TriangularWalk {
    pub fn new(dimension : usize) -> TriangularWalk {
        TriangularWalk {
            num_entries : num_cholesky_factor_entries(dimension),
            slot : 0,
            limit : dimension,
            add : dimension.saturating_sub(1),
            row : 0,
            row_start : 0
        }
    }
}

impl Iterator for TriangularWalk {
    type Item = TriangularSlot;

    fn next(&mut self) -> Option<TriangularSlot> {
        if (self.slot >= self.num_entries) {
            return None;
        }
        let i = self.slot;
        if (i == self.limit) {
            self.limit += self.add;
            self.add -= 1;
            self.row += 1;
            self.row_start = i;
        }
        self.slot += 1;
        Some(TriangularSlot {
            slot : i,
            row : self.row,
            col : self.row + i - self.row_start,
            row_start : self.row_start
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_entries - self.slot;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TriangularWalk {}

///Describes how a flat parameter vector of length `dimension * (dimension + 3) / 2`
///splits into a mean and an upper-triangular Cholesky factor, along with
///the index tables which encode the sparsity of the Jacobian of a draw
///with respect to the parameters.
///
///Both index tables are indexed by parameter index, and are only meaningful
///for indices at or beyond `dimension` (i.e: the Cholesky factor block).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterLayout {
    dimension : usize,
    num_parameters : usize,
    num_cholesky_factor_entries : usize,
    ///For each Cholesky-factor parameter, the single output attribute whose
    ///derivative it touches (which is the factor row it lives in)
    nonzero_column_indices : Vec<usize>,
    ///For each Cholesky-factor parameter, the parameter index at which
    ///its factor row began
    start_indices : Vec<usize>
}

impl ParameterLayout {
    ///Builds the layout for the given number of attributes.
    pub fn new(dimension : usize) -> Result<ParameterLayout> {
        if (dimension == 0) {
            return Err(DistributionError::InvalidDimension { dimension });
        }
        let num_parameters = num_parameters(dimension);
        let num_cholesky_factor_entries = num_cholesky_factor_entries(dimension);

        let mut nonzero_column_indices = vec![0; num_parameters];
        let mut start_indices = vec![0; num_parameters];

        for slot in TriangularWalk::new(dimension) {
            nonzero_column_indices[dimension + slot.slot] = slot.row;
            start_indices[dimension + slot.slot] = dimension + slot.row_start;
        }

        Ok(ParameterLayout {
            dimension,
            num_parameters,
            num_cholesky_factor_entries,
            nonzero_column_indices,
            start_indices
        })
    }

    ///Builds the layout from a list of attribute dimensions, of which only
    ///the first is used (a Gaussian has a single block of attributes).
    pub fn from_attribute_dimensions(attribute_dimensions : &[usize]) -> Result<ParameterLayout> {
        match (attribute_dimensions.first()) {
            Some(dimension) => ParameterLayout::new(*dimension),
            None => Err(DistributionError::InvalidDimension { dimension : 0 })
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn num_parameters(&self) -> usize {
        self.num_parameters
    }

    pub fn num_cholesky_factor_entries(&self) -> usize {
        self.num_cholesky_factor_entries
    }

    pub fn nonzero_column_indices(&self) -> &[usize] {
        &self.nonzero_column_indices
    }

    pub fn start_indices(&self) -> &[usize] {
        &self.start_indices
    }

    ///Iterates over the Cholesky-factor entries in parameter order.
    pub fn triangular_walk(&self) -> TriangularWalk {
        TriangularWalk::new(self.dimension)
    }

    ///Returns true iff `parameter_index` addresses the mean block.
    pub fn is_mean_parameter(&self, parameter_index : usize) -> bool {
        parameter_index < self.dimension
    }

    ///For a parameter in the Cholesky-factor block, yields the `(row, col)`
    ///position of the factor entry it holds. Yields `None` for mean parameters
    ///and out-of-range indices.
    pub fn triangular_position(&self, parameter_index : usize) -> Option<(usize, usize)> {
        if (self.is_mean_parameter(parameter_index) || parameter_index >= self.num_parameters) {
            return None;
        }
        let row = self.nonzero_column_indices[parameter_index];
        let col = parameter_index - self.start_indices[parameter_index] + row;
        Some((row, col))
    }

    ///Checks that `parameters` has exactly [`ParameterLayout::num_parameters`] entries.
    pub fn check_parameters(&self, operation : &'static str, parameters : ArrayView1<f64>) -> Result<()> {
        if (parameters.len() != self.num_parameters) {
            return Err(DistributionError::ParameterLengthMismatch {
                operation,
                expected : self.num_parameters,
                found : parameters.len()
            });
        }
        Ok(())
    }

    ///Checks that `beta` has exactly [`ParameterLayout::dimension`] entries.
    pub fn check_beta(&self, operation : &'static str, beta : ArrayView1<f64>) -> Result<()> {
        if (beta.len() != self.dimension) {
            return Err(DistributionError::BetaLengthMismatch {
                operation,
                expected : self.dimension,
                found : beta.len()
            });
        }
        Ok(())
    }

    ///Borrows the mean block of the given parameter vector without copying.
    pub fn mean_view<'a>(&self, parameters : ArrayView1<'a, f64>) -> ArrayView1<'a, f64> {
        parameters.slice_move(s![..self.dimension])
    }

    ///Packs a mean vector and an upper-triangular factor into a parameter vector.
    ///Entries of `factor` strictly below the diagonal are ignored.
    pub fn pack_parameters(&self, mean : ArrayView1<f64>, factor : ArrayView2<f64>) -> Result<Array1<f64>> {
        self.check_beta("pack_parameters", mean)?;
        let n = self.dimension;
        if (factor.dim() != (n, n)) {
            return Err(DistributionError::ParameterLengthMismatch {
                operation : "pack_parameters",
                expected : n * n,
                found : factor.len()
            });
        }
        let mut result = Array::zeros((self.num_parameters,));
        result.slice_mut(s![..n]).assign(&mean);
        for slot in self.triangular_walk() {
            result[[n + slot.slot,]] = factor[[slot.row, slot.col]];
        }
        Ok(result)
    }
}
