extern crate ndarray;

use ndarray::*;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;
use rand::distributions::Uniform;

pub fn assert_equal_matrices_to_within(one : &Array2<f64>, two : &Array2<f64>, within : f64) {
    assert_eq!(one.dim(), two.dim());
    let diff = one - two;
    let frob_norm = diff.iter().map(|x| x * x).sum::<f64>().sqrt();
    if (!(frob_norm <= within)) {
        panic!("Matrices differ by {} in Frobenius norm\n{}\nvs\n{}", frob_norm, one, two);
    }
}

pub fn assert_equal_vectors_to_within(one : &Array1<f64>, two : &Array1<f64>, within : f64) {
    assert_eq!(one.len(), two.len());
    let diff = one - two;
    let norm = diff.dot(&diff).sqrt();
    if (!(norm <= within)) {
        panic!("Vectors differ by {}\n{}\nvs\n{}", norm, one, two);
    }
}

pub fn assert_strictly_upper_is_zero(mat : &Array2<f64>) {
    let n = mat.shape()[0];
    for i in 0..n {
        for j in 0..i {
            if (mat[[i, j]] != 0.0) {
                panic!("Entry ({}, {}) below the diagonal is {}", i, j, mat[[i, j]]);
            }
        }
    }
}

pub fn random_vector(t : usize) -> Array1<f64> {
    Array::random((t,), StandardNormal)
}

pub fn random_matrix(t : usize, s : usize) -> Array2<f64> {
    Array::random((t, s), StandardNormal)
}

///An upper-triangular matrix with standard-normal entries on and above the diagonal.
pub fn random_upper_triangular(t : usize) -> Array2<f64> {
    let mut result = random_matrix(t, t);
    for i in 0..t {
        for j in 0..i {
            result[[i, j]] = 0.0;
        }
    }
    result
}

///Like [`random_upper_triangular`], but with diagonal entries drawn from `[1, 2]`
///so that solving against it is numerically benign.
pub fn random_well_conditioned_upper_triangular(t : usize) -> Array2<f64> {
    let mut result = random_upper_triangular(t);
    let diag = Array::random((t,), Uniform::new(1.0, 2.0));
    for i in 0..t {
        result[[i, i]] = diag[[i,]];
    }
    result
}
