//! Linear classifier loss functions
//!
//! This crate provides the two classic loss functions for linear
//! classifiers, each as a pure function of a weight matrix, a minibatch of
//! examples, integer class labels, and an L2 regularization strength:
//!
//! - [`SvmLoss`] - multiclass SVM (hinge) loss with fixed margin 1
//! - [`SoftmaxLoss`] - softmax cross-entropy loss
//!
//! Both come in two numerically equivalent forms: a loop-based reference
//! implementation ([`svm_loss_naive`], [`softmax_loss_naive`]) and a
//! vectorized implementation built on dense matrix products
//! ([`svm_loss_vectorized`], [`softmax_loss_vectorized`]). The structs
//! implement the [`LinearLoss`] trait and dispatch to the vectorized path.
//!
//! # Example
//!
//! ```
//! use clasificar::{LinearLoss, SoftmaxLoss};
//! use ndarray::{array, Array2};
//!
//! let w = Array2::<f64>::zeros((3, 2));
//! let x = array![[1.0, 2.0, 3.0]];
//! let y = array![0_usize];
//!
//! let (loss, grad) = SoftmaxLoss.evaluate(&w, &x, &y, 0.0).unwrap();
//! assert!((loss - 2.0_f64.ln()).abs() < 1e-12);
//! assert_eq!(grad.dim(), (3, 2));
//! ```

pub mod loss;

pub use loss::{
    softmax_loss_naive, softmax_loss_vectorized, svm_loss_naive, svm_loss_vectorized, LinearLoss,
    LossError, Result, SoftmaxLoss, SvmLoss,
};
