//! Loss functions for linear classifiers
//!
//! This module provides loss/gradient evaluators for linear classification:
//!
//! - [`SvmLoss`] - multiclass SVM (hinge) loss, margin 1
//! - [`SoftmaxLoss`] - softmax cross-entropy loss
//!
//! Each evaluator reads a weight matrix `W` of shape `(D, C)`, a data
//! matrix `X` of shape `(N, D)`, a label vector `y` of length `N` with
//! entries in `[0, C)`, and a regularization strength `reg`, and returns
//! the scalar batch loss together with the gradient `dW` of the same
//! shape as `W`. Inputs are validated once per call; see [`LossError`].

mod error;
mod softmax;
mod svm;
mod traits;

pub use error::{LossError, Result};
pub use softmax::{softmax_loss_naive, softmax_loss_vectorized, SoftmaxLoss};
pub use svm::{svm_loss_naive, svm_loss_vectorized, SvmLoss};
pub use traits::LinearLoss;
