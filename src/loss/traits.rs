//! Loss function trait

use ndarray::{Array1, Array2};

use super::error::Result;

/// Trait for linear classifier losses
///
/// The common calling convention shared by every loss in this crate:
/// weights `w` of shape `(D, C)`, data `x` of shape `(N, D)`, labels `y`
/// of length `N` with entries in `[0, C)`, and a non-negative L2
/// regularization strength `reg`.
pub trait LinearLoss {
    /// Compute the batch loss and the gradient with respect to `w`
    ///
    /// Returns the mean data loss over the batch plus `reg * sum(w^2)`,
    /// and a gradient matrix of the same shape as `w`. `w` is never
    /// mutated; the caller owns the update step.
    fn evaluate(
        &self,
        w: &Array2<f64>,
        x: &Array2<f64>,
        y: &Array1<usize>,
        reg: f64,
    ) -> Result<(f64, Array2<f64>)>;

    /// Name of the loss function
    fn name(&self) -> &str;
}
