//! Multiclass SVM (hinge) loss

use ndarray::{Array1, Array2, Axis};

use super::error::{validate_inputs, Result};
use super::LinearLoss;

/// Fixed hinge margin.
const DELTA: f64 = 1.0;

/// Multiclass SVM loss, naive implementation (with loops)
///
/// For each example `i` and each class `j != y[i]` the hinge term is
/// `max(0, scores[j] - scores[y[i]] + 1)`. The batch loss is the mean of
/// the per-example sums plus `reg * sum(w^2)`. A margin of exactly zero
/// is not a violation and contributes nothing to loss or gradient.
///
/// Retained as a reference baseline; [`svm_loss_vectorized`] computes the
/// same values with dense matrix products.
pub fn svm_loss_naive(
    w: &Array2<f64>,
    x: &Array2<f64>,
    y: &Array1<usize>,
    reg: f64,
) -> Result<(f64, Array2<f64>)> {
    validate_inputs(w, x, y, reg)?;

    let num_train = x.nrows();
    let num_classes = w.ncols();
    let mut loss = 0.0;
    let mut dw = Array2::<f64>::zeros(w.raw_dim());

    for i in 0..num_train {
        let xi = x.row(i);
        let scores = xi.dot(w);
        let correct_class_score = scores[y[i]];
        for j in 0..num_classes {
            if j == y[i] {
                continue;
            }
            let margin = scores[j] - correct_class_score + DELTA;
            if margin > 0.0 {
                loss += margin;
                let mut col = dw.column_mut(j);
                col += &xi;
                let mut col = dw.column_mut(y[i]);
                col -= &xi;
            }
        }
    }

    // Sum over examples so far; we want the batch mean.
    let n = num_train as f64;
    loss /= n;
    dw /= n;

    loss += reg * w.iter().map(|&v| v * v).sum::<f64>();
    dw.scaled_add(2.0 * reg, w);

    Ok((loss, dw))
}

/// Multiclass SVM loss, vectorized implementation
///
/// Inputs and outputs are the same as [`svm_loss_naive`]. The margin
/// matrix is computed in one pass, the label column is zeroed per row,
/// and the gradient is `x.t() . mask / n` where `mask` holds 1 for each
/// violated margin and minus the per-row violation count on the label
/// column.
pub fn svm_loss_vectorized(
    w: &Array2<f64>,
    x: &Array2<f64>,
    y: &Array1<usize>,
    reg: f64,
) -> Result<(f64, Array2<f64>)> {
    validate_inputs(w, x, y, reg)?;

    let n = x.nrows() as f64;

    let mut margins = x.dot(w);
    for (i, mut row) in margins.axis_iter_mut(Axis(0)).enumerate() {
        let correct_class_score = row[y[i]];
        row.mapv_inplace(|s| (s - correct_class_score + DELTA).max(0.0));
        // the correct class is never penalized against itself
        row[y[i]] = 0.0;
    }

    let loss = margins.sum() / n + reg * w.iter().map(|&v| v * v).sum::<f64>();

    // Strict > 0: margins clamped to exactly zero carry no gradient.
    let mut mask = margins.mapv(|m| if m > 0.0 { 1.0 } else { 0.0 });
    for (i, mut row) in mask.axis_iter_mut(Axis(0)).enumerate() {
        let violations = row.sum();
        row[y[i]] = -violations;
    }

    let mut dw = x.t().dot(&mask);
    dw /= n;
    dw.scaled_add(2.0 * reg, w);

    Ok((loss, dw))
}

/// Multiclass SVM (hinge) loss
///
/// L = mean_i sum_{j != y[i]} max(0, s[i,j] - s[i,y[i]] + 1) + reg * sum(w^2)
///
/// # Example
///
/// ```
/// use clasificar::{LinearLoss, SvmLoss};
/// use ndarray::{array, Array2};
///
/// let w = Array2::<f64>::zeros((3, 2));
/// let x = array![[1.0, 2.0, 3.0]];
/// let y = array![0_usize];
///
/// let (loss, grad) = SvmLoss.evaluate(&w, &x, &y, 0.0).unwrap();
/// assert_eq!(loss, 1.0);
/// assert_eq!(grad.column(1).to_vec(), vec![1.0, 2.0, 3.0]);
/// ```
pub struct SvmLoss;

impl LinearLoss for SvmLoss {
    fn evaluate(
        &self,
        w: &Array2<f64>,
        x: &Array2<f64>,
        y: &Array1<usize>,
        reg: f64,
    ) -> Result<(f64, Array2<f64>)> {
        svm_loss_vectorized(w, x, y, reg)
    }

    fn name(&self) -> &'static str {
        "Svm"
    }
}
