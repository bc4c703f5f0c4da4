//! Softmax (cross-entropy) loss

use ndarray::{Array1, Array2, Axis};

use super::error::{validate_inputs, Result};
use super::LinearLoss;

/// Softmax loss, naive implementation (with loops)
///
/// Per-example loss is `-s[y[i]] + ln(sum_j exp(s[j]))` on row-max
/// stabilized scores; the batch loss is the mean plus `reg * sum(w^2)`.
/// Subtracting the row maximum before exponentiating leaves the softmax
/// probabilities unchanged but keeps the exponentials from overflowing.
///
/// Retained as a reference baseline; [`softmax_loss_vectorized`] computes
/// the same values with dense matrix products.
pub fn softmax_loss_naive(
    w: &Array2<f64>,
    x: &Array2<f64>,
    y: &Array1<usize>,
    reg: f64,
) -> Result<(f64, Array2<f64>)> {
    validate_inputs(w, x, y, reg)?;

    let num_train = x.nrows();
    let num_features = x.ncols();
    let num_classes = w.ncols();
    let n = num_train as f64;
    let mut loss = 0.0;
    let mut dw = Array2::<f64>::zeros(w.raw_dim());

    for i in 0..num_train {
        let xi = x.row(i);
        let mut scores = xi.dot(w);
        let max = scores.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        scores.mapv_inplace(|s| s - max);
        let exp_sum: f64 = scores.iter().map(|s| s.exp()).sum();

        loss += (-scores[y[i]] + exp_sum.ln()) / n;

        for j in 0..num_features {
            for k in 0..num_classes {
                let mut d = scores[k].exp() / exp_sum * xi[j];
                if k == y[i] {
                    d -= xi[j];
                }
                dw[[j, k]] += d / n;
            }
        }
    }

    loss += reg * w.iter().map(|&v| v * v).sum::<f64>();
    dw.scaled_add(2.0 * reg, w);

    Ok((loss, dw))
}

/// Softmax loss, vectorized implementation
///
/// Inputs and outputs are the same as [`softmax_loss_naive`]. The
/// stabilized score matrix is turned into softmax probabilities row by
/// row, 1 is subtracted at each `(i, y[i])`, and the gradient is
/// `x.t() . probs / n`.
pub fn softmax_loss_vectorized(
    w: &Array2<f64>,
    x: &Array2<f64>,
    y: &Array1<usize>,
    reg: f64,
) -> Result<(f64, Array2<f64>)> {
    validate_inputs(w, x, y, reg)?;

    let n = x.nrows() as f64;

    let mut probs = x.dot(w);
    let mut data_loss = 0.0;
    for (i, mut row) in probs.axis_iter_mut(Axis(0)).enumerate() {
        let max = row.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        row.mapv_inplace(|s| s - max);
        let correct_class_score = row[y[i]];
        row.mapv_inplace(f64::exp);
        let exp_sum = row.sum();

        data_loss += exp_sum.ln() - correct_class_score;

        row /= exp_sum;
        row[y[i]] -= 1.0;
    }

    let loss = data_loss / n + reg * w.iter().map(|&v| v * v).sum::<f64>();

    let mut dw = x.t().dot(&probs);
    dw /= n;
    dw.scaled_add(2.0 * reg, w);

    Ok((loss, dw))
}

/// Softmax (cross-entropy) loss
///
/// L = mean_i [-ln(exp(s[i,y[i]]) / sum_j exp(s[i,j]))] + reg * sum(w^2)
///
/// # Example
///
/// ```
/// use clasificar::{LinearLoss, SoftmaxLoss};
/// use ndarray::{array, Array2};
///
/// let w = Array2::<f64>::zeros((3, 2));
/// let x = array![[1.0, 2.0, 3.0]];
/// let y = array![0_usize];
///
/// let (loss, grad) = SoftmaxLoss.evaluate(&w, &x, &y, 0.0).unwrap();
/// assert!((loss - 2.0_f64.ln()).abs() < 1e-12);
/// assert_eq!(grad.column(1).to_vec(), vec![0.5, 1.0, 1.5]);
/// ```
pub struct SoftmaxLoss;

impl LinearLoss for SoftmaxLoss {
    fn evaluate(
        &self,
        w: &Array2<f64>,
        x: &Array2<f64>,
        y: &Array1<usize>,
        reg: f64,
    ) -> Result<(f64, Array2<f64>)> {
        softmax_loss_vectorized(w, x, y, reg)
    }

    fn name(&self) -> &'static str {
        "Softmax"
    }
}
