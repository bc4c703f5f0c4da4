//! Loss input validation and error types

use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors for loss evaluation
///
/// All variants are programming/usage errors in the caller: the
/// mathematics itself defines no recoverable failure states.
#[derive(Debug, Error, PartialEq)]
pub enum LossError {
    #[error("X has {x_features} features but W has {w_rows} rows")]
    FeatureMismatch { x_features: usize, w_rows: usize },

    #[error("y has {y_len} labels but X has {x_rows} rows")]
    LabelCountMismatch { y_len: usize, x_rows: usize },

    #[error("label {label} at index {index} is outside [0, {num_classes})")]
    LabelOutOfRange {
        index: usize,
        label: usize,
        num_classes: usize,
    },

    #[error("regularization strength must be non-negative, got {0}")]
    NegativeRegularization(f64),
}

/// Result type for loss evaluation
pub type Result<T> = std::result::Result<T, LossError>;

/// Check the common calling convention before any arithmetic.
pub(crate) fn validate_inputs(
    w: &Array2<f64>,
    x: &Array2<f64>,
    y: &Array1<usize>,
    reg: f64,
) -> Result<()> {
    if x.ncols() != w.nrows() {
        return Err(LossError::FeatureMismatch {
            x_features: x.ncols(),
            w_rows: w.nrows(),
        });
    }
    if y.len() != x.nrows() {
        return Err(LossError::LabelCountMismatch {
            y_len: y.len(),
            x_rows: x.nrows(),
        });
    }
    let num_classes = w.ncols();
    if let Some((index, &label)) = y.iter().enumerate().find(|&(_, &l)| l >= num_classes) {
        return Err(LossError::LabelOutOfRange {
            index,
            label,
            num_classes,
        });
    }
    if reg < 0.0 {
        return Err(LossError::NegativeRegularization(reg));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_loss_error_display() {
        let err = LossError::FeatureMismatch {
            x_features: 4,
            w_rows: 3,
        };
        assert!(format!("{}", err).contains("4 features"));
        assert!(format!("{}", err).contains("3 rows"));

        let err = LossError::LabelCountMismatch { y_len: 2, x_rows: 5 };
        assert!(format!("{}", err).contains("2 labels"));
        assert!(format!("{}", err).contains("5 rows"));

        let err = LossError::LabelOutOfRange {
            index: 1,
            label: 7,
            num_classes: 3,
        };
        assert!(format!("{}", err).contains("label 7"));
        assert!(format!("{}", err).contains("[0, 3)"));

        let err = LossError::NegativeRegularization(-0.5);
        assert!(format!("{}", err).contains("non-negative"));
    }

    #[test]
    fn test_validate_accepts_consistent_inputs() {
        let w = Array2::<f64>::zeros((3, 2));
        let x = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let y = array![0_usize, 1];
        assert!(validate_inputs(&w, &x, &y, 0.1).is_ok());
    }

    #[test]
    fn test_validate_rejects_feature_mismatch() {
        let w = Array2::<f64>::zeros((2, 2));
        let x = array![[1.0, 2.0, 3.0]];
        let y = array![0_usize];
        assert_eq!(
            validate_inputs(&w, &x, &y, 0.0),
            Err(LossError::FeatureMismatch {
                x_features: 3,
                w_rows: 2
            })
        );
    }

    #[test]
    fn test_validate_rejects_label_count_mismatch() {
        let w = Array2::<f64>::zeros((3, 2));
        let x = array![[1.0, 2.0, 3.0]];
        let y = array![0_usize, 1];
        assert_eq!(
            validate_inputs(&w, &x, &y, 0.0),
            Err(LossError::LabelCountMismatch { y_len: 2, x_rows: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_label_out_of_range() {
        let w = Array2::<f64>::zeros((3, 2));
        let x = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let y = array![0_usize, 2];
        assert_eq!(
            validate_inputs(&w, &x, &y, 0.0),
            Err(LossError::LabelOutOfRange {
                index: 1,
                label: 2,
                num_classes: 2
            })
        );
    }

    #[test]
    fn test_validate_rejects_negative_reg() {
        let w = Array2::<f64>::zeros((3, 2));
        let x = array![[1.0, 2.0, 3.0]];
        let y = array![0_usize];
        assert_eq!(
            validate_inputs(&w, &x, &y, -1.0),
            Err(LossError::NegativeRegularization(-1.0))
        );
    }
}
