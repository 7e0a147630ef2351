use std::error::Error;
use std::fmt;

use ndarray::ShapeError;

/// Errors raised when a structural precondition of an operation is violated.
///
/// Degenerate numeric inputs (zero denominators, constant columns) are not
/// errors; they are absorbed where they occur.
#[derive(Debug)]
pub enum ClassifierError {
    /// Two sequences that must be aligned have different lengths.
    LengthMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    /// Fold count is zero or larger than the number of samples.
    InvalidFoldCount { k: usize, n_samples: usize },
    /// The lambda or gamma candidate list is empty.
    EmptyGrid,
    /// Split ratio outside of [0, 1].
    InvalidRatio(f64),
    /// A search configuration field holds an unusable value.
    InvalidSearchConfig(&'static str),
    Shape(ShapeError),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifierError::LengthMismatch {
                context,
                expected,
                found,
            } => write!(
                f,
                "Mismatched length in {}: expected {}, found {}",
                context, expected, found
            ),
            ClassifierError::InvalidFoldCount { k, n_samples } => write!(
                f,
                "Cannot split {} samples into {} folds (need 1 <= k <= n_samples)",
                n_samples, k
            ),
            ClassifierError::EmptyGrid => {
                write!(f, "Hyperparameter grid must contain at least one lambda and one gamma")
            }
            ClassifierError::InvalidRatio(ratio) => {
                write!(f, "Split ratio must lie in [0, 1], got {}", ratio)
            }
            ClassifierError::InvalidSearchConfig(reason) => {
                write!(f, "Invalid search configuration: {}", reason)
            }
            ClassifierError::Shape(err) => write!(f, "Invalid array shape: {}", err),
        }
    }
}

impl Error for ClassifierError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClassifierError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for ClassifierError {
    fn from(err: ShapeError) -> Self {
        ClassifierError::Shape(err)
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Fail with `LengthMismatch` unless `found == expected`.
pub(crate) fn ensure_same_len(context: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(ClassifierError::LengthMismatch {
            context,
            expected,
            found,
        });
    }
    Ok(())
}
