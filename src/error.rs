use std::error::Error;
use std::fmt;

/// Custom error type for classifier training and output-encoding failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// `fit()` was called with zero training examples.
    EmptyTrainingSet,
    /// A feature vector's length differs from the algorithm's input size.
    FeatureLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Feature and target sequences have different lengths.
    TargetLengthMismatch { features: usize, targets: usize },
    /// A predicted class index cannot be one-hot encoded into the output vector.
    OutputIndexOutOfRange { index: i32, output_size: usize },
    /// The backend solver failed to produce a model.
    TrainingFailed(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifierError::EmptyTrainingSet => {
                write!(f, "Cannot fit a classifier on an empty training set")
            }
            ClassifierError::FeatureLengthMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "Feature vector {} has length {} but the classifier expects {}",
                row, found, expected
            ),
            ClassifierError::TargetLengthMismatch { features, targets } => write!(
                f,
                "Got {} feature vectors but {} targets",
                features, targets
            ),
            ClassifierError::OutputIndexOutOfRange { index, output_size } => write!(
                f,
                "Prediction of {} > output size of {}",
                index, output_size
            ),
            ClassifierError::TrainingFailed(msg) => write!(f, "Training failed: {}", msg),
        }
    }
}

impl Error for ClassifierError {}
