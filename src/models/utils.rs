use ndarray::Array1;

use crate::error::ClassifierError;

/// One-hot vector of length `len` with a 1.0 at `position`.
pub fn one_hot(position: usize, len: usize) -> Array1<f64> {
    let mut v = Array1::zeros(len);
    v[position] = 1.0;
    v
}

/// Fraction of predictions matching their targets.
pub fn accuracy(targets: &[i32], predictions: &[i32]) -> f64 {
    if targets.is_empty() {
        return 0.0;
    }
    let correct = targets
        .iter()
        .zip(predictions)
        .filter(|(t, p)| t == p)
        .count();
    correct as f64 / targets.len() as f64
}

/// Shared fit-precondition checks: non-empty, parallel, fixed-length rows.
pub fn validate_training_set(
    features: &[Vec<f64>],
    targets: &[i32],
    input_size: usize,
) -> Result<(), ClassifierError> {
    if features.is_empty() {
        return Err(ClassifierError::EmptyTrainingSet);
    }
    if features.len() != targets.len() {
        return Err(ClassifierError::TargetLengthMismatch {
            features: features.len(),
            targets: targets.len(),
        });
    }
    for (row, vector) in features.iter().enumerate() {
        if vector.len() != input_size {
            return Err(ClassifierError::FeatureLengthMismatch {
                row,
                expected: input_size,
                found: vector.len(),
            });
        }
    }
    Ok(())
}
