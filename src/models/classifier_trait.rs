use ndarray::{Array1, ArrayView1};

use crate::error::ClassifierError;

/// The capability every classification algorithm offers to a network layer.
/// This centralizes the contract in the `models` module so implementations
/// can live next to model code; the owning layer only ever talks to a
/// `Box<dyn ClassificationAlgorithm>`.
pub trait ClassificationAlgorithm {
    /// Fit the model from parallel feature/target sequences, replacing any
    /// previous model and recording a training-accuracy summary.
    ///
    /// Fails on an empty set, mismatched sequence lengths, or a feature
    /// vector whose length differs from `input_size`.
    fn fit(&mut self, features: &[Vec<f64>], targets: &[i32]) -> Result<(), ClassifierError>;

    /// Predict an integer class index for one input vector. Returns the
    /// sentinel `-1` when no model has been fit; never fails.
    fn predict(&self, input: ArrayView1<'_, f64>) -> i32;

    /// Encode a predicted class index as a one-hot output vector of length
    /// `output_size`. The sentinel `-1` is the designated "no prediction"
    /// case, not an error; indices the variant cannot place in the output
    /// vector fail with `OutputIndexOutOfRange`.
    fn output_vector(&self, class_index: i32) -> Result<Array1<f64>, ClassifierError>;

    /// A fresh instance with identical hyperparameters and no trained model.
    fn copy_untrained(&self) -> Box<dyn ClassificationAlgorithm>;

    fn input_size(&self) -> usize;

    fn output_size(&self) -> usize;

    /// True once `fit` has succeeded since construction or copy.
    fn is_trained(&self) -> bool;

    /// Fraction of training rows predicted correctly by the last fit.
    fn training_accuracy(&self) -> Option<f64>;

    /// Human readable name for display.
    fn name(&self) -> &str {
        "classifier"
    }
}
