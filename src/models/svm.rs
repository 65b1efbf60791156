use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_svm::Svm;
use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::error::ClassifierError;
use crate::models::classifier_trait::ClassificationAlgorithm;
use crate::models::utils::{accuracy, one_hot, validate_training_set};

/// Support-vector-machine classifier with a polynomial kernel.
///
/// Inherently binary: the output size is forced to 2 regardless of any
/// requested value, and predictions are 1 (positive class) or 0 (negative
/// class). Targets greater than zero are treated as the positive class.
pub struct SvmClassifier {
    input_size: usize,
    /// Polynomial kernel degree.
    kernel_degree: u32,
    /// Soft margin penalty parameter.
    c: f64,
    /// Tolerance of the convergence test.
    tolerance: f64,
    model: Option<Svm<f64, bool>>,
    training_accuracy: Option<f64>,
}

/// Binary classifiers always produce two outputs.
const SVM_OUTPUT_SIZE: usize = 2;

impl SvmClassifier {
    pub fn new(input_size: usize, kernel_degree: u32, c: f64, tolerance: f64) -> Self {
        Self {
            input_size,
            kernel_degree,
            c,
            tolerance,
            model: None,
            training_accuracy: None,
        }
    }
}

impl ClassificationAlgorithm for SvmClassifier {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[i32]) -> Result<(), ClassifierError> {
        validate_training_set(features, targets, self.input_size)?;

        let flat: Vec<f64> = features.iter().flatten().copied().collect();
        let x = Array2::from_shape_vec((features.len(), self.input_size), flat)
            .map_err(|e| ClassifierError::TrainingFailed(e.to_string()))?;
        let y: Array1<bool> = targets.iter().map(|&t| t > 0).collect();

        let dataset = Dataset::new(x.clone(), y);
        let params = Svm::<f64, bool>::params()
            .pos_neg_weights(self.c, self.c)
            .eps(self.tolerance)
            .polynomial_kernel(1.0, self.kernel_degree as f64);

        let model = params
            .fit(&dataset)
            .map_err(|e| ClassifierError::TrainingFailed(e.to_string()))?;

        let predictions: Vec<i32> = model
            .predict(&x)
            .iter()
            .map(|&positive| if positive { 1 } else { 0 })
            .collect();
        let encoded: Vec<i32> = targets.iter().map(|&t| (t > 0) as i32).collect();
        let acc = accuracy(&encoded, &predictions);
        self.training_accuracy = Some(acc);
        log::debug!("SVM fit on {} examples, training accuracy {:.3}", features.len(), acc);

        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, input: ArrayView1<'_, f64>) -> i32 {
        match &self.model {
            Some(model) => {
                let row = input.to_owned().insert_axis(Axis(0));
                let positive = model.predict(&row)[0];
                if positive {
                    1
                } else {
                    0
                }
            }
            None => -1,
        }
    }

    /// Only the "is it the -1 sentinel" distinction matters here: position 0
    /// marks "no prediction", position 1 marks any prediction at all.
    fn output_vector(&self, class_index: i32) -> Result<Array1<f64>, ClassifierError> {
        if class_index == -1 {
            Ok(one_hot(0, SVM_OUTPUT_SIZE))
        } else {
            Ok(one_hot(1, SVM_OUTPUT_SIZE))
        }
    }

    fn copy_untrained(&self) -> Box<dyn ClassificationAlgorithm> {
        Box::new(SvmClassifier::new(
            self.input_size,
            self.kernel_degree,
            self.c,
            self.tolerance,
        ))
    }

    fn input_size(&self) -> usize {
        self.input_size
    }

    fn output_size(&self) -> usize {
        SVM_OUTPUT_SIZE
    }

    fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    fn training_accuracy(&self) -> Option<f64> {
        self.training_accuracy
    }

    fn name(&self) -> &str {
        "Support Vector Machine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::aview1;

    #[test]
    fn untrained_predict_returns_sentinel() {
        let svm = SvmClassifier::new(2, 2, 1000.0, 1e-3);
        assert!(!svm.is_trained());
        assert_eq!(svm.predict(aview1(&[0.5, 0.5])), -1);
    }

    #[test]
    fn output_size_is_forced_to_two() {
        let svm = SvmClassifier::new(7, 2, 1000.0, 1e-3);
        assert_eq!(svm.output_size(), 2);
    }

    #[test]
    fn output_vector_only_distinguishes_the_sentinel() {
        let svm = SvmClassifier::new(2, 2, 1000.0, 1e-3);
        assert_eq!(svm.output_vector(-1).unwrap().to_vec(), vec![1.0, 0.0]);
        assert_eq!(svm.output_vector(0).unwrap().to_vec(), vec![0.0, 1.0]);
        assert_eq!(svm.output_vector(1).unwrap().to_vec(), vec![0.0, 1.0]);
        // Magnitude is ignored entirely, so nothing is out of range.
        assert_eq!(svm.output_vector(99).unwrap().to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn fit_and_predict_separable_classes() {
        // Two clusters away from the origin so the polynomial kernel can
        // separate them.
        let features = vec![
            vec![1.0, 1.0],
            vec![1.2, 1.0],
            vec![1.0, 1.2],
            vec![0.8, 1.0],
            vec![3.0, 3.0],
            vec![3.2, 3.0],
            vec![3.0, 3.2],
            vec![2.8, 3.0],
        ];
        let targets = vec![0, 0, 0, 0, 1, 1, 1, 1];

        let mut svm = SvmClassifier::new(2, 2, 1000.0, 1e-3);
        svm.fit(&features, &targets).unwrap();
        assert!(svm.is_trained());

        assert_eq!(svm.predict(aview1(&[1.1, 1.0])), 0);
        assert_eq!(svm.predict(aview1(&[3.1, 3.0])), 1);
        assert!(svm.training_accuracy().unwrap() > 0.9);
    }

    #[test]
    fn fit_propagates_configuration_errors() {
        let mut svm = SvmClassifier::new(2, 2, 1000.0, 1e-3);
        assert_eq!(svm.fit(&[], &[]), Err(ClassifierError::EmptyTrainingSet));
        assert!(svm.fit(&[vec![1.0, 2.0, 3.0]], &[1]).is_err());
        assert!(!svm.is_trained());
    }
}
