use ndarray::{aview1, Array1, Array2, ArrayView1};

use crate::error::ClassifierError;
use crate::models::classifier_trait::ClassificationAlgorithm;
use crate::models::utils::{accuracy, one_hot, validate_training_set};

/// Trained k-NN state: the stored training matrix and its targets.
#[derive(Debug, Clone)]
struct KnnModel {
    train: Array2<f64>,
    targets: Vec<i32>,
}

/// K-nearest-neighbors classifier: brute-force Euclidean vote over the
/// stored training set.
///
/// Output encoding carries a historical off-by-one: class index `n` lights
/// output position `n - 1`. Callers relying on the output vector must
/// account for that shift; the winning-label path is unaffected.
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    input_size: usize,
    output_size: usize,
    k: usize,
    model: Option<KnnModel>,
    training_accuracy: Option<f64>,
}

impl KnnClassifier {
    pub fn new(input_size: usize, output_size: usize, k: usize) -> Self {
        Self {
            input_size,
            output_size,
            k,
            model: None,
            training_accuracy: None,
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Majority vote among the `k` nearest training rows. Neighbors are
    /// visited in ascending-distance order and vote-count ties go to the
    /// class that reached the count first, so `k = 1` always reproduces the
    /// nearest neighbor's target.
    fn vote(&self, model: &KnnModel, input: ArrayView1<'_, f64>) -> i32 {
        // Squared distances order the same as Euclidean ones.
        let mut distances: Vec<(usize, f64)> = model
            .train
            .rows()
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let d = row
                    .iter()
                    .zip(input.iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f64>();
                (i, d)
            })
            .collect();
        distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let k = self.k.min(distances.len()).max(1);
        let mut counts: std::collections::HashMap<i32, usize> = std::collections::HashMap::new();
        let mut winner = model.targets[distances[0].0];
        let mut best_count = 0;
        for &(row, _) in distances.iter().take(k) {
            let class = model.targets[row];
            let count = counts.entry(class).or_insert(0);
            *count += 1;
            if *count > best_count {
                best_count = *count;
                winner = class;
            }
        }
        winner
    }
}

impl ClassificationAlgorithm for KnnClassifier {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[i32]) -> Result<(), ClassifierError> {
        validate_training_set(features, targets, self.input_size)?;

        let flat: Vec<f64> = features.iter().flatten().copied().collect();
        let train = Array2::from_shape_vec((features.len(), self.input_size), flat)
            .map_err(|e| ClassifierError::TrainingFailed(e.to_string()))?;
        self.model = Some(KnnModel {
            train,
            targets: targets.to_vec(),
        });

        let predictions: Vec<i32> = features.iter().map(|row| self.predict(aview1(row))).collect();
        let acc = accuracy(targets, &predictions);
        self.training_accuracy = Some(acc);
        log::debug!("KNN fit on {} examples, training accuracy {:.3}", features.len(), acc);
        Ok(())
    }

    fn predict(&self, input: ArrayView1<'_, f64>) -> i32 {
        match &self.model {
            Some(model) => self.vote(model, input),
            None => -1,
        }
    }

    fn output_vector(&self, class_index: i32) -> Result<Array1<f64>, ClassifierError> {
        if class_index > self.output_size as i32 {
            return Err(ClassifierError::OutputIndexOutOfRange {
                index: class_index,
                output_size: self.output_size,
            });
        }
        if class_index == -1 {
            // Reserved "no prediction" position.
            return Ok(one_hot(0, self.output_size));
        }
        let position = class_index - 1;
        if position < 0 {
            return Err(ClassifierError::OutputIndexOutOfRange {
                index: class_index,
                output_size: self.output_size,
            });
        }
        Ok(one_hot(position as usize, self.output_size))
    }

    fn copy_untrained(&self) -> Box<dyn ClassificationAlgorithm> {
        Box::new(KnnClassifier::new(self.input_size, self.output_size, self.k))
    }

    fn input_size(&self) -> usize {
        self.input_size
    }

    fn output_size(&self) -> usize {
        self.output_size
    }

    fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    fn training_accuracy(&self) -> Option<f64> {
        self.training_accuracy
    }

    fn name(&self) -> &str {
        "K Nearest Neighbors"
    }
}
