//! The network-facing classifier layer.
//!
//! A `ClassifierLayer` owns one classification algorithm and one training
//! data store. Upstream connections accumulate into its input buffer between
//! ticks; the scheduler calls [`ClassifierLayer::update`] exactly once per
//! tick, which caches the prediction as a one-hot output vector and clears
//! the inputs. A tick must never abort: every anomaly inside `update`
//! degrades to a zero/no-prediction output.
use std::fmt;

use ndarray::Array1;

use crate::data::TrainingDataStore;
use crate::error::ClassifierError;
use crate::models::classifier_trait::ClassificationAlgorithm;

/// Winner value before any prediction has been made. Distinct from the `-1`
/// "no prediction" sentinel an untrained model returns.
pub const UNSET_WINNER: i32 = i32::MIN;

/// Observers are invoked synchronously but fire-and-forget: results are
/// logged and dropped, never propagated into the tick.
type Observer = Box<dyn FnMut() -> anyhow::Result<()>>;

pub struct ClassifierLayer {
    label: String,
    classifier: Box<dyn ClassificationAlgorithm>,
    training_data: TrainingDataStore,
    inputs: Array1<f64>,
    outputs: Array1<f64>,
    winner: i32,
    observers: Vec<Observer>,
}

impl ClassifierLayer {
    pub fn new(label: String, classifier: Box<dyn ClassificationAlgorithm>) -> Self {
        let inputs = Array1::zeros(classifier.input_size());
        let outputs = Array1::zeros(classifier.output_size());
        Self {
            label,
            classifier,
            training_data: TrainingDataStore::new(),
            inputs,
            outputs,
            winner: UNSET_WINNER,
            observers: Vec::new(),
        }
    }

    /// Train the classifier using the current training data. Configuration
    /// errors (empty store, bad vector lengths) propagate to the caller;
    /// observers are only notified after a successful fit.
    pub fn train(&mut self) -> Result<(), ClassifierError> {
        self.classifier.fit(
            self.training_data.feature_vectors(),
            self.training_data.integer_targets(),
        )?;
        self.notify_observers();
        Ok(())
    }

    /// Apply the classifier to the accumulated inputs and cache the result
    /// as the output vector. Called exactly once per tick by the scheduler;
    /// never fails and never panics.
    pub fn update(&mut self) {
        if self.classifier.is_trained() {
            self.winner = self.classifier.predict(self.inputs.view());
            self.outputs = match self.classifier.output_vector(self.winner) {
                Ok(vector) => vector,
                Err(e) => {
                    log::error!("{}", e);
                    Array1::zeros(self.classifier.output_size())
                }
            };
        }
        self.notify_observers();
        self.inputs.fill(0.0);
    }

    /// Accumulate an upstream contribution into the input buffer. Writers
    /// must run before `update()` each tick; nothing is buffered across
    /// ticks.
    pub fn add_inputs(&mut self, values: &[f64]) -> Result<(), ClassifierError> {
        if values.len() != self.inputs.len() {
            return Err(ClassifierError::FeatureLengthMismatch {
                row: 0,
                expected: self.inputs.len(),
                found: values.len(),
            });
        }
        for (slot, value) in self.inputs.iter_mut().zip(values) {
            *slot += value;
        }
        Ok(())
    }

    /// Overwrite the input buffer.
    pub fn set_inputs(&mut self, values: &[f64]) -> Result<(), ClassifierError> {
        if values.len() != self.inputs.len() {
            return Err(ClassifierError::FeatureLengthMismatch {
                row: 0,
                expected: self.inputs.len(),
                found: values.len(),
            });
        }
        self.inputs.assign(&Array1::from(values.to_vec()));
        Ok(())
    }

    /// Register an observer notified after every `update()` and successful
    /// `train()`.
    pub fn observe(&mut self, observer: impl FnMut() -> anyhow::Result<()> + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify_observers(&mut self) {
        for observer in &mut self.observers {
            if let Err(e) = observer() {
                log::warn!("Observer of '{}' failed: {:#}", self.label, e);
            }
        }
    }

    /// Label associated with the winning target integer; empty when the
    /// winner has no mapping (including before the first prediction).
    pub fn winning_label(&self) -> String {
        self.training_data
            .label_for(self.winner)
            .unwrap_or("")
            .to_string()
    }

    pub fn winner(&self) -> i32 {
        self.winner
    }

    pub fn outputs(&self) -> &Array1<f64> {
        &self.outputs
    }

    pub fn inputs(&self) -> &Array1<f64> {
        &self.inputs
    }

    pub fn output_size(&self) -> usize {
        self.classifier.output_size()
    }

    pub fn input_size(&self) -> usize {
        self.classifier.input_size()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn classifier(&self) -> &dyn ClassificationAlgorithm {
        self.classifier.as_ref()
    }

    pub fn training_accuracy(&self) -> Option<f64> {
        self.classifier.training_accuracy()
    }

    pub fn training_data(&self) -> &TrainingDataStore {
        &self.training_data
    }

    pub fn training_data_mut(&mut self) -> &mut TrainingDataStore {
        &mut self.training_data
    }

    /// Swap in a new training set wholesale between training runs.
    pub fn replace_training_data(&mut self, data: TrainingDataStore) {
        self.training_data = data;
    }

    /// A copy with identical hyperparameters and training data but an
    /// untrained model, fresh buffers, and no observers.
    pub fn duplicate(&self, label: String) -> ClassifierLayer {
        let mut copy = ClassifierLayer::new(label, self.classifier.copy_untrained());
        copy.training_data = self.training_data.clone();
        copy
    }
}

impl fmt::Display for ClassifierLayer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} -> {}",
            self.label,
            self.classifier.name(),
            self.input_size(),
            self.output_size()
        )
    }
}
