//! Training-data accumulation for classifier layers.
//!
//! A `TrainingDataStore` is a pure accumulator: parallel feature/target
//! sequences plus a bidirectional label↔index dictionary. It holds no
//! algorithm logic; a data-import collaborator fills it before `train()`
//! runs, and it stays untouched during prediction.
use std::collections::HashMap;

/// Accumulated training examples with integer-encoded class targets.
///
/// Integer indices are allocated densely from 0 in first-seen label order,
/// so `targets` is always directly usable as a class-index array. No two
/// labels share an index and no two indices share a label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingDataStore {
    feature_vectors: Vec<Vec<f64>>,
    targets: Vec<i32>,
    label_to_index: HashMap<String, i32>,
    index_to_label: HashMap<i32, String>,
}

impl TrainingDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one (label, features) example, resolving or allocating the
    /// label's integer index.
    pub fn add_example(&mut self, label: &str, features: Vec<f64>) {
        let index = match self.label_to_index.get(label) {
            Some(&idx) => idx,
            None => {
                let idx = self.label_to_index.len() as i32;
                self.label_to_index.insert(label.to_string(), idx);
                self.index_to_label.insert(idx, label.to_string());
                idx
            }
        };
        self.feature_vectors.push(features);
        self.targets.push(index);
    }

    /// Target sequence, already integer-encoded.
    pub fn integer_targets(&self) -> &[i32] {
        &self.targets
    }

    pub fn feature_vectors(&self) -> &[Vec<f64>] {
        &self.feature_vectors
    }

    /// Inverse lookup used to render a human-readable prediction.
    pub fn label_for(&self, index: i32) -> Option<&str> {
        self.index_to_label.get(&index).map(String::as_str)
    }

    pub fn index_for(&self, label: &str) -> Option<i32> {
        self.label_to_index.get(label).copied()
    }

    /// Number of stored examples.
    pub fn len(&self) -> usize {
        self.feature_vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feature_vectors.is_empty()
    }

    /// Number of distinct labels seen so far.
    pub fn class_count(&self) -> usize {
        self.label_to_index.len()
    }

    /// Drop all examples and label mappings.
    pub fn clear(&mut self) {
        self.feature_vectors.clear();
        self.targets.clear();
        self.label_to_index.clear();
        self.index_to_label.clear();
    }
}
