//! Transient builder used by the editor to configure and create one
//! classifier layer.
use crate::config::{AlgorithmType, ClassifierConfig};
use crate::layer::ClassifierLayer;
use crate::models::factory::build_algorithm;

/// Holds a proposed label, sizes, and the chosen algorithm's parameters
/// while the user edits them; `create` produces exactly one layer. Not
/// persisted.
#[derive(Debug, Clone)]
pub struct ClassifierCreator {
    /// Proposed display label, assigned by the owning context's identifier
    /// allocator.
    pub label: String,
    pub input_size: usize,
    pub output_size: usize,
    pub algorithm: AlgorithmType,
}

impl ClassifierCreator {
    pub fn new(proposed_label: &str) -> Self {
        Self {
            label: proposed_label.to_string(),
            input_size: 4,
            output_size: 2,
            algorithm: AlgorithmType::default(),
        }
    }

    pub fn from_config(proposed_label: &str, config: ClassifierConfig) -> Self {
        Self {
            label: proposed_label.to_string(),
            input_size: config.input_size,
            output_size: config.output_size,
            algorithm: config.algorithm,
        }
    }

    /// Enablement predicate for the editor's "number of outputs" field:
    /// binary algorithms ignore it, so it should be suppressed.
    pub fn uses_output_count(&self) -> bool {
        !self.algorithm.is_binary()
    }

    /// Build the configured layer around a freshly constructed, untrained
    /// algorithm and an empty training data store.
    pub fn create(self) -> ClassifierLayer {
        let algorithm = build_algorithm(self.input_size, self.output_size, &self.algorithm);
        ClassifierLayer::new(self.label, algorithm)
    }
}
