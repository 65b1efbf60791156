//! simnet-classifiers: pluggable classification layers for a simulated network.
//!
//! A `ClassifierLayer` lets a network node delegate its input→output mapping
//! to an interchangeable statistical classifier (k-nearest-neighbors, support
//! vector machine), train that classifier from accumulated example data, and
//! expose the prediction as a one-hot output vector read by the rest of the
//! simulation once per tick.
//!
//! The design favors small, testable modules: training data lives in a plain
//! accumulator, algorithms implement one trait, and a tagged-variant factory
//! replaces reflective construction so new algorithms register in one place.
pub mod config;
pub mod creator;
pub mod data;
pub mod error;
pub mod layer;
pub mod models;

pub use config::{AlgorithmType, ClassifierConfig};
pub use creator::ClassifierCreator;
pub use data::TrainingDataStore;
pub use error::ClassifierError;
pub use layer::{ClassifierLayer, UNSET_WINNER};
pub use models::classifier_trait::ClassificationAlgorithm;
pub use models::factory::{available_algorithms, build_algorithm, AlgorithmDescriptor};
