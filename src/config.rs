use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for a classifier layer: fixed sizes plus the
/// selected algorithm and its hyperparameters. This is the named-parameter
/// record the external editor reads and writes.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ClassifierConfig {
    pub input_size: usize,
    pub output_size: usize,

    #[serde(flatten)]
    pub algorithm: AlgorithmType,
}

/// Supported algorithm types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum AlgorithmType {
    Knn {
        /// Neighbor count used by the majority vote.
        k: usize,
    },
    Svm {
        /// Polynomial kernel degree.
        kernel_degree: u32,
        /// Soft margin penalty parameter.
        c: f64,
        /// Tolerance of the convergence test.
        tolerance: f64,
    },
}

impl AlgorithmType {
    /// Defaults matching the historical KNN configuration.
    pub fn default_knn() -> Self {
        AlgorithmType::Knn { k: 2 }
    }

    /// Defaults matching the historical SVM configuration.
    pub fn default_svm() -> Self {
        AlgorithmType::Svm {
            kernel_degree: 2,
            c: 1000.0,
            tolerance: 1e-3,
        }
    }

    /// True for algorithms that can only produce two output classes,
    /// in which case a requested output count is ignored.
    pub fn is_binary(&self) -> bool {
        matches!(self, AlgorithmType::Svm { .. })
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AlgorithmType::Knn { .. } => "K Nearest Neighbors",
            AlgorithmType::Svm { .. } => "Support Vector Machine",
        }
    }
}

impl Default for AlgorithmType {
    fn default() -> Self {
        AlgorithmType::default_svm()
    }
}

impl FromStr for AlgorithmType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "knn" => Ok(AlgorithmType::default_knn()),
            "svm" => Ok(AlgorithmType::default_svm()),
            _ => Err(format!(
                "Unknown algorithm type: {}. Valid options are: knn, svm",
                s
            )),
        }
    }
}

impl ClassifierConfig {
    pub fn new(input_size: usize, output_size: usize, algorithm: AlgorithmType) -> Self {
        Self {
            input_size,
            output_size,
            algorithm,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            input_size: 4,
            output_size: 2,
            algorithm: AlgorithmType::default(),
        }
    }
}
