use std::sync::OnceLock;

use crate::config::AlgorithmType;
use crate::models::classifier_trait::ClassificationAlgorithm;
use crate::models::knn::KnnClassifier;
use crate::models::svm::SvmClassifier;

/// One registry entry: enough for an editor to list the algorithm, decide
/// whether to expose an output-count field, and seed its parameter form.
#[derive(Debug, Clone)]
pub struct AlgorithmDescriptor {
    pub name: &'static str,
    /// True when the algorithm ignores a requested output count.
    pub binary_only: bool,
    pub defaults: AlgorithmType,
}

static REGISTRY: OnceLock<Vec<AlgorithmDescriptor>> = OnceLock::new();

/// Process-wide list of available algorithm types, populated once on first
/// query.
pub fn available_algorithms() -> &'static [AlgorithmDescriptor] {
    REGISTRY.get_or_init(|| {
        vec![
            AlgorithmDescriptor {
                name: "K Nearest Neighbors",
                binary_only: false,
                defaults: AlgorithmType::default_knn(),
            },
            AlgorithmDescriptor {
                name: "Support Vector Machine",
                binary_only: true,
                defaults: AlgorithmType::default_svm(),
            },
        ]
    })
}

/// Build a boxed algorithm from a tagged parameter record. Each variant
/// receives only the parameters it declares; the SVM ignores the requested
/// output size because it is inherently binary.
pub fn build_algorithm(
    input_size: usize,
    output_size: usize,
    algorithm: &AlgorithmType,
) -> Box<dyn ClassificationAlgorithm> {
    match algorithm {
        AlgorithmType::Knn { k } => Box::new(KnnClassifier::new(input_size, output_size, *k)),
        AlgorithmType::Svm {
            kernel_degree,
            c,
            tolerance,
        } => Box::new(SvmClassifier::new(
            input_size,
            *kernel_degree,
            *c,
            *tolerance,
        )),
    }
}
