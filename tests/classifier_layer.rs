use simnet_classifiers::{
    available_algorithms, build_algorithm, AlgorithmType, ClassifierCreator, TrainingDataStore,
    UNSET_WINNER,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn knn_layer_predicts_the_nearer_label() {
    init_logging();

    let mut creator = ClassifierCreator::new("Classifier 1");
    creator.input_size = 2;
    creator.output_size = 2;
    creator.algorithm = AlgorithmType::Knn { k: 2 };
    let mut layer = creator.create();

    layer.training_data_mut().add_example("a", vec![0.0, 0.0]);
    layer.training_data_mut().add_example("b", vec![1.0, 1.0]);
    layer.train().expect("training failed");

    layer.add_inputs(&[0.0, 0.0]).unwrap();
    layer.update();
    assert_eq!(layer.winning_label(), "a");
    assert_eq!(layer.winner(), 0);
    assert!(layer.inputs().iter().all(|&v| v == 0.0));

    layer.add_inputs(&[1.0, 1.0]).unwrap();
    layer.update();
    assert_eq!(layer.winning_label(), "b");
    // Class 1 lights position 0 under the historical output shift.
    assert_eq!(layer.outputs().to_vec(), vec![1.0, 0.0]);
}

#[test]
fn knn_round_trips_training_vectors_with_k1() {
    init_logging();

    let mut creator = ClassifierCreator::new("Classifier 1");
    creator.input_size = 2;
    creator.output_size = 3;
    creator.algorithm = AlgorithmType::Knn { k: 1 };
    let mut layer = creator.create();

    let examples = [
        ("left", vec![0.0, 0.0]),
        ("middle", vec![5.0, 0.0]),
        ("right", vec![10.0, 0.0]),
    ];
    for (label, features) in &examples {
        layer.training_data_mut().add_example(label, features.clone());
    }
    layer.train().unwrap();
    assert_eq!(layer.training_accuracy(), Some(1.0));

    for (expected, (label, features)) in examples.iter().enumerate() {
        layer.set_inputs(features).unwrap();
        layer.update();
        assert_eq!(layer.winner(), expected as i32);
        assert_eq!(layer.winning_label(), *label);
    }
}

#[test]
fn svm_output_vector_is_sign_like() {
    let svm = build_algorithm(2, 5, &AlgorithmType::default_svm());
    // Output size is forced to 2 no matter what was requested.
    assert_eq!(svm.output_size(), 2);
    assert_eq!(svm.output_vector(-1).unwrap().to_vec(), vec![1.0, 0.0]);
    assert_eq!(svm.output_vector(1).unwrap().to_vec(), vec![0.0, 1.0]);
    assert_eq!(svm.output_vector(42).unwrap().to_vec(), vec![0.0, 1.0]);
}

#[test]
fn svm_layer_separates_two_clusters() {
    init_logging();

    let mut creator = ClassifierCreator::new("Classifier 1");
    creator.input_size = 2;
    creator.algorithm = AlgorithmType::default_svm();
    let mut layer = creator.create();

    let mut store = TrainingDataStore::new();
    for features in [[1.0, 1.0], [1.2, 1.0], [1.0, 1.2], [0.8, 1.0]] {
        store.add_example("low", features.to_vec());
    }
    for features in [[3.0, 3.0], [3.2, 3.0], [3.0, 3.2], [2.8, 3.0]] {
        store.add_example("high", features.to_vec());
    }
    layer.replace_training_data(store);
    layer.train().unwrap();

    layer.set_inputs(&[3.1, 3.0]).unwrap();
    layer.update();
    assert_eq!(layer.winning_label(), "high");
    assert_eq!(layer.outputs().to_vec(), vec![0.0, 1.0]);

    layer.set_inputs(&[1.1, 1.0]).unwrap();
    layer.update();
    assert_eq!(layer.winning_label(), "low");
}

#[test]
fn training_data_store_maps_labels_bidirectionally() {
    let mut store = TrainingDataStore::new();
    store.add_example("cat", vec![1.0, 2.0]);
    store.add_example("dog", vec![3.0, 4.0]);
    store.add_example("cat", vec![5.0, 6.0]);
    assert_eq!(store.integer_targets(), &[0, 1, 0]);
    assert_eq!(store.label_for(0), Some("cat"));
}

#[test]
fn back_to_back_updates_do_not_crash() {
    init_logging();

    let mut creator = ClassifierCreator::new("Classifier 1");
    creator.input_size = 2;
    creator.output_size = 2;
    creator.algorithm = AlgorithmType::Knn { k: 1 };
    let mut layer = creator.create();
    layer.training_data_mut().add_example("a", vec![0.0, 0.0]);
    layer.training_data_mut().add_example("b", vec![9.0, 9.0]);
    layer.train().unwrap();

    layer.set_inputs(&[9.0, 9.0]).unwrap();
    layer.update();
    let first = layer.outputs().clone();

    // Inputs were cleared, so the second tick predicts on the zero vector.
    layer.update();
    assert_eq!(layer.winner(), 0);
    assert_eq!(layer.outputs().len(), first.len());
    assert!(layer.inputs().iter().all(|&v| v == 0.0));
}

#[test]
fn training_an_empty_store_is_a_configuration_error() {
    let mut layer = ClassifierCreator::new("Classifier 1").create();
    let err = layer.train().unwrap_err();
    assert!(err.to_string().contains("empty training set"));
}

#[test]
fn untrained_layer_ticks_harmlessly() {
    let mut layer = ClassifierCreator::new("Classifier 1").create();
    layer.update();
    assert_eq!(layer.winner(), UNSET_WINNER);
    assert_eq!(layer.winning_label(), "");
    assert!(layer.outputs().iter().all(|&v| v == 0.0));
}

#[test]
fn registry_drives_the_editor_listing() {
    let names: Vec<&str> = available_algorithms().iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["K Nearest Neighbors", "Support Vector Machine"]);
    for descriptor in available_algorithms() {
        assert_eq!(descriptor.binary_only, descriptor.defaults.is_binary());
    }
}
