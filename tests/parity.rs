use rand::{rngs::StdRng, SeedableRng};
use sigmoid_mlp::{NetworkError, NeuralNetwork, NetworkSpec, TrainConfig};

fn parity_rows() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 0.0, 1.0],
        vec![0.0, 0.0, 0.0],
        vec![1.0, 1.0, 1.0],
        vec![0.0, 0.0, 0.0],
        vec![1.0, 1.0, 0.0],
        vec![1.0, 1.0, 1.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ]
}

const PARITY_LABELS: [&str; 8] = ["1", "0", "1", "1", "1", "0", "1", "0"];

fn sample_network(seed: u64) -> NeuralNetwork {
    let spec = NetworkSpec::new(3, vec![4], 0.05);
    NeuralNetwork::with_rng(&spec, &PARITY_LABELS, &mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn sample_run_rejects_four_feature_rows() {
    let mut network = sample_network(2024);
    assert_eq!(network.labels(), &["0", "1"]);

    let report = network.train(&parity_rows(), &PARITY_LABELS, &TrainConfig::new(10)).unwrap();
    assert!(report.epochs >= 1 && report.epochs <= 9);
    assert!((0.0..=1.0).contains(&report.success_ratio));

    let err = network.classify(&[5.7, 3.8, 1.7, 0.3]).unwrap_err();
    assert!(matches!(
        err,
        NetworkError::ShapeMismatch { expected: 3, actual: 4, .. }
    ));

    // The network is still usable on correctly shaped rows.
    let label = network.classify(&[1.0, 0.0, 1.0]).unwrap();
    assert!(label == "0" || label == "1");
}

#[test]
fn batch_classification_of_training_rows() {
    let mut network = sample_network(7);
    network.train(&parity_rows(), &PARITY_LABELS, &TrainConfig::new(10)).unwrap();

    let predictions = network.classify_batch(&parity_rows()).unwrap();
    assert_eq!(predictions.len(), 8);
    assert!(predictions.iter().all(|p| p == "0" || p == "1"));
}

#[test]
fn isolated_example_is_learned_by_repetition() {
    let spec = NetworkSpec::new(3, vec![4], 0.5);
    let mut network = NeuralNetwork::with_rng(&spec, &PARITY_LABELS, &mut StdRng::seed_from_u64(99)).unwrap();

    let rows = vec![vec![1.0, 0.0, 1.0]];
    let labels = ["1"];
    network.train(&rows, &labels, &TrainConfig::new(5_000)).unwrap();

    assert_eq!(network.classify(&[1.0, 0.0, 1.0]).unwrap(), "1");
}

#[test]
fn unknown_training_label_is_an_error() {
    let mut network = sample_network(1);
    let err = network
        .train(&[vec![1.0, 1.0, 1.0]], &["maybe"], &TrainConfig::new(10))
        .unwrap_err();
    assert!(matches!(err, NetworkError::UnknownLabel(ref label) if label == "maybe"));
}

#[test]
fn dump_is_deterministic_for_a_seed() {
    let mut a = sample_network(5);
    let mut b = sample_network(5);
    a.feed_forward(&[0.0, 1.0, 0.0]).unwrap();
    b.feed_forward(&[0.0, 1.0, 0.0]).unwrap();
    assert_eq!(a.to_string(), b.to_string());
    assert!(a.to_string().contains("HIDDEN LAYER, 3 inputs"));
}
