pub mod error;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use activation::sigmoid;
pub use layers::{Layer, Neuron, InputLayer, HiddenLayer, OutputLayer};
pub use network::{NeuralNetwork, NetworkSpec, ExampleOutcome};
pub use loss::MseLoss;
pub use train::{train_loop, TrainConfig, EpochStats, TrainingReport, DEFAULT_THRESHOLD};
