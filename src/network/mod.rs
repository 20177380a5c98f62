pub mod network;
pub mod spec;

pub use network::{NeuralNetwork, ExampleOutcome};
pub use spec::NetworkSpec;
