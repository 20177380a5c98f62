pub mod layer;
pub mod neuron;
pub mod input;
pub mod hidden;
pub mod output;

pub use layer::Layer;
pub use neuron::Neuron;
pub use input::InputLayer;
pub use hidden::HiddenLayer;
pub use output::{OutputLayer, OutputUpdate};
