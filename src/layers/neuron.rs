use rand::Rng;
use serde::Serialize;

/// One unit of a hidden or output layer: a bias plus one weight per incoming
/// connection. The weight count is fixed for the neuron's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neuron {
    pub bias: f64,
    pub weights: Vec<f64>,
}

impl Neuron {
    /// A neuron with `input_size` weights, bias and weights drawn from [-1, 1).
    pub fn new(input_size: usize) -> Neuron {
        Neuron::with_rng(input_size, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(input_size: usize, rng: &mut R) -> Neuron {
        let bias = rng.gen_range(-1.0..1.0);
        let weights = (0..input_size).map(|_| rng.gen_range(-1.0..1.0)).collect();
        Neuron { bias, weights }
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }
}
