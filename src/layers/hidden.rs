use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::activation::sigmoid;
use crate::error::{ensure_len, Result};
use crate::layers::layer::{fmt_neuron, Layer};
use crate::layers::neuron::Neuron;

/// A fully connected sigmoid layer fed by the previous layer in the chain.
///
/// The layer does not hold its upstream neighbour; the network passes it in
/// for every forward and backward step.
#[derive(Debug, Clone, Serialize)]
pub struct HiddenLayer {
    pub(crate) neurons: Vec<Neuron>,
    pub(crate) outputs: Vec<f64>,
    input_size: usize,
    learning_rate: f64,
}

impl HiddenLayer {
    pub fn new(size: usize, input_size: usize, learning_rate: f64) -> HiddenLayer {
        HiddenLayer::with_rng(size, input_size, learning_rate, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> HiddenLayer {
        let neurons = (0..size).map(|_| Neuron::with_rng(input_size, rng)).collect();
        HiddenLayer {
            neurons,
            outputs: vec![0.0; size],
            input_size,
            learning_rate,
        }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Replaces every neuron with caller-supplied parameters.
    ///
    /// The neuron count and each weight vector must match the layer's shape;
    /// on mismatch the layer is left unchanged.
    pub fn set_neurons(&mut self, neurons: Vec<Neuron>) -> Result<()> {
        ensure_len("neuron count", self.neurons.len(), neurons.len())?;
        for neuron in &neurons {
            ensure_len("neuron weights", self.input_size, neuron.weights.len())?;
        }
        self.neurons = neurons;
        Ok(())
    }

    /// `outputs[i] = sigmoid(prev · weights[i] + bias[i])`.
    ///
    /// `prev` must already hold its activations for the current example.
    pub fn compute_activations(&mut self, prev: &dyn Layer) -> Result<()> {
        ensure_len("upstream layer", self.input_size, prev.width())?;
        for (output, neuron) in self.outputs.iter_mut().zip(&self.neurons) {
            *output = sigmoid(prev.weighted_sum(&neuron.weights)? + neuron.bias);
        }
        Ok(())
    }

    /// Applies this layer's error signal and returns the error for `prev`.
    ///
    /// The upstream error is computed from the weights as they were before
    /// this step; only then are the incoming weights and biases updated.
    /// Biases are overwritten with `rate * error`, weights accumulate.
    pub fn back_propagate(&mut self, prev: &dyn Layer, errors: &[f64]) -> Result<Vec<f64>> {
        ensure_len("upstream layer", self.input_size, prev.width())?;
        ensure_len("layer errors", self.neurons.len(), errors.len())?;
        let prev_errors = prev.backward_error(&self.neurons, errors)?;
        prev.apply_weight_deltas(&mut self.neurons, self.learning_rate, errors)?;
        self.update_biases(errors);
        Ok(prev_errors)
    }

    fn update_biases(&mut self, errors: &[f64]) {
        for (neuron, error) in self.neurons.iter_mut().zip(errors) {
            neuron.bias = self.learning_rate * error;
        }
    }

    pub(crate) fn fmt_neurons<F>(&self, f: &mut fmt::Formatter<'_>, label: F) -> fmt::Result
    where
        F: Fn(usize) -> String,
    {
        for (i, (neuron, output)) in self.neurons.iter().zip(&self.outputs).enumerate() {
            writeln!(f)?;
            fmt_neuron(f, &label(i), neuron, *output)?;
        }
        Ok(())
    }
}

impl Layer for HiddenLayer {
    fn outputs(&self) -> &[f64] {
        &self.outputs
    }
}

impl fmt::Display for HiddenLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HIDDEN LAYER, {} inputs", self.input_size)?;
        self.fmt_neurons(f, |i| format!("Neuron {i}"))
    }
}
