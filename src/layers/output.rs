use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::activation::sigmoid_derivative;
use crate::error::{NetworkError, Result};
use crate::layers::hidden::HiddenLayer;
use crate::layers::layer::Layer;
use crate::layers::neuron::Neuron;
use crate::loss::MseLoss;

/// Result of one output-layer training step.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputUpdate {
    /// Error signal for the layer feeding the output layer.
    pub prev_errors: Vec<f64>,
    /// Whether the correct class's output reached the threshold.
    pub reached_threshold: bool,
    /// Mean squared error against the one-hot target, before the update.
    pub loss: f64,
}

/// Last layer of the chain: a sigmoid layer with one neuron per class label.
#[derive(Debug, Clone, Serialize)]
pub struct OutputLayer {
    pub(crate) dense: HiddenLayer,
    names: Vec<String>,
}

impl OutputLayer {
    /// Builds one neuron per entry of `names`, in that order.
    pub fn new(names: Vec<String>, input_size: usize, learning_rate: f64) -> OutputLayer {
        OutputLayer::with_rng(names, input_size, learning_rate, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        names: Vec<String>,
        input_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> OutputLayer {
        let dense = HiddenLayer::with_rng(names.len(), input_size, learning_rate, rng);
        OutputLayer { dense, names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn dense(&self) -> &HiddenLayer {
        &self.dense
    }

    /// Position of `label` among the class names.
    pub fn correct_index(&self, label: &str) -> Option<usize> {
        self.names.iter().position(|name| name == label)
    }

    /// Index of the largest output, first occurrence winning ties.
    ///
    /// `None` when no output exceeds zero.
    pub fn best_index(&self) -> Option<usize> {
        let mut best = None;
        let mut max = 0.0;
        for (i, &output) in self.dense.outputs.iter().enumerate() {
            if output > max {
                max = output;
                best = Some(i);
            }
        }
        best
    }

    /// Label of the best output, or `None` for a degenerate output vector.
    pub fn predicted_label(&self) -> Option<&str> {
        self.best_index().map(|i| self.names[i].as_str())
    }

    /// One-hot vector with a 1 at `correct_index`.
    pub fn target(&self, correct_index: usize) -> Vec<f64> {
        (0..self.names.len())
            .map(|i| if i == correct_index { 1.0 } else { 0.0 })
            .collect()
    }

    /// Replaces the output neurons, one per class in `names()` order.
    pub fn set_neurons(&mut self, neurons: Vec<Neuron>) -> Result<()> {
        self.dense.set_neurons(neurons)
    }

    pub fn compute_activations(&mut self, prev: &dyn Layer) -> Result<()> {
        self.dense.compute_activations(prev)
    }

    /// Runs one backpropagation step for the example whose class sits at
    /// `correct_index`, using the activations of the last forward pass.
    pub fn train_one_example(
        &mut self,
        prev: &dyn Layer,
        correct_index: usize,
        threshold: f64,
    ) -> Result<OutputUpdate> {
        if correct_index >= self.names.len() {
            return Err(NetworkError::IndexOutOfRange {
                what: "class",
                index: correct_index,
                len: self.names.len(),
            });
        }
        let target = self.target(correct_index);
        let outputs = &self.dense.outputs;

        // δ_i = o_i (1 - o_i) (t_i - o_i)
        let errors: Vec<f64> = outputs
            .iter()
            .zip(&target)
            .map(|(&output, &t)| sigmoid_derivative(output) * (t - output))
            .collect();
        let reached_threshold = outputs[correct_index] >= threshold;
        let loss = MseLoss::loss(outputs, &target);

        let prev_errors = self.dense.back_propagate(prev, &errors)?;
        Ok(OutputUpdate { prev_errors, reached_threshold, loss })
    }
}

impl Layer for OutputLayer {
    fn outputs(&self) -> &[f64] {
        &self.dense.outputs
    }
}

impl fmt::Display for OutputLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OUTPUT LAYER, {} inputs", self.dense.input_size())?;
        self.dense
            .fmt_neurons(f, |i| format!("Neuron: {} {i}", self.names[i]))
    }
}
