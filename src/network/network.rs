use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::trace;

use crate::error::{NetworkError, Result};
use crate::layers::{HiddenLayer, InputLayer, Layer, Neuron, OutputLayer};
use crate::network::spec::NetworkSpec;
use crate::train::{train_loop, TrainConfig, TrainingReport};

/// What a single training step reports back to the epoch loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExampleOutcome {
    /// The best output matched the expected class on the forward pass.
    pub hit: bool,
    /// The expected class's output was at or above the threshold.
    pub reached_threshold: bool,
    /// Mean squared error against the one-hot target.
    pub loss: f64,
}

/// Input layer, an ordered chain of hidden layers and an output layer.
///
/// The network owns every layer. Each layer's upstream neighbour is simply
/// the one before it in the chain and is lent to it per step.
#[derive(Debug, Clone, Serialize)]
pub struct NeuralNetwork {
    input: InputLayer,
    hidden: Vec<HiddenLayer>,
    output: OutputLayer,
}

impl NeuralNetwork {
    /// Builds a network with one output neuron per distinct training label.
    ///
    /// Labels are deduplicated and sorted, so output positions are stable
    /// from run to run.
    pub fn new<S: AsRef<str>>(spec: &NetworkSpec, training_labels: &[S]) -> Result<NeuralNetwork> {
        NeuralNetwork::with_rng(spec, training_labels, &mut rand::thread_rng())
    }

    pub fn with_rng<S, R>(spec: &NetworkSpec, training_labels: &[S], rng: &mut R) -> Result<NeuralNetwork>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        spec.validate()?;
        let names: Vec<String> = training_labels
            .iter()
            .map(|label| label.as_ref())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_owned)
            .collect();
        if names.is_empty() {
            return Err(NetworkError::NoLabels);
        }

        let input = InputLayer::new(spec.input_width);
        let mut hidden = Vec::with_capacity(spec.hidden_widths.len());
        let mut input_size = spec.input_width;
        for &width in &spec.hidden_widths {
            hidden.push(HiddenLayer::with_rng(width, input_size, spec.learning_rate, rng));
            input_size = width;
        }
        let output = OutputLayer::with_rng(names, input_size, spec.learning_rate, rng);

        trace!(
            input_width = spec.input_width,
            hidden = ?spec.hidden_widths,
            outputs = output.width(),
            "network constructed"
        );
        Ok(NeuralNetwork { input, hidden, output })
    }

    pub fn input_width(&self) -> usize {
        self.input.width()
    }

    pub fn hidden_widths(&self) -> Vec<usize> {
        self.hidden.iter().map(|layer| layer.width()).collect()
    }

    /// Class names in output-neuron order.
    pub fn labels(&self) -> &[String] {
        self.output.names()
    }

    /// Output activations from the most recent forward pass.
    pub fn outputs(&self) -> &[f64] {
        self.output.outputs()
    }

    pub fn input_layer(&self) -> &InputLayer {
        &self.input
    }

    pub fn hidden_layers(&self) -> &[HiddenLayer] {
        &self.hidden
    }

    pub fn output_layer(&self) -> &OutputLayer {
        &self.output
    }

    /// Overwrites the neurons of hidden layer `layer`, counted from the input side.
    pub fn set_hidden_neurons(&mut self, layer: usize, neurons: Vec<Neuron>) -> Result<()> {
        let len = self.hidden.len();
        self.hidden
            .get_mut(layer)
            .ok_or(NetworkError::IndexOutOfRange { what: "hidden layer", index: layer, len })?
            .set_neurons(neurons)
    }

    /// Overwrites the output neurons, one per entry of [`labels`](Self::labels).
    pub fn set_output_neurons(&mut self, neurons: Vec<Neuron>) -> Result<()> {
        self.output.set_neurons(neurons)
    }

    /// Loads `inputs` and recomputes every layer in chain order.
    pub fn feed_forward(&mut self, inputs: &[f64]) -> Result<&[f64]> {
        self.input.set_inputs(inputs)?;
        for k in 0..self.hidden.len() {
            let (below, rest) = self.hidden.split_at_mut(k);
            rest[0].compute_activations(upstream(&self.input, below))?;
        }
        self.output.compute_activations(upstream(&self.input, &self.hidden))?;
        Ok(self.output.outputs())
    }

    /// Forward pass plus one backpropagation step for a single example.
    ///
    /// The label is resolved before anything runs, so an unknown label
    /// leaves the weights untouched.
    pub fn train_one_example(&mut self, inputs: &[f64], label: &str, threshold: f64) -> Result<ExampleOutcome> {
        let correct = self
            .output
            .correct_index(label)
            .ok_or_else(|| NetworkError::UnknownLabel(label.to_owned()))?;
        self.feed_forward(inputs)?;

        let update = self
            .output
            .train_one_example(upstream(&self.input, &self.hidden), correct, threshold)?;
        propagate_hidden(&mut self.input, &mut self.hidden, update.prev_errors)?;

        Ok(ExampleOutcome {
            hit: self.output.best_index() == Some(correct),
            reached_threshold: update.reached_threshold,
            loss: update.loss,
        })
    }

    /// Runs the epoch loop; see [`train_loop`].
    pub fn train<S: AsRef<str>>(
        &mut self,
        inputs: &[Vec<f64>],
        labels: &[S],
        config: &TrainConfig,
    ) -> Result<TrainingReport> {
        train_loop(self, inputs, labels, config)
    }

    /// Predicted label for one feature vector.
    pub fn classify(&mut self, inputs: &[f64]) -> Result<String> {
        self.feed_forward(inputs)?;
        self.output
            .predicted_label()
            .map(str::to_owned)
            .ok_or(NetworkError::DegenerateOutput)
    }

    /// Classifies every row in order, stopping at the first failure.
    pub fn classify_batch(&mut self, rows: &[Vec<f64>]) -> Result<Vec<String>> {
        rows.iter().map(|row| self.classify(row)).collect()
    }

    /// Pretty JSON of the current in-memory state, for diagnostics only.
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The layer feeding the next one up, given everything below it.
fn upstream<'a>(input: &'a InputLayer, below: &'a [HiddenLayer]) -> &'a dyn Layer {
    match below.last() {
        Some(layer) => layer,
        None => input,
    }
}

/// Walks the hidden chain top-down, each layer handing its upstream error to
/// the layer beneath it, until the input layer ends the walk.
fn propagate_hidden(
    input: &mut InputLayer,
    hidden: &mut [HiddenLayer],
    errors: Vec<f64>,
) -> Result<()> {
    match hidden.split_last_mut() {
        Some((layer, below)) => {
            let prev_errors = layer.back_propagate(upstream(input, below), &errors)?;
            propagate_hidden(input, below, prev_errors)
        }
        None => {
            input.back_propagate(&errors);
            Ok(())
        }
    }
}

impl fmt::Display for NeuralNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.input)?;
        for layer in &self.hidden {
            writeln!(f)?;
            writeln!(f, "{layer}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.output)
    }
}
