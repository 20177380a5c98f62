use std::fmt;

use crate::activation::sigmoid_derivative;
use crate::error::{ensure_len, Result};
use crate::layers::neuron::Neuron;

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::layers::input::InputLayer {}
    impl Sealed for crate::layers::hidden::HiddenLayer {}
    impl Sealed for crate::layers::output::OutputLayer {}
}

/// Read-side capability shared by every layer in the chain.
///
/// A layer exposes its current activations; the provided methods are the math
/// the *next* layer needs from its upstream neighbour during the forward and
/// backward passes. The trait is sealed: the chain is always input, hidden
/// layers, output.
pub trait Layer: sealed::Sealed {
    /// Current activation of every unit in this layer.
    fn outputs(&self) -> &[f64];

    fn width(&self) -> usize {
        self.outputs().len()
    }

    /// Dot product of this layer's outputs with one downstream neuron's weights.
    fn weighted_sum(&self, weights: &[f64]) -> Result<f64> {
        ensure_len("neuron weights", self.width(), weights.len())?;
        Ok(self
            .outputs()
            .iter()
            .zip(weights)
            .map(|(output, weight)| output * weight)
            .sum())
    }

    /// Projects the downstream layer's errors back onto this layer.
    ///
    /// For each unit `j`: `sum_i(forward[i].weights[j] * forward_errors[i])`
    /// scaled by the sigmoid derivative at this unit's output.
    fn backward_error(&self, forward: &[Neuron], forward_errors: &[f64]) -> Result<Vec<f64>> {
        check_forward(self.width(), forward, forward_errors)?;
        Ok(self
            .outputs()
            .iter()
            .enumerate()
            .map(|(j, &output)| {
                let projected: f64 = forward
                    .iter()
                    .zip(forward_errors)
                    .map(|(neuron, error)| neuron.weights[j] * error)
                    .sum();
                projected * sigmoid_derivative(output)
            })
            .collect())
    }

    /// Nudges the downstream neurons' incoming weights using this layer's
    /// activations: `forward[i].weights[j] += rate * forward_errors[i] * outputs[j]`.
    ///
    /// Errors are `target - output`, so adding the delta descends the loss.
    /// Nothing is written unless every shape matches.
    fn apply_weight_deltas(
        &self,
        forward: &mut [Neuron],
        learning_rate: f64,
        forward_errors: &[f64],
    ) -> Result<()> {
        check_forward(self.width(), forward, forward_errors)?;
        for (neuron, error) in forward.iter_mut().zip(forward_errors) {
            for (weight, output) in neuron.weights.iter_mut().zip(self.outputs()) {
                *weight += learning_rate * error * output;
            }
        }
        Ok(())
    }
}

/// Every downstream neuron must carry one weight per unit of a `width`-wide
/// layer, and there must be one error per neuron.
fn check_forward(width: usize, forward: &[Neuron], forward_errors: &[f64]) -> Result<()> {
    ensure_len("forward errors", forward.len(), forward_errors.len())?;
    for neuron in forward {
        ensure_len("neuron weights", width, neuron.weights.len())?;
    }
    Ok(())
}

/// Writes one neuron line of the diagnostic dump.
pub(crate) fn fmt_neuron(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    neuron: &Neuron,
    output: f64,
) -> fmt::Result {
    write!(f, "{label}:   Bias: {:9.6},   Weights: [", neuron.bias)?;
    for (j, weight) in neuron.weights.iter().enumerate() {
        if j > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{weight:9.6}")?;
    }
    write!(f, "],  Output: {output:9.6}")
}
