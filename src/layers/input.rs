use std::fmt;

use serde::Serialize;

use crate::error::{ensure_len, Result};
use crate::layers::layer::Layer;

/// First layer of the chain. Holds the raw feature vector verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct InputLayer {
    outputs: Vec<f64>,
}

impl InputLayer {
    pub fn new(size: usize) -> InputLayer {
        InputLayer { outputs: vec![0.0; size] }
    }

    /// Replaces the outputs with `values`; no activation is applied.
    pub fn set_inputs(&mut self, values: &[f64]) -> Result<()> {
        ensure_len("input vector", self.outputs.len(), values.len())?;
        self.outputs.copy_from_slice(values);
        Ok(())
    }

    /// Terminal step of backpropagation; there is nothing upstream.
    pub fn back_propagate(&mut self, _errors: &[f64]) {}
}

impl Layer for InputLayer {
    fn outputs(&self) -> &[f64] {
        &self.outputs
    }
}

impl fmt::Display for InputLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INPUT LAYER")?;
        for (i, output) in self.outputs.iter().enumerate() {
            write!(f, "\nOutput {i} : {output}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn inputs_pass_through_verbatim() {
        let mut layer = InputLayer::new(3);
        layer.set_inputs(&[1.5, -2.0, 7.25]).unwrap();
        assert_eq!(layer.outputs(), &[1.5, -2.0, 7.25]);
    }

    #[test]
    fn wrong_width_is_rejected_and_outputs_untouched() {
        let mut layer = InputLayer::new(3);
        layer.set_inputs(&[1.0, 2.0, 3.0]).unwrap();

        let err = layer.set_inputs(&[5.7, 3.8, 1.7, 0.3]).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::ShapeMismatch { expected: 3, actual: 4, .. }
        ));
        assert_eq!(layer.outputs(), &[1.0, 2.0, 3.0]);

        assert!(layer.set_inputs(&[1.0]).is_err());
    }

    #[test]
    fn back_propagate_leaves_outputs_alone() {
        let mut layer = InputLayer::new(2);
        layer.set_inputs(&[0.25, 0.75]).unwrap();
        layer.back_propagate(&[10.0, -10.0]);
        assert_eq!(layer.outputs(), &[0.25, 0.75]);
    }

    #[test]
    fn display_lists_every_output() {
        let mut layer = InputLayer::new(2);
        layer.set_inputs(&[1.0, 0.5]).unwrap();
        assert_eq!(layer.to_string(), "INPUT LAYER\nOutput 0 : 1\nOutput 1 : 0.5");
    }
}
