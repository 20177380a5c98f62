use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Everything that can go wrong while building, training or querying a network.
///
/// All variants are contract violations detected synchronously; nothing here
/// is transient, so callers should not retry.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A vector length disagrees with the width a layer or dataset expects.
    #[error("{what}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An index does not address any element of a collection.
    #[error("{what} index {index} out of range for {len} entries")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A training label is not among the network's class names.
    #[error("unknown label {0:?}")]
    UnknownLabel(String),

    /// No output neuron exceeds zero, so no class can be picked.
    #[error("no output exceeds zero; the network has no prediction")]
    DegenerateOutput,

    /// The topology has no hidden layers.
    #[error("at least one hidden layer is required")]
    EmptyTopology,

    /// A layer was declared with zero neurons.
    #[error("{layer} must have at least one neuron")]
    ZeroWidth { layer: &'static str },

    /// No training labels were supplied, so the output layer would be empty.
    #[error("at least one training label is required")]
    NoLabels,

    #[error("learning rate must be finite and positive, got {0}")]
    InvalidLearningRate(f64),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetworkError {
    pub(crate) fn shape(what: &'static str, expected: usize, actual: usize) -> Self {
        NetworkError::ShapeMismatch { what, expected, actual }
    }
}

/// Fails with `ShapeMismatch` unless `actual == expected`.
pub(crate) fn ensure_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::shape(what, expected, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_len_accepts_equal_lengths() {
        assert!(ensure_len("inputs", 3, 3).is_ok());
    }

    #[test]
    fn ensure_len_reports_both_lengths() {
        let err = ensure_len("inputs", 3, 4).unwrap_err();
        match err {
            NetworkError::ShapeMismatch { what, expected, actual } => {
                assert_eq!(what, "inputs");
                assert_eq!(expected, 3);
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            ensure_len("inputs", 3, 4).unwrap_err().to_string(),
            "inputs: expected length 3, got 4"
        );
    }
}
