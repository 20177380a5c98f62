use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Architecture of a network: input width, hidden layer widths (input →
/// output order) and the learning rate shared by every layer.
///
/// The output width is not part of the spec; it comes from the distinct
/// training labels at construction time. Only the architecture is ever
/// written to disk, never trained weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_width: usize,
    pub hidden_widths: Vec<usize>,
    pub learning_rate: f64,
}

impl NetworkSpec {
    pub fn new(input_width: usize, hidden_widths: Vec<usize>, learning_rate: f64) -> NetworkSpec {
        NetworkSpec { input_width, hidden_widths, learning_rate }
    }

    /// Checks the topology before any layer is allocated.
    pub fn validate(&self) -> Result<()> {
        if self.input_width == 0 {
            return Err(NetworkError::ZeroWidth { layer: "input layer" });
        }
        if self.hidden_widths.is_empty() {
            return Err(NetworkError::EmptyTopology);
        }
        if self.hidden_widths.contains(&0) {
            return Err(NetworkError::ZeroWidth { layer: "hidden layer" });
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetworkError::InvalidLearningRate(self.learning_rate));
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_topology_is_valid() {
        assert!(NetworkSpec::new(3, vec![4], 0.05).validate().is_ok());
    }

    #[test]
    fn empty_hidden_widths_are_rejected() {
        let err = NetworkSpec::new(3, vec![], 0.05).validate().unwrap_err();
        assert!(matches!(err, NetworkError::EmptyTopology));
    }

    #[test]
    fn zero_widths_are_rejected() {
        assert!(matches!(
            NetworkSpec::new(0, vec![4], 0.05).validate(),
            Err(NetworkError::ZeroWidth { layer: "input layer" })
        ));
        assert!(matches!(
            NetworkSpec::new(3, vec![4, 0], 0.05).validate(),
            Err(NetworkError::ZeroWidth { layer: "hidden layer" })
        ));
    }

    #[test]
    fn bad_learning_rates_are_rejected() {
        for rate in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                NetworkSpec::new(3, vec![4], rate).validate(),
                Err(NetworkError::InvalidLearningRate(_))
            ));
        }
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("sigmoid-mlp-spec-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let spec = NetworkSpec::new(3, vec![4, 2], 0.05);

        spec.save_json(path).unwrap();
        let loaded = NetworkSpec::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, spec);
    }

    #[test]
    fn invalid_json_surfaces_config_error() {
        let path = std::env::temp_dir().join(format!("sigmoid-mlp-bad-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        std::fs::write(path, "{ \"input_width\": 3 }").unwrap();
        let err = NetworkSpec::load_json(path).unwrap_err();
        std::fs::remove_file(path).unwrap();

        assert!(matches!(err, NetworkError::Config(_)));
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = NetworkSpec::load_json("/nonexistent/sigmoid-mlp/spec.json").unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
