use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `EpochStats` value at the end of every completed epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Most epochs the iteration cap allows for this run.
    pub total_epochs: usize,
    /// Examples whose best output matched their label.
    pub hits: usize,
    pub examples: usize,
    /// Mean squared error over all examples, measured before each update.
    pub train_loss: f64,
    /// `hits / examples`, or 0 for an empty dataset.
    pub train_accuracy: f64,
    /// Every example's correct-class output reached the threshold.
    pub all_reached_threshold: bool,
}

/// Summary returned once training stops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Epochs actually run.
    pub epochs: usize,
    /// Fraction of examples scored correct in the last epoch.
    pub success_ratio: f64,
    /// Training stopped because every example reached the threshold.
    pub converged: bool,
    /// Mean loss of the last epoch.
    pub final_loss: f64,
}
