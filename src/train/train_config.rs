use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Output level an example's correct class must reach for the example to
/// count as solved in an epoch.
pub const DEFAULT_THRESHOLD: f64 = 0.95;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_iterations` — iteration cap; at most `max_iterations - 1` epochs run
/// - `threshold`      — convergence level for the correct-class output
/// - `progress_tx`    — optional channel sender; one `EpochStats` is sent per
///                      completed epoch.  If the receiver is dropped the loop
///                      terminates early.
pub struct TrainConfig {
    pub max_iterations: usize,
    pub threshold: f64,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with the default threshold and no progress channel.
    pub fn new(max_iterations: usize) -> Self {
        TrainConfig {
            max_iterations,
            threshold: DEFAULT_THRESHOLD,
            progress_tx: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Number of epochs the cap allows.
    pub fn max_epochs(&self) -> usize {
        self.max_iterations.saturating_sub(1)
    }
}
