use tracing::{debug, info};

use crate::error::{ensure_len, NetworkError, Result};
use crate::network::network::NeuralNetwork;
use crate::train::epoch_stats::{EpochStats, TrainingReport};
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` one example at a time, in the given order, until every
/// example's correct-class output reaches `config.threshold` within a single
/// epoch or `config.max_epochs()` epochs have run.
///
/// The whole dataset is checked before the first update: a row of the wrong
/// width, a label the network does not know, or mismatched lengths all fail
/// without touching any weight.
///
/// # Early termination
/// Besides convergence, the loop stops when the `progress_tx` receiver has
/// been dropped.
pub fn train_loop<S: AsRef<str>>(
    network: &mut NeuralNetwork,
    inputs: &[Vec<f64>],
    labels: &[S],
    config: &TrainConfig,
) -> Result<TrainingReport> {
    ensure_len("training labels", inputs.len(), labels.len())?;
    for row in inputs {
        ensure_len("training row", network.input_width(), row.len())?;
    }
    for label in labels {
        let label = label.as_ref();
        if network.output_layer().correct_index(label).is_none() {
            return Err(NetworkError::UnknownLabel(label.to_owned()));
        }
    }

    let total_epochs = config.max_epochs();
    let mut report = TrainingReport::default();

    for epoch in 1..=total_epochs {
        let stats = run_one_epoch(network, inputs, labels, config.threshold, epoch, total_epochs)?;

        report.epochs = epoch;
        report.success_ratio = stats.train_accuracy;
        report.converged = stats.all_reached_threshold;
        report.final_loss = stats.train_loss;

        debug!(
            epoch,
            hits = stats.hits,
            loss = stats.train_loss,
            all_reached_threshold = stats.all_reached_threshold,
            "epoch finished"
        );

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }

        if report.converged {
            break;
        }
    }

    info!(
        epochs = report.epochs,
        success_ratio = report.success_ratio,
        converged = report.converged,
        "training finished"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass over the examples in their fixed order.
fn run_one_epoch<S: AsRef<str>>(
    network: &mut NeuralNetwork,
    inputs: &[Vec<f64>],
    labels: &[S],
    threshold: f64,
    epoch: usize,
    total_epochs: usize,
) -> Result<EpochStats> {
    let mut hits = 0;
    let mut total_loss = 0.0;
    let mut all_reached_threshold = true;

    for (input, label) in inputs.iter().zip(labels) {
        let outcome = network.train_one_example(input, label.as_ref(), threshold)?;
        if outcome.hit {
            hits += 1;
        }
        if !outcome.reached_threshold {
            all_reached_threshold = false;
        }
        total_loss += outcome.loss;
    }

    let examples = inputs.len();
    let (train_loss, train_accuracy) = if examples == 0 {
        (0.0, 0.0)
    } else {
        (total_loss / examples as f64, hits as f64 / examples as f64)
    };

    Ok(EpochStats {
        epoch,
        total_epochs,
        hits,
        examples,
        train_loss,
        train_accuracy,
        all_reached_threshold,
    })
}
