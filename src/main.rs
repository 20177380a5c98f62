//! Parity sample driver.
//!
//! Trains a small network on the eight-row parity-like sample, then
//! classifies the training rows and the four-feature test rows. The test
//! rows do not match the three-wide input layer, so each of them is reported
//! as a shape mismatch instead of being classified.
//!
//! Run with:
//!   cargo run -- --dump
//!   RUST_LOG=debug cargo run -- --max-iterations 500

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use sigmoid_mlp::{NeuralNetwork, NetworkSpec, TrainConfig};

const TRAINING_ROWS: [[f64; 3]; 8] = [
    [1.0, 0.0, 1.0],
    [0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0],
    [0.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

const TRAINING_LABELS: [&str; 8] = ["1", "0", "1", "1", "1", "0", "1", "0"];

const TEST_ROWS: [[f64; 4]; 6] = [
    [5.7, 3.8, 1.7, 0.3],
    [6.2, 2.2, 4.5, 1.5],
    [5.7, 2.5, 5.0, 2.0],
    [4.7, 3.5, 1.1, 0.2],
    [6.1, 3.0, 4.6, 1.4],
    [7.8, 3.0, 6.1, 2.4],
];

#[derive(Debug, Parser)]
#[command(name = "sigmoid-mlp", about = "Train and query a sigmoid MLP on the parity sample")]
struct Args {
    /// JSON network spec; overrides --hidden and --learning-rate.
    #[arg(long)]
    config: Option<String>,

    /// Hidden layer width, repeat for more layers.
    #[arg(long = "hidden", default_values_t = vec![4])]
    hidden: Vec<usize>,

    #[arg(long, default_value_t = 0.05)]
    learning_rate: f64,

    /// Iteration cap; at most this many minus one epochs run.
    #[arg(long, default_value_t = 10)]
    max_iterations: usize,

    /// Correct-class output level that counts an example as solved.
    #[arg(long, default_value_t = sigmoid_mlp::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Seed for weight initialisation; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print every layer's neurons after training.
    #[arg(long)]
    dump: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> sigmoid_mlp::Result<()> {
    let spec = match &args.config {
        Some(path) => NetworkSpec::load_json(path)?,
        None => NetworkSpec::new(TRAINING_ROWS[0].len(), args.hidden.clone(), args.learning_rate),
    };

    let mut network = match args.seed {
        Some(seed) => NeuralNetwork::with_rng(&spec, &TRAINING_LABELS, &mut StdRng::seed_from_u64(seed))?,
        None => NeuralNetwork::new(&spec, &TRAINING_LABELS)?,
    };

    let inputs: Vec<Vec<f64>> = TRAINING_ROWS.iter().map(|row| row.to_vec()).collect();
    let config = TrainConfig::new(args.max_iterations).with_threshold(args.threshold);
    let report = network.train(&inputs, &TRAINING_LABELS, &config)?;

    println!("Training finished with {} epochs", report.epochs);
    println!("Success ratio with training samples: {:.2}%", report.success_ratio * 100.0);

    if args.dump {
        println!("\n{network}");
    }

    println!();
    for (i, row) in inputs.iter().enumerate() {
        match network.classify(row) {
            Ok(label) => println!("{} - {:?} -> {}", i + 1, row, label),
            Err(e) => println!("{} - {:?} -> {}", i + 1, row, e),
        }
    }

    println!();
    for (i, row) in TEST_ROWS.iter().enumerate() {
        match network.classify(row) {
            Ok(label) => println!("{} - {:?} -> {}", i + 1, row, label),
            Err(e) => println!("{} - {:?} -> {}", i + 1, row, e),
        }
    }
    Ok(())
}
