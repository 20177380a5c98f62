use sigmoid_mlp::{NeuralNetwork, NetworkSpec, TrainConfig};

fn main() -> sigmoid_mlp::Result<()> {
    tracing_subscriber::fmt::init();

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let labels = ["1", "0", "1", "0"];

    let spec = NetworkSpec::new(2, vec![4], 0.5);
    let mut network = NeuralNetwork::new(&spec, &labels)?;

    let report = network.train(&inputs, &labels, &TrainConfig::new(20_000))?;
    println!(
        "Trained for {} epochs, converged: {}, success ratio: {:.2}%",
        report.epochs,
        report.converged,
        report.success_ratio * 100.0
    );

    for (input, predicted) in inputs.iter().zip(network.classify_batch(&inputs)?) {
        println!("Input: {:?} -> {}", input, predicted);
    }
    Ok(())
}
