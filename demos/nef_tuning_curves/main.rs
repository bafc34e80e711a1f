use std::fs::create_dir_all;
use std::path::Path;

extern crate point_neuron_dynamics;
use point_neuron_dynamics::error::PointNeuronDynamicsError;
use point_neuron_dynamics::nef::network::{Network, Simulator, Source, Target};
use point_neuron_dynamics::nef::tuning_curves_1d;
use point_neuron_dynamics::plot::line_chart;


// Renders the tuning curves of an ensemble representing a wide radius and
// the encode/decode behavior of the same ensemble tracking a growing target
// signal over 20 seconds
fn main() -> Result<(), PointNeuronDynamicsError> {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir).expect("Could not create output directory");

    let n_neurons = 100;
    let radius = 30.;

    let mut network = Network::new(7);

    // the input node outputs t + sin(t) over simulation time
    let input = network.add_node(1, |t| vec![t + t.sin()]);
    let ensemble = network.add_ensemble_with_radius(n_neurons, 1, radius)?;
    let output = network.add_passthrough_node(1);

    network.connect(Source::Node(input), Target::Ensemble(ensemble))?;
    network.connect(Source::Ensemble(ensemble), Target::Node(output))?;

    let input_probe = network.probe(Source::Node(input), Some(0.01))?;
    let output_probe = network.probe(Source::Node(output), Some(0.01))?;

    // tuning curves over the representational range, a subset of neurons
    // to keep the legend readable
    let (inputs, activities) = tuning_curves_1d(&network.ensembles[ensemble.0], 200)?;

    let mut simulator = Simulator::new(network)?;
    simulator.run(20.);

    let times = simulator.trange().to_vec();
    let input_values: Vec<f32> = simulator.probe_data(input_probe).iter().map(|v| v[0]).collect();
    let output_values: Vec<f32> = simulator.probe_data(output_probe).iter().map(|v| v[0]).collect();

    let curve_labels: Vec<String> = (0..10).map(|i| format!("neuron {}", i * 10)).collect();
    let curves: Vec<Vec<f32>> = (0..10)
        .map(|i| activities.column(i * 10).to_vec())
        .collect();
    let curve_series: Vec<(&str, &[f32])> = curve_labels.iter()
        .zip(curves.iter())
        .map(|(label, curve)| (label.as_str(), curve.as_slice()))
        .collect();

    line_chart(
        &out_dir.join("nef_tuning_curves.png"),
        &format!("{} Neuron Tuning Curves", n_neurons),
        "Represented value",
        "Firing rate (Hz)",
        &inputs,
        &curve_series,
    )?;

    line_chart(
        &out_dir.join("nef_decoding.png"),
        &format!("Decoding by {} Neurons", n_neurons),
        "Time (s)",
        "Decoded value",
        &times,
        &[
            ("Input", &input_values),
            ("Decoded output", &output_values),
        ],
    )?;

    println!("Saved tuning curve charts to {}", out_dir.display());

    Ok(())
}
