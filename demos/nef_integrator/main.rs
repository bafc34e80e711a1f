use std::fs::create_dir_all;
use std::path::Path;

extern crate point_neuron_dynamics;
use point_neuron_dynamics::error::PointNeuronDynamicsError;
use point_neuron_dynamics::nef::network::{Network, Simulator, Source, Target};
use point_neuron_dynamics::plot::line_chart;


// Feeds a sine input into a single neuron ensemble and into a larger
// ensemble with a slow recurrent connection that accumulates its own
// decoded output
fn main() -> Result<(), PointNeuronDynamicsError> {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir).expect("Could not create output directory");

    let mut network = Network::new(3);

    let input = network.add_node(1, |t| vec![t.sin()]);

    let single_neuron = network.add_ensemble(1, 1)?;
    let integrator = network.add_ensemble(100, 1)?;

    network.connect(Source::Node(input), Target::Ensemble(single_neuron))?;
    network.connect(Source::Node(input), Target::Ensemble(integrator))?;
    // slow recurrent feedback holds the accumulated value
    network.connect_with(
        Source::Ensemble(integrator),
        Target::Ensemble(integrator),
        Some(0.1),
        None,
    )?;

    let single_probe = network.probe(Source::Ensemble(single_neuron), Some(0.01))?;
    let integrator_probe = network.probe(Source::Ensemble(integrator), Some(0.01))?;

    let mut simulator = Simulator::new(network)?;
    simulator.run(5.);

    let times = simulator.trange().to_vec();
    let single_values: Vec<f32> = simulator.probe_data(single_probe).iter()
        .map(|v| v[0])
        .collect();
    let integrator_values: Vec<f32> = simulator.probe_data(integrator_probe).iter()
        .map(|v| v[0])
        .collect();

    line_chart(
        &out_dir.join("nef_single_neuron.png"),
        "Single Neuron Output",
        "Time (s)",
        "Output",
        &times,
        &[("Decoded output", &single_values)],
    )?;

    line_chart(
        &out_dir.join("nef_integrator.png"),
        "Integrator Output",
        "Time (s)",
        "Output",
        &times,
        &[("Decoded output", &integrator_values)],
    )?;

    println!("Saved integrator charts to {}", out_dir.display());

    Ok(())
}
