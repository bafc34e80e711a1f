use std::fs::create_dir_all;
use std::path::Path;

extern crate point_neuron_dynamics;
use point_neuron_dynamics::error::PointNeuronDynamicsError;
use point_neuron_dynamics::nef::network::{Network, Simulator, Source, Target};
use point_neuron_dynamics::plot::line_chart;


// Decodes three functions of a sine driven represented value with ensembles
// of increasing size, rendering the input, the decoded output, and the
// function applied to the filtered input as a validation series
fn main() -> Result<(), PointNeuronDynamicsError> {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir).expect("Could not create output directory");

    let duration = 1.;
    let synapse = Some(0.01);

    let functions: [(&str, &str, fn(f32) -> f32); 3] = [
        ("x^3", "cubed", |x| x * x * x),
        ("sigmoid(x)", "sigmoid", |x| 1. / (1. + (-x).exp())),
        ("max(0, -x)", "rectified_negative", |x| (-x).max(0.)),
    ];
    let neuron_counts = [10, 100, 1000];

    for (function_name, file_name, function) in functions {
        for n_neurons in neuron_counts {
            let mut network = Network::new(11);

            let input = network.add_node(1, |t| vec![0.5 * (10. * t).sin()]);
            let ensemble = network.add_ensemble(n_neurons, 1)?;
            let output = network.add_passthrough_node(1);

            network.connect(Source::Node(input), Target::Ensemble(ensemble))?;
            network.connect_function(
                Source::Ensemble(ensemble),
                Target::Node(output),
                move |x| vec![function(x[0])],
            )?;

            let input_probe = network.probe(Source::Node(input), synapse)?;
            let output_probe = network.probe(Source::Node(output), synapse)?;

            let mut simulator = Simulator::new(network)?;
            simulator.run(duration);

            let times = simulator.trange().to_vec();
            let input_values: Vec<f32> = simulator.probe_data(input_probe).iter()
                .map(|v| v[0])
                .collect();
            let output_values: Vec<f32> = simulator.probe_data(output_probe).iter()
                .map(|v| v[0])
                .collect();
            let validation: Vec<f32> = input_values.iter()
                .map(|x| function(*x))
                .collect();

            line_chart(
                &out_dir.join(format!("transform_{}_{}.png", file_name, n_neurons)),
                &format!("Transformation from x to {} using {} Neurons", function_name, n_neurons),
                "Time (s)",
                function_name,
                &times,
                &[
                    ("Input", &input_values),
                    ("Decoded output", &output_values),
                    ("Validation", &validation),
                ],
            )?;
        }
    }

    println!("Saved transformation charts to {}", out_dir.display());

    Ok(())
}
