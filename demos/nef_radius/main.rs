use std::fs::create_dir_all;
use std::path::Path;

extern crate point_neuron_dynamics;
use point_neuron_dynamics::error::PointNeuronDynamicsError;
use point_neuron_dynamics::nef::network::{Network, Simulator, Source, Target};
use point_neuron_dynamics::plot::xy_chart;


// Represents the constant point (1, 1) in two ensembles with different
// radii and renders the decoded trajectories, the unit radius ensemble
// saturates short of the target while the wider one reaches it
fn main() -> Result<(), PointNeuronDynamicsError> {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir).expect("Could not create output directory");

    let radii = [1.0f32, 1.5];

    let mut network = Network::new(5);

    let stimulus = network.add_constant_node(vec![1., 1.]);

    let mut probes = Vec::new();
    for radius in radii {
        let ensemble = network.add_ensemble_with_radius(100, 2, radius)?;
        network.connect(Source::Node(stimulus), Target::Ensemble(ensemble))?;
        probes.push(network.probe(Source::Ensemble(ensemble), Some(0.01))?);
    }

    let mut simulator = Simulator::new(network)?;
    simulator.run(1.);

    for (radius, probe) in radii.iter().zip(probes) {
        let trajectory: Vec<(f32, f32)> = simulator.probe_data(probe).iter()
            .map(|v| (v[0], v[1]))
            .collect();

        xy_chart(
            &out_dir.join(format!("nef_radius_{}.png", radius)),
            &format!("Radius of {}", radius),
            "x0",
            "x1",
            &[("Decoded trajectory", &trajectory)],
            (-1.5, 1.5),
            (-1.5, 1.5),
        )?;
    }

    println!("Saved radius charts to {}", out_dir.display());

    Ok(())
}
