use std::fs::create_dir_all;
use std::path::Path;

extern crate point_neuron_dynamics;
use point_neuron_dynamics::neuron::integrate_and_fire::{
    run_ramp_fi_curve, LeakyIntegrateAndFireNeuron,
};
use point_neuron_dynamics::plot::line_chart;


// Drives a leaky integrate and fire neuron with a slowly growing current
// ramp and renders the instantaneous spike frequency against the stimulus
// current
fn main() {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir).expect("Could not create output directory");

    // 50 ms at dt = 0.1 ms with the current growing by 0.5 every step
    let mut cell = LeakyIntegrateAndFireNeuron::default();
    let (currents, frequencies) = run_ramp_fi_curve(&mut cell, 0.5, 501);

    line_chart(
        &out_dir.join("lif_fi_curve.png"),
        &format!("Leaky Integrate-and-Fire Model (tau={:.2})", cell.tau_m()),
        "Stimulus Current Intensity (uA)",
        "Spike Frequency (1 / ms)",
        &currents,
        &[("Frequency", &frequencies)],
    ).expect("Could not render chart");

    println!("Saved F-I curve chart to {}", out_dir.display());
}
