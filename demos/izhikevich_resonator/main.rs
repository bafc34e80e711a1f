use std::fs::create_dir_all;
use std::path::Path;

extern crate point_neuron_dynamics;
use point_neuron_dynamics::neuron::{
    integrate_and_fire::{run_stimulus_izhikevich, IzhikevichNeuron},
    stimulus::Stimulus,
};
use point_neuron_dynamics::plot::line_chart;


// Drives a resonator parameterized Izhikevich neuron with a held negative
// baseline, a sustained step, and a short pulse that kicks the neuron into
// spiking
fn main() {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir).expect("Could not create output directory");

    let point_count = 2001;
    let mut neuron = IzhikevichNeuron::resonator();

    let stimulus = Stimulus::constant(point_count, -4.)
        .with_step(301, 5.)
        .with_pulse(1350..1371, 5.);

    let times: Vec<f32> = (0..point_count).map(|i| i as f32 * neuron.dt).collect();
    let v_init = neuron.v_init;

    let trace = run_stimulus_izhikevich(&mut neuron, stimulus.as_slice());

    let shifted_stimulus: Vec<f32> = stimulus.as_slice().iter()
        .map(|i| i + v_init)
        .collect();

    line_chart(
        &out_dir.join("izhikevich_resonator.png"),
        "Izhikevich Model: RZ",
        "Time (msec)",
        "Membrane Potential (mV)",
        &times,
        &[
            ("Vm", &trace.voltages),
            ("Recovery", &trace.recoveries),
            ("Stimulus (scaled)", &shifted_stimulus),
        ],
    ).expect("Could not render chart");

    println!("Saved resonator chart to {}", out_dir.display());
}
