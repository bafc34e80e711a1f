use std::fs::create_dir_all;
use std::path::Path;

extern crate point_neuron_dynamics;
use point_neuron_dynamics::neuron::{
    hodgkin_huxley::{run_stimulus_hodgkin_huxley, HodgkinHuxleyNeuron},
    stimulus::Stimulus,
};
use point_neuron_dynamics::plot::line_chart_clipped;


// Drives a Hodgkin Huxley neuron with a current pulse and renders the
// membrane potential, the gating states, and the ionic currents over time,
// .png charts are written to target/plots in the working directory
fn main() {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir).expect("Could not create output directory");

    let point_count = 5000;
    let mut neuron = HodgkinHuxleyNeuron::default();
    let stimulus = Stimulus::zeros(point_count).with_pulse(2000..3000, 10.);

    let trace = run_stimulus_hodgkin_huxley(&mut neuron, stimulus.as_slice());

    let times: Vec<f32> = (0..point_count).map(|i| i as f32 * neuron.dt).collect();
    // display on the conventional resting scale (-70 mV)
    let shifted_voltages: Vec<f32> = trace.voltages.iter().map(|v| v - 70.).collect();
    let shifted_stimulus: Vec<f32> = stimulus.as_slice().iter().map(|i| i - 70.).collect();

    let window = (90., 160.);

    line_chart_clipped(
        &out_dir.join("hodgkin_huxley_membrane.png"),
        "Hodgkin-Huxley Neuron Model",
        "Time (msec)",
        "Membrane Potential (mV)",
        &times,
        &[
            ("Vm", &shifted_voltages),
            ("Stimulus (scaled)", &shifted_stimulus),
        ],
        window,
    ).expect("Could not render membrane chart");

    line_chart_clipped(
        &out_dir.join("hodgkin_huxley_gates.png"),
        "Hodgkin-Huxley Neuron Model: Gatings",
        "Time (msec)",
        "Gate state",
        &times,
        &[
            ("m (Na)", &trace.m),
            ("h (Na)", &trace.h),
            ("n (K)", &trace.n),
        ],
        window,
    ).expect("Could not render gating chart");

    line_chart_clipped(
        &out_dir.join("hodgkin_huxley_currents.png"),
        "Hodgkin-Huxley Neuron Model: Ion Currents",
        "Time (msec)",
        "Current (uA)",
        &times,
        &[
            ("INa", &trace.i_na),
            ("IK", &trace.i_k),
            ("Ileak", &trace.i_k_leak),
            ("Isum", &trace.i_sum),
        ],
        window,
    ).expect("Could not render current chart");

    println!("Saved Hodgkin Huxley charts to {}", out_dir.display());
}
