use std::fs::create_dir_all;
use std::path::Path;

extern crate point_neuron_dynamics;
use point_neuron_dynamics::neuron::{
    integrate_and_fire::{run_stimulus_izhikevich, IzhikevichNeuron},
    stimulus::Stimulus,
};
use point_neuron_dynamics::plot::line_chart;


// Simulates the six classic Izhikevich firing classes under the same step
// stimulus and renders one voltage and recovery chart per class
fn main() {
    let out_dir = Path::new("target/plots");
    create_dir_all(out_dir).expect("Could not create output directory");

    // 200 ms at dt = 0.1 ms, step of 10 starting at step 41
    let point_count = 2001;
    let stimulus = Stimulus::zeros(point_count).with_step(41, 10.);

    let classes = [
        (IzhikevichNeuron::regular_spiking(), "Regular Spiking (RS)", "rs"),
        (IzhikevichNeuron::intrinsically_bursting(), "Intrinsically Bursting (IB)", "ib"),
        (IzhikevichNeuron::chattering(), "Chattering (CH)", "ch"),
        (IzhikevichNeuron::fast_spiking(), "Fast Spiking (FS)", "fs"),
        (IzhikevichNeuron::resonator(), "Resonator (RZ)", "rz"),
        (IzhikevichNeuron::low_threshold_spiking(), "Low Threshold Spiking (LTS)", "lts"),
    ];

    for (mut neuron, title, suffix) in classes {
        let v_init = neuron.v_init;
        let times: Vec<f32> = (0..point_count).map(|i| i as f32 * neuron.dt).collect();

        let trace = run_stimulus_izhikevich(&mut neuron, stimulus.as_slice());

        let shifted_stimulus: Vec<f32> = stimulus.as_slice().iter()
            .map(|i| i + v_init)
            .collect();

        line_chart(
            &out_dir.join(format!("izhikevich_{}.png", suffix)),
            &format!("Izhikevich Model: {}", title),
            "Time (msec)",
            "Membrane Potential (mV)",
            &times,
            &[
                ("Vm", &trace.voltages),
                ("Recovery", &trace.recoveries),
                ("Stimulus (scaled)", &shifted_stimulus),
            ],
        ).expect("Could not render chart");
    }

    println!("Saved Izhikevich firing class charts to {}", out_dir.display());
}
