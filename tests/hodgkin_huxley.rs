#[cfg(test)]
mod test {
    use point_neuron_dynamics::neuron::{
        dynamics::PointNeuron,
        find_peaks,
        hodgkin_huxley::{run_static_input_hodgkin_huxley, HodgkinHuxleyNeuron},
        run_static_input,
    };


    const ITERATIONS: usize = 10_000;

    #[test]
    fn test_steady_state_gates_at_rest() {
        let neuron = HodgkinHuxleyNeuron::new(0.);

        assert!((neuron.na_channel.m.state - 0.0529).abs() < 0.005);
        assert!((neuron.na_channel.h.state - 0.5961).abs() < 0.005);
        assert!((neuron.k_channel.n.state - 0.3177).abs() < 0.005);
    }

    #[test]
    fn test_resting_stability_without_input() {
        let mut neuron = HodgkinHuxleyNeuron::default();

        let voltages = run_static_input(&mut neuron, 0., false, ITERATIONS);

        for voltage in voltages {
            assert!(voltage.abs() < 2., "membrane drifted to {} mV", voltage);
        }
    }

    #[test]
    fn test_repetitive_spiking_under_static_input() {
        let mut neuron = HodgkinHuxleyNeuron::default();

        let trace = run_static_input_hodgkin_huxley(&mut neuron, 10., false, ITERATIONS);

        let peaks = find_peaks(&trace.voltages, neuron.v_th, 100);

        assert!(peaks.len() >= 3, "expected repetitive firing, found {} peaks", peaks.len());

        for peak in peaks {
            assert!(trace.voltages[peak] > neuron.v_th);
        }

        // the driver records the firing time of the most recent spike
        let last_spike = neuron.last_firing_time.unwrap();
        assert!(trace.voltages[last_spike] > neuron.v_th);
    }

    #[test]
    fn test_gating_states_stay_within_bounds() {
        let mut neuron = HodgkinHuxleyNeuron::default();

        let trace = run_static_input_hodgkin_huxley(&mut neuron, 10., false, ITERATIONS);

        for ((m, h), n) in trace.m.iter().zip(trace.h.iter()).zip(trace.n.iter()) {
            assert!((0. ..=1.).contains(m));
            assert!((0. ..=1.).contains(h));
            assert!((0. ..=1.).contains(n));
        }
    }

    #[test]
    fn test_spike_flag_set_at_apex_only() {
        let mut neuron = HodgkinHuxleyNeuron::default();

        let mut spike_indices: Vec<usize> = Vec::new();
        let mut voltages: Vec<f32> = Vec::with_capacity(ITERATIONS);

        for timestep in 0..ITERATIONS {
            if neuron.step_and_spike(10.) {
                spike_indices.push(timestep);
            }

            voltages.push(neuron.current_voltage);
        }

        assert!(!spike_indices.is_empty());

        // the spike flag fires on the downward crossing just past the apex
        for index in spike_indices {
            assert!(voltages[index] > neuron.v_th);
            assert!(voltages[index] < voltages[index - 1]);
        }
    }

    #[test]
    fn test_trace_lengths_match_iterations() {
        let mut neuron = HodgkinHuxleyNeuron::default();

        let trace = run_static_input_hodgkin_huxley(&mut neuron, 5., false, 500);

        assert_eq!(trace.voltages.len(), 500);
        assert_eq!(trace.m.len(), 500);
        assert_eq!(trace.h.len(), 500);
        assert_eq!(trace.n.len(), 500);
        assert_eq!(trace.i_na.len(), 500);
        assert_eq!(trace.i_k.len(), 500);
        assert_eq!(trace.i_k_leak.len(), 500);
        assert_eq!(trace.i_sum.len(), 500);
    }
}
