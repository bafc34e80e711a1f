#[cfg(test)]
mod test {
    use point_neuron_dynamics::neuron::{
        dynamics::PointNeuron,
        integrate_and_fire::{
            run_ramp_fi_curve, run_stimulus_izhikevich, run_stimulus_lif,
            IzhikevichNeuron, LeakyIntegrateAndFireNeuron,
        },
        interspike_interval_frequencies, run_static_input, run_stimulus,
        stimulus::Stimulus,
    };


    #[test]
    fn test_lif_subthreshold_input_never_spikes() {
        let mut cell = LeakyIntegrateAndFireNeuron::default();

        // steady state of -70 + 20 = -50 mV sits below the -40 mV threshold
        for _ in 0..5_000 {
            assert!(!cell.step_and_spike(20.));
            assert!(cell.current_voltage < cell.v_th);
        }
    }

    #[test]
    fn test_lif_suprathreshold_input_spikes_and_resets() {
        let mut cell = LeakyIntegrateAndFireNeuron::default();

        let mut spiked = false;
        for _ in 0..5_000 {
            if cell.step_and_spike(50.) {
                spiked = true;
                assert_eq!(cell.current_voltage, cell.e_l);
                break;
            }
        }

        assert!(spiked);
    }

    #[test]
    fn test_lif_trace_marks_spikes_at_apex() {
        let mut cell = LeakyIntegrateAndFireNeuron::default();

        let stimulus = Stimulus::constant(2_000, 50.);
        let voltages = run_stimulus_lif(&mut cell, stimulus.as_slice());

        assert_eq!(voltages.len(), stimulus.len());

        let apex_count = voltages.iter()
            .filter(|voltage| **voltage == cell.v_spike)
            .count();

        assert!(apex_count >= 2, "expected repetitive firing, found {} spikes", apex_count);

        // the driver records the firing time of the most recent spike
        let last_spike = cell.last_firing_time.unwrap();
        assert_eq!(voltages[last_spike], cell.v_spike);
        assert!(voltages[last_spike + 1..].iter().all(|voltage| *voltage != cell.v_spike));

        for voltage in voltages {
            assert!(voltage <= cell.v_spike);
            assert!(voltage == cell.v_spike || voltage < cell.v_th);
        }
    }

    #[test]
    fn test_generic_stimulus_driver_matches_static_input() {
        let mut stimulus_cell = LeakyIntegrateAndFireNeuron::default();
        let mut static_cell = LeakyIntegrateAndFireNeuron::default();

        let stimulus = Stimulus::constant(1_000, 50.);
        let stimulus_voltages = run_stimulus(&mut stimulus_cell, stimulus.as_slice());
        let static_voltages = run_static_input(&mut static_cell, 50., false, 1_000);

        assert_eq!(stimulus_voltages.len(), 1_000);
        assert_eq!(stimulus_voltages, static_voltages);
        assert_eq!(stimulus_cell.last_firing_time, static_cell.last_firing_time);
        assert!(stimulus_cell.last_firing_time.is_some());
    }

    #[test]
    fn test_interspike_interval_frequencies_match_regular_firing() {
        let mut cell = LeakyIntegrateAndFireNeuron::default();

        let mut spike_indices: Vec<usize> = Vec::new();
        for timestep in 0..2_000 {
            if cell.step_and_spike(50.) {
                spike_indices.push(timestep);
            }
        }

        assert!(spike_indices.len() >= 3);

        let frequencies = interspike_interval_frequencies(&spike_indices, cell.dt);

        assert_eq!(frequencies.len(), spike_indices.len() - 1);

        // constant input drives perfectly regular firing
        let expected = 1. / ((spike_indices[1] - spike_indices[0]) as f32 * cell.dt);
        for frequency in frequencies {
            assert!((frequency - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_lif_fi_curve_is_monotonic() {
        let mut cell = LeakyIntegrateAndFireNeuron::default();

        let (currents, frequencies) = run_ramp_fi_curve(&mut cell, 0.5, 501);

        assert_eq!(currents.len(), 501);
        assert_eq!(frequencies.len(), 501);

        assert_eq!(frequencies[0], 0.);
        assert!(frequencies[frequencies.len() - 1] > 0.);

        for pair in frequencies.windows(2) {
            assert!(pair[1] >= pair[0], "frequency dropped from {} to {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_lif_refractory_period_caps_firing_rate() {
        let mut cell = LeakyIntegrateAndFireNeuron::default();

        let (_, frequencies) = run_ramp_fi_curve(&mut cell, 0.5, 501);

        let rate_cap = 1. / cell.tref;
        for frequency in frequencies {
            assert!(frequency <= rate_cap);
        }
    }

    #[test]
    fn test_izhikevich_firing_class_recovery_parameters() {
        let neuron = IzhikevichNeuron::with_params(0.02, 0.25, -65., 2.);

        assert_eq!(neuron.w_value, 0.25 * -70.);
        assert_eq!(neuron.w_init, neuron.w_value);
        assert_eq!(neuron.current_voltage, -70.);
    }

    #[test]
    fn test_izhikevich_regular_spiking_fires_under_step_input() {
        let mut neuron = IzhikevichNeuron::regular_spiking();

        let stimulus = Stimulus::zeros(2_001).with_step(41, 10.);
        let trace = run_stimulus_izhikevich(&mut neuron, stimulus.as_slice());

        let spike_steps = trace.voltages.iter()
            .filter(|voltage| **voltage == neuron.v_th)
            .count();

        assert!(spike_steps >= 2, "expected repetitive firing, found {} spikes", spike_steps);

        let last_spike = neuron.last_firing_time.unwrap();
        assert_eq!(trace.voltages[last_spike], neuron.v_th);
    }

    #[test]
    fn test_izhikevich_trace_clamped_to_spike_apex() {
        let mut neuron = IzhikevichNeuron::chattering();

        let stimulus = Stimulus::constant(2_001, 10.);
        let trace = run_stimulus_izhikevich(&mut neuron, stimulus.as_slice());

        assert_eq!(trace.voltages.len(), stimulus.len());
        assert_eq!(trace.recoveries.len(), stimulus.len());

        for voltage in trace.voltages {
            assert!(voltage <= neuron.v_th);
        }
    }

    #[test]
    fn test_izhikevich_reset_applies_c_and_d() {
        let mut neuron = IzhikevichNeuron::regular_spiking();

        let mut spiked = false;
        for _ in 0..5_000 {
            let last_recovery = neuron.w_value;

            if neuron.step_and_spike(10.) {
                spiked = true;
                assert_eq!(neuron.current_voltage, neuron.c);
                assert!(neuron.w_value > last_recovery);
                break;
            }
        }

        assert!(spiked);
    }

    #[test]
    fn test_stimulus_construction() {
        let stimulus = Stimulus::constant(10, -4.)
            .with_step(5, 5.)
            .with_pulse(8..20, 5.);

        assert_eq!(stimulus.len(), 10);
        assert_eq!(stimulus.samples[0], -4.);
        assert_eq!(stimulus.samples[5], 1.);
        assert_eq!(stimulus.samples[8], 6.);

        let ramp = Stimulus::ramp(4, 0.5);
        assert_eq!(ramp.samples, vec![0., 0.5, 1., 1.5]);

        assert!(Stimulus::zeros(0).is_empty());
    }
}
