//! An implementation of a Hodgkin Huxley neuron with explicit sodium, potassium,
//! and potassium leak channels on the classic offset voltage scale where the
//! resting potential sits at 0 mV

use point_neuron_derive::PointNeuronBase;
use super::dynamics::{
    CurrentVoltage, GaussianFactor, GaussianParameters, IsSpiking,
    LastFiringTime, PointNeuron, Timestep,
};


/// A voltage gated channel state variable
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gate {
    /// Opening rate constant (1/ms)
    pub alpha: f32,
    /// Closing rate constant (1/ms)
    pub beta: f32,
    /// Gating state (between 0 and 1)
    pub state: f32,
}

impl Gate {
    /// Sets the gating state to its steady state value given the current rate constants
    pub fn init_state(&mut self) {
        self.state = self.alpha / (self.alpha + self.beta);
    }

    /// Advances the gating state by one forward Euler step
    pub fn update(&mut self, dt: f32) {
        let alpha_state = self.alpha * (1. - self.state);
        let beta_state = self.beta * self.state;
        self.state += dt * (alpha_state - beta_state);
    }
}

/// Sodium channel with activation (`m`) and inactivation (`h`) gates
#[derive(Debug, Clone, PartialEq)]
pub struct NaIonChannel {
    /// Maximal conductance (mS/cm^2)
    pub g_na: f32,
    /// Reversal potential (mV)
    pub e_na: f32,
    /// Activation gate
    pub m: Gate,
    /// Inactivation gate
    pub h: Gate,
    /// Current generated by the channel (uA/cm^2)
    pub current: f32,
}

impl Default for NaIonChannel {
    fn default() -> Self {
        NaIonChannel {
            g_na: 120.,
            e_na: 115.,
            m: Gate::default(),
            h: Gate::default(),
            current: 0.,
        }
    }
}

impl NaIonChannel {
    /// Updates the gating rate constants given the current membrane potential
    pub fn update_rate_constants(&mut self, voltage: f32) {
        self.m.alpha = 0.1 * ((25. - voltage) / (((25. - voltage) / 10.).exp() - 1.));
        self.m.beta = 4. * (-voltage / 18.).exp();
        self.h.alpha = 0.07 * (-voltage / 20.).exp();
        self.h.beta = 1. / (((30. - voltage) / 10.).exp() + 1.);
    }

    /// Calculates the channel current from the present gating states and then
    /// advances the gating states by one timestep
    pub fn update_current(&mut self, voltage: f32, dt: f32) {
        self.update_rate_constants(voltage);
        self.current = self.m.state.powf(3.) * self.g_na * self.h.state * (voltage - self.e_na);
        self.m.update(dt);
        self.h.update(dt);
    }
}

/// Potassium channel with a single activation (`n`) gate
#[derive(Debug, Clone, PartialEq)]
pub struct KIonChannel {
    /// Maximal conductance (mS/cm^2)
    pub g_k: f32,
    /// Reversal potential (mV)
    pub e_k: f32,
    /// Activation gate
    pub n: Gate,
    /// Current generated by the channel (uA/cm^2)
    pub current: f32,
}

impl Default for KIonChannel {
    fn default() -> Self {
        KIonChannel {
            g_k: 36.,
            e_k: -12.,
            n: Gate::default(),
            current: 0.,
        }
    }
}

impl KIonChannel {
    /// Updates the gating rate constants given the current membrane potential
    pub fn update_rate_constants(&mut self, voltage: f32) {
        self.n.alpha = 0.01 * ((10. - voltage) / (((10. - voltage) / 10.).exp() - 1.));
        self.n.beta = 0.125 * (-voltage / 80.).exp();
    }

    /// Calculates the channel current from the present gating state and then
    /// advances the gating state by one timestep
    pub fn update_current(&mut self, voltage: f32, dt: f32) {
        self.update_rate_constants(voltage);
        self.current = self.n.state.powf(4.) * self.g_k * (voltage - self.e_k);
        self.n.update(dt);
    }
}

/// Timestep independent potassium leak channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KLeakChannel {
    /// Maximal conductance (mS/cm^2)
    pub g_k_leak: f32,
    /// Reversal potential (mV)
    pub e_k_leak: f32,
    /// Current generated by the channel (uA/cm^2)
    pub current: f32,
}

impl Default for KLeakChannel {
    fn default() -> Self {
        KLeakChannel {
            g_k_leak: 0.3,
            e_k_leak: 10.6,
            current: 0.,
        }
    }
}

impl KLeakChannel {
    /// Calculates the channel current from the membrane potential
    pub fn update_current(&mut self, voltage: f32) {
        self.current = self.g_k_leak * (voltage - self.e_k_leak);
    }
}

/// A Hodgkin Huxley neuron
#[derive(Debug, Clone, PointNeuronBase)]
pub struct HodgkinHuxleyNeuron {
    /// Membrane potential (mV)
    pub current_voltage: f32,
    /// Timestep (ms)
    pub dt: f32,
    /// Membrane capacitance (uF/cm^2)
    pub c_m: f32,
    /// Sodium ion channel
    pub na_channel: NaIonChannel,
    /// Potassium ion channel
    pub k_channel: KIonChannel,
    /// Potassium leak channel
    pub k_leak_channel: KLeakChannel,
    /// Summed current from the last timestep (uA/cm^2)
    pub summed_current: f32,
    /// Voltage threshold for spike calculation (mV)
    pub v_th: f32,
    /// Whether the voltage was increasing in the last step
    pub was_increasing: bool,
    /// Whether the neuron is currently spiking
    pub is_spiking: bool,
    /// Last timestep the neuron has spiked
    pub last_firing_time: Option<usize>,
    /// Parameters used in generating noise
    pub gaussian_params: GaussianParameters,
}

impl Default for HodgkinHuxleyNeuron {
    fn default() -> Self {
        HodgkinHuxleyNeuron::new(0.)
    }
}

impl HodgkinHuxleyNeuron {
    /// Generates a neuron resting at the given membrane potential with
    /// every gate set to its steady state value
    pub fn new(starting_voltage: f32) -> Self {
        let mut neuron = HodgkinHuxleyNeuron {
            current_voltage: starting_voltage,
            dt: 0.05,
            c_m: 1.,
            na_channel: NaIonChannel::default(),
            k_channel: KIonChannel::default(),
            k_leak_channel: KLeakChannel::default(),
            summed_current: 0.,
            v_th: 60.,
            was_increasing: false,
            is_spiking: false,
            last_firing_time: None,
            gaussian_params: GaussianParameters::default(),
        };

        neuron.initialize_gate_states();

        neuron
    }

    /// Sets every gate to its steady state value at the current membrane potential
    pub fn initialize_gate_states(&mut self) {
        self.na_channel.update_rate_constants(self.current_voltage);
        self.k_channel.update_rate_constants(self.current_voltage);

        self.na_channel.m.init_state();
        self.na_channel.h.init_state();
        self.k_channel.n.init_state();
    }

    /// Updates the ionic currents of every channel and advances the gating states
    pub fn update_gates(&mut self) {
        self.na_channel.update_current(self.current_voltage, self.dt);
        self.k_channel.update_current(self.current_voltage, self.dt);
        self.k_leak_channel.update_current(self.current_voltage);
    }

    /// Updates cell voltage given an input current
    pub fn update_cell_voltage(&mut self, input_current: f32) {
        let i_na = self.na_channel.current;
        let i_k = self.k_channel.current;
        let i_k_leak = self.k_leak_channel.current;

        self.summed_current = input_current - i_na - i_k - i_k_leak;
        self.current_voltage += self.dt * self.summed_current / self.c_m;
    }
}

impl PointNeuron for HodgkinHuxleyNeuron {
    fn step_and_spike(&mut self, input_current: f32) -> bool {
        let last_voltage = self.current_voltage;

        self.update_gates();
        self.update_cell_voltage(input_current);

        let increasing_right_now = last_voltage < self.current_voltage;
        let threshold_crossed = self.current_voltage > self.v_th;
        let is_spiking = threshold_crossed && self.was_increasing && !increasing_right_now;

        self.is_spiking = is_spiking;
        self.was_increasing = increasing_right_now;

        is_spiking
    }
}

/// State variables of a Hodgkin Huxley neuron recorded over a simulation
#[derive(Debug, Clone, Default)]
pub struct HodgkinHuxleyTrace {
    /// Membrane potential over time (mV)
    pub voltages: Vec<f32>,
    /// Sodium activation gate state over time
    pub m: Vec<f32>,
    /// Sodium inactivation gate state over time
    pub h: Vec<f32>,
    /// Potassium activation gate state over time
    pub n: Vec<f32>,
    /// Sodium current over time (uA/cm^2)
    pub i_na: Vec<f32>,
    /// Potassium current over time (uA/cm^2)
    pub i_k: Vec<f32>,
    /// Leak current over time (uA/cm^2)
    pub i_k_leak: Vec<f32>,
    /// Summed current over time (uA/cm^2)
    pub i_sum: Vec<f32>,
}

impl HodgkinHuxleyTrace {
    fn record(&mut self, neuron: &HodgkinHuxleyNeuron) {
        self.voltages.push(neuron.current_voltage);
        self.m.push(neuron.na_channel.m.state);
        self.h.push(neuron.na_channel.h.state);
        self.n.push(neuron.k_channel.n.state);
        self.i_na.push(neuron.na_channel.current);
        self.i_k.push(neuron.k_channel.current);
        self.i_k_leak.push(neuron.k_leak_channel.current);
        self.i_sum.push(neuron.summed_current);
    }
}

/// Iterates the given neuron over a stimulus waveform where each sample is
/// applied for one timestep, returns the state variables over time including
/// voltages, gating states, and ionic currents
pub fn run_stimulus_hodgkin_huxley(
    hodgkin_huxley_neuron: &mut HodgkinHuxleyNeuron,
    stimulus: &[f32],
) -> HodgkinHuxleyTrace {
    let mut trace = HodgkinHuxleyTrace::default();

    for (timestep, input) in stimulus.iter().enumerate() {
        if hodgkin_huxley_neuron.step_and_spike(*input) {
            hodgkin_huxley_neuron.last_firing_time = Some(timestep);
        }
        trace.record(hodgkin_huxley_neuron);
    }

    trace
}

/// Takes in a static current as an input and iterates the given neuron for a
/// given duration, set `gaussian` to true to add normally distributed noise
/// to the input as it iterates, returns the state variables over time
pub fn run_static_input_hodgkin_huxley(
    hodgkin_huxley_neuron: &mut HodgkinHuxleyNeuron,
    input: f32,
    gaussian: bool,
    iterations: usize,
) -> HodgkinHuxleyTrace {
    let mut trace = HodgkinHuxleyTrace::default();

    for timestep in 0..iterations {
        let current_input = if gaussian {
            input * hodgkin_huxley_neuron.get_gaussian_factor()
        } else {
            input
        };

        if hodgkin_huxley_neuron.step_and_spike(current_input) {
            hodgkin_huxley_neuron.last_firing_time = Some(timestep);
        }
        trace.record(hodgkin_huxley_neuron);
    }

    trace
}
