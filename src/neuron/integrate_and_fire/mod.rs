//! Integrate and fire models that implement [`PointNeuron`], including a leaky
//! integrate and fire neuron with a closed form membrane update and the
//! Izhikevich hybrid model with its classic firing class parameterizations

use point_neuron_derive::PointNeuronBase;
use super::dynamics::{
    CurrentVoltage, GaussianFactor, GaussianParameters, IsSpiking,
    LastFiringTime, PointNeuron, Timestep,
};


/// A leaky integrate and fire neuron
///
/// The membrane potential decays toward the steady state value
/// `e_l + r_m * i` with an exact exponential update rather than a forward
/// Euler step, spikes reset the membrane to the resting potential and hold
/// it there for the refractory period
#[derive(Debug, Clone, PointNeuronBase)]
pub struct LeakyIntegrateAndFireNeuron {
    /// Membrane potential (mV)
    pub current_voltage: f32,
    /// Voltage threshold (mV)
    pub v_th: f32,
    /// Spike apex recorded in traces (mV)
    pub v_spike: f32,
    /// Resting potential and reset value (mV)
    pub e_l: f32,
    /// Membrane resistance (kOhm)
    pub r_m: f32,
    /// Membrane capacitance (uF)
    pub c_m: f32,
    /// Scaling applied to the membrane time constant
    pub tau_factor: f32,
    /// Counter for refractory period
    pub refractory_count: f32,
    /// Total refractory period (ms)
    pub tref: f32,
    /// Time step (ms)
    pub dt: f32,
    /// Whether the neuron is spiking
    pub is_spiking: bool,
    /// Last timestep the neuron has spiked
    pub last_firing_time: Option<usize>,
    /// Parameters used in generating noise
    pub gaussian_params: GaussianParameters,
}

impl Default for LeakyIntegrateAndFireNeuron {
    fn default() -> Self {
        LeakyIntegrateAndFireNeuron {
            current_voltage: -70., // initial potential (mV)
            v_th: -40., // spike threshold (mV)
            v_spike: 50., // spike apex (mV)
            e_l: -70., // resting potential (mV)
            r_m: 1., // membrane resistance (kOhm)
            c_m: 5., // membrane capacitance (uF)
            tau_factor: 6., // membrane time constant scaling
            refractory_count: 0.,
            tref: 1., // refractory time (ms)
            dt: 0.1, // simulation time step (ms)
            is_spiking: false,
            last_firing_time: None,
            gaussian_params: GaussianParameters::default(),
        }
    }
}

impl LeakyIntegrateAndFireNeuron {
    /// Membrane time constant (ms)
    pub fn tau_m(&self) -> f32 {
        self.r_m * self.c_m * self.tau_factor
    }

    /// Calculates the membrane potential after one timestep given an input
    /// current using the exact exponential decay toward the steady state
    pub fn exponential_membrane_update(&self, i: f32) -> f32 {
        let v_inf = self.e_l + self.r_m * i;

        v_inf + (self.current_voltage - v_inf) * (-self.dt / self.tau_m()).exp()
    }

    /// Determines whether the neuron is spiking and resets the voltage
    /// if so, also handles refractory period
    pub fn handle_spiking(&mut self) -> bool {
        let mut is_spiking = false;

        if self.refractory_count > 0. {
            self.current_voltage = self.e_l;
            self.refractory_count -= 1.;
        } else if self.current_voltage >= self.v_th {
            is_spiking = !is_spiking;
            self.current_voltage = self.e_l;
            self.refractory_count = self.tref / self.dt;
        }

        self.is_spiking = is_spiking;

        is_spiking
    }
}

impl PointNeuron for LeakyIntegrateAndFireNeuron {
    fn step_and_spike(&mut self, input_current: f32) -> bool {
        self.current_voltage = self.exponential_membrane_update(input_current);

        self.handle_spiking()
    }
}

/// Iterates the given neuron over a stimulus waveform where each sample is
/// applied for one timestep, returns the voltage trace with spike steps
/// clamped to the spike apex
pub fn run_stimulus_lif(
    cell: &mut LeakyIntegrateAndFireNeuron,
    stimulus: &[f32],
) -> Vec<f32> {
    let mut voltages: Vec<f32> = Vec::with_capacity(stimulus.len());

    for (timestep, input) in stimulus.iter().enumerate() {
        let is_spiking = cell.step_and_spike(*input);

        if is_spiking {
            cell.last_firing_time = Some(timestep);
            voltages.push(cell.v_spike);
        } else {
            voltages.push(cell.current_voltage);
        }
    }

    voltages
}

/// Drives the given neuron with a current ramp that grows by `di` every step
/// and returns the ramp currents alongside the instantaneous spike frequency
/// (1/ms) at each step, where the frequency is the reciprocal of the most
/// recent interspike interval and 0 before the second spike
pub fn run_ramp_fi_curve(
    cell: &mut LeakyIntegrateAndFireNeuron,
    di: f32,
    iterations: usize,
) -> (Vec<f32>, Vec<f32>) {
    let mut currents: Vec<f32> = Vec::with_capacity(iterations);
    let mut frequencies: Vec<f32> = Vec::with_capacity(iterations);
    let mut spike_times: Vec<f32> = Vec::new();

    for timestep in 0..iterations {
        let input = di * timestep as f32;

        let frequency = if spike_times.len() > 1 {
            1. / (spike_times[spike_times.len() - 1] - spike_times[spike_times.len() - 2])
        } else {
            0.
        };

        if cell.step_and_spike(input) {
            cell.last_firing_time = Some(timestep);
            spike_times.push(timestep as f32 * cell.dt);
        }

        currents.push(input);
        frequencies.push(frequency);
    }

    (currents, frequencies)
}

/// An Izhikevich neuron
#[derive(Debug, Clone, PointNeuronBase)]
pub struct IzhikevichNeuron {
    /// Membrane potential (mV)
    pub current_voltage: f32,
    /// Spike apex cutoff (mV)
    pub v_th: f32,
    /// Voltage initialization value (mV)
    pub v_init: f32,
    /// Controls speed of recovery
    pub a: f32,
    /// Controls sensitivity of recovery to subthreshold voltage fluctuations
    pub b: f32,
    /// After spike reset value for voltage (mV)
    pub c: f32,
    /// After spike reset value for recovery
    pub d: f32,
    /// Recovery value
    pub w_value: f32,
    /// Recovery value initialization
    pub w_init: f32,
    /// Time step (ms)
    pub dt: f32,
    /// Whether the neuron is spiking
    pub is_spiking: bool,
    /// Last timestep the neuron has spiked
    pub last_firing_time: Option<usize>,
    /// Parameters used in generating noise
    pub gaussian_params: GaussianParameters,
}

impl Default for IzhikevichNeuron {
    fn default() -> Self {
        IzhikevichNeuron::with_params(0.02, 0.2, -65., 8.)
    }
}

impl IzhikevichNeuron {
    /// Generates a neuron with the given `a`, `b`, `c`, and `d` parameters
    /// with the recovery value initialized to `b * v_init`
    pub fn with_params(a: f32, b: f32, c: f32, d: f32) -> Self {
        let v_init = -70.;

        IzhikevichNeuron {
            current_voltage: v_init,
            v_th: 30., // spike apex (mV)
            v_init,
            a,
            b,
            c,
            d,
            w_value: b * v_init,
            w_init: b * v_init,
            dt: 0.1, // simulation time step (ms)
            is_spiking: false,
            last_firing_time: None,
            gaussian_params: GaussianParameters::default(),
        }
    }

    /// Regular spiking (RS) parameterization
    pub fn regular_spiking() -> Self {
        IzhikevichNeuron::with_params(0.02, 0.2, -65., 8.)
    }

    /// Intrinsically bursting (IB) parameterization
    pub fn intrinsically_bursting() -> Self {
        IzhikevichNeuron::with_params(0.02, 0.2, -55., 4.)
    }

    /// Chattering (CH) parameterization
    pub fn chattering() -> Self {
        IzhikevichNeuron::with_params(0.02, 0.2, -50., 2.)
    }

    /// Fast spiking (FS) parameterization
    pub fn fast_spiking() -> Self {
        IzhikevichNeuron::with_params(0.1, 0.2, -65., 2.)
    }

    /// Resonator (RZ) parameterization
    pub fn resonator() -> Self {
        IzhikevichNeuron::with_params(0.1, 0.26, -65., 2.)
    }

    /// Low threshold spiking (LTS) parameterization
    pub fn low_threshold_spiking() -> Self {
        IzhikevichNeuron::with_params(0.02, 0.25, -65., 2.)
    }

    /// Calculates the change in voltage given an input current
    pub fn izhikevich_get_dv_change(&self, i: f32) -> f32 {
        (
            0.04 * self.current_voltage.powf(2.0) +
            5. * self.current_voltage + 140. - self.w_value + i
        ) * self.dt
    }

    /// Calculates how the recovery value changes
    pub fn izhikevich_get_dw_change(&self) -> f32 {
        (
            self.a * (self.b * self.current_voltage - self.w_value)
        ) * self.dt
    }

    /// Determines whether the neuron is spiking, resets the voltage and
    /// updates the recovery value if spiking
    pub fn izhikevich_handle_spiking(&mut self) -> bool {
        let mut is_spiking = false;

        if self.current_voltage > self.v_th {
            is_spiking = !is_spiking;
            self.current_voltage = self.c;
            self.w_value += self.d;
        }

        self.is_spiking = is_spiking;

        is_spiking
    }
}

impl PointNeuron for IzhikevichNeuron {
    fn step_and_spike(&mut self, input_current: f32) -> bool {
        // voltage is advanced before the recovery update reads it
        let dv = self.izhikevich_get_dv_change(input_current);
        self.current_voltage += dv;

        let dw = self.izhikevich_get_dw_change();
        self.w_value += dw;

        self.izhikevich_handle_spiking()
    }
}

/// Membrane potential and recovery value recorded over a simulation,
/// voltages at spike steps are clamped to the spike apex
#[derive(Debug, Clone, Default)]
pub struct IzhikevichTrace {
    /// Membrane potential over time (mV)
    pub voltages: Vec<f32>,
    /// Recovery value over time
    pub recoveries: Vec<f32>,
}

/// Iterates the given neuron over a stimulus waveform where each sample is
/// applied for one timestep, returns the apex clamped voltage trace and the
/// recovery value over time
pub fn run_stimulus_izhikevich(
    izhikevich_neuron: &mut IzhikevichNeuron,
    stimulus: &[f32],
) -> IzhikevichTrace {
    let mut trace = IzhikevichTrace::default();

    for (timestep, input) in stimulus.iter().enumerate() {
        let is_spiking = izhikevich_neuron.step_and_spike(*input);

        if is_spiking {
            izhikevich_neuron.last_firing_time = Some(timestep);
            trace.voltages.push(izhikevich_neuron.v_th);
        } else {
            trace.voltages.push(izhikevich_neuron.current_voltage);
        }
        trace.recoveries.push(izhikevich_neuron.w_value);
    }

    trace
}
