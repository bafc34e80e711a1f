//! Point neuron models along with shared simulation drivers and
//! spike train analysis helpers.
//!
//! - [`hodgkin_huxley`] : conductance based model with explicit ion channels
//! - [`integrate_and_fire`] : leaky integrate and fire and Izhikevich models
//! - [`dynamics`] : traits shared by every model
//! - [`stimulus`] : stimulus current waveform construction

pub mod dynamics;
pub mod hodgkin_huxley;
pub mod integrate_and_fire;
pub mod stimulus;

use dynamics::PointNeuron;


/// Takes in a static current as an input and iterates the given
/// neuron for a given duration, set `gaussian` to true to add
/// normally distributed noise to the input as it iterates,
/// returns the voltages from the neuron over time and records
/// firing times on the neuron as it spikes
pub fn run_static_input<T: PointNeuron>(
    cell: &mut T,
    input: f32,
    gaussian: bool,
    iterations: usize,
) -> Vec<f32> {
    let mut voltages: Vec<f32> = Vec::with_capacity(iterations);

    for timestep in 0..iterations {
        let is_spiking = if gaussian {
            cell.step_and_spike(cell.get_gaussian_factor() * input)
        } else {
            cell.step_and_spike(input)
        };

        if is_spiking {
            cell.set_last_firing_time(Some(timestep));
        }

        voltages.push(cell.get_current_voltage());
    }

    voltages
}

/// Iterates the given neuron over a stimulus waveform where each sample
/// is applied for one timestep, returns the voltages over time and records
/// firing times on the neuron as it spikes
pub fn run_stimulus<T: PointNeuron>(cell: &mut T, stimulus: &[f32]) -> Vec<f32> {
    let mut voltages: Vec<f32> = Vec::with_capacity(stimulus.len());

    for (timestep, input) in stimulus.iter().enumerate() {
        if cell.step_and_spike(*input) {
            cell.set_last_firing_time(Some(timestep));
        }

        voltages.push(cell.get_current_voltage());
    }

    voltages
}

/// Returns indices of local maxima above the given threshold in a voltage
/// trace, maxima closer together than `min_separation` steps are merged
/// keeping the larger of the two
pub fn find_peaks(voltages: &[f32], threshold: f32, min_separation: usize) -> Vec<usize> {
    let mut peaks: Vec<usize> = Vec::new();

    for i in 1..voltages.len().saturating_sub(1) {
        if voltages[i] <= threshold {
            continue;
        }

        if voltages[i] >= voltages[i - 1] && voltages[i] > voltages[i + 1] {
            if let Some(&last) = peaks.last() {
                if i - last < min_separation {
                    if voltages[i] > voltages[last] {
                        *peaks.last_mut().unwrap() = i;
                    }

                    continue;
                }
            }

            peaks.push(i);
        }
    }

    peaks
}

/// Converts spike timestep indices to instantaneous frequencies (1/ms),
/// each frequency is the reciprocal of the interval between a spike and
/// the previous one
pub fn interspike_interval_frequencies(spike_indices: &[usize], dt: f32) -> Vec<f32> {
    spike_indices.windows(2)
        .map(|pair| 1. / ((pair[1] - pair[0]) as f32 * dt))
        .collect()
}
