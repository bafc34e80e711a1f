//! The [`PointNeuron`] trait for encapsulating single neuron dynamics along with
//! the accessor traits ([`CurrentVoltage`], [`IsSpiking`], [`LastFiringTime`],
//! [`Timestep`], [`GaussianFactor`]) shared by every model in the crate.

use crate::distribution::limited_distr;


/// Parameters to generate noise with a clamped normal distribution
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianParameters {
    /// Mean of distribution
    pub mean: f32,
    /// Standard deviation of distribution
    pub std: f32,
    /// Maximum cutoff value
    pub max: f32,
    /// Minimum cutoff value
    pub min: f32,
}

impl Default for GaussianParameters {
    fn default() -> Self {
        GaussianParameters {
            mean: 1.0, // center of norm distr
            std: 0.0, // std of norm distr
            max: 2.0, // maximum cutoff for norm distr
            min: 0.0, // minimum cutoff for norm distr
        }
    }
}

impl GaussianParameters {
    /// Generates a normally distributed random number clamped between
    /// a minimum and a maximum
    pub fn get_random_number(&self) -> f32 {
        limited_distr(self.mean, self.std, self.min, self.max)
    }
}

/// Gets current voltage (mV) of model
pub trait CurrentVoltage {
    fn get_current_voltage(&self) -> f32;
}

/// Gets whether the neuron is spiking
pub trait IsSpiking {
    fn is_spiking(&self) -> bool;
}

/// Handles the firing times of the neuron
pub trait LastFiringTime {
    /// Gets the last firing time of the neuron, (`None` if the neuron has not fired yet)
    fn get_last_firing_time(&self) -> Option<usize>;
    /// Sets the last firing time of the neuron, (use `None` to reset)
    fn set_last_firing_time(&mut self, timestep: Option<usize>);
}

/// Handles changes in simulation timestep information
pub trait Timestep {
    /// Retrieves timestep value (ms)
    fn get_dt(&self) -> f32;
    /// Updates instance with new timestep information
    fn set_dt(&mut self, dt: f32);
}

/// Gets a random factor to scale inputs with
pub trait GaussianFactor {
    fn get_gaussian_factor(&self) -> f32;
}

/// Handles dynamics of neurons that can take in an input current to update
/// membrane potential over a single timestep
pub trait PointNeuron:
    CurrentVoltage + Timestep + IsSpiking + LastFiringTime + GaussianFactor + Clone + Send + Sync
{
    /// Takes in an input current (relative units per model) and returns whether
    /// the model is spiking after the membrane potential is updated
    fn step_and_spike(&mut self, input_current: f32) -> bool;
}
