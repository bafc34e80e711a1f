//! Construction of stimulus current waveforms applied sample by sample
//! to a neuron, one sample per timestep

use std::ops::Range;


/// A stimulus current waveform
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stimulus {
    /// Stimulus current at each timestep
    pub samples: Vec<f32>,
}

impl Stimulus {
    /// Generates a zeroed stimulus of the given length
    pub fn zeros(length: usize) -> Self {
        Stimulus { samples: vec![0.; length] }
    }

    /// Generates a constant stimulus of the given length
    pub fn constant(length: usize, value: f32) -> Self {
        Stimulus { samples: vec![value; length] }
    }

    /// Generates a ramp stimulus that grows by `di` every timestep
    pub fn ramp(length: usize, di: f32) -> Self {
        Stimulus {
            samples: (0..length).map(|timestep| di * timestep as f32).collect(),
        }
    }

    /// Adds the given amplitude to every sample from the onset index onward
    pub fn with_step(mut self, onset: usize, amplitude: f32) -> Self {
        for sample in self.samples.iter_mut().skip(onset) {
            *sample += amplitude;
        }

        self
    }

    /// Adds the given amplitude over the index range, clipped to the
    /// stimulus length
    pub fn with_pulse(mut self, range: Range<usize>, amplitude: f32) -> Self {
        let end = range.end.min(self.samples.len());

        for sample in &mut self.samples[range.start.min(end)..end] {
            *sample += amplitude;
        }

        self
    }

    /// Returns the samples as a slice
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples in the stimulus
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the stimulus has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
