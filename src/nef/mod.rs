//! A small neural engineering framework layer where ensembles of rate based
//! leaky integrate and fire neurons encode vectors through randomly sampled
//! encoders and decode functions of them through regularized least squares.
//!
//! [`network`] wires ensembles together with nodes, synaptically filtered
//! connections, and probes into a runnable spiking simulation.

pub mod network;

use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use rayon::prelude::*;

use crate::error::NefError;


/// Rate response of a leaky integrate and fire neuron
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLif {
    /// Membrane time constant (s)
    pub tau_rc: f32,
    /// Refractory period (s)
    pub tau_ref: f32,
}

impl Default for RateLif {
    fn default() -> Self {
        RateLif {
            tau_rc: 0.02, // membrane time constant (s)
            tau_ref: 0.002, // refractory period (s)
        }
    }
}

impl RateLif {
    /// Steady state firing rate (Hz) at the given input current, 0 at or
    /// below the threshold current of 1
    pub fn rate(&self, input_current: f32) -> f32 {
        if input_current <= 1. {
            return 0.;
        }

        1. / (self.tau_ref - self.tau_rc * (1. - 1. / input_current).ln())
    }

    /// Input current at which the neuron fires at the given rate,
    /// the rate must be positive and attainable given the refractory period
    pub fn current_for_rate(&self, rate: f32) -> f32 {
        1. / (1. - ((self.tau_ref - 1. / rate) / self.tau_rc).exp())
    }
}

/// An ensemble of rate leaky integrate and fire neurons representing a vector
/// within a given radius
#[derive(Debug, Clone)]
pub struct Ensemble {
    /// Number of neurons
    pub n_neurons: usize,
    /// Dimensionality of the represented vector
    pub dimensions: usize,
    /// Representational radius
    pub radius: f32,
    /// Rate neuron model
    pub neuron: RateLif,
    /// Unit length encoders (`n_neurons` by `dimensions`)
    pub encoders: Array2<f32>,
    /// Per neuron current gains
    pub gains: Array1<f32>,
    /// Per neuron bias currents
    pub biases: Array1<f32>,
}

impl Ensemble {
    /// Generates an ensemble with randomly sampled unit vector encoders,
    /// maximum rates uniform in [200, 400] Hz, and intercepts uniform in
    /// [-0.95, 0.95], gains and biases are solved so that each neuron
    /// starts firing at its intercept and reaches its maximum rate at the
    /// edge of the radius
    pub fn new(
        n_neurons: usize,
        dimensions: usize,
        radius: f32,
        seed: u64,
    ) -> Result<Self, NefError> {
        if n_neurons == 0 {
            return Err(NefError::EmptyEnsemble);
        }
        if dimensions == 0 {
            return Err(NefError::DimensionMismatch);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let neuron = RateLif::default();

        let mut encoders = Array2::zeros((n_neurons, dimensions));
        for mut row in encoders.rows_mut() {
            let mut norm = 0.;
            while norm == 0. {
                for value in row.iter_mut() {
                    *value = StandardNormal.sample(&mut rng);
                }
                norm = row.iter().map(|value: &f32| value * value).sum::<f32>().sqrt();
            }

            for value in row.iter_mut() {
                *value /= norm;
            }
        }

        let mut gains = Array1::zeros(n_neurons);
        let mut biases = Array1::zeros(n_neurons);
        for i in 0..n_neurons {
            let max_rate: f32 = rng.gen_range(200.0..400.0);
            let intercept: f32 = rng.gen_range(-0.95..0.95);

            let j_max = neuron.current_for_rate(max_rate);
            let gain = (j_max - 1.) / (1. - intercept);

            gains[i] = gain;
            biases[i] = 1. - gain * intercept;
        }

        Ok(Ensemble {
            n_neurons,
            dimensions,
            radius,
            neuron,
            encoders,
            gains,
            biases,
        })
    }

    fn input_currents_view(&self, x: ArrayView1<f32>) -> Array1<f32> {
        let mut currents = Array1::zeros(self.n_neurons);

        for (i, row) in self.encoders.rows().into_iter().enumerate() {
            let similarity = row.iter()
                .zip(x.iter())
                .map(|(e, value)| e * value)
                .sum::<f32>() / self.radius;

            currents[i] = self.gains[i] * similarity + self.biases[i];
        }

        currents
    }

    /// Input currents for every neuron at the given represented value
    pub fn input_currents(&self, x: &[f32]) -> Result<Array1<f32>, NefError> {
        if x.len() != self.dimensions {
            return Err(NefError::DimensionMismatch);
        }

        Ok(self.input_currents_view(ArrayView1::from(x)))
    }

    fn rates_view(&self, x: ArrayView1<f32>) -> Vec<f32> {
        self.input_currents_view(x)
            .iter()
            .map(|j| self.neuron.rate(*j))
            .collect()
    }

    /// Firing rates (Hz) for every neuron at the given represented value
    pub fn rates(&self, x: &[f32]) -> Result<Vec<f32>, NefError> {
        if x.len() != self.dimensions {
            return Err(NefError::DimensionMismatch);
        }

        Ok(self.rates_view(ArrayView1::from(x)))
    }

    /// Evaluates every neuron's firing rate over the given points, returns a
    /// points by neurons activity matrix, rows are evaluated in parallel
    pub fn activities(&self, points: &Array2<f32>) -> Result<Array2<f32>, NefError> {
        if points.ncols() != self.dimensions {
            return Err(NefError::DimensionMismatch);
        }

        let rows: Vec<ArrayView1<f32>> = points.axis_iter(Axis(0)).collect();
        let rates: Vec<Vec<f32>> = rows.par_iter()
            .map(|x| self.rates_view(*x))
            .collect();

        let flattened: Vec<f32> = rates.into_iter().flatten().collect();

        Array2::from_shape_vec((points.nrows(), self.n_neurons), flattened)
            .map_err(|_| NefError::DimensionMismatch)
    }

    /// Samples evaluation points uniformly from the ball of the ensemble's
    /// radius
    pub fn sample_eval_points(&self, count: usize, rng: &mut StdRng) -> Array2<f32> {
        let mut points = Array2::zeros((count, self.dimensions));

        for mut row in points.rows_mut() {
            let mut norm = 0.;
            while norm == 0. {
                for value in row.iter_mut() {
                    *value = StandardNormal.sample(rng);
                }
                norm = row.iter().map(|value: &f32| value * value).sum::<f32>().sqrt();
            }

            let unit: f32 = rng.gen_range(0.0..1.0f32);
            let scale = self.radius * unit.powf(1. / self.dimensions as f32) / norm;
            for value in row.iter_mut() {
                *value *= scale;
            }
        }

        points
    }
}

/// Solves for decoders mapping ensemble activity to the given targets with
/// L2 regularized least squares, `eval_points` is a points by dimensions
/// matrix and `targets` a points by output dimensions matrix, the returned
/// decoders are neurons by output dimensions
pub fn solve_decoders(
    ensemble: &Ensemble,
    eval_points: &Array2<f32>,
    targets: &Array2<f32>,
) -> Result<Array2<f32>, NefError> {
    let n_points = eval_points.nrows();
    if n_points == 0 {
        return Err(NefError::NoEvaluationPoints);
    }
    if targets.nrows() != n_points {
        return Err(NefError::DimensionMismatch);
    }

    let activities = ensemble.activities(eval_points)?;

    let max_activity = activities.iter().cloned().fold(0., f32::max);
    let sigma = 0.1 * max_activity;
    let regularization = n_points as f32 * sigma * sigma;

    let mut gram = activities.t().dot(&activities);
    for i in 0..gram.nrows() {
        gram[[i, i]] += regularization;
    }

    let rhs = activities.t().dot(targets);

    cholesky_solve(gram, &rhs)
}

/// Solves the symmetric positive definite system `a * x = b` through an in
/// place Cholesky factorization with forward and back substitution
fn cholesky_solve(mut a: Array2<f32>, b: &Array2<f32>) -> Result<Array2<f32>, NefError> {
    let n = a.nrows();

    for j in 0..n {
        for k in 0..j {
            let factor = a[[j, k]];
            for i in j..n {
                a[[i, j]] -= a[[i, k]] * factor;
            }
        }

        let diagonal = a[[j, j]];
        if diagonal <= 0. || !diagonal.is_finite() {
            return Err(NefError::GramNotPositiveDefinite);
        }

        let root = diagonal.sqrt();
        for i in j..n {
            a[[i, j]] /= root;
        }
    }

    let mut x = b.clone();
    for col in 0..x.ncols() {
        for i in 0..n {
            let mut sum = x[[i, col]];
            for k in 0..i {
                sum -= a[[i, k]] * x[[k, col]];
            }
            x[[i, col]] = sum / a[[i, i]];
        }

        for i in (0..n).rev() {
            let mut sum = x[[i, col]];
            for k in i + 1..n {
                sum -= a[[k, i]] * x[[k, col]];
            }
            x[[i, col]] = sum / a[[i, i]];
        }
    }

    Ok(x)
}

/// Evaluates the tuning curves of a one dimensional ensemble over an evenly
/// spaced grid spanning the radius, returns the input values and a points by
/// neurons activity matrix
pub fn tuning_curves_1d(
    ensemble: &Ensemble,
    samples: usize,
) -> Result<(Vec<f32>, Array2<f32>), NefError> {
    if ensemble.dimensions != 1 {
        return Err(NefError::DimensionMismatch);
    }

    let inputs: Vec<f32> = (0..samples)
        .map(|i| {
            let fraction = i as f32 / (samples.max(2) - 1) as f32;
            ensemble.radius * (2. * fraction - 1.)
        })
        .collect();

    let points = Array2::from_shape_vec((samples, 1), inputs.clone())
        .map_err(|_| NefError::DimensionMismatch)?;
    let activities = ensemble.activities(&points)?;

    Ok((inputs, activities))
}
