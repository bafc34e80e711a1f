//! # Point Neuron Dynamics
//!
//! `point_neuron_dynamics` is a package for simulating point neuron
//! biophysical models over explicit stimulus waveforms and for building
//! small neural engineering style networks where ensembles of rate based
//! neurons encode vectors and decode functions of them. Neuron models
//! implement the [`neuron::dynamics::PointNeuron`] trait so drivers and
//! analysis helpers can be written once and reused across models.
//! Simulation traces are rendered to `.png` charts through the [`plot`]
//! module.
//!
//! Implemented models:
//!
//! - Hodgkin Huxley with explicit sodium, potassium, and leak channels
//! - Izhikevich with the six classic firing class parameterizations
//! - Leaky integrate and fire with a closed form membrane update and
//!   refractory gating
//!
//! ## Example Code
//!
//! See the demos folder for complete plotting drivers.
//!
//! ### Izhikevich neuron with a step stimulus
//!
//! ```rust
//! use point_neuron_dynamics::neuron::{
//!     integrate_and_fire::{run_stimulus_izhikevich, IzhikevichNeuron},
//!     stimulus::Stimulus,
//! };
//!
//! // 200 ms at dt = 0.1 ms with a step of 10 starting at step 41
//! let mut neuron = IzhikevichNeuron::regular_spiking();
//! let stimulus = Stimulus::zeros(2001).with_step(41, 10.);
//!
//! let trace = run_stimulus_izhikevich(&mut neuron, stimulus.as_slice());
//!
//! assert_eq!(trace.voltages.len(), 2001);
//! // the trace clamps spikes to the apex value
//! assert!(trace.voltages.iter().all(|v| *v <= neuron.v_th));
//! ```
//!
//! ### Tuning curves of an ensemble
//!
//! ```rust
//! use point_neuron_dynamics::nef::{tuning_curves_1d, Ensemble};
//!
//! let ensemble = Ensemble::new(20, 1, 1.0, 42)?;
//! let (inputs, activities) = tuning_curves_1d(&ensemble, 50)?;
//!
//! assert_eq!(activities.nrows(), inputs.len());
//! assert_eq!(activities.ncols(), ensemble.n_neurons);
//! // firing rates are non negative
//! assert!(activities.iter().all(|rate| *rate >= 0.));
//! # Ok::<(), point_neuron_dynamics::error::NefError>(())
//! ```
//!
//! ### Decoding a function of a represented value
//!
//! ```rust
//! use point_neuron_dynamics::nef::network::{Network, Simulator, Source, Target};
//!
//! let mut network = Network::new(0);
//!
//! let input = network.add_node(1, |t| vec![(10. * t).sin() * 0.5]);
//! let ensemble = network.add_ensemble(100, 1)?;
//! let output = network.add_passthrough_node(1);
//!
//! network.connect(Source::Node(input), Target::Ensemble(ensemble))?;
//! network.connect_function(
//!     Source::Ensemble(ensemble),
//!     Target::Node(output),
//!     |x| vec![x[0] * x[0] * x[0]],
//! )?;
//!
//! let probe = network.probe(Source::Node(output), Some(0.01))?;
//!
//! let mut simulator = Simulator::new(network)?;
//! simulator.run(0.1);
//!
//! assert_eq!(simulator.probe_data(probe).len(), simulator.trange().len());
//! # Ok::<(), point_neuron_dynamics::error::NefError>(())
//! ```

pub mod distribution;
pub mod error;
pub mod nef;
pub mod neuron;
pub mod plot;
