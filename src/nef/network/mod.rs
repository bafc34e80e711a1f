//! Wiring of nodes, ensembles, synaptically filtered connections, and probes
//! into a runnable spiking simulation

use ndarray::{Array1, Array2, ArrayView1};
use rand::{rngs::StdRng, SeedableRng};

use crate::error::NefError;
use super::{solve_decoders, Ensemble};


/// Default lowpass synapse time constant (s)
pub const DEFAULT_SYNAPSE: f32 = 0.005;
/// Default simulation timestep (s)
pub const DEFAULT_DT: f32 = 0.001;
/// Number of evaluation points sampled per decoder solve
pub const EVAL_POINT_COUNT: usize = 500;

/// Identifier of a node within a network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub usize);

/// Identifier of an ensemble within a network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnsembleId(pub usize);

/// Identifier of a probe within a network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeId(pub usize);

/// Source endpoint of a connection or probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Node(NodeId),
    Ensemble(EnsembleId),
}

/// Target endpoint of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Node(NodeId),
    Ensemble(EnsembleId),
}

/// How a node produces its output each timestep
pub enum NodeOutput {
    /// Output computed from the simulation time (s)
    Function(Box<dyn Fn(f32) -> Vec<f32> + Send + Sync>),
    /// Constant output
    Constant(Vec<f32>),
    /// Output mirrors the node's summed connection input
    Passthrough,
}

/// A non neural signal source or sink
pub struct Node {
    /// Dimensionality of the node's output
    pub size: usize,
    /// Output rule
    pub output: NodeOutput,
}

/// A directed connection between two objects in a network
pub struct Connection {
    /// Where the connected value comes from
    pub source: Source,
    /// Where the connected value is applied
    pub target: Target,
    /// Lowpass synapse time constant (s), `None` applies the value unfiltered
    pub synapse: Option<f32>,
    /// Function decoded along the connection, identity if `None`
    pub function: Option<Box<dyn Fn(&[f32]) -> Vec<f32> + Send + Sync>>,
}

/// Records the filtered output of a source over time
pub struct Probe {
    /// Probed source
    pub source: Source,
    /// Lowpass synapse time constant (s), `None` records the value unfiltered
    pub synapse: Option<f32>,
}

/// A collection of nodes, ensembles, connections, and probes
pub struct Network {
    /// Nodes in the network
    pub nodes: Vec<Node>,
    /// Ensembles in the network
    pub ensembles: Vec<Ensemble>,
    /// Connections in the network
    pub connections: Vec<Connection>,
    /// Probes in the network
    pub probes: Vec<Probe>,
    /// Seed for ensemble generation and decoder evaluation points
    pub seed: u64,
}

impl Network {
    /// Generates an empty network with the given seed
    pub fn new(seed: u64) -> Self {
        Network {
            nodes: Vec::new(),
            ensembles: Vec::new(),
            connections: Vec::new(),
            probes: Vec::new(),
            seed,
        }
    }

    /// Adds a node whose output is a function of simulation time (s)
    pub fn add_node<F>(&mut self, size: usize, output: F) -> NodeId
    where
        F: Fn(f32) -> Vec<f32> + Send + Sync + 'static,
    {
        self.nodes.push(Node { size, output: NodeOutput::Function(Box::new(output)) });

        NodeId(self.nodes.len() - 1)
    }

    /// Adds a node with a constant output
    pub fn add_constant_node(&mut self, values: Vec<f32>) -> NodeId {
        self.nodes.push(Node { size: values.len(), output: NodeOutput::Constant(values) });

        NodeId(self.nodes.len() - 1)
    }

    /// Adds a passthrough node that outputs its summed connection input
    pub fn add_passthrough_node(&mut self, size: usize) -> NodeId {
        self.nodes.push(Node { size, output: NodeOutput::Passthrough });

        NodeId(self.nodes.len() - 1)
    }

    /// Adds an ensemble with a radius of 1
    pub fn add_ensemble(&mut self, n_neurons: usize, dimensions: usize) -> Result<EnsembleId, NefError> {
        self.add_ensemble_with_radius(n_neurons, dimensions, 1.)
    }

    /// Adds an ensemble with the given radius, the ensemble seed is derived
    /// from the network seed and the ensemble's position
    pub fn add_ensemble_with_radius(
        &mut self,
        n_neurons: usize,
        dimensions: usize,
        radius: f32,
    ) -> Result<EnsembleId, NefError> {
        let seed = self.seed.wrapping_add(self.ensembles.len() as u64 + 1);
        let ensemble = Ensemble::new(n_neurons, dimensions, radius, seed)?;

        self.ensembles.push(ensemble);

        Ok(EnsembleId(self.ensembles.len() - 1))
    }

    /// Connects a source to a target with the default lowpass synapse
    pub fn connect(&mut self, source: Source, target: Target) -> Result<(), NefError> {
        self.connect_with(source, target, Some(DEFAULT_SYNAPSE), None)
    }

    /// Connects a source to a target decoding the given function along the
    /// connection with the default lowpass synapse
    pub fn connect_function<F>(
        &mut self,
        source: Source,
        target: Target,
        function: F,
    ) -> Result<(), NefError>
    where
        F: Fn(&[f32]) -> Vec<f32> + Send + Sync + 'static,
    {
        self.connect_with(source, target, Some(DEFAULT_SYNAPSE), Some(Box::new(function)))
    }

    /// Connects a source to a target with an explicit synapse and an optional
    /// decoded function, function output dimensions are checked when the
    /// simulator is built
    pub fn connect_with(
        &mut self,
        source: Source,
        target: Target,
        synapse: Option<f32>,
        function: Option<Box<dyn Fn(&[f32]) -> Vec<f32> + Send + Sync>>,
    ) -> Result<(), NefError> {
        self.check_source(source)?;
        self.check_target(target)?;

        if function.is_none() && self.source_size(source) != self.target_size(target) {
            return Err(NefError::DimensionMismatch);
        }

        self.connections.push(Connection { source, target, synapse, function });

        Ok(())
    }

    /// Adds a probe on the given source with its own lowpass synapse
    pub fn probe(&mut self, source: Source, synapse: Option<f32>) -> Result<ProbeId, NefError> {
        self.check_source(source)?;

        self.probes.push(Probe { source, synapse });

        Ok(ProbeId(self.probes.len() - 1))
    }

    fn check_source(&self, source: Source) -> Result<(), NefError> {
        match source {
            Source::Node(NodeId(id)) if id >= self.nodes.len() => Err(NefError::SourceNotFound),
            Source::Ensemble(EnsembleId(id)) if id >= self.ensembles.len() => Err(NefError::SourceNotFound),
            _ => Ok(()),
        }
    }

    fn check_target(&self, target: Target) -> Result<(), NefError> {
        match target {
            Target::Node(NodeId(id)) => {
                if id >= self.nodes.len() {
                    return Err(NefError::TargetNotFound);
                }
                // only passthrough nodes can take an input
                match self.nodes[id].output {
                    NodeOutput::Passthrough => Ok(()),
                    _ => Err(NefError::InvalidTarget),
                }
            },
            Target::Ensemble(EnsembleId(id)) if id >= self.ensembles.len() => Err(NefError::TargetNotFound),
            _ => Ok(()),
        }
    }

    fn source_size(&self, source: Source) -> usize {
        match source {
            Source::Node(NodeId(id)) => self.nodes[id].size,
            Source::Ensemble(EnsembleId(id)) => self.ensembles[id].dimensions,
        }
    }

    fn target_size(&self, target: Target) -> usize {
        match target {
            Target::Node(NodeId(id)) => self.nodes[id].size,
            Target::Ensemble(EnsembleId(id)) => self.ensembles[id].dimensions,
        }
    }
}

/// A first order lowpass filter over a vector signal
#[derive(Debug, Clone)]
struct Lowpass {
    decay: f32,
    state: Vec<f32>,
}

impl Lowpass {
    /// `synapse` of `None` passes the input through unfiltered
    fn new(synapse: Option<f32>, dt: f32, size: usize) -> Self {
        let decay = match synapse {
            Some(tau) if tau > 0. => (-dt / tau).exp(),
            _ => 0.,
        };

        Lowpass { decay, state: vec![0.; size] }
    }

    fn step(&mut self, input: &[f32]) {
        for (state, value) in self.state.iter_mut().zip(input.iter()) {
            *state = self.decay * *state + (1. - self.decay) * value;
        }
    }
}

/// Spiking state of one ensemble during a simulation, membrane potentials
/// are normalized so that neurons spike on crossing 1
#[derive(Debug, Clone)]
struct SpikingState {
    voltages: Array1<f32>,
    refractory: Array1<f32>,
}

/// Steps a network's neurons over time, decoding ensemble outputs through
/// solved decoders and recording probed signals
pub struct Simulator {
    network: Network,
    dt: f32,
    time: f32,
    spiking: Vec<SpikingState>,
    spike_outputs: Vec<Array1<f32>>,
    node_outputs: Vec<Vec<f32>>,
    connection_decoders: Vec<Option<Array2<f32>>>,
    connection_filters: Vec<Lowpass>,
    probe_decoders: Vec<Option<Array2<f32>>>,
    probe_filters: Vec<Lowpass>,
    probe_data: Vec<Vec<Vec<f32>>>,
    times: Vec<f32>,
}

impl Simulator {
    /// Builds a simulator with the default timestep, solving decoders for
    /// every ensemble sourced connection and probe
    pub fn new(network: Network) -> Result<Self, NefError> {
        Simulator::with_dt(network, DEFAULT_DT)
    }

    /// Builds a simulator with the given timestep (s)
    pub fn with_dt(network: Network, dt: f32) -> Result<Self, NefError> {
        let mut rng = StdRng::seed_from_u64(network.seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));

        let spiking = network.ensembles.iter()
            .map(|ensemble| SpikingState {
                voltages: Array1::zeros(ensemble.n_neurons),
                refractory: Array1::zeros(ensemble.n_neurons),
            })
            .collect();
        let spike_outputs = network.ensembles.iter()
            .map(|ensemble| Array1::zeros(ensemble.n_neurons))
            .collect();
        let node_outputs = network.nodes.iter()
            .map(|node| vec![0.; node.size])
            .collect();

        let mut connection_decoders = Vec::with_capacity(network.connections.len());
        let mut connection_filters = Vec::with_capacity(network.connections.len());
        for connection in network.connections.iter() {
            let target_size = network.target_size(connection.target);

            let decoders = match connection.source {
                Source::Ensemble(EnsembleId(id)) => {
                    let ensemble = &network.ensembles[id];
                    let decoders = solve_connection_decoders(
                        ensemble,
                        connection.function.as_deref(),
                        target_size,
                        &mut rng,
                    )?;

                    Some(decoders)
                },
                Source::Node(NodeId(id)) => {
                    // node functions are applied directly at runtime, the
                    // output size is only known by evaluating one call
                    match &connection.function {
                        Some(function) => {
                            let output = function(&vec![0.; network.nodes[id].size]);
                            if output.len() != target_size {
                                return Err(NefError::DimensionMismatch);
                            }
                        },
                        None => {
                            if network.nodes[id].size != target_size {
                                return Err(NefError::DimensionMismatch);
                            }
                        },
                    }

                    None
                },
            };

            connection_decoders.push(decoders);
            connection_filters.push(Lowpass::new(connection.synapse, dt, target_size));
        }

        let mut probe_decoders = Vec::with_capacity(network.probes.len());
        let mut probe_filters = Vec::with_capacity(network.probes.len());
        for probe in network.probes.iter() {
            let (decoders, size) = match probe.source {
                Source::Ensemble(EnsembleId(id)) => {
                    let ensemble = &network.ensembles[id];
                    let decoders = solve_connection_decoders(ensemble, None, ensemble.dimensions, &mut rng)?;

                    (Some(decoders), ensemble.dimensions)
                },
                Source::Node(NodeId(id)) => (None, network.nodes[id].size),
            };

            probe_decoders.push(decoders);
            probe_filters.push(Lowpass::new(probe.synapse, dt, size));
        }

        let probe_data = network.probes.iter().map(|_| Vec::new()).collect();

        Ok(Simulator {
            network,
            dt,
            time: 0.,
            spiking,
            spike_outputs,
            node_outputs,
            connection_decoders,
            connection_filters,
            probe_decoders,
            probe_filters,
            probe_data,
            times: Vec::new(),
        })
    }

    /// Runs the simulation for the given duration (s)
    pub fn run(&mut self, duration: f32) {
        let steps = (duration / self.dt).round() as usize;

        for _ in 0..steps {
            self.step();
        }
    }

    /// Advances the simulation by a single timestep
    pub fn step(&mut self) {
        self.time += self.dt;

        // non passthrough node outputs
        for (output, node) in self.node_outputs.iter_mut().zip(self.network.nodes.iter()) {
            match &node.output {
                NodeOutput::Function(function) => *output = function(self.time),
                NodeOutput::Constant(values) => *output = values.clone(),
                NodeOutput::Passthrough => {},
            }
        }

        // ensemble inputs from the connection filters of the previous step
        let mut ensemble_inputs: Vec<Vec<f32>> = self.network.ensembles.iter()
            .map(|ensemble| vec![0.; ensemble.dimensions])
            .collect();
        for (connection, filter) in self.network.connections.iter().zip(self.connection_filters.iter()) {
            if let Target::Ensemble(EnsembleId(id)) = connection.target {
                for (input, value) in ensemble_inputs[id].iter_mut().zip(filter.state.iter()) {
                    *input += value;
                }
            }
        }

        // spiking neuron update
        for (id, ensemble) in self.network.ensembles.iter().enumerate() {
            let currents = ensemble.input_currents_view(ArrayView1::from(&ensemble_inputs[id][..]));
            let state = &mut self.spiking[id];
            let spikes = &mut self.spike_outputs[id];

            for i in 0..ensemble.n_neurons {
                spikes[i] = 0.;

                if state.refractory[i] > 0. {
                    state.refractory[i] -= self.dt;
                    state.voltages[i] = 0.;
                    continue;
                }

                let dv = (currents[i] - state.voltages[i]) * self.dt / ensemble.neuron.tau_rc;
                state.voltages[i] = (state.voltages[i] + dv).max(0.);

                if state.voltages[i] >= 1. {
                    spikes[i] = 1. / self.dt;
                    state.voltages[i] = 0.;
                    state.refractory[i] = ensemble.neuron.tau_ref;
                }
            }
        }

        // connection filters see this step's source outputs
        for (index, connection) in self.network.connections.iter().enumerate() {
            let value = match connection.source {
                Source::Ensemble(EnsembleId(id)) => match &self.connection_decoders[index] {
                    Some(decoders) => self.spike_outputs[id].dot(decoders).to_vec(),
                    None => Vec::new(),
                },
                Source::Node(NodeId(id)) => match &connection.function {
                    Some(function) => function(&self.node_outputs[id]),
                    None => self.node_outputs[id].clone(),
                },
            };

            self.connection_filters[index].step(&value);
        }

        // passthrough node outputs from their freshly updated inputs
        for (node_index, node) in self.network.nodes.iter().enumerate() {
            if let NodeOutput::Passthrough = node.output {
                let mut summed = vec![0.; node.size];
                for (connection, filter) in self.network.connections.iter().zip(self.connection_filters.iter()) {
                    if connection.target == Target::Node(NodeId(node_index)) {
                        for (input, value) in summed.iter_mut().zip(filter.state.iter()) {
                            *input += value;
                        }
                    }
                }

                self.node_outputs[node_index] = summed;
            }
        }

        // probes
        for (index, probe) in self.network.probes.iter().enumerate() {
            let value = match probe.source {
                Source::Ensemble(EnsembleId(id)) => match &self.probe_decoders[index] {
                    Some(decoders) => self.spike_outputs[id].dot(decoders).to_vec(),
                    None => Vec::new(),
                },
                Source::Node(NodeId(id)) => self.node_outputs[id].clone(),
            };

            self.probe_filters[index].step(&value);
            self.probe_data[index].push(self.probe_filters[index].state.clone());
        }

        self.times.push(self.time);
    }

    /// Recorded values of the given probe, one vector per timestep
    pub fn probe_data(&self, probe: ProbeId) -> &[Vec<f32>] {
        &self.probe_data[probe.0]
    }

    /// Simulation times (s) of every recorded step
    pub fn trange(&self) -> &[f32] {
        &self.times
    }

    /// Simulation timestep (s)
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// The network being simulated
    pub fn network(&self) -> &Network {
        &self.network
    }
}

/// Solves decoders for an ensemble sourced connection by sampling evaluation
/// points in the radius ball and fitting the decoded function over them
fn solve_connection_decoders(
    ensemble: &Ensemble,
    function: Option<&(dyn Fn(&[f32]) -> Vec<f32> + Send + Sync)>,
    target_size: usize,
    rng: &mut StdRng,
) -> Result<Array2<f32>, NefError> {
    let eval_points = ensemble.sample_eval_points(EVAL_POINT_COUNT, rng);

    let mut targets = Array2::zeros((eval_points.nrows(), target_size));
    for (point, mut target_row) in eval_points.rows().into_iter().zip(targets.rows_mut()) {
        let x: Vec<f32> = point.to_vec();
        let value = match function {
            Some(function) => function(&x),
            None => x,
        };

        if value.len() != target_size {
            return Err(NefError::DimensionMismatch);
        }

        for (target, output) in target_row.iter_mut().zip(value.iter()) {
            *target = *output;
        }
    }

    solve_decoders(ensemble, &eval_points, &targets)
}
