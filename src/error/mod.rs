use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for potential ensemble network errors
pub enum NefError {
    /// Ensemble must have at least one neuron
    EmptyEnsemble,
    /// Source id cannot be found in the network
    SourceNotFound,
    /// Target id cannot be found in the network
    TargetNotFound,
    /// Connected objects do not have compatible dimensions
    DimensionMismatch,
    /// Connection target cannot take an input
    InvalidTarget,
    /// Gram matrix in decoder solve is not positive definite
    GramNotPositiveDefinite,
    /// Decoder solve needs at least one evaluation point
    NoEvaluationPoints,
}

impl Display for NefError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            NefError::EmptyEnsemble => "Ensemble must have at least one neuron",
            NefError::SourceNotFound => "Source id not present in network",
            NefError::TargetNotFound => "Target id not present in network",
            NefError::DimensionMismatch => "Connected objects must have compatible dimensions",
            NefError::InvalidTarget => "Connection target cannot take an input",
            NefError::GramNotPositiveDefinite => "Gram matrix is not positive definite, try more evaluation points or more regularization",
            NefError::NoEvaluationPoints => "Decoder solve needs at least one evaluation point",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for NefError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for potential plotting errors
pub enum PlotError {
    /// Chart backend could not draw or write the output file
    Backend(String),
    /// Series must share a length with the x axis values
    MismatchedSeriesLength,
    /// Chart needs at least one series
    EmptyChart,
}

impl Display for PlotError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PlotError::Backend(msg) => write!(f, "Chart backend error: {}", msg),
            PlotError::MismatchedSeriesLength => write!(f, "Series must have the same length as the x axis values"),
            PlotError::EmptyChart => write!(f, "Chart must have at least one series"),
        }
    }
}

impl Debug for PlotError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum PointNeuronDynamicsError {
    /// Errors related to ensemble networks and decoder solving
    NefRelatedError(NefError),
    /// Errors related to plotting
    PlotRelatedError(PlotError),
}

impl Display for PointNeuronDynamicsError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PointNeuronDynamicsError::NefRelatedError(err) => write!(f, "{}", err),
            PointNeuronDynamicsError::PlotRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for PointNeuronDynamicsError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<NefError> for PointNeuronDynamicsError {
    fn from(err: NefError) -> PointNeuronDynamicsError {
        PointNeuronDynamicsError::NefRelatedError(err)
    }
}

impl From<PlotError> for PointNeuronDynamicsError {
    fn from(err: PlotError) -> PointNeuronDynamicsError {
        PointNeuronDynamicsError::PlotRelatedError(err)
    }
}
