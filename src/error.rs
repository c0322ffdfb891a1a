use thiserror::Error;

/// Errors surfaced by the simulation library.
///
/// The computation itself cannot fail; errors only come from rejecting a
/// configuration up front or from the chart output at the end of a run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[cfg(feature = "chart")]
    #[error("Chart rendering failed: {0}")]
    Chart(#[from] rerun::RecordingStreamError),
}

pub type SimResult<T> = std::result::Result<T, SimError>;
