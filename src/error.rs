use thiserror::Error;

/// Failures a pipeline run can report. A run either fully succeeds or fails
/// with one of these; there is no partial-success mode.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Rejected before any stage ran.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The map function failed (or panicked) for one partition.
    #[error("map stage failed for partition {partition}")]
    MapStage {
        partition: usize,
        #[source]
        source: anyhow::Error,
    },

    /// The reduce function failed for one key.
    #[error("reduce stage failed for key {key}")]
    ReduceStage {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}
