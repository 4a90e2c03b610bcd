pub mod common;
pub mod error;
pub mod map_reduce_apps;
pub mod map_reduce_seq;
pub mod mr_parallel;
pub mod partition;
pub mod reduce;
pub mod shuffle;

pub use common::{MapReduce, MapReduceApp, Output};
pub use error::PipelineError;
pub use map_reduce_seq::SequentialMapReduce;
pub use mr_parallel::ParallelMapReduce;
