mod coordinator;
mod worker_pool;

use std::sync::Arc;

use async_trait::async_trait;

use crate::common::{MapReduce, MapReduceApp, Output};
use crate::error::PipelineError;
use coordinator::Coordinator;

/// Runs the pipeline with one worker thread per partition. Output is
/// identical to [`crate::map_reduce_seq::SequentialMapReduce`] for the same
/// input and app, whatever `worker_count` is.
pub struct ParallelMapReduce<A: MapReduceApp> {
    records: Vec<A::Record>,
    worker_count: usize,
    app: Arc<A>,
}

impl<A: MapReduceApp> ParallelMapReduce<A> {
    pub fn new(records: Vec<A::Record>, worker_count: usize, app: A) -> Self {
        Self {
            records,
            worker_count,
            app: Arc::new(app),
        }
    }
}

#[async_trait]
impl<A: MapReduceApp> MapReduce<A> for ParallelMapReduce<A> {
    async fn run(self) -> Result<Output<A>, PipelineError> {
        let coordinator = Coordinator::new(Arc::clone(&self.app), self.worker_count);
        coordinator.run(self.records)
    }
}
