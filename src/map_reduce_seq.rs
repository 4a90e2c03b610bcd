use std::sync::Arc;

use async_trait::async_trait;

use crate::common::{MapReduce, MapReduceApp, Output};
use crate::error::PipelineError;
use crate::reduce::reduce_groups;
use crate::shuffle::group_pairs;

/// Runs the whole pipeline inline on the calling thread. Same contract and
/// same output as the parallel runner; useful as a baseline and for small
/// inputs where spawning workers is not worth it.
pub struct SequentialMapReduce<A: MapReduceApp> {
    records: Vec<A::Record>,
    app: Arc<A>,
}

impl<A: MapReduceApp> SequentialMapReduce<A> {
    pub fn new(records: Vec<A::Record>, app: A) -> Self {
        Self {
            records,
            app: Arc::new(app),
        }
    }

    pub fn run_sync(self) -> Result<Output<A>, PipelineError> {
        let mut pairs = Vec::new();
        for record in self.records {
            let emitted = self
                .app
                .map(record)
                .map_err(|source| PipelineError::MapStage { partition: 0, source })?;
            pairs.extend(emitted);
        }

        let grouped = group_pairs(vec![pairs]);
        reduce_groups(self.app.as_ref(), grouped)
    }
}

#[async_trait]
impl<A: MapReduceApp> MapReduce<A> for SequentialMapReduce<A> {
    async fn run(self) -> Result<Output<A>, PipelineError> {
        self.run_sync()
    }
}
