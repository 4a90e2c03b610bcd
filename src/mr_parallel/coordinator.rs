use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use anyhow::anyhow;

use crate::common::{MapReduceApp, Output, Pairs};
use crate::error::PipelineError;
use crate::partition::split_records;
use crate::reduce::reduce_groups;
use crate::shuffle::group_pairs;

use super::worker_pool::WorkerPool;

/// Drives one batch run: partition, parallel map, shuffle, reduce, each
/// stage completing fully before the next starts.
pub(crate) struct Coordinator<A: MapReduceApp> {
    app: Arc<A>,
    worker_count: usize,
}

impl<A: MapReduceApp> Coordinator<A> {
    pub(crate) fn new(app: Arc<A>, worker_count: usize) -> Self {
        Self { app, worker_count }
    }

    pub(crate) fn run(&self, records: Vec<A::Record>) -> Result<Output<A>, PipelineError> {
        let partitions = split_records(records, self.worker_count)?;
        tracing::debug!(partitions = partitions.len(), "map stage starting");

        let partition_outputs = self.run_map_stage(partitions)?;

        let grouped = group_pairs(partition_outputs);
        tracing::debug!(keys = grouped.len(), "reduce stage starting");

        reduce_groups(self.app.as_ref(), grouped)
    }

    /// Maps every partition on its own worker and hands back the pair
    /// sequences in partition order. Completion order is up to the
    /// scheduler; output order never is.
    fn run_map_stage(
        &self,
        partitions: Vec<Vec<A::Record>>,
    ) -> Result<Vec<Pairs<A>>, PipelineError> {
        let worker_count = partitions.len();

        // a single worker gains nothing from the pool
        if worker_count == 1 {
            let partition = partitions.into_iter().next().unwrap();
            let pairs = map_partition(self.app.as_ref(), partition)
                .map_err(|source| PipelineError::MapStage { partition: 0, source })?;
            return Ok(vec![pairs]);
        }

        let pool = WorkerPool::new(worker_count);
        let (done_tx, done_rx) = async_channel::bounded(worker_count);

        for (index, partition) in partitions.into_iter().enumerate() {
            let app = Arc::clone(&self.app);
            let done = done_tx.clone();
            pool.execute(move || {
                let outcome = catch_unwind(AssertUnwindSafe(|| {
                    map_partition(app.as_ref(), partition)
                }))
                .unwrap_or_else(|payload| {
                    Err(anyhow!("map function panicked: {}", panic_message(&payload)))
                });
                // the receiver is gone only when the run already failed
                let _ = done.send_blocking((index, outcome));
            });
        }
        drop(done_tx);

        let mut slots: Vec<Option<anyhow::Result<Pairs<A>>>> =
            (0..worker_count).map(|_| None).collect();
        for _ in 0..worker_count {
            let (index, outcome) = done_rx
                .recv_blocking()
                .expect("map worker exited without reporting");
            slots[index] = Some(outcome);
        }

        // assemble in partition order; the lowest failing partition wins
        let mut outputs = Vec::with_capacity(worker_count);
        for (partition, slot) in slots.into_iter().enumerate() {
            match slot.expect("missing map output") {
                Ok(pairs) => outputs.push(pairs),
                Err(source) => return Err(PipelineError::MapStage { partition, source }),
            }
        }
        Ok(outputs)
    }
}

fn map_partition<A: MapReduceApp>(
    app: &A,
    records: Vec<A::Record>,
) -> anyhow::Result<Pairs<A>> {
    let mut pairs = Vec::new();
    for record in records {
        pairs.extend(app.map(record)?);
    }
    Ok(pairs)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
