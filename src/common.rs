use async_trait::async_trait;
use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::error::PipelineError;

/// {key: reduce_output}
pub type Output<A> = HashMap<<A as MapReduceApp>::Key, <A as MapReduceApp>::Reduced>;

/// One partition's emitted key/value pairs, in emission order.
pub type Pairs<A> = Vec<(<A as MapReduceApp>::Key, <A as MapReduceApp>::Value)>;

/// The caller-supplied side of the pipeline: a map function emitting
/// key/value pairs per record, and a reduce function aggregating one key's
/// full value sequence into a single result.
///
/// Both must be callable without access to shared mutable state: partitions
/// run on independent workers and no ordering is guaranteed between them.
pub trait MapReduceApp: Send + Sync + 'static {
    type Record: Send + 'static;
    type Key: Eq + Hash + Debug + Send + 'static;
    type Value: Send + 'static;
    type Reduced: Send + 'static;

    fn map(&self, record: Self::Record) -> anyhow::Result<Vec<(Self::Key, Self::Value)>>;

    fn reduce(&self, key: &Self::Key, values: Vec<Self::Value>)
        -> anyhow::Result<Self::Reduced>;
}

/// A runner that owns its input records and produces the final mapping.
/// Consuming `self` keeps the contract batch-shaped: one run, one output.
#[async_trait]
pub trait MapReduce<A: MapReduceApp> {
    async fn run(self) -> Result<Output<A>, PipelineError>;
}
