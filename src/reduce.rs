use std::collections::HashMap;

use crate::common::{MapReduceApp, Output};
use crate::error::PipelineError;

/// Applies the reduce function once per distinct key, over that key's full
/// value sequence. A reduce failure aborts the run attributed to its key;
/// nothing reduced so far is returned.
pub fn reduce_groups<A: MapReduceApp>(
    app: &A,
    grouped: HashMap<A::Key, Vec<A::Value>>,
) -> Result<Output<A>, PipelineError> {
    let mut output = HashMap::with_capacity(grouped.len());
    for (key, values) in grouped {
        let reduced = app
            .reduce(&key, values)
            .map_err(|source| PipelineError::ReduceStage {
                key: format!("{:?}", key),
                source,
            })?;
        output.insert(key, reduced);
    }
    Ok(output)
}
