use std::collections::HashMap;
use std::hash::Hash;

/// Merges the per-partition pair sequences into one multi-map. Partitions
/// are consumed in partition-index order and pairs in emission order, so a
/// key's value sequence is identical no matter how the workers were
/// scheduled.
pub fn group_pairs<K, V>(partition_outputs: Vec<Vec<(K, V)>>) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash,
{
    let mut grouped: HashMap<K, Vec<V>> = HashMap::new();
    for pairs in partition_outputs {
        for (key, value) in pairs {
            grouped.entry(key).or_default().push(value);
        }
    }
    grouped
}
