use crate::error::PipelineError;

/// Splits `records` into `worker_count` contiguous partitions with sizes
/// differing by at most one. Every record lands in exactly one partition;
/// an empty input yields `worker_count` empty partitions.
pub fn split_records<T>(
    records: Vec<T>,
    worker_count: usize,
) -> Result<Vec<Vec<T>>, PipelineError> {
    if worker_count == 0 {
        return Err(PipelineError::InvalidArgument(
            "worker_count must be at least 1".to_string(),
        ));
    }

    let base = records.len() / worker_count;
    let extra = records.len() % worker_count;

    let mut partitions = Vec::with_capacity(worker_count);
    let mut rest = records;
    for index in 0..worker_count {
        let len = base + usize::from(index < extra);
        let tail = rest.split_off(len);
        partitions.push(rest);
        rest = tail;
    }
    debug_assert!(rest.is_empty());

    Ok(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_evenly_when_divisible() {
        let partitions = split_records(vec![1, 2, 3, 4, 5, 6], 3).unwrap();
        assert_eq!(partitions, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    fn front_partitions_take_the_remainder() {
        let partitions = split_records(vec![1, 2, 3, 4, 5], 3).unwrap();
        assert_eq!(partitions, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn flattening_preserves_the_records() {
        for worker_count in 1..=7 {
            let records: Vec<u32> = (0..23).collect();
            let partitions = split_records(records.clone(), worker_count).unwrap();
            assert_eq!(partitions.len(), worker_count);
            let flattened: Vec<u32> = partitions.into_iter().flatten().collect();
            assert_eq!(flattened, records);
        }
    }

    #[test]
    fn empty_input_yields_empty_partitions() {
        let partitions = split_records(Vec::<u32>::new(), 4).unwrap();
        assert_eq!(partitions, vec![vec![], vec![], vec![], vec![]]);
    }

    #[test]
    fn more_workers_than_records_leaves_trailing_partitions_empty() {
        let partitions = split_records(vec![1, 2], 4).unwrap();
        assert_eq!(partitions, vec![vec![1], vec![2], vec![], vec![]]);
    }

    #[test]
    fn zero_workers_is_rejected() {
        let err = split_records(vec![1, 2, 3], 0).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidArgument(_)));
    }
}
