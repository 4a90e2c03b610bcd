use regex::Regex;

use crate::common::MapReduceApp;

/// Counts case-folded alphanumeric words. One record is one document.
pub struct WordCount {
    words: Regex,
}

impl WordCount {
    pub fn new() -> Self {
        Self {
            words: Regex::new(r"\b[a-zA-Z0-9]+\b").expect("invalid word regex"),
        }
    }
}

impl Default for WordCount {
    fn default() -> Self {
        Self::new()
    }
}

impl MapReduceApp for WordCount {
    type Record = String;
    type Key = String;
    type Value = u64;
    type Reduced = u64;

    fn map(&self, contents: String) -> anyhow::Result<Vec<(String, u64)>> {
        let kva = self
            .words
            .find_iter(&contents)
            .map(|w| (w.as_str().to_lowercase(), 1))
            .collect();
        Ok(kva)
    }

    fn reduce(&self, _key: &String, values: Vec<u64>) -> anyhow::Result<u64> {
        Ok(values.into_iter().sum())
    }
}
