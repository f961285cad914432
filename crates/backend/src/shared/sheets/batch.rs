//! Maps a batchGet response back onto the ranges that were requested.

use std::collections::HashMap;

use super::client::RawRange;

/// Values of a batch request, addressed by the requested range string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchValues {
    ranges: HashMap<String, Vec<Vec<String>>>,
}

impl BatchValues {
    /// Rows of `range`, empty when the range was not part of the response
    pub fn get(&self, range: &str) -> &[Vec<String>] {
        self.ranges.get(range).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, range: &str) -> bool {
        self.ranges.contains_key(range)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Sheet names with spaces are echoed quoted (`'ICC25 Loot'!A1:E1000`).
fn normalize_label(label: &str) -> String {
    label.replace('\'', "")
}

/// Assigns each requested range its block of the response.
///
/// The echoed label is matched by containment since the API may qualify or
/// quote it. A range whose label matches nothing falls back to the block at
/// its own position, the API answers in request order.
pub fn demux(requested: &[String], response: Vec<RawRange>) -> BatchValues {
    let labels: Vec<String> = response.iter().map(|r| normalize_label(&r.range)).collect();
    let mut blocks: Vec<Option<Vec<Vec<String>>>> =
        response.into_iter().map(|r| Some(r.values)).collect();

    let mut ranges = HashMap::with_capacity(requested.len());
    for (position, range) in requested.iter().enumerate() {
        let wanted = normalize_label(range);
        let matched = labels
            .iter()
            .enumerate()
            .position(|(i, label)| blocks[i].is_some() && label.contains(&wanted));

        let index = match matched {
            Some(i) => Some(i),
            None if blocks.get(position).is_some_and(Option::is_some) => {
                tracing::debug!(
                    "batchGet: no label for '{}', using position {}",
                    range,
                    position
                );
                Some(position)
            }
            None => None,
        };

        match index.and_then(|i| blocks[i].take()) {
            Some(values) => {
                ranges.insert(range.clone(), values);
            }
            None => tracing::warn!("batchGet: range '{}' missing from response", range),
        }
    }

    BatchValues { ranges }
}
