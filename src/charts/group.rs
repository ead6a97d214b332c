use std::collections::HashMap;

/// Key → accumulator mapping that iterates in first-seen key order.
///
/// Callers sort the output explicitly by whatever metric the chart needs;
/// the first-seen order only decides how ties fall under a stable sort.
#[derive(Debug, Clone)]
pub struct OrderedGroups<A> {
    index: HashMap<String, usize>,
    groups: Vec<(String, A)>,
}

impl<A: Default> OrderedGroups<A> {
    pub fn new() -> Self {
        OrderedGroups {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    /// Accumulator for `key`, created with `A::default()` on first sight.
    pub fn entry(&mut self, key: &str) -> &mut A {
        let slot = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.groups.push((key.to_string(), A::default()));
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[slot].1
    }

    pub fn into_vec(self) -> Vec<(String, A)> {
        self.groups
    }
}

impl<A: Default> Default for OrderedGroups<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Running total and row count for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StreamTally {
    pub total_streams: f64,
    pub track_count: usize,
}

impl StreamTally {
    pub fn add(&mut self, streams: f64) {
        self.total_streams += streams;
        self.track_count += 1;
    }

    /// Mean streams per track; `0.0` for an empty tally.
    pub fn average(&self) -> f64 {
        if self.track_count == 0 {
            0.0
        } else {
            self.total_streams / self.track_count as f64
        }
    }
}
