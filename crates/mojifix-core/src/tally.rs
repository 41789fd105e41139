/// Per-file replacement counts, keyed by category.
///
/// Entries keep insertion order (pass order), so the printed summary reads in
/// the same order the passes ran. A zero count is never stored; an empty
/// tally means the file needed nothing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(&'static str, u64)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `hits` under `key`, merging with an existing entry.
    /// Zero-hit calls are dropped on the floor.
    pub fn add(&mut self, key: &'static str, hits: u64) {
        if hits == 0 {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 += hits;
        } else {
            self.entries.push((key, hits));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, n)| *n)
    }

    pub fn entries(&self) -> &[(&'static str, u64)] {
        &self.entries
    }

    /// Comma-joined `key:count` report, e.g. `nbsp_to_space:3, bom_removed:1`.
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|(k, n)| format!("{k}:{n}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
