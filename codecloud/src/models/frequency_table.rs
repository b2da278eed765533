// src/models/frequency_table.rs
use std::collections::{HashMap, HashSet};

/// Occurrence counts keyed by label (a word or a language name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn increment(&mut self, label: &str) {
        self.add(label, 1);
    }

    #[inline]
    pub fn add(&mut self, label: &str, count: u64) {
        if let Some(existing) = self.counts.get_mut(label) {
            *existing = existing.saturating_add(count);
        } else {
            self.counts.insert(label.to_owned(), count);
        }
    }

    /// Count for `label`, zero when absent.
    #[inline]
    #[must_use]
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.counts.contains_key(label)
    }

    /// Number of distinct labels.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |sum, count| sum.saturating_add(*count))
    }

    /// Share of `label` in the total, as a percentage.
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn percentage(&self, label: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.get(label) as f64 / total as f64) * 100.0
    }

    /// Copy of the table without any label contained in `labels`.
    #[inline]
    #[must_use]
    pub fn without(&self, labels: &HashSet<String>) -> Self {
        Self {
            counts: self
                .counts
                .iter()
                .filter(|(label, _)| !labels.contains(*label))
                .map(|(label, count)| (label.clone(), *count))
                .collect(),
        }
    }

    /// All entries by descending count; equal counts are ordered by label.
    #[inline]
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// The first `n` entries of [`FrequencyTable::ranked`].
    #[inline]
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries = self.ranked();
        entries.truncate(n);
        entries
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for label in iter {
            table.increment(label.as_ref());
        }
        table
    }
}
