use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Days on which the glass was filled. A day in this set is "credited".
///
/// Serializes as a JSON array of "YYYY-MM-DD" strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedDates(BTreeSet<NaiveDate>);

impl CompletedDates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0.contains(date)
    }

    /// Mark a day as credited. Returns false if it already was.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.0.insert(date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<NaiveDate> for CompletedDates {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        CompletedDates(iter.into_iter().collect())
    }
}
