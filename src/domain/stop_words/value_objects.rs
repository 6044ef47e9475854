// src/domain/stop_words/value_objects.rs
use std::collections::HashSet;
use std::fmt;

/// Words to strip from permalinks. Membership is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet(HashSet<String>);

impl StopWordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the stored comma-separated option value. Entries are trimmed and
    /// blank entries dropped, so an empty or whitespace-only value is the empty set.
    pub fn parse(raw: &str) -> Self {
        raw.split(',')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.0.insert(word.into())
    }

    pub fn remove(&mut self, word: &str) -> bool {
        self.0.remove(word)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for StopWordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// Sorted, comma-joined form; matches the stored option layout.
impl fmt::Display for StopWordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        f.write_str(&words.join(","))
    }
}
