//! Character frequency table.
//!
//! Counts are stored in first-seen order next to an `AHashMap` index, so that
//! a stable sort by count keeps first appearance as the tie-break.

use ahash::AHashMap;

/// A character and how many times it was seen.
pub type CharCount = (char, u64);

/// Frequency table mapping each distinct character to its count.
#[derive(Debug, Clone, Default)]
pub struct CharFrequencies {
    /// Character -> position in `counts`
    index: AHashMap<char, usize>,
    /// Counts in first-seen order
    counts: Vec<CharCount>,
}

impl CharFrequencies {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `ch`.
    pub fn add(&mut self, ch: char) {
        match self.index.get(&ch) {
            Some(&pos) => self.counts[pos].1 += 1,
            None => {
                self.index.insert(ch, self.counts.len());
                self.counts.push((ch, 1));
            }
        }
    }

    /// Count of `ch`, zero if never seen.
    pub fn get(&self, ch: char) -> u64 {
        self.index.get(&ch).map_or(0, |&pos| self.counts[pos].1)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&(_, n)| n).sum()
    }

    /// Entries by descending count; equal counts keep first-seen order.
    pub fn sorted(&self) -> Vec<CharCount> {
        let mut sorted = self.counts.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl Extend<char> for CharFrequencies {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.add(ch);
        }
    }
}

impl FromIterator<char> for CharFrequencies {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut table = CharFrequencies::new();
        table.add('a');
        table.add('b');
        table.add('a');

        assert_eq!(table.get('a'), 2);
        assert_eq!(table.get('b'), 1);
        assert_eq!(table.get('z'), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_sorted_descending() {
        let table: CharFrequencies = "abbccc".chars().collect();
        assert_eq!(table.sorted(), vec![('c', 3), ('b', 2), ('a', 1)]);
    }

    #[test]
    fn test_sorted_ties_keep_first_seen() {
        let table: CharFrequencies = "ihhi".chars().collect();
        assert_eq!(table.sorted(), vec![('i', 2), ('h', 2)]);

        let table: CharFrequencies = "zyxzyx".chars().collect();
        assert_eq!(table.sorted(), vec![('z', 2), ('y', 2), ('x', 2)]);
    }

    #[test]
    fn test_unicode_chars() {
        let table: CharFrequencies = "日本日".chars().collect();
        assert_eq!(table.get('日'), 2);
        assert_eq!(table.get('本'), 1);
    }
}
