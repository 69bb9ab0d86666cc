use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{TokenCounter, TokenList};

/// Per-token totals for one run, keyed in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenCountTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl TokenCountTable {
    /// Every distinct token starts at zero; a repeated token keeps its first slot.
    pub fn new(tokens: &TokenList) -> Self {
        let mut table = Self::default();
        for token in tokens.iter() {
            if table.index.contains_key(token) {
                continue;
            }
            table.index.insert(token.to_owned(), table.entries.len());
            table.entries.push((token.to_owned(), 0));
        }
        table
    }

    /// Returns false when the token is not part of the table.
    pub fn add(&mut self, token: &str, n: u64) -> bool {
        match self.index.get(token) {
            Some(&slot) => {
                self.entries[slot].1 += n;
                true
            }
            None => false,
        }
    }

    pub fn accumulate<C: TokenCounter + ?Sized>(&mut self, counter: &C, text: &str) {
        for (token, count) in &mut self.entries {
            *count += counter.count(text, token);
        }
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&slot| self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TokenCountTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (token, count) in &self.entries {
            map.serialize_entry(token, count)?;
        }
        map.end()
    }
}
