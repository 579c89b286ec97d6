use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The atomic makeup of a formula: element symbol mapped to atom count.
///
/// A `Composition` is produced once per formula query by the formula parser
/// and is immutable from the engine's point of view; it is cloned into each
/// [`ShapeResult`](super::shape::ShapeResult) so callers can inspect which
/// atoms surround the center. Counts are always positive, keys unique.
///
/// The backing map is ordered (alphabetical by symbol), which makes every
/// iteration-order-dependent decision in the engine deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Composition {
    counts: BTreeMap<String, u32>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` atoms of `element`, merging with any existing entry.
    ///
    /// Zero counts are ignored so a `Composition` never holds an element
    /// with no atoms.
    pub fn add(&mut self, element: &str, count: u32) {
        if count == 0 {
            return;
        }
        *self.counts.entry(element.to_string()).or_insert(0) += count;
    }

    pub fn count_of(&self, element: &str) -> u32 {
        self.counts.get(element).copied().unwrap_or(0)
    }

    pub fn contains(&self, element: &str) -> bool {
        self.counts.contains_key(element)
    }

    /// Number of distinct elements.
    pub fn distinct_elements(&self) -> usize {
        self.counts.len()
    }

    /// Total number of atoms across all elements.
    pub fn total_atoms(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(symbol, count)` pairs in alphabetical symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(|k| k.as_str())
    }
}

impl FromIterator<(String, u32)> for Composition {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut composition = Composition::new();
        for (element, count) in iter {
            composition.add(&element, count);
        }
        composition
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (element, count) in self.iter() {
            if count == 1 {
                write!(f, "{}", element)?;
            } else {
                write!(f, "{}{}", element, count)?;
            }
        }
        Ok(())
    }
}
