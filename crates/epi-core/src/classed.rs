//! `ClassedValues` — small class-indexed lookup tables.
//!
//! A handful of model inputs are step functions over an integer class:
//! severity probability by age, average contacts by age, infectiousness by
//! day relative to symptom onset.  Tables are tens of entries at most, so a
//! linear scan is both correct and cheap.

/// A small ordered mapping from integer class to value, preserving the
/// construction order of its entries.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassedValues {
    entries: Vec<(i32, f32)>,
}

impl ClassedValues {
    /// Build from `(class, value)` pairs.  Entries are kept in input order;
    /// lookups assume classes ascend (which all model tables satisfy).
    pub fn new(entries: Vec<(i32, f32)>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Value of the first entry whose class equals `class`, else `default`.
    pub fn get(&self, class: i32, default: f32) -> f32 {
        self.entries
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, v)| *v)
            .unwrap_or(default)
    }

    /// Value of the greatest entry whose class is ≤ `class`.
    ///
    /// Scans in order and stops at the first class greater than `class`,
    /// returning the value just before the break (or the last entry when no
    /// class exceeds the query).  When `class` is below the smallest class
    /// this returns the entry at index 0.  Empty tables return 0.0.
    pub fn greatest_le(&self, class: i32) -> f32 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let mut hit = 0;
        for (i, (c, _)) in self.entries.iter().enumerate() {
            if *c > class {
                break;
            }
            hit = i;
        }
        self.entries[hit].1
    }
}

impl FromIterator<(i32, f32)> for ClassedValues {
    fn from_iter<I: IntoIterator<Item = (i32, f32)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
