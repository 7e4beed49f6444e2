use alloc::collections::BTreeSet;
use alloc::vec::Vec;

/// The set of expanded sections.
///
/// Only [`crate::ExpandableTable`] mutates it; the translator and forwarder read it through
/// shared references.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    expanded: BTreeSet<usize>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, section: usize) -> bool {
        self.expanded.contains(&section)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded sections in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }

    pub fn to_set(&self) -> BTreeSet<usize> {
        self.expanded.clone()
    }

    pub(crate) fn insert(&mut self, section: usize) -> bool {
        self.expanded.insert(section)
    }

    pub(crate) fn remove(&mut self, section: usize) -> bool {
        self.expanded.remove(&section)
    }

    pub(crate) fn clear(&mut self) {
        self.expanded.clear();
    }

    /// Drops every section at or beyond `section_count`. Returns how many were dropped.
    pub(crate) fn retain_below(&mut self, section_count: usize) -> usize {
        let before = self.expanded.len();
        self.expanded.retain(|&s| s < section_count);
        before - self.expanded.len()
    }
}

/// An in-memory snapshot of which sections are open.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpansionSnapshot {
    /// Expanded sections, ascending.
    pub expanded: Vec<usize>,
    pub ungroup_single_element: bool,
}
