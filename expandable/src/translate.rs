use crate::state::ExpansionSet;
use crate::{DataSource, IndexPath, RowSlot, VisualRange, VisualRow};

/// How one section occupies the flat list under the current expansion state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionShape {
    /// Rows taken by the group cell: 0 for a promoted singleton, otherwise 1.
    pub header_rows: usize,
    /// Child rows currently on screen.
    pub visible_children: usize,
    /// Child rows the data source reports, visible or not.
    pub child_count: usize,
}

impl SectionShape {
    pub fn rows(&self) -> usize {
        self.header_rows + self.visible_children
    }

    pub fn is_promoted_singleton(&self) -> bool {
        self.header_rows == 0
    }
}

/// Maps between visual rows and logical (section, row) addresses.
///
/// A `Layout` is a read-only view over a data source and an [`ExpansionSet`]. Every query
/// walks sections from the start and asks the data source for counts, so it always reflects
/// the current authoritative state; nothing is cached.
///
/// Per section, the flat list holds:
/// - one group cell, unless the section is a promoted singleton
/// - its child rows when expanded
///
/// A promoted singleton (ungroup mode on, exactly one child) shows its only child in the slot
/// the group cell would have taken, whatever its expansion state.
pub struct Layout<'a, D: ?Sized> {
    source: &'a D,
    expanded: &'a ExpansionSet,
    ungroup: bool,
}

impl<'a, D: DataSource + ?Sized> Layout<'a, D> {
    pub fn new(source: &'a D, expanded: &'a ExpansionSet, ungroup: bool) -> Self {
        Self {
            source,
            expanded,
            ungroup,
        }
    }

    pub fn ungroup(&self) -> bool {
        self.ungroup
    }

    pub fn section_count(&self) -> usize {
        self.source.number_of_sections()
    }

    /// `false` for an out-of-range section.
    pub fn is_promoted_singleton(&self, section: usize) -> bool {
        self.ungroup
            && section < self.section_count()
            && self.source.number_of_rows(section) == 1
    }

    /// Returns `None` for an out-of-range section.
    pub fn shape(&self, section: usize) -> Option<SectionShape> {
        if section >= self.section_count() {
            return None;
        }
        Some(self.shape_unchecked(section))
    }

    fn shape_unchecked(&self, section: usize) -> SectionShape {
        let child_count = self.source.number_of_rows(section);
        if self.ungroup && child_count == 1 {
            return SectionShape {
                header_rows: 0,
                visible_children: 1,
                child_count,
            };
        }
        let visible_children = if self.expanded.contains(section) {
            child_count
        } else {
            0
        };
        SectionShape {
            header_rows: 1,
            visible_children,
            child_count,
        }
    }

    /// Visual rows a section contributes; 0 for an out-of-range section.
    pub fn rows_in_section(&self, section: usize) -> usize {
        self.shape(section).map_or(0, |s| s.rows())
    }

    pub fn total_rows(&self) -> usize {
        (0..self.section_count())
            .map(|s| self.shape_unchecked(s).rows())
            .sum()
    }

    /// The first visual row of a section: its group cell, or its promoted child.
    pub fn section_start(&self, section: usize) -> Option<VisualRow> {
        if section >= self.section_count() {
            return None;
        }
        let start = (0..section).map(|s| self.shape_unchecked(s).rows()).sum();
        Some(VisualRow(start))
    }

    /// The visual rows a section's children occupy while it is expanded.
    ///
    /// Independent of the section's own state, so the same range is valid for the insert
    /// that follows an expansion and for the delete that follows a contraction. Empty for a
    /// promoted singleton, whose child never moves.
    pub fn child_range(&self, section: usize) -> Option<VisualRange> {
        let start = self.section_start(section)?;
        let shape = self.shape_unchecked(section);
        if shape.is_promoted_singleton() {
            return Some(VisualRange::new(start.0, 0));
        }
        Some(VisualRange::new(start.0 + 1, shape.child_count))
    }

    /// Visual → logical.
    pub fn slot_at(&self, row: VisualRow) -> Option<RowSlot> {
        let target = row.0;
        let mut acc = 0usize;
        for section in 0..self.section_count() {
            let shape = self.shape_unchecked(section);
            let end = acc + shape.rows();
            if target < end {
                let local = target - acc;
                let slot = if local < shape.header_rows {
                    RowSlot::Header { section }
                } else {
                    RowSlot::Child(IndexPath::new(section, local - shape.header_rows))
                };
                etrace!(row = target, ?slot, "slot_at");
                return Some(slot);
            }
            acc = end;
        }
        None
    }

    /// Logical → visual for a child row. `None` when the row does not exist or is hidden.
    pub fn visual_row_for(&self, path: IndexPath) -> Option<VisualRow> {
        let start = self.section_start(path.section)?;
        let shape = self.shape_unchecked(path.section);
        if path.row >= shape.visible_children {
            return None;
        }
        Some(VisualRow(start.0 + shape.header_rows + path.row))
    }

    /// Logical → visual for any slot.
    pub fn visual_row_for_slot(&self, slot: RowSlot) -> Option<VisualRow> {
        match slot {
            RowSlot::Header { section } => {
                let start = self.section_start(section)?;
                if self.shape_unchecked(section).is_promoted_singleton() {
                    return None;
                }
                Some(start)
            }
            RowSlot::Child(path) => self.visual_row_for(path),
        }
    }

    /// Whether a child row is materialized on screen.
    pub fn is_visible(&self, path: IndexPath) -> bool {
        self.visual_row_for(path).is_some()
    }

    /// Iterates every visual slot in order.
    pub fn rows(&self) -> Rows<'_, 'a, D> {
        Rows {
            layout: self,
            section: 0,
            local: 0,
            shape: None,
            section_count: self.section_count(),
        }
    }
}

/// Iterator over the slots of a [`Layout`], top to bottom.
pub struct Rows<'l, 'a, D: ?Sized> {
    layout: &'l Layout<'a, D>,
    section: usize,
    local: usize,
    shape: Option<SectionShape>,
    section_count: usize,
}

impl<D: DataSource + ?Sized> Iterator for Rows<'_, '_, D> {
    type Item = RowSlot;

    fn next(&mut self) -> Option<RowSlot> {
        while self.section < self.section_count {
            let shape = match self.shape {
                Some(shape) => shape,
                None => {
                    let shape = self.layout.shape_unchecked(self.section);
                    self.shape = Some(shape);
                    shape
                }
            };
            if self.local < shape.rows() {
                let local = self.local;
                self.local += 1;
                if local < shape.header_rows {
                    return Some(RowSlot::Header {
                        section: self.section,
                    });
                }
                return Some(RowSlot::Child(IndexPath::new(
                    self.section,
                    local - shape.header_rows,
                )));
            }
            self.section += 1;
            self.local = 0;
            self.shape = None;
        }
        None
    }
}
