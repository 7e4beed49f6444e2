//! Toolkit-facing callbacks.
//!
//! The host toolkit addresses rows by [`VisualRow`]. Each method translates to a
//! [`RowSlot`] first, then either handles the group cell itself or re-dispatches the logical
//! [`IndexPath`] to the data source or delegate.

use alloc::string::String;

use crate::{
    DataSource, Delegate, EditingStyle, ExpandableTable, RowSlot, Selection, TableHost,
    VisualRow,
};

impl<D, G, H> ExpandableTable<D, G, H>
where
    D: DataSource,
    G: Delegate<D::Cell>,
    H: TableHost,
{
    pub fn number_of_sections(&self) -> usize {
        self.source().number_of_sections()
    }

    /// `(promoted singleton ? 0 : 1) + visible child rows`.
    pub fn rows_in_section(&self, section: usize) -> usize {
        self.layout().rows_in_section(section)
    }

    pub fn number_of_visual_rows(&self) -> usize {
        self.layout().total_rows()
    }

    pub fn slot_at(&self, row: VisualRow) -> Option<RowSlot> {
        self.layout().slot_at(row)
    }

    pub fn section_start(&self, section: usize) -> Option<VisualRow> {
        self.layout().section_start(section)
    }

    /// The cell for a visual row.
    pub fn cell_at(&mut self, row: VisualRow) -> Option<D::Cell> {
        let slot = self.slot_at(row)?;
        match slot {
            RowSlot::Header { section } => self.cell_for_section(section),
            RowSlot::Child(path) => self.cell_for_child_row(path),
        }
    }

    /// Called before the toolkit selects a row.
    ///
    /// Group cells are always selectable. For child rows the delegate may redirect the
    /// selection to another logical row (returned as its visual row) or refuse it with `None`.
    /// A redirect to a row that is not on screen is refused.
    pub fn will_select(&mut self, row: VisualRow) -> Option<VisualRow> {
        let slot = self.slot_at(row)?;
        match slot {
            RowSlot::Header { .. } => Some(row),
            RowSlot::Child(path) => {
                let target = self.delegate_mut().will_select_row(path)?;
                let visual = self.layout().visual_row_for(target);
                if visual.is_none() {
                    ewarn!(
                        section = target.section,
                        row = target.row,
                        "will_select redirected to a hidden row"
                    );
                }
                visual
            }
        }
    }

    /// Called after the toolkit selected a row. Group cells toggle their section.
    pub fn did_select(&mut self, row: VisualRow) -> Selection {
        let Some(slot) = self.slot_at(row) else {
            return Selection::Ignored;
        };
        etrace!(row = row.0, ?slot, "did_select");
        match slot {
            RowSlot::Header { section } => {
                if !self.options().toggle_on_header_select {
                    return Selection::Ignored;
                }
                let outcome = self.toggle_section(section);
                Selection::Toggled { section, outcome }
            }
            RowSlot::Child(path) => {
                self.delegate_mut().did_select_row(path);
                Selection::Forwarded(path)
            }
        }
    }

    pub fn will_deselect(&mut self, row: VisualRow) -> Option<VisualRow> {
        let slot = self.slot_at(row)?;
        match slot {
            RowSlot::Header { .. } => Some(row),
            RowSlot::Child(path) => {
                let target = self.delegate_mut().will_deselect_row(path)?;
                self.layout().visual_row_for(target)
            }
        }
    }

    /// Group cells are not forwarded.
    pub fn did_deselect(&mut self, row: VisualRow) -> Selection {
        match self.slot_at(row) {
            Some(RowSlot::Child(path)) => {
                self.delegate_mut().did_deselect_row(path);
                Selection::Forwarded(path)
            }
            _ => Selection::Ignored,
        }
    }

    /// Routes to `will_display_section_cell` or `will_display_row_cell`.
    pub fn will_display_cell(&mut self, cell: &D::Cell, row: VisualRow) {
        match self.slot_at(row) {
            Some(RowSlot::Header { section }) => {
                self.delegate_mut().will_display_section_cell(cell, section);
            }
            Some(RowSlot::Child(path)) => {
                self.delegate_mut().will_display_row_cell(cell, path);
            }
            None => {}
        }
    }

    /// Header rows ask `can_edit_section`, child rows ask `can_edit_row`.
    pub fn can_edit(&self, row: VisualRow) -> bool {
        match self.slot_at(row) {
            Some(RowSlot::Header { section }) => self.source().can_edit_section(section),
            Some(RowSlot::Child(path)) => self.source().can_edit_row(path),
            None => false,
        }
    }

    /// Group cells never move.
    pub fn can_move(&self, row: VisualRow) -> bool {
        match self.slot_at(row) {
            Some(RowSlot::Child(path)) => self.source().can_move_row(path),
            _ => false,
        }
    }

    /// Forwards an edit on a child row. Returns whether the data source was called.
    pub fn commit_edit(&mut self, style: EditingStyle, row: VisualRow) -> bool {
        match self.slot_at(row) {
            Some(RowSlot::Child(path)) => {
                edebug!(?style, section = path.section, row = path.row, "commit_edit");
                self.source_mut().commit_edit(style, path);
                true
            }
            _ => false,
        }
    }

    /// Group cells sit at level 0.
    pub fn indentation_level(&self, row: VisualRow) -> usize {
        match self.slot_at(row) {
            Some(RowSlot::Child(path)) => self.delegate().indentation_level(path),
            _ => 0,
        }
    }

    pub fn title_for_header(&self, section: usize) -> Option<String> {
        if section >= self.number_of_sections() {
            return None;
        }
        self.source().title_for_header(section)
    }

    pub fn title_for_footer(&self, section: usize) -> Option<String> {
        if section >= self.number_of_sections() {
            return None;
        }
        self.source().title_for_footer(section)
    }
}
