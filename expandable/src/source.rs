use alloc::string::String;

use crate::{EditingStyle, IndexPath, RowAnimation, VisualRange, VisualRow};

/// Supplies the sections, child rows and cells of an [`crate::ExpandableTable`].
///
/// Only the three cell/count methods are required. Every other method has a default that
/// matches "the application did not implement this": one section, nothing editable or
/// movable, no titles, and no opinion on ungrouping.
///
/// Counts are queried on demand; the table never caches them.
pub trait DataSource {
    /// The cell type handed to the host toolkit.
    type Cell;

    /// The group (header) cell for a section.
    fn cell_for_group(&mut self, section: usize) -> Self::Cell;

    /// The cell for a child row.
    fn cell_for_row(&mut self, path: IndexPath) -> Self::Cell;

    /// Number of child rows in a section.
    fn number_of_rows(&self, section: usize) -> usize;

    fn number_of_sections(&self) -> usize {
        1
    }

    fn commit_edit(&mut self, style: EditingStyle, path: IndexPath) {
        let _ = (style, path);
    }

    fn can_edit_row(&self, path: IndexPath) -> bool {
        let _ = path;
        false
    }

    fn can_edit_section(&self, section: usize) -> bool {
        let _ = section;
        false
    }

    fn can_move_row(&self, path: IndexPath) -> bool {
        let _ = path;
        false
    }

    fn title_for_header(&self, section: usize) -> Option<String> {
        let _ = section;
        None
    }

    fn title_for_footer(&self, section: usize) -> Option<String> {
        let _ = section;
        None
    }

    /// Overrides [`crate::TableOptions::ungroup_single_element`] when it returns `Some`.
    fn ungroup_single_elements(&self) -> Option<bool> {
        None
    }
}

/// Observes and steers expansion, display and selection. Every method is optional.
pub trait Delegate<C> {
    fn will_expand_section(&mut self, section: usize) {
        let _ = section;
    }

    fn did_expand_section(&mut self, section: usize) {
        let _ = section;
    }

    fn will_contract_section(&mut self, section: usize) {
        let _ = section;
    }

    fn did_contract_section(&mut self, section: usize) {
        let _ = section;
    }

    /// Returning `false` vetoes a contraction; nothing changes and no notification fires.
    fn can_remove_section(&mut self, section: usize) -> bool {
        let _ = section;
        true
    }

    fn indentation_level(&self, path: IndexPath) -> usize {
        let _ = path;
        0
    }

    fn will_display_row_cell(&mut self, cell: &C, path: IndexPath) {
        let _ = (cell, path);
    }

    fn will_display_section_cell(&mut self, cell: &C, section: usize) {
        let _ = (cell, section);
    }

    /// Returns the row to select instead, or `None` to refuse the selection.
    fn will_select_row(&mut self, path: IndexPath) -> Option<IndexPath> {
        Some(path)
    }

    fn did_select_row(&mut self, path: IndexPath) {
        let _ = path;
    }

    /// Returns the row to deselect instead, or `None` to refuse the deselection.
    fn will_deselect_row(&mut self, path: IndexPath) -> Option<IndexPath> {
        Some(path)
    }

    fn did_deselect_row(&mut self, path: IndexPath) {
        let _ = path;
    }
}

/// A delegate that accepts every default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelegate;

impl<C> Delegate<C> for NoDelegate {}

/// The toolkit list view the table drives.
///
/// Calls arrive after the expansion state has already changed; animations are cosmetic and
/// must not be read back as logical state.
pub trait TableHost {
    fn insert_rows(&mut self, section: usize, rows: VisualRange, animation: RowAnimation);

    fn delete_rows(&mut self, section: usize, rows: VisualRange, animation: RowAnimation);

    fn reload_rows(&mut self, rows: &[VisualRow], animation: RowAnimation);

    /// Everything may have changed; re-query counts and cells.
    fn reload_all(&mut self) {}
}

/// A host that ignores every update. Useful for headless use and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl TableHost for NoopHost {
    fn insert_rows(&mut self, _section: usize, _rows: VisualRange, _animation: RowAnimation) {}

    fn delete_rows(&mut self, _section: usize, _rows: VisualRange, _animation: RowAnimation) {}

    fn reload_rows(&mut self, _rows: &[VisualRow], _animation: RowAnimation) {}
}
