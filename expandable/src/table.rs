use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::state::{ExpansionSet, ExpansionSnapshot};
use crate::translate::Layout;
use crate::{
    DataSource, Delegate, IndexPath, NoDelegate, NoopHost, Outcome, RowAnimation, SectionPhase,
    TableHost, TableOptions, VisualRow,
};

/// A headless expandable/collapsible sectioned list.
///
/// This type holds no UI objects:
/// - The data source `D` supplies counts and cells.
/// - The delegate `G` observes and steers expansion, display and selection.
/// - The host `H` is the toolkit list view; it receives row insert/delete/reload requests.
///
/// All sections start collapsed. Expansion state changes synchronously inside
/// [`expand`](Self::expand) / [`contract`](Self::contract); host animations are requested
/// afterwards and never feed back into the state.
///
/// Toolkit callbacks (cell lookups, selection, display, editing) are forwarded through the
/// methods in the `forward` module after translating visual rows to logical addresses.
#[derive(Clone, Debug)]
pub struct ExpandableTable<D, G = NoDelegate, H = NoopHost> {
    source: D,
    delegate: G,
    host: H,
    options: TableOptions,
    expanded: ExpansionSet,
}

impl<D: DataSource> ExpandableTable<D> {
    /// Creates a table with no delegate and a host that ignores updates.
    pub fn new(source: D) -> Self {
        Self::from_parts(source, NoDelegate, NoopHost, TableOptions::default())
    }
}

impl<D, G, H> ExpandableTable<D, G, H> {
    pub fn from_parts(source: D, delegate: G, host: H, options: TableOptions) -> Self {
        Self {
            source,
            delegate,
            host,
            options,
            expanded: ExpansionSet::new(),
        }
    }

    pub fn with_delegate<G2>(self, delegate: G2) -> ExpandableTable<D, G2, H> {
        ExpandableTable {
            source: self.source,
            delegate,
            host: self.host,
            options: self.options,
            expanded: self.expanded,
        }
    }

    pub fn with_host<H2>(self, host: H2) -> ExpandableTable<D, G, H2> {
        ExpandableTable {
            source: self.source,
            delegate: self.delegate,
            host,
            options: self.options,
            expanded: self.expanded,
        }
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn into_parts(self) -> (D, G, H) {
        (self.source, self.delegate, self.host)
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    /// Mutable access to the data source.
    ///
    /// After changing section or row counts, call `reload_data` (or drive the host yourself)
    /// so the host re-queries.
    pub fn source_mut(&mut self) -> &mut D {
        &mut self.source
    }

    pub fn delegate(&self) -> &G {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut G {
        &mut self.delegate
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn expansion(&self) -> &ExpansionSet {
        &self.expanded
    }
}

impl<D, G, H> ExpandableTable<D, G, H>
where
    D: DataSource,
    G: Delegate<D::Cell>,
    H: TableHost,
{
    /// Effective ungroup mode: the data source's answer, else the option.
    pub fn ungroup_single_element(&self) -> bool {
        self.source
            .ungroup_single_elements()
            .unwrap_or(self.options.ungroup_single_element)
    }

    pub fn set_ungroup_single_element(&mut self, ungroup: bool) {
        if self.options.ungroup_single_element == ungroup {
            return;
        }
        self.update_options(|o| o.ungroup_single_element = ungroup);
    }

    /// Replaces the options. Asks the host for a full reload when the layout may have changed.
    pub fn set_options(&mut self, options: TableOptions) {
        let prev_ungroup = self.ungroup_single_element();
        self.options = options;
        edebug!(?options, "ExpandableTable::set_options");
        if self.ungroup_single_element() != prev_ungroup {
            self.host.reload_all();
        }
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut TableOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    /// A read-only index translator over the current state.
    pub fn layout(&self) -> Layout<'_, D> {
        Layout::new(&self.source, &self.expanded, self.ungroup_single_element())
    }

    pub fn is_expanded(&self, section: usize) -> bool {
        self.expanded.contains(section)
    }

    /// Expanded sections, ascending.
    pub fn expanded_section_indexes(&self) -> BTreeSet<usize> {
        self.expanded.to_set()
    }

    /// `Collapsed` or `Expanded`; transitional phases only exist inside `expand`/`contract`.
    pub fn phase(&self, section: usize) -> SectionPhase {
        if self.expanded.contains(section) {
            SectionPhase::Expanded
        } else {
            SectionPhase::Collapsed
        }
    }

    fn section_in_range(&self, section: usize) -> bool {
        let count = self.source.number_of_sections();
        if section >= count {
            ewarn!(section, count, "section out of range");
            return false;
        }
        true
    }

    /// Opens a section and inserts its child rows right after its group cell.
    ///
    /// Fires `will_expand_section` before the state changes and `did_expand_section` after
    /// the host was asked to insert rows. A section with no children (or a promoted
    /// singleton) still toggles and notifies, but inserts nothing.
    pub fn expand(&mut self, section: usize) -> Outcome {
        if !self.section_in_range(section) {
            return Outcome::OutOfRange;
        }
        if self.expanded.contains(section) {
            etrace!(section, "expand: already expanded");
            return Outcome::Unchanged;
        }

        self.delegate.will_expand_section(section);
        self.expanded.insert(section);

        let rows = self.layout().child_range(section);
        edebug!(section, ?rows, "expand");
        if let Some(rows) = rows.filter(|r| !r.is_empty()) {
            self.host.insert_rows(section, rows, self.options.insert_animation);
        }

        self.delegate.did_expand_section(section);
        Outcome::Applied
    }

    /// Closes a section and removes its child rows.
    ///
    /// The delegate's `can_remove_section` is asked first; a veto leaves everything unchanged
    /// and fires no notification.
    pub fn contract(&mut self, section: usize) -> Outcome {
        if !self.section_in_range(section) {
            return Outcome::OutOfRange;
        }
        if !self.expanded.contains(section) {
            etrace!(section, "contract: already collapsed");
            return Outcome::Unchanged;
        }
        if !self.delegate.can_remove_section(section) {
            edebug!(section, "contract vetoed by delegate");
            return Outcome::Vetoed;
        }

        self.delegate.will_contract_section(section);
        let rows = self.layout().child_range(section);
        self.expanded.remove(section);
        edebug!(section, ?rows, "contract");
        if let Some(rows) = rows.filter(|r| !r.is_empty()) {
            self.host.delete_rows(section, rows, self.options.delete_animation);
        }

        self.delegate.did_contract_section(section);
        Outcome::Applied
    }

    pub fn toggle_section(&mut self, section: usize) -> Outcome {
        if self.expanded.contains(section) {
            self.contract(section)
        } else {
            self.expand(section)
        }
    }

    /// The group cell for a section, or the child's cell for a promoted singleton.
    pub fn cell_for_section(&mut self, section: usize) -> Option<D::Cell> {
        if !self.section_in_range(section) {
            return None;
        }
        if self.layout().is_promoted_singleton(section) {
            return Some(self.source.cell_for_row(IndexPath::new(section, 0)));
        }
        Some(self.source.cell_for_group(section))
    }

    /// The cell for a child row, or `None` when the row is not on screen.
    pub fn cell_for_child_row(&mut self, path: IndexPath) -> Option<D::Cell> {
        if !self.cell_visible(path) {
            ewarn!(section = path.section, row = path.row, "cell requested for hidden row");
            return None;
        }
        Some(self.source.cell_for_row(path))
    }

    /// Whether a child row is on screen: its section is expanded, or it is a promoted singleton.
    pub fn cell_visible(&self, path: IndexPath) -> bool {
        self.layout().is_visible(path)
    }

    /// Asks the host to redraw the first visual row of each listed section.
    ///
    /// Sections are treated as a set: each is reloaded once, top to bottom. Out-of-range
    /// sections are skipped. Expansion state is untouched.
    pub fn reload_section_cells(
        &mut self,
        sections: impl IntoIterator<Item = usize>,
        animation: RowAnimation,
    ) {
        let sections: BTreeSet<usize> = sections.into_iter().collect();
        let rows: Vec<VisualRow> = {
            let layout = self.layout();
            sections
                .iter()
                .filter_map(|&s| layout.section_start(s))
                .collect()
        };
        edebug!(rows = rows.len(), "reload_section_cells");
        if !rows.is_empty() {
            self.host.reload_rows(&rows, animation);
        }
    }

    /// Re-validates expansion state after the data source changed, then reloads the host.
    ///
    /// Expanded sections that no longer exist are dropped without notifications.
    pub fn reload_data(&mut self) {
        let dropped = self.expanded.retain_below(self.source.number_of_sections());
        if dropped > 0 {
            edebug!(dropped, "reload_data dropped stale expanded sections");
        }
        self.host.reload_all();
    }

    pub fn snapshot(&self) -> ExpansionSnapshot {
        ExpansionSnapshot {
            expanded: self.expanded.iter().collect(),
            ungroup_single_element: self.options.ungroup_single_element,
        }
    }

    /// Replaces expansion state from a snapshot. Sections that no longer exist are ignored.
    ///
    /// No expand/contract notifications fire; the host gets a full reload.
    pub fn restore(&mut self, snapshot: &ExpansionSnapshot) {
        let count = self.source.number_of_sections();
        self.expanded.clear();
        for &section in &snapshot.expanded {
            if section < count {
                self.expanded.insert(section);
            } else {
                ewarn!(section, count, "restore: skipping out-of-range section");
            }
        }
        self.options.ungroup_single_element = snapshot.ungroup_single_element;
        self.host.reload_all();
    }
}
