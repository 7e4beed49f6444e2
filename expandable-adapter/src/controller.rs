use expandable::{
    DataSource, Delegate, ExpandableTable, Outcome, SectionPhase, Selection, VisualRow,
};

use crate::{AnimationQueue, RowAnchor, TransitionKind, capture_anchor, resolve_anchor};

/// A framework-neutral controller that wraps an [`ExpandableTable`] and animates its row
/// updates through an [`AnimationQueue`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `toggle` / `select` when UI events occur
/// - `tick(now_ms)` each frame/timer tick
///
/// and render rows from `table()` every frame, using `transition_progress` for the cosmetic
/// part (e.g. row height while inserting).
#[derive(Clone, Debug)]
pub struct Controller<D, G = expandable::NoDelegate> {
    table: ExpandableTable<D, G, AnimationQueue>,
}

impl<D, G> Controller<D, G>
where
    D: DataSource,
    G: Delegate<D::Cell>,
{
    pub fn new(table: ExpandableTable<D, G, AnimationQueue>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ExpandableTable<D, G, AnimationQueue> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut ExpandableTable<D, G, AnimationQueue> {
        &mut self.table
    }

    pub fn into_table(self) -> ExpandableTable<D, G, AnimationQueue> {
        self.table
    }

    pub fn queue(&self) -> &AnimationQueue {
        self.table.host()
    }

    pub fn is_animating(&self) -> bool {
        self.queue().is_animating()
    }

    pub fn expand(&mut self, section: usize, now_ms: u64) -> Outcome {
        self.table.host_mut().set_now(now_ms);
        self.table.expand(section)
    }

    pub fn contract(&mut self, section: usize, now_ms: u64) -> Outcome {
        self.table.host_mut().set_now(now_ms);
        self.table.contract(section)
    }

    pub fn toggle(&mut self, section: usize, now_ms: u64) -> Outcome {
        self.table.host_mut().set_now(now_ms);
        self.table.toggle_section(section)
    }

    /// Forwards a completed selection (group cells toggle their section).
    pub fn select(&mut self, row: VisualRow, now_ms: u64) -> Selection {
        self.table.host_mut().set_now(now_ms);
        self.table.did_select(row)
    }

    /// Toggles a section and returns where the row that was at `top` ended up.
    ///
    /// Use this to keep the viewport steady when a section above it changes.
    pub fn toggle_anchored(
        &mut self,
        section: usize,
        top: VisualRow,
        now_ms: u64,
    ) -> (Outcome, Option<VisualRow>) {
        let anchor: Option<RowAnchor> = capture_anchor(&self.table.layout(), top);
        let outcome = self.toggle(section, now_ms);
        let moved = anchor.and_then(|a| resolve_anchor(&self.table.layout(), &a));
        (outcome, moved)
    }

    /// Advances animations. Returns `true` while any transition is still pending.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let _retired = self.table.host_mut().tick(now_ms);
        etrace!(now_ms, retired = _retired, "Controller::tick");
        self.is_animating()
    }

    /// The section's lifecycle phase, including the transitional ones while its insert or
    /// delete animation is pending.
    pub fn phase(&self, section: usize) -> SectionPhase {
        match self.queue().pending_for(section).map(|t| t.kind) {
            Some(TransitionKind::Insert) => SectionPhase::Expanding,
            Some(TransitionKind::Delete) => SectionPhase::Contracting,
            _ => self.table.phase(section),
        }
    }

    /// Eased progress of the section's pending transition, if any.
    pub fn transition_progress(&self, section: usize, now_ms: u64) -> Option<f32> {
        self.queue()
            .pending_for(section)
            .map(|t| t.timing.progress(now_ms))
    }
}
