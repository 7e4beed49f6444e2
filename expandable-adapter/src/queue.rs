use alloc::vec::Vec;

use expandable::{DataSource, Layout, RowAnimation, TableHost, VisualRange, VisualRow};

use crate::{Easing, Timing};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    Insert,
    Delete,
    Reload,
}

/// A pending, purely cosmetic row animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowTransition {
    pub kind: TransitionKind,
    /// The section whose children move; `None` for reloads.
    pub section: Option<usize>,
    /// Rows as they were when the table made the request.
    pub rows: VisualRange,
    pub animation: RowAnimation,
    pub timing: Timing,
}

impl RowTransition {
    /// The rows this transition covers under the *current* layout.
    ///
    /// Earlier sections may have expanded or contracted since the request, which shifts
    /// visual rows; insert/delete transitions are re-resolved through their section.
    pub fn current_rows<D: DataSource + ?Sized>(
        &self,
        layout: &Layout<'_, D>,
    ) -> Option<VisualRange> {
        match self.section {
            Some(section) => layout.child_range(section),
            None => Some(self.rows),
        }
    }
}

/// A [`TableHost`] that turns row updates into timed transitions.
///
/// The table's state is authoritative and already final when a transition is recorded; the
/// queue only tells a renderer how far along each row animation is. A second update for the
/// same section replaces the pending one, continuing from its current visual position.
#[derive(Clone, Debug)]
pub struct AnimationQueue {
    now_ms: u64,
    duration_ms: u64,
    easing: Easing,
    pending: Vec<RowTransition>,
    reload_all: bool,
}

impl Default for AnimationQueue {
    fn default() -> Self {
        Self::new(250, Easing::SmoothStep)
    }
}

impl AnimationQueue {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            now_ms: 0,
            duration_ms,
            easing,
            pending: Vec::new(),
            reload_all: false,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Sets the timestamp used for transitions recorded from now on.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    pub fn pending(&self) -> &[RowTransition] {
        &self.pending
    }

    pub fn is_animating(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_for(&self, section: usize) -> Option<&RowTransition> {
        self.pending.iter().find(|t| t.section == Some(section))
    }

    /// Retires finished transitions. Returns how many were retired.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        self.now_ms = now_ms;
        let before = self.pending.len();
        self.pending.retain(|t| !t.timing.is_done(now_ms));
        before - self.pending.len()
    }

    /// Drops every pending transition.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Returns and clears the "reload everything" request.
    pub fn take_reload_all(&mut self) -> bool {
        core::mem::take(&mut self.reload_all)
    }

    fn timing_for(&mut self, section: usize) -> Timing {
        let fresh = Timing::new(self.now_ms, self.duration_ms, self.easing);
        let Some(pos) = self.pending.iter().position(|t| t.section == Some(section)) else {
            return fresh;
        };
        let prev = self.pending.remove(pos);
        etrace!(section, "replacing pending transition");
        prev.timing.reversed(self.now_ms)
    }

    fn push_section(
        &mut self,
        kind: TransitionKind,
        section: usize,
        rows: VisualRange,
        animation: RowAnimation,
    ) {
        let timing = self.timing_for(section);
        if animation == RowAnimation::None || timing.is_done(self.now_ms) {
            return;
        }
        self.pending.push(RowTransition {
            kind,
            section: Some(section),
            rows,
            animation,
            timing,
        });
    }
}

impl TableHost for AnimationQueue {
    fn insert_rows(&mut self, section: usize, rows: VisualRange, animation: RowAnimation) {
        self.push_section(TransitionKind::Insert, section, rows, animation);
    }

    fn delete_rows(&mut self, section: usize, rows: VisualRange, animation: RowAnimation) {
        self.push_section(TransitionKind::Delete, section, rows, animation);
    }

    fn reload_rows(&mut self, rows: &[VisualRow], animation: RowAnimation) {
        if animation == RowAnimation::None {
            return;
        }
        let timing = Timing::new(self.now_ms, self.duration_ms, self.easing);
        for row in rows {
            self.pending.push(RowTransition {
                kind: TransitionKind::Reload,
                section: None,
                rows: VisualRange::new(row.0, 1),
                animation,
                timing,
            });
        }
    }

    fn reload_all(&mut self) {
        // Recorded ranges no longer describe the layout.
        self.pending.clear();
        self.reload_all = true;
    }
}
