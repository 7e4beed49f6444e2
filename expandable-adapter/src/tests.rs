use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use expandable::{
    DataSource, Delegate, ExpandableTable, IndexPath, NoDelegate, Outcome, RowAnimation,
    RowSlot, SectionPhase, Selection, TableOptions, VisualRange, VisualRow,
};

struct Counts(Vec<usize>);

impl DataSource for Counts {
    type Cell = (usize, Option<usize>);

    fn cell_for_group(&mut self, section: usize) -> Self::Cell {
        (section, None)
    }

    fn cell_for_row(&mut self, path: IndexPath) -> Self::Cell {
        (path.section, Some(path.row))
    }

    fn number_of_rows(&self, section: usize) -> usize {
        self.0[section]
    }

    fn number_of_sections(&self) -> usize {
        self.0.len()
    }
}

fn controller(counts: &[usize]) -> Controller<Counts> {
    Controller::new(ExpandableTable::from_parts(
        Counts(counts.to_vec()),
        NoDelegate,
        AnimationQueue::new(100, Easing::Linear),
        TableOptions::default(),
    ))
}

#[test]
fn expand_reports_expanding_until_the_animation_ends() {
    let mut c = controller(&[3, 2]);
    assert_eq!(c.toggle(0, 1_000), Outcome::Applied);

    // State is final immediately; only the animation lags.
    assert!(c.table().is_expanded(0));
    assert_eq!(c.table().number_of_visual_rows(), 5);
    assert_eq!(c.phase(0), SectionPhase::Expanding);
    assert_eq!(c.phase(1), SectionPhase::Collapsed);

    let t = c.queue().pending_for(0).copied().unwrap();
    assert_eq!(t.kind, TransitionKind::Insert);
    assert_eq!(t.rows, VisualRange::new(1, 3));

    assert!(c.tick(1_050));
    assert_eq!(c.transition_progress(0, 1_050), Some(0.5));
    assert!(!c.tick(1_100));
    assert_eq!(c.phase(0), SectionPhase::Expanded);
    assert_eq!(c.transition_progress(0, 1_100), None);
}

#[test]
fn rapid_toggle_reverses_the_pending_animation() {
    let mut c = controller(&[4]);
    c.toggle(0, 1_000);
    c.tick(1_030);
    c.toggle(0, 1_030);

    assert!(!c.table().is_expanded(0));
    assert_eq!(c.phase(0), SectionPhase::Contracting);
    assert_eq!(c.queue().pending().len(), 1);

    // The delete picks up 70% of the way through.
    let t = c.queue().pending_for(0).copied().unwrap();
    assert_eq!(t.kind, TransitionKind::Delete);
    assert_eq!(t.timing.elapsed(1_030), 70);
    assert!(!c.tick(1_060));
    assert_eq!(c.phase(0), SectionPhase::Collapsed);
}

struct Pinned;

impl Delegate<(usize, Option<usize>)> for Pinned {
    fn can_remove_section(&mut self, _section: usize) -> bool {
        false
    }
}

#[test]
fn vetoed_contract_does_not_animate() {
    let mut c = Controller::new(ExpandableTable::from_parts(
        Counts(vec![3]),
        Pinned,
        AnimationQueue::new(100, Easing::Linear),
        TableOptions::default(),
    ));
    assert_eq!(c.toggle(0, 1_000), Outcome::Applied);
    assert!(!c.tick(1_100));

    assert_eq!(c.toggle(0, 1_200), Outcome::Vetoed);
    assert!(c.table().is_expanded(0));
    assert!(!c.is_animating());
    assert_eq!(c.phase(0), SectionPhase::Expanded);
}

#[test]
fn empty_or_missing_toggles_do_not_animate() {
    let mut c = controller(&[0, 2]);
    assert_eq!(c.toggle(0, 0), Outcome::Applied);
    assert!(!c.is_animating());
    assert_eq!(c.phase(0), SectionPhase::Expanded);
    assert_eq!(c.toggle(5, 0), Outcome::OutOfRange);
    assert!(!c.is_animating());
}

#[test]
fn no_animation_style_skips_the_queue() {
    let mut c = controller(&[2]);
    c.table_mut().set_options(TableOptions::new().with_animation(RowAnimation::None));
    c.toggle(0, 0);
    assert!(c.table().is_expanded(0));
    assert!(!c.is_animating());
}

#[test]
fn header_select_goes_through_the_queue() {
    let mut c = controller(&[2, 2]);
    assert_eq!(
        c.select(VisualRow(1), 10),
        Selection::Toggled {
            section: 1,
            outcome: Outcome::Applied
        }
    );
    assert_eq!(c.phase(1), SectionPhase::Expanding);
    assert_eq!(c.queue().pending()[0].timing.start_ms, 10);
}

#[test]
fn transitions_follow_their_section_when_rows_shift() {
    let mut c = controller(&[2, 3]);
    c.toggle(1, 0);
    c.toggle(0, 10);

    let t = c.queue().pending_for(1).copied().unwrap();
    assert_eq!(t.rows, VisualRange::new(2, 3));
    assert_eq!(
        t.current_rows(&c.table().layout()),
        Some(VisualRange::new(4, 3))
    );
}

#[test]
fn reload_all_discards_pending_transitions() {
    let mut c = controller(&[2, 1]);
    c.toggle(0, 0);
    c.table_mut().set_ungroup_single_element(true);
    assert!(!c.is_animating());
    assert!(c.table_mut().host_mut().take_reload_all());
    assert!(!c.table_mut().host_mut().take_reload_all());
}

#[test]
fn reload_rows_animate_individually() {
    let mut c = controller(&[1, 1, 1]);
    c.table_mut().reload_section_cells([0, 2], RowAnimation::Fade);
    let kinds: Vec<(TransitionKind, VisualRange)> =
        c.queue().pending().iter().map(|t| (t.kind, t.rows)).collect();
    assert_eq!(
        kinds,
        [
            (TransitionKind::Reload, VisualRange::new(0, 1)),
            (TransitionKind::Reload, VisualRange::new(2, 1)),
        ]
    );
}

#[test]
fn anchor_keeps_the_top_row_across_expansion() {
    let mut c = controller(&[3, 2, 2]);

    // Section 2's group cell sits at row 2 while everything is collapsed.
    let (outcome, moved) = c.toggle_anchored(0, VisualRow(2), 0);
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(moved, Some(VisualRow(5)));

    let anchor = capture_anchor(&c.table().layout(), VisualRow(2)).unwrap();
    assert_eq!(anchor.slot, RowSlot::Child(IndexPath::new(0, 1)));

    // The anchored child disappears with its section; fall back to the group cell.
    c.toggle(0, 10);
    assert_eq!(resolve_anchor(&c.table().layout(), &anchor), Some(VisualRow(0)));
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
    let t = Timing::new(100, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert!(t.is_done(101));
}
