use expandable::{DataSource, Layout, RowSlot, VisualRow};

/// A logical position that survives expansion changes.
///
/// Typical use: remember what sits at the top of the viewport, expand or contract a section
/// above it, then scroll so the same group cell or child row stays on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowAnchor {
    pub slot: RowSlot,
}

/// Captures the slot shown at `row`. Returns `None` past the end of the list.
pub fn capture_anchor<D: DataSource + ?Sized>(
    layout: &Layout<'_, D>,
    row: VisualRow,
) -> Option<RowAnchor> {
    layout.slot_at(row).map(|slot| RowAnchor { slot })
}

/// Finds the anchor's visual row under the current layout.
///
/// When the anchored child row was hidden by a contraction (or a group cell was replaced by
/// its promoted child), falls back to the first row of its section. Returns `None` only when
/// the section itself no longer exists.
pub fn resolve_anchor<D: DataSource + ?Sized>(
    layout: &Layout<'_, D>,
    anchor: &RowAnchor,
) -> Option<VisualRow> {
    layout
        .visual_row_for_slot(anchor.slot)
        .or_else(|| layout.section_start(anchor.slot.section()))
}
