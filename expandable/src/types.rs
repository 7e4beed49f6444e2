/// A logical address: a child row inside a section, as the data source sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// A position in the flattened list the toolkit currently renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualRow(pub usize);

impl VisualRow {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A contiguous run of visual rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl VisualRange {
    pub const fn new(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, row: VisualRow) -> bool {
        row.0 >= self.start && row.0 < self.end
    }

    pub fn rows(&self) -> impl Iterator<Item = VisualRow> + use<> {
        (self.start..self.end).map(VisualRow)
    }
}

/// What a visual row shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowSlot {
    /// The group cell of a section.
    Header { section: usize },
    /// A child row. A promoted singleton (ungrouped section with one child) also lands here.
    Child(IndexPath),
}

impl RowSlot {
    pub fn section(&self) -> usize {
        match self {
            Self::Header { section } => *section,
            Self::Child(path) => path.section,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }

    pub fn index_path(&self) -> Option<IndexPath> {
        match self {
            Self::Header { .. } => None,
            Self::Child(path) => Some(*path),
        }
    }
}

/// Per-section expansion lifecycle.
///
/// The core table mutates state synchronously, so it only ever reports `Collapsed` or
/// `Expanded`; adapters that animate rows report the transitional phases while the animation
/// for a section is pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionPhase {
    #[default]
    Collapsed,
    Expanding,
    Expanded,
    Contracting,
}

impl SectionPhase {
    /// Whether the section contributes its child rows to the logical model.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Expanding | Self::Expanded)
    }
}

/// Presentation style for row insert/delete/reload requests sent to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowAnimation {
    #[default]
    Automatic,
    None,
    Fade,
    Top,
    Bottom,
    Left,
    Right,
    Middle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditingStyle {
    #[default]
    None,
    Delete,
    Insert,
}

/// Result of an expand/contract/toggle request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and the host was told about the affected rows.
    Applied,
    /// The section was already in the requested state.
    Unchanged,
    /// The delegate refused to remove the section.
    Vetoed,
    /// The section index does not exist.
    OutOfRange,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// What a selection event on a visual row turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A group cell was selected and its section toggled.
    Toggled { section: usize, outcome: Outcome },
    /// A child row was selected; the delegate was told about this logical row.
    Forwarded(IndexPath),
    /// Nothing was forwarded: the row does not exist, or header toggling is disabled.
    Ignored,
}
