use crate::RowAnimation;

/// Configuration for [`crate::ExpandableTable`].
///
/// Cheap to copy; adapters can tweak a field and hand it back through
/// `ExpandableTable::set_options`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableOptions {
    /// Render a section with exactly one child row as that child alone, without a group cell.
    ///
    /// A data source that answers `ungroup_single_elements()` takes precedence.
    pub ungroup_single_element: bool,

    /// Animation used when an expansion inserts child rows.
    pub insert_animation: RowAnimation,
    /// Animation used when a contraction removes child rows.
    pub delete_animation: RowAnimation,
    /// Animation used by `reload_data` and by option changes that alter the layout.
    pub reload_animation: RowAnimation,

    /// Whether selecting a header row toggles its section.
    pub toggle_on_header_select: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TableOptions {
    pub const fn new() -> Self {
        Self {
            ungroup_single_element: false,
            insert_animation: RowAnimation::Automatic,
            delete_animation: RowAnimation::Automatic,
            reload_animation: RowAnimation::Automatic,
            toggle_on_header_select: true,
        }
    }

    pub fn with_ungroup_single_element(mut self, ungroup: bool) -> Self {
        self.ungroup_single_element = ungroup;
        self
    }

    pub fn with_insert_animation(mut self, animation: RowAnimation) -> Self {
        self.insert_animation = animation;
        self
    }

    pub fn with_delete_animation(mut self, animation: RowAnimation) -> Self {
        self.delete_animation = animation;
        self
    }

    pub fn with_reload_animation(mut self, animation: RowAnimation) -> Self {
        self.reload_animation = animation;
        self
    }

    /// Sets insert, delete and reload animations at once.
    pub fn with_animation(mut self, animation: RowAnimation) -> Self {
        self.insert_animation = animation;
        self.delete_animation = animation;
        self.reload_animation = animation;
        self
    }

    pub fn with_toggle_on_header_select(mut self, toggle: bool) -> Self {
        self.toggle_on_header_select = toggle;
        self
    }
}
