// Example: a settings-style list with collapsible groups.
use expandable::{
    DataSource, ExpandableTable, IndexPath, RowAnimation, RowSlot, TableHost, TableOptions,
    VisualRange, VisualRow,
};

struct Settings {
    groups: Vec<(&'static str, Vec<&'static str>)>,
}

impl DataSource for Settings {
    type Cell = String;

    fn cell_for_group(&mut self, section: usize) -> String {
        format!("[+] {}", self.groups[section].0)
    }

    fn cell_for_row(&mut self, path: IndexPath) -> String {
        format!("    {}", self.groups[path.section].1[path.row])
    }

    fn number_of_rows(&self, section: usize) -> usize {
        self.groups[section].1.len()
    }

    fn number_of_sections(&self) -> usize {
        self.groups.len()
    }
}

struct PrintHost;

impl TableHost for PrintHost {
    fn insert_rows(&mut self, section: usize, rows: VisualRange, animation: RowAnimation) {
        println!("insert section={section} rows={rows:?} animation={animation:?}");
    }

    fn delete_rows(&mut self, section: usize, rows: VisualRange, animation: RowAnimation) {
        println!("delete section={section} rows={rows:?} animation={animation:?}");
    }

    fn reload_rows(&mut self, rows: &[VisualRow], animation: RowAnimation) {
        println!("reload rows={rows:?} animation={animation:?}");
    }
}

fn render(t: &mut ExpandableTable<Settings, expandable::NoDelegate, PrintHost>) {
    for row in 0..t.number_of_visual_rows() {
        if let Some(cell) = t.cell_at(VisualRow(row)) {
            println!("{row:>2} {cell}");
        }
    }
    println!();
}

fn main() {
    let settings = Settings {
        groups: vec![
            ("Display", vec!["Brightness", "Night Shift", "Text Size"]),
            ("Sound", vec!["Volume"]),
            ("Privacy", vec![]),
        ],
    };
    let mut t = ExpandableTable::new(settings)
        .with_host(PrintHost)
        .with_options(TableOptions::new().with_insert_animation(RowAnimation::Top));

    render(&mut t);

    // A tap on the first group cell expands it.
    t.did_select(VisualRow(0));
    render(&mut t);

    // Single-row groups can be shown as their only row.
    t.set_ungroup_single_element(true);
    render(&mut t);

    let tapped = VisualRow(2);
    match t.slot_at(tapped) {
        Some(RowSlot::Child(path)) => println!("row {tapped:?} is {path:?}"),
        Some(RowSlot::Header { section }) => println!("row {tapped:?} is group {section}"),
        None => println!("row {tapped:?} is past the end"),
    }
}
