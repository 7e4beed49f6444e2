use expandable::{DataSource, ExpandableTable, IndexPath, NoDelegate, TableOptions, VisualRow};
use expandable_adapter::{AnimationQueue, Controller, Easing};

struct Inbox {
    folders: Vec<(&'static str, usize)>,
}

impl DataSource for Inbox {
    type Cell = String;

    fn cell_for_group(&mut self, section: usize) -> String {
        let (name, count) = self.folders[section];
        format!("{name} ({count})")
    }

    fn cell_for_row(&mut self, path: IndexPath) -> String {
        format!("  message #{}", path.row + 1)
    }

    fn number_of_rows(&self, section: usize) -> usize {
        self.folders[section].1
    }

    fn number_of_sections(&self) -> usize {
        self.folders.len()
    }
}

fn main() {
    // Example: an adapter renders from the table every frame and uses the queue only for the
    // cosmetic part (here: how much of an inserted section is revealed).
    let inbox = Inbox {
        folders: vec![("Inbox", 4), ("Archive", 2), ("Spam", 1)],
    };
    let table = ExpandableTable::from_parts(
        inbox,
        NoDelegate,
        AnimationQueue::new(200, Easing::EaseInOutCubic),
        TableOptions::new().with_ungroup_single_element(true),
    );
    let mut c = Controller::new(table);

    let (_, top) = c.toggle_anchored(0, VisualRow(1), 0);
    println!("archive header moved to {top:?}");

    let mut now_ms = 0u64;
    loop {
        now_ms += 40;
        let animating = c.tick(now_ms);
        let reveal = c.transition_progress(0, now_ms).unwrap_or(1.0);
        println!("t={now_ms} phase={:?} reveal={reveal:.2}", c.phase(0));
        if !animating {
            break;
        }
    }

    let rows = c.table().number_of_visual_rows();
    for row in 0..rows {
        if let Some(cell) = c.table_mut().cell_at(VisualRow(row)) {
            println!("{row:>2} {cell}");
        }
    }
}
