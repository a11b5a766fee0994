// Example: a 10k-row person table driven by simulated layout/scroll events.
use rowwindow::Rect;
use rowwindow_table::{
    OverlayFactory, OverlayInstance, OverlayOptions, ScrollEvent, TableOptions, VirtualTable,
};

struct PrintlnOverlay;

impl OverlayInstance for PrintlnOverlay {
    fn destroy(&mut self) {
        println!("overlay destroyed");
    }
}

struct PrintlnFactory;

impl OverlayFactory for PrintlnFactory {
    type Element = u32;
    type Instance = PrintlnOverlay;

    fn initialize(&mut self, host: u32, viewport: u32, _options: &OverlayOptions) -> PrintlnOverlay {
        println!("overlay initialized: host=#{host} viewport=#{viewport}");
        PrintlnOverlay
    }
}

fn main() {
    let mut table = VirtualTable::with_people(
        10_000,
        0xfeed,
        TableOptions::new(35).with_overscan(5),
        PrintlnFactory,
    );

    // First render commit: layout reports geometry, then the overlay attaches.
    table.on_resize(Rect {
        main: 384,
        cross: 800,
    });
    table.mount(Some(1), Some(2));

    for (y, now_ms) in [(0u64, 0u64), (3_500, 16), (123_456, 32), (349_616, 48)] {
        table.on_scroll(ScrollEvent { x: 0, y, now_ms });
        let model = table.render_model();
        println!(
            "y={y}: rows {}..{} top_spacer={:?} bottom_spacer={:?}",
            model.rows.first().map_or(0, |r| r.index),
            model.rows.last().map_or(0, |r| r.index),
            model.top_spacer,
            model.bottom_spacer,
        );
    }

    let model = table.render_model();
    if let Some(row) = model.rows.first() {
        println!("sample row: {:?}", row.cells);
    }

    table.unmount();
}
