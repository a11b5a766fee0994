// Example: window + padding for a large fixed-height list.
use rowwindow::{Align, RowWindow, WindowOptions};

fn main() {
    let mut w = RowWindow::new(WindowOptions::new(1_000_000, 35).with_overscan(5));
    w.set_viewport_size(384);
    w.set_scroll_offset(123_456);

    let mut slots = Vec::new();
    w.collect_slots(&mut slots);
    println!("total_size={}", w.total_size());
    println!("window={:?}", w.window());
    println!("padding={:?}", w.padding());
    println!("first_slot={:?}", slots.first());

    let off = w.scroll_to_index_offset(999_999, Align::End);
    w.set_scroll_offset_clamped(off);
    println!("after scroll_to_index: offset={}", w.scroll_offset());
}
