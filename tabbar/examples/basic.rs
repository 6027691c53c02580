use tabbar::{Direction, TabBar, TabBarOptions};

fn main() {
    let opts = TabBarOptions::from_labels(["Recent", "Albums", "Artists"]).expect("unique labels");
    let mut bar = TabBar::new(opts);

    // Nothing is derived until the container reports its width.
    println!("before layout: {:?}", bar.layout());

    let layout = bar.on_layout(Some(360.0)).expect("first layout");
    println!(
        "tab_width={} indicator={}x{}",
        layout.metrics.tab_width, layout.metrics.indicator_width, layout.metrics.indicator_height
    );

    bar.for_each_tab(|slot| {
        println!(
            "  tab {} start={} width={} active={}",
            slot.index, slot.start, slot.width, slot.active
        );
    });

    if let Some(layout) = bar.set_selected_index(2) {
        println!("selected 2: indicator_offset={}", layout.indicator_offset);
    }
    if let Some(layout) = bar.set_direction(Direction::Rtl) {
        println!("rtl: indicator_offset={}", layout.indicator_offset);
    }

    // Re-reporting the same width changes nothing.
    println!("same width again: {:?}", bar.on_layout(Some(360.0)));
}
