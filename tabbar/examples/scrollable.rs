use tabbar::{Direction, SizeMode, TabBar, TabBarOptions};

fn main() {
    let labels = [
        "Top", "News", "Sport", "Tech", "Science", "Culture", "Travel", "Food",
    ];
    let opts = TabBarOptions::from_labels(labels)
        .expect("unique labels")
        .with_scrollable(true)
        .with_indicator_height_type(Some(SizeMode::Big));
    let mut bar = TabBar::new(opts);
    bar.on_layout(Some(1000.0));

    for direction in [Direction::Ltr, Direction::Rtl] {
        bar.set_direction(direction);
        for i in 0..labels.len() {
            if let Some(layout) = bar.set_selected_index(i) {
                println!(
                    "{direction:?} selected={i} indicator={} scroll={}",
                    layout.indicator_offset, layout.scroll_offset
                );
            }
        }
    }
}
