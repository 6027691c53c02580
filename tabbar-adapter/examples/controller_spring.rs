use tabbar::TabBarOptions;
use tabbar_adapter::Controller;

fn main() {
    // Example: a controller springing the indicator while the host flips through tabs.
    //
    // An adapter would:
    // - report layout and selection changes to the controller
    // - call tick(now_ms) in a frame loop while is_animating()
    // - apply the returned offset as the indicator's translation
    let opts = TabBarOptions::from_labels(["One", "Two", "Three", "Four"])
        .expect("unique labels")
        .with_scrollable(true);
    let mut c = Controller::new(opts, |x: f64| println!("scroll_to({x})"));
    c.on_layout(Some(800.0));

    let mut now_ms = 0u64;
    c.set_selected_index(1);

    loop {
        now_ms += 16;
        // Interrupt the first animation halfway: the spring bends toward the new target.
        if now_ms == 96 {
            c.set_selected_index(3);
        }
        match c.tick(now_ms) {
            Some(off) => {
                if now_ms % 48 == 0 {
                    println!("t={now_ms} indicator={off:.2}");
                }
            }
            None => break,
        }
    }

    println!("done: t={now_ms} indicator={}", c.indicator_offset());
}
