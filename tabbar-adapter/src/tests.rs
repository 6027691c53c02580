use crate::*;

use std::vec::Vec;

use tabbar::{Direction, TabBarOptions, TabItems, TabMode};

#[derive(Debug, Default)]
struct Recorder(Vec<f64>);

impl ScrollContainer for Recorder {
    fn scroll_to(&mut self, offset: f64) {
        self.0.push(offset);
    }
}

fn options(n: usize) -> TabBarOptions {
    let labels: Vec<std::string::String> = (0..n).map(|i| std::format!("Tab {i}")).collect();
    TabBarOptions::new(TabItems::try_new(labels).unwrap())
}

/// Ticks at ~60fps starting after `now_ms` until the animation settles; returns the end time.
fn run_to_rest<S: ScrollContainer>(c: &mut Controller<S>, mut now_ms: u64) -> u64 {
    for _ in 0..1000 {
        now_ms += 16;
        if c.tick(now_ms).is_none() {
            return now_ms;
        }
    }
    panic!("indicator never settled");
}

#[test]
fn indicator_spring_matches_tension_friction() {
    let cfg = SpringConfig::indicator();
    assert!((cfg.stiffness - 1171.4).abs() < 1e-9);
    assert_eq!(cfg.damping, 61.0);
    assert_eq!(cfg.mass, 1.0);
    assert_eq!(SpringConfig::default(), cfg);
}

#[test]
fn spring_settles_exactly_on_target() {
    let mut s = Spring::new(0.0, SpringConfig::indicator());
    assert!(s.is_at_rest());
    s.retarget(250.0);
    assert!(!s.is_at_rest());

    for _ in 0..200 {
        s.step(0.016);
    }
    assert!(s.is_at_rest());
    assert_eq!(s.value(), 250.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn spring_retarget_keeps_position_and_velocity() {
    let mut s = Spring::new(0.0, SpringConfig::indicator());
    s.retarget(100.0);
    s.step(0.05);
    let (value, velocity) = (s.value(), s.velocity());
    assert!(value > 0.0 && value < 100.0);
    assert!(velocity > 0.0);

    s.retarget(-100.0);
    assert_eq!(s.value(), value);
    assert_eq!(s.velocity(), velocity);
    assert_eq!(s.target(), -100.0);
}

#[test]
fn zero_stiffness_snaps() {
    let mut s = Spring::new(0.0, SpringConfig::new(0.0, 10.0, 1.0));
    s.retarget(42.0);
    s.step(0.016);
    assert_eq!(s.value(), 42.0);
}

#[test]
fn driver_ticks_only_while_animating() {
    let mut d = AnimationDriver::default();
    assert_eq!(d.tick(0), None);

    d.animate_indicator(80.0);
    assert!(d.is_animating());
    let first = d.tick(1_000).unwrap();
    assert!(first > 0.0 && first < 80.0);

    // A long gap between frames is capped rather than simulated in one jump.
    let mut now = 1_000;
    while d.tick(now).is_some() {
        now += 500;
    }
    assert_eq!(d.indicator_offset(), 80.0);
    assert_eq!(d.tick(now + 16), None);

    d.snap_indicator(-5.0);
    assert!(!d.is_animating());
    assert_eq!(d.indicator_offset(), -5.0);
}

#[test]
fn driver_forwards_scroll_commands() {
    let mut d = AnimationDriver::default();
    let mut seen = Vec::new();
    let mut sink = |x: f64| seen.push(x);
    d.command_scroll(12.5, &mut sink);
    d.command_scroll(12.5, &mut sink);
    assert_eq!(seen, [12.5, 12.5]);
}

#[test]
fn controller_animates_fixed_tabs() {
    let mut c = Controller::new(options(3), Recorder::default());

    // Nothing happens before the first layout.
    assert_eq!(c.set_selected_index(0), None);
    assert!(c.scroll().0.is_empty());

    let layout = c.on_layout(Some(300.0)).unwrap();
    assert_eq!(layout.indicator_offset, 0.0);
    assert_eq!(c.scroll().0, [0.0]);
    assert!(!c.is_animating());

    c.set_selected_index(1).unwrap();
    assert!(c.is_animating());
    assert_eq!(c.scroll().0, [0.0, 0.0]);

    run_to_rest(&mut c, 0);
    assert_eq!(c.indicator_offset(), 100.0);
}

#[test]
fn identical_updates_issue_no_commands() {
    let mut c = Controller::new(options(3), Recorder::default());
    c.on_layout(Some(300.0));
    c.set_selected_index(2);
    run_to_rest(&mut c, 0);
    let commands = c.scroll().0.len();

    assert_eq!(c.set_selected_index(2), None);
    assert_eq!(c.on_layout(Some(300.0)), None);
    assert_eq!(c.scroll().0.len(), commands);
    assert!(!c.is_animating());
}

#[test]
fn rapid_selection_changes_retarget() {
    let mut c = Controller::new(options(3), Recorder::default());
    c.on_layout(Some(300.0));

    c.set_selected_index(1);
    c.tick(16);
    c.tick(32);
    let mid = c.indicator_offset();
    let velocity = c.driver().indicator().velocity();
    assert!(mid > 0.0 && mid < 100.0);

    // The second change bends the in-flight animation instead of restarting it.
    c.set_selected_index(2);
    assert_eq!(c.indicator_offset(), mid);
    assert_eq!(c.driver().indicator().velocity(), velocity);
    assert!(c.is_animating());

    let next = c.tick(48).unwrap();
    assert!(next > mid);

    run_to_rest(&mut c, 48);
    let expected = tabbar::indicator_offset(2, TabMode::Fixed, 300.0, 100.0, Direction::Ltr);
    assert_eq!(c.indicator_offset(), expected);
    assert_eq!(c.indicator_offset(), 200.0);
}

#[test]
fn scrollable_rtl_commands_mirrored_scroll() {
    let opts = options(5).with_scrollable(true).with_direction(Direction::Rtl);
    let mut c = Controller::new(opts, Recorder::default());

    c.on_layout(Some(1000.0));
    assert_eq!(c.scroll().0, [1300.0]);

    c.set_selected_index(2);
    assert_eq!(c.scroll().0, [1300.0, 500.0]);

    run_to_rest(&mut c, 0);
    assert_eq!(c.indicator_offset(), -800.0);

    c.set_direction(Direction::Ltr);
    assert_eq!(c.scroll().0, [1300.0, 500.0, 500.0]);
    run_to_rest(&mut c, 10_000);
    assert_eq!(c.indicator_offset(), 800.0);
}

#[test]
fn batch_update_applies_once() {
    let mut c = Controller::new(options(5), Recorder::default());
    let layout = c
        .batch_update(|b| {
            b.on_layout(Some(1000.0));
            b.set_scrollable(true);
            b.set_selected_index(3);
        })
        .unwrap();
    assert_eq!(layout.scroll_offset, 900.0);
    assert_eq!(c.scroll().0, [900.0]);
    assert_eq!(c.driver().indicator_target(), 1200.0);
}

#[test]
fn empty_bar_issues_nothing() {
    let mut c = Controller::new(TabBarOptions::default(), Recorder::default());
    assert_eq!(c.on_layout(Some(300.0)), None);
    assert!(c.scroll().0.is_empty());
    assert!(!c.is_animating());
    assert_eq!(c.tick(16), None);
}

#[test]
fn snap_indicator_jumps_to_layout_target() {
    let mut c = Controller::new(options(4).with_selected_index(3), Recorder::default());
    c.on_layout(Some(400.0));
    assert!(c.is_animating());
    c.snap_indicator();
    assert!(!c.is_animating());
    assert_eq!(c.indicator_offset(), 300.0);

    let (bar, driver, scroll) = c.into_parts();
    assert_eq!(bar.layout().unwrap().indicator_offset, 300.0);
    assert_eq!(driver.indicator_offset(), 300.0);
    assert_eq!(scroll.0, [0.0]);
}

#[test]
fn closures_work_as_scroll_containers() {
    let mut last = None;
    {
        let mut c = Controller::new(options(3).with_scrollable(true), |x: f64| last = Some(x));
        c.on_layout(Some(500.0));
        c.set_selected_index(1);
    }
    assert_eq!(last, Some(50.0));
}
