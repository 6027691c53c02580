use tabbar::{Direction, SizeMode, TabBar, TabBarOptions, TabItems, TabLayout, TabMode};

use crate::{AnimationDriver, ScrollContainer, SpringConfig};

/// A framework-neutral controller that wraps a [`tabbar::TabBar`] and applies every layout it
/// emits: the indicator is sprung toward its new offset and the scroll container is told where
/// to scroll.
///
/// Adapters drive it by calling:
/// - `on_layout` when the bar container is measured
/// - `set_selected_index` (and the other setters) when host props change
/// - `tick(now_ms)` each frame while `is_animating()`
///
/// All calls are expected on one thread; a multi-threaded host should funnel them through a
/// single owner.
#[derive(Clone, Debug)]
pub struct Controller<S> {
    bar: TabBar,
    driver: AnimationDriver,
    scroll: S,
}

impl<S: ScrollContainer> Controller<S> {
    pub fn new(options: TabBarOptions, scroll: S) -> Self {
        Self::from_tab_bar(TabBar::new(options), scroll)
    }

    pub fn from_tab_bar(bar: TabBar, scroll: S) -> Self {
        Self {
            bar,
            driver: AnimationDriver::new(SpringConfig::indicator()),
            scroll,
        }
    }

    pub fn with_spring(mut self, config: SpringConfig) -> Self {
        self.driver = AnimationDriver::new(config);
        self
    }

    pub fn tab_bar(&self) -> &TabBar {
        &self.bar
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn scroll(&self) -> &S {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut S {
        &mut self.scroll
    }

    pub fn into_parts(self) -> (TabBar, AnimationDriver, S) {
        (self.bar, self.driver, self.scroll)
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Current (animated) indicator translation.
    pub fn indicator_offset(&self) -> f64 {
        self.driver.indicator_offset()
    }

    fn apply(&mut self, layout: Option<TabLayout>) -> Option<TabLayout> {
        let layout = layout?;
        self.driver.animate_indicator(layout.indicator_offset);
        self.driver
            .command_scroll(layout.scroll_offset, &mut self.scroll);
        Some(layout)
    }

    pub fn on_layout(&mut self, container_width: Option<f64>) -> Option<TabLayout> {
        let layout = self.bar.on_layout(container_width);
        self.apply(layout)
    }

    pub fn set_selected_index(&mut self, selected_index: usize) -> Option<TabLayout> {
        let layout = self.bar.set_selected_index(selected_index);
        self.apply(layout)
    }

    pub fn set_items(&mut self, items: TabItems) -> Option<TabLayout> {
        let layout = self.bar.set_items(items);
        self.apply(layout)
    }

    pub fn set_mode(&mut self, mode: TabMode) -> Option<TabLayout> {
        let layout = self.bar.set_mode(mode);
        self.apply(layout)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Option<TabLayout> {
        let layout = self.bar.set_direction(direction);
        self.apply(layout)
    }

    pub fn set_size_modes(
        &mut self,
        width: Option<SizeMode>,
        height: Option<SizeMode>,
    ) -> Option<TabLayout> {
        let layout = self.bar.set_size_modes(width, height);
        self.apply(layout)
    }

    pub fn set_options(&mut self, options: TabBarOptions) -> Option<TabLayout> {
        let layout = self.bar.set_options(options);
        self.apply(layout)
    }

    /// Runs several `TabBar` updates and applies the combined layout once.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut TabBar)) -> Option<TabLayout> {
        let layout = self.bar.batch_update(f);
        self.apply(layout)
    }

    /// Forwards a tab press to the host's `on_press` callback.
    pub fn press(&self, index: usize) -> bool {
        self.bar.press(index)
    }

    /// Jumps the indicator to the current layout's target without animating.
    pub fn snap_indicator(&mut self) {
        if let Some(layout) = self.bar.layout() {
            self.driver.snap_indicator(layout.indicator_offset);
        }
    }

    /// Advances the indicator animation; see [`AnimationDriver::tick`].
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        self.driver.tick(now_ms)
    }
}
