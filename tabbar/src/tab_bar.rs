use alloc::vec::Vec;

use crate::geometry::{compute_metrics, indicator_offset, scroll_offset};
use crate::{
    Direction, MeasureState, ScrollConfig, SizeMode, TabBarInputs, TabBarOptions, TabItems,
    TabLayout, TabMode, TabSlot,
};

/// A headless tab bar engine.
///
/// `TabBar` keeps tab widths, the indicator target and the scroll target in sync with its
/// inputs (measured width, items, selection, mode, direction, size classes):
/// - It does not hold any UI objects.
/// - Your adapter drives it by reporting layout measurements and selection changes.
/// - Every setter re-derives the geometry and returns the new [`TabLayout`] only when it
///   differs from the last one emitted. Repeating an update is an observable no-op.
///
/// For spring animation of the indicator and scroll commands, see the `tabbar-adapter` crate.
#[derive(Clone, Debug)]
pub struct TabBar {
    options: TabBarOptions,
    container_width: Option<f64>,
    layout: Option<TabLayout>,

    batch_depth: usize,
    batch_pending: bool,
}

impl TabBar {
    pub fn new(options: TabBarOptions) -> Self {
        tdebug!(
            item_count = options.items.len(),
            selected_index = options.selected_index,
            scrollable = options.mode.is_scrollable(),
            "TabBar::new"
        );
        Self {
            options,
            container_width: None,
            layout: None,
            batch_depth: 0,
            batch_pending: false,
        }
    }

    pub fn options(&self) -> &TabBarOptions {
        &self.options
    }

    pub fn items(&self) -> &TabItems {
        &self.options.items
    }

    pub fn item_count(&self) -> usize {
        self.options.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.items.is_empty()
    }

    /// The selection as supplied by the host (not clamped).
    pub fn selected_index(&self) -> usize {
        self.options.selected_index
    }

    pub fn mode(&self) -> TabMode {
        self.options.mode
    }

    pub fn direction(&self) -> Direction {
        self.options.direction
    }

    pub fn container_width(&self) -> Option<f64> {
        self.container_width
    }

    pub fn measure_state(&self) -> MeasureState {
        self.inputs().measure_state()
    }

    pub fn scroll_config(&self) -> ScrollConfig {
        self.options.scroll_config()
    }

    /// Snapshot of every input the geometry depends on.
    pub fn inputs(&self) -> TabBarInputs {
        TabBarInputs {
            container_width: self.container_width,
            item_count: self.options.items.len(),
            selected_index: self.options.selected_index,
            mode: self.options.mode,
            direction: self.options.direction,
            indicator_width_type: self.options.indicator_width_type,
            indicator_height_type: self.options.indicator_height_type,
        }
    }

    /// The last emitted layout.
    ///
    /// `None` while unmeasured or while there are no tabs (nothing should be rendered).
    pub fn layout(&self) -> Option<&TabLayout> {
        self.layout.as_ref()
    }

    pub fn set_options(&mut self, options: TabBarOptions) -> Option<TabLayout> {
        self.options = options;
        ttrace!(
            item_count = self.options.items.len(),
            selected_index = self.options.selected_index,
            "TabBar::set_options"
        );
        self.sync()
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut TabBarOptions)) -> Option<TabLayout> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Reports a layout pass of the bar container.
    ///
    /// `None` means the container is not ready yet; the event is ignored and the bar waits for
    /// the next one. Every `Some` replaces the previous measurement, including width 0.
    pub fn on_layout(&mut self, container_width: Option<f64>) -> Option<TabLayout> {
        let Some(width) = container_width else {
            tdebug!("TabBar::on_layout: container not ready");
            return None;
        };
        if self.container_width.is_none() {
            tdebug!(width, "TabBar: first measurement");
        }
        self.container_width = Some(width);
        self.sync()
    }

    pub fn set_items(&mut self, items: TabItems) -> Option<TabLayout> {
        self.options.items = items;
        self.sync()
    }

    pub fn set_selected_index(&mut self, selected_index: usize) -> Option<TabLayout> {
        self.options.selected_index = selected_index;
        self.sync()
    }

    pub fn set_mode(&mut self, mode: TabMode) -> Option<TabLayout> {
        self.options.mode = mode;
        self.sync()
    }

    pub fn set_scrollable(&mut self, scrollable: bool) -> Option<TabLayout> {
        self.set_mode(TabMode::from_scrollable(scrollable))
    }

    pub fn set_direction(&mut self, direction: Direction) -> Option<TabLayout> {
        self.options.direction = direction;
        self.sync()
    }

    pub fn set_size_modes(
        &mut self,
        width: Option<SizeMode>,
        height: Option<SizeMode>,
    ) -> Option<TabLayout> {
        self.options.indicator_width_type = width;
        self.options.indicator_height_type = height;
        self.sync()
    }

    /// Batches several updates into a single recomputation.
    ///
    /// Setters called inside `f` return `None`; the combined result (if it changed) is returned
    /// here and delivered to `on_change` once.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) -> Option<TabLayout> {
        self.batch_depth = self.batch_depth.saturating_add(1);

        f(self);

        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);

        if self.batch_depth == 0 && core::mem::take(&mut self.batch_pending) {
            return self.recompute();
        }
        None
    }

    fn sync(&mut self) -> Option<TabLayout> {
        if self.batch_depth > 0 {
            self.batch_pending = true;
            return None;
        }
        self.recompute()
    }

    /// Re-derives the layout from the current inputs.
    ///
    /// Returns the new layout only if it differs from the last emitted one.
    pub fn recompute(&mut self) -> Option<TabLayout> {
        let Some(next) = self.derive() else {
            if self.layout.take().is_some() {
                ttrace!("TabBar::recompute: nothing to render");
            }
            return None;
        };

        if self.layout.as_ref() == Some(&next) {
            return None;
        }

        ttrace!(
            selected_index = next.selected_index,
            indicator_offset = next.indicator_offset,
            scroll_offset = next.scroll_offset,
            "TabBar::recompute"
        );
        self.layout = Some(next);
        if let Some(cb) = &self.options.on_change {
            cb(&next);
        }
        Some(next)
    }

    fn derive(&self) -> Option<TabLayout> {
        let inputs = self.inputs();
        let container_width = inputs.container_width?;
        if inputs.item_count == 0 {
            return None;
        }

        let metrics = compute_metrics(
            container_width,
            inputs.item_count,
            inputs.mode,
            inputs.indicator_width_type,
            inputs.indicator_height_type,
        )?;

        let selected_index = inputs.clamped_selected_index();
        if selected_index != inputs.selected_index {
            twarn!(
                selected_index = inputs.selected_index,
                item_count = inputs.item_count,
                "TabBar: selected_index out of range, clamping"
            );
        }

        Some(TabLayout {
            container_width,
            item_count: inputs.item_count,
            selected_index,
            mode: inputs.mode,
            direction: inputs.direction,
            metrics,
            indicator_offset: indicator_offset(
                selected_index,
                inputs.mode,
                container_width,
                metrics.tab_width,
                inputs.direction,
            ),
            scroll_offset: scroll_offset(
                selected_index,
                inputs.item_count,
                inputs.mode,
                container_width,
                inputs.direction,
            ),
        })
    }

    /// Reports a press on tab `index` to the host's `on_press` callback.
    ///
    /// Returns `true` if the callback was invoked. The selection itself is left untouched.
    pub fn press(&self, index: usize) -> bool {
        if index >= self.item_count() {
            twarn!(index, item_count = self.item_count(), "TabBar::press: out of range");
            return false;
        }
        match &self.options.on_press {
            Some(cb) => {
                cb(index);
                true
            }
            None => false,
        }
    }

    /// Iterates the tab placements of the current layout, in index order.
    ///
    /// Does nothing while there is no layout.
    pub fn for_each_tab(&self, mut f: impl FnMut(TabSlot)) {
        let Some(layout) = &self.layout else {
            return;
        };
        let width = layout.metrics.tab_width;
        for index in 0..layout.item_count {
            f(TabSlot {
                index,
                start: index as f64 * width,
                width,
                height: self.options.bar_height,
                active: index == layout.selected_index,
            });
        }
    }

    pub fn tab_slots(&self) -> Vec<TabSlot> {
        let mut out = Vec::with_capacity(if self.layout.is_some() {
            self.item_count()
        } else {
            0
        });
        self.for_each_tab(|slot| out.push(slot));
        out
    }
}
