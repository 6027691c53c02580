use alloc::string::String;
use alloc::sync::Arc;

use crate::sizes::DEFAULT_BAR_HEIGHT;
use crate::{
    Direction, DuplicateKeyError, KeyboardShouldPersistTaps, SizeMode, TabItem, TabItems,
    TabLayout, TabMode,
};

/// A callback fired when the user presses a tab. The argument is the tab index.
///
/// The engine never changes the selection itself: the host decides whether to feed the index
/// back through `set_selected_index`.
pub type OnPressCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// A callback fired whenever the derived layout changes.
pub type OnChangeCallback = Arc<dyn Fn(&TabLayout) + Send + Sync>;

/// Text style forwarded untouched to the tab renderer.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    pub font_size: Option<f32>,
    pub font_weight: Option<u16>,
    pub letter_spacing: Option<f32>,
    pub color: Option<String>,
}

/// Pass-through styling. None of these fields affect geometry, and colors are not validated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabBarStyle {
    pub bar_color: String,
    pub indicator_color: String,
    pub active_text_color: String,
    pub inactive_text_color: String,
    pub allow_font_scaling: bool,
    pub uppercase: bool,
    pub text_style: Option<TextStyle>,
    pub active_text_style: Option<TextStyle>,
}

impl Default for TabBarStyle {
    fn default() -> Self {
        Self {
            bar_color: String::from("#13897b"),
            indicator_color: String::from("#fff"),
            active_text_color: String::from("#fff"),
            inactive_text_color: String::from("rgba(255, 255, 255, 0.7)"),
            allow_font_scaling: true,
            uppercase: true,
            text_style: None,
            active_text_style: None,
        }
    }
}

impl TabBarStyle {
    /// Text style for tab `index`: the active style only applies to the selected tab.
    pub fn text_style_for(&self, active: bool) -> Option<&TextStyle> {
        if active {
            self.active_text_style.as_ref().or(self.text_style.as_ref())
        } else {
            self.text_style.as_ref()
        }
    }

    pub fn text_color_for(&self, active: bool) -> &str {
        if active {
            &self.active_text_color
        } else {
            &self.inactive_text_color
        }
    }
}

/// Settings the adapter applies to its horizontal scroll container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollConfig {
    pub horizontal: bool,
    pub scroll_enabled: bool,
    pub shows_horizontal_indicator: bool,
    pub keyboard_should_persist_taps: KeyboardShouldPersistTaps,
}

/// Configuration for [`crate::TabBar`].
///
/// Heavy fields are stored in `Arc`s so adapters can clone, tweak a few fields and hand the
/// result back through `TabBar::set_options`.
pub struct TabBarOptions {
    pub items: TabItems,
    pub selected_index: usize,
    pub mode: TabMode,
    pub direction: Direction,
    pub bar_height: f64,
    /// Indicator width class. `None` means [`SizeMode::Big`].
    pub indicator_width_type: Option<SizeMode>,
    /// Indicator height class. `None` means [`SizeMode::Normal`].
    pub indicator_height_type: Option<SizeMode>,
    pub keyboard_should_persist_taps: KeyboardShouldPersistTaps,
    pub style: TabBarStyle,
    pub on_press: Option<OnPressCallback>,
    /// Optional geometry sink, fired once per emitted layout.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for TabBarOptions {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            selected_index: self.selected_index,
            mode: self.mode,
            direction: self.direction,
            bar_height: self.bar_height,
            indicator_width_type: self.indicator_width_type,
            indicator_height_type: self.indicator_height_type,
            keyboard_should_persist_taps: self.keyboard_should_persist_taps,
            style: self.style.clone(),
            on_press: self.on_press.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl Default for TabBarOptions {
    fn default() -> Self {
        Self::new(TabItems::new())
    }
}

impl TabBarOptions {
    pub fn new(items: TabItems) -> Self {
        Self {
            items,
            selected_index: 0,
            mode: TabMode::Fixed,
            direction: Direction::Ltr,
            bar_height: DEFAULT_BAR_HEIGHT,
            indicator_width_type: None,
            indicator_height_type: None,
            keyboard_should_persist_taps: KeyboardShouldPersistTaps::Never,
            style: TabBarStyle::default(),
            on_press: None,
            on_change: None,
        }
    }

    /// Creates options from plain labels.
    ///
    /// Fails if two labels collide (labels double as keys).
    pub fn from_labels(
        labels: impl IntoIterator<Item = impl Into<TabItem>>,
    ) -> Result<Self, DuplicateKeyError> {
        Ok(Self::new(TabItems::try_new(labels)?))
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn scroll_config(&self) -> ScrollConfig {
        ScrollConfig {
            horizontal: true,
            scroll_enabled: self.mode.is_scrollable(),
            shows_horizontal_indicator: false,
            keyboard_should_persist_taps: self.keyboard_should_persist_taps,
        }
    }

    pub fn with_items(mut self, items: TabItems) -> Self {
        self.items = items;
        self
    }

    pub fn with_selected_index(mut self, selected_index: usize) -> Self {
        self.selected_index = selected_index;
        self
    }

    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.mode = TabMode::from_scrollable(scrollable);
        self
    }

    pub fn with_mode(mut self, mode: TabMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_bar_height(mut self, bar_height: f64) -> Self {
        self.bar_height = bar_height;
        self
    }

    pub fn with_indicator_width_type(mut self, mode: Option<SizeMode>) -> Self {
        self.indicator_width_type = mode;
        self
    }

    pub fn with_indicator_height_type(mut self, mode: Option<SizeMode>) -> Self {
        self.indicator_height_type = mode;
        self
    }

    /// Sets the indicator width class by name; unrecognized names select the default.
    pub fn with_indicator_width_type_name(self, name: &str) -> Self {
        self.with_indicator_width_type(SizeMode::from_name(name))
    }

    /// Sets the indicator height class by name; unrecognized names select the default.
    pub fn with_indicator_height_type_name(self, name: &str) -> Self {
        self.with_indicator_height_type(SizeMode::from_name(name))
    }

    pub fn with_keyboard_should_persist_taps(mut self, mode: KeyboardShouldPersistTaps) -> Self {
        self.keyboard_should_persist_taps = mode;
        self
    }

    pub fn with_style(mut self, style: TabBarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_on_press(mut self, on_press: Option<impl Fn(usize) + Send + Sync + 'static>) -> Self {
        self.on_press = on_press.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&TabLayout) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for TabBarOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TabBarOptions")
            .field("items", &self.items)
            .field("selected_index", &self.selected_index)
            .field("mode", &self.mode)
            .field("direction", &self.direction)
            .field("bar_height", &self.bar_height)
            .field("indicator_width_type", &self.indicator_width_type)
            .field("indicator_height_type", &self.indicator_height_type)
            .field(
                "keyboard_should_persist_taps",
                &self.keyboard_should_persist_taps,
            )
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
