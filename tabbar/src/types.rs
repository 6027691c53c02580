/// Layout direction of the host environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// How tab widths are derived from the measured container width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TabMode {
    /// Every tab gets `container_width / item_count`; the bar never scrolls.
    #[default]
    Fixed,
    /// Every tab gets a fixed share of the container width; the bar scrolls horizontally.
    Scrollable,
}

impl TabMode {
    pub fn from_scrollable(scrollable: bool) -> Self {
        if scrollable {
            Self::Scrollable
        } else {
            Self::Fixed
        }
    }

    pub fn is_scrollable(self) -> bool {
        matches!(self, Self::Scrollable)
    }
}

/// Indicator size class, used independently for the indicator width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizeMode {
    Big,
    Normal,
    Small,
}

impl SizeMode {
    /// Parses `"big"`, `"normal"` or `"small"` (ASCII case-insensitive).
    ///
    /// Unrecognized names return `None`, which the size tables treat as "use the default".
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("big") {
            Some(Self::Big)
        } else if name.eq_ignore_ascii_case("normal") {
            Some(Self::Normal)
        } else if name.eq_ignore_ascii_case("small") {
            Some(Self::Small)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Normal => "normal",
            Self::Small => "small",
        }
    }
}

/// Tap handling mode forwarded to the scroll container while a keyboard is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum KeyboardShouldPersistTaps {
    #[default]
    Never,
    Always,
    Handled,
}

/// Per-tab and indicator sizes derived from one measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabMetrics {
    /// Width of every tab (and the indicator's scroll unit).
    pub tab_width: f64,
    /// `tab_width` divided by the indicator width factor.
    pub indicator_width: f64,
    pub indicator_height: f64,
    /// Width the indicator bar is actually drawn with.
    ///
    /// Equals `indicator_width` for fixed tabs; scrollable tabs draw a half-tab indicator.
    pub render_indicator_width: f64,
    /// Horizontal inset applied on both sides of the indicator bar.
    pub indicator_margin: f64,
}

/// A fully derived tab bar layout for one set of inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabLayout {
    pub container_width: f64,
    pub item_count: usize,
    pub selected_index: usize,
    pub mode: TabMode,
    pub direction: Direction,
    pub metrics: TabMetrics,
    /// Target horizontal translation of the indicator.
    pub indicator_offset: f64,
    /// Target horizontal scroll position of the tab track (unclamped).
    pub scroll_offset: f64,
}

impl TabLayout {
    /// Total width of the tab track (content width of the scroll container).
    pub fn content_width(&self) -> f64 {
        self.metrics.tab_width * self.item_count as f64
    }
}

/// Placement of one tab inside the tab track, as handed to the tab renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabSlot {
    pub index: usize,
    /// Start offset along the track, in reading order.
    pub start: f64,
    pub width: f64,
    pub height: f64,
    pub active: bool,
}

impl TabSlot {
    pub fn end(&self) -> f64 {
        self.start + self.width
    }
}
