use serde::Deserialize;

/// Which touch axis drives card navigation. Products swipe sideways,
/// services swipe up/down while the strip still moves horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAxis {
    Horizontal,
    Vertical,
}

/// Card strip dimensions, split at a single width breakpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports strictly narrower than this use the narrow values.
    pub breakpoint: f64,
    /// Card width as a fraction of the viewport width.
    pub narrow_card_fraction: f64,
    pub wide_card_fraction: f64,
    pub narrow_gap: f64,
    pub wide_gap: f64,
    /// Distance kept between the first card and the right edge when anchored.
    pub edge_padding: f64,
    /// Anchor the first card to the right edge on narrow viewports instead
    /// of centering it.
    pub anchor_first_card: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            narrow_card_fraction: 0.8,
            wide_card_fraction: 0.4,
            narrow_gap: 16.0,
            wide_gap: 32.0,
            edge_padding: 40.0,
            anchor_first_card: false,
        }
    }
}

/// Tunables for one carousel instance.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Max distance (px) between container center and viewport center
    /// for the container to count as centered.
    pub active_zone: f64,
    /// Minimum time between two lock state changes.
    pub lock_cooldown_ms: f64,
    /// After an unlock, lock transitions are ignored for this long.
    pub exit_guard_ms: f64,
    pub wheel_threshold: f64,
    pub swipe_threshold: f64,
    pub swipe_axis: SwipeAxis,
    pub layout: LayoutConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            active_zone: 250.0,
            lock_cooldown_ms: 500.0,
            exit_guard_ms: 300.0,
            wheel_threshold: 150.0,
            swipe_threshold: 50.0,
            swipe_axis: SwipeAxis::Horizontal,
            layout: LayoutConfig::default(),
        }
    }
}

impl CarouselConfig {
    /// "Our Products": sideways swipes, first card hugs the right edge on phones.
    pub fn products() -> Self {
        Self {
            swipe_axis: SwipeAxis::Horizontal,
            layout: LayoutConfig {
                anchor_first_card: true,
                ..LayoutConfig::default()
            },
            ..Self::default()
        }
    }

    /// "Services": vertical swipes, always centered, slightly wider cards on phones.
    pub fn services() -> Self {
        Self {
            active_zone: 300.0,
            swipe_axis: SwipeAxis::Vertical,
            layout: LayoutConfig {
                narrow_card_fraction: 0.85,
                wide_card_fraction: 0.35,
                narrow_gap: 20.0,
                wide_gap: 40.0,
                anchor_first_card: false,
                ..LayoutConfig::default()
            },
            ..Self::default()
        }
    }
}
