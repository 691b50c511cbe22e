use super::settings::LayoutConfig;

/// Card width and spacing resolved for one viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardMetrics {
    pub card_width: f64,
    pub gap: f64,
    pub narrow: bool,
}

impl CardMetrics {
    pub fn for_viewport(viewport_width: f64, layout: &LayoutConfig) -> Self {
        let narrow = viewport_width < layout.breakpoint;
        let (fraction, gap) = if narrow {
            (layout.narrow_card_fraction, layout.narrow_gap)
        } else {
            (layout.wide_card_fraction, layout.wide_gap)
        };
        Self {
            card_width: viewport_width * fraction,
            gap,
            narrow,
        }
    }

    /// Distance the strip moves per card.
    pub fn stride(&self) -> f64 {
        self.card_width + self.gap
    }
}

/// Horizontal translation of the strip that brings `index` into view.
///
/// Returns `None` for unusable widths (hidden tab, not laid out yet) so the
/// caller can keep whatever it rendered last.
pub fn translate_offset(index: usize, viewport_width: f64, layout: &LayoutConfig) -> Option<f64> {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return None;
    }
    let metrics = CardMetrics::for_viewport(viewport_width, layout);

    if index == 0 && metrics.narrow && layout.anchor_first_card {
        let anchored = viewport_width - metrics.card_width - layout.edge_padding;
        // Too narrow to keep the padding without clipping the card.
        if anchored >= 0.0 {
            return Some(anchored);
        }
    }

    let centered = (viewport_width - metrics.card_width) / 2.0;
    Some(centered - index as f64 * metrics.stride())
}

/// Remembers the last good offset so a zero-width sample does not snap
/// the strip back to 0.
#[derive(Clone, Debug, Default)]
pub struct OffsetTracker {
    last: f64,
}

impl OffsetTracker {
    pub fn update(&mut self, index: usize, viewport_width: f64, layout: &LayoutConfig) -> f64 {
        if let Some(offset) = translate_offset(index, viewport_width, layout) {
            self.last = offset;
        }
        self.last
    }

    #[cfg(test)]
    pub fn last(&self) -> f64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn anchored() -> LayoutConfig {
        LayoutConfig {
            anchor_first_card: true,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn active_card_is_centered_for_every_index() {
        let layout = wide();
        for width in [320.0, 500.0, 767.0, 768.0, 1024.0, 1920.0] {
            let metrics = CardMetrics::for_viewport(width, &layout);
            for len in 1..=8usize {
                for index in 0..len {
                    let offset = translate_offset(index, width, &layout).unwrap();
                    let card_left = offset + index as f64 * metrics.stride();
                    let card_center = card_left + metrics.card_width / 2.0;
                    assert!(
                        (card_center - width / 2.0).abs() <= 1.0,
                        "width {width} index {index}: center {card_center}"
                    );
                }
            }
        }
    }

    #[test]
    fn same_input_gives_same_offset() {
        let layout = anchored();
        for (index, width) in [(0, 375.0), (2, 375.0), (3, 1280.0)] {
            assert_eq!(
                translate_offset(index, width, &layout),
                translate_offset(index, width, &layout)
            );
        }
    }

    #[test]
    fn each_step_moves_by_one_stride() {
        let layout = wide();
        let width = 1280.0;
        let stride = CardMetrics::for_viewport(width, &layout).stride();
        for index in 0..5 {
            let here = translate_offset(index, width, &layout).unwrap();
            let next = translate_offset(index + 1, width, &layout).unwrap();
            assert!((here - next - stride).abs() < 1e-9);
        }
    }

    #[test]
    fn narrow_first_card_is_anchored_to_the_edge() {
        let layout = anchored();
        let width = 375.0;
        let card_width = width * layout.narrow_card_fraction;

        let offset = translate_offset(0, width, &layout).unwrap();
        assert_eq!(offset, width - card_width - 40.0);

        // Later cards go back to centering.
        let second = translate_offset(1, width, &layout).unwrap();
        let metrics = CardMetrics::for_viewport(width, &layout);
        assert_eq!(second, (width - card_width) / 2.0 - metrics.stride());
    }

    #[test]
    fn anchoring_is_ignored_on_wide_viewports() {
        let layout = anchored();
        let width = 1024.0;
        let card_width = width * layout.wide_card_fraction;
        assert_eq!(translate_offset(0, width, &layout), Some((width - card_width) / 2.0));
    }

    #[test]
    fn breakpoint_width_counts_as_wide() {
        let layout = wide();
        assert!(CardMetrics::for_viewport(767.9, &layout).narrow);
        assert!(!CardMetrics::for_viewport(768.0, &layout).narrow);
    }

    #[test]
    fn zero_width_keeps_previous_offset() {
        let layout = wide();
        let mut tracker = OffsetTracker::default();
        let before = tracker.update(2, 1280.0, &layout);

        assert_eq!(translate_offset(2, 0.0, &layout), None);
        assert_eq!(translate_offset(2, f64::NAN, &layout), None);
        assert_eq!(tracker.update(3, 0.0, &layout), before);
        assert_eq!(tracker.last(), before);
    }

    #[test]
    fn centered_card_never_clips() {
        let layout = anchored();
        for width in [200.0, 320.0, 414.0, 800.0, 2560.0] {
            let metrics = CardMetrics::for_viewport(width, &layout);
            for index in 0..4 {
                let offset = translate_offset(index, width, &layout).unwrap();
                let left = offset + index as f64 * metrics.stride();
                assert!(left >= 0.0, "width {width} index {index}");
                assert!(left + metrics.card_width <= width + 1e-9);
            }
        }
    }
}
