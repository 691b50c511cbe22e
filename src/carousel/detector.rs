/// The container's bounding box relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub top: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Where the container sits relative to the viewport for one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneReading {
    pub intersecting: bool,
    pub in_active_zone: bool,
}

impl ZoneReading {
    pub fn lock_eligible(&self) -> bool {
        self.intersecting && self.in_active_zone
    }
}

/// Classifies a sample. `None` when the viewport has no height, which
/// happens for hidden tabs and before first layout.
pub fn read_zone(rect: ContainerRect, viewport_height: f64, active_zone: f64) -> Option<ZoneReading> {
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        return None;
    }
    if !rect.top.is_finite() || !rect.height.is_finite() {
        return None;
    }

    let intersecting = rect.top < viewport_height && rect.bottom() > 0.0;
    let distance = (rect.center() - viewport_height / 2.0).abs();

    Some(ZoneReading {
        intersecting,
        in_active_zone: distance < active_zone,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Compares each `scrollY` sample with the previous one.
#[derive(Clone, Debug, Default)]
pub struct DirectionTracker {
    last_scroll_y: Option<f64>,
    last_direction: Option<ScrollDirection>,
}

impl DirectionTracker {
    /// Records `scroll_y` and returns the direction of travel since the
    /// last sample. An unchanged position repeats the previous direction,
    /// defaulting to `Down`.
    pub fn observe(&mut self, scroll_y: f64) -> ScrollDirection {
        let direction = match self.last_scroll_y {
            Some(last) if scroll_y < last => ScrollDirection::Up,
            Some(last) if scroll_y > last => ScrollDirection::Down,
            _ => self.last_direction.unwrap_or(ScrollDirection::Down),
        };
        self.last_scroll_y = Some(scroll_y);
        self.last_direction = Some(direction);
        direction
    }
}
