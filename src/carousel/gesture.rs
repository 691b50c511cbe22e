use super::settings::SwipeAxis;

/// One discrete navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Advance,
    Retreat,
}

// WheelEvent.deltaMode values
const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;
const LINE_HEIGHT_PX: f64 = 16.0;

/// Converts a wheel delta to pixels. Firefox reports line units for mouse
/// wheels, which would otherwise never reach the pixel threshold.
pub fn normalize_wheel_delta(delta: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        DOM_DELTA_LINE => delta * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta * page_height,
        _ => delta,
    }
}

/// Sums wheel deltas until they cross the threshold in either direction.
#[derive(Clone, Debug)]
pub struct WheelAccumulator {
    total: f64,
    threshold: f64,
}

impl WheelAccumulator {
    pub fn new(threshold: f64) -> Self {
        Self {
            total: 0.0,
            threshold,
        }
    }

    /// Adds a delta and reports a step once the running sum passes the
    /// threshold. The sum is left untouched when a step is reported; the
    /// caller resets it when the step is applied.
    pub fn push(&mut self, delta_y: f64) -> Option<Step> {
        if !delta_y.is_finite() {
            return None;
        }
        self.total += delta_y;
        if self.total > self.threshold {
            Some(Step::Advance)
        } else if self.total < -self.threshold {
            Some(Step::Retreat)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.total = 0.0;
    }

    #[cfg(test)]
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Start and latest position of the current touch.
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    start: Option<(f64, f64)>,
    latest: Option<(f64, f64)>,
}

impl TouchTracker {
    pub fn start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.latest = None;
    }

    pub fn moved(&mut self, x: f64, y: f64) {
        if self.start.is_some() {
            self.latest = Some((x, y));
        }
    }

    #[cfg(test)]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Ends the touch and interprets it along `axis`. Always clears the
    /// recorded coordinates. A touch that never moved is a tap, not a swipe.
    pub fn finish(&mut self, axis: SwipeAxis, threshold: f64) -> Option<Step> {
        let start = self.start.take();
        let latest = self.latest.take();
        let ((start_x, start_y), (end_x, end_y)) = (start?, latest?);

        let dx = start_x - end_x;
        let dy = start_y - end_y;
        let (along, across) = match axis {
            SwipeAxis::Horizontal => (dx, dy),
            SwipeAxis::Vertical => (dy, dx),
        };

        if along.abs() <= across.abs() || along.abs() <= threshold {
            return None;
        }
        // Finger moving left (or up) pulls the next card in.
        if along > 0.0 {
            Some(Step::Advance)
        } else {
            Some(Step::Retreat)
        }
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_steps_only_past_threshold() {
        let mut wheel = WheelAccumulator::new(150.0);
        assert_eq!(wheel.push(100.0), None);
        assert_eq!(wheel.push(50.0), None);
        assert_eq!(wheel.push(1.0), Some(Step::Advance));

        wheel.reset();
        assert_eq!(wheel.push(-149.0), None);
        assert_eq!(wheel.push(-2.0), Some(Step::Retreat));
    }

    #[test]
    fn opposite_deltas_cancel_out() {
        let mut wheel = WheelAccumulator::new(150.0);
        assert_eq!(wheel.push(120.0), None);
        assert_eq!(wheel.push(-100.0), None);
        assert_eq!(wheel.total(), 20.0);
    }

    #[test]
    fn non_finite_wheel_delta_is_ignored() {
        let mut wheel = WheelAccumulator::new(150.0);
        assert_eq!(wheel.push(f64::NAN), None);
        assert_eq!(wheel.push(f64::INFINITY), None);
        assert_eq!(wheel.total(), 0.0);
    }

    #[test]
    fn line_and_page_deltas_are_scaled() {
        assert_eq!(normalize_wheel_delta(3.0, 0, 900.0), 3.0);
        assert_eq!(normalize_wheel_delta(3.0, 1, 900.0), 48.0);
        assert_eq!(normalize_wheel_delta(-1.0, 2, 900.0), -900.0);
    }

    #[test]
    fn horizontal_swipe_maps_to_steps() {
        let mut touch = TouchTracker::default();
        touch.start(300.0, 400.0);
        touch.moved(200.0, 390.0);
        assert_eq!(touch.finish(SwipeAxis::Horizontal, 50.0), Some(Step::Advance));

        touch.start(100.0, 400.0);
        touch.moved(220.0, 410.0);
        assert_eq!(touch.finish(SwipeAxis::Horizontal, 50.0), Some(Step::Retreat));
    }

    #[test]
    fn vertical_axis_ignores_sideways_swipes() {
        let mut touch = TouchTracker::default();
        touch.start(300.0, 400.0);
        touch.moved(150.0, 380.0);
        assert_eq!(touch.finish(SwipeAxis::Vertical, 50.0), None);

        touch.start(300.0, 400.0);
        touch.moved(290.0, 300.0);
        assert_eq!(touch.finish(SwipeAxis::Vertical, 50.0), Some(Step::Advance));
    }

    #[test]
    fn short_swipes_and_taps_do_nothing() {
        let mut touch = TouchTracker::default();
        touch.start(300.0, 400.0);
        touch.moved(260.0, 400.0);
        assert_eq!(touch.finish(SwipeAxis::Horizontal, 50.0), None);

        touch.start(300.0, 400.0);
        assert_eq!(touch.finish(SwipeAxis::Horizontal, 50.0), None);
    }

    #[test]
    fn finish_always_resets_coordinates() {
        let mut touch = TouchTracker::default();
        touch.start(300.0, 400.0);
        touch.moved(100.0, 400.0);
        touch.finish(SwipeAxis::Horizontal, 50.0);
        assert!(!touch.is_tracking());

        // A move without a fresh start is not recorded.
        touch.moved(0.0, 0.0);
        assert_eq!(touch.finish(SwipeAxis::Horizontal, 50.0), None);
    }
}
