use log::{debug, info};

use super::detector::ContainerRect;
use super::geometry::{CardMetrics, OffsetTracker};
use super::machine::{CarouselMachine, GestureResponse, Transition};
use super::settings::CarouselConfig;
use crate::scroll_lock::{OverflowTarget, ScrollLock, ScrollLockGuard};

/// What the component needs to render.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselView {
    pub index: usize,
    pub locked: bool,
}

/// Ties a [`CarouselMachine`] to the page scroll lock.
///
/// The guard is held exactly while the machine is locked. Dropping the
/// controller drops the guard, so a section unmounted mid-carousel cannot
/// leave the page unscrollable.
pub struct CarouselController<T: OverflowTarget> {
    name: String,
    machine: CarouselMachine,
    lock: ScrollLock<T>,
    guard: Option<ScrollLockGuard<T>>,
    offset: OffsetTracker,
    retired: bool,
}

impl<T: OverflowTarget> CarouselController<T> {
    pub fn new(name: impl Into<String>, len: usize, config: CarouselConfig, lock: ScrollLock<T>) -> Self {
        Self {
            name: name.into(),
            machine: CarouselMachine::new(len, config),
            lock,
            guard: None,
            offset: OffsetTracker::default(),
            retired: false,
        }
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            index: self.machine.index(),
            locked: self.machine.is_locked(),
        }
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.machine.is_locked()
    }

    /// Offset for the current card at this viewport width, or the last good
    /// one when the width is unusable.
    pub fn offset(&mut self, viewport_width: f64) -> f64 {
        let index = self.machine.index();
        self.offset.update(index, viewport_width, &self.machine.config().layout)
    }

    pub fn metrics(&self, viewport_width: f64) -> CardMetrics {
        CardMetrics::for_viewport(viewport_width, &self.machine.config().layout)
    }

    pub fn observe(
        &mut self,
        rect: ContainerRect,
        viewport_height: f64,
        scroll_y: f64,
        now_ms: f64,
    ) -> Option<Transition> {
        if self.retired {
            return None;
        }
        let transition = self.machine.observe(rect, viewport_height, scroll_y, now_ms);
        self.settle(transition)
    }

    pub fn wheel(&mut self, delta_y: f64, now_ms: f64) -> GestureResponse {
        if self.retired {
            return GestureResponse::default();
        }
        let response = self.machine.wheel(delta_y, now_ms);
        self.respond(response)
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        if !self.retired {
            self.machine.touch_start(x, y);
        }
    }

    pub fn touch_move(&mut self, x: f64, y: f64) -> bool {
        !self.retired && self.machine.touch_move(x, y)
    }

    pub fn touch_end(&mut self, now_ms: f64) -> GestureResponse {
        if self.retired {
            return GestureResponse::default();
        }
        let response = self.machine.touch_end(now_ms);
        self.respond(response)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.machine.go_to(index)
    }

    pub fn next(&mut self) -> bool {
        self.machine.next()
    }

    pub fn previous(&mut self) -> bool {
        self.machine.previous()
    }

    /// Milliseconds until the container should be sampled again to allow a
    /// relock without waiting for the next scroll event.
    pub fn relock_wait(&self, now_ms: f64) -> Option<f64> {
        if self.retired {
            return None;
        }
        self.machine.relock_wait(now_ms)
    }

    /// Forces the unlock and ignores every later event. Called on unmount.
    pub fn retire(&mut self, now_ms: f64) {
        let transition = self.machine.force_unlock(now_ms);
        self.settle(transition);
        self.retired = true;
    }

    fn respond(&mut self, mut response: GestureResponse) -> GestureResponse {
        if response.moved {
            debug!("[{}] card {}/{}", self.name, self.machine.index() + 1, self.machine.len());
        }
        response.transition = self.settle(response.transition);
        response
    }

    fn settle(&mut self, transition: Option<Transition>) -> Option<Transition> {
        match transition {
            Some(Transition::Locked { index, direction }) => {
                info!("[{}] locked page scroll at card {} ({:?})", self.name, index, direction);
                if self.guard.is_none() {
                    self.guard = Some(self.lock.acquire());
                }
            }
            Some(Transition::Unlocked { index, cause }) => {
                info!("[{}] released page scroll at card {} ({:?})", self.name, index, cause);
                self.guard = None;
            }
            None => {}
        }
        transition
    }
}

impl<T: OverflowTarget> Drop for CarouselController<T> {
    fn drop(&mut self) {
        if self.guard.is_some() {
            debug!("[{}] dropped while locked, releasing page scroll", self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::testing::RecordingOverflow;

    const VIEWPORT_HEIGHT: f64 = 800.0;

    fn controller(len: usize) -> (CarouselController<RecordingOverflow>, RecordingOverflow) {
        let target = RecordingOverflow::default();
        let lock = ScrollLock::new(target.clone());
        let controller = CarouselController::new("products", len, CarouselConfig::default(), lock);
        (controller, target)
    }

    fn enter(controller: &mut CarouselController<RecordingOverflow>, now_ms: f64) -> Option<Transition> {
        controller.observe(ContainerRect::new(100.0, 600.0), VIEWPORT_HEIGHT, 500.0, now_ms)
    }

    #[test]
    fn locking_hides_overflow_and_boundary_exit_restores_it() {
        let (mut controller, target) = controller(4);
        assert!(enter(&mut controller, 1000.0).is_some());
        assert_eq!(target.current().as_deref(), Some("hidden"));
        assert_eq!(controller.view(), CarouselView { index: 0, locked: true });

        for _ in 0..3 {
            assert!(controller.wheel(200.0, 1100.0).moved);
        }
        assert_eq!(controller.view(), CarouselView { index: 3, locked: true });

        let response = controller.wheel(200.0, 1200.0);
        assert!(response.transition.is_some());
        assert_eq!(controller.view(), CarouselView { index: 3, locked: false });
        assert_eq!(target.current().as_deref(), Some(""));
    }

    #[test]
    fn dropping_a_locked_controller_restores_scroll() {
        let (mut controller, target) = controller(3);
        enter(&mut controller, 1000.0);
        assert!(controller.is_locked());

        drop(controller);
        assert_eq!(target.current().as_deref(), Some(""));
    }

    #[test]
    fn retired_controller_ignores_everything() {
        let (mut controller, target) = controller(3);
        enter(&mut controller, 1000.0);
        controller.retire(1100.0);
        assert_eq!(target.current().as_deref(), Some(""));

        assert_eq!(enter(&mut controller, 5000.0), None);
        assert_eq!(controller.wheel(500.0, 5100.0), GestureResponse::default());
        assert_eq!(controller.relock_wait(5100.0), None);
        assert!(!controller.is_locked());
    }

    #[test]
    fn two_sections_share_the_page_lock() {
        let target = RecordingOverflow::default();
        let lock = ScrollLock::new(target.clone());
        let mut products = CarouselController::new("products", 2, CarouselConfig::products(), lock.clone());
        let mut services = CarouselController::new("services", 2, CarouselConfig::services(), lock.clone());

        enter(&mut products, 1000.0);
        enter(&mut services, 1000.0);
        assert_eq!(lock.holders(), 2);

        products.retire(1100.0);
        assert_eq!(target.current().as_deref(), Some("hidden"));
        drop(services);
        assert_eq!(target.current().as_deref(), Some(""));
    }

    #[test]
    fn offset_follows_index_and_survives_zero_width() {
        let (mut controller, _target) = controller(4);
        let first = controller.offset(1280.0);
        controller.next();
        let second = controller.offset(1280.0);
        let stride = controller.metrics(1280.0).stride();

        assert!((first - second - stride).abs() < 1e-9);
        assert_eq!(controller.offset(0.0), second);
    }
}
