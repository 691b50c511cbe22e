use super::detector::{read_zone, ContainerRect, DirectionTracker, ScrollDirection};
use super::gesture::{Step, TouchTracker, WheelAccumulator};
use super::settings::CarouselConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockState {
    /// Page scrolls normally.
    Unlocked,
    /// Page scroll is suppressed and gestures move between cards.
    Locked,
}

/// Inputs that can flip the lock state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockEvent {
    EnteredZone,
    SteppedPastEdge,
    LeftViewport,
    Unmounted,
}

impl LockState {
    /// Transition table. `None` means the event has no effect in this state.
    pub fn on(self, event: LockEvent) -> Option<LockState> {
        match (self, event) {
            (LockState::Unlocked, LockEvent::EnteredZone) => Some(LockState::Locked),
            (
                LockState::Locked,
                LockEvent::SteppedPastEdge | LockEvent::LeftViewport | LockEvent::Unmounted,
            ) => Some(LockState::Unlocked),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Locked {
        index: usize,
        direction: ScrollDirection,
    },
    Unlocked {
        index: usize,
        cause: LockEvent,
    },
}

/// What the binding should do with the event that produced this.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureResponse {
    pub prevent_default: bool,
    /// The active card changed.
    pub moved: bool,
    pub transition: Option<Transition>,
}

/// Lock state, active card and gesture bookkeeping for one carousel.
///
/// Time is passed in as milliseconds on any monotonic-enough clock
/// (`Date.now()` in the browser) so the machine stays deterministic.
#[derive(Clone, Debug)]
pub struct CarouselMachine {
    state: LockState,
    index: usize,
    len: usize,
    config: CarouselConfig,
    last_change_ms: Option<f64>,
    guard_until_ms: f64,
    /// Set on unlock, cleared by the first sample outside the active zone.
    /// Relocking needs a fresh entry, not just a container that never left.
    awaiting_exit: bool,
    direction: DirectionTracker,
    wheel: WheelAccumulator,
    touch: TouchTracker,
}

impl CarouselMachine {
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        let wheel = WheelAccumulator::new(config.wheel_threshold);
        Self {
            state: LockState::Unlocked,
            index: 0,
            len,
            config,
            last_change_ms: None,
            guard_until_ms: f64::NEG_INFINITY,
            awaiting_exit: false,
            direction: DirectionTracker::default(),
            wheel,
            touch: TouchTracker::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == LockState::Locked
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn wheel_total(&self) -> f64 {
        self.wheel.total()
    }

    /// Feeds one position sample. Locks when the container is centered,
    /// unlocks when it has left the viewport.
    pub fn observe(
        &mut self,
        rect: ContainerRect,
        viewport_height: f64,
        scroll_y: f64,
        now_ms: f64,
    ) -> Option<Transition> {
        if self.len == 0 {
            return None;
        }
        let direction = self.direction.observe(scroll_y);
        let reading = read_zone(rect, viewport_height, self.config.active_zone)?;
        if !reading.lock_eligible() {
            self.awaiting_exit = false;
        }

        match self.state {
            LockState::Unlocked if reading.lock_eligible() && self.may_lock(now_ms) => {
                self.index = match direction {
                    ScrollDirection::Down => 0,
                    ScrollDirection::Up => self.len - 1,
                };
                self.apply(LockEvent::EnteredZone, now_ms)?;
                Some(Transition::Locked {
                    index: self.index,
                    direction,
                })
            }
            LockState::Locked if !reading.intersecting => self.unlock(LockEvent::LeftViewport, now_ms),
            _ => None,
        }
    }

    pub fn wheel(&mut self, delta_y: f64, now_ms: f64) -> GestureResponse {
        if !self.is_locked() {
            return GestureResponse::default();
        }
        let mut response = GestureResponse {
            prevent_default: true,
            ..GestureResponse::default()
        };
        if let Some(step) = self.wheel.push(delta_y) {
            self.step(step, now_ms, &mut response);
        }
        response
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        if self.is_locked() {
            self.touch.start(x, y);
        }
    }

    /// Returns whether the browser's default scrolling should be suppressed.
    pub fn touch_move(&mut self, x: f64, y: f64) -> bool {
        if !self.is_locked() {
            return false;
        }
        self.touch.moved(x, y);
        true
    }

    pub fn touch_end(&mut self, now_ms: f64) -> GestureResponse {
        if !self.is_locked() {
            self.touch.clear();
            return GestureResponse::default();
        }
        let mut response = GestureResponse::default();
        let axis = self.config.swipe_axis;
        if let Some(step) = self.touch.finish(axis, self.config.swipe_threshold) {
            self.step(step, now_ms, &mut response);
        }
        response
    }

    /// Jumps straight to a card (dot indicators). Never changes the lock state.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = self.clamp(index);
        self.wheel.reset();
        if target == self.index {
            return false;
        }
        self.index = target;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.index.saturating_add(1))
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.index.saturating_sub(1))
    }

    /// Unconditional unlock used on teardown.
    pub fn force_unlock(&mut self, now_ms: f64) -> Option<Transition> {
        self.unlock(LockEvent::Unmounted, now_ms)
    }

    /// How long until a lock could happen again, if something is holding it off.
    pub fn relock_wait(&self, now_ms: f64) -> Option<f64> {
        if self.is_locked() {
            return None;
        }
        let cooldown_end = self
            .last_change_ms
            .map(|at| at + self.config.lock_cooldown_ms)
            .unwrap_or(f64::NEG_INFINITY);
        let wait = cooldown_end.max(self.guard_until_ms) - now_ms;
        (wait > 0.0).then_some(wait)
    }

    fn may_lock(&self, now_ms: f64) -> bool {
        let cooled = self
            .last_change_ms
            .map_or(true, |at| now_ms - at >= self.config.lock_cooldown_ms);
        cooled && now_ms >= self.guard_until_ms && !self.awaiting_exit
    }

    fn step(&mut self, step: Step, now_ms: f64, response: &mut GestureResponse) {
        match step {
            Step::Advance if self.index + 1 < self.len => {
                self.index += 1;
                self.wheel.reset();
                response.moved = true;
            }
            Step::Retreat if self.index > 0 => {
                self.index -= 1;
                self.wheel.reset();
                response.moved = true;
            }
            _ => response.transition = self.unlock(LockEvent::SteppedPastEdge, now_ms),
        }
    }

    fn unlock(&mut self, cause: LockEvent, now_ms: f64) -> Option<Transition> {
        self.apply(cause, now_ms)?;
        self.guard_until_ms = now_ms + self.config.exit_guard_ms;
        self.awaiting_exit = true;
        Some(Transition::Unlocked {
            index: self.index,
            cause,
        })
    }

    fn apply(&mut self, event: LockEvent, now_ms: f64) -> Option<LockState> {
        let next = self.state.on(event)?;
        self.state = next;
        self.last_change_ms = Some(now_ms);
        self.wheel.reset();
        self.touch.clear();
        Some(next)
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.len.saturating_sub(1))
    }
}
