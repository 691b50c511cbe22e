use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, TouchEvent, WheelEvent, Window};
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::carousel::machine::{GestureResponse, LockEvent, Transition};
use crate::carousel::{normalize_wheel_delta, CarouselConfig, CarouselController, CarouselView, ContainerRect};
use crate::components::card::{Card, CardView};
use crate::scroll_lock::{DocumentOverflow, ScrollLock};

type SharedController = Rc<RefCell<CarouselController<DocumentOverflow>>>;

fn now() -> f64 {
    web_sys::js_sys::Date::now()
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// A window listener that unregisters itself when dropped.
struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    fn new(window: &Window, event: &'static str, passive: bool, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        // wheel/touchmove must be non-passive or preventDefault is ignored
        options.set_passive(passive);

        match window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                window: window.clone(),
                event,
                callback,
            }),
            Err(err) => {
                warn!("Could not listen for {}: {:?}", event, err);
                None
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Everything an event handler needs: where the section is, its controller,
/// and how to ask for a re-render.
#[derive(Clone)]
struct Binding {
    container: NodeRef,
    controller: SharedController,
    view: UseStateSetter<CarouselView>,
}

impl Binding {
    fn publish(&self) {
        let view = self.controller.borrow().view();
        self.view.set(view);
    }

    fn sample(&self) {
        let Some(element) = self.container.cast::<Element>() else {
            debug!("Carousel container not mounted yet");
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let scroll_y = window.scroll_y().unwrap_or(0.0);

        let transition = self.controller.borrow_mut().observe(
            ContainerRect::new(rect.top(), rect.height()),
            viewport_height(&window),
            scroll_y,
            now(),
        );
        if transition.is_some() {
            self.after(transition);
        }
    }

    fn respond(&self, response: GestureResponse) {
        if response.moved || response.transition.is_some() {
            self.after(response.transition);
        }
    }

    fn after(&self, transition: Option<Transition>) {
        self.publish();
        // A boundary exit hands scroll back to the page; the user has to
        // scroll away and come back before it locks again.
        if let Some(Transition::Unlocked { cause, .. }) = transition {
            if cause != LockEvent::SteppedPastEdge {
                self.schedule_relock();
            }
        }
    }

    // The container may still be centered once the exit guard expires; with
    // page scroll idle nothing else would sample it.
    fn schedule_relock(&self) {
        let Some(wait) = self.controller.borrow().relock_wait(now()) else {
            return;
        };
        let binding = self.clone();
        Timeout::new(wait.ceil() as u32, move || binding.sample()).forget();
    }

    fn listen(&self, window: &Window) -> Vec<WindowListener> {
        let mut listeners = Vec::new();

        let binding = self.clone();
        listeners.extend(WindowListener::new(window, "scroll", true, move |_| binding.sample()));

        let binding = self.clone();
        listeners.extend(WindowListener::new(window, "resize", true, move |_| binding.sample()));

        let binding = self.clone();
        listeners.extend(WindowListener::new(window, "wheel", false, move |event: Event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let page_height = web_sys::window().map(|w| viewport_height(&w)).unwrap_or(0.0);
            let delta = normalize_wheel_delta(wheel.delta_y(), wheel.delta_mode(), page_height);
            let response = binding.controller.borrow_mut().wheel(delta, now());
            if response.prevent_default {
                event.prevent_default();
            }
            binding.respond(response);
        }));

        let binding = self.clone();
        listeners.extend(WindowListener::new(window, "touchstart", true, move |event: Event| {
            if let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|e| e.touches().get(0)) {
                binding
                    .controller
                    .borrow_mut()
                    .touch_start(touch.client_x() as f64, touch.client_y() as f64);
            }
        }));

        let binding = self.clone();
        listeners.extend(WindowListener::new(window, "touchmove", false, move |event: Event| {
            if let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|e| e.touches().get(0)) {
                let suppress = binding
                    .controller
                    .borrow_mut()
                    .touch_move(touch.client_x() as f64, touch.client_y() as f64);
                if suppress {
                    event.prevent_default();
                }
            }
        }));

        let binding = self.clone();
        listeners.extend(WindowListener::new(window, "touchend", true, move |_| {
            let response = binding.controller.borrow_mut().touch_end(now());
            binding.respond(response);
        }));

        listeners
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollLockCarouselProps {
    /// Section id, also used as the anchor target and in log lines.
    pub id: String,
    pub title: String,
    #[prop_or_default]
    pub subtitle: String,
    pub cards: Vec<Card>,
    #[prop_or_default]
    pub config: CarouselConfig,
}

#[function_component(ScrollLockCarousel)]
pub fn scroll_lock_carousel(props: &ScrollLockCarouselProps) -> Html {
    let container_ref = use_node_ref();
    let view = use_state_eq(CarouselView::default);
    let (window_width, _) = use_window_size();
    let controller: SharedController = use_mut_ref(|| {
        CarouselController::new(
            props.id.clone(),
            props.cards.len(),
            props.config.clone(),
            ScrollLock::document(),
        )
    });

    let binding = Binding {
        container: container_ref.clone(),
        controller: controller.clone(),
        view: view.setter(),
    };

    {
        let binding = binding.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = match web_sys::window() {
                    Some(window) => binding.listen(&window),
                    None => Vec::new(),
                };
                // Initial check, the page may load with the section centered
                binding.sample();

                move || {
                    drop(listeners);
                    binding.controller.borrow_mut().retire(now());
                }
            },
            (),
        );
    }

    if props.cards.is_empty() {
        return html! {};
    }

    let (offset, metrics) = {
        let mut controller = controller.borrow_mut();
        (controller.offset(window_width), controller.metrics(window_width))
    };

    let on_previous = {
        let binding = binding.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let moved = binding.controller.borrow_mut().previous();
            if moved {
                binding.publish();
            }
        })
    };

    let on_next = {
        let binding = binding.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let moved = binding.controller.borrow_mut().next();
            if moved {
                binding.publish();
            }
        })
    };

    let on_dot = {
        let binding = binding.clone();
        Callback::from(move |index: usize| {
            let moved = binding.controller.borrow_mut().go_to(index);
            if moved {
                binding.publish();
            }
        })
    };

    let last = props.cards.len() - 1;

    html! {
        <section
            id={props.id.clone()}
            ref={container_ref}
            class={classes!("carousel-section", view.locked.then(|| "locked"))}
        >
            <style>{CAROUSEL_CSS}</style>
            <div class="carousel-header">
                <h2>{&props.title}</h2>
                if !props.subtitle.is_empty() {
                    <p>{&props.subtitle}</p>
                }
            </div>
            <div class="carousel-viewport">
                <div
                    class="carousel-track"
                    style={format!("transform: translateX({:.1}px); gap: {}px;", offset, metrics.gap)}
                >
                    { for props.cards.iter().enumerate().map(|(i, card)| html! {
                        <CardView card={card.clone()} width={metrics.card_width} active={i == view.index} />
                    }) }
                </div>
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow" onclick={on_previous} disabled={view.index == 0}>
                    {"←"}
                </button>
                <div class="carousel-dots">
                    { for (0..=last).map(|i| html! {
                        <button
                            class={classes!("carousel-dot", (i == view.index).then(|| "active"))}
                            aria-label={format!("Show card {}", i + 1)}
                            onclick={on_dot.reform(move |_: MouseEvent| i)}
                        />
                    }) }
                </div>
                <button class="carousel-arrow" onclick={on_next} disabled={view.index == last}>
                    {"→"}
                </button>
            </div>
        </section>
    }
}

const CAROUSEL_CSS: &str = r#"
    .carousel-section {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        padding: 4rem 0;
        overflow: hidden;
        position: relative;
    }
    .carousel-header {
        text-align: center;
        padding: 0 1.5rem;
        margin-bottom: 3rem;
    }
    .carousel-header h2 {
        font-size: 2.5rem;
        margin-bottom: 0.75rem;
    }
    .carousel-header p {
        color: #999;
        max-width: 640px;
        margin: 0 auto;
    }
    .carousel-viewport {
        width: 100%;
        overflow: hidden;
    }
    .carousel-track {
        display: flex;
        transition: transform 0.5s cubic-bezier(0.22, 1, 0.36, 1);
        will-change: transform;
    }
    .carousel-card {
        background: rgba(26, 26, 26, 0.95);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 24px;
        padding: 2.5rem 2rem;
        opacity: 0.45;
        transform: scale(0.94);
        transition: opacity 0.4s ease, transform 0.4s ease;
        box-sizing: border-box;
    }
    .carousel-card.active {
        opacity: 1;
        transform: scale(1);
        border-color: rgba(30, 144, 255, 0.4);
    }
    .card-icon {
        font-size: 2.5rem;
        margin-bottom: 1.25rem;
    }
    .carousel-card h3 {
        font-size: 1.5rem;
        margin-bottom: 0.75rem;
        color: #fff;
    }
    .carousel-card p {
        color: #bbb;
        line-height: 1.6;
    }
    .card-link {
        display: inline-block;
        margin-top: 1.5rem;
        color: #1E90FF;
        text-decoration: none;
    }
    .carousel-controls {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        margin-top: 2.5rem;
    }
    .carousel-arrow {
        background: transparent;
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 50%;
        width: 44px;
        height: 44px;
        color: #fff;
        cursor: pointer;
    }
    .carousel-arrow:disabled {
        opacity: 0.3;
        cursor: default;
    }
    .carousel-dots {
        display: flex;
        gap: 0.5rem;
    }
    .carousel-dot {
        width: 10px;
        height: 10px;
        border-radius: 50%;
        border: none;
        padding: 0;
        background: rgba(255, 255, 255, 0.25);
        cursor: pointer;
    }
    .carousel-dot.active {
        background: #1E90FF;
    }
    @media (max-width: 768px) {
        .carousel-header h2 {
            font-size: 1.8rem;
        }
        .carousel-card {
            padding: 2rem 1.5rem;
        }
    }
"#;
