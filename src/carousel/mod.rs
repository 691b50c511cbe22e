//! Scroll-locking card carousel.
//!
//! While the section sits in the middle of the viewport, page scroll is
//! suppressed and wheel/swipe gestures step through the cards instead.
//! Stepping past either end hands scrolling back to the page.

pub mod controller;
pub mod detector;
pub mod geometry;
pub mod gesture;
pub mod machine;
pub mod settings;

pub use controller::{CarouselController, CarouselView};
pub use detector::ContainerRect;
pub use gesture::normalize_wheel_delta;
pub use settings::CarouselConfig;
