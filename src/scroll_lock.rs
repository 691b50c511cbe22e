use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Something whose `overflow` style can be switched between `hidden` and
/// the stylesheet default.
pub trait OverflowTarget {
    fn set_overflow(&self, value: &str);
}

/// `document.body` and `document.documentElement` of the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentOverflow;

impl OverflowTarget for DocumentOverflow {
    fn set_overflow(&self, value: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            debug!("No document, skipping overflow = {:?}", value);
            return;
        };
        if let Some(body) = document.body() {
            let _ = body.style().set_property("overflow", value);
        }
        if let Some(root) = document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = root.style().set_property("overflow", value);
        }
    }
}

struct LockInner<T: OverflowTarget> {
    holders: Cell<usize>,
    target: T,
}

/// Reference-counted page scroll lock.
///
/// Scrolling stays suppressed while any [`ScrollLockGuard`] is alive. When
/// the last guard goes away the style is reset to `''` rather than to a
/// remembered value, so a lock taken by something else in between is not
/// overwritten with stale state.
pub struct ScrollLock<T: OverflowTarget> {
    inner: Rc<LockInner<T>>,
}

impl<T: OverflowTarget> Clone for ScrollLock<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn new(target: T) -> Self {
        Self {
            inner: Rc::new(LockInner {
                holders: Cell::new(0),
                target,
            }),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard<T> {
        let holders = self.inner.holders.get();
        if holders == 0 {
            self.inner.target.set_overflow("hidden");
        }
        self.inner.holders.set(holders + 1);
        ScrollLockGuard {
            inner: self.inner.clone(),
        }
    }

    #[cfg(test)]
    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

thread_local! {
    static DOCUMENT_LOCK: ScrollLock<DocumentOverflow> = ScrollLock::new(DocumentOverflow);
}

impl ScrollLock<DocumentOverflow> {
    /// The lock shared by every component on the page.
    pub fn document() -> Self {
        DOCUMENT_LOCK.with(|lock| lock.clone())
    }
}

/// Keeps page scroll suppressed until dropped.
#[must_use = "scroll is released as soon as the guard is dropped"]
pub struct ScrollLockGuard<T: OverflowTarget> {
    inner: Rc<LockInner<T>>,
}

impl<T: OverflowTarget> Drop for ScrollLockGuard<T> {
    fn drop(&mut self) {
        let holders = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(holders);
        if holders == 0 {
            self.inner.target.set_overflow("");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::OverflowTarget;

    /// Records every overflow write instead of touching a document.
    #[derive(Clone, Default)]
    pub struct RecordingOverflow {
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingOverflow {
        pub fn current(&self) -> Option<String> {
            self.writes.borrow().last().cloned()
        }

        pub fn writes(&self) -> Vec<String> {
            self.writes.borrow().clone()
        }
    }

    impl OverflowTarget for RecordingOverflow {
        fn set_overflow(&self, value: &str) {
            self.writes.borrow_mut().push(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingOverflow;
    use super::*;

    #[test]
    fn guard_restores_empty_overflow() {
        let target = RecordingOverflow::default();
        let lock = ScrollLock::new(target.clone());

        let guard = lock.acquire();
        assert_eq!(target.current().as_deref(), Some("hidden"));
        assert!(lock.is_locked());

        drop(guard);
        assert_eq!(target.current().as_deref(), Some(""));
        assert!(!lock.is_locked());
    }

    #[test]
    fn nested_guards_only_write_on_edges() {
        let target = RecordingOverflow::default();
        let lock = ScrollLock::new(target.clone());

        let first = lock.acquire();
        let second = lock.clone().acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert_eq!(target.current().as_deref(), Some("hidden"));
        drop(second);

        assert_eq!(target.writes(), vec!["hidden".to_string(), String::new()]);
    }
}
