//! Ordered handler lists for option activation.
//!
//! A tap on an option runs in two stages: the owning coordinator first, then
//! the option's user handlers. [`HandlerChain`] holds the second stage. It is a
//! plain ordered list; the coordinator decides when (and whether) it runs.

use std::fmt;

/// A boxed event handler.
pub type Handler<E> = Box<dyn FnMut(&E)>;

/// An ordered list of handlers invoked with the same event.
pub struct HandlerChain<E> {
    handlers: Vec<Handler<E>>,
}

impl<E> HandlerChain<E> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Append a handler. Handlers run in insertion order.
    pub fn push(&mut self, handler: impl FnMut(&E) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Invoke every handler with `event`. Returns how many ran.
    pub fn dispatch(&mut self, event: &E) -> usize {
        for handler in &mut self.handlers {
            handler(event);
        }
        self.handlers.len()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Remove every handler.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl<E> Default for HandlerChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for HandlerChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn new_chain_is_empty() {
        let chain: HandlerChain<u32> = HandlerChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn dispatch_empty_chain() {
        let mut chain: HandlerChain<u32> = HandlerChain::default();
        assert_eq!(chain.dispatch(&1), 0);
    }

    #[test]
    fn dispatch_preserves_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut chain = HandlerChain::new();
        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            chain.push(move |e: &u32| log.borrow_mut().push(format!("{name}:{e}")));
        }
        assert_eq!(chain.dispatch(&9), 3);
        assert_eq!(*log.borrow(), vec!["first:9", "second:9", "third:9"]);
    }

    #[test]
    fn handlers_keep_state_between_dispatches() {
        let total = Rc::new(RefCell::new(0));
        let mut chain = HandlerChain::new();
        let sink = Rc::clone(&total);
        let mut calls = 0;
        chain.push(move |e: &u32| {
            calls += 1;
            *sink.borrow_mut() += e * calls;
        });
        chain.dispatch(&10);
        chain.dispatch(&10);
        assert_eq!(*total.borrow(), 30);
    }

    #[test]
    fn clear_removes_handlers() {
        let mut chain = HandlerChain::new();
        chain.push(|_: &u32| {});
        chain.clear();
        assert!(chain.is_empty());
    }

    #[test]
    fn debug_shows_count() {
        let mut chain = HandlerChain::new();
        chain.push(|_: &u32| {});
        assert_eq!(format!("{chain:?}"), "HandlerChain { handlers: 1 }");
    }
}
