// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listen-and-read subscription plumbing shared by the watcher crates.
//!
//! The shape is always the same: register one listener for an event mask,
//! re-read some host state per delivered event, hand the fresh value to a
//! callback, and release the registration on unsubscribe. Crates with gating
//! state of their own (throttling, deduplication) build the pattern
//! directly instead.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use crate::backend::EventBackend;
use crate::types::{EventSource, Listener, ListenerId};

struct Shared<H> {
    host: Weak<H>,
    state: RefCell<State>,
}

struct State {
    listener: Option<ListenerId>,
    closed: bool,
}

/// Handle for a plain event-driven subscription.
///
/// The handle is a caller-owned token: dropping it does not stop the
/// subscription. [`unsubscribe`](Self::unsubscribe) is idempotent and safe
/// to call from within the subscription's own callback.
#[must_use = "dropping the handle does not unsubscribe; call unsubscribe()"]
pub struct EventSubscription<H> {
    shared: Option<Rc<Shared<H>>>,
}

impl<H: EventBackend + 'static> EventSubscription<H> {
    /// A handle that was never connected; `unsubscribe` is a no-op.
    ///
    /// Returned by subscribe functions when the host lacks the capability
    /// being watched.
    pub fn inert() -> Self {
        Self { shared: None }
    }

    /// Register `callback` to receive `read(host)` on every event in
    /// `mask`. With `immediate`, the callback also fires synchronously once
    /// before the listener is registered.
    pub fn subscribe<T, R, F>(
        host: &Rc<H>,
        mask: EventSource,
        immediate: bool,
        read: R,
        callback: F,
    ) -> Self
    where
        R: Fn(&H) -> T + 'static,
        F: FnMut(T) + 'static,
    {
        let shared = Rc::new(Shared {
            host: Rc::downgrade(host),
            state: RefCell::new(State {
                listener: None,
                closed: false,
            }),
        });

        let callback = RefCell::new(callback);
        if immediate {
            (callback.borrow_mut())(read(host));
        }

        let weak_shared = Rc::downgrade(&shared);
        let weak_host = Rc::downgrade(host);
        let listener: Listener = Rc::new(move || {
            let Some(shared) = weak_shared.upgrade() else {
                return;
            };
            let Some(host) = weak_host.upgrade() else {
                return;
            };
            if shared.state.borrow().closed {
                return;
            }
            let value = read(&host);
            // State is not borrowed across the callback so it may
            // re-enter unsubscribe().
            (callback.borrow_mut())(value);
        });

        // The host keeps the listener (and with it the callback) alive
        // until unsubscribe removes it.
        let strong = Rc::clone(&shared);
        let id = host.add_listener(mask, listener);
        strong.state.borrow_mut().listener = Some(id);

        Self {
            shared: Some(shared),
        }
    }

    /// Release the listener registration. Idempotent; after this returns
    /// the callback never fires again.
    pub fn unsubscribe(&self) {
        let Some(shared) = &self.shared else {
            return;
        };
        let listener = {
            let mut state = shared.state.borrow_mut();
            if state.closed {
                return;
            }
            state.closed = true;
            state.listener.take()
        };
        if let Some(host) = shared.host.upgrade()
            && let Some(id) = listener
        {
            host.remove_listener(id);
        }
    }
}

impl<H> core::fmt::Debug for EventSubscription<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventSubscription")
            .field("active", &self.shared.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "backend_fake"))]
mod tests {
    use super::*;
    use crate::backends::FakeHost;
    use alloc::vec::Vec;

    #[test]
    fn delivers_fresh_reads_per_event() {
        let host = Rc::new(FakeHost::new());
        host.set_scroll_y(10.0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = EventSubscription::subscribe(
            &host,
            EventSource::DOCUMENT_SCROLL,
            false,
            |host: &FakeHost| crate::ScrollBackend::scroll_y(host),
            move |y| sink.borrow_mut().push(y),
        );

        host.emit(EventSource::DOCUMENT_SCROLL);
        host.set_scroll_y(25.0);
        host.emit(EventSource::DOCUMENT_SCROLL);
        // Unrelated sources do not fire the listener.
        host.emit(EventSource::VISIBILITY);
        assert_eq!(*seen.borrow(), [10.0, 25.0]);

        subscription.unsubscribe();
        host.emit(EventSource::DOCUMENT_SCROLL);
        assert_eq!(*seen.borrow(), [10.0, 25.0]);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn immediate_fires_before_any_event() {
        let host = Rc::new(FakeHost::new());
        host.set_scroll_y(5.0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _subscription = EventSubscription::subscribe(
            &host,
            EventSource::DOCUMENT_SCROLL,
            true,
            |host: &FakeHost| crate::ScrollBackend::scroll_y(host),
            move |y| sink.borrow_mut().push(y),
        );

        assert_eq!(*seen.borrow(), [5.0]);
    }

    #[test]
    fn inert_handle_is_safe() {
        let subscription: EventSubscription<FakeHost> = EventSubscription::inert();
        subscription.unsubscribe();
        subscription.unsubscribe();
    }
}
