// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throttled, deduplicated keyboard-height change subscription.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use overhang_host::types::{EventSource, Listener, ListenerId, TimerId};
use overhang_host::{Scheduler, ViewportBackend};

use crate::keyboard_height;

/// Options for [`subscribe_keyboard_height`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubscribeOptions {
    /// Invoke the callback synchronously once during subscription with the
    /// current height. The immediate call is not throttled and establishes
    /// the deduplication baseline.
    pub immediate: bool,
    /// Minimum spacing between event-driven callback invocations, measured
    /// from the last notification sent. `0` disables throttling.
    pub throttle_ms: u64,
}

impl Default for SubscribeOptions {
    fn default() -> Self {
        Self {
            immediate: false,
            // ~60fps.
            throttle_ms: 16,
        }
    }
}

struct State {
    last_height: Option<f64>,
    listener: Option<ListenerId>,
    throttle_timer: Option<TimerId>,
    closed: bool,
}

struct Shared<H> {
    host: Weak<H>,
    throttle_ms: u64,
    callback: RefCell<Box<dyn FnMut(f64)>>,
    state: RefCell<State>,
}

impl<H: ViewportBackend + Scheduler + 'static> Shared<H> {
    /// Handles both viewport event classes (resize and scroll); they route
    /// through the same throttle/dedupe gate.
    fn on_viewport_event(self: &Rc<Self>) {
        let Some(host) = self.host.upgrade() else {
            return;
        };
        {
            let state = self.state.borrow();
            // Throttled events are dropped outright, not queued.
            if state.closed || state.throttle_timer.is_some() {
                return;
            }
        }

        let height = keyboard_height(&*host);
        {
            let mut state = self.state.borrow_mut();
            // An unchanged height is dropped without opening a new
            // throttle window.
            if state.last_height == Some(height) {
                return;
            }
            state.last_height = Some(height);
        }

        // State is not borrowed across the callback so it may re-enter
        // unsubscribe().
        (self.callback.borrow_mut())(height);

        let mut state = self.state.borrow_mut();
        if state.closed || self.throttle_ms == 0 {
            return;
        }
        let weak = Rc::downgrade(self);
        let timer = host.set_timeout(
            self.throttle_ms,
            Rc::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.state.borrow_mut().throttle_timer = None;
                }
            }),
        );
        state.throttle_timer = Some(timer);
    }
}

/// Handle for an active keyboard-height subscription.
///
/// The handle is a caller-owned token: dropping it does not stop the
/// subscription. Call [`unsubscribe`](Self::unsubscribe) to release the
/// listener registration and any pending throttle timer.
#[must_use = "dropping the handle does not unsubscribe; call unsubscribe()"]
pub struct KeyboardHeightSubscription<H> {
    shared: Option<Rc<Shared<H>>>,
}

impl<H: ViewportBackend + Scheduler + 'static> KeyboardHeightSubscription<H> {
    /// Stop receiving keyboard-height updates.
    ///
    /// Removes the event listener and clears any pending throttle timer in
    /// one step; after this returns the callback never fires again.
    /// Idempotent, and safe to call from within the callback itself.
    pub fn unsubscribe(&self) {
        let Some(shared) = &self.shared else {
            return;
        };
        let (listener, timer) = {
            let mut state = shared.state.borrow_mut();
            if state.closed {
                return;
            }
            state.closed = true;
            (state.listener.take(), state.throttle_timer.take())
        };
        if let Some(host) = shared.host.upgrade() {
            if let Some(id) = listener {
                host.remove_listener(id);
            }
            if let Some(id) = timer {
                host.clear_timeout(id);
            }
        }
    }
}

impl<H> core::fmt::Debug for KeyboardHeightSubscription<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyboardHeightSubscription")
            .field("active", &self.shared.is_some())
            .finish_non_exhaustive()
    }
}

/// Subscribe to on-screen keyboard height changes.
///
/// The callback is invoked with the current height whenever it changes,
/// subject to the dedupe and throttle gates described in the crate docs.
/// Both viewport resize and viewport scroll events are observed.
///
/// On a host without viewport geometry the returned handle is inert: no
/// listeners are registered and the callback is never invoked — including
/// for [`SubscribeOptions::immediate`], preserving the behavior that an
/// unsupported environment produces no initial `0` notification.
pub fn subscribe_keyboard_height<H, F>(
    host: &Rc<H>,
    options: SubscribeOptions,
    callback: F,
) -> KeyboardHeightSubscription<H>
where
    H: ViewportBackend + Scheduler + 'static,
    F: FnMut(f64) + 'static,
{
    if host.viewport().is_none() {
        return KeyboardHeightSubscription { shared: None };
    }

    let shared = Rc::new(Shared {
        host: Rc::downgrade(host),
        throttle_ms: options.throttle_ms,
        callback: RefCell::new(Box::new(callback)),
        state: RefCell::new(State {
            last_height: None,
            listener: None,
            throttle_timer: None,
            closed: false,
        }),
    });

    if options.immediate {
        let height = keyboard_height(&**host);
        shared.state.borrow_mut().last_height = Some(height);
        (shared.callback.borrow_mut())(height);
    }

    let strong = Rc::clone(&shared);
    let listener: Listener = Rc::new(move || strong.on_viewport_event());
    let id = host.add_listener(
        EventSource::VIEWPORT_RESIZE | EventSource::VIEWPORT_SCROLL,
        listener,
    );
    shared.state.borrow_mut().listener = Some(id);

    KeyboardHeightSubscription {
        shared: Some(shared),
    }
}
