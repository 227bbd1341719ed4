// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throttled scroll-direction detection.
//!
//! Each non-throttled scroll event reads the document position, compares it
//! with the previously seen one, and notifies `Down` when it grew, `Up`
//! when it shrank, and nothing when it is unchanged. The throttle window
//! opens on every non-throttled event — including one with an unchanged
//! position — so the comparison baseline and the window always move
//! together. (This differs from the keyboard gate, where an unchanged value
//! leaves the window closed.)

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use overhang_host::types::{EventSource, Listener, ListenerId, TimerId};
use overhang_host::{Scheduler, ScrollBackend};

/// Which way the user is scrolling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Towards the top of the document.
    Up,
    /// Towards the bottom of the document.
    Down,
}

/// A direction notification with the position that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollDirectionState {
    /// Direction of the movement. `None` never reaches the callback; it is
    /// the initial value callers typically hold before the first event.
    pub direction: Option<ScrollDirection>,
    /// Vertical scroll position at the time of the notification.
    pub position: f64,
}

/// Options for [`subscribe_scroll_direction`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollDirectionOptions {
    /// Minimum spacing between processed scroll events. `0` disables
    /// throttling.
    pub throttle_ms: u64,
}

impl Default for ScrollDirectionOptions {
    fn default() -> Self {
        Self { throttle_ms: 50 }
    }
}

struct State {
    last_y: f64,
    listener: Option<ListenerId>,
    throttle_timer: Option<TimerId>,
    closed: bool,
}

struct Shared<H> {
    host: Weak<H>,
    throttle_ms: u64,
    callback: RefCell<Box<dyn FnMut(ScrollDirectionState)>>,
    state: RefCell<State>,
}

impl<H: ScrollBackend + Scheduler + 'static> Shared<H> {
    fn on_scroll(self: &Rc<Self>) {
        let Some(host) = self.host.upgrade() else {
            return;
        };
        let (last_y, current_y) = {
            let mut state = self.state.borrow_mut();
            if state.closed || state.throttle_timer.is_some() {
                return;
            }
            let current_y = host.scroll_y();
            let last_y = core::mem::replace(&mut state.last_y, current_y);

            if self.throttle_ms > 0 {
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
            (last_y, current_y)
        };

        let direction = if current_y > last_y {
            Some(ScrollDirection::Down)
        } else if current_y < last_y {
            Some(ScrollDirection::Up)
        } else {
            None
        };
        if direction.is_some() {
            (self.callback.borrow_mut())(ScrollDirectionState {
                direction,
                position: current_y,
            });
        }
    }
}

/// Handle for an active scroll-direction subscription.
///
/// A caller-owned token: dropping it does not stop the subscription.
#[must_use = "dropping the handle does not unsubscribe; call unsubscribe()"]
pub struct ScrollDirectionSubscription<H> {
    shared: Rc<Shared<H>>,
}

impl<H: ScrollBackend + Scheduler + 'static> ScrollDirectionSubscription<H> {
    /// Stop receiving direction updates, releasing the listener and any
    /// pending throttle timer together. Idempotent, and safe to call from
    /// within the callback.
    pub fn unsubscribe(&self) {
        let (listener, timer) = {
            let mut state = self.shared.state.borrow_mut();
            if state.closed {
                return;
            }
            state.closed = true;
            (state.listener.take(), state.throttle_timer.take())
        };
        if let Some(host) = self.shared.host.upgrade() {
            if let Some(id) = listener {
                host.remove_listener(id);
            }
            if let Some(id) = timer {
                host.clear_timeout(id);
            }
        }
    }
}

impl<H> core::fmt::Debug for ScrollDirectionSubscription<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollDirectionSubscription")
            .finish_non_exhaustive()
    }
}

/// Subscribe to scroll-direction changes.
///
/// The comparison baseline starts at the position read during subscription,
/// so the first event already has a direction.
pub fn subscribe_scroll_direction<H, F>(
    host: &Rc<H>,
    options: ScrollDirectionOptions,
    callback: F,
) -> ScrollDirectionSubscription<H>
where
    H: ScrollBackend + Scheduler + 'static,
    F: FnMut(ScrollDirectionState) + 'static,
{
    let shared = Rc::new(Shared {
        host: Rc::downgrade(host),
        throttle_ms: options.throttle_ms,
        callback: RefCell::new(Box::new(callback)),
        state: RefCell::new(State {
            last_y: host.scroll_y(),
            listener: None,
            throttle_timer: None,
            closed: false,
        }),
    });

    let strong = Rc::clone(&shared);
    let listener: Listener = Rc::new(move || strong.on_scroll());
    let id = host.add_listener(EventSource::DOCUMENT_SCROLL, listener);
    shared.state.borrow_mut().listener = Some(id);

    ScrollDirectionSubscription { shared }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use overhang_host::backends::FakeHost;

    fn subscribe(
        host: &Rc<FakeHost>,
        throttle_ms: u64,
    ) -> (
        Rc<RefCell<Vec<(ScrollDirection, f64)>>>,
        ScrollDirectionSubscription<FakeHost>,
    ) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = subscribe_scroll_direction(
            host,
            ScrollDirectionOptions { throttle_ms },
            move |state| {
                sink.borrow_mut()
                    .push((state.direction.expect("callback always has a direction"), state.position));
            },
        );
        (seen, subscription)
    }

    fn scroll_to_y(host: &FakeHost, y: f64) {
        host.set_scroll_y(y);
        host.emit(EventSource::DOCUMENT_SCROLL);
    }

    #[test]
    fn reports_down_then_up() {
        let host = Rc::new(FakeHost::new());
        let (seen, _subscription) = subscribe(&host, 0);

        scroll_to_y(&host, 100.0);
        scroll_to_y(&host, 40.0);

        assert_eq!(
            *seen.borrow(),
            [(ScrollDirection::Down, 100.0), (ScrollDirection::Up, 40.0)]
        );
    }

    #[test]
    fn unchanged_position_is_silent() {
        let host = Rc::new(FakeHost::new());
        let (seen, _subscription) = subscribe(&host, 0);

        host.emit(EventSource::DOCUMENT_SCROLL);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn events_inside_the_throttle_window_are_dropped() {
        let host = Rc::new(FakeHost::new());
        let (seen, _subscription) = subscribe(&host, 50);

        scroll_to_y(&host, 100.0);
        scroll_to_y(&host, 200.0); // inside the window
        assert_eq!(*seen.borrow(), [(ScrollDirection::Down, 100.0)]);

        host.advance(50);
        scroll_to_y(&host, 250.0);
        assert_eq!(
            *seen.borrow(),
            [(ScrollDirection::Down, 100.0), (ScrollDirection::Down, 250.0)]
        );
    }

    #[test]
    fn unchanged_position_still_opens_the_window() {
        let host = Rc::new(FakeHost::new());
        let (seen, _subscription) = subscribe(&host, 50);

        // No movement, no callback — but the window opens and the next
        // event inside it is dropped.
        host.emit(EventSource::DOCUMENT_SCROLL);
        assert_eq!(host.pending_timer_count(), 1);

        scroll_to_y(&host, 100.0);
        assert!(seen.borrow().is_empty());

        host.advance(50);
        scroll_to_y(&host, 150.0);
        assert_eq!(*seen.borrow(), [(ScrollDirection::Down, 150.0)]);
    }

    #[test]
    fn dropped_events_do_not_move_the_baseline() {
        let host = Rc::new(FakeHost::new());
        let (seen, _subscription) = subscribe(&host, 50);

        scroll_to_y(&host, 100.0);
        scroll_to_y(&host, 300.0); // dropped, baseline untouched
        host.advance(50);

        // The next processed event compares against 100, the last
        // processed position, not 300.
        scroll_to_y(&host, 200.0);
        assert_eq!(
            *seen.borrow(),
            [(ScrollDirection::Down, 100.0), (ScrollDirection::Down, 200.0)]
        );
    }

    #[test]
    fn unsubscribe_releases_listener_and_timer() {
        let host = Rc::new(FakeHost::new());
        let (seen, subscription) = subscribe(&host, 50);

        scroll_to_y(&host, 100.0);
        assert_eq!(host.pending_timer_count(), 1);

        subscription.unsubscribe();
        assert_eq!(host.listener_count(), 0);
        assert_eq!(host.pending_timer_count(), 0);

        scroll_to_y(&host, 300.0);
        host.advance(100);
        assert_eq!(seen.borrow().len(), 1);

        subscription.unsubscribe();
    }
}
