// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic in-memory host with a manual clock.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use core::cell::RefCell;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::backend::{
    EnvironmentBackend, EventBackend, NetworkBackend, Scheduler, ScrollBackend, ViewportBackend,
    VisibilityBackend,
};
use crate::types::{
    EventSource, HostEnvironment, Listener, ListenerId, NetworkStatus, SafeAreaInset,
    TimerCallback, TimerId, ViewportGeometry, Visibility,
};

/// In-memory host backend for tests and demos.
///
/// All state is settable, events are delivered only on explicit [`emit`]
/// calls, and timers fire only when the manual clock is advanced with
/// [`advance`]. Dispatch order is deterministic: listeners fire in
/// registration order, timers in (due time, creation order).
///
/// [`emit`]: FakeHost::emit
/// [`advance`]: FakeHost::advance
///
/// ```
/// use overhang_host::backends::FakeHost;
/// use overhang_host::{EventSource, ViewportBackend, ViewportGeometry};
///
/// let host = FakeHost::new();
/// host.set_viewport(Some(ViewportGeometry::with_heights(800.0, 500.0)));
/// assert_eq!(host.viewport().unwrap().height, 500.0);
///
/// // Nothing happens until an event is emitted or the clock moves.
/// host.emit(EventSource::VIEWPORT_RESIZE);
/// host.advance(16);
/// ```
pub struct FakeHost {
    inner: RefCell<Inner>,
}

struct Inner {
    now_ms: u64,
    next_id: u64,
    viewport: Option<ViewportGeometry>,
    safe_area: SafeAreaInset,
    scroll_y: f64,
    saved_scroll: Option<f64>,
    lock_offset: Option<f64>,
    visibility: Visibility,
    network: Option<NetworkStatus>,
    environment: Option<HostEnvironment>,
    // BTreeMap keyed by registration order so emit() is FIFO.
    listeners: BTreeMap<u64, (EventSource, Listener)>,
    timers: HashMap<u64, FakeTimer>,
    last_scroll_to: Option<(f64, f64)>,
}

struct FakeTimer {
    due_ms: u64,
    callback: TimerCallback,
}

impl FakeHost {
    /// Create a host with no viewport, zero insets, and the clock at 0.
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(Inner {
                now_ms: 0,
                next_id: 1,
                viewport: None,
                safe_area: SafeAreaInset::ZERO,
                scroll_y: 0.0,
                saved_scroll: None,
                lock_offset: None,
                visibility: Visibility::Visible,
                network: None,
                environment: None,
                listeners: BTreeMap::new(),
                timers: HashMap::new(),
                last_scroll_to: None,
            }),
        }
    }

    /// Create a host that already reports the given viewport geometry.
    pub fn with_viewport(geometry: ViewportGeometry) -> Self {
        let host = Self::new();
        host.set_viewport(Some(geometry));
        host
    }

    /// Replace the reported viewport geometry. `None` makes the host report
    /// an unsupported viewport.
    pub fn set_viewport(&self, geometry: Option<ViewportGeometry>) {
        self.inner.borrow_mut().viewport = geometry;
    }

    /// Replace the reported safe-area insets.
    pub fn set_safe_area(&self, inset: SafeAreaInset) {
        self.inner.borrow_mut().safe_area = inset;
    }

    /// Replace the reported document scroll position.
    pub fn set_scroll_y(&self, y: f64) {
        self.inner.borrow_mut().scroll_y = y;
    }

    /// Replace the reported visibility state.
    pub fn set_visibility(&self, visibility: Visibility) {
        self.inner.borrow_mut().visibility = visibility;
    }

    /// Replace the reported network information.
    pub fn set_network(&self, status: Option<NetworkStatus>) {
        self.inner.borrow_mut().network = status;
    }

    /// Replace the reported identity strings.
    pub fn set_environment(&self, environment: Option<HostEnvironment>) {
        self.inner.borrow_mut().environment = environment;
    }

    /// Poison the saved scroll-lock slot with an arbitrary value, bypassing
    /// [`ScrollBackend::save_scroll_position`]. Lets tests exercise restore
    /// paths for values a well-behaved lock would never write.
    pub fn set_saved_scroll_position(&self, y: Option<f64>) {
        self.inner.borrow_mut().saved_scroll = y;
    }

    /// Deliver one event to every listener whose mask intersects `source`,
    /// in registration order.
    ///
    /// Listeners removed by an earlier listener in the same dispatch are
    /// skipped, matching how a browser handles removal during dispatch.
    pub fn emit(&self, source: EventSource) {
        let snapshot: SmallVec<[(u64, Listener); 4]> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, (mask, _))| mask.intersects(source))
            .map(|(id, (_, listener))| (*id, Rc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            let still_registered = self.inner.borrow().listeners.contains_key(&id);
            if still_registered {
                listener();
            }
        }
    }

    /// Advance the clock by `ms` milliseconds, firing every timer that
    /// becomes due, in (due time, creation order). Timers cleared by an
    /// earlier callback do not fire.
    pub fn advance(&self, ms: u64) {
        let target = {
            let mut inner = self.inner.borrow_mut();
            inner.now_ms += ms;
            inner.now_ms
        };

        loop {
            let next = {
                let inner = self.inner.borrow();
                inner
                    .timers
                    .iter()
                    .filter(|(_, timer)| timer.due_ms <= target)
                    .map(|(id, timer)| (timer.due_ms, *id))
                    .min()
            };
            let Some((_, id)) = next else {
                break;
            };
            let callback = self
                .inner
                .borrow_mut()
                .timers
                .remove(&id)
                .map(|timer| timer.callback);
            if let Some(callback) = callback {
                callback();
            }
        }
    }

    /// Current value of the manual clock.
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Number of timers scheduled but not yet fired or cleared.
    pub fn pending_timer_count(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// The offset the scroll-lock styling is currently applied with, if any.
    pub fn lock_offset(&self) -> Option<f64> {
        self.inner.borrow().lock_offset
    }

    /// The most recent [`ScrollBackend::scroll_to`] call, if any.
    pub fn last_scroll_to(&self) -> Option<(f64, f64)> {
        self.inner.borrow().last_scroll_to
    }

    fn next_id(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FakeHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("FakeHost")
            .field("now_ms", &inner.now_ms)
            .field("viewport", &inner.viewport)
            .field("listeners", &inner.listeners.len())
            .field("timers", &inner.timers.len())
            .finish_non_exhaustive()
    }
}

impl EventBackend for FakeHost {
    fn add_listener(&self, mask: EventSource, listener: Listener) -> ListenerId {
        let id = self.next_id();
        self.inner.borrow_mut().listeners.insert(id, (mask, listener));
        ListenerId::new(id)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.inner.borrow_mut().listeners.remove(&id.raw());
    }
}

impl Scheduler for FakeHost {
    fn set_timeout(&self, delay_ms: u64, callback: TimerCallback) -> TimerId {
        let id = self.next_id();
        let mut inner = self.inner.borrow_mut();
        let due_ms = inner.now_ms + delay_ms;
        inner.timers.insert(id, FakeTimer { due_ms, callback });
        TimerId::new(id)
    }

    fn clear_timeout(&self, id: TimerId) {
        self.inner.borrow_mut().timers.remove(&id.raw());
    }
}

impl ViewportBackend for FakeHost {
    fn viewport(&self) -> Option<ViewportGeometry> {
        self.inner.borrow().viewport
    }

    fn safe_area_inset(&self) -> SafeAreaInset {
        self.inner.borrow().safe_area
    }
}

impl ScrollBackend for FakeHost {
    fn scroll_y(&self) -> f64 {
        self.inner.borrow().scroll_y
    }

    fn scroll_to(&self, x: f64, y: f64) {
        let mut inner = self.inner.borrow_mut();
        inner.last_scroll_to = Some((x, y));
        inner.scroll_y = y;
    }

    fn saved_scroll_position(&self) -> Option<f64> {
        self.inner.borrow().saved_scroll
    }

    fn save_scroll_position(&self, y: f64) {
        self.inner.borrow_mut().saved_scroll = Some(y);
    }

    fn clear_saved_scroll_position(&self) {
        self.inner.borrow_mut().saved_scroll = None;
    }

    fn apply_scroll_lock(&self, offset_y: f64) {
        self.inner.borrow_mut().lock_offset = Some(offset_y);
    }

    fn remove_scroll_lock(&self) {
        self.inner.borrow_mut().lock_offset = None;
    }
}

impl VisibilityBackend for FakeHost {
    fn visibility(&self) -> Visibility {
        self.inner.borrow().visibility
    }
}

impl NetworkBackend for FakeHost {
    fn network(&self) -> Option<NetworkStatus> {
        self.inner.borrow().network
    }
}

impl EnvironmentBackend for FakeHost {
    fn environment(&self) -> Option<HostEnvironment> {
        self.inner.borrow().environment.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn emit_is_fifo_and_mask_filtered() {
        let host = FakeHost::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let o = Rc::clone(&order);
        host.add_listener(EventSource::VIEWPORT_RESIZE, Rc::new(move || o.borrow_mut().push(1)));
        let o = Rc::clone(&order);
        host.add_listener(EventSource::DOCUMENT_SCROLL, Rc::new(move || o.borrow_mut().push(2)));
        let o = Rc::clone(&order);
        host.add_listener(
            EventSource::VIEWPORT_RESIZE | EventSource::VIEWPORT_SCROLL,
            Rc::new(move || o.borrow_mut().push(3)),
        );

        host.emit(EventSource::VIEWPORT_RESIZE);
        assert_eq!(*order.borrow(), [1, 3]);
    }

    #[test]
    fn listener_removed_during_dispatch_does_not_fire() {
        let host = Rc::new(FakeHost::new());
        let fired = Rc::new(RefCell::new(false));

        // First listener removes the second one.
        let second_id = Rc::new(RefCell::new(None));
        let h = Rc::clone(&host);
        let sid = Rc::clone(&second_id);
        host.add_listener(
            EventSource::VIEWPORT_RESIZE,
            Rc::new(move || {
                if let Some(id) = *sid.borrow() {
                    h.remove_listener(id);
                }
            }),
        );
        let f = Rc::clone(&fired);
        let id = host.add_listener(
            EventSource::VIEWPORT_RESIZE,
            Rc::new(move || *f.borrow_mut() = true),
        );
        *second_id.borrow_mut() = Some(id);

        host.emit(EventSource::VIEWPORT_RESIZE);
        assert!(!*fired.borrow(), "removed listener must not fire");
    }

    #[test]
    fn timers_fire_in_due_then_creation_order() {
        let host = FakeHost::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let o = Rc::clone(&order);
        host.set_timeout(20, Rc::new(move || o.borrow_mut().push("late")));
        let o = Rc::clone(&order);
        host.set_timeout(10, Rc::new(move || o.borrow_mut().push("early-a")));
        let o = Rc::clone(&order);
        host.set_timeout(10, Rc::new(move || o.borrow_mut().push("early-b")));

        host.advance(9);
        assert!(order.borrow().is_empty());

        host.advance(11);
        assert_eq!(*order.borrow(), ["early-a", "early-b", "late"]);
        assert_eq!(host.pending_timer_count(), 0);
    }

    #[test]
    fn cleared_timer_does_not_fire() {
        let host = FakeHost::new();
        let fired = Rc::new(RefCell::new(false));

        let f = Rc::clone(&fired);
        let id = host.set_timeout(5, Rc::new(move || *f.borrow_mut() = true));
        host.clear_timeout(id);
        host.advance(10);

        assert!(!*fired.borrow());
        // Clearing again is harmless.
        host.clear_timeout(id);
    }

    #[test]
    fn scroll_to_updates_position() {
        let host = FakeHost::new();
        host.set_scroll_y(120.0);
        host.scroll_to(0.0, 40.0);
        assert_eq!(host.scroll_y(), 40.0);
        assert_eq!(host.last_scroll_to(), Some((0.0, 40.0)));
    }
}
