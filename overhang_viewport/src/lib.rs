// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overhang Viewport: visual-viewport and safe-area watchers.
//!
//! ## Viewport
//!
//! [`subscribe_viewport`] delivers a fresh
//! [`ViewportGeometry`](overhang_host::ViewportGeometry) snapshot on every
//! viewport resize or scroll event — keyboard show/hide, pinch-zoom,
//! panning. There is no throttling or deduplication here; callers that only
//! need the keyboard height should use `overhang_keyboard`, which bounds
//! callback frequency.
//!
//! The snapshot is re-read from the host per event and is therefore an
//! `Option`: a host can stop exposing viewport geometry mid-stream, and the
//! callback observes that as `None` rather than a stale snapshot.
//!
//! ## Safe area
//!
//! [`safe_area_inset`] reads the current insets; [`subscribe_safe_area_inset`]
//! re-reads them when the window resizes or the device orientation changes
//! (rotating a notched phone moves the insets from top/bottom to the sides).
//!
//! ```
//! use std::rc::Rc;
//! use overhang_host::backends::FakeHost;
//! use overhang_host::{EventSource, SafeAreaInset, ViewportGeometry};
//! use overhang_viewport::subscribe_safe_area_inset;
//!
//! let host = Rc::new(FakeHost::with_viewport(ViewportGeometry::with_heights(800.0, 800.0)));
//! let subscription = subscribe_safe_area_inset(&host, |inset| {
//!     let _ = inset.bottom; // pad fixed-bottom UI
//! });
//!
//! host.set_safe_area(SafeAreaInset { top: 0.0, bottom: 0.0, left: 47.0, right: 47.0 });
//! host.emit(EventSource::ORIENTATION);
//! subscription.unsubscribe();
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;

use overhang_host::ViewportBackend;
use overhang_host::subscription::EventSubscription;
use overhang_host::types::{EventSource, SafeAreaInset, ViewportGeometry};

/// Handle for an active viewport subscription.
pub type ViewportSubscription<H> = EventSubscription<H>;

/// Handle for an active safe-area subscription.
pub type SafeAreaSubscription<H> = EventSubscription<H>;

/// Current safe-area insets. Zero on hosts without the concept.
pub fn safe_area_inset<H: ViewportBackend>(host: &H) -> SafeAreaInset {
    host.safe_area_inset()
}

/// Subscribe to visual-viewport changes.
///
/// The callback receives the freshly read snapshot on every viewport resize
/// or scroll event, unthrottled and undeduplicated. On a host without
/// viewport geometry the returned handle is inert and the callback never
/// fires.
pub fn subscribe_viewport<H, F>(host: &Rc<H>, callback: F) -> ViewportSubscription<H>
where
    H: ViewportBackend + 'static,
    F: FnMut(Option<ViewportGeometry>) + 'static,
{
    if host.viewport().is_none() {
        return EventSubscription::inert();
    }
    EventSubscription::subscribe(
        host,
        EventSource::VIEWPORT_RESIZE | EventSource::VIEWPORT_SCROLL,
        false,
        |host: &H| host.viewport(),
        callback,
    )
}

/// Subscribe to safe-area inset changes.
///
/// The insets are re-read on window resize and orientation-change events.
/// Registration does not require viewport geometry; degenerate hosts simply
/// never deliver either event.
pub fn subscribe_safe_area_inset<H, F>(host: &Rc<H>, callback: F) -> SafeAreaSubscription<H>
where
    H: ViewportBackend + 'static,
    F: FnMut(SafeAreaInset) + 'static,
{
    EventSubscription::subscribe(
        host,
        EventSource::WINDOW_RESIZE | EventSource::ORIENTATION,
        false,
        |host: &H| host.safe_area_inset(),
        callback,
    )
}
