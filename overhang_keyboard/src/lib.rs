// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overhang Keyboard: on-screen keyboard height from viewport geometry.
//!
//! ## Overview
//!
//! When a software keyboard appears, the host's visual viewport shrinks
//! (and on iOS may also shift vertically without shrinking). The keyboard
//! height is derived from that geometry:
//!
//! ```text
//! height = max(0, container_height - viewport_height - viewport_offset_top)
//! ```
//!
//! [`keyboard_height`] computes the value on demand; [`is_keyboard_visible`]
//! is the boolean view of it. Both read through a
//! [`ViewportBackend`](overhang_host::ViewportBackend) and return the
//! defined default (`0`, `false`) on hosts without viewport geometry, so
//! they are safe to call in any context.
//!
//! ## Subscriptions
//!
//! [`subscribe_keyboard_height`] delivers the height to a callback whenever
//! it may have changed, listening to both viewport resize and viewport
//! scroll events (the latter matters on iOS, where the keyboard can shift
//! the viewport without resizing it). Two gates bound callback frequency
//! during keyboard animation:
//!
//! - **Deduplication** — the callback never fires twice in a row with an
//!   equal height.
//! - **Throttling** — after each delivered notification, events inside the
//!   cooldown window are dropped outright. This is a pure drop policy, not
//!   a trailing-edge debounce; the window is measured from the last
//!   notification sent.
//!
//! ```
//! use std::rc::Rc;
//! use overhang_host::backends::FakeHost;
//! use overhang_host::{EventSource, ViewportGeometry};
//! use overhang_keyboard::{subscribe_keyboard_height, SubscribeOptions};
//!
//! let host = Rc::new(FakeHost::with_viewport(ViewportGeometry::with_heights(800.0, 800.0)));
//! let subscription = subscribe_keyboard_height(&host, SubscribeOptions::default(), |height| {
//!     // e.g. pad a chat input above the keyboard
//!     let _ = height;
//! });
//!
//! // Keyboard slides in: the viewport shrinks to 500px.
//! host.set_viewport(Some(ViewportGeometry::with_heights(800.0, 500.0)));
//! host.emit(EventSource::VIEWPORT_RESIZE); // callback sees 300.0
//!
//! subscription.unsubscribe();
//! ```
//!
//! [`avoid_keyboard_offset`] is the small companion used to slide
//! fixed-bottom UI out of the keyboard's way.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod avoid;
mod subscription;

pub use avoid::avoid_keyboard_offset;
pub use subscription::{KeyboardHeightSubscription, SubscribeOptions, subscribe_keyboard_height};

use overhang_host::ViewportBackend;

/// Current on-screen keyboard height in pixels.
///
/// Derived from live viewport geometry; never negative. Returns `0.0` when
/// the host exposes no viewport geometry, so it is safe to call in any
/// environment and at any time, independent of subscription state.
pub fn keyboard_height<H: ViewportBackend>(host: &H) -> f64 {
    let Some(viewport) = host.viewport() else {
        return 0.0;
    };
    let height = viewport.container_height - viewport.height - viewport.offset_top;
    height.max(0.0)
}

/// Whether the on-screen keyboard is currently visible.
pub fn is_keyboard_visible<H: ViewportBackend>(host: &H) -> bool {
    keyboard_height(host) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use overhang_host::ViewportGeometry;
    use overhang_host::backends::{FakeHost, NullHost};

    fn geometry(container_height: f64, height: f64, offset_top: f64) -> ViewportGeometry {
        ViewportGeometry {
            offset_top,
            ..ViewportGeometry::with_heights(container_height, height)
        }
    }

    #[test]
    fn height_is_container_minus_viewport() {
        let host = FakeHost::with_viewport(geometry(800.0, 500.0, 0.0));
        assert_eq!(keyboard_height(&host), 300.0);
    }

    #[test]
    fn offset_top_is_absorbed_into_the_height() {
        // iOS keyboard shift: viewport shrinks to 450 and shifts down by 50.
        let host = FakeHost::with_viewport(geometry(800.0, 450.0, 50.0));
        assert_eq!(keyboard_height(&host), 300.0);
    }

    #[test]
    fn height_is_floored_at_zero() {
        let host = FakeHost::with_viewport(geometry(800.0, 900.0, 0.0));
        assert_eq!(keyboard_height(&host), 0.0);
    }

    #[test]
    fn unsupported_host_reports_zero() {
        assert_eq!(keyboard_height(&NullHost), 0.0);
        let host = FakeHost::new();
        assert_eq!(keyboard_height(&host), 0.0);
    }

    #[test]
    fn visibility_follows_height() {
        let host = FakeHost::with_viewport(geometry(800.0, 500.0, 0.0));
        assert!(is_keyboard_visible(&host));

        host.set_viewport(Some(geometry(800.0, 800.0, 0.0)));
        assert!(!is_keyboard_visible(&host));

        assert!(!is_keyboard_visible(&NullHost));
    }
}
