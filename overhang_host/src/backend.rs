// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits implemented by concrete hosts.
//!
//! Each trait models one slice of the platform surface. Subscriptions and
//! helpers bound only the capabilities they actually use, so a host can
//! implement exactly what it has. A capability that the platform lacks is
//! expressed as `None` (or a default value), never as a panic: library code
//! built on these traits degrades to defined defaults in unsupported
//! environments.
//!
//! All methods take `&self`; hosts are expected to use interior mutability.
//! The execution model is single-threaded and cooperative — listeners and
//! timer callbacks run on the host thread, one at a time.

use crate::types::{
    EventSource, HostEnvironment, Listener, ListenerId, NetworkStatus, SafeAreaInset,
    TimerCallback, TimerId, ViewportGeometry, Visibility,
};

/// Listener registration for host-delivered events.
pub trait EventBackend {
    /// Register a listener for every source in `mask`.
    ///
    /// The listener fires once per delivered event, in registration order
    /// relative to other listeners on the same source.
    fn add_listener(&self, mask: EventSource, listener: Listener) -> ListenerId;

    /// Remove a previously registered listener. Unknown ids are ignored.
    fn remove_listener(&self, id: ListenerId);
}

/// One-shot timer scheduling.
pub trait Scheduler {
    /// Schedule `callback` to run once after `delay_ms` milliseconds.
    fn set_timeout(&self, delay_ms: u64, callback: TimerCallback) -> TimerId;

    /// Cancel a pending timer. Unknown or already-fired ids are ignored.
    fn clear_timeout(&self, id: TimerId);
}

/// Visual viewport geometry and safe-area insets.
pub trait ViewportBackend: EventBackend {
    /// Current visual viewport snapshot, or `None` when the host does not
    /// expose viewport geometry (non-browser context, or a browser without
    /// the Visual Viewport API).
    fn viewport(&self) -> Option<ViewportGeometry>;

    /// Current safe-area insets. Hosts without the concept report zero.
    fn safe_area_inset(&self) -> SafeAreaInset {
        SafeAreaInset::ZERO
    }
}

/// Document scroll position, programmatic scrolling, and the scroll-lock
/// styling/storage surface.
///
/// The saved-position slot corresponds to the marker a browser host keeps on
/// the document while a lock is active; its presence is what makes
/// enable/disable idempotent across independent callers.
pub trait ScrollBackend: EventBackend {
    /// Current vertical scroll position of the document.
    fn scroll_y(&self) -> f64;

    /// Scroll the document to the given position.
    fn scroll_to(&self, x: f64, y: f64);

    /// The scroll position saved when the lock was applied, if locked.
    fn saved_scroll_position(&self) -> Option<f64>;

    /// Save the scroll position, marking the document as locked.
    fn save_scroll_position(&self, y: f64);

    /// Clear the saved position, marking the document as unlocked.
    fn clear_saved_scroll_position(&self);

    /// Apply the host's scroll-lock styling, pinning content at `offset_y`.
    fn apply_scroll_lock(&self, offset_y: f64);

    /// Remove the host's scroll-lock styling.
    fn remove_scroll_lock(&self);
}

/// Page visibility state.
pub trait VisibilityBackend: EventBackend {
    /// Current visibility. Hosts without the concept report `Visible`.
    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }
}

/// Network connection information.
pub trait NetworkBackend: EventBackend {
    /// Current connection information, or `None` when the host does not
    /// expose any.
    fn network(&self) -> Option<NetworkStatus>;
}

/// Identity strings for device detection.
pub trait EnvironmentBackend {
    /// User-agent and platform identity, or `None` outside a browser-like
    /// context.
    fn environment(&self) -> Option<HostEnvironment>;
}
