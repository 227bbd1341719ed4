// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inert host for non-browser contexts.

use crate::backend::{
    EnvironmentBackend, EventBackend, NetworkBackend, Scheduler, ScrollBackend, ViewportBackend,
    VisibilityBackend,
};
use crate::types::{
    EventSource, HostEnvironment, Listener, ListenerId, NetworkStatus, TimerCallback, TimerId,
    ViewportGeometry,
};

/// Host backend for environments with no platform surface at all, such as
/// server-side rendering or headless execution.
///
/// Every read returns the documented unsupported-environment default, and
/// listeners and timers are accepted but never fire. Code written against
/// the capability traits can therefore run unguarded in any context.
///
/// ```
/// use overhang_host::backends::NullHost;
/// use overhang_host::ViewportBackend;
///
/// let host = NullHost;
/// assert!(host.viewport().is_none());
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct NullHost;

impl EventBackend for NullHost {
    fn add_listener(&self, _mask: EventSource, _listener: Listener) -> ListenerId {
        ListenerId::new(0)
    }

    fn remove_listener(&self, _id: ListenerId) {}
}

impl Scheduler for NullHost {
    fn set_timeout(&self, _delay_ms: u64, _callback: TimerCallback) -> TimerId {
        TimerId::new(0)
    }

    fn clear_timeout(&self, _id: TimerId) {}
}

impl ViewportBackend for NullHost {
    fn viewport(&self) -> Option<ViewportGeometry> {
        None
    }
}

impl ScrollBackend for NullHost {
    fn scroll_y(&self) -> f64 {
        0.0
    }

    fn scroll_to(&self, _x: f64, _y: f64) {}

    fn saved_scroll_position(&self) -> Option<f64> {
        None
    }

    fn save_scroll_position(&self, _y: f64) {}

    fn clear_saved_scroll_position(&self) {}

    fn apply_scroll_lock(&self, _offset_y: f64) {}

    fn remove_scroll_lock(&self) {}
}

impl VisibilityBackend for NullHost {}

impl NetworkBackend for NullHost {
    fn network(&self) -> Option<NetworkStatus> {
        None
    }
}

impl EnvironmentBackend for NullHost {
    fn environment(&self) -> Option<HostEnvironment> {
        None
    }
}
