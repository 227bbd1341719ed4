// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overhang Visibility: page visibility snapshots and change notifications.
//!
//! [`page_visibility`] reads the current state; [`subscribe_visibility`]
//! re-reads it whenever the host delivers a visibility-change event (tab
//! switch, window minimized). Hosts without the concept report `Visible`,
//! so callers can pause videos or analytics unconditionally.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;

use overhang_host::VisibilityBackend;
use overhang_host::subscription::EventSubscription;
use overhang_host::types::{EventSource, Visibility};

/// Page visibility information.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageVisibility {
    /// Whether the page is currently visible to the user.
    pub is_visible: bool,
    /// The underlying visibility state.
    pub state: Visibility,
}

impl PageVisibility {
    fn read<H: VisibilityBackend>(host: &H) -> Self {
        let state = host.visibility();
        Self {
            is_visible: state == Visibility::Visible,
            state,
        }
    }
}

/// Options for [`subscribe_visibility`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityOptions {
    /// Fire the callback synchronously once during subscription with the
    /// current state.
    pub immediate: bool,
}

/// Handle for an active visibility subscription.
pub type VisibilitySubscription<H> = EventSubscription<H>;

/// Current page visibility. `Visible` on hosts without the concept.
pub fn page_visibility<H: VisibilityBackend>(host: &H) -> PageVisibility {
    PageVisibility::read(host)
}

/// Subscribe to page visibility changes.
///
/// The state is re-read per event, so a callback arriving late still sees
/// the current value rather than the one that triggered it.
pub fn subscribe_visibility<H, F>(
    host: &Rc<H>,
    options: VisibilityOptions,
    callback: F,
) -> VisibilitySubscription<H>
where
    H: VisibilityBackend + 'static,
    F: FnMut(PageVisibility) + 'static,
{
    EventSubscription::subscribe(
        host,
        EventSource::VISIBILITY,
        options.immediate,
        PageVisibility::read,
        callback,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use overhang_host::backends::{FakeHost, NullHost};

    #[test]
    fn unsupported_host_reads_visible() {
        let visibility = page_visibility(&NullHost);
        assert!(visibility.is_visible);
        assert_eq!(visibility.state, Visibility::Visible);
    }

    #[test]
    fn tracks_hide_and_show() {
        let host = Rc::new(FakeHost::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = subscribe_visibility(
            &host,
            VisibilityOptions::default(),
            move |visibility| sink.borrow_mut().push(visibility.state),
        );

        host.set_visibility(Visibility::Hidden);
        host.emit(EventSource::VISIBILITY);
        host.set_visibility(Visibility::Visible);
        host.emit(EventSource::VISIBILITY);

        assert_eq!(*seen.borrow(), [Visibility::Hidden, Visibility::Visible]);

        subscription.unsubscribe();
        host.set_visibility(Visibility::Hidden);
        host.emit(EventSource::VISIBILITY);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn immediate_reports_the_current_state_first() {
        let host = Rc::new(FakeHost::new());
        host.set_visibility(Visibility::Hidden);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = subscribe_visibility(
            &host,
            VisibilityOptions { immediate: true },
            move |visibility| sink.borrow_mut().push(visibility.is_visible),
        );

        assert_eq!(*seen.borrow(), [false]);
        subscription.unsubscribe();
    }
}
