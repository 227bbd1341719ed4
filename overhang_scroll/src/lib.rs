// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overhang Scroll: scroll-direction detection and body scroll locking.
//!
//! ## Direction
//!
//! [`subscribe_scroll_direction`] watches document scroll events and tells
//! the callback which way the user is scrolling, with the current position
//! attached — the usual driver for hide-on-scroll-down headers. Events are
//! throttled (50ms by default); see [`direction`] for the exact policy.
//!
//! ## Lock
//!
//! [`enable_scroll_lock`] / [`disable_scroll_lock`] pin the document while
//! an overlay is up and restore the scroll position afterwards, idempotent
//! in both directions. See [`lock`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod direction;
pub mod lock;

pub use direction::{
    ScrollDirection, ScrollDirectionOptions, ScrollDirectionState, ScrollDirectionSubscription,
    subscribe_scroll_direction,
};
pub use lock::{disable_scroll_lock, enable_scroll_lock, is_scroll_locked};
