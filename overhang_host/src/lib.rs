// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overhang Host: the capability layer the rest of Overhang is built on.
//!
//! ## Overview
//!
//! Overhang crates never reach for ambient platform globals. Instead, every
//! platform facility — viewport geometry, event delivery, one-shot timers,
//! scroll position, visibility, network information, identity strings — is
//! expressed as a small trait in [`backend`], and helpers are generic over
//! exactly the capabilities they need. A concrete host (a browser embedding,
//! a WebView bridge, a test double) implements the traits it can support.
//!
//! Missing capability is data, not failure: a host without viewport
//! geometry returns `None`, and everything downstream degrades to a defined
//! default instead of erroring. That makes call sites safe across
//! environment transitions (server rendering, hydration, headless runs)
//! without conditional guards.
//!
//! ## Execution model
//!
//! Single-threaded and cooperative. Listeners and timer callbacks run on
//! the host thread in delivery order; nothing here blocks or spawns.
//!
//! ## Backends
//!
//! - [`backends::NullHost`] — the degenerate host for non-browser contexts.
//! - [`backends::FakeHost`] *(feature `backend_fake`, default)* — a
//!   deterministic in-memory host with settable state, explicit event
//!   emission, and a manual clock. The workspace's tests and demos run on
//!   it.
//!
//! ## Subscriptions
//!
//! [`subscription::EventSubscription`] is the shared listen-and-read
//! plumbing used by the watcher crates: one listener, a fresh host read per
//! event, an idempotent re-entrant-safe `unsubscribe`.
//!
//! ## Device detection
//!
//! [`device`] classifies iOS/iPadOS and Android hosts from identity
//! strings, including the iPadOS-13+ case where Safari masquerades as
//! desktop-class `MacIntel`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod device;
pub mod subscription;
pub mod types;

pub use backend::{
    EnvironmentBackend, EventBackend, NetworkBackend, Scheduler, ScrollBackend, ViewportBackend,
    VisibilityBackend,
};
pub use types::{
    ConnectionType, EffectiveConnectionType, EventSource, HostEnvironment, Listener, ListenerId,
    NetworkStatus, SafeAreaInset, TimerCallback, TimerId, ViewportGeometry, Visibility,
};
