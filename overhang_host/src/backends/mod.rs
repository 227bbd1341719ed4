// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concrete host backends.
//!
//! [`NullHost`] is the degenerate host for non-browser contexts; every read
//! returns the documented default and event plumbing is inert.
//! [`FakeHost`] (feature `backend_fake`) is a deterministic in-memory host
//! with a manual clock, used throughout the workspace's tests and demos.

mod null;

#[cfg(feature = "backend_fake")]
mod fake;

pub use null::NullHost;

#[cfg(feature = "backend_fake")]
pub use fake::FakeHost;
