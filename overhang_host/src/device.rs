// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device detection from host identity strings.
//!
//! Platform notes:
//! - Before iPadOS 13, iPads carried an `iPad` token in the user agent.
//! - From iPadOS 13 on, Safari reports the platform as `MacIntel` so sites
//!   treat it as desktop-class; those devices still expose multi-touch,
//!   which is the signal used here to tell them apart from actual Macs.
//! - Every Android browser carries an `Android` user-agent token.

use crate::backend::EnvironmentBackend;
use crate::types::HostEnvironment;

/// Whether the identity strings describe an iOS or iPadOS device.
pub fn is_ios(env: &HostEnvironment) -> bool {
    let ua = env.user_agent.as_str();
    let classic = contains_ignore_ascii_case(ua, "iphone")
        || contains_ignore_ascii_case(ua, "ipad")
        || contains_ignore_ascii_case(ua, "ipod");
    let modern_ipad = env.platform == "MacIntel" && env.max_touch_points > 1;
    classic || modern_ipad
}

/// Whether the identity strings describe an Android device.
pub fn is_android(env: &HostEnvironment) -> bool {
    contains_ignore_ascii_case(env.user_agent.as_str(), "android")
}

/// [`is_ios`] against a host's reported environment. `false` when the host
/// exposes no identity (non-browser context).
pub fn detect_ios<H: EnvironmentBackend>(host: &H) -> bool {
    host.environment().is_some_and(|env| is_ios(&env))
}

/// [`is_android`] against a host's reported environment. `false` when the
/// host exposes no identity.
pub fn detect_android<H: EnvironmentBackend>(host: &H) -> bool {
    host.environment().is_some_and(|env| is_android(&env))
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
