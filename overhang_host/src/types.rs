// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by the host capability traits: geometry snapshots,
//! event sources, and listener/timer identifiers.

use alloc::rc::Rc;
use alloc::string::String;

/// Snapshot of the host's visual viewport geometry.
///
/// Mirrors what a browser host reports through the Visual Viewport API,
/// plus the layout-viewport height (`window.innerHeight` on the web) that
/// keyboard-height derivation needs. All values are CSS pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportGeometry {
    /// Visible viewport width.
    pub width: f64,
    /// Visible viewport height. Shrinks when an on-screen keyboard overlaps it.
    pub height: f64,
    /// Horizontal offset of the visible viewport from the layout viewport.
    ///
    /// Typically 0 unless horizontal panning or pinch-zoom occurs.
    pub offset_left: f64,
    /// Vertical offset of the visible viewport from the layout viewport.
    ///
    /// On iOS the viewport can shift vertically when the keyboard appears,
    /// without resizing; this offset captures that shift.
    pub offset_top: f64,
    /// Pinch-zoom scale factor. 1.0 means no zoom.
    pub scale: f64,
    /// Height of the layout viewport (the container the visible viewport
    /// moves within).
    pub container_height: f64,
}

impl ViewportGeometry {
    /// A convenience snapshot with the given heights and no offset or zoom.
    pub const fn with_heights(container_height: f64, height: f64) -> Self {
        Self {
            width: 0.0,
            height,
            offset_left: 0.0,
            offset_top: 0.0,
            scale: 1.0,
            container_height,
        }
    }
}

/// Safe-area insets reported by the host, in CSS pixels.
///
/// These account for device chrome: a notch or status bar at the top, the
/// home indicator at the bottom, rounded corners at the sides in landscape.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SafeAreaInset {
    /// Top inset (notch, Dynamic Island, or status bar).
    pub top: f64,
    /// Bottom inset (home indicator on Face ID devices).
    pub bottom: f64,
    /// Left inset (rounded corners in landscape).
    pub left: f64,
    /// Right inset (rounded corners in landscape).
    pub right: f64,
}

impl SafeAreaInset {
    /// All four insets zero.
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };
}

/// Page visibility state reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The page is visible to the user.
    Visible,
    /// The page is hidden (background tab, minimized window).
    Hidden,
}

/// Effective connection quality, as classified by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EffectiveConnectionType {
    /// Very slow connection, roughly sub-50kbps.
    Slow2g,
    /// 2G-class connection.
    TwoG,
    /// 3G-class connection.
    ThreeG,
    /// 4G-class or better connection.
    FourG,
}

/// Physical connection type, as reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    /// Bluetooth tethering.
    Bluetooth,
    /// Cellular data.
    Cellular,
    /// Wired ethernet.
    Ethernet,
    /// Multiple simultaneous connection types.
    Mixed,
    /// No connection.
    None,
    /// Some other connection type.
    Other,
    /// The host cannot tell.
    Unknown,
    /// Wi-Fi.
    Wifi,
    /// WiMAX.
    Wimax,
}

/// Network connection information.
///
/// Every field is optional: hosts expose whatever subset their platform
/// supports, and an entirely unsupported host yields the default value with
/// all fields `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NetworkStatus {
    /// Effective connection quality.
    pub effective_type: Option<EffectiveConnectionType>,
    /// Physical connection type.
    pub connection: Option<ConnectionType>,
    /// Downlink bandwidth estimate in megabits per second.
    pub downlink_mbps: Option<f64>,
    /// Round-trip time estimate in milliseconds.
    pub rtt_ms: Option<u64>,
    /// Whether the user has requested reduced data usage.
    pub save_data: Option<bool>,
}

/// Identity strings and capabilities the host exposes for device detection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostEnvironment {
    /// The user-agent string.
    pub user_agent: String,
    /// The platform string (for example `"MacIntel"` or `"iPhone"`).
    pub platform: String,
    /// Maximum number of simultaneous touch points.
    pub max_touch_points: u32,
}

bitflags::bitflags! {
    /// Event sources a listener can subscribe to.
    ///
    /// A listener registered with a combined mask fires when any source in
    /// the mask delivers an event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventSource: u8 {
        /// The visual viewport resized (keyboard shown/hidden, zoom).
        const VIEWPORT_RESIZE = 0b0000_0001;
        /// The visual viewport offset changed (iOS keyboard shift, panning).
        const VIEWPORT_SCROLL = 0b0000_0010;
        /// The layout window resized.
        const WINDOW_RESIZE   = 0b0000_0100;
        /// The document scrolled.
        const DOCUMENT_SCROLL = 0b0000_1000;
        /// The device orientation changed.
        const ORIENTATION     = 0b0001_0000;
        /// The page visibility state changed.
        const VISIBILITY      = 0b0010_0000;
        /// The network connection changed.
        const NETWORK         = 0b0100_0000;
    }
}

/// Identifier of a registered listener.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wrap a raw identifier. Backends choose their own numbering.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Identifier of a pending one-shot timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Wrap a raw identifier. Backends choose their own numbering.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Callback invoked when a subscribed event source fires.
///
/// Shared (`Rc`) so a backend can snapshot its listener table before
/// dispatching, which keeps dispatch safe against re-entrant registration
/// and removal. Everything runs on the single host thread.
pub type Listener = Rc<dyn Fn()>;

/// Callback invoked when a one-shot timer expires.
pub type TimerCallback = Rc<dyn Fn()>;
