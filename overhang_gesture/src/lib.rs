// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overhang Gesture: long-press recognition.
//!
//! [`LongPress`] turns a raw pointer stream (down, move, up, leave) into
//! long-press and click callbacks. The caller feeds it pointer events from
//! whatever input layer it has; the recognizer owns the hold timer via the
//! host's [`Scheduler`](overhang_host::Scheduler).
//!
//! A press that survives [`delay_ms`](LongPressOptions::delay_ms) without
//! being released, leaving the target, or drifting past the
//! [`MoveThreshold`] fires `on_long_press`. Releasing earlier fires
//! `on_click` instead (when one is set); releasing after the long press
//! fired fires `on_long_press_end`.
//!
//! ```
//! use std::rc::Rc;
//! use kurbo::Point;
//! use overhang_gesture::{LongPress, LongPressOptions};
//! use overhang_host::backends::FakeHost;
//!
//! let host = Rc::new(FakeHost::new());
//! let gesture = LongPress::new(&host, LongPressOptions::default(), || {
//!     // show the context menu
//! });
//!
//! gesture.pointer_down(Point::new(10.0, 10.0));
//! host.advance(500);
//! gesture.pointer_up();
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Either the `std` (default) or
//! `libm` feature must be enabled for `kurbo`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use kurbo::Point;
use overhang_host::Scheduler;
use overhang_host::types::TimerId;

/// Per-axis movement tolerance for an in-flight press.
///
/// An axis set to `None` is not tracked at all. With both axes `None`
/// (the default), pointer movement never cancels the press.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MoveThreshold {
    /// Maximum horizontal drift, in pixels, before the press is cancelled.
    pub x: Option<f64>,
    /// Maximum vertical drift, in pixels, before the press is cancelled.
    pub y: Option<f64>,
}

impl MoveThreshold {
    /// No movement tracking on either axis.
    pub const NONE: Self = Self { x: None, y: None };

    fn exceeded(&self, origin: Point, current: Point) -> bool {
        let beyond = |delta: f64, limit: Option<f64>| match limit {
            Some(limit) => delta > limit || delta < -limit,
            None => false,
        };
        beyond(current.x - origin.x, self.x) || beyond(current.y - origin.y, self.y)
    }
}

/// Options for [`LongPress::new`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LongPressOptions {
    /// How long the pointer must stay down before the press counts as long.
    pub delay_ms: u64,
    /// Movement tolerance while the pointer is down.
    pub move_threshold: MoveThreshold,
}

impl Default for LongPressOptions {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            move_threshold: MoveThreshold::NONE,
        }
    }
}

struct State {
    origin: Option<Point>,
    timer: Option<TimerId>,
    fired: bool,
}

struct Shared<H> {
    host: Weak<H>,
    delay_ms: u64,
    move_threshold: MoveThreshold,
    on_long_press: RefCell<Box<dyn FnMut()>>,
    on_click: RefCell<Option<Box<dyn FnMut()>>>,
    on_long_press_end: RefCell<Option<Box<dyn FnMut()>>>,
    state: RefCell<State>,
}

impl<H: Scheduler + 'static> Shared<H> {
    fn fire(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.origin.is_none() {
                return;
            }
            state.timer = None;
            state.fired = true;
        }
        (self.on_long_press.borrow_mut())();
    }

    fn clear_timer(&self, state: &mut State) {
        if let Some(timer) = state.timer.take() {
            if let Some(host) = self.host.upgrade() {
                host.clear_timeout(timer);
            }
        }
    }
}

/// A long-press recognizer bound to one pressable target.
///
/// Feed it the target's pointer events; it is reusable across presses and
/// carries no state between them.
pub struct LongPress<H> {
    shared: Rc<Shared<H>>,
}

impl<H: Scheduler + 'static> LongPress<H> {
    /// Create a recognizer. `on_long_press` fires once per press that
    /// holds still for the configured delay.
    pub fn new<F>(host: &Rc<H>, options: LongPressOptions, on_long_press: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            shared: Rc::new(Shared {
                host: Rc::downgrade(host),
                delay_ms: options.delay_ms,
                move_threshold: options.move_threshold,
                on_long_press: RefCell::new(Box::new(on_long_press)),
                on_click: RefCell::new(None),
                on_long_press_end: RefCell::new(None),
                state: RefCell::new(State {
                    origin: None,
                    timer: None,
                    fired: false,
                }),
            }),
        }
    }

    /// Fire `callback` when the pointer is released before the delay
    /// elapses, i.e. for an ordinary click.
    pub fn on_click<F>(self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        *self.shared.on_click.borrow_mut() = Some(Box::new(callback));
        self
    }

    /// Fire `callback` when the pointer is released after the long press
    /// already fired.
    pub fn on_long_press_end<F>(self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        *self.shared.on_long_press_end.borrow_mut() = Some(Box::new(callback));
        self
    }

    /// The pointer went down on the target. Starts the hold timer.
    pub fn pointer_down(&self, position: Point) {
        self.cancel();
        let Some(host) = self.shared.host.upgrade() else {
            return;
        };
        let weak = Rc::downgrade(&self.shared);
        let timer = host.set_timeout(
            self.shared.delay_ms,
            Rc::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.fire();
                }
            }),
        );
        let mut state = self.shared.state.borrow_mut();
        state.origin = Some(position);
        state.timer = Some(timer);
        state.fired = false;
    }

    /// The pointer moved while down. Cancels the press when the drift
    /// exceeds the configured threshold; a no-op when no axis is tracked
    /// or no press is in flight.
    pub fn pointer_move(&self, position: Point) {
        let origin = {
            let state = self.shared.state.borrow();
            let Some(origin) = state.origin else {
                return;
            };
            origin
        };
        if self.shared.move_threshold.exceeded(origin, position) {
            self.cancel();
        }
    }

    /// The pointer was released over the target.
    ///
    /// Resolves the press: `on_long_press_end` when the long press already
    /// fired, `on_click` otherwise.
    pub fn pointer_up(&self) {
        let fired = {
            let mut state = self.shared.state.borrow_mut();
            if state.origin.is_none() {
                return;
            }
            self.shared.clear_timer(&mut state);
            state.origin = None;
            core::mem::replace(&mut state.fired, false)
        };
        if fired {
            if let Some(callback) = self.shared.on_long_press_end.borrow_mut().as_mut() {
                callback();
            }
        } else if let Some(callback) = self.shared.on_click.borrow_mut().as_mut() {
            callback();
        }
    }

    /// Abandon the in-flight press without resolving it, e.g. because the
    /// pointer left the target. No callback fires. Idempotent.
    pub fn cancel(&self) {
        let mut state = self.shared.state.borrow_mut();
        self.shared.clear_timer(&mut state);
        state.origin = None;
        state.fired = false;
    }
}

impl<H> core::fmt::Debug for LongPress<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("LongPress")
            .field("pressed", &state.origin.is_some())
            .field("fired", &state.fired)
            .finish_non_exhaustive()
    }
}
