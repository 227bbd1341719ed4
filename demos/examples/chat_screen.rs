// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated mobile chat screen driven through `FakeHost`.
//!
//! This example shows how the pieces combine:
//! - `overhang_viewport` to read the home-indicator safe-area inset,
//! - `overhang_keyboard` to pad the input bar above the on-screen keyboard,
//! - `overhang_scroll` to lock the page while an attachment sheet is open,
//! - `overhang_gesture` to open a context menu on long-pressing a message.
//!
//! Run:
//! - `cargo run -p overhang_demos --example chat_screen`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use overhang_gesture::{LongPress, LongPressOptions, MoveThreshold};
use overhang_host::backends::FakeHost;
use overhang_host::{EventSource, ViewportGeometry};
use overhang_keyboard::{SubscribeOptions, subscribe_keyboard_height};
use overhang_scroll::{disable_scroll_lock, enable_scroll_lock, is_scroll_locked};
use overhang_viewport::safe_area_inset;

fn main() {
    // An 800px-tall phone screen with a home indicator, keyboard hidden.
    let host = Rc::new(FakeHost::with_viewport(ViewportGeometry::with_heights(
        800.0, 800.0,
    )));
    host.set_safe_area(overhang_host::SafeAreaInset {
        top: 47.0,
        bottom: 34.0,
        left: 0.0,
        right: 0.0,
    });
    println!(
        "home indicator inset: {:.0}px",
        safe_area_inset(host.as_ref()).bottom
    );

    // Pad the input bar whenever the keyboard height changes. The
    // subscription throttles and deduplicates, so an animation burst of
    // viewport events turns into a handful of callbacks.
    let subscription = subscribe_keyboard_height(
        &host,
        SubscribeOptions {
            immediate: true,
            throttle_ms: 16,
        },
        |height| println!("input bar bottom padding: {height:.0}px"),
    );

    // The user taps the input; the keyboard animates in. The viewport
    // shrinks over a dozen frames, two events per frame, 8ms apart.
    println!("-- keyboard opening --");
    let mut height = 800.0;
    while height > 500.0 {
        height -= 25.0;
        host.set_viewport(Some(ViewportGeometry::with_heights(800.0, height)));
        host.emit(EventSource::VIEWPORT_RESIZE);
        host.emit(EventSource::VIEWPORT_SCROLL);
        host.advance(8);
    }

    // Long-press a message bubble to open its context menu; a short tap
    // just selects it.
    println!("-- long-pressing a message --");
    let menu_open = Rc::new(Cell::new(false));
    let menu = Rc::clone(&menu_open);
    let gesture = LongPress::new(
        &host,
        LongPressOptions {
            move_threshold: MoveThreshold {
                x: Some(10.0),
                y: Some(10.0),
            },
            ..LongPressOptions::default()
        },
        move || {
            menu.set(true);
            println!("context menu opened");
        },
    )
    .on_click(|| println!("message selected"))
    .on_long_press_end(|| println!("context menu press released"));

    gesture.pointer_down(Point::new(180.0, 320.0));
    host.advance(500);
    gesture.pointer_up();

    // The context menu is a full-screen overlay, so lock the page behind
    // it while it is up.
    if menu_open.get() {
        println!("-- locking scroll behind the menu --");
        host.set_scroll_y(240.0);
        enable_scroll_lock(host.as_ref());
        println!("locked: {}", is_scroll_locked(host.as_ref()));

        disable_scroll_lock(host.as_ref());
        println!(
            "unlocked, restored to y = {:?}",
            host.last_scroll_to().map(|(_, y)| y)
        );
    }

    // Keyboard dismissed; the subscription reports zero again.
    println!("-- keyboard closing --");
    host.advance(16);
    host.set_viewport(Some(ViewportGeometry::with_heights(800.0, 800.0)));
    host.emit(EventSource::VIEWPORT_RESIZE);

    subscription.unsubscribe();
    println!("done, listeners remaining: {}", host.listener_count());
}
