// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Body scroll locking.
//!
//! Enabling the lock saves the current scroll position on the host and then
//! asks the host to pin the document at that offset; disabling removes the
//! pin and restores the saved position. The saved-position slot doubles as
//! the lock marker, so both operations are idempotent: enabling while
//! locked and disabling while unlocked are no-ops.

use overhang_host::ScrollBackend;

/// Whether the document is currently scroll-locked.
pub fn is_scroll_locked<H: ScrollBackend>(host: &H) -> bool {
    host.saved_scroll_position().is_some()
}

/// Pin the document at its current scroll position.
///
/// A no-op when the lock is already held; the originally saved position is
/// kept, not overwritten.
pub fn enable_scroll_lock<H: ScrollBackend>(host: &H) {
    if host.saved_scroll_position().is_some() {
        return;
    }
    let y = host.scroll_y();
    host.save_scroll_position(y);
    host.apply_scroll_lock(y);
}

/// Release the lock and restore the saved scroll position.
///
/// A no-op when the lock is not held. A saved position that is no longer a
/// finite number (a host-side slot can be clobbered by other code) falls
/// back to the top of the document, with a warning.
pub fn disable_scroll_lock<H: ScrollBackend>(host: &H) {
    let Some(saved) = host.saved_scroll_position() else {
        return;
    };
    host.remove_scroll_lock();
    if saved.is_finite() {
        host.scroll_to(0.0, saved);
    } else {
        log::warn!("saved scroll position {saved} is not finite; restoring to top");
        host.scroll_to(0.0, 0.0);
    }
    host.clear_saved_scroll_position();
}

#[cfg(test)]
mod tests {
    use super::*;
    use overhang_host::backends::{FakeHost, NullHost};

    #[test]
    fn lock_and_unlock_restore_the_position() {
        let host = FakeHost::new();
        host.set_scroll_y(420.0);

        assert!(!is_scroll_locked(&host));
        enable_scroll_lock(&host);
        assert!(is_scroll_locked(&host));
        assert_eq!(host.lock_offset(), Some(420.0));

        disable_scroll_lock(&host);
        assert!(!is_scroll_locked(&host));
        assert_eq!(host.lock_offset(), None);
        assert_eq!(host.last_scroll_to(), Some((0.0, 420.0)));
    }

    #[test]
    fn enable_is_idempotent() {
        let host = FakeHost::new();
        host.set_scroll_y(100.0);
        enable_scroll_lock(&host);

        // Scrolling while locked must not clobber the saved position.
        host.set_scroll_y(0.0);
        enable_scroll_lock(&host);

        disable_scroll_lock(&host);
        assert_eq!(host.last_scroll_to(), Some((0.0, 100.0)));
    }

    #[test]
    fn disable_without_lock_is_a_no_op() {
        let host = FakeHost::new();
        host.set_scroll_y(250.0);

        disable_scroll_lock(&host);
        assert_eq!(host.last_scroll_to(), None);
        assert!(!is_scroll_locked(&host));
    }

    #[test]
    fn poisoned_saved_position_restores_to_top() {
        let host = FakeHost::new();
        host.set_saved_scroll_position(Some(f64::NAN));
        assert!(is_scroll_locked(&host));

        disable_scroll_lock(&host);
        assert_eq!(host.last_scroll_to(), Some((0.0, 0.0)));
        assert!(!is_scroll_locked(&host));
    }

    #[test]
    fn inert_host_is_safe() {
        assert!(!is_scroll_locked(&NullHost));
        enable_scroll_lock(&NullHost);
        disable_scroll_lock(&NullHost);
        assert!(!is_scroll_locked(&NullHost));
    }
}
