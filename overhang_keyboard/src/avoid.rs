// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset computation for keeping fixed-bottom UI above the keyboard.

/// Vertical translation, in pixels, that moves a fixed-bottom element clear
/// of the on-screen keyboard.
///
/// While the keyboard is visible the element is shifted up by the keyboard
/// height plus `base_bottom` (typically the bottom safe-area inset, so the
/// element clears the home indicator too). With the keyboard hidden the
/// translation is `0` and `base_bottom` is left to static layout.
///
/// ```
/// use overhang_keyboard::avoid_keyboard_offset;
///
/// assert_eq!(avoid_keyboard_offset(300.0, 34.0), -334.0);
/// assert_eq!(avoid_keyboard_offset(0.0, 34.0), 0.0);
/// ```
pub fn avoid_keyboard_offset(keyboard_height: f64, base_bottom: f64) -> f64 {
    if keyboard_height > 0.0 {
        -(keyboard_height + base_bottom)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::avoid_keyboard_offset;

    #[test]
    fn shifts_up_by_height_plus_base_while_visible() {
        assert_eq!(avoid_keyboard_offset(300.0, 0.0), -300.0);
        assert_eq!(avoid_keyboard_offset(300.0, 34.0), -334.0);
    }

    #[test]
    fn rests_at_zero_while_hidden() {
        assert_eq!(avoid_keyboard_offset(0.0, 0.0), 0.0);
        // The base offset applies only while the keyboard is up.
        assert_eq!(avoid_keyboard_offset(0.0, 34.0), 0.0);
    }
}
