//! Effective scroll-off for a window.

use crate::numeric::clamp;
use crate::view::ViewAccess;

/// Scroll-off actually usable in a window of `height` text rows.
///
/// The preference is capped at half the height. With an even height a margin
/// of exactly half on both sides would leave no row for the cursor, so one
/// line is given back.
pub fn scroll_off(height: usize, preference: usize) -> usize {
    let half = height / 2;
    let so = clamp(preference, 0, half);
    if height % 2 == 0 && preference >= half {
        so.saturating_sub(1)
    } else {
        so
    }
}

/// [`scroll_off`] using the window's text height and configured preference.
pub fn effective_scroll_off<W: ViewAccess + ?Sized>(window: &W) -> usize {
    scroll_off(window.text_height(), window.scroll_off_preference())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::BufferWindow;

    #[test]
    fn test_even_height_gives_back_a_row() {
        assert_eq!(scroll_off(10, 5), 4);
        assert_eq!(scroll_off(10, 100), 4);
        assert_eq!(scroll_off(10, 4), 4);
        assert_eq!(scroll_off(10, 3), 3);
    }

    #[test]
    fn test_odd_height() {
        assert_eq!(scroll_off(11, 5), 5);
        assert_eq!(scroll_off(11, 99), 5);
        assert_eq!(scroll_off(11, 0), 0);
    }

    #[test]
    fn test_degenerate_heights() {
        assert_eq!(scroll_off(0, 0), 0);
        assert_eq!(scroll_off(0, 8), 0);
        assert_eq!(scroll_off(1, 8), 0);
        assert_eq!(scroll_off(2, 8), 0);
    }

    #[test]
    fn test_never_exceeds_half_height() {
        for height in 0..40 {
            for preference in 0..40 {
                assert!(scroll_off(height, preference) <= height / 2);
            }
        }
    }

    #[test]
    fn test_window_decorations_change_parity() {
        let win = BufferWindow::new(100, 11)
            .with_decoration_rows(1)
            .with_scroll_off(5);
        // 10 text rows once the winbar is taken out
        assert_eq!(effective_scroll_off(&win), 4);

        let win = BufferWindow::new(100, 11).with_scroll_off(5);
        assert_eq!(effective_scroll_off(&win), 5);
    }
}
