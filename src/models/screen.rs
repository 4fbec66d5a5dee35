//! Screen navigation state machine
//!
//! The four top-level screens and the swipe transition table that moves
//! between them. The table is total: every (screen, direction) pair has a
//! defined next screen, possibly itself.

/// Horizontal translation a drag must exceed (in either direction, in
/// terminal columns) to be recognized as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// One of the four top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Title,
    Login,
    Welcome,
    Zen,
}

/// Direction of a recognized horizontal swipe.
///
/// `Left` is a leftward drag (negative translation), which advances through
/// the app; `Right` is a rightward drag, which moves back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl Screen {
    /// Next screen for a recognized swipe in `direction`.
    ///
    /// Zen maps both directions to Welcome on purpose ("free movement
    /// back") - it is an exit-only room, not a symmetric stop on the strip.
    pub fn next(self, direction: SwipeDirection) -> Screen {
        use SwipeDirection::{Left, Right};
        match (self, direction) {
            (Screen::Title, Left) => Screen::Login,
            (Screen::Title, Right) => Screen::Title,
            (Screen::Login, Left) => Screen::Welcome,
            (Screen::Login, Right) => Screen::Title,
            (Screen::Welcome, Left) => Screen::Zen,
            (Screen::Welcome, Right) => Screen::Login,
            (Screen::Zen, Left) | (Screen::Zen, Right) => Screen::Welcome,
        }
    }

    /// Display name used in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Title => "Title",
            Screen::Login => "Login",
            Screen::Welcome => "Welcome",
            Screen::Zen => "Zen Room",
        }
    }

    /// All screens, for exhaustive iteration in tests and the status bar dots.
    pub const ALL: [Screen; 4] = [Screen::Title, Screen::Login, Screen::Welcome, Screen::Zen];
}

/// Classify a horizontal translation as a swipe, if it clears the threshold.
///
/// Negative translation is a leftward drag. Translations at or below the
/// threshold are not swipes and return `None` (ignored, not an error).
pub fn classify_swipe(translation: f32) -> Option<SwipeDirection> {
    if translation < -SWIPE_THRESHOLD {
        Some(SwipeDirection::Left)
    } else if translation > SWIPE_THRESHOLD {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen_is_title() {
        assert_eq!(Screen::default(), Screen::Title);
    }

    #[test]
    fn test_transition_table_is_total() {
        // Every (screen, direction) pair lands on one of the four screens.
        for screen in Screen::ALL {
            for direction in [SwipeDirection::Left, SwipeDirection::Right] {
                let next = screen.next(direction);
                assert!(Screen::ALL.contains(&next));
            }
        }
    }

    #[test]
    fn test_title_right_is_noop() {
        assert_eq!(Screen::Title.next(SwipeDirection::Right), Screen::Title);
    }

    #[test]
    fn test_title_left_goes_to_login() {
        assert_eq!(Screen::Title.next(SwipeDirection::Left), Screen::Login);
    }

    #[test]
    fn test_login_transitions() {
        assert_eq!(Screen::Login.next(SwipeDirection::Left), Screen::Welcome);
        assert_eq!(Screen::Login.next(SwipeDirection::Right), Screen::Title);
    }

    #[test]
    fn test_welcome_transitions() {
        assert_eq!(Screen::Welcome.next(SwipeDirection::Left), Screen::Zen);
        assert_eq!(Screen::Welcome.next(SwipeDirection::Right), Screen::Login);
    }

    #[test]
    fn test_zen_converges_to_welcome_both_directions() {
        assert_eq!(Screen::Zen.next(SwipeDirection::Left), Screen::Welcome);
        assert_eq!(Screen::Zen.next(SwipeDirection::Right), Screen::Welcome);
    }

    #[test]
    fn test_classify_swipe_below_threshold_is_ignored() {
        assert_eq!(classify_swipe(0.0), None);
        assert_eq!(classify_swipe(50.0), None);
        assert_eq!(classify_swipe(-50.0), None);
        assert_eq!(classify_swipe(12.5), None);
    }

    #[test]
    fn test_classify_swipe_above_threshold() {
        assert_eq!(classify_swipe(-51.0), Some(SwipeDirection::Left));
        assert_eq!(classify_swipe(51.0), Some(SwipeDirection::Right));
        assert_eq!(classify_swipe(-200.0), Some(SwipeDirection::Left));
    }
}
