//! Gate states and dismissal reasons.

use crate::render::WelcomeStyle;
use std::time::Instant;

/// Where a welcome key is in its activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Not activated yet, or torn down.
    Idle,
    /// Reading the persisted flag; only observable inside `activate`.
    Checking,
    /// Already seen; nothing will be shown for this activation.
    Hidden,
    /// Unseen; the screen appears once `due` has passed.
    Scheduled {
        /// When the screen should appear
        due: Instant,
        /// Layout to present
        style: WelcomeStyle,
    },
    /// The screen is visible.
    Presenting {
        /// Layout on screen
        style: WelcomeStyle,
    },
    /// The user dismissed the screen and the flag was written.
    Dismissed,
}

impl GateState {
    /// Whether this state can no longer lead to a presentation.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Hidden | Self::Dismissed)
    }
}

/// How the user closed the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The continue button.
    ContinuePressed,
    /// A toolkit-level dismissal such as Esc.
    Gesture,
}
