//! Visibility of a field's validation feedback.

/// Whether validation feedback is shown for a field.
///
/// Fields start [`Hidden`](Self::Hidden) so the user is not greeted by a
/// wall of errors, become [`Visible`](Self::Visible) once they interact, and
/// go back to hidden on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityState {
    /// No feedback yet.
    Hidden,
    /// Feedback is shown. `show_error` decides whether errors are flagged as
    /// such (`is_error`) or only listed as supporting text.
    Visible {
        /// Errors are flagged.
        show_error: bool,
    },
}

impl VisibilityState {
    /// `true` unless hidden.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    /// `true` when visible with errors flagged.
    #[must_use]
    pub const fn shows_error(self) -> bool {
        matches!(self, Self::Visible { show_error: true })
    }

    /// Next state after the user interacted.
    ///
    /// `Some(flag)` requests `show_error = flag`. `None` keeps the current
    /// flag of a visible field and shows errors on a hidden one. An already
    /// visible field never goes from showing errors back to not showing them.
    #[must_use]
    pub const fn to_visible(self, show_error: Option<bool>) -> Self {
        let current = self.shows_error();
        let requested = match (show_error, self) {
            (Some(flag), _) => flag,
            (None, Self::Hidden) => true,
            (None, Self::Visible { .. }) => current,
        };
        Self::Visible {
            show_error: current || requested,
        }
    }
}
