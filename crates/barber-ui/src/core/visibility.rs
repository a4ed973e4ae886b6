//! Two-state visibility used by every toggled widget.

/// Whether a widget is shown. Projected onto the page through the `hidden` marker class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Marker class absent.
    Visible,
    /// Marker class present.
    #[default]
    Hidden,
}

impl Visibility {
    /// Read visibility from the presence of the hidden marker class.
    #[must_use]
    pub const fn from_hidden_marker(present: bool) -> Self {
        if present { Self::Hidden } else { Self::Visible }
    }

    /// The opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }

    /// `true` when shown.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Whether the hidden marker class should be present for this state.
    #[must_use]
    pub const fn hidden_marker(self) -> bool {
        !self.is_visible()
    }

    /// Label used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Visibility;

    #[test]
    fn toggling_twice_restores_state() {
        for start in [Visibility::Visible, Visibility::Hidden] {
            assert_ne!(start.toggled(), start);
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn marker_round_trips() {
        assert_eq!(Visibility::from_hidden_marker(true), Visibility::Hidden);
        assert_eq!(Visibility::from_hidden_marker(false), Visibility::Visible);
        assert!(Visibility::Hidden.hidden_marker());
        assert!(!Visibility::Visible.hidden_marker());
    }
}
