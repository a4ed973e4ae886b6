//! Explicit view state for every widget and the pure transitions over it.
//!
//! # Design
//! - Each widget owns one field; no transition touches more than one.
//! - `apply` returns the [`Projection`] the renderer must push to the page.

use std::collections::BTreeMap;

use super::services::{ServiceFilter, custom_field_visibility};
use super::theme::ThemeMode;
use super::visibility::Visibility;

/// Current state of all widgets bound by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile navigation menu.
    pub mobile_menu: Visibility,
    /// Active theme.
    pub theme: ThemeMode,
    /// Custom-service text field.
    pub custom_service_field: Visibility,
    /// Last filter applied to the service cards.
    pub service_filter: ServiceFilter,
    /// Dropdown panels keyed by element id, tracked once first observed.
    pub dropdowns: BTreeMap<String, Visibility>,
    /// Delete-confirmation modal.
    pub delete_modal: Visibility,
}

/// User intents that change [`UiState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    /// Menu button clicked.
    ToggleMobileMenu,
    /// Either theme button clicked.
    ToggleTheme,
    /// Service-type select changed to the given value.
    ServiceTypeChanged(String),
    /// Filter the service cards.
    FilterServices(ServiceFilter),
    /// Flip the dropdown with this id.
    ToggleDropdown(String),
    /// Hide the dropdown with this id.
    CloseDropdown(String),
    /// Reveal the delete modal.
    ShowDeleteModal,
    /// Hide the delete modal.
    HideDeleteModal,
}

/// State slice that must be pushed to the page after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Projection {
    /// Mobile menu visibility.
    MobileMenu(Visibility),
    /// Theme classes.
    Theme(ThemeMode),
    /// Custom-service field presence.
    CustomServiceField(Visibility),
    /// Card filter.
    ServiceFilter(ServiceFilter),
    /// One dropdown panel.
    Dropdown {
        /// Element id of the panel.
        id: String,
        /// Target visibility.
        visibility: Visibility,
    },
    /// Delete modal visibility.
    DeleteModal(Visibility),
}

impl UiState {
    /// Record the visibility a dropdown shows on the page, replacing the tracked value.
    pub fn observe_dropdown(&mut self, id: &str, observed: Visibility) {
        self.dropdowns.insert(id.to_string(), observed);
    }

    /// Tracked visibility for a dropdown.
    #[must_use]
    pub fn dropdown(&self, id: &str) -> Option<Visibility> {
        self.dropdowns.get(id).copied()
    }

    /// Apply an action and return what changed.
    pub fn apply(&mut self, action: UiAction) -> Projection {
        match action {
            UiAction::ToggleMobileMenu => {
                self.mobile_menu = self.mobile_menu.toggled();
                Projection::MobileMenu(self.mobile_menu)
            }
            UiAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                Projection::Theme(self.theme)
            }
            UiAction::ServiceTypeChanged(value) => {
                self.custom_service_field = custom_field_visibility(&value);
                Projection::CustomServiceField(self.custom_service_field)
            }
            UiAction::FilterServices(filter) => {
                self.service_filter = filter;
                Projection::ServiceFilter(self.service_filter.clone())
            }
            UiAction::ToggleDropdown(id) => {
                let slot = self.dropdowns.entry(id.clone()).or_default();
                *slot = slot.toggled();
                Projection::Dropdown {
                    id,
                    visibility: *slot,
                }
            }
            UiAction::CloseDropdown(id) => {
                self.dropdowns.insert(id.clone(), Visibility::Hidden);
                Projection::Dropdown {
                    id,
                    visibility: Visibility::Hidden,
                }
            }
            UiAction::ShowDeleteModal => {
                self.delete_modal = Visibility::Visible;
                Projection::DeleteModal(self.delete_modal)
            }
            UiAction::HideDeleteModal => {
                self.delete_modal = Visibility::Hidden;
                Projection::DeleteModal(self.delete_modal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parity_follows_click_count() {
        for clicks in 0..7 {
            let mut state = UiState::default();
            for _ in 0..clicks {
                state.apply(UiAction::ToggleTheme);
            }
            let expected = if clicks % 2 == 1 {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            assert_eq!(state.theme, expected, "after {clicks} clicks");
        }
    }

    #[test]
    fn menu_toggle_is_an_involution() {
        let mut state = UiState::default();
        let before = state.mobile_menu;
        assert_eq!(
            state.apply(UiAction::ToggleMobileMenu),
            Projection::MobileMenu(before.toggled())
        );
        state.apply(UiAction::ToggleMobileMenu);
        assert_eq!(state.mobile_menu, before);
    }

    #[test]
    fn service_type_drives_custom_field() {
        let mut state = UiState::default();
        state.apply(UiAction::ServiceTypeChanged("custom".into()));
        assert_eq!(state.custom_service_field, Visibility::Visible);
        state.apply(UiAction::ServiceTypeChanged("custom".into()));
        assert_eq!(state.custom_service_field, Visibility::Visible);
        state.apply(UiAction::ServiceTypeChanged("beard".into()));
        assert_eq!(state.custom_service_field, Visibility::Hidden);
    }

    #[test]
    fn observed_dropdown_state_is_respected() {
        let mut state = UiState::default();
        state.observe_dropdown("dropdownMenu", Visibility::Hidden);
        state.observe_dropdown("dropdownMenu", Visibility::Visible);
        assert_eq!(state.dropdown("dropdownMenu"), Some(Visibility::Visible));

        state.apply(UiAction::ToggleDropdown("dropdownMenu".into()));
        assert_eq!(state.dropdown("dropdownMenu"), Some(Visibility::Hidden));
        state.observe_dropdown("dropdownMenu", Visibility::Visible);
        state.apply(UiAction::ToggleDropdown("dropdownMenu".into()));
        assert_eq!(state.dropdown("dropdownMenu"), Some(Visibility::Hidden));
    }

    #[test]
    fn close_dropdown_is_unconditional() {
        let mut state = UiState::default();
        let projection = state.apply(UiAction::CloseDropdown("dropdownMenu".into()));
        assert_eq!(
            projection,
            Projection::Dropdown {
                id: "dropdownMenu".into(),
                visibility: Visibility::Hidden,
            }
        );
        state.apply(UiAction::CloseDropdown("dropdownMenu".into()));
        assert_eq!(state.dropdown("dropdownMenu"), Some(Visibility::Hidden));
    }

    #[test]
    fn modal_show_then_hide_restores_hidden() {
        let mut state = UiState::default();
        let before = state.delete_modal;
        state.apply(UiAction::ShowDeleteModal);
        assert!(state.delete_modal.is_visible());
        state.apply(UiAction::HideDeleteModal);
        assert_eq!(state.delete_modal, before);
    }

    #[test]
    fn filter_action_replaces_previous_filter() {
        let mut state = UiState::default();
        state.apply(UiAction::FilterServices(ServiceFilter::new("hair")));
        assert_eq!(state.service_filter.category(), Some("hair"));
        state.apply(UiAction::FilterServices(ServiceFilter::new("")));
        assert_eq!(state.service_filter.category(), None);
    }
}
