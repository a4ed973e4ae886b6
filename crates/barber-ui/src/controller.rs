//! Page controller: binds the widgets, applies transitions, renders the result.
//!
//! # Design
//! - Binding resolves every required element up front; a missing one aborts
//!   before any listener is attached.
//! - Toggles re-read their marker class first, so markup changed by other
//!   scripts is never overwritten with a stale value.
//! - Every operation is `apply` followed by a render of the returned projection.

use tracing::{debug, info, warn};

use crate::config::PageConfig;
use crate::core::services::{FilterSummary, ServiceFilter};
use crate::core::state::{Projection, UiAction, UiState};
use crate::core::theme::ThemeMode;
use crate::core::visibility::Visibility;
use crate::error::{Result, UiError};
use crate::page::Page;
use crate::render::{
    observe_visibility, render_custom_service_field, render_service_filter, render_theme,
    render_visibility,
};

/// Service form elements: the type select and the custom field container.
#[derive(Clone, Debug)]
pub struct ServiceForm<E> {
    /// Service-type select.
    pub select: E,
    /// Container for the custom-service field.
    pub container: E,
}

/// Dropdown trigger, panel, and optional close button.
#[derive(Clone, Debug)]
pub struct Dropdown<E> {
    /// Button that toggles the panel.
    pub button: E,
    /// Dropdown panel.
    pub menu: E,
    /// Button that closes the panel.
    pub close: Option<E>,
}

/// Elements resolved at bind time.
#[derive(Clone, Debug)]
pub struct BoundWidgets<E> {
    /// Mobile menu button.
    pub menu_toggle: E,
    /// Mobile menu container.
    pub mobile_menu: E,
    /// Element carrying the theme classes.
    pub theme_target: E,
    /// Theme switch buttons.
    pub theme_buttons: Vec<E>,
    /// Service form, when the page has one.
    pub service_form: Option<ServiceForm<E>>,
    /// Filter buttons paired with their category.
    pub service_filters: Vec<(E, String)>,
    /// Dropdown, when the page has one.
    pub dropdown: Option<Dropdown<E>>,
    /// Delete-confirmation modal, when the page has one.
    pub delete_modal: Option<E>,
}

/// Owns the page, the configuration, and the widget state.
pub struct UiController<P: Page> {
    page: P,
    config: PageConfig,
    widgets: BoundWidgets<P::Element>,
    state: UiState,
}

impl<P: Page> UiController<P> {
    /// Resolve the widgets on `page` and seed state from its markup.
    ///
    /// The custom-service field is rendered immediately from the select's
    /// current value.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the menu, theme target, a theme
    /// button, or (with a service select present) the custom field container is
    /// missing; [`UiError::NotAFormControl`] when the service select has no value.
    pub fn bind(page: P, config: PageConfig) -> Result<Self> {
        let ids = &config.elements;
        let menu_toggle = page.require(&ids.menu_toggle)?;
        let mobile_menu = page.require(&ids.mobile_menu)?;
        let theme_target = page.require(&ids.theme_target)?;
        let theme_buttons = ids
            .theme_buttons
            .iter()
            .map(|id| page.require(id))
            .collect::<Result<Vec<_>>>()?;

        let service_form = match page.element_by_id(&ids.service_type) {
            Some(select) => Some(ServiceForm {
                select,
                container: page.require(&ids.custom_service_container)?,
            }),
            None => {
                debug!(id = %ids.service_type, "no service form on page");
                None
            }
        };

        let filter_attribute = &config.classes.service_filter_attribute;
        let service_filters = page
            .elements_with_attribute(filter_attribute)
            .into_iter()
            .map(|button| {
                let category = page.attribute(&button, filter_attribute).unwrap_or_default();
                (button, category)
            })
            .collect::<Vec<_>>();

        let dropdown = match (
            page.element_by_id(&ids.dropdown_button),
            page.element_by_id(&ids.dropdown_menu),
        ) {
            (Some(button), Some(menu)) => Some(Dropdown {
                button,
                menu,
                close: page.element_by_id(&ids.dropdown_close),
            }),
            (Some(_), None) => {
                warn!(id = %ids.dropdown_menu, "dropdown button without a panel; not bound");
                None
            }
            _ => None,
        };
        let delete_modal = page.element_by_id(&ids.delete_modal);

        let hidden = &config.classes.hidden;
        let mut state = UiState {
            mobile_menu: observe_visibility(&page, &mobile_menu, hidden),
            theme: ThemeMode::from_dark_marker(
                page.has_class(&theme_target, config.classes.theme.dark_marker()),
            ),
            ..UiState::default()
        };
        if let Some(menu) = dropdown.as_ref().map(|dropdown| &dropdown.menu) {
            state.observe_dropdown(&ids.dropdown_menu, observe_visibility(&page, menu, hidden));
        }
        if let Some(modal) = &delete_modal {
            state.delete_modal = observe_visibility(&page, modal, hidden);
        }

        let widgets = BoundWidgets {
            menu_toggle,
            mobile_menu,
            theme_target,
            theme_buttons,
            service_form,
            service_filters,
            dropdown,
            delete_modal,
        };
        let mut controller = Self {
            page,
            config,
            widgets,
            state,
        };
        if controller.widgets.service_form.is_some() {
            controller.update_custom_service_field()?;
        }

        info!(
            theme = controller.state.theme.as_str(),
            mobile_menu = controller.state.mobile_menu.as_str(),
            service_form = controller.widgets.service_form.is_some(),
            service_filters = controller.widgets.service_filters.len(),
            dropdown = controller.widgets.dropdown.is_some(),
            delete_modal = controller.widgets.delete_modal.is_some(),
            "page controller bound"
        );
        Ok(controller)
    }

    /// Current widget state.
    #[must_use]
    pub const fn state(&self) -> &UiState {
        &self.state
    }

    /// Elements resolved at bind time.
    #[must_use]
    pub const fn widgets(&self) -> &BoundWidgets<P::Element> {
        &self.widgets
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Underlying page.
    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    /// Flip the mobile menu.
    ///
    /// # Errors
    ///
    /// Propagates render failures.
    pub fn toggle_mobile_menu(&mut self) -> Result<Visibility> {
        self.state.mobile_menu = observe_visibility(
            &self.page,
            &self.widgets.mobile_menu,
            &self.config.classes.hidden,
        );
        self.dispatch(UiAction::ToggleMobileMenu)?;
        Ok(self.state.mobile_menu)
    }

    /// Flip between the light and dark theme.
    ///
    /// # Errors
    ///
    /// Propagates render failures.
    pub fn toggle_theme(&mut self) -> Result<ThemeMode> {
        let marker = self.config.classes.theme.dark_marker();
        self.state.theme =
            ThemeMode::from_dark_marker(self.page.has_class(&self.widgets.theme_target, marker));
        self.dispatch(UiAction::ToggleTheme)?;
        Ok(self.state.theme)
    }

    /// Show the custom-service field iff the service select reads `"custom"`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the page has no service form and
    /// [`UiError::NotAFormControl`] when the select has no value.
    pub fn update_custom_service_field(&mut self) -> Result<Visibility> {
        let ids = &self.config.elements;
        let form = self
            .widgets
            .service_form
            .as_ref()
            .ok_or_else(|| UiError::missing(&ids.service_type))?;
        let value = self
            .page
            .form_value(&form.select)
            .ok_or_else(|| UiError::NotAFormControl {
                id: ids.service_type.clone(),
            })?;
        self.dispatch(UiAction::ServiceTypeChanged(value))?;
        Ok(self.state.custom_service_field)
    }

    /// Show service cards whose category equals `service_type`; all when empty.
    ///
    /// # Errors
    ///
    /// Propagates render failures.
    pub fn filter_services(&mut self, service_type: &str) -> Result<FilterSummary> {
        let filter = ServiceFilter::new(service_type);
        Ok(self
            .dispatch(UiAction::FilterServices(filter))?
            .unwrap_or_default())
    }

    /// Flip the dropdown panel with `dropdown_id`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when no element has `dropdown_id`.
    pub fn toggle_dropdown(&mut self, dropdown_id: &str) -> Result<Visibility> {
        let panel = self.page.require(dropdown_id)?;
        let observed = observe_visibility(&self.page, &panel, &self.config.classes.hidden);
        self.state.observe_dropdown(dropdown_id, observed);
        self.dispatch(UiAction::ToggleDropdown(dropdown_id.to_string()))?;
        Ok(self.state.dropdown(dropdown_id).unwrap_or_default())
    }

    /// Hide the configured dropdown panel.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the page has no dropdown panel.
    pub fn close_dropdown(&mut self) -> Result<()> {
        let id = self.config.elements.dropdown_menu.clone();
        self.page.require(&id)?;
        self.dispatch(UiAction::CloseDropdown(id))?;
        Ok(())
    }

    /// Reveal the delete-confirmation modal.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the page has no modal.
    pub fn show_delete_modal(&mut self) -> Result<()> {
        self.require_modal()?;
        self.dispatch(UiAction::ShowDeleteModal)?;
        Ok(())
    }

    /// Hide the delete-confirmation modal.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the page has no modal.
    pub fn hide_delete_modal(&mut self) -> Result<()> {
        self.require_modal()?;
        self.dispatch(UiAction::HideDeleteModal)?;
        Ok(())
    }

    fn require_modal(&self) -> Result<()> {
        if self.widgets.delete_modal.is_some() {
            Ok(())
        } else {
            Err(UiError::missing(&self.config.elements.delete_modal))
        }
    }

    /// Apply `action` and render it. A card filter also reports its counts.
    fn dispatch(&mut self, action: UiAction) -> Result<Option<FilterSummary>> {
        let projection = self.state.apply(action);
        self.render(&projection)
    }

    fn render(&self, projection: &Projection) -> Result<Option<FilterSummary>> {
        let page = &self.page;
        let classes = &self.config.classes;
        let hidden = &classes.hidden;
        match projection {
            Projection::MobileMenu(visibility) => {
                render_visibility(page, &self.widgets.mobile_menu, hidden, *visibility)?;
                debug!(visibility = visibility.as_str(), "mobile menu toggled");
            }
            Projection::Theme(mode) => {
                render_theme(page, &self.widgets.theme_target, &classes.theme, *mode)?;
                debug!(theme = mode.as_str(), "theme switched");
            }
            Projection::CustomServiceField(visibility) => {
                if let Some(form) = &self.widgets.service_form {
                    render_custom_service_field(
                        page,
                        &form.container,
                        &self.config.custom_service,
                        hidden,
                        *visibility,
                    )?;
                    debug!(visibility = visibility.as_str(), "custom service field updated");
                }
            }
            Projection::ServiceFilter(filter) => {
                let summary = render_service_filter(page, classes, filter)?;
                debug!(
                    category = filter.category().unwrap_or_default(),
                    shown = summary.shown,
                    hidden = summary.hidden,
                    "service cards filtered"
                );
                return Ok(Some(summary));
            }
            Projection::Dropdown { id, visibility } => {
                let panel = page.require(id)?;
                render_visibility(page, &panel, hidden, *visibility)?;
                debug!(id = %id, visibility = visibility.as_str(), "dropdown updated");
            }
            Projection::DeleteModal(visibility) => {
                if let Some(modal) = &self.widgets.delete_modal {
                    render_visibility(page, modal, hidden, *visibility)?;
                    debug!(visibility = visibility.as_str(), "delete modal updated");
                }
            }
        }
        Ok(None)
    }
}
