//! Page configuration: element ids, marker classes, and the custom-service field.
//!
//! # Design
//! - Every field has a default matching the site templates, so an absent
//!   configuration document is the common case.
//! - Validation rejects values the DOM would refuse at mutation time.

use serde::{Deserialize, Serialize};

use crate::core::theme::ThemePalette;
use crate::error::{Result, UiError};

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "barber-ui-config";
/// Default tracing filter for the browser console.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Full controller configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Element identifiers the controller binds to.
    pub elements: ElementIds,
    /// Marker classes and data attributes.
    pub classes: ClassNames,
    /// Custom-service text field rendered on demand.
    pub custom_service: CustomServiceField,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Element identifiers provided by the page templates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
    /// Button that opens/closes the mobile menu.
    pub menu_toggle: String,
    /// Mobile menu container.
    pub mobile_menu: String,
    /// Element carrying the theme classes.
    pub theme_target: String,
    /// Buttons that switch the theme (desktop and mobile variants).
    pub theme_buttons: Vec<String>,
    /// Service-type select in the service form.
    pub service_type: String,
    /// Container that receives the custom-service field.
    pub custom_service_container: String,
    /// Button that toggles the dropdown.
    pub dropdown_button: String,
    /// Dropdown panel.
    pub dropdown_menu: String,
    /// Button that closes the dropdown.
    pub dropdown_close: String,
    /// Delete-confirmation modal.
    pub delete_modal: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            menu_toggle: "menu-toggle".to_string(),
            mobile_menu: "mobile-menu".to_string(),
            theme_target: "switchTheme".to_string(),
            theme_buttons: vec![
                "buttonThemeDesktop".to_string(),
                "buttonThemeMobile".to_string(),
            ],
            service_type: "id_service_type".to_string(),
            custom_service_container: "custom-service-container".to_string(),
            dropdown_button: "dropdownButton".to_string(),
            dropdown_menu: "dropdownMenu".to_string(),
            dropdown_close: "closeDropdown".to_string(),
            delete_modal: "deleteModal".to_string(),
        }
    }
}

/// Marker classes and data attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassNames {
    /// Class that hides an element.
    pub hidden: String,
    /// Class tagging each service card.
    pub service_item: String,
    /// Attribute holding a card's category.
    pub service_type_attribute: String,
    /// Attribute marking a filter button and holding its category.
    pub service_filter_attribute: String,
    /// Theme class sets.
    pub theme: ThemePalette,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            hidden: "hidden".to_string(),
            service_item: "service-item".to_string(),
            service_type_attribute: "data-service-type".to_string(),
            service_filter_attribute: "data-service-filter".to_string(),
            theme: ThemePalette::default(),
        }
    }
}

/// Custom-service text field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomServiceField {
    /// Fixed id of the injected input.
    pub input_id: String,
    /// Form field name submitted with the input.
    pub input_name: String,
    /// Label text shown above the input.
    pub label: String,
    /// Classes applied to the input.
    pub input_class: String,
    /// Classes applied to the label.
    pub label_class: String,
}

impl Default for CustomServiceField {
    fn default() -> Self {
        Self {
            input_id: "id_custom_service".to_string(),
            input_name: "custom_service".to_string(),
            label: "Serviço personalizado".to_string(),
            input_class: "w-full rounded border px-3 py-2".to_string(),
            label_class: "block mb-1 font-semibold".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Tracing filter directive (e.g., `info`, `barber_ui=debug`).
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigParse`] for malformed JSON or unknown fields and
    /// [`UiError::InvalidConfig`] when validation fails.
    pub fn from_json(document: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(document).map_err(|source| UiError::ConfigParse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check ids and class names against what the DOM accepts.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let ids = &self.elements;
        for (field, value) in [
            ("elements.menu_toggle", &ids.menu_toggle),
            ("elements.mobile_menu", &ids.mobile_menu),
            ("elements.theme_target", &ids.theme_target),
            ("elements.service_type", &ids.service_type),
            (
                "elements.custom_service_container",
                &ids.custom_service_container,
            ),
            ("elements.dropdown_button", &ids.dropdown_button),
            ("elements.dropdown_menu", &ids.dropdown_menu),
            ("elements.dropdown_close", &ids.dropdown_close),
            ("elements.delete_modal", &ids.delete_modal),
            ("custom_service.input_id", &self.custom_service.input_id),
        ] {
            check_token(field, value)?;
        }
        if ids.theme_buttons.is_empty() {
            return Err(UiError::invalid("elements.theme_buttons", "must not be empty"));
        }
        for button in &ids.theme_buttons {
            check_token("elements.theme_buttons", button)?;
        }

        let classes = &self.classes;
        check_token("classes.hidden", &classes.hidden)?;
        check_token("classes.service_item", &classes.service_item)?;
        check_token(
            "classes.service_type_attribute",
            &classes.service_type_attribute,
        )?;
        check_token(
            "classes.service_filter_attribute",
            &classes.service_filter_attribute,
        )?;
        for class in classes.theme.dark.classes() {
            check_token("classes.theme.dark", class)?;
        }
        for class in classes.theme.light.classes() {
            check_token("classes.theme.light", class)?;
            if classes.theme.dark.classes().contains(&class) {
                return Err(UiError::invalid(
                    "classes.theme",
                    "light and dark classes must not overlap",
                ));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(UiError::invalid("logging.level", "must not be empty"));
        }
        Ok(())
    }
}

fn check_token(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(UiError::invalid(field, "must not be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(UiError::invalid(field, "must not contain whitespace"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_templates() {
        let config = PageConfig::default();
        assert_eq!(config.elements.menu_toggle, "menu-toggle");
        assert_eq!(
            config.elements.theme_buttons,
            ["buttonThemeDesktop", "buttonThemeMobile"]
        );
        assert_eq!(config.classes.hidden, "hidden");
        assert_eq!(config.custom_service.input_id, "id_custom_service");
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = PageConfig::from_json(
            r#"{"elements": {"delete_modal": "confirmDelete"}, "logging": {"level": "debug"}}"#,
        )
        .expect("valid config");
        assert_eq!(config.elements.delete_modal, "confirmDelete");
        assert_eq!(config.elements.mobile_menu, "mobile-menu");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PageConfig::from_json(r#"{"elements": {"sidebar": "x"}}"#).unwrap_err();
        assert!(matches!(err, UiError::ConfigParse { .. }));
    }

    #[test]
    fn whitespace_in_class_is_rejected() {
        let err = PageConfig::from_json(r#"{"classes": {"hidden": "is hidden"}}"#).unwrap_err();
        match err {
            UiError::InvalidConfig { field, reason } => {
                assert_eq!(field, "classes.hidden");
                assert_eq!(reason, "must not contain whitespace");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn overlapping_theme_classes_are_rejected() {
        let err = PageConfig::from_json(
            r#"{"classes": {"theme": {
                "dark": {"background": "bg-zinc-900", "text": "text-white"},
                "light": {"background": "bg-gray-100", "text": "text-white"}
            }}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, UiError::InvalidConfig { ref field, .. } if field == "classes.theme"));
    }

    #[test]
    fn empty_theme_button_list_is_rejected() {
        let err = PageConfig::from_json(r#"{"elements": {"theme_buttons": []}}"#).unwrap_err();
        assert!(
            matches!(err, UiError::InvalidConfig { ref field, .. } if field == "elements.theme_buttons")
        );
    }
}
