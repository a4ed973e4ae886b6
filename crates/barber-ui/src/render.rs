//! Projection of widget state onto a [`Page`].
//!
//! Each function leaves the page untouched when it already shows the target state.

use crate::config::{ClassNames, CustomServiceField};
use crate::core::services::{FilterSummary, ServiceFilter};
use crate::core::theme::{ThemeMode, ThemePalette};
use crate::core::visibility::Visibility;
use crate::error::Result;
use crate::page::{Page, TextField};

/// Read a widget's visibility from its hidden marker.
#[must_use]
pub fn observe_visibility<P: Page>(page: &P, element: &P::Element, hidden: &str) -> Visibility {
    Visibility::from_hidden_marker(page.has_class(element, hidden))
}

/// Show or hide `element` through the hidden marker.
///
/// # Errors
///
/// Propagates class mutation failures.
pub fn render_visibility<P: Page>(
    page: &P,
    element: &P::Element,
    hidden: &str,
    visibility: Visibility,
) -> Result<()> {
    page.set_class(element, hidden, visibility.hidden_marker())
}

/// Swap the theme classes on `target` to those of `mode`.
///
/// # Errors
///
/// Propagates class mutation failures.
pub fn render_theme<P: Page>(
    page: &P,
    target: &P::Element,
    palette: &ThemePalette,
    mode: ThemeMode,
) -> Result<()> {
    for class in palette.opposite_of(mode).classes() {
        page.set_class(target, class, false)?;
    }
    for class in palette.for_mode(mode).classes() {
        page.set_class(target, class, true)?;
    }
    Ok(())
}

/// Insert or remove the custom-service field inside `container`.
///
/// A visible field is only inserted when no element with its id exists, so
/// repeated calls never produce a duplicate input.
///
/// # Errors
///
/// Propagates node creation and class mutation failures.
pub fn render_custom_service_field<P: Page>(
    page: &P,
    container: &P::Element,
    field: &CustomServiceField,
    hidden: &str,
    visibility: Visibility,
) -> Result<()> {
    match visibility {
        Visibility::Visible => {
            if page.element_by_id(&field.input_id).is_none() {
                page.clear_children(container)?;
                page.append_text_field(
                    container,
                    &TextField {
                        id: &field.input_id,
                        name: &field.input_name,
                        label: &field.label,
                        input_class: &field.input_class,
                        label_class: &field.label_class,
                    },
                )?;
            }
        }
        Visibility::Hidden => page.clear_children(container)?,
    }
    render_visibility(page, container, hidden, visibility)
}

/// Show the service cards matching `filter` and hide the rest.
///
/// # Errors
///
/// Propagates class mutation failures.
pub fn render_service_filter<P: Page>(
    page: &P,
    classes: &ClassNames,
    filter: &ServiceFilter,
) -> Result<FilterSummary> {
    let mut summary = FilterSummary::default();
    for item in page.elements_by_class(&classes.service_item) {
        let category = page.attribute(&item, &classes.service_type_attribute);
        let visibility = filter.visibility_for(category.as_deref());
        render_visibility(page, &item, &classes.hidden, visibility)?;
        summary.record(visibility);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{MemoryPage, NodeSpec};

    #[test]
    fn theme_render_replaces_both_classes() {
        let page = MemoryPage::new();
        let target = page.append(
            page.body(),
            NodeSpec::new("body")
                .class("min-h-screen")
                .class("bg-gray-100")
                .class("text-black"),
        );
        let palette = ThemePalette::default();

        render_theme(&page, &target, &palette, ThemeMode::Dark).expect("render");
        assert_eq!(
            page.classes(target),
            ["min-h-screen", "bg-zinc-900", "text-white"]
        );

        render_theme(&page, &target, &palette, ThemeMode::Light).expect("render");
        assert_eq!(
            page.classes(target),
            ["min-h-screen", "bg-gray-100", "text-black"]
        );
    }

    #[test]
    fn hidden_field_clears_container() {
        let page = MemoryPage::new();
        let container = page.append(page.body(), NodeSpec::new("div"));
        page.append_leaf(container, NodeSpec::new("p").text("stale"));
        let field = CustomServiceField::default();

        render_custom_service_field(&page, &container, &field, "hidden", Visibility::Hidden)
            .expect("render");
        assert!(page.children(container).is_empty());
        assert_eq!(page.classes(container), ["hidden"]);
    }

    #[test]
    fn visible_field_is_labeled() {
        let page = MemoryPage::new();
        let container = page.append(page.body(), NodeSpec::new("div").class("hidden"));
        let field = CustomServiceField::default();

        render_custom_service_field(&page, &container, &field, "hidden", Visibility::Visible)
            .expect("render");
        let children = page.children(container);
        assert_eq!(children.len(), 2);
        assert_eq!(page.tag(children[0]), "label");
        assert_eq!(page.text(children[0]).as_deref(), Some(field.label.as_str()));
        assert_eq!(
            page.attribute(&children[0], "for").as_deref(),
            Some("id_custom_service")
        );
        assert_eq!(page.tag(children[1]), "input");
        assert_eq!(page.count_id("id_custom_service"), 1);
        assert!(page.classes(container).is_empty());
    }

    #[test]
    fn items_without_category_only_show_unfiltered() {
        let page = MemoryPage::new();
        let bare = page.append(page.body(), NodeSpec::new("div").class("service-item"));
        let classes = ClassNames::default();

        let summary =
            render_service_filter(&page, &classes, &ServiceFilter::new("hair")).expect("filter");
        assert_eq!(summary, FilterSummary { shown: 0, hidden: 1 });
        assert!(page.has_class(&bare, "hidden"));

        let summary =
            render_service_filter(&page, &classes, &ServiceFilter::new("")).expect("filter");
        assert_eq!(summary, FilterSummary { shown: 1, hidden: 0 });
        assert!(!page.has_class(&bare, "hidden"));
    }
}
