//! Browser [`Page`] over `web-sys`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::{Page, TextField};
use crate::error::{Result, UiError};

/// The live document of the current window.
#[derive(Clone, Debug)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    /// Bind to `window.document`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NoDocument`] outside a browsing context.
    pub fn from_window() -> Result<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(|document| Self { document })
            .ok_or(UiError::NoDocument)
    }

    /// Text content of the element with `id`, if present.
    #[must_use]
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.text_content())
    }
}

fn dom_error(operation: &'static str) -> impl FnOnce(JsValue) -> UiError {
    move |err| UiError::Dom {
        operation,
        detail: err
            .as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    }
}

impl Page for WebPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&format!("[{name}]")) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<()> {
        element
            .class_list()
            .add_1(class)
            .map_err(dom_error("classList.add"))
    }

    fn remove_class(&self, element: &Element, class: &str) -> Result<()> {
        element
            .class_list()
            .remove_1(class)
            .map_err(dom_error("classList.remove"))
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn form_value(&self, element: &Element) -> Option<String> {
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value)
    }

    fn clear_children(&self, element: &Element) -> Result<()> {
        element.set_text_content(None);
        Ok(())
    }

    fn append_text_field(&self, container: &Element, field: &TextField<'_>) -> Result<()> {
        let label = self
            .document
            .create_element("label")
            .map_err(dom_error("createElement"))?;
        label
            .set_attribute("for", field.id)
            .map_err(dom_error("setAttribute"))?;
        label.set_class_name(field.label_class);
        label.set_text_content(Some(field.label));

        let input = self
            .document
            .create_element("input")
            .map_err(dom_error("createElement"))?;
        input
            .set_attribute("type", "text")
            .map_err(dom_error("setAttribute"))?;
        input
            .set_attribute("name", field.name)
            .map_err(dom_error("setAttribute"))?;
        input.set_id(field.id);
        input.set_class_name(field.input_class);

        container
            .append_child(&label)
            .map_err(dom_error("appendChild"))?;
        container
            .append_child(&input)
            .map_err(dom_error("appendChild"))?;
        Ok(())
    }
}
