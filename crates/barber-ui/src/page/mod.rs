//! Page abstraction the controller reads from and renders into.
//!
//! # Design
//! - The trait covers only the DOM operations the widgets need.
//! - [`MemoryPage`] backs native tests; the browser implementation lives in
//!   `web` and is compiled for wasm32 only.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{MemoryPage, NodeId, NodeSpec};

use crate::error::{Result, UiError};

/// Labeled text input appended to a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextField<'a> {
    /// Input id, also used as the label's `for` target.
    pub id: &'a str,
    /// Form field name.
    pub name: &'a str,
    /// Label text.
    pub label: &'a str,
    /// Input classes.
    pub input_class: &'a str,
    /// Label classes.
    pub label_class: &'a str,
}

/// Minimal DOM surface used by the renderer.
pub trait Page {
    /// Handle to one element.
    type Element: Clone;

    /// Look up an attached element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Attached elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    /// Attached elements carrying attribute `name`, in document order.
    fn elements_with_attribute(&self, name: &str) -> Vec<Self::Element>;

    /// Whether `element` carries `class`.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add `class` to `element`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the host rejects the class name.
    fn add_class(&self, element: &Self::Element, class: &str) -> Result<()>;

    /// Remove `class` from `element`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the host rejects the class name.
    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<()>;

    /// Attribute value, `None` when absent.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Current value of a form control, `None` for non-controls.
    fn form_value(&self, element: &Self::Element) -> Option<String>;

    /// Remove every child of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when a child cannot be detached.
    fn clear_children(&self, element: &Self::Element) -> Result<()>;

    /// Append a label and text input to `container`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the nodes cannot be created or attached.
    fn append_text_field(&self, container: &Self::Element, field: &TextField<'_>) -> Result<()>;

    /// Look up an element that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when no element has `id`.
    fn require(&self, id: &str) -> Result<Self::Element> {
        self.element_by_id(id).ok_or_else(|| UiError::missing(id))
    }

    /// Add or remove `class` so its presence equals `present`. No-op when already so.
    ///
    /// # Errors
    ///
    /// Propagates [`Page::add_class`]/[`Page::remove_class`] failures.
    fn set_class(&self, element: &Self::Element, class: &str, present: bool) -> Result<()> {
        match (self.has_class(element, class), present) {
            (false, true) => self.add_class(element, class),
            (true, false) => self.remove_class(element, class),
            _ => Ok(()),
        }
    }
}

impl<T: Page + ?Sized> Page for &T {
    type Element = T::Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        (**self).element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Self::Element> {
        (**self).elements_by_class(class)
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<Self::Element> {
        (**self).elements_with_attribute(name)
    }

    fn has_class(&self, element: &Self::Element, class: &str) -> bool {
        (**self).has_class(element, class)
    }

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<()> {
        (**self).add_class(element, class)
    }

    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<()> {
        (**self).remove_class(element, class)
    }

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String> {
        (**self).attribute(element, name)
    }

    fn form_value(&self, element: &Self::Element) -> Option<String> {
        (**self).form_value(element)
    }

    fn clear_children(&self, element: &Self::Element) -> Result<()> {
        (**self).clear_children(element)
    }

    fn append_text_field(&self, container: &Self::Element, field: &TextField<'_>) -> Result<()> {
        (**self).append_text_field(container, field)
    }
}
