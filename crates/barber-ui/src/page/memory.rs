//! In-memory [`Page`] used to exercise the controller without a browser.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{Page, TextField};
use crate::error::{Result, UiError};

/// Handle to a node inside a [`MemoryPage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Description of a node to insert.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeSpec {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    value: Option<String>,
    text: Option<String>,
}

impl NodeSpec {
    /// Start a node with the given tag name.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Set the id.
    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Set the form value.
    #[must_use]
    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }
}

#[derive(Debug)]
struct Node {
    spec: NodeSpec,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Headless document: a tree of nodes rooted at `body`.
#[derive(Debug)]
pub struct MemoryPage {
    nodes: RefCell<Vec<Node>>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// Empty document containing only `body`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![Node {
                spec: NodeSpec::new("body"),
                parent: None,
                children: Vec::new(),
            }]),
        }
    }

    /// The `body` node.
    #[must_use]
    pub const fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a node under `parent` and return its handle.
    #[must_use]
    pub fn append(&self, parent: NodeId, spec: NodeSpec) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let index = nodes.len();
        nodes.push(Node {
            spec,
            parent: Some(parent.0),
            children: Vec::new(),
        });
        nodes[parent.0].children.push(index);
        NodeId(index)
    }

    /// Append a node under `parent` without keeping its handle.
    pub fn append_leaf(&self, parent: NodeId, spec: NodeSpec) {
        let _ = self.append(parent, spec);
    }

    /// Change a form control's value, as a user selection would.
    pub fn set_value(&self, node: NodeId, value: &str) {
        self.nodes.borrow_mut()[node.0].spec.value = Some(value.to_string());
    }

    /// Classes on `node` in insertion order.
    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].spec.classes.clone()
    }

    /// Child handles of `node`.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0]
            .children
            .iter()
            .copied()
            .map(NodeId)
            .collect()
    }

    /// Tag name of `node`.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].spec.tag.clone()
    }

    /// Text content of `node`.
    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<String> {
        self.nodes.borrow()[node.0].spec.text.clone()
    }

    /// Number of attached nodes carrying `id`.
    #[must_use]
    pub fn count_id(&self, id: &str) -> usize {
        self.attached()
            .into_iter()
            .filter(|index| self.nodes.borrow()[*index].spec.id.as_deref() == Some(id))
            .count()
    }

    fn is_attached(nodes: &[Node], mut index: usize) -> bool {
        loop {
            if index == 0 {
                return true;
            }
            match nodes[index].parent {
                Some(parent) => index = parent,
                None => return false,
            }
        }
    }

    fn attached(&self) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .filter(|index| Self::is_attached(&nodes, *index))
            .collect()
    }

    fn find(&self, predicate: impl Fn(&NodeSpec) -> bool) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        self.attached()
            .into_iter()
            .filter(|index| predicate(&nodes[*index].spec))
            .map(NodeId)
            .collect()
    }
}

fn check_class(operation: &'static str, class: &str) -> Result<()> {
    if class.is_empty() {
        return Err(UiError::Dom {
            operation,
            detail: "SyntaxError: empty token".to_string(),
        });
    }
    if class.chars().any(char::is_whitespace) {
        return Err(UiError::Dom {
            operation,
            detail: "InvalidCharacterError: token contains whitespace".to_string(),
        });
    }
    Ok(())
}

impl Page for MemoryPage {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find(|spec| spec.id.as_deref() == Some(id))
            .into_iter()
            .next()
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.find(|spec| spec.classes.iter().any(|c| c == class))
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.find(|spec| spec.attributes.contains_key(name))
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[element.0]
            .spec
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_class(&self, element: &NodeId, class: &str) -> Result<()> {
        check_class("classList.add", class)?;
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[element.0].spec.classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, element: &NodeId, class: &str) -> Result<()> {
        check_class("classList.remove", class)?;
        self.nodes.borrow_mut()[element.0]
            .spec
            .classes
            .retain(|c| c != class);
        Ok(())
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[element.0]
            .spec
            .attributes
            .get(name)
            .cloned()
    }

    fn form_value(&self, element: &NodeId) -> Option<String> {
        let nodes = self.nodes.borrow();
        let spec = &nodes[element.0].spec;
        matches!(spec.tag.as_str(), "select" | "input" | "textarea")
            .then(|| spec.value.clone().unwrap_or_default())
    }

    fn clear_children(&self, element: &NodeId) -> Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(&mut nodes[element.0].children);
        for child in children {
            nodes[child].parent = None;
        }
        Ok(())
    }

    fn append_text_field(&self, container: &NodeId, field: &TextField<'_>) -> Result<()> {
        let label = field
            .label_class
            .split_whitespace()
            .fold(NodeSpec::new("label"), NodeSpec::class)
            .attr("for", field.id)
            .text(field.label);
        let input = field
            .input_class
            .split_whitespace()
            .fold(NodeSpec::new("input"), NodeSpec::class)
            .id(field.id)
            .attr("type", "text")
            .attr("name", field.name)
            .value("");
        self.append_leaf(*container, label);
        self.append_leaf(*container, input);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_nodes_are_not_found() {
        let page = MemoryPage::new();
        let container = page.append(page.body(), NodeSpec::new("div").id("box"));
        let inner = page.append(container, NodeSpec::new("div").id("inner"));
        page.append_leaf(inner, NodeSpec::new("span").id("leaf").class("tag"));

        assert!(page.element_by_id("leaf").is_some());
        page.clear_children(&container).expect("clear");
        assert!(page.element_by_id("inner").is_none());
        assert!(page.element_by_id("leaf").is_none());
        assert!(page.elements_by_class("tag").is_empty());
        assert_eq!(page.count_id("box"), 1);
    }

    #[test]
    fn class_names_with_whitespace_are_rejected() {
        let page = MemoryPage::new();
        let node = page.append(page.body(), NodeSpec::new("div"));
        let err = page.add_class(&node, "two words").unwrap_err();
        assert!(matches!(err, UiError::Dom { operation: "classList.add", .. }));
        assert!(page.add_class(&node, "").is_err());
    }

    #[test]
    fn form_value_only_for_controls() {
        let page = MemoryPage::new();
        let select = page.append(page.body(), NodeSpec::new("SELECT").value("hair"));
        let div = page.append(page.body(), NodeSpec::new("div").value("ignored"));
        assert_eq!(page.form_value(&select).as_deref(), Some("hair"));
        assert_eq!(page.form_value(&div), None);
        page.set_value(select, "custom");
        assert_eq!(page.form_value(&select).as_deref(), Some("custom"));
    }

    #[test]
    fn set_class_is_noop_when_matching() {
        let page = MemoryPage::new();
        let node = page.append(page.body(), NodeSpec::new("div").class("hidden"));
        page.set_class(&node, "hidden", true).expect("set");
        assert_eq!(page.classes(node), ["hidden"]);
        page.set_class(&node, "hidden", false).expect("unset");
        assert!(page.classes(node).is_empty());
    }
}
