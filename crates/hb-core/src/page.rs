//! Arena-backed element tree standing in for the rendered page
//!
//! Widgets are described as plain elements carrying classes, `data-`
//! attributes and text. The tree is flat storage indexed by [`NodeId`],
//! so interaction code can hold on to ids across later mutations.

use std::collections::BTreeMap;
use std::fmt;

/// Index of a node inside its [`Page`].
pub type NodeId = usize;

/// A single element: tag, classes, attributes, optional text, children.
#[derive(Debug, Clone, Default)]
pub struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    hidden: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Add one or more classes (whitespace-separated, as in markup).
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        for class in classes.as_ref().split_whitespace() {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn get_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// First class starting with `prefix`, e.g. the `card-turn-<id>`
    /// linking class on a turn overlay.
    pub fn class_with_prefix(&self, prefix: &str) -> Option<&str> {
        self.classes
            .iter()
            .map(String::as_str)
            .find(|c| c.starts_with(prefix))
    }
}

/// Opening-tag shape of the element, for debugging dumps and test
/// failure output.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", self.classes.join(" "))?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{value}\"")?;
        }
        if self.hidden {
            f.write_str(" hidden")?;
        }
        f.write_str(">")?;
        if let Some(text) = &self.text {
            f.write_str(text)?;
        }
        Ok(())
    }
}

/// The whole page. Nodes are stored append-ordered, which doubles as
/// document order.
#[derive(Debug, Clone, Default)]
pub struct Page {
    nodes: Vec<Node>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` under `parent` (or at the top level) and return its id.
    pub fn append(&mut self, parent: Option<NodeId>, mut node: Node) -> NodeId {
        let id = self.nodes.len();
        node.parent = parent;
        self.nodes.push(node);
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Ids of all nodes carrying `class`, in document order.
    pub fn ids_with_class(&self, class: &str) -> Vec<NodeId> {
        (0..self.nodes.len())
            .filter(|&id| self.nodes[id].has_class(class))
            .collect()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id].has_class(class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if !self.nodes[id].has_class(class) {
            self.nodes[id].classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.nodes[id].classes.retain(|c| c != class);
    }

    pub fn show(&mut self, id: NodeId) {
        self.nodes[id].hidden = false;
    }

    pub fn hide(&mut self, id: NodeId) {
        self.nodes[id].hidden = true;
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        !self.nodes[id].hidden
    }

    fn fmt_subtree(&self, id: NodeId, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.nodes[id], indent = depth * 2)?;
        for &child in &self.nodes[id].children {
            self.fmt_subtree(child, depth + 1, f)?;
        }
        Ok(())
    }
}

/// Indented outline of the whole tree, for debugging dumps.
impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in 0..self.nodes.len() {
            if self.nodes[id].parent.is_none() {
                self.fmt_subtree(id, 0, f)?;
            }
        }
        Ok(())
    }
}
