use std::collections::BTreeMap;

/// A single element of a parsed XML document.
///
/// Children keep document order, which matters for OPNsense list sections
/// such as `<tunnels>` where relative order is meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlNode {
    /// Element tag name.
    pub tag: String,
    /// XML attributes keyed by name (OPNsense uses these for item uuids).
    pub attributes: BTreeMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
    /// Optional text content.
    pub text: Option<String>,
}

impl XmlNode {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Return the first child with the provided tag.
    pub fn get_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Return all children with the provided tag, in document order.
    pub fn get_children(&self, tag: &str) -> Vec<&XmlNode> {
        self.children
            .iter()
            .filter(|child| child.tag == tag)
            .collect()
    }

    /// Return the text of the first child with the provided tag.
    ///
    /// `None` means the child is absent; a present but empty element
    /// yields `Some("")` via [`XmlNode::find_text_or`].
    pub fn find_text(&self, tag: &str) -> Option<&str> {
        self.get_child(tag).map(|child| child.text.as_deref().unwrap_or(""))
    }

    /// Return the text of the first child with the provided tag, or the
    /// given default when the child is absent.
    pub fn find_text_or<'a>(&'a self, tag: &str, default: &'a str) -> &'a str {
        self.find_text(tag).unwrap_or(default)
    }

    /// Walk a nested child path and return the terminal node if found.
    pub fn get_path(&self, path: &[&str]) -> Option<&XmlNode> {
        let mut current = self;
        for segment in path {
            current = current.get_child(segment)?;
        }
        Some(current)
    }
}
