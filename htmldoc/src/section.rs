use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::Element;

/// A child of a [`Section`]: either an [`Element`] or a nested [`Section`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Node<'bump> {
    /// An element.
    Element(Element<'bump>),
    /// A nested section.
    Section(Section<'bump>),
}
impl<'bump> From<Element<'bump>> for Node<'bump> {
    fn from(element: Element<'bump>) -> Self {
        Node::Element(element)
    }
}
impl<'bump> From<Section<'bump>> for Node<'bump> {
    fn from(section: Section<'bump>) -> Self {
        Node::Section(section)
    }
}
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => fmt::Display::fmt(element, f),
            Node::Section(section) => fmt::Display::fmt(section, f),
        }
    }
}

/// A top-level wrapper tag such as `head` or `body`.
///
/// Sections never carry attributes or text, and are not indented themselves; their
/// children indent according to their own level.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section<'bump> {
    tag: BumpString<'bump>,
    children: BumpVec<'bump, Node<'bump>>,
}
impl<'bump> Section<'bump> {
    /// Create an empty section.
    pub fn new(bump: &'bump Bump, tag: &str) -> Self {
        Section {
            tag: BumpString::from_str_in(tag, bump),
            children: BumpVec::new_in(bump),
        }
    }

    /// Append a child element or section.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node<'bump>>) -> Self {
        self.append_child(child);
        self
    }

    /// Append a child element or section.
    pub fn append_child(&mut self, child: impl Into<Node<'bump>>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Get the tag name of the section.
    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }

    /// Get the children of the section.
    pub fn children(&self) -> &[Node<'bump>] {
        self.children.as_slice()
    }
}
impl fmt::Display for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag.as_str();
        writeln!(f, "<{tag}>")?;
        for child in self.children.iter() {
            write!(f, "{child}")?;
        }
        writeln!(f, "</{tag}>")
    }
}
