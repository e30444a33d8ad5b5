use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::util::Tabs;
use crate::{Attribute, IntoAttribute};

/// A single HTML tag with attributes, text, an indentation level and child elements.
///
/// Elements are built up front (tag, attributes, flags and level), then only ever
/// mutated by setting their text or appending children. Rendering happens through
/// [`fmt::Display`], which emits one or more tab-indented, newline-terminated lines:
///
/// - with children, `<tag attrs>` on its own line, then the text, then each child,
///   then `</tag>` on its own line; this wins over both `single` and `text`;
/// - without children and marked single, `<tag attrs/>`;
/// - otherwise `<tag>text</tag>`. Attributes are **not** rendered in this last form.
///   That is a known defect kept for output compatibility: a `<p id="x">` without
///   children renders as `<p>...</p>`.
///
/// Every line the element emits itself is prefixed with `childlevel + 1` tabs. Children
/// compute their own indentation from their own `childlevel`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element<'bump> {
    #[cfg_attr(feature = "serde", serde(skip))]
    bump: &'bump Bump,
    tag: BumpString<'bump>,
    text: BumpString<'bump>,
    attributes: BumpVec<'bump, Attribute<'bump>>,
    childlevel: usize,
    single: bool,
    children: BumpVec<'bump, Element<'bump>>,
}

impl<'bump> Element<'bump> {
    /// Create a paired element with no attributes, no text and a nesting level of 0.
    pub fn new(bump: &'bump Bump, tag: &str) -> Self {
        Element {
            bump,
            tag: BumpString::from_str_in(tag, bump),
            text: BumpString::new_in(bump),
            attributes: BumpVec::new_in(bump),
            childlevel: 0,
            single: false,
            children: BumpVec::new_in(bump),
        }
    }

    /// Mark the element as self-closing (`<tag/>`).
    #[must_use]
    pub fn with_single(mut self, single: bool) -> Self {
        self.single = single;
        self
    }

    /// Set the nesting level used to indent this element.
    #[must_use]
    pub fn with_childlevel(mut self, childlevel: usize) -> Self {
        self.childlevel = childlevel;
        self
    }

    /// Set the `class` attribute from a list of class-name tokens.
    ///
    /// The attribute takes its place in the attribute order at the point of this call,
    /// unless `class` was already set, in which case its value is replaced in place.
    #[must_use]
    pub fn with_classes<S: AsRef<str>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        let class = Attribute::class(self.bump, classes);
        self.set_attr(class);
        self
    }

    /// Add or replace an attribute.
    #[must_use]
    pub fn with_attr(mut self, attribute: impl IntoAttribute<'bump>) -> Self {
        self.set_attr(attribute);
        self
    }

    /// Add or replace several attributes, in order.
    #[must_use]
    pub fn with_attrs<A: IntoAttribute<'bump>>(
        mut self,
        attributes: impl IntoIterator<Item = A>,
    ) -> Self {
        for attribute in attributes {
            self.set_attr(attribute);
        }
        self
    }

    /// Set the text placed directly inside the tag.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element<'bump>) -> Self {
        self.append_child(child);
        self
    }

    /// Add an attribute, or replace the value of an existing attribute with the same key.
    ///
    /// A replaced attribute keeps its original position.
    pub fn set_attr(&mut self, attribute: impl IntoAttribute<'bump>) -> &mut Self {
        let attribute = attribute.into_attribute(self.bump);
        match self
            .attributes
            .iter_mut()
            .find(|existing| existing.key.as_str() == attribute.key.as_str())
        {
            Some(existing) => existing.value = attribute.value,
            None => self.attributes.push(attribute),
        }
        self
    }

    /// Replace the text placed directly inside the tag.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text.clear();
        self.text.push_str(text);
        self
    }

    /// Append a child element.
    pub fn append_child(&mut self, child: Element<'bump>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Get the tag name of the element.
    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }

    /// Get the text of the element.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Get the attributes of the element, in insertion order.
    pub fn attrs(&self) -> &[Attribute<'bump>] {
        self.attributes.as_slice()
    }

    /// Get the value of the attribute with the given key.
    ///
    /// Underscores in `key` are treated as hyphens, as they are when attributes are set.
    pub fn attr(&self, key: &str) -> Option<&str> {
        let key = crate::util::attribute_key(self.bump, key);
        self.attributes
            .iter()
            .find(|attribute| attribute.key.as_str() == key.as_str())
            .map(|attribute| attribute.value.as_str())
    }

    /// Get the nesting level of the element.
    pub fn childlevel(&self) -> usize {
        self.childlevel
    }

    /// Returns `true` if the element is marked as self-closing.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.single
    }

    /// Get the children of the element.
    pub fn children(&self) -> &[Element<'bump>] {
        self.children.as_slice()
    }

    fn write_attributes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attribute in self.attributes.iter() {
            write!(f, " {attribute}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tabs = Tabs(self.childlevel + 1);
        let tag = self.tag.as_str();

        if !self.children.is_empty() {
            write!(f, "{tabs}<{tag}")?;
            self.write_attributes(f)?;
            writeln!(f, ">")?;
            f.write_str(self.text.as_str())?;
            for child in self.children.iter() {
                write!(f, "{child}")?;
            }
            writeln!(f, "{tabs}</{tag}>")
        } else if self.single {
            write!(f, "{tabs}<{tag}")?;
            self.write_attributes(f)?;
            writeln!(f, "/>")
        } else {
            // Attributes are dropped in this form (see the type docs).
            writeln!(f, "{tabs}<{tag}>{}</{tag}>", self.text.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_drops_attributes() {
        let bump = Bump::new();
        let element = Element::new(&bump, "p")
            .with_attr(("id", "x"))
            .with_classes(["lead"])
            .with_text("hello");
        assert_eq!(element.to_string(), "\t<p>hello</p>\n");
        assert_eq!(element.attr("id"), Some("x"));
    }

    #[test]
    fn empty_leaf() {
        let bump = Bump::new();
        assert_eq!(Element::new(&bump, "div").to_string(), "\t<div></div>\n");
    }

    #[test]
    fn single_keeps_attributes() {
        let bump = Bump::new();
        let element = Element::new(&bump, "img")
            .with_single(true)
            .with_childlevel(1)
            .with_attrs([("src", "/icon.png"), ("data_image", "responsive")]);
        assert_eq!(
            element.to_string(),
            "\t\t<img src=\"/icon.png\" data-image=\"responsive\"/>\n"
        );
    }

    #[test]
    fn single_without_attributes() {
        let bump = Bump::new();
        let element = Element::new(&bump, "br").with_single(true);
        assert_eq!(element.to_string(), "\t<br/>\n");
    }

    #[test]
    fn children_force_paired_form() {
        let bump = Bump::new();
        let element = Element::new(&bump, "div")
            .with_single(true)
            .with_attr(("id", "lead"))
            .with_child(Element::new(&bump, "span").with_childlevel(1).with_text("x"));
        assert_eq!(
            element.to_string(),
            "\t<div id=\"lead\">\n\t\t<span>x</span>\n\t</div>\n"
        );
    }

    #[test]
    fn text_precedes_children_inline() {
        let bump = Bump::new();
        let mut element = Element::new(&bump, "div");
        element
            .set_text("intro")
            .append_child(Element::new(&bump, "b").with_childlevel(1).with_text("bold"));
        assert_eq!(
            element.to_string(),
            "\t<div>\nintro\t\t<b>bold</b>\n\t</div>\n"
        );
    }

    #[test]
    fn childlevel_sets_tab_count() {
        let bump = Bump::new();
        let element = Element::new(&bump, "ul")
            .with_childlevel(1)
            .with_child(Element::new(&bump, "li").with_childlevel(2).with_text("one"));
        assert_eq!(element.to_string(), "\t\t<ul>\n\t\t\t<li>one</li>\n\t\t</ul>\n");
    }

    #[test]
    fn attribute_order_is_insertion_order() {
        let bump = Bump::new();
        let element = Element::new(&bump, "meta")
            .with_single(true)
            .with_attr(("name", "viewport"))
            .with_attr(("content", "width=device-width"))
            .with_attr(("charset", "utf-8"));
        assert_eq!(
            element.to_string(),
            "\t<meta name=\"viewport\" content=\"width=device-width\" charset=\"utf-8\"/>\n"
        );
    }

    #[test]
    fn duplicate_key_keeps_last_value_in_first_position() {
        let bump = Bump::new();
        let element = Element::new(&bump, "input")
            .with_single(true)
            .with_attr(("type", "text"))
            .with_attr(("name", "q"))
            .with_attr(("type", "search"));
        assert_eq!(element.attrs().len(), 2);
        assert_eq!(element.to_string(), "\t<input type=\"search\" name=\"q\"/>\n");
    }

    #[test]
    fn underscored_and_hyphenated_keys_collide() {
        let bump = Bump::new();
        let element = Element::new(&bump, "img")
            .with_single(true)
            .with_attr(("data-image", "a"))
            .with_attr(("data_image", "b"));
        assert_eq!(element.attrs().len(), 1);
        assert_eq!(element.attr("data-image"), Some("b"));
    }

    #[test]
    fn classes_render_space_joined() {
        let bump = Bump::new();
        let element = Element::new(&bump, "hr")
            .with_single(true)
            .with_classes(["a", "b"]);
        assert_eq!(element.to_string(), "\t<hr class=\"a b\"/>\n");
    }

    #[test]
    fn set_text_replaces_previous_text() {
        let bump = Bump::new();
        let mut element = Element::new(&bump, "title");
        element.set_text("first").set_text("second");
        assert_eq!(element.text(), "second");
        assert_eq!(element.to_string(), "\t<title>second</title>\n");
    }

    #[test]
    fn rendering_is_repeatable() {
        let bump = Bump::new();
        let element = Element::new(&bump, "div")
            .with_classes(["container"])
            .with_child(Element::new(&bump, "p").with_childlevel(1).with_text("t"));
        assert_eq!(element.to_string(), element.to_string());
    }
}
