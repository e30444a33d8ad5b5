//! Implements a builder DSL for creating HTML documents through a series of methods.

use bumpalo::Bump;

use crate::{Attribute, Document, Element, IntoAttribute, OutputTarget, Section};

/// A builder for creating elements, sections and documents using a bump allocator.
///
/// # Example
///
/// ```
/// use htmldoc::{bumpalo::Bump, builder::Builder};
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let doc = b.document(None::<&str>).with_child(
///     b.body().with_child(
///         b.div([b.attr(("id", "lead"))])
///             .with_child(b.img([b.attr(("src", "/icon.png"))]).with_childlevel(1)),
///     ),
/// );
/// assert_eq!(
///     doc.write_to_string(),
///     "<html>\n<body>\n\t<div id=\"lead\">\n\t\t<img src=\"/icon.png\"/>\n\t</div>\n</body>\n</html>"
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Builder<'bump> {
    bump: &'bump Bump,
}
impl<'bump> Builder<'bump> {
    /// Create a new builder with the given bump allocator.
    pub fn new(bump: &'bump Bump) -> Self {
        Self { bump }
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Create an attribute from a value that implements [IntoAttribute].
    pub fn attr(&self, value: impl IntoAttribute<'bump>) -> Attribute<'bump> {
        value.into_attribute(self.bump)
    }

    /// Create a `class` attribute from a list of class-name tokens.
    pub fn class<S: AsRef<str>>(&self, classes: impl IntoIterator<Item = S>) -> Attribute<'bump> {
        Attribute::class(self.bump, classes)
    }

    /// Create an element from a name, attributes, and a boolean indicating whether the tag
    /// is self-closing.
    pub fn tag(
        &self,
        name: &str,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
        single: bool,
    ) -> Element<'bump> {
        Element::new(self.bump, name)
            .with_single(single)
            .with_attrs(attributes)
    }

    /// Create an empty section.
    pub fn section(&self, name: &str) -> Section<'bump> {
        Section::new(self.bump, name)
    }

    /// Create an empty document.
    ///
    /// This is a convenience wrapper around [`Document::new`].
    pub fn document(&self, output: impl Into<OutputTarget>) -> Document<'bump> {
        Document::new(self.bump, output)
    }
}

macro_rules! non_void_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create a paired element with the tag name `", stringify!($tag_ident), "` and a list of attributes.")]
                pub fn $tag_ident(
                    &self,
                    attributes: impl IntoIterator<Item = Attribute<'bump>>,
                ) -> Element<'bump> {
                    self.tag(stringify!($tag_ident), attributes, false)
                }
            )*
        }
        /// A list of all tags with a paired-element builder.
        pub const NON_VOID_TAGS: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
non_void_builders! {
    main, p, code, div, pre, header, footer, nav,
    ol, ul, li, strong, em, blockquote, article,
    aside, span, script, style, title, time, a, b, i, button, form, label,
    h1, h2, h3, h4, h5, h6, small, sup, sub, q, s,
    table, tr, td, th, tbody, thead, tfoot, colgroup, video
}

macro_rules! void_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create a self-closing element with the tag name `", stringify!($tag_ident), "` and a list of attributes.")]
                pub fn $tag_ident(
                    &self,
                    attributes: impl IntoIterator<Item = Attribute<'bump>>,
                ) -> Element<'bump> {
                    self.tag(stringify!($tag_ident), attributes, true)
                }
            )*
        }
        /// A list of all self-closing tags.
        pub const VOID_TAGS: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
void_builders! {
    area, base, br, col, embed, hr, input, link, meta,
    param, source, track, wbr, img
}

macro_rules! section_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create an empty `", stringify!($tag_ident), "` section.")]
                pub fn $tag_ident(&self) -> Section<'bump> {
                    self.section(stringify!($tag_ident))
                }
            )*
        }
        /// A list of all tags with a section builder.
        pub const SECTION_TAGS: &[&str] = &[$(stringify!($tag_ident)),*];
    };
}
section_builders! {
    head, body
}
