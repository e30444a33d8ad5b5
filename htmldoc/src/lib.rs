#![deny(missing_docs)]
//! A crate for building small HTML documents as a tree and writing them out as
//! tab-indented HTML.
//!
//! [Element]s are grouped into [Section]s (such as `head` and `body`), which are placed
//! in a [Document]. The document renders the `<html>` wrapper and, when finalized,
//! writes itself to a file or to standard output (see [OutputTarget]).
//!
//! All allocations are done through a bump allocator ([bumpalo::Bump]) which must be passed
//! to all node-creating functions. Attribute values and text are written verbatim: nothing
//! is escaped.
//!
//! # Example
//!
//! ```
//! use htmldoc::{bumpalo::Bump, Document, Element, Section};
//!
//! let bump = Bump::new();
//! let mut head = Section::new(&bump, "head");
//! head.append_child(Element::new(&bump, "title").with_text("hello"));
//!
//! let mut body = Section::new(&bump, "body");
//! body.append_child(
//!     Element::new(&bump, "div")
//!         .with_classes(["container", "container-fluid"])
//!         .with_attr(("id", "lead"))
//!         .with_child(Element::new(&bump, "p").with_childlevel(1).with_text("another test")),
//! );
//!
//! let mut doc = Document::new(&bump, None::<&str>);
//! doc.append_child(head).append_child(body);
//! assert_eq!(
//!     doc.write_to_string(),
//!     "<html>\n<head>\n\t<title>hello</title>\n</head>\n<body>\n\
//!      \t<div class=\"container container-fluid\" id=\"lead\">\n\
//!      \t\t<p>another test</p>\n\
//!      \t</div>\n</body>\n</html>"
//! );
//! ```

pub mod builder;
pub mod util;

// Re-export bumpalo for convenience
pub use bumpalo;

mod attribute;
pub use attribute::{attr, Attribute, IntoAttribute};

mod document;
pub use document::Document;

mod element;
pub use element::Element;

mod output;
pub use output::{OutputError, OutputTarget};

mod section;
pub use section::{Node, Section};
