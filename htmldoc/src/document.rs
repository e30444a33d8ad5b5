use std::fmt;

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{OutputError, OutputTarget, Section};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
/// The root of a document: an `<html>` wrapper around a list of [`Section`]s, along
/// with where the rendered document should go.
///
/// A document is finalized exactly once with [`Document::finalize`], which consumes it.
/// [`Document::build`] wraps construction and finalization into a single scope.
pub struct Document<'bump> {
    output: OutputTarget,
    children: BumpVec<'bump, Section<'bump>>,
}
impl<'bump> Document<'bump> {
    /// Create an empty document that will be written to `output` when finalized.
    ///
    /// `output` accepts an [`OutputTarget`], a path, or an `Option` of a path where
    /// `None` means standard output.
    pub fn new(bump: &'bump Bump, output: impl Into<OutputTarget>) -> Self {
        Document {
            output: output.into(),
            children: BumpVec::new_in(bump),
        }
    }

    /// Create a document, fill it with `build`, then finalize it.
    ///
    /// If `build` fails its error is returned and nothing is written.
    pub fn build<E>(
        bump: &'bump Bump,
        output: impl Into<OutputTarget>,
        build: impl FnOnce(&mut Document<'bump>) -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: From<OutputError>,
    {
        let mut document = Document::new(bump, output);
        build(&mut document)?;
        document.finalize()?;
        Ok(())
    }

    /// Append a section.
    #[must_use]
    pub fn with_child(mut self, section: Section<'bump>) -> Self {
        self.append_child(section);
        self
    }

    /// Append a section.
    pub fn append_child(&mut self, section: Section<'bump>) -> &mut Self {
        tracing::trace!(section = section.tag(), "appending section");
        self.children.push(section);
        self
    }

    /// Get where the document will be written.
    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    /// Get the sections of the document.
    pub fn children(&self) -> &[Section<'bump>] {
        self.children.as_slice()
    }

    /// Write the document to a writer.
    pub fn write(&self, writer: &mut impl std::io::Write) -> std::io::Result<()> {
        write!(writer, "{self}")
    }

    /// Write the document to a string.
    pub fn write_to_string(&self) -> String {
        self.to_string()
    }

    /// Render the document and write it to its [`OutputTarget`].
    pub fn finalize(self) -> Result<(), OutputError> {
        let html = self.write_to_string();
        tracing::debug!(
            output = ?self.output,
            sections = self.children.len(),
            bytes = html.len(),
            "finalizing document"
        );
        self.output.write_all(&html)
    }

    /// Dump the document tree as pretty-printed JSON.
    #[cfg(feature = "dump_tree")]
    pub fn dump_tree(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<html>")?;
        for section in self.children.iter() {
            write!(f, "{section}")?;
        }
        write!(f, "</html>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;

    #[test]
    fn empty_document() {
        let bump = Bump::new();
        let doc = Document::new(&bump, OutputTarget::Stdout);
        assert_eq!(doc.write_to_string(), "<html>\n</html>");
    }

    #[test]
    fn sections_render_in_order() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let doc = Document::new(&bump, None::<&str>)
            .with_child(b.head().with_child(b.title([]).with_text("t")))
            .with_child(b.body());
        assert_eq!(
            doc.write_to_string(),
            "<html>\n<head>\n\t<title>t</title>\n</head>\n<body>\n</body>\n</html>"
        );
    }

    #[test]
    fn write_matches_write_to_string() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let doc = b.document(None::<&str>).with_child(b.body().with_child(b.hr([])));
        let mut output = vec![];
        doc.write(&mut output).unwrap();
        assert_eq!(output, doc.write_to_string().into_bytes());
    }

    #[test]
    fn finalize_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let doc = b
            .document(path.as_path())
            .with_child(b.body().with_child(b.p([]).with_text("hi")));
        let expected = doc.write_to_string();
        doc.finalize().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn build_skips_finalize_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        let bump = Bump::new();
        let result: std::io::Result<()> = Document::build(&bump, path.as_path(), |doc| {
            doc.append_child(Section::new(&bump, "body"));
            Err(std::io::Error::other("construction failed"))
        });
        assert_eq!(result.unwrap_err().to_string(), "construction failed");
        assert!(!path.exists());
    }

    #[test]
    fn build_reports_output_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.html");
        let bump = Bump::new();
        let result: Result<(), OutputError> = Document::build(&bump, path.as_path(), |_| Ok(()));
        assert!(matches!(result, Err(OutputError::Create { .. })));
    }

    #[cfg(feature = "dump_tree")]
    #[test]
    fn dump_tree_includes_tags() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let doc = b.document(None::<&str>).with_child(b.body().with_child(b.h1([]).with_text("x")));
        let json = doc.dump_tree().unwrap();
        assert!(json.contains("\"h1\""));
        assert!(json.contains("\"body\""));
    }
}
