use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where a finalized [`crate::Document`] is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OutputTarget {
    /// Print the document to standard output, followed by a newline.
    #[default]
    Stdout,
    /// Write the document to a file, creating it or truncating any existing contents.
    File(PathBuf),
}
impl OutputTarget {
    /// Get the destination path, if this target is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path),
        }
    }

    /// Write `contents` to this target.
    ///
    /// The file handle is released when this returns, whether or not the write succeeded.
    /// A failure part-way through may leave a truncated file behind.
    pub fn write_all(&self, contents: &str) -> Result<(), OutputError> {
        match self {
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|source| OutputError::Create {
                    path: path.clone(),
                    source,
                })?;
                let mut writer = BufWriter::new(file);
                // Flush explicitly: errors on drop are discarded.
                writer
                    .write_all(contents.as_bytes())
                    .and_then(|()| writer.flush())
                    .map_err(|source| OutputError::Write {
                        path: path.clone(),
                        source,
                    })
            }
            OutputTarget::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{contents}")
                    .and_then(|()| stdout.flush())
                    .map_err(OutputError::Stdout)
            }
        }
    }
}
impl From<PathBuf> for OutputTarget {
    fn from(path: PathBuf) -> Self {
        OutputTarget::File(path)
    }
}
impl From<&Path> for OutputTarget {
    fn from(path: &Path) -> Self {
        OutputTarget::File(path.to_path_buf())
    }
}
impl From<&str> for OutputTarget {
    fn from(path: &str) -> Self {
        OutputTarget::File(PathBuf::from(path))
    }
}
impl<P: Into<OutputTarget>> From<Option<P>> for OutputTarget {
    fn from(path: Option<P>) -> Self {
        path.map_or(OutputTarget::Stdout, Into::into)
    }
}

/// Error returned when a document could not be written to its [`OutputTarget`].
#[derive(Debug)]
pub enum OutputError {
    /// The destination file could not be opened for writing.
    Create {
        /// The destination path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// Writing to the destination file failed.
    Write {
        /// The destination path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// Writing to standard output failed.
    Stdout(io::Error),
    /// Any other IO error.
    Io(io::Error),
}
impl OutputError {
    /// Get the kind of the underlying IO error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            OutputError::Create { source, .. } | OutputError::Write { source, .. } => {
                source.kind()
            }
            OutputError::Stdout(err) | OutputError::Io(err) => err.kind(),
        }
    }
}
impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Create { path, source } => {
                write!(f, "Failed to open {} for writing: {source}", path.display())
            }
            OutputError::Write { path, source } => {
                write!(f, "Failed to write to {}: {source}", path.display())
            }
            OutputError::Stdout(err) => write!(f, "Failed to write to standard output: {err}"),
            OutputError::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}
impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Create { source, .. } | OutputError::Write { source, .. } => Some(source),
            OutputError::Stdout(err) | OutputError::Io(err) => Some(err),
        }
    }
}
impl From<io::Error> for OutputError {
    fn from(err: io::Error) -> Self {
        OutputError::Io(err)
    }
}
impl From<OutputError> for io::Error {
    fn from(err: OutputError) -> Self {
        io::Error::new(err.kind(), err)
    }
}
