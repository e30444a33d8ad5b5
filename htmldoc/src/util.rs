//! Utility functions.

use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

/// Normalise an attribute key.
///
/// Underscores are replaced with hyphens, so that keys written as Rust-style
/// identifiers (`data_image`) produce hyphenated HTML attributes (`data-image`).
/// Every other character is kept as-is.
pub fn attribute_key<'bump>(bump: &'bump Bump, key: &str) -> BumpString<'bump> {
    let mut result = BumpString::with_capacity_in(key.len(), bump);
    for c in key.chars() {
        match c {
            '_' => result.push('-'),
            _ => result.push(c),
        }
    }
    result
}

/// Join class-name tokens into a single space-separated string.
pub fn join_classes<'bump, S: AsRef<str>>(
    bump: &'bump Bump,
    classes: impl IntoIterator<Item = S>,
) -> BumpString<'bump> {
    let mut result = BumpString::new_in(bump);
    for (idx, class) in classes.into_iter().enumerate() {
        if idx > 0 {
            result.push(' ');
        }
        result.push_str(class.as_ref());
    }
    result
}

/// Leading indentation for a line: one tab per level.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tabs(pub usize);
impl fmt::Display for Tabs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            f.write_str("\t")?;
        }
        Ok(())
    }
}
