use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

use crate::util::{attribute_key, join_classes};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
/// A key-value pair for an HTML attribute.
pub struct Attribute<'bump> {
    /// The key of the attribute, with underscores already replaced by hyphens.
    pub key: BumpString<'bump>,
    /// The value of the attribute.
    pub value: BumpString<'bump>,
}

impl<'bump> Attribute<'bump> {
    /// Create a new attribute.
    ///
    /// Underscores in `key` are converted to hyphens (see [`crate::util::attribute_key`]),
    /// and `value` is stringified through its [`fmt::Display`] implementation.
    pub fn new(bump: &'bump Bump, key: &str, value: impl fmt::Display) -> Self {
        Attribute {
            key: attribute_key(bump, key),
            value: bumpalo::format!(in bump, "{}", value),
        }
    }

    /// Create a `class` attribute from a list of class-name tokens, joined by spaces.
    pub fn class<S: AsRef<str>>(bump: &'bump Bump, classes: impl IntoIterator<Item = S>) -> Self {
        Attribute {
            key: BumpString::from_str_in("class", bump),
            value: join_classes(bump, classes),
        }
    }
}

impl fmt::Display for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.key.as_str(), self.value.as_str())
    }
}

/// Trait for types that can be converted into an Attribute with a bump allocator.
pub trait IntoAttribute<'bump> {
    /// Convert this value into an Attribute using the given bump allocator.
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump>;
}
impl<'bump> IntoAttribute<'bump> for Attribute<'bump> {
    fn into_attribute(self, _bump: &'bump Bump) -> Attribute<'bump> {
        self
    }
}
impl<'bump, K: AsRef<str>, V: fmt::Display> IntoAttribute<'bump> for (K, V) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0.as_ref(), self.1)
    }
}

/// Create an attribute from a value that implements [`IntoAttribute`].
pub fn attr<'bump>(bump: &'bump Bump, value: impl IntoAttribute<'bump>) -> Attribute<'bump> {
    value.into_attribute(bump)
}
