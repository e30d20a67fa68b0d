//! Ordered tag list behind a tag input field.
//!
//! Tags that fail [`TAG_PATTERN`] are kept and flagged rather than dropped so
//! the user can see and fix them. The field value is always the comma-joined
//! tag values in display order.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Accepted tag shape, matched case-insensitively. Shared with the JS widget.
pub const TAG_PATTERN: &str = r"^[a-zA-Z0-9.\-_\s\\/]{0,16}$";

pub const TAG_DELIMITER: char = ',';

static TAG_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| RegexBuilder::new(TAG_PATTERN).case_insensitive(true).build().ok());

/// Whether `value` matches [`TAG_PATTERN`].
pub fn is_valid_tag(value: &str) -> bool {
    TAG_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// One token, shaped like the widget's tag data (`{ "value": ... }`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub value: String,
}

impl Tag {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_tag(&self.value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    /// Split raw field input on commas; segments are trimmed, blanks dropped.
    pub fn parse(raw: &str) -> Self {
        let tags = raw
            .split(TAG_DELIMITER)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Tag::new)
            .collect();
        Self { tags }
    }

    pub fn from_tags(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags failing the pattern, in order.
    pub fn invalid(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(|t| !t.is_valid())
    }

    /// Move the tag at `from` so it ends up at index `to`, as a drag-drop does.
    ///
    /// Returns `false` (and leaves the list untouched) if either index is out
    /// of range.
    pub fn move_tag(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tags.len() || to >= self.tags.len() {
            return false;
        }
        let tag = self.tags.remove(from);
        self.tags.insert(to, tag);
        true
    }

    /// Field value: tag values joined by commas in display order.
    pub fn serialize(&self) -> String {
        self.tags
            .iter()
            .map(|t| t.value.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
