//! Core types for typed-answer comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A base character followed by any combining marks attached to it.
///
/// Units borrow from the text they were segmented from. A unit is never
/// empty; it may be "base-less" when the text starts with a combining mark
/// or when a replaced region has been split down to single scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GraphemeUnit<'a>(&'a str);

impl<'a> GraphemeUnit<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        debug_assert!(!text.is_empty());
        Self(text)
    }

    /// Text covered by this unit.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// The leading non-mark scalar, if there is one.
    pub fn base(&self) -> Option<char> {
        self.0
            .chars()
            .next()
            .filter(|&ch| !crate::segment::is_combining_mark(ch))
    }

    /// Whether the unit opens with a combining mark.
    pub fn is_base_less(&self) -> bool {
        self.base().is_none()
    }

    /// Split into one unit per scalar value.
    pub fn scalars(self) -> impl Iterator<Item = GraphemeUnit<'a>> {
        let text = self.0;
        text.char_indices()
            .map(move |(idx, ch)| GraphemeUnit(&text[idx..idx + ch.len_utf8()]))
    }
}

impl fmt::Display for GraphemeUnit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Kind of an edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// Present in both texts.
    Equal,
    /// Present only in the correct text (the learner left it out).
    Insert,
    /// Present only in the typed text (the learner typed something wrong).
    Delete,
}

/// A single-unit edit operation produced by [`crate::align`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum EditOp<'a> {
    Equal(GraphemeUnit<'a>),
    Insert(GraphemeUnit<'a>),
    Delete(GraphemeUnit<'a>),
}

impl<'a> EditOp<'a> {
    pub fn kind(&self) -> EditKind {
        match self {
            Self::Equal(_) => EditKind::Equal,
            Self::Insert(_) => EditKind::Insert,
            Self::Delete(_) => EditKind::Delete,
        }
    }

    pub fn unit(&self) -> GraphemeUnit<'a> {
        match *self {
            Self::Equal(unit) | Self::Insert(unit) | Self::Delete(unit) => unit,
        }
    }
}

/// Consecutive edit operations of the same kind, rendered as one span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub kind: EditKind,
    pub text: String,
}

/// Which of the two compared texts something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Typed,
    Correct,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typed => "typed",
            Self::Correct => "correct",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display settings for the type-answer box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeAnswerSettings {
    /// Show the typed answer and its comparison. When off, the prompt is
    /// rendered hidden and the correct answer is shown without markup.
    pub write_answers: bool,
}

impl Default for TypeAnswerSettings {
    fn default() -> Self {
        Self {
            write_answers: true,
        }
    }
}

/// Field referenced by a `[[type:...]]` marker in a card template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnswerField {
    pub name: String,
    /// `[[type:cloze:Name]]` compares against the active cloze deletion
    /// rather than the whole field.
    pub cloze: bool,
}
