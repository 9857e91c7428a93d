//! HTML rendering of typed-answer comparisons.
//!
//! Every fragment is a plain concatenation of
//! `<span class="typeGood|typeBad|typeMissed">...</span>` elements with
//! escaped content. A span whose text opens with a combining mark gets a
//! leading `&nbsp;` so the mark has something to sit on.

use std::borrow::Cow;

use crate::align::align;
use crate::runs::build_runs;
use crate::segment::{is_combining_mark, segment};
use crate::types::EditKind;
use crate::verify::verify_script;

/// Class for text typed correctly.
pub const TYPE_GOOD: &str = "typeGood";
/// Class for text typed wrongly.
pub const TYPE_BAD: &str = "typeBad";
/// Class for text the learner left out.
pub const TYPE_MISSED: &str = "typeMissed";

const NBSP: &str = "&nbsp;";

/// Escape text for embedding in HTML element content.
///
/// Newlines, carriage returns and non-ASCII text are left alone. The
/// backslash is escaped because some web views swallow a lone `\`.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(needs_escape) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 16);
    escaped.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\\' => escaped.push_str("&#x5c;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

fn needs_escape(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\'' | '\\')
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    if text.chars().next().is_some_and(is_combining_mark) {
        out.push_str(NBSP);
    }
    out.push_str(&escape_html(text));
    out.push_str("</span>");
}

fn wrap(class: &str, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + class.len() + 22);
    push_span(&mut out, class, text);
    out
}

/// Wrap `text` as correctly typed.
pub fn wrap_good(text: &str) -> String {
    wrap(TYPE_GOOD, text)
}

/// Wrap `text` as wrongly typed.
pub fn wrap_bad(text: &str) -> String {
    wrap(TYPE_BAD, text)
}

/// Wrap `text` as missing from the typed answer.
pub fn wrap_missing(text: &str) -> String {
    wrap(TYPE_MISSED, text)
}

/// Compare the learner's `provided` text with the `correct` text.
///
/// Returns `(typed_html, correct_html)`: the typed answer with good and bad
/// parts marked, and the correct answer with good and missed parts marked.
///
/// # Panics
/// In debug builds, panics if the computed edit script does not rebuild
/// both inputs. That is an engine defect, not an input error.
pub fn diffed_html_strings(correct: &str, provided: &str) -> (String, String) {
    let typed_units = segment(provided);
    let correct_units = segment(correct);
    let ops = align(&typed_units, &correct_units);

    if cfg!(debug_assertions) {
        if let Err(err) = verify_script(&ops, provided, correct) {
            tracing::error!(error = %err, "edit script failed reconstruction");
            panic!("{err}");
        }
    }

    let runs = build_runs(&ops);
    let mut typed_html = String::with_capacity(provided.len() * 2);
    let mut correct_html = String::with_capacity(correct.len() * 2);

    for run in &runs {
        match run.kind {
            EditKind::Equal => {
                push_span(&mut typed_html, TYPE_GOOD, &run.text);
                push_span(&mut correct_html, TYPE_GOOD, &run.text);
            }
            EditKind::Delete => push_span(&mut typed_html, TYPE_BAD, &run.text),
            EditKind::Insert => push_span(&mut correct_html, TYPE_MISSED, &run.text),
        }
    }

    tracing::trace!(runs = runs.len(), "rendered answer comparison");
    (typed_html, correct_html)
}
