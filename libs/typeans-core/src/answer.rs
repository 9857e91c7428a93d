//! Type-answer card support: cleaning both answers before comparison and
//! filling the `[[type:Field]]` marker in rendered question and answer HTML.
//!
//! # Markers
//! ```text
//! [[type:Back]]         compare against the whole "Back" field
//! [[type:cloze:Text]]   compare against the active cloze of "Text"
//! ```

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};
use unicode_normalization::UnicodeNormalization;

use crate::html::{diffed_html_strings, escape_html, wrap_good, wrap_missing};
use crate::types::{TypeAnswerField, TypeAnswerSettings};

static TYPE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[type:(.+?)\]\]").expect("valid marker regex"));
static CLOZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{c(\d+)::(.+?)\}\}").expect("valid cloze regex"));
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid br regex"));
static SOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[sound:[^\[\]]*\]").expect("valid sound regex"));
static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img[^>]*?\ssrc=["']?([^"'>\s]+)["']?[^>]*>"#).expect("valid img regex")
});
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"));
static STYLE_OR_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style.*?>.*?</style>|<script.*?>.*?</script>").expect("valid block regex")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("valid tag regex"));
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#?\w+);").expect("valid entity regex"));

const PROMPT: &str = r#"<span id=typeans class="typePrompt">........</span>"#;
const PROMPT_OFF: &str = r#"<span id=typeans class="typePrompt typeOff">........</span>"#;
const CHECK_MARK: char = '\u{2714}';

impl TypeAnswerField {
    /// Find the first `[[type:...]]` marker in a question template.
    pub fn parse(template: &str) -> Option<Self> {
        let caps = TYPE_MARKER.captures(template)?;
        let reference = caps[1].trim();
        let (name, cloze) = match reference.strip_prefix("cloze:") {
            Some(name) => (name.trim(), true),
            None => (reference, false),
        };
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            cloze,
        })
    }
}

/// Clean up the text the learner typed: trim and NFC-normalize.
pub fn clean_typed_answer(answer: &str) -> String {
    answer.trim().nfc().collect()
}

/// Clean up a field's HTML so it can be compared with a typed answer.
///
/// Line breaks become `\n`, sound references are dropped, images are
/// replaced by their file name, all other markup is removed and entities are
/// decoded.
pub fn clean_correct_answer(answer: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        return String::new();
    }

    let text = LINE_BREAK.replace_all(answer, "\n");
    let text = SOUND.replace_all(&text, "");
    let text = IMAGE.replace_all(&text, " $1 ");
    let text = COMMENT.replace_all(&text, "");
    let text = STYLE_OR_SCRIPT.replace_all(&text, "");
    let text = TAG.replace_all(&text, "");
    let text = ENTITY.replace_all(&text, |caps: &Captures<'_>| match decode_entity(&caps[1]) {
        Some(ch) => ch.to_string(),
        None => caps[0].to_string(),
    });

    text.trim().nfc().collect()
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        // a typed answer never contains a no-break space
        "nbsp" => Some(' '),
        _ => None,
    }
}

/// Text of every cloze deletion with the given ordinal, joined by `", "`.
/// Repeated texts appear once, in first-seen order. Hints
/// (`{{c1::text::hint}}`) are dropped.
pub fn cloze_content(text: &str, ordinal: u32) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    let matches = CLOZE
        .captures_iter(text)
        .filter(|caps| caps[1].parse::<u32>().ok() == Some(ordinal))
        .filter_map(|caps| caps.get(2))
        .map(|content| content.as_str().split("::").next().unwrap_or_default());
    for part in matches {
        if !parts.contains(&part) {
            parts.push(part);
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn replace_marker(text: &str, replacement: &str) -> String {
    TYPE_MARKER
        .replacen(text, 1, NoExpand(replacement))
        .into_owned()
}

/// Replace the type-answer marker in the question with the input prompt,
/// or with `warning` when the referenced field could not be resolved.
pub fn type_answer_question_filter(
    question: &str,
    warning: Option<&str>,
    settings: &TypeAnswerSettings,
) -> String {
    let replacement = match warning {
        Some(warning) => warning,
        None if settings.write_answers => PROMPT,
        None => PROMPT_OFF,
    };
    replace_marker(question, replacement)
}

/// Replace the type-answer marker in the answer with the comparison between
/// what was `provided` and the `correct` text. Both should already be cleaned.
pub fn type_answer_answer_filter(
    answer: &str,
    provided: &str,
    correct: &str,
    settings: &TypeAnswerSettings,
) -> String {
    if !TYPE_MARKER.is_match(answer) {
        return answer.to_string();
    }

    let mut html = String::from("<div");
    if !settings.write_answers {
        html.push_str(r#" class="typeOff""#);
    }
    html.push_str("><code id=typeans>");

    if provided.is_empty() {
        tracing::debug!("no answer typed");
        if settings.write_answers {
            html.push_str(&wrap_missing(correct));
        } else {
            html.push_str(&escape_html(correct));
        }
    } else if provided == correct {
        tracing::debug!("typed answer matches");
        html.push_str(&wrap_good(correct));
        html.push(CHECK_MARK);
    } else {
        tracing::debug!(
            provided_len = provided.len(),
            correct_len = correct.len(),
            "typed answer differs"
        );
        let (typed_html, correct_html) = diffed_html_strings(correct, provided);
        html.push_str(&typed_html);
        html.push_str("<br>&darr;<br>");
        html.push_str(&correct_html);
    }

    html.push_str("</code></div>");
    replace_marker(answer, &html)
}
