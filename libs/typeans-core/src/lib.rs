//! Typed-answer comparison for flashcard review.
//!
//! Provides:
//! - Grapheme segmentation that keeps combining marks with their base
//! - Shortest edit script alignment between typed and correct answers
//! - HTML rendering of the comparison (`typeGood`, `typeBad`, `typeMissed`)
//! - Answer clean-up and `[[type:Field]]` template filters

pub mod align;
pub mod answer;
pub mod error;
pub mod html;
pub mod runs;
pub mod segment;
pub mod types;
pub mod verify;

pub use align::align;
pub use answer::{
    clean_correct_answer, clean_typed_answer, cloze_content, type_answer_answer_filter,
    type_answer_question_filter,
};
pub use error::{DiffError, Result};
pub use html::{
    diffed_html_strings, escape_html, wrap_bad, wrap_good, wrap_missing, TYPE_BAD, TYPE_GOOD,
    TYPE_MISSED,
};
pub use runs::build_runs;
pub use segment::{is_combining_mark, segment};
pub use types::{EditKind, EditOp, GraphemeUnit, Run, Side, TypeAnswerField, TypeAnswerSettings};
pub use verify::verify_script;
