//! Property tests for the comparison engine.

use proptest::prelude::*;

use typeans_core::{
    align, build_runs, diffed_html_strings, segment, verify_script, wrap_good, EditKind,
};

const OPEN_TAGS: [&str; 3] = [
    r#"<span class="typeGood">"#,
    r#"<span class="typeBad">"#,
    r#"<span class="typeMissed">"#,
];

fn answer_text() -> impl Strategy<Value = String> {
    let alphabet = vec![
        'a', 'b', 'c', ' ', '<', '&', '"', '\'', '\\', '\n', '\u{300}', '\u{301}', '\u{3b1}',
        '\u{1001}', '\u{103a}', '\u{103b}', '\u{102d}', '\u{4e2d}',
    ];
    proptest::collection::vec(proptest::sample::select(alphabet), 0..16)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Content of every span in a fragment, in order.
fn span_contents(html: &str) -> Vec<String> {
    let mut contents = Vec::new();
    let mut rest = html;
    while !rest.is_empty() {
        let tag = OPEN_TAGS
            .iter()
            .find(|tag| rest.starts_with(**tag))
            .unwrap_or_else(|| panic!("unexpected markup at {rest:?}"));
        rest = &rest[tag.len()..];
        let end = rest.find("</span>").expect("unclosed span");
        contents.push(rest[..end].to_string());
        rest = &rest[end + "</span>".len()..];
    }
    contents
}

proptest! {
    #[test]
    fn script_reconstructs_both_inputs(typed in answer_text(), correct in answer_text()) {
        let ops = align(&segment(&typed), &segment(&correct));
        prop_assert!(verify_script(&ops, &typed, &correct).is_ok());
    }

    #[test]
    fn runs_never_repeat_kind(typed in answer_text(), correct in answer_text()) {
        let ops = align(&segment(&typed), &segment(&correct));
        let runs = build_runs(&ops);
        prop_assert!(runs.windows(2).all(|pair| pair[0].kind != pair[1].kind));
        prop_assert!(runs.iter().all(|run| !run.text.is_empty()));
    }

    #[test]
    fn identical_answers_are_one_good_span(text in answer_text()) {
        prop_assume!(!text.is_empty());
        let (typed, correct) = diffed_html_strings(&text, &text);
        prop_assert_eq!(&typed, &wrap_good(&text));
        prop_assert_eq!(&correct, &wrap_good(&text));
    }

    #[test]
    fn fragments_are_well_formed(typed in answer_text(), correct in answer_text()) {
        let (typed_html, correct_html) = diffed_html_strings(&correct, &typed);
        for html in [&typed_html, &correct_html] {
            for content in span_contents(html) {
                prop_assert!(!content.is_empty());
                prop_assert!(!content.contains(['<', '>', '"', '\'', '\\']));
            }
        }
    }

    #[test]
    fn typed_fragment_skips_missing(typed in answer_text(), correct in answer_text()) {
        let (typed_html, correct_html) = diffed_html_strings(&correct, &typed);
        prop_assert!(!typed_html.contains("typeMissed"));
        prop_assert!(!correct_html.contains("typeBad"));
    }

    #[test]
    fn equal_text_is_common_subsequence(typed in answer_text(), correct in answer_text()) {
        let ops = align(&segment(&typed), &segment(&correct));
        let equal_len: usize = ops
            .iter()
            .filter(|op| op.kind() == EditKind::Equal)
            .map(|op| op.unit().as_str().chars().count())
            .sum();
        prop_assert!(equal_len <= typed.chars().count().min(correct.chars().count()));
    }
}
