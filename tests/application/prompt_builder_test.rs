use docchat::application::services::{
    PDF_CONTEXT_CHAR_LIMIT, PDF_CONTEXT_LABEL, build_prompt, truncate_chars,
};

#[test]
fn given_no_document_when_building_prompt_then_returns_question_verbatim() {
    let prompt = build_prompt("  What is this?  ", None);

    assert_eq!(prompt, "  What is this?  ");
}

#[test]
fn given_document_when_building_prompt_then_prepends_label_and_context() {
    let prompt = build_prompt("What does it say?", Some("Hello, World!"));

    assert_eq!(
        prompt,
        "Context from PDF:\nHello, World!\n\nQuestion: What does it say?"
    );
}

#[test]
fn given_empty_document_text_when_building_prompt_then_returns_question_verbatim() {
    let prompt = build_prompt("Anything?", Some(""));

    assert_eq!(prompt, "Anything?");
}

#[test]
fn given_document_longer_than_cutoff_when_building_prompt_then_truncates_excerpt() {
    let text = format!("{}{}", "x".repeat(PDF_CONTEXT_CHAR_LIMIT), "TAIL");

    let prompt = build_prompt("Q", Some(&text));

    let expected = format!(
        "{PDF_CONTEXT_LABEL}{}\n\nQuestion: Q",
        "x".repeat(PDF_CONTEXT_CHAR_LIMIT)
    );
    assert_eq!(prompt, expected);
    assert!(!prompt.contains("TAIL"));
}

#[test]
fn given_multibyte_text_when_truncating_then_counts_characters_not_bytes() {
    let text = "ü".repeat(10);

    let truncated = truncate_chars(&text, 4);

    assert_eq!(truncated, "üüüü");
}

#[test]
fn given_text_shorter_than_limit_when_truncating_then_returns_whole_text() {
    assert_eq!(truncate_chars("abc", 15), "abc");
    assert_eq!(truncate_chars("", 15), "");
}
