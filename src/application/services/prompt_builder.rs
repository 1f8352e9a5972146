/// Label placed before the document excerpt in every context-augmented prompt.
pub const PDF_CONTEXT_LABEL: &str = "Context from PDF:\n";

/// Maximum number of document characters embedded in a prompt.
pub const PDF_CONTEXT_CHAR_LIMIT: usize = 15_000;

/// Builds the text sent to the model for one question.
///
/// Without document text (or with an empty one) the question goes out verbatim.
/// Otherwise the prompt is the label, the first [`PDF_CONTEXT_CHAR_LIMIT`]
/// characters of the document, a blank line, then `Question: <question>`.
pub fn build_prompt(question: &str, document_text: Option<&str>) -> String {
    match document_text.filter(|text| !text.is_empty()) {
        Some(text) => format!(
            "{PDF_CONTEXT_LABEL}{}\n\nQuestion: {question}",
            truncate_chars(text, PDF_CONTEXT_CHAR_LIMIT)
        ),
        None => question.to_string(),
    }
}

/// Prefix of `text` holding at most `limit` characters, never splitting a code point.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
