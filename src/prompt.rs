//! Prompt construction: embeds (possibly truncated) document content and the
//! ordered question list into a single completion prompt.

use tracing::debug;

/// Builds the prompt for one document.
///
/// If the text has more than `max_length` characters, exactly the first
/// `max_length` characters are embedded. Truncation is a silent,
/// deterministic policy, not an error: long-form documents are the common
/// case. The questions are embedded as a numbered list and the model is
/// instructed to answer in the same order, so the answers map back to the
/// questions positionally.
pub fn build_prompt(text: &str, max_length: usize, questions: &[String]) -> String {
    let content = truncate_chars(text, max_length);
    if content.len() < text.len() {
        debug!(
            limit = max_length,
            original_chars = text.chars().count(),
            "Truncated document content for prompt"
        );
    }

    let mut prompt = String::with_capacity(content.len() + 256);
    prompt.push_str("Consider the following document:\n\n---\n");
    prompt.push_str(content);
    prompt.push_str("\n---\n\n");
    prompt.push_str(
        "Answer each of the following questions about the document. \
         Reply with a numbered list containing exactly one answer per question, \
         in the same order as the questions:\n\n",
    );
    for (i, question) in questions.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, question));
    }
    prompt
}

/// Returns the prefix of `text` holding at most `max_chars` characters,
/// never splitting a multibyte character.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &text[..byte_offset],
        None => text,
    }
}
