use alloc::string::String;

const WRAPPER_OPEN: &str = "<i>";
const WRAPPER_CLOSE: &str = "</i>";

/// Returns the inner text of an answer wrapped in a full `<i>…</i>` pair.
/// Anything else, including a dangling open tag, yields `None` and the
/// caller keeps the answer as-is.
pub fn strip_markup_wrapper(answer: &str) -> Option<&str> {
    answer.strip_prefix(WRAPPER_OPEN)?.strip_suffix(WRAPPER_CLOSE)
}

/// Uppercases the first letter of every whitespace-delimited run and
/// lowercases the rest, preserving the whitespace itself.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
