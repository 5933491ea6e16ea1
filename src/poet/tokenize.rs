//! Corpus and input tokenization

/// Word characters: ASCII letters, ASCII digits and underscore
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True if `token` is non-empty and made only of word characters
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_word_char)
}

/// Lower-case `text` and split it on runs of non-word characters
///
/// Empty pieces (leading or trailing separators) are discarded.
pub fn corpus_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split poem input on whitespace runs, keeping each token verbatim
pub fn input_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
