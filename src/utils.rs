//! Utility functions for query and keyword processing.

/// Normalize a free-text query: trim the ends, fold to lowercase.
///
/// This is the engine's whole matching contract. Interior whitespace is
/// preserved, so a two-word query matches as one literal substring; there
/// is no Unicode folding or whitespace collapsing beyond `trim`.
pub fn normalize_query(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Split a comma-separated keyword string into trimmed, non-empty tokens.
pub fn keyword_tokens(keywords: &str) -> impl Iterator<Item = &str> {
    keywords
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Extract content words from a chat message for FAQ matching.
///
/// Messages split on whitespace and sentence punctuation, then on the
/// common Japanese particles (の を に は が で と か ら ま), so a phrase
/// like パスワードを忘れた decomposes into its content words. Words
/// shorter than two characters are dropped. When nothing survives, the
/// whole trimmed message stands in as a single token, so terse one-word
/// messages still match. Tokens come back lowercased; an empty message
/// yields no tokens.
pub fn message_tokens(message: &str) -> Vec<String> {
    let is_separator =
        |c: char| c.is_whitespace() || matches!(c, '、' | '。' | '！' | '？' | '?' | '!');
    let is_particle = |c: char| {
        matches!(
            c,
            'の' | 'を' | 'に' | 'は' | 'が' | 'で' | 'と' | 'か' | 'ら' | 'ま'
        )
    };

    let tokens: Vec<String> = message
        .split(is_separator)
        .flat_map(|chunk| chunk.split(is_particle))
        .filter(|word| word.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect();

    if !tokens.is_empty() {
        return tokens;
    }

    let whole = message.trim().to_lowercase();
    if whole.is_empty() {
        Vec::new()
    } else {
        vec![whole]
    }
}
