//! Automatic FAQ answers for chat messages.
//!
//! The chat bot turns a free-form user message into FAQ candidates: the
//! message decomposes into content words (see
//! [`message_tokens`](crate::utils::message_tokens)), and an active entry
//! is a candidate when any word appears in its text or category. Candidates
//! come back most-viewed first, so the best answer is simply the head of
//! the list.
//!
//! This is deliberately looser than [`crate::search::search`]: a search
//! requires the whole query as one substring, while a chat message matches
//! on any single content word. A message like "パスワードを忘れた" finds
//! the password FAQ even though no entry contains the full sentence.

use tracing::debug;

use crate::types::{EntryText, FaqEntry, FaqIndex};
use crate::utils::message_tokens;

/// Active entries mentioned by any content word of `message`, most viewed
/// first. Ties keep entry order; an empty message matches nothing.
pub fn match_message<'a>(index: &'a FaqIndex, message: &str) -> Vec<&'a FaqEntry> {
    let tokens = message_tokens(message);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut matched: Vec<&FaqEntry> = index
        .iter_active()
        .filter(|(pos, _)| {
            let text = index.text(*pos);
            tokens.iter().any(|token| mentions(text, token))
        })
        .map(|(_, entry)| entry)
        .collect();

    matched.sort_by(|a, b| b.view_count.cmp(&a.view_count));

    debug!(
        tokens = tokens.len(),
        matched = matched.len(),
        "matched message against FAQ corpus"
    );
    matched
}

/// The single best entry for a message, if any matches.
///
/// "Best" is the most viewed candidate; its `answer` field is what the bot
/// replies with.
pub fn best_answer<'a>(index: &'a FaqIndex, message: &str) -> Option<&'a FaqEntry> {
    match_message(index, message).into_iter().next()
}

/// Token lookup across title, question, answer, keywords, and category.
fn mentions(text: &EntryText, token: &str) -> bool {
    text.searchable.contains(token) || text.category.contains(token)
}
