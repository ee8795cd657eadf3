// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interpretation of short user replies (SMS) without a language model.

use crate::models::PrivacySetting;

/// What a reply asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Pick one of the offered names (0-based).
    ChooseSuggestion(usize),
    Rename(String),
    SetPrivacy(PrivacySetting),
    Unknown,
}

const RENAME_PREFIXES: [&str; 5] = ["rename it to ", "rename to ", "call it ", "name it ", "title it "];

pub fn interpret_reply(text: &str) -> Reply {
    let text = text.trim();
    let lower = text.to_lowercase();

    if let Ok(choice) = text.trim_end_matches(['.', '!']).parse::<usize>() {
        return match choice {
            0 => Reply::Unknown,
            n => Reply::ChooseSuggestion(n - 1),
        };
    }

    // Prefixes are ASCII, so byte offsets in `lower` match `text`.
    for prefix in RENAME_PREFIXES {
        if lower.starts_with(prefix) && text.is_char_boundary(prefix.len()) {
            let name = text[prefix.len()..]
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .trim();
            if !name.is_empty() {
                return Reply::Rename(name.to_string());
            }
        }
    }

    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|w| !w.is_empty())
        .collect();
    let has = |word: &str| words.contains(&word);

    if has("followers") || has("followers_only") {
        Reply::SetPrivacy(PrivacySetting::FollowersOnly)
    } else if has("private") || words.windows(2).any(|pair| pair == ["only", "me"]) {
        Reply::SetPrivacy(PrivacySetting::Private)
    } else if has("public") || has("everyone") {
        Reply::SetPrivacy(PrivacySetting::Public)
    } else {
        Reply::Unknown
    }
}
