//! Title-casing of cable subjects.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::acronyms::{special_word, ACRONYMS};

static SMALL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[0-9]+(?:th|st|rd|nd)|a|an|and|as|at|but|by|en|for|if|in|of|on|or|the|to|v\.?|via|vs\.?)$")
        .expect("Invalid small word pattern")
});

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9]+(?:th|st|rd|nd)$").expect("Invalid ordinal pattern"));

/// Acronyms, redaction runs and `(ABC)` codes, with optional surrounding
/// punctuation or a possessive ending.
static UPPER_WORD: LazyLock<Regex> = LazyLock::new(|| {
    let mut acronyms: Vec<&str> = ACRONYMS.to_vec();
    acronyms.sort_by_key(|a| std::cmp::Reverse(a.len()));
    let alternation = acronyms
        .iter()
        .map(|a| regex::escape(a))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?i)^(?:[[:punct:]]?(?:{alternation})|xx+|\([A-Z]{{2,4}}\):?)[[:punct:]]?(?:[,:;.\-]|['’][a-z]{{1,3}})?$"
    ))
    .expect("Invalid acronym pattern")
});

/// A word with a 1-3 letter fragment after an apostrophe (`GOL'S`, `We'Ll`).
static APOSTROPHE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\w+)('|’|,)([A-Z]{1,3}|,s)$").expect("Invalid apostrophe pattern")
});

/// Title-case a subject line.
///
/// `None` stays `None` and an empty subject stays empty.
pub fn titlefy(subject: Option<&str>) -> Option<String> {
    let subject = subject?;
    let mut words: Vec<String> = Vec::new();
    for (i, word) in subject.split_whitespace().enumerate() {
        let cased = if i > 0 && SMALL_WORD.is_match(word) {
            small_word(word, &words)
        } else {
            titlefy_word(word)
        };
        words.push(cased);
    }
    Some(words.join(" "))
}

fn small_word(word: &str, previous: &[String]) -> String {
    let after_break = previous
        .last()
        .and_then(|w| w.chars().last())
        .is_some_and(|c| c == ':' || c == '-');
    if after_break {
        return titlefy_word(word);
    }
    if word == "A" && previous.ends_with(&["Q".to_string(), "and".to_string()]) {
        return word.to_string();
    }
    word.to_lowercase()
}

fn titlefy_word(word: &str) -> String {
    if ORDINAL.is_match(word) {
        return word.to_lowercase();
    }
    if UPPER_WORD.is_match(word) {
        return clean_apostrophe(&word.to_uppercase());
    }
    match special_word(word) {
        Some(special) => clean_apostrophe(special),
        None => clean_apostrophe(&title_case(word)),
    }
}

/// Upper-case the first letter of every letter run, lower-case the rest.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut in_letters = false;
    for c in word.chars() {
        if in_letters {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_letters = c.is_alphabetic();
    }
    out
}

fn clean_apostrophe(word: &str) -> String {
    match APOSTROPHE.captures(word) {
        Some(caps) => {
            let mark = if &caps[2] == "," { "'" } else { &caps[2] };
            format!("{}{}{}", &caps[1], mark, caps[3].to_lowercase())
        }
        None => word.to_string(),
    }
}
