//! TAGS line extraction and canonicalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::vocabulary::{
    corrected_tag, is_four_letter_code, is_org_tag, is_subject_tag, tag_phrase, MAX_PHRASE_WORDS,
};
use crate::models::TagKind;

static TAGS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bTAGS?\b\s*[:;,]?|\b(?:TAS|TAGES|AGS|TABS|TGS)\s*:")
        .expect("Invalid TAGS label pattern")
});

/// Section labels that end the TAGS text.
static TAGS_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bSUBJ(?:ECT)?\s*:|\bE\.\s?O\.|\bREF(?:S|TELS?)?\s*:|\bCLASSIFIED\s+BY\b|\n[ \t]*\n")
        .expect("Invalid TAGS end pattern")
});

/// Page header of a continuation page. Vatican headers drag the `VT` of the
/// repeated TAGS line along (`241033Z VTPREL`).
static PAGE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:(?:UNCLASSIFIED|CONFIDENTIAL|SECRET)\s+)?PAGE\s+\d+\s+[A-Z]+\s+\d+(?:\s+\d+\s+OF\s+\d+)?\s+\d{6}Z(?:\s+VT)?",
    )
    .expect("Invalid page header pattern")
});

/// Extract the tags of a cable header.
///
/// With `canonicalize` off the split tokens are returned as found
/// (uppercased); otherwise run-together codes are split, multi-word and
/// person tags rebuilt, typos corrected and duplicates dropped.
pub fn parse_tags(header: &str, canonicalize: bool) -> Vec<String> {
    let Some(span) = tags_span(header) else {
        return Vec::new();
    };
    let chunks = split_tokens(&span);
    if !canonicalize {
        return chunks.into_iter().flatten().collect();
    }

    let mut tags: Vec<String> = Vec::new();
    for words in &chunks {
        canonical_chunk(words, &mut tags);
    }
    tracing::trace!(count = tags.len(), "Parsed TAGS line");
    tags
}

/// Classify a canonical tag.
pub fn tag_kind(tag: &str) -> TagKind {
    let len = tag.chars().count();
    if len == 2 {
        return TagKind::Geo;
    }
    if tag.contains(',') {
        return TagKind::Person;
    }
    if len == 4 && tag.starts_with(['K', 'k']) {
        return TagKind::Program;
    }
    let upper = tag.to_uppercase();
    if is_subject_tag(&upper) {
        TagKind::Subject
    } else if is_org_tag(&upper) {
        TagKind::Org
    } else {
        TagKind::Unknown
    }
}

/// Uppercased text between the TAGS label and the next section.
fn tags_span(header: &str) -> Option<String> {
    let label = TAGS_LABEL.find(header)?;
    let rest = &header[label.end()..];
    let span = match TAGS_END.find(rest) {
        Some(end) if !end.as_str().starts_with('\n') => &rest[..end.start()],
        Some(end) => first_lines(&rest[..end.start()]),
        None => first_lines(rest),
    };
    let span = span.to_uppercase();
    Some(PAGE_HEADER.replace_all(&span, " ").into_owned())
}

/// First line of `text`, continued while a line ends with a comma.
fn first_lines(text: &str) -> &str {
    let mut end = 0;
    for line in text.split_inclusive('\n') {
        end += line.len();
        if !line.trim_end().ends_with(',') {
            break;
        }
    }
    text[..end].trim_end()
}

/// Split at commas, then at whitespace; parenthesized groups stay whole.
fn split_tokens(span: &str) -> Vec<Vec<String>> {
    let mut chunks = Vec::new();
    let mut words = Vec::new();
    let mut word = String::new();
    let mut depth = 0usize;

    for c in span.chars() {
        match c {
            '(' => {
                depth += 1;
                word.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                word.push(c);
            }
            ',' if depth == 0 => {
                flush(&mut word, &mut words);
                if !words.is_empty() {
                    chunks.push(std::mem::take(&mut words));
                }
            }
            c if c.is_whitespace() && depth == 0 => flush(&mut word, &mut words),
            c if c.is_whitespace() => {
                if !word.ends_with(' ') {
                    word.push(' ');
                }
            }
            c => word.push(c),
        }
    }
    flush(&mut word, &mut words);
    if !words.is_empty() {
        chunks.push(words);
    }
    chunks
}

fn flush(word: &mut String, words: &mut Vec<String>) {
    if !word.is_empty() {
        words.push(std::mem::take(word));
    }
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}

fn canonical_chunk(words: &[String], tags: &mut Vec<String>) {
    let mut i = 0;
    while i < words.len() {
        let word = words[i].as_str();

        if let Some(inner) = word.strip_prefix('(') {
            push_unique(tags, inner.trim_end_matches(')').trim());
            i += 1;
            continue;
        }
        if let Some((phrase, used)) = phrase_at(&words[i..]) {
            push_unique(tags, phrase);
            i += used;
            continue;
        }
        if word == "OVIP" {
            push_unique(tags, word);
            match ovip_person(&words[i + 1..]) {
                Some(person) => {
                    push_unique(tags, &person);
                    i += 3;
                }
                None => i += 1,
            }
            continue;
        }

        if let Some((phrase, codes, used)) = glued_phrase_at(&words[i..]) {
            push_unique(tags, phrase);
            codes.into_iter().for_each(|code| push_unique(tags, code));
            i += used;
            continue;
        }

        let word = word.trim_end_matches([':', ';', '.']);
        if word != "SIPDIS" {
            let word = corrected_tag(word).unwrap_or(word);
            match split_run(word) {
                Some(parts) => parts.into_iter().for_each(|part| push_unique(tags, part)),
                None => push_unique(tags, word),
            }
        }
        i += 1;
    }
}

/// Longest curated multi-word tag starting at `words[0]`.
fn phrase_at(words: &[String]) -> Option<(&'static str, usize)> {
    (2..=MAX_PHRASE_WORDS.min(words.len()))
        .rev()
        .find_map(|n| tag_phrase(&words[..n].join(" ")).map(|phrase| (phrase, n)))
}

/// Curated phrase whose last word runs on into more codes:
/// `HUMAN RIGHTSPOLMIL`.
fn glued_phrase_at(words: &[String]) -> Option<(&'static str, Vec<&str>, usize)> {
    (2..=MAX_PHRASE_WORDS.min(words.len())).rev().find_map(|n| {
        let head = words[..n - 1].join(" ");
        let last = words[n - 1].as_str();
        if !last.bytes().all(|b| b.is_ascii_uppercase()) {
            return None;
        }
        (1..last.len().saturating_sub(2)).rev().find_map(|cut| {
            let phrase = tag_phrase(&format!("{head} {}", &last[..cut]))?;
            glued_codes(&last[cut..]).map(|codes| (phrase, codes, n))
        })
    })
}

/// Known codes, or else three-letter office abbreviations (`POLMIL`).
fn glued_codes(run: &str) -> Option<Vec<&str>> {
    if let Some(codes) = take_codes(run).filter(|codes| !codes.is_empty()) {
        return Some(codes);
    }
    (run.len() % 3 == 0).then(|| (0..run.len()).step_by(3).map(|i| &run[i..i + 3]).collect())
}

/// `OVIP LASTNAME FIRSTNAME` with a name not in the curated list.
fn ovip_person(words: &[String]) -> Option<String> {
    if words.len() < 2 || phrase_at(words).is_some() {
        return None;
    }
    let name_like = |w: &str| {
        w.len() > 2
            && w.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'')
            && w != "SIPDIS"
            && tag_kind(w) == TagKind::Unknown
    };
    (name_like(&words[0]) && name_like(&words[1])).then(|| format!("{}, {}", words[0], words[1]))
}

/// Split a run of concatenated codes (`KFRDKIRFCVIS…EG`, `VEPREL`).
///
/// Accepts 4-letter codes with at most one 2-letter geo code at either
/// end; anything else leaves the token alone.
fn split_run(run: &str) -> Option<Vec<&str>> {
    if run.len() <= 4 || !run.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    if run.len() % 4 == 2 && is_four_letter_code(&run[2..6]) {
        let mut parts = vec![&run[..2]];
        if let Some(rest) = take_codes(&run[2..]) {
            parts.extend(rest);
            return Some(parts);
        }
    }
    take_codes(run).filter(|parts| parts.len() > 1)
}

fn take_codes(mut rest: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    while rest.len() >= 4 && is_four_letter_code(&rest[..4]) {
        parts.push(&rest[..4]);
        rest = &rest[4..];
    }
    if rest.len() == 2 && !parts.is_empty() {
        parts.push(rest);
        rest = "";
    }
    rest.is_empty().then_some(parts)
}
