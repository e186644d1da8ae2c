//! Names of the officials credited in a "Classified By" declaration.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::catalog::titles::{corrected_name, is_title_word};

static CLASSIFIED_BY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bclassi?f\w*\s+by\b\s*:?").expect("Invalid classified-by label pattern")
});

/// Paragraph numbers, `(U)` markers and repeated labels at the start of the span.
static LEADING_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:\d+\.\s*|\(\w{1,3}\)\s*|(?:this\s+message\s+)?classi?f\w*\s+by\b\s*:?\s*)")
        .expect("Invalid classified-by noise pattern")
});

static SPAN_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\bfor\s+(?:for\s+)?(?:r|e\.?\s?o|\d)",
        r"|\brea\w*",
        r"|\bresons?\b",
        r"|\bre\b",
        r"|\be\.\s?o\.?",
        r"|\beo\s+12958",
        r"|\b(?:under|per)\s+(?:se|sec\w*|reasons?|\d)",
        r"|\bbased\s+(?:on|upon|0n)\b",
        r"|\b1\.\s?[2-6]\b",
        r"|\bsections?\s+1",
        r"|\bfr\s+reasons",
        r"|\bf0r\b",
        r"|;",
        r"|\n\s*\n",
        r"|\n\s*(?:UNCLASSIFIED|CONFIDENTIAL|SECRET)\b",
        r"|\bdue\s+to\b",
    ))
    .expect("Invalid classified-by end pattern")
});

/// A word broken at a line end: `Blah \na`, `Richa \nrd`, `f \nor`.
static WRAPPED_LOWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w)[ \t]*\n[ \t]*([a-z]{1,2})\b").expect("Invalid line wrap pattern")
});

/// `AFFAIR \nS`; joined only when the result is a title.
static WRAPPED_UPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)[ \t]*\n[ \t]*([A-Z]{1,2})\b").expect("Invalid line wrap pattern")
});

/// `d,Affaires` typed for `d'Affaires`.
static D_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bd,(af)").expect("Invalid chargé pattern"));

static A_I: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\ba\.\s?i\.").expect("Invalid chargé pattern"));

/// `DCM/Ted`: an office glued to a given name.
static OFFICE_SLASH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{2,})/([A-Z][a-z]\S*)$").expect("Invalid office pattern")
});

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("Invalid parenthesis pattern"));

static AND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+and\s+").expect("Invalid conjunction pattern"));

static SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(JR|SR)\.?|(II|III|IV)\.?)$").expect("Invalid name suffix pattern")
});

const ROMAN_SUFFIXES: &[&str] = &["II", "III", "IV"];

/// Names credited by the first "Classified By" declaration in `text` that
/// names someone.
///
/// Yields nothing when there is no declaration or no name could be told
/// apart from the surrounding titles. With `normalize`, all-caps names are
/// converted to name case.
pub fn parse_classified_by(text: &str, normalize: bool) -> impl Iterator<Item = String> {
    let names = CLASSIFIED_BY
        .find_iter(text)
        .map(|label| names_in(&declaration_span(&text[label.end()..])))
        .find(|names| !names.is_empty())
        .unwrap_or_default();
    tracing::trace!(count = names.len(), "Parsed classified-by declaration");
    names
        .into_iter()
        .map(move |name| if normalize { name_case(&name) } else { name })
}

/// Text after a declaration label up to the first terminator, with line
/// wraps mended, asides and colons removed and whitespace collapsed.
fn declaration_span(after_label: &str) -> String {
    let mut span = after_label;
    while let Some(noise) = LEADING_NOISE.find(span).filter(|m| m.end() > 0) {
        span = &span[noise.end()..];
    }
    let span = WRAPPED_LOWER.replace_all(span, "${1}${2}");
    let span = WRAPPED_UPPER.replace_all(&span, |caps: &Captures| {
        let joined = format!("{}{}", &caps[1], &caps[2]);
        if is_title_word(&joined.to_uppercase()) {
            joined
        } else {
            caps[0].to_string()
        }
    });
    let span = match SPAN_END.find(&span) {
        Some(end) => &span[..end.start()],
        None => &span[..],
    };
    let span = PARENTHESIZED.replace_all(span, " ").replace(':', " ");
    let span = D_COMMA.replace_all(&span, "d'${1}");
    let span = A_I.replace_all(&span, "a.i.");
    span.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn names_in(span: &str) -> Vec<String> {
    let pieces: Vec<&str> = AND.split(span).collect();
    if pieces.len() > 1 {
        let names: Vec<Option<String>> = pieces.iter().map(|piece| name_in(piece)).collect();
        if names
            .iter()
            .all(|n| n.as_deref().is_some_and(|n| n.split(' ').count() >= 2))
        {
            return names.into_iter().flatten().collect();
        }
    }
    name_in(span).into_iter().collect()
}

/// First comma-separated part holding a name, with a following
/// generational suffix re-attached.
fn name_in(piece: &str) -> Option<String> {
    let parts: Vec<&str> = piece.split(',').map(str::trim).collect();
    parts.iter().enumerate().find_map(|(i, part)| {
        let name = name_words(part)?;
        match parts.get(i + 1).and_then(|next| suffix(next)) {
            Some(suffix) => Some(format!("{name}, {suffix}")),
            None => Some(name),
        }
    })
}

fn suffix(part: &str) -> Option<String> {
    let caps = SUFFIX.captures(part)?;
    match (caps.get(1), caps.get(2)) {
        (Some(_), _) => Some(part.to_string()),
        (None, Some(roman)) => Some(roman.as_str().to_string()),
        _ => None,
    }
}

/// The words after the last title in `part`.
///
/// After a `TO`/`FOR` qualifier (`AMBASSADOR TO SUDAN`) only the trailing
/// given name, optional initial and surname are kept. Runs holding a number
/// are not names.
fn name_words(part: &str) -> Option<String> {
    let words: Vec<&str> = part.split_whitespace().flat_map(split_office).collect();
    let mixed_case = part.chars().any(char::is_lowercase);
    let start = words
        .iter()
        .position(|w| !is_role_word(w, mixed_case))
        .unwrap_or(words.len());
    let from = words[start..]
        .iter()
        .rposition(|w| is_role_word(w, mixed_case) && role_key(w).len() >= 2)
        .map_or(start, |i| start + i + 1);

    let mut run = &words[from..];
    if words[..from].iter().any(|w| matches!(role_key(w).as_str(), "TO" | "FOR")) {
        run = trailing_name(run);
    }
    if mixed_case {
        while let Some((last, rest)) = run.split_last() {
            if last.chars().any(char::is_uppercase) {
                break;
            }
            run = rest;
        }
    }
    if run
        .iter()
        .any(|w| w.chars().filter(char::is_ascii_digit).count() >= 2)
    {
        return None;
    }

    let joined = run.join(" ");
    let name = joined.trim_matches([' ', '-', ',', ':', ';']);
    let upper = name.to_uppercase();
    let name = if upper.ends_with("JR.") || upper.ends_with("SR.") {
        name
    } else {
        name.trim_end_matches('.')
    };
    (!name.is_empty()).then(|| name.to_string())
}

/// `DCM/Ted` → `DCM/`, `Ted`.
fn split_office(word: &str) -> Vec<&str> {
    match OFFICE_SLASH_NAME.captures(word) {
        Some(caps) => {
            let (Some(office), Some(name)) = (caps.get(1), caps.get(2)) else {
                return vec![word];
            };
            vec![&word[..office.end() + 1], name.as_str()]
        }
        None => vec![word],
    }
}

/// Last two words, or three when the middle one is an initial.
fn trailing_name<'a, 'w>(run: &'a [&'w str]) -> &'a [&'w str] {
    let keep = if run.len() >= 3 && is_initial(run[run.len() - 2]) { 3 } else { 2 };
    &run[run.len().saturating_sub(keep)..]
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), None | Some('.'), None) if c.is_ascii_alphabetic()
    )
}

fn role_key(word: &str) -> String {
    word.trim_end_matches([',', ':']).to_uppercase()
}

/// Titles, offices (`POL/ECON`), bare punctuation, and in mixed-case text
/// all-caps acronyms (`NEA`, `DPO`).
fn is_role_word(word: &str, mixed_case: bool) -> bool {
    let key = role_key(word);
    is_title_word(&key)
        || word.contains(['/', '&'])
        || !word.chars().any(char::is_alphanumeric)
        || (mixed_case
            && word.len() >= 2
            && word.bytes().all(|b| b.is_ascii_uppercase())
            && !ROMAN_SUFFIXES.contains(&word))
}

fn name_case(name: &str) -> String {
    name.split(' ').map(name_case_word).collect::<Vec<_>>().join(" ")
}

fn name_case_word(word: &str) -> String {
    if word.chars().any(char::is_lowercase) {
        return word.to_string();
    }
    let (bare, tail) = word.split_at(word.trim_end_matches([',', '.']).len());
    if ROMAN_SUFFIXES.contains(&bare) {
        return word.to_string();
    }
    let bare = bare.replace('0', "O");
    let bare = corrected_name(&bare).map_or(bare, str::to_string);

    let mut out = String::with_capacity(word.len());
    let mut upper_next = true;
    for (i, c) in bare.chars().enumerate() {
        if upper_next {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        upper_next = !c.is_alphabetic() || (i == 1 && out == "Mc" && bare.len() > 3);
    }
    out.push_str(tail);
    out
}
