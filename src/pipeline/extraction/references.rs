//! Citations in a cable's REF block.
//!
//! The block is cut into enumerated entries (`A.`, `B)`, `(C)`, `;`), each
//! entry is tokenized and a small state machine walks
//! `[YEAR] STATION SERIAL [AND SERIAL]…` sequences. Anything that does not
//! fit is dropped: a missed citation is acceptable, a wrong one is not.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;

use super::reference_id::{canonicalize, strip_leading_zeros, MAX_SERIAL_LENGTH};
use crate::catalog::stations::resolve_cited_station;
use crate::models::{CanonicalCableId, Reference, ReferenceKind};

/// Upper bound on the scanned REF block, in bytes.
const MAX_BLOCK_LEN: usize = 2000;

/// Stations spelled with up to four words (`HO CHI MINH CITY`).
const MAX_STATION_WORDS: usize = 4;

static REF_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)REF(?:S|TELS?|\(S\))?\s*[:.]|\bREF(?:S|TELS?)?\s").expect("Invalid REF block pattern")
});

static LEADING_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*REF(?:S|TELS?|\(S\))?(?:\s*[:.]|\s)").expect("Invalid REF block pattern")
});

static BLOCK_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"CLASSI\w*\s+BY",
        r"|\n[ \t]*\n[ \t]*\n",
        r"|\n\s*¶?\s*1\s*\.",
        r"|\bSUMMARY\b",
        r"|\bSENSITIVE\s+BUT\b",
        r"|\bTHIS\s+MESSAGE\b",
        r"|\bSUBJ(?:ECT)?\s*:",
        r"|\bE\.\s?O\.",
        r"|\bTAGS?\s*:",
        r"|\bSIPDIS\b",
        r"|\b(?:[A-Z] ){4,}[A-Z]\b",
    ))
    .expect("Invalid REF block pattern")
});

static PAGE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PAGE\s+\d+\s+[A-Z]+\s+\d+(?:\s+\d+\s+OF\s+\d+)?\s+\d{6}Z").expect("Invalid REF block pattern")
});

static SECTION_FOOTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z]+\s+0\d{4,}\s+\d{3}(?:\.\d+)?\s+OF\s+\d{3}\b").expect("Invalid REF block pattern")
});

/// `PORT A`, `PORT AU PR`: the lone `A` would otherwise read as an enumerator.
static PORT_AU_PRINCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bPORT\s+AU?\b(?:\s+PR(?:INCE)?\b)?").expect("Invalid REF block pattern"));

static ENTRY_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r";|(?:^|[\s,(\[¶])[(\[]?[A-Z](?:[.):\]]|\s|$)").expect("Invalid REF block pattern")
});

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d{2})\)|[A-Z0-9']+").expect("Invalid REF block pattern"));

/// Year and/or serial glued to a station: `09CAIRO0561`, `09DHAHRAN`.
static GLUED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2,4})([A-Z]+)(\d+)?$").expect("Invalid REF block pattern"));

/// Two-digit year typed with the letter O: `O4`, `9O`.
static LETTER_O_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:O[0-9]|[0-9]O)$").expect("Invalid REF block pattern"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("Invalid REF block pattern"));

/// Keywords marking citations of things other than cables, by priority.
static KIND_KEYWORDS: LazyLock<Vec<(Regex, ReferenceKind)>> = LazyLock::new(|| {
    [
        (r"\bE-?MAILS?\b", ReferenceKind::Email),
        (r"\b(?:TELCONS?|TELECONS?|TELEPHONE|PHONE(?:CALL)?S?|TEL)\b", ReferenceKind::Tel),
        (r"\bFAX(?:ES)?\b", ReferenceKind::Fax),
        (r"\bMEMO(?:RANDUM|S)?\b", ReferenceKind::Memo),
        (r"\b(?:MEETINGS?|MTGS?)\b", ReferenceKind::Meeting),
        (r"\b(?:REPORTS?|IIR|INCSR)\b", ReferenceKind::Report),
        (r"\b(?:OSC|WEB(?:SITE)?|SITE|HTTPS?|WWW|SIPRNET|INTERNET)\b", ReferenceKind::Web),
        (r"\b(?:BOOK|ISBN)\b", ReferenceKind::Book),
    ]
    .into_iter()
    .map(|(pattern, kind)| (Regex::new(pattern).expect("Invalid reference keyword regex"), kind))
    .collect()
});

/// Lazily parsed references of one cable, in order of appearance.
///
/// Entries are split up front; each entry is parsed only when the iterator
/// reaches it.
pub struct References {
    entries: std::vec::IntoIter<String>,
    pending: VecDeque<Reference>,
    year: String,
    own_id: Option<String>,
}

impl Iterator for References {
    type Item = Reference;

    fn next(&mut self) -> Option<Reference> {
        loop {
            if let Some(reference) = self.pending.pop_front() {
                return Some(reference);
            }
            let entry = self.entries.next()?;
            self.parse_entry(&entry);
        }
    }
}

/// Parse the REF block of `content`.
///
/// `year` is the cable's own year (2 or 4 digits); citations without an
/// explicit year get it. A citation of `reference_id` itself is skipped.
pub fn parse_references(content: &str, year: u32, reference_id: Option<&str>) -> References {
    let own_id = reference_id
        .and_then(|id| canonicalize(id).ok())
        .map(|id| id.to_string());
    let entries = ref_block(content)
        .map(|block| split_entries(&block))
        .unwrap_or_default();
    tracing::trace!(entries = entries.len(), "REF block split");
    References {
        entries: entries.into_iter(),
        pending: VecDeque::new(),
        year: format!("{:02}", year % 100),
        own_id,
    }
}

/// Distinct cited cables of `content`, in order of first citation.
pub fn cited_cables(content: &str, year: u32, reference_id: Option<&str>) -> Vec<CanonicalCableId> {
    let mut ids: Vec<CanonicalCableId> = Vec::new();
    for id in parse_references(content, year, reference_id).filter_map(|r| r.cable_id()) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Upper-cased REF block with labels, page headers and footers removed.
fn ref_block(content: &str) -> Option<String> {
    let label = REF_LABEL.find(content)?;
    let mut block = content[label.end()..].to_uppercase();
    while let Some(end) = LEADING_LABEL.find(&block).map(|m| m.end()) {
        block.replace_range(..end, "");
    }
    if let Some(end) = BLOCK_END.find(&block).map(|m| m.start()) {
        block.truncate(end);
    }
    if block.len() > MAX_BLOCK_LEN {
        let mut cut = MAX_BLOCK_LEN;
        while !block.is_char_boundary(cut) {
            cut -= 1;
        }
        block.truncate(cut);
    }
    let block = PAGE_HEADER.replace_all(&block, " ");
    let block = SECTION_FOOTER.replace_all(&block, " ");
    Some(PORT_AU_PRINCE.replace_all(&block, "PORTAUPRINCE").into_owned())
}

fn split_entries(block: &str) -> Vec<String> {
    ENTRY_SEPARATOR
        .split(block)
        .map(|entry| WHITESPACE.replace_all(entry, " ").trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(String),
    ParenYear(String),
    Station(&'static str),
    And,
    Word,
}

fn tokenize(entry: &str) -> Vec<Token> {
    let mut words: Vec<(String, bool)> = Vec::new();
    for caps in TOKEN.captures_iter(entry) {
        match caps.get(1) {
            Some(year) => words.push((year.as_str().to_string(), true)),
            None => {
                let mut word = caps[0].replace('\'', "");
                if LETTER_O_YEAR.is_match(&word) {
                    word = word.replace('O', "0");
                }
                if !word.is_empty() {
                    words.push((word, false));
                }
            }
        }
    }

    let mut tokens = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let (word, parenthesized) = &words[i];
        if *parenthesized {
            tokens.push(Token::ParenYear(word.clone()));
            i += 1;
            continue;
        }
        if let Some((station, used)) = multi_word_station(&words[i..]) {
            tokens.push(Token::Station(station));
            i += used;
            continue;
        }
        if word.bytes().all(|b| b.is_ascii_digit()) {
            tokens.push(Token::Number(word.clone()));
        } else if word == "AND" {
            tokens.push(Token::And);
        } else if let Some(station) = resolve_cited_station(word) {
            tokens.push(Token::Station(station));
        } else if let Some(glued) = split_glued(word) {
            tokens.extend(glued);
        } else {
            tokens.push(Token::Word);
        }
        i += 1;
    }
    tokens
}

/// Longest run of two or more alphabetic words naming a station.
fn multi_word_station(words: &[(String, bool)]) -> Option<(&'static str, usize)> {
    let alphabetic = words
        .iter()
        .take(MAX_STATION_WORDS)
        .take_while(|(w, paren)| !paren && w.bytes().all(|b| b.is_ascii_alphabetic()))
        .count();
    (2..=alphabetic).rev().find_map(|n| {
        let joined: String = words[..n].iter().map(|(w, _)| w.as_str()).collect();
        resolve_cited_station(&joined).map(|station| (station, n))
    })
}

fn split_glued(word: &str) -> Option<Vec<Token>> {
    let caps = GLUED.captures(word)?;
    let station = resolve_cited_station(&caps[2])?;
    let mut tokens = vec![Token::Number(caps[1].to_string()), Token::Station(station)];
    if let Some(serial) = caps.get(3) {
        tokens.push(Token::Number(serial.as_str().to_string()));
    }
    Some(tokens)
}

fn fold_year(digits: &str) -> String {
    digits[digits.len() - 2..].to_string()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Last {
    Nothing,
    Station,
    Serial,
    And,
}

struct Citation {
    year: Option<String>,
    explicit_year: bool,
    station: &'static str,
    serial: String,
    /// The station followed free text (`INCSR BRAZIL`, `REPORT ON CAIRO`).
    after_text: bool,
}

impl Citation {
    /// `INCSR BRAZIL 2008` names a year, not a serial.
    fn is_dated_title(&self) -> bool {
        self.after_text
            && self.serial.len() == 4
            && (self.serial.starts_with("19") || self.serial.starts_with("20"))
    }
}

impl References {
    fn parse_entry(&mut self, entry: &str) {
        let tokens = tokenize(entry);
        let mut citations = read_citations(&tokens);
        citations.retain(|citation| {
            let keep = !citation.is_dated_title();
            if !keep {
                tracing::trace!(entry, serial = %citation.serial, "Dropped year read as serial");
            }
            keep
        });

        if citations.is_empty() {
            if let Some(kind) = KIND_KEYWORDS
                .iter()
                .find(|(pattern, _)| pattern.is_match(entry))
                .map(|(_, kind)| *kind)
            {
                let value = entry.trim_end_matches([',', '.', ':', ' ']);
                self.pending.push_back(Reference::new(kind, value));
            } else {
                tracing::trace!(entry, "Dropped unrecognized REF entry");
            }
            return;
        }

        for citation in citations {
            let year = citation.year.as_deref().unwrap_or(&self.year);
            let serial = strip_leading_zeros(&citation.serial);
            match CanonicalCableId::new(year, citation.station, serial) {
                Ok(id) if self.own_id.as_deref() == Some(id.to_string().as_str()) => {
                    tracing::trace!(%id, "Skipped self reference");
                }
                Ok(id) => self.pending.push_back(Reference::cable(&id)),
                Err(e) => tracing::trace!(error = %e, "Dropped unresolvable citation"),
            }
        }
    }
}

fn read_citations(tokens: &[Token]) -> Vec<Citation> {
    let mut citations: Vec<Citation> = Vec::new();
    let mut entry_year: Option<String> = None;
    let mut pending_year: Option<String> = None;
    let mut current: Option<(&'static str, Option<String>, bool, bool)> = None;
    let mut last = Last::Nothing;

    for (i, token) in tokens.iter().enumerate() {
        let next_is_station = matches!(tokens.get(i + 1), Some(Token::Station(_)));
        match token {
            Token::Station(station) => {
                let explicit = pending_year.take();
                if explicit.is_some() {
                    entry_year = explicit.clone();
                }
                let is_explicit = explicit.is_some();
                let after_text = i > 0 && tokens[i - 1] == Token::Word;
                current = Some((
                    *station,
                    explicit.or_else(|| entry_year.clone()),
                    is_explicit,
                    after_text,
                ));
                last = Last::Station;
            }
            Token::Number(digits) if matches!(last, Last::Station | Last::And) => {
                match &current {
                    Some((station, year, explicit, after_text)) if digits.len() <= MAX_SERIAL_LENGTH => {
                        citations.push(Citation {
                            year: year.clone(),
                            explicit_year: *explicit,
                            station: *station,
                            serial: digits.clone(),
                            after_text: *after_text,
                        });
                        last = Last::Serial;
                    }
                    _ => last = Last::Nothing,
                }
            }
            Token::Number(digits) | Token::ParenYear(digits)
                if next_is_station && (2..=4).contains(&digits.len()) =>
            {
                pending_year = Some(fold_year(digits));
                last = Last::Nothing;
            }
            Token::ParenYear(digits) if last == Last::Serial => {
                if let Some(citation) = citations.last_mut().filter(|c| !c.explicit_year) {
                    citation.year = Some(digits.clone());
                    citation.explicit_year = true;
                }
            }
            Token::And if last == Last::Serial => last = Last::And,
            _ => {
                pending_year = None;
                current = None;
                last = Last::Nothing;
            }
        }
    }
    citations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cables(content: &str, year: u32) -> Vec<String> {
        parse_references(content, year, None)
            .filter(Reference::is_cable)
            .map(|r| r.value)
            .collect()
    }

    #[test]
    fn enumerated_entries_with_email_aside() {
        let refs: Vec<Reference> = parse_references(
            "REF: A. TALLINN 366 B) LEE-GOLDSTEIN EMAIL 05/11/07 B) TALLINN 347",
            2007,
            None,
        )
        .collect();
        assert_eq!(
            refs,
            vec![
                Reference::new(ReferenceKind::Cable, "07TALLINN366"),
                Reference::new(ReferenceKind::Email, "LEE-GOLDSTEIN EMAIL 05/11/07"),
                Reference::new(ReferenceKind::Cable, "07TALLINN347"),
            ]
        );
    }

    #[test]
    fn and_joined_serials_share_station() {
        assert_eq!(
            cables("REF: STATE 41252 AND 44603", 2010),
            vec!["10STATE41252", "10STATE44603"]
        );
        assert_eq!(
            cables("REF: A. TRIPOLI 723 AND PREVIOUS\n\nClassified By: x", 2008),
            vec!["08TRIPOLI723"]
        );
    }

    #[test]
    fn explicit_years_in_every_notation() {
        assert_eq!(
            cables(
                "REF: A) ASUNCION 701 (08) B) 2007 MANAGUA 2135 C) 094 QUITO 841 D) (99) ROME 2196",
                2009
            ),
            vec!["08ASUNCION701", "07MANAGUA2135", "94QUITO841", "99ROME2196"]
        );
    }

    #[test]
    fn year_does_not_leak_across_entries() {
        assert_eq!(
            cables(
                "REF: A. 09DHAHRAN 201 B. 09RIYADH 1302 C. RIYADH 103 D. SECSTATE 3080\n\n1. (C) Summary",
                2010
            ),
            vec!["09DHAHRAN201", "09RIYADH1302", "10RIYADH103", "10STATE3080"]
        );
    }

    #[test]
    fn year_is_inherited_within_an_entry() {
        assert_eq!(
            cables("REF: A. 08 STATE 1234 AND SECSTATE 5678 B. STATE 999", 2009),
            vec!["08STATE1234", "08STATE5678", "09STATE999"]
        );
    }

    #[test]
    fn multi_word_and_aliased_stations() {
        assert_eq!(
            cables(
                "REF: A. 05 SAO PAULO 405; B. THE HAGUE 097 C. USUN NEW YORK 827 \
                 D. HCMC 196 E. PORT AU PRINCE 12 F. PORT A 76",
                2010
            ),
            vec![
                "05SAOPAULO405",
                "10THEHAGUE97",
                "10USUNNEWYORK827",
                "10HOCHIMINHCITY196",
                "10PORTAUPRINCE12",
                "10PORTAUPRINCE76",
            ]
        );
    }

    #[test]
    fn typos_fold_to_stations() {
        assert_eq!(
            cables("REF: A. BRASILA 931 B. 05 0TTAWA 3518 C. TRIPOLII 1 D. RIO DE JAN 5", 2006),
            vec!["06BRASILIA931", "05OTTAWA3518", "06TRIPOLI1", "06RIODEJANEIRO5"]
        );
    }

    #[test]
    fn glued_and_dashed_identifiers() {
        assert_eq!(
            cables("REF: 09CAIRO0561; 10-OTTAWA-57", 2010),
            vec!["09CAIRO561", "10OTTAWA57"]
        );
    }

    #[test]
    fn leading_zeros_and_blank_lines_inside_block() {
        assert_eq!(
            cables(
                "Refs:  (A) Rio de Janeiro 00190  (B) Rio de Janeiro \n \n00723  (C) Brasilia 01392 \n \n1.  (U)  SUMMARY",
                2004
            ),
            vec!["04RIODEJANEIRO190", "04RIODEJANEIRO723", "04BRASILIA1392"]
        );
    }

    #[test]
    fn page_headers_and_footers_are_not_citations() {
        assert_eq!(
            cables(
                "REF: A. STATE 40721\n CONFIDENTIAL\nPAGE 02 ROME 01196 01 OF 02 082030Z B. ROME 1098",
                2002
            ),
            vec!["02STATE40721", "02ROME1098"]
        );
        let refs: Vec<Reference> = parse_references(
            "REF: A. MADRID 286\nMADRID 00000869 001.2 OF 004\nB. OSC EUP20061127123001\n\nClassified By: x",
            2009,
            None,
        )
        .collect();
        assert_eq!(
            refs,
            vec![
                Reference::new(ReferenceKind::Cable, "09MADRID286"),
                Reference::new(ReferenceKind::Web, "OSC EUP20061127123001"),
            ]
        );
    }

    #[test]
    fn own_id_is_skipped() {
        let refs: Vec<String> = parse_references("REF: TRIPOLI 227 TRIPOLI 402", 2008, Some("08TRIPOLI402"))
            .map(|r| r.value)
            .collect();
        assert_eq!(refs, vec!["08TRIPOLI227"]);
    }

    #[test]
    fn block_ends_at_banners_and_blank_lines() {
        assert_eq!(
            cables("REF: A. 08 STATE 81854\n\n\nS e c r e t nairobi 001938", 2009),
            vec!["08STATE81854"]
        );
        assert_eq!(
            cables(
                "REF: A) STATE 856708 B) STATE 86108\n\nC O N F I D E N T I A L RIGA 000472 SIPDIS",
                2008
            ),
            vec!["08STATE856708", "08STATE86108"]
        );
    }

    #[test]
    fn no_false_positives() {
        assert!(cables("REF: SECDEF R162245Z OCT 08\n\n1.Embassy London", 2008).is_empty());
        assert_eq!(
            cables("REF: STATE 106206 CIRCULAR; STATE CA-3400 NOV 2, 1966", 1966),
            vec!["66STATE106206"]
        );
        assert!(cables("SUBJECT: JOURNALIST JAILED FOR CRITICIZING GOVERNMENT", 2008).is_empty());
    }

    #[test]
    fn label_variants() {
        assert_eq!(cables("SUBJECT: X EGYPTREF: CAIRO 493", 2008), vec!["08CAIRO493"]);
        assert_eq!(cables("REF: REF: SECSTATE 58408", 2009), vec!["09STATE58408"]);
        assert_eq!(cables("REFTEL: UNVIE 544", 2010), vec!["10UNVIEVIENNA544"]);
        assert_eq!(cables("REF A) LONDON 1939", 2008), vec!["08LONDON1939"]);
    }

    #[test]
    fn non_cable_kinds() {
        let refs: Vec<Reference> =
            parse_references("REF: HILL - OPS CENTER TELCONS 9/28 AND 29", 2003, None).collect();
        assert_eq!(
            refs,
            vec![Reference::new(ReferenceKind::Tel, "HILL - OPS CENTER TELCONS 9/28 AND 29")]
        );
    }

    #[test]
    fn iterator_is_lazy_and_single_pass() {
        let mut refs = parse_references("REF: A. PARIS 1 B. PARIS 2", 2006, None);
        assert_eq!(refs.next().map(|r| r.value), Some("06PARIS1".to_string()));
        let rest: Vec<String> = refs.map(|r| r.value).collect();
        assert_eq!(rest, vec!["06PARIS2"]);
    }

    #[test]
    fn cited_cables_deduplicates() {
        let ids: Vec<String> = cited_cables("REF: A. PARIS 1 B. PARIS 1 C. PARIS 2", 2006, None)
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["06PARIS1", "06PARIS2"]);
    }

    #[test]
    fn dated_report_titles_are_not_citations() {
        let refs: Vec<Reference> =
            parse_references("REF: A. INCSR BRAZIL 2008 B. PARIS 5", 2009, None).collect();
        assert_eq!(
            refs,
            vec![
                Reference::new(ReferenceKind::Report, "INCSR BRAZIL 2008"),
                Reference::new(ReferenceKind::Cable, "09PARIS5"),
            ]
        );

        let refs: Vec<Reference> =
            parse_references("REF: A. ANNUAL REPORT ON CAIRO 2008", 2009, None).collect();
        assert_eq!(refs, vec![Reference::new(ReferenceKind::Report, "ANNUAL REPORT ON CAIRO 2008")]);

        assert_eq!(
            cables("REF: ASUNCION 701 (08) \n     \u{b6}C. INCSR BRAZIL 2008 \n     \u{b6}D. SAO PAULO 228 (08)", 2009),
            vec!["08ASUNCION701", "08SAOPAULO228"]
        );
    }

    #[test]
    fn year_typed_with_letter_o() {
        assert_eq!(
            cables("REF: (A)05 CHENNAI 0121, (B)O4 CHENNAI 0944 ", 2006),
            vec!["05CHENNAI121", "04CHENNAI944"]
        );
        assert_eq!(cables("REF: A. 9O CAIRO 12", 2006), vec!["90CAIRO12"]);
    }

    #[test]
    fn paris_fr_cites_the_unesco_mission() {
        assert_eq!(
            cables("REF: (A) PARIS FR 2144 \n     (B) PARIS FR 2153 \n \nClassified by Amb", 2008),
            vec!["08UNESCOPARISFR2144", "08UNESCOPARISFR2153"]
        );
        assert_eq!(cables("REF: A. PARIS 7682", 2005), vec!["05PARIS7682"]);
    }

    #[test]
    fn cable_corpus() {
        let cases: &[(&str, u32, Option<&str>, &[&str])] = &[
            ("SUBJECT: HAITI EARTHQUAKE:  DISCUSSION WITH UNESCO DIRECTOR-GENERAL \n \nREF: (A) USUNESCO PARIS FR 000087, (B) USUNESCO PARIS FR 00187 \n \n1.  Ambassador [...]", 2010, None, &["10UNESCOPARISFR87", "10UNESCOPARISFR187"]),
            ("SUBJECT: UNESCO DIRECTOR GENERAL SUCCESSION:  CONVERSATIONS WITH \nMEXICO, SWEDEN, BRAZIL, FRANCE, AND TURKEY \n \nREF: (A) PARIS FR 2144 \n     (B) PARIS FR 2153 \n \nClassified by Amb[...]", 2008, None, &["08UNESCOPARISFR2144", "08UNESCOPARISFR2153"]),
            ("SUBJECT: HAITI EARTHQUAKE:  UNESCO MEETING ON SAVING HAITI'S \nHERITAGE \n \nREF: UNESCO PARIS FR 000087 \n\n1. Summary. UNESCO, ", 2010, None, &["10UNESCOPARISFR87"]),
            ("E.O. 12958: N/A \nTAGS: PINR PGOV PREL SNAR BR AVERY\nSUBJECT: WHAT HAPPENED TO THE PCC? \n \nREF: A. ASUNCION 701 (08) \n     ¶B. ASUNCION 338 (07) \n     ¶C. INCSR BRAZIL 2008 \n     ¶D. SAO PAULO 228 (08) \n     ¶E. SAO PAULO 66 (08) \n     ¶F. SAO PAULO 873 (07) \n     ¶G. SAO PAULO 447 (07) \n     ¶H. SAO PAULO 975 (06) \n     ¶I. SAO PAULO 526 (06) \n     ¶J. SAO PAULO 319 (06) \n \n¶1.  (SBU) Summary: For thre", 2009, None, &["08ASUNCION701", "07ASUNCION338", "08SAOPAULO228", "08SAOPAULO66", "07SAOPAULO873", "07SAOPAULO447", "06SAOPAULO975", "06SAOPAULO526", "06SAOPAULO319"]),
            ("REF: (A)05 CHENNAI 0121, (B)O4 CHENNAI 0944 ", 2006, None, &["05CHENNAI121", "04CHENNAI944"]),
            ("\nREF: A. PARIS 1501\nB. PARIS 1568\nC. HOTR WASHINGTON DC//USDAO PARIS (SUBJ: IIR 6 832\n0617 08)\nD. HOTR WASHINGTON DC//USDAO PARIS (SUBJ: IIR 6 832\n0626 08) ", 2008, None, &["08PARIS1501", "08PARIS1568"]),
            ("\nREF: A) STATE 135205; B) STATE 127608; C) JOHNSON-STEVENS/GODFREY E-MAIL 10/15/07; D) TRIPOLI 797; E) TRIPOLI 723 AND PREVIOUS", 2007, None, &["07STATE135205", "07STATE127608", "07TRIPOLI797", "07TRIPOLI723"]),
            ("\nREF: A. (A) PARIS 7682 AND PREVIOUS \n\nB. (B) EMBASSY PARIS DAILY REPORT FOR OCTOBER 28 - \nNOVEMBER 16 (PARIS SIPRNET SITE) \nC. (C) PARIS 7527 ", 2005, None, &["05PARIS7682", "05PARIS7527"]),
            ("\n REF: STATE 106206 CIRCULAR; STATE CA-3400 NOV 2, 1966 ", 1966, None, &["66STATE106206"]),
            ("\nPROGRAM REF: A. A) SECSTATE 54183 B. B) 07 BRASILIA 1868 C. C) STATE 57700 D. 07 STATE 17940 Classified By: DCM Phillip Chicola, Reason 1.5 (d) ", 2008, None, &["08STATE54183", "07BRASILIA1868", "08STATE57700", "07STATE17940"]),
            ("\nREF: A. 08 STATE 81854\n\n\nS e c r e t nairobi 001938", 2009, None, &["08STATE81854"]),
            ("SUBJECT: ENERGY INSTALLATIONS REF: BRASILIA 861", 2006, None, &["06BRASILIA861"]),
            ("\nSUBJECT: THOUGHTS ON THE VISIT OF DEFENSE MINISTER JOBIM TO WASHINGTON \n\nREF: A. A) BRASILIA 236 B. B) OSD REPORT DTG 251847Z MAR 08 C. C) BRASILIA 175 \nClassified By: Ambassador Clifford Sobel. \nReason: 1.5 d \n", 2008, None, &["08BRASILIA236", "08BRASILIA175"]),
            ("SUBJECT: NETHERLANDS/AFGHANISTAN: A REDUCED ROLE LIKELY BUT\nDETAILS WILL NOT COME QUICKLY\nREF: A. THE HAGUE 109\nB. THE HAGUE 108\nC. THE HAGUE 097\nD. 09 THE HAGUE 759\nClassified By: Deput", 2010, None, &["10THEHAGUE109", "10THEHAGUE108", "10THEHAGUE97", "09THEHAGUE759"]),
            ("SUBJECT: FBI DIRECTOR MUELLER’S VISIT TO EGYPTREF: CAIRO 493\n\nClassified by DCM Stua", 2006, None, &["06CAIRO493"]),
            ("\nUBJECT: BAHRAIN WILL FORMALLY REQUEST QATAR TO EXECUTE LEGAL JUDGMENT AGAINST KHALIFA AL SUBAIE REF: A. A) MANAMA 20 \nB. B) 2/22/08 GRAY-ERELI E-MAIL \n\nClassified By", 2008, None, &["08MANAMA20"]),
            ("SUBJECT: AUSTRIAN AMBASSADOR TO IRAN DESCRIBES ELECTIONS AS \nDRIVING TEHRAN ENVIRONMENT \n \nREF: UNVIE 544 \n \nClassified By: DCM", 2010, None, &["10UNVIEVIENNA544"]),
            ("SUBJECT: SOURCES OF GENERATION - ELECTRICITY SERIES #2 \n \nSENSITIVE BUT UNCLASSIFED--PLEASE PROTECT ACCORDINGLY \n \nREF: A: Sao Paulo 0031; B: La Paz 0462; C: 06 Sao Paulo 1059 D: \nBrasilia 00593; E: Sao Paulo  F: Rio 0091 \n \n \n1.(U)SUMMARY: As", 2008, None, &["08SAOPAULO31", "08LAPAZ462", "06SAOPAULO1059", "08BRASILIA593", "08RIODEJANEIRO91"]),
            ("SUBJECT: MINAS GERAIS:  THE VIEW FROM BELO HORIZONTE \n \nReftel:  Rio de Janeiro 1118 \n \nSUMMARY \n------- ", 2005, None, &["05RIODEJANEIRO1118"]),
            ("SUBJECT: PEACE PROCESS WITH ELN STALLS\n \nREF: A. BOGOTA 1775\n \n     ¶B. BOGOTA 3422\n     ¶C. CARACAS 0951\n \nClassified By: Ambassador Willia", 2005, None, &["05BOGOTA1775", "05BOGOTA3422", "05CARACAS951"]),
            ("SUBJECT: COLLEAGUE CHRONICLES CORRUPTION OF YOURI LATORTUE REF: PORT AU PRINCE 01407 PORT AU PR 00002230 001.2 OF 002 Classified By:", 2006, None, &["06PORTAUPRINCE1407"]),
            ("SUBJECT: New Foreign Minister Patino from Left Side of Correa's \nCircle \n \nREF: QUITO 5; 094 QUITO 841; 08 QUITO 1062; 07 QUITO 1607 \n07 QUITO 290; 06 QUITO 2937 \n \nCLASSIFIED BY", 2010, None, &["10QUITO5", "94QUITO841", "08QUITO1062", "07QUITO1607", "07QUITO290", "06QUITO2937"]),
            ("REF: A. A. STATE 56282 ¶B. B. STATE 56666 ¶C. C. STATE 41252 AND 44603 ¶D. D. BRASILIA 616 ", 2004, None, &["04STATE56282", "04STATE56666", "04STATE41252", "04STATE44603", "04BRASILIA616"]),
            ("REF: A. STATE 1531333 ¶B. STOCKHOLM 1498 ¶C. BISHTEK 1194 ¶D. SCHLAEFER/THOME-EUR/NB E-MAILS 22-24 AUG 05 ", 2005, None, &["05STATE1531333", "05STOCKHOLM1498", "05BISHKEK1194"]),
            ("REF: SECTSTATE 14985 ", 2007, None, &["07STATE14985"]),
            ("REF: A) 07 TRIPOLI 656; B) 07 TRIPOLII 695 TRIPOLI 00000661 001.2 OF 002 CLASSIFIED BY: ", 2009, None, &["07TRIPOLI656", "07TRIPOLI695"]),
            ("REF: A. USUN NEW YORK 827 ¶B. USUN NEW YORK 634 ¶C. USUN NE YORK 609 ¶D. USUN NEW YORK 553 ¶E. USUN NEW YORK 432 ¶F. USUN NEW YORK 388 ¶G. USUN NEW YORK 345 ¶H. USUN NEW YORK 289 ¶I. USUN NEW YORK 230 ", 2009, None, &["09USUNNEWYORK827", "09USUNNEWYORK634", "09USUNNEWYORK609", "09USUNNEWYORK553", "09USUNNEWYORK432", "09USUNNEWYORK388", "09USUNNEWYORK345", "09USUNNEWYORK289", "09USUNNEWYORK230"]),
            ("SUBJECT:  SOUTH ASIA BUREAU AFGHANISTAN COORDINATOR \nBRIEFS VATICAN. \n \nREF. STATE 184178 \n                       CONFIDENTIAL \n \nPAGE 02        VATICA  05693  01 OF 02  021700Z \n \nCLASSIFIED BY AMBASSADOR", 2001, None, &["01STATE184178"]),
            ("SUBJECT: G8 EXPERTS MEETING ON CRITICAL INFORMATION \nINFRASTRUCTURE PROTECTION: CANADIAN DELEGATION \n \nREF: REF: SECSTATE 58408 \n \n 1. Following is th", 2003, None, &["03STATE58408"]),
            ("REF: Panama 01764 \n \n \nC O R R E C T E D COPY OF PANAMA 1957 - TEXT\n", 2004, None, &["04PANAMA1764"]),
            ("REF: A. 09DHAHRAN 201 B. 09RIYADH 1302 C. 09RIYADH 1397 D. 09RIYADH 1492 E. 09RIYADH 1557 F. 09RIYADH 1642 G. RIYADH 103 H. SECSTATE 3080 I. SECSTATE 11182", 2010, None, &["09DHAHRAN201", "09RIYADH1302", "09RIYADH1397", "09RIYADH1492", "09RIYADH1557", "09RIYADH1642", "10RIYADH103", "10STATE3080", "10STATE11182"]),
            ("REF: A. '08 BUENOS AIRES 1491 \n     ¶B. '08 BUENOS AIRES 1389 \n     ¶C. '08 BUENOS AIRES 1398 ", 2009, None, &["08BUENOSAIRES1491", "08BUENOSAIRES1389", "08BUENOSAIRES1398"]),
            ("REF: A. PANAMA 651\n\n     ¶B. PANAMA 1213\n     ¶C. PANAMA 1293\n     ¶D. 2005PANAMA2342", 2006, None, &["06PANAMA651", "06PANAMA1213", "06PANAMA1293", "05PANAMA2342"]),
            ("REF: TEHRAN 1091: TEHRAN 263: MOSCOW 1603 ", 1972, None, &["72TEHRAN1091", "72TEHRAN263", "72MOSCOW1603"]),
            ("\nREF: EMBASSY MADRID E-MAIL TO EUR/WE OF OCTOBER 14\n", 2004, None, &[]),
            ("REF: A. RICHARD-WITMER EMAIL 10/9 \n\nB. WITMER-HOLLIDAY EMAILS 9-22 THRU 10-7 ", 2003, None, &[]),
            ("SUBJECT: THANKS A LOT, JUAN REF: HILL - OPS CENTER TELCONS 9/28 AND 29 ", 2003, None, &[]),
        ];
        for &(content, year, reference_id, expected) in cases {
            let got: Vec<String> = cited_cables(content, year, reference_id)
                .iter()
                .map(|id| id.to_string())
                .collect();
            assert_eq!(got, expected, "{content}");
        }
    }
}
