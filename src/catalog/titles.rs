//! Role and title words that precede a classifying official's name.

/// Upper-cased title words, misspellings included. Compared after trailing
/// `,` and `:` are removed; periods are significant (`AMB.` but not `A.`
/// for an initial).
pub const TITLE_WORDS: &[&str] = &[
    "&", "A", "A.I.", "ABASSADOR", "ACTING", "ADDED", "ADVISER", "ADVISOR", "AF", "AFAIRS",
    "AFFAIRES", "AFFAIRS", "AFFARIES", "AFFIARS", "AI", "AI.", "AIT", "AMABASSADOR", "AMB",
    "AMB.", "AMBASASDOR", "AMBASSAD0R", "AMBASSADIOR", "AMBASSADO", "AMBASSADOR",
    "AMBASSADOR-AT-LARGE", "AMBASSADOT", "AMBASSADR", "AMBASSADRO", "AMBASSAOR", "AMBASSODOR",
    "AMBASSSADOR", "AMBBASSADOR", "AMBSSADOR", "AND", "ARMS", "ARSO", "ASSISTANT", "ATTACHE",
    "BY", "CDA", "CHAIRMAN", "CHARGE", "CHARGE'", "CHIEF", "CIEF", "CLASSIFICATION", "COM",
    "CONGEN", "CONOFF", "CONSUL", "CONTROL", "COORDINATOR", "COUN", "COUNCILOR", "COUNS",
    "COUNS.", "COUNSEL", "COUNSEL0R", "COUNSELLOR", "COUNSELOR", "COUNSELOUR", "COUNSELR",
    "COUNSEOR", "COUNSLEOR", "COUSELOR", "D'", "D'AFAIRS", "D'AFFAIRES", "D'AFFAIRS",
    "D'AFFARIES", "DAS", "DCM", "DE", "DE'AFFAIRS", "DEFENSE", "DELEGATE", "DEPARTMENT",
    "DEPUTY", "DIPLOMATIC", "DIR", "DIR.", "DIRECOTR", "DIRECTOR", "DOS", "DPO", "D\\'AFFAIRES",
    "ECMIN", "ECON", "ECONCOUNS", "ECONOFF", "ECONOMIC", "ECONOMICAL", "ECOPOL", "ECPO", "EMIN",
    "ENVOY", "EUR", "FOR", "GENERAL", "GUIDE", "HEAD", "INSTITUTIONAL", "IO", "IPO", "ISN",
    "LABOR", "LEADER", "LEGAL", "LINE", "LTC", "MC", "MCOUNSELOR", "MEMBER", "MIN", "MINISTER",
    "MINISTER-COUNSELLOR", "MINISTER-COUNSELOR", "MINISTER-COUNSELOUR", "MINISTER-COUSELOR",
    "MISSION", "NEA", "OF", "OFF", "OFFICE", "OFFICER", "PDAS", "PERMANENT", "POL", "POL-MIL",
    "POLITICAL", "POLMIL", "POLMINCONS", "POLOFF", "PRINCIPAL", "REPRESENATIVE",
    "REPRESENTATIVE", "RSO", "SECRETARY", "SECTION", "SECURITY", "SPECIAL", "STATE", "TDY",
    "TEAM", "THE", "TO", "U.S.", "UNIT", "USDEL", "USEU", "USUN",
];

/// Misread names fixed when names are normalized.
pub const NAME_CORRECTIONS: &[(&str, &str)] = &[
    ("RICAHRD", "RICHARD"),
];

pub fn is_title_word(word: &str) -> bool {
    TITLE_WORDS.binary_search(&word).is_ok()
}

pub fn corrected_name(word: &str) -> Option<&'static str> {
    super::lookup(NAME_CORRECTIONS, word)
}
