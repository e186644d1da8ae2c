//! Word lists behind tag canonicalization and classification.

/// Subject codes of the TAGS taxonomy.
pub const SUBJECT_TAGS: &[&str] = &[
    "ABLD", "ABUD", "ACOA", "ADCO", "ADPM", "AEMR", "AFIN", "AFSI", "AFSN", "AGAO", "AGMT", "AINF",
    "AINR", "AINT", "AMCT", "AMED", "AMGT", "AODE", "APCS", "APER", "ASCH", "ASEC", "ASIG", "ASUP",
    "ATRN", "BBSR", "BEXP", "BMGT", "BTIO", "CASC", "CDIP", "CFED", "CJAN", "CMGT", "CPAS", "CVIS",
    "EAGR", "EAID", "EAIR", "ECIN", "ECON", "ECPS", "EFIN", "EFIS", "EIND", "EINT", "EINV", "ELAB",
    "ELTN", "EMIN", "ENIV", "ENRG", "EPET", "ETRD", "ETTC", "EWWT", "MARR", "MASS", "MCAP", "MNUC",
    "MOPS", "MPOS", "OEXC", "OFDP", "OIIP", "OPDC", "OPIC", "OPRC", "OREP", "OSCI", "OTRA", "OVIP",
    "PARM", "PBTS", "PGOV", "PHSA", "PHUM", "PINR", "PINS", "PINT", "PNAT", "PREF", "PREL", "PROP",
    "PTER", "SCUL", "SENV", "SMIG", "SNAR", "SOCI", "TBIO", "TINT", "TNGD", "TPHY", "TRGY", "TSPA",
    "TSPL",
];

/// Program codes (`K…`) seen often enough to be split out of run-together
/// tag lines. Classification treats every 4-letter `K` code as a program.
pub const PROGRAM_TAGS: &[&str] = &[
    "KBCT", "KCFE", "KCIP", "KCOR", "KCRM", "KDEM", "KDRG", "KFLO", "KFLU", "KFRD", "KGHG", "KGIC",
    "KHIV", "KHLS", "KIDE", "KIPR", "KIRF", "KISL", "KJUS", "KLIG", "KMCA", "KMDR", "KMPI", "KNNP",
    "KOCI", "KOMC", "KPAL", "KPAO", "KPKO", "KPLS", "KPRP", "KRAD", "KSAF", "KSCA", "KSEP", "KSPR",
    "KSTC", "KSUM", "KTER", "KTFN", "KTIA", "KTIP", "KUNR", "KVPR", "KWBG", "KWMN",
];

/// Organisations used as tags.
pub const ORG_TAGS: &[&str] = &[
    "APEC", "ASEAN", "AUC", "CARICOM", "CERN", "COMESA", "ECOWAS", "EUN", "FATF", "G20",
    "G8", "GCC", "HAMAS", "IAEA", "ICAO", "ICC", "ICJ", "ICTR", "ICTY", "IEA",
    "IFAD", "ILO", "IMF", "IMO", "INTERPOL", "IOM", "MERCOSUR", "NAM", "NATO", "NEPAD",
    "OAS", "OECD", "OIC", "OPCW", "OPEC", "OSCE", "SAARC", "SADC", "SCO", "UN",
    "UNAMA", "UNDP", "UNEP", "UNESCO", "UNFPA", "UNGA", "UNHCR", "UNHRC", "UNICEF", "UNIFIL",
    "UNMIK", "UNODC", "UNRWA", "UNSC", "WFP", "WHO", "WIPO", "WTO", "ZANU-PF",
];

/// Multi-word tags, keyed by their space-separated words. Person pairs map
/// to `LAST, FIRST` with known middle initials.
pub const TAG_PHRASES: &[(&str, &str)] = &[
    ("BIDEN JOSEPH", "BIDEN, JOSEPH"),
    ("BUSH GEORGE", "BUSH, GEORGE W."),
    ("CLINTON HILLARY", "CLINTON, HILLARY"),
    ("CONSULAR AFFAIRS", "CONSULAR AFFAIRS"),
    ("COUNTER TERRORISM", "COUNTERTERRORISM"),
    ("COUNTRY CLEARANCE", "COUNTRY CLEARANCE"),
    ("CROS GERARD", "CROS, GERARD"),
    ("DOMESTIC POLITICS", "DOMESTIC POLITICS"),
    ("ECONOMIC AFFAIRS", "ECONOMIC AFFAIRS"),
    ("ECONOMY AND FINANCE", "ECONOMY AND FINANCE"),
    ("FOREIGN POL", "FOREIGN POL"),
    ("GAZA DISENGAGEMENT", "GAZA DISENGAGEMENT"),
    ("GLOBAL DEFENSE", "GLOBAL DEFENSE"),
    ("GOI EXTERNAL", "GOI EXTERNAL"),
    ("HUMAN RIGHTS", "HUMAN RIGHTS"),
    ("IRAQI FREEDOM", "IRAQI FREEDOM"),
    ("ISRAELI PALESTINIAN AFFAIRS", "ISRAELI PALESTINIAN AFFAIRS"),
    ("ITALIAN POLITICS", "ITALIAN POLITICS"),
    ("ITALY NATIONAL ELECTIONS", "ITALY NATIONAL ELECTIONS"),
    ("JIMENEZ GASPAR", "JIMENEZ, GASPAR"),
    ("MEDIA REACTION REPORT", "MEDIA REACTION REPORT"),
    ("MEETINGS WITH AMBASSADOR", "MEETINGS WITH AMBASSADOR"),
    ("NEW ZEALAND", "NEW ZEALAND"),
    ("NOVO GUILLERMO", "NOVO, GUILLERMO"),
    ("POLITICS FOREIGN POLICY", "POLITICS FOREIGN POLICY"),
    ("REMON PEDRO", "REMON, PEDRO"),
    ("RICE CONDOLEEZZA", "RICE, CONDOLEEZZA"),
    ("ROOD JOHN", "ROOD, JOHN"),
    ("STEINBERG JAMES", "STEINBERG, JAMES B."),
    ("TIP IN TURKEY", "TIP IN TURKEY"),
    ("ZOELLICK ROBERT", "ZOELLICK, ROBERT"),
];

/// Longest phrase in `TAG_PHRASES`, in words.
pub const MAX_PHRASE_WORDS: usize = 3;

/// Misspelled tags and their corrections.
pub const TAG_CORRECTIONS: &[(&str, &str)] = &[
    ("MOPPS", "MOPS"),
    ("PGOVT", "PGOV"),
    ("PHUMS", "PHUM"),
    ("PRELL", "PREL"),
    ("UNDESCO", "UNESCO"),
];

/// Codes accepted as 4-letter segments when splitting run-together tags.
pub fn is_four_letter_code(token: &str) -> bool {
    token.len() == 4
        && (SUBJECT_TAGS.binary_search(&token).is_ok() || PROGRAM_TAGS.binary_search(&token).is_ok())
}

pub fn is_subject_tag(token: &str) -> bool {
    SUBJECT_TAGS.binary_search(&token).is_ok()
}

pub fn is_org_tag(token: &str) -> bool {
    ORG_TAGS.binary_search(&token).is_ok()
}

/// Canonical form of a multi-word tag given its space-joined words.
pub fn tag_phrase(words: &str) -> Option<&'static str> {
    super::lookup(TAG_PHRASES, words)
}

pub fn corrected_tag(tag: &str) -> Option<&'static str> {
    super::lookup(TAG_CORRECTIONS, tag)
}
