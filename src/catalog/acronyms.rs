//! Acronyms and hand-cased compounds for subject title-casing.

/// Tokens kept upper-case in titles. Matched case-insensitively, with
/// optional surrounding punctuation and possessive endings.
pub const ACRONYMS: &[&str] = &[
    "AFRICOM", "AIDS", "AIT", "ANC", "APEC", "ASEAN", "AU", "BWC", "CDA", "CIA",
    "CODEL", "CT", "CWC", "CWS", "CWS/BWC", "DAS", "DCM", "DDR", "DHS", "DPRK",
    "DRC", "DROC", "ECOWAS", "EU", "EUFOR", "EXBS", "FARC", "FBI", "FDP", "FM",
    "FMS", "FTA", "FTAA", "G-20", "G-8", "G20", "G8", "GAERC", "GCC", "GDP",
    "GOI", "GOL", "GON", "GOP", "GPC", "GSP", "GTMO", "HIV", "HIV/AIDS", "HMG",
    "IAEA", "ICC", "ICTY", "IDP", "II", "III", "IMF", "IPR", "IRGC", "ISAF",
    "IV", "JEM", "JSF", "KFOR", "LTTE", "MDC", "MFA", "MONUC", "MOU", "MP",
    "MTCR", "NAM", "NATO", "NGO", "NPT", "NSC", "OAS", "OECD", "OIC", "OPEC",
    "OSCE", "PA", "PCC", "PKK", "PLO", "PM", "PNG", "PRC", "PRT", "PSI",
    "ROK", "RSO", "SADC", "SCO", "SLA", "SLA/U", "SPD", "SWIFT", "TFTP", "TFTP/SWIFT",
    "U.S.", "U.S.-UK", "UAE", "UK", "UN", "UNAMA", "UNDP", "UNESCO", "UNGA", "UNHCR",
    "UNHRC", "UNIFIL", "UNMIK", "UNSC", "UNSCR", "US", "US-EU", "USAID", "USG", "USTR",
    "VARIG", "WFP", "WMD", "WTO",
];

/// Compound tokens whose casing cannot be derived from the rules.
pub const SPECIAL_WORDS: &[(&str, &str)] = &[
    ("(ART)", "(art)"),
    ("ACCESSION/EU:", "Accession/EU:"),
    ("BRAZIL-UNSC:", "Brazil-UNSC:"),
    ("CHAD/SUDAN/EUFOR:", "Chad/Sudan/EUFOR:"),
    ("DOD", "DoD"),
    ("DROC--VATICAN", "DROC--Vatican"),
    ("DUTCH/EU:", "Dutch/EU:"),
    ("DoD", "DoD"),
    ("EU-AFRICA", "EU/Africa"),
    ("EU/PAKISTAN:", "EU/Pakistan:"),
    ("EU/TURKEY:", "EU/Turkey:"),
    ("EX-GTMO", "Ex-GTMO"),
    ("Ex-IM", "Ex-IM"),
    ("FAO/WHO", "FAO/WHO"),
    ("GOH", "GoH"),
    ("IDP/REFUGEE", "IDP/Refugee"),
    ("MBZ", "MbZ"),
    ("MbZ", "MbZ"),
    ("NETHERLANDS/EU/TURKEY:", "Netherlands/EU/Turkey:"),
    ("NETHERLANDS/EU:", "Netherlands/EU:"),
    ("NETHERLANDS/JSF", "Netherlands/JSF"),
    ("NETHERLANDS/JSF:", "Netherlands/JSF:"),
    ("NSC-DIRECTED", "NSC-Directed"),
    ("PRC/IRAN:", "PRC/Iran:"),
    ("SECGEN", "SecGen"),
    ("SPAIN/CIA", "Spain/CIA"),
    ("SPAIN/CT:", "Spain/CT:"),
    ("SPAIN/ETA:", "Spain/ETA:"),
    ("SUDAN/ICC:", "Sudan/ICC:"),
    ("TURKEY-EU", "Turkey-EU"),
    ("TURKEY/EU", "Turkey/EU"),
    ("U.S.-FRANCE-EU", "U.S.-France-EU"),
    ("UK-BASED", "UK-Based"),
    ("US-BRAZIL", "US-Brazil"),
    ("US-IRAN", "US-Iran"),
    ("US-LIBYAN", "US-Libyan"),
];

pub fn special_word(word: &str) -> Option<&'static str> {
    super::lookup(SPECIAL_WORDS, word)
}
