//! Diplomatic posts that may originate a cable.
//!
//! The station list is the closed set of origins seen in the corpus. It is
//! kept sorted so membership is a binary search.

/// Shortest station name (`ROME`).
pub const MIN_ORIGIN_LENGTH: usize = 4;
/// Longest station name (`BANDARSERIBEGAWAN`).
pub const MAX_ORIGIN_LENGTH: usize = 17;

pub const STATIONS: &[&str] = &[
    "ABIDJAN", "ABUDHABI", "ABUJA", "ACCRA", "ADANA", "ADDISABABA", "AITTAIPEI", "ALEXANDRIA",
    "ALGIERS", "ALMATY", "AMMAN", "AMSTERDAM", "ANKARA", "ANTANANARIVO", "APIA", "ASHGABAT",
    "ASMARA", "ASTANA", "ASUNCION", "ATHENS", "AUCKLAND", "BAGHDAD", "BAKU", "BAMAKO",
    "BANDARSERIBEGAWAN", "BANGKOK", "BANGUI", "BANJUL", "BARCELONA", "BASRAH", "BEIJING",
    "BEIRUT", "BELFAST", "BELGRADE", "BELIZE", "BELMOPAN", "BENIN", "BERLIN", "BERN", "BISHKEK",
    "BOGOTA", "BONN", "BRASILIA", "BRATISLAVA", "BRAZZAVILLE", "BRIDGETOWN", "BRUSSELS",
    "BUCHAREST", "BUDAPEST", "BUENOSAIRES", "BUJUMBURA", "CAIRO", "CALCUTTA", "CALGARY",
    "CANBERRA", "CAPETOWN", "CARACAS", "CASABLANCA", "CDC", "CDCATLANTAGA", "CDGENEVA",
    "CHARLESTON", "CHENGDU", "CHENNAI", "CHIANGMAI", "CHISINAU", "CIUDADJUAREZ", "COLOMBO",
    "CONAKRY", "COPENHAGEN", "COTONOU", "CURACAO", "DAKAR", "DAMASCCUS", "DAMASCUS",
    "DARESSALAAM", "DHAHRAN", "DHAKA", "DILI", "DJIBOUTI", "DOHA", "DUBAI", "DUBLIN", "DURBAN",
    "DUSHANBE", "DUSSELDORF", "FESTTWO", "FLORENCE", "FRANKFURT", "FREETOWN", "FSINFATC",
    "FUKUOKA", "GABORONE", "GENEVA", "GEORGETOWN", "GRENADA", "GUADALAJARA", "GUANGZHOU",
    "GUATEMALA", "GUAYAQUIL", "HALIFAX", "HAMBURG", "HAMILTON", "HANOI", "HARARE", "HAVANA",
    "HELSINKI", "HERMOSILLO", "HILLAH", "HOCHIMINHCITY", "HONGKONG", "HYDERABAD",
    "IRANRPODUBAI", "ISLAMABAD", "ISTANBUL", "IZMIR", "JAKARTA", "JEDDAH", "JERUSALEM",
    "JOHANNESBURG", "KABUL", "KADUNA", "KAMPALA", "KARACHI", "KATHMANDU", "KHARTOUM", "KIEV",
    "KIGALI", "KINGSTON", "KINSHASA", "KIRKUK", "KOLKATA", "KOLONIA", "KOROR", "KRAKOW",
    "KUALALUMPUR", "KUWAIT", "KYIV", "LAGOS", "LAHORE", "LAPAZ", "LEIPZIG", "LENINGRAD",
    "LIBREVILLE", "LILONGWE", "LIMA", "LISBON", "LJUBLJANA", "LOME", "LONDON", "LUANDA",
    "LUSAKA", "LUXEMBOURG", "MADRAS", "MADRID", "MAJURO", "MALABO", "MANAGUA", "MANAMA",
    "MANILA", "MAPUTO", "MARSEILLE", "MASERU", "MATAMOROS", "MBABANE", "MELBOURNE", "MERIDA",
    "MEXICO", "MILAN", "MINSK", "MOGADISHU", "MONROVIA", "MONTEREY", "MONTERREY", "MONTEVIDEO",
    "MONTREAL", "MOSCOW", "MOSUL", "MUMBAI", "MUNICH", "MUSCAT", "NAGOYA", "NAHA", "NAIROBI",
    "NAPLES", "NASSAU", "NDJAMENA", "NEWDELHI", "NIAMEY", "NICOSIA", "NOGALES", "NOUAKCHOTT",
    "NUEVOLAREDO", "OSAKAKOBE", "OSLO", "OTTAWA", "OUAGADOUGOU", "PANAMA", "PARAMARIBO",
    "PARIS", "PARISFR", "PARTO", "PERTH", "PESHAWAR", "PHNOMPENH", "PODGORICA", "PONTADELGADA",
    "PORTAUPRINCE", "PORTLOUIS", "PORTMORESBY", "PORTOFSPAIN", "PRAGUE", "PRAIA", "PRETORIA",
    "PRISTINA", "QUEBEC", "QUITO", "RABAT", "RANGOON", "RECIFE", "REYKJAVIK", "RIGA",
    "RIODEJANEIRO", "RIYADH", "ROME", "RPODUBAI", "SANAA", "SANJOSE", "SANSALVADOR", "SANTIAGO",
    "SANTODOMINGO", "SAOPAULO", "SAPPORO", "SARAJEVO", "SECDEF", "SEOUL", "SHANGHAI",
    "SHENYANG", "SINGAPORE", "SKOPJE", "SOFIA", "STATE", "STOCKHOLM", "STPETERSBURG",
    "STRASBOURG", "SURABAYA", "SUVA", "SYDNEY", "TAIPEI", "TALLINN", "TASHKENT", "TBILISI",
    "TEGUCIGALPA", "TEHRAN", "TELAVIV", "THEHAGUE", "THESSALONIKI", "TIJUANA", "TIRANA",
    "TOKYO", "TORONTO", "TRIPOLI", "TUNIS", "ULAANBAATAR", "UNESCOPARIS", "UNESCOPARISFR",
    "UNROME", "UNVIEVIENNA", "USCBP", "USDAFAS", "USDOC", "USDOJ", "USEUBRUSSELS", "USNATO",
    "USOSCE", "USTRGENEVA", "USUNNEWYORK", "VALLETTA", "VANCOUVER", "VATICAN", "VIENNA",
    "VIENTIANE", "VILNIUS", "VLADIVOSTOK", "WARSAW", "WASHDC", "WELLINGTON", "WHITEHOUSE",
    "WINDHOEK", "YAOUNDE", "YEKATERINBURG", "YEREVAN", "ZAGREB",
];

/// Spellings found in REF blocks that name a station without being one.
/// Multi-word spellings are stored with their spaces removed.
const STATION_ALIASES: &[(&str, &str)] = &[
    ("0TTAWA", "OTTAWA"),
    ("BA", "BUENOSAIRES"),
    ("BISHTEK", "BISHKEK"),
    ("BRASILA", "BRASILIA"),
    ("BRAZIL", "BRASILIA"),
    ("HAGUE", "THEHAGUE"),
    ("HCMC", "HOCHIMINHCITY"),
    ("MEXICOCITY", "MEXICO"),
    ("PHNOMPEN", "PHNOMPENH"),
    ("RIO", "RIODEJANEIRO"),
    ("RIODEJAN", "RIODEJANEIRO"),
    ("SANTIAG0", "SANTIAGO"),
    ("SAOPAUL", "SAOPAULO"),
    ("SAOPAUO", "SAOPAULO"),
    ("SECSTATE", "STATE"),
    ("SECTSTATE", "STATE"),
    ("TRIPOLII", "TRIPOLI"),
    ("UNVIE", "UNVIEVIENNA"),
    ("USUNESCOPARISFR", "UNESCOPARISFR"),
    ("USUNNEYORK", "USUNNEWYORK"),
    ("VAT", "VATICAN"),
    ("VATICA", "VATICAN"),
];

/// Returns `true` if `name` is a known station (case-insensitive).
pub fn is_valid_station(name: &str) -> bool {
    catalog_entry(&name.to_uppercase()).is_some()
}

/// Resolve an uppercase token to its station, honouring REF-block aliases.
pub fn resolve_station(token: &str) -> Option<&'static str> {
    catalog_entry(token).or_else(|| super::lookup(STATION_ALIASES, token))
}

/// Stations that REF blocks spell as another valid station. `PARIS FR`
/// citations point at the UNESCO mission's cables.
const CITED_STATION_OVERRIDES: &[(&str, &str)] = &[("PARISFR", "UNESCOPARISFR")];

/// Like [`resolve_station`], for a station named inside a REF block.
pub fn resolve_cited_station(token: &str) -> Option<&'static str> {
    super::lookup(CITED_STATION_OVERRIDES, token).or_else(|| resolve_station(token))
}

fn catalog_entry(name: &str) -> Option<&'static str> {
    STATIONS.binary_search(&name).ok().map(|i| STATIONS[i])
}

/// Station names ordered longest first, for regex alternations that must
/// not stop at a shorter prefix (`PARIS` inside `PARISFR`).
pub fn stations_longest_first() -> Vec<&'static str> {
    let mut names = STATIONS.to_vec();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    names
}
