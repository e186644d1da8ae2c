//! Cable identifiers known to be wrong in the published corpus.
//!
//! Both tables are sorted by the wrong identifier. Entries must match the
//! corpus byte for byte, so they are never derived or fuzzily matched.

/// Identifiers published twice: once wrong, once right. Maps the wrong
/// identifier to the correct one.
pub const MALFORMED_CABLE_IDS: &[(&str, &str)] = &[
    ("06AITTAIPIE2654", "06TAIPEI2654"),
    ("06ANOI582", "06HANOI582"),
    ("06ASTANA", "06ASTANA204"),
    ("06BELGADE856", "06BELGRADE856"),
    ("06BRAILIA1079", "06BRASILIA1079"),
    ("06HONGKOG2054", "06HONGKONG2054"),
    ("06LINSK1234", "06MINSK1234"),
    ("06MAAMA2067", "06MANAMA2067"),
    ("06MADRID002583ZFR2585", "06MADRID2583"),
    ("06MAILA1222", "06MANILA1222"),
    ("06MILSK1226", "06MINSK1226"),
    ("06MINSI225", "06MINSK225"),
    ("06NDJAENA1382", "06NDJAMENA1382"),
    ("06PORTOFPAIN568", "06PORTOFSPAIN568"),
    ("06SARAEVO2307", "06SARAJEVO2307"),
    ("07ANILA1702", "07MANILA1702"),
    ("07ARAJEVO753", "07SARAJEVO753"),
    ("07BRASIIA1568", "07BRASILIA1568"),
    ("07EFTOSANAA2300", "07SANAA2300"),
    ("07GEORGETON514", "07GEORGETOWN514"),
    ("07OSLO000160ZDK164", "07OSLO160"),
    ("07POTAUPRINCE943", "07PORTAUPRINCE943"),
    ("07QXICO3307", "07MEXICO3307"),
    ("07RUSSELS1548", "07BRUSSELS1548"),
    ("07SECTION02OF03EIJING483", "07BEIJING483"),
    ("07SETION02OF02BAKU1501", "07BAKU1501"),
    ("07SOIA828", "07SOFIA828"),
    ("07THEHAGE742", "07THEHAGUE742"),
    ("08BEIJIG3760", "08BEIJING3760"),
    ("08ECTION01OF02MANAMA492", "08MANAMA492"),
    ("08ECTION02OF02ATHENS959", "08ATHENS959"),
    ("08IHARTOUM1126", "08KHARTOUM1126"),
    ("08INSHASA1164", "08KINSHASA1164"),
    ("08MADRID000762ZFR763", "08MADRID762"),
    ("08SANODOMINGO1611", "08SANTODOMINGO1611"),
    ("08SANTOOMINGO1959", "08SANTODOMINGO1959"),
    ("08SCTION02OF02SAOPAULO335", "08SAOPAULO335"),
    ("08SCTION02OF04NAIROBI1373", "08NAIROBI1373"),
    ("08SECTIN01OF02BUDAPEST836", "08BUDAPEST836"),
    ("08SECTIN02OF02PORTOFSPAIN546", "08PORTOFSPAIN546"),
    ("08SECTIN03OF03KABUL3036", "08KABUL3036"),
    ("08SECTINN02OF02JAKARTA1486", "08JAKARTA1486"),
    ("08SECTIO01OF02JERUSALEM1847", "08JERUSALEM1847"),
    ("08SECTIO04OF07BEIJING3049", "08BEIJING3049"),
    ("08SECTION01GF02BISHIEK21", "08BISHKEK1021"),
    ("08SECTION01OF03CAIRO1416", "08CAIRO1416"),
    ("08SECTION01OF04HARARE754", "08HARARE754"),
    ("08SECTON01OF02BEIRUT896", "08BEIRUT896"),
    ("08SECTON02OF02TIRANA398", "08TIRANA398"),
    ("092OF5", "09STATE126780"),
    ("09BAU339", "09BAKU339"),
    ("09BEIRT96", "09BEIRUT96"),
    ("09BRUSSLS1332", "09BRUSSELS1332"),
    ("09BRUSSQLS1235", "09BRUSSELS1235"),
    ("09BUSSELS1666", "09BRUSSELS1666"),
    ("09COPENHAEN13", "09COPENHAGEN13"),
    ("09ECTION03OF05MANILA924", "09MANILA924"),
    ("09EFTORIYADH1110", "09RIYADH1110"),
    ("09EFTOSANAA433", "09SANAA433"),
    ("09KINHASA1056", "09KINSHASA1056"),
    ("09NDJAENA423", "09NDJAMENA423"),
    ("09NOUKKCHOTT514", "09NOUAKCHOTT514"),
    ("09NSSAU504", "09NASSAU504"),
    ("09SCTION02OF02PRAGUE383", "09PRAGUE383"),
    ("09SCTION08OF09NAIROBI809", "09NAIROBI809"),
    ("09SECION02OF02NAIROBI417", "09NAIROBI417"),
    ("09SECTIO01OF03BRUSSELS1363", "09BRUSSELS1363"),
    ("09SECTION01OF03BRUSSELS1234", "09USEUBRUSSELS1234"),
    ("09SECTION02F02BRUSSELS1639", "09BRUSSELS1639"),
    ("09SECTION02OF03QRIPOLI583", "09TRIPOLI583"),
    ("09SECTION0QF05HANOI297", "09HANOI297"),
    ("09SECTIOQ1OF06HARARE876", "09HARARE876"),
    ("09SECTON02OF02BRUSSELS579", "09BRUSSELS579"),
    ("09SIFIEDABUJA1673", "09ABUJA1673"),
    ("09SQCTION02OF02DUSHANBE143", "09DUSHANBE143"),
    ("09TILISI1526", "09TBILISI1526"),
    ("10AQNA272", "10ASTANA272"),
    ("10EFTOKABUL668", "10KABUL668"),
    ("10SECION03OF08VIENNA176", "10VIENNA176"),
    ("85NOFORNMOGADISHU1643", "85MOGADISHU1643"),
];

/// Wrong identifiers without a correct twin in the corpus. The value is the
/// identifier the cable would have had.
pub const INVALID_CABLE_IDS: &[(&str, &str)] = &[
    ("06ATANANARIVO1320", "06ANTANANARIVO1320"),
    ("06EFTOANKARA4972", "06ANKARA4972"),
    ("06EFTOANKARA5010", "06ANKARA5010"),
    ("06EFTOANKARA5097", "06ANKARA5097"),
    ("06EFTOATHENS1738", "06ATHENS1738"),
    ("06EFTOATHENS2950", "06ATHENS2950"),
    ("06EFTOBAKU1149", "06BAKU1149"),
    ("06EFTOBAKU1165", "06BAKU1165"),
    ("06EFTOBAKU1204", "06BAKU1204"),
    ("06EFTOBAKU1420", "06BAKU1420"),
    ("06EFTOBAKU1453", "06BAKU1453"),
    ("06EFTOBRUSSELS3952", "06BRUSSELS3952"),
    ("06EFTOCAIRO6192", "06CAIRO6192"),
    ("06EFTOCARACAS2252", "06CARACAS2252"),
    ("06EFTOCARACAS943", "06CARACAS943"),
    ("06EFTOISLAMABAD17875", "06ISLAMABAD17875"),
    ("06EFTOKABUL5893", "06KABUL5893"),
    ("06EFTOMAPUTO981", "06MAPUTO981"),
    ("06EFTOPORTMORESBY194", "06PORTMORESBY194"),
    ("06EFTOPORTMORESBY197", "06PORTMORESBY197"),
    ("06EFTOPORTMORESBY350", "06PORTMORESBY350"),
    ("06EFTOPORTMORESBY364", "06PORTMORESBY364"),
    ("06EFTORABAT1713", "06RABAT1713"),
    ("06EFTORANGOON1092", "06RANGOON1092"),
    ("06EFTOSANAA1621", "06SANAA1621"),
    ("06EFTOSANAA1996", "06SANAA1996"),
    ("06EFTOSKOPJE206", "06SKOPJE206"),
    ("06EFTOSKOPJE971", "06SKOPJE971"),
    ("06EFTOUSUNNEWYORK1560", "06USUNNEWYORK1560"),
    ("06KINSHAA1386", "06KINSHASA1386"),
    ("06SECION01OF02HARARE628", "06HARARE628"),
    ("06SECTIKN01OF03MINSK1223", "06MINSK1223"),
    ("06SECTIO03OF03MINSK1128", "06MINSK1128"),
    ("06SECTION01O02HONGKONG2311", "06HONGKONG2311"),
    ("07BUENOSQRES633", "07BUENOSAIRES633"),
    ("07DULIN903", "07DUBLIN903"),
    ("07EFTOATHENS174", "07ATHENS174"),
    ("07EFTOATHENS298", "07ATHENS298"),
    ("07EFTOATHENS299", "07ATHENS299"),
    ("07EFTOATHENS373", "07ATHENS373"),
    ("07EFTOATHENS404", "07ATHENS404"),
    ("07EFTOATHENS543", "07ATHENS543"),
    ("07EFTOATHENS781", "07ATHENS781"),
    ("07EFTOBAGHDAD1098", "07BAGHDAD1098"),
    ("07EFTOBAGHDAD1116", "07BAGHDAD1116"),
    ("07EFTOBAGHDAD867", "07BAGHDAD867"),
    ("07EFTOBUENOSAIRES1049", "07BUENOSAIRES1049"),
    ("07EFTOLAPAZ1740", "07LAPAZ1740"),
    ("07EFTOOTTAWA1217", "07OTTAWA1217"),
    ("07EFTORABAT171", "07RABAT171"),
    ("07EFTORABAT264", "07RABAT264"),
    ("07EFTORABAT521", "07RABAT521"),
    ("07EFTOSANAA588", "07SANAA588"),
    ("07EFTOSANAA784", "07SANAA784"),
    ("07EFTOUSUNNEWYORK181", "07USUNNEWYORK181"),
    ("07KAPALA518", "07KAMPALA518"),
    ("07SECTION01OF03ANKARA365", "07ANKARA365"),
    ("07SECTON03OF04DAKAR269", "07DAKAR269"),
    ("08ACCRA001382SUSPECTEDDUPLICATE1392", "08ACCRA1392"),
    ("08AITTAIPIE1698", "08AITTAIPEI1698"),
    ("08BANGOK1382", "08BANGKOK1382"),
    ("08EFTOBUENOSAIRES648", "08BUENOSAIRES648"),
    ("08EFTODAMASCUS487", "08DAMASCUS487"),
    ("08EFTOJAKARTA2073", "08JAKARTA2073"),
    ("08EFTOLONDON2883", "08LONDON2883"),
    ("08EFTOMONTEVIDEO541", "08MONTEVIDEO541"),
    ("08EFTOMONTEVIDEO718", "08MONTEVIDEO718"),
    ("08EFTOPHNOMPENH416", "08PHNOMPENH416"),
    ("08EFTOUSUNNEWYORK457", "08USUNNEWYORK457"),
    ("08FSCCHARLESTON1712", "08CHARLESTON1712"),
    ("08SECTION01F03BEIRUT1568", "08BEIRUT1568"),
    ("08SECTION01OF02CHISINAU976", "08CHISINAU976"),
    ("08THEHAGU799", "08THEHAGUE799"),
    ("0901OF02RPODUBAI288", "09DUBAI288"),
    ("09AMEMBASSYHANOI1234", "09HANOI1234"),
    ("09AMEMBASSYHANOI1246", "09HANOI1246"),
    ("09AMEMBASSYHANOI1274", "09HANOI1274"),
    ("09AMEMBASSYHANOI1284", "09HANOI1284"),
    ("09AMEMBASSYHANOI1290", "09HANOI1290"),
    ("09AMEMBASSYHANOI1292", "09HANOI1292"),
    ("09AMEMBASSYHANOI903", "09HANOI903"),
    ("09AMEMBASSYHANOI909", "09HANOI909"),
    ("09AMEMBASSYHANOI911", "09HANOI911"),
    ("09AMEMBASSYHANOI913", "09HANOI913"),
    ("09AMEMBASSYHANOI917", "09HANOI917"),
    ("09BRUSELS1292", "09USEUBRUSEELS1292"),
    ("09EFTOASMARA34", "09ASMARA34"),
    ("09EFTOASMARA373", "09ASMARA373"),
    ("09EFTOHELSINKI235", "09HELSINKI235"),
    ("09EFTOLONDON2187", "09LONDON2187"),
    ("09EFTOLONDON2211", "09LONDON2211"),
    ("09EFTOLONDON2239", "09LONDON2239"),
    ("09EFTOLONDON2240", "09LONDON2240"),
    ("09EFTOLONDON2363", "09LONDON2363"),
    ("09EFTOLONDON2468", "09LONDON2468"),
    ("09EFTOLONDON2521", "09LONDON2521"),
    ("09EFTOLONDON2618", "09LONDON2618"),
    ("09EFTOLONDON2688", "09LONDON2688"),
    ("09EFTOLONDON2858", "09LONDON2858"),
    ("09EFTOLONDON2884", "09LONDON2884"),
    ("09EFTOLONDON2905", "09LONDON2905"),
    ("09EFTOMONTEVIDEO137", "09MONTEVIDEO137"),
    ("09EFTOTRIPOLI704", "09TRIPOLI704"),
    ("09EFTOUSUNNEWYORK584", "09USUNNEWYORK584"),
    ("09EFTOYEREVAN540", "09YEREVAN540"),
    ("09EFTOYEREVAN559", "09YEREVAN559"),
    ("09EFTOYEREVAN677", "09YEREVAN677"),
    ("09EFTOYEREVAN678", "09YEREVAN678"),
    ("09EFTOYEREVAN874", "09YEREVAN874"),
    ("09GUATEMLA692", "09GUATEMALA692"),
    ("09SECTIO01OF02NDJAMENA530", "09NDJAMENA530"),
    ("09SECTION01OF03SANJOSE525", "09SANJOSE525"),
    ("10EFTOBANDARSERIBEGAWAN24", "10BANDARSERIBEGAWAN24"),
    ("10EFTOKABUL597", "10KABUL597"),
    ("10EFTOLONDON16", "10LONDON16"),
    ("10EFTOLONDON223", "10LONDON223"),
    ("10EFTOLONDON224", "10LONDON224"),
    ("7575LIBREVILLE1895", "75LIBREVILLE1895"),
    ("90STATE255195TOSEC140301", "90STATE255195"),
    ("90STATE255291TOSEC140303", "90STATE255291"),
    ("90STATE255577TOSEC140323", "90STATE255577"),
    ("90STATE255723TOSEC140328", "90STATE255723"),
    ("94STATE183691TOSEC140193", "94STATE183691"),
];

/// Correct identifier for a malformed one with a known equivalent.
pub fn corrected_id(reference_id: &str) -> Option<&'static str> {
    super::lookup(MALFORMED_CABLE_IDS, reference_id)
}

/// Identifier an invalid cable would have had, if it is listed.
pub fn suggested_id(reference_id: &str) -> Option<&'static str> {
    super::lookup(INVALID_CABLE_IDS, reference_id)
}
