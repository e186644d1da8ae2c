use serde::{Deserialize, Serialize};

use crate::pipeline::extraction::ExtractionError;

/// Macro to generate enum with as_str + code + std::str::FromStr pattern.
/// Codes are the numeric kinds used throughout the cable corpus.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal = $code:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            pub fn code(&self) -> u8 {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant)),+,
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ExtractionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ExtractionError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(ReferenceKind {
    Unknown => "unknown" = 0,
    Cable => "cable" = 1,
    Email => "email" = 2,
    Book => "book" = 3,
    Tel => "tel" = 4,
    Report => "report" = 5,
    Fax => "fax" = 6,
    Memo => "memo" = 7,
    Meeting => "meeting" = 8,
    Web => "web" = 9,
});

str_enum!(TagKind {
    Unknown => "unknown" = 0,
    Subject => "subject" = 1,
    Person => "person" = 2,
    Program => "program" = 3,
    Geo => "geo" = 4,
    Org => "org" = 5,
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn reference_kind_round_trip() {
        for (variant, s, code) in [
            (ReferenceKind::Unknown, "unknown", 0),
            (ReferenceKind::Cable, "cable", 1),
            (ReferenceKind::Email, "email", 2),
            (ReferenceKind::Book, "book", 3),
            (ReferenceKind::Tel, "tel", 4),
            (ReferenceKind::Report, "report", 5),
            (ReferenceKind::Fax, "fax", 6),
            (ReferenceKind::Memo, "memo", 7),
            (ReferenceKind::Meeting, "meeting", 8),
            (ReferenceKind::Web, "web", 9),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(variant.code(), code);
            assert_eq!(ReferenceKind::from_str(s).unwrap(), variant);
            assert_eq!(ReferenceKind::from_code(code), Some(variant));
        }
    }

    #[test]
    fn tag_kind_round_trip() {
        for (variant, s, code) in [
            (TagKind::Unknown, "unknown", 0),
            (TagKind::Subject, "subject", 1),
            (TagKind::Person, "person", 2),
            (TagKind::Program, "program", 3),
            (TagKind::Geo, "geo", 4),
            (TagKind::Org, "org", 5),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(variant.code(), code);
            assert_eq!(TagKind::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn unknown_strings_and_codes_rejected() {
        assert!(ReferenceKind::from_str("telegram").is_err());
        assert!(TagKind::from_str("GEO").is_err());
        assert_eq!(ReferenceKind::from_code(10), None);
    }

    #[test]
    fn serde_uses_snake_case_names() {
        assert_eq!(serde_json::to_string(&ReferenceKind::Meeting).unwrap(), "\"meeting\"");
        let kind: TagKind = serde_json::from_str("\"program\"").unwrap();
        assert_eq!(kind, TagKind::Program);
    }
}
