use serde::{Deserialize, Serialize};

use super::enums::TagKind;
use crate::pipeline::extraction::tags::tag_kind;

/// A canonical TAGS token with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub kind: TagKind,
    pub value: String,
}

impl Tag {
    /// Classify `value` with the tag-kind rules.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            kind: tag_kind(&value),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_on_construction() {
        assert_eq!(Tag::new("FR").kind, TagKind::Geo);
        assert_eq!(Tag::new("STEINBERG, JAMES B.").kind, TagKind::Person);
        assert_eq!(Tag::new("KFLU").kind, TagKind::Program);
        assert_eq!(Tag::new("PREL").kind, TagKind::Subject);
        assert_eq!(Tag::new("NATO").kind, TagKind::Org);
        assert_eq!(Tag::new("SOMETHING").kind, TagKind::Unknown);
    }
}
