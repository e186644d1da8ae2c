use serde::{Deserialize, Serialize};

use super::cable_id::CanonicalCableId;
use super::enums::ReferenceKind;

/// A citation found in a cable's REF block.
///
/// Cable references carry a canonical id as their value; every other kind
/// keeps the cited fragment as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub kind: ReferenceKind,
    pub value: String,
}

impl Reference {
    pub fn new(kind: ReferenceKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn cable(id: &CanonicalCableId) -> Self {
        Self::new(ReferenceKind::Cable, id.to_string())
    }

    pub fn is_cable(&self) -> bool {
        self.kind == ReferenceKind::Cable
    }

    /// The cited cable, if this is a cable reference.
    pub fn cable_id(&self) -> Option<CanonicalCableId> {
        if self.is_cable() {
            self.value.parse().ok()
        } else {
            None
        }
    }
}
