use std::io::Read;

use serde::{Deserialize, Serialize};

use super::localized::Localized;
use super::stix_object::{ObjectError, StixObject};
use crate::types::identifiers::StixId;

pub const BUNDLE_TYPE: &str = "bundle";

/// A STIX bundle: a flat collection of objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(rename = "type")]
    kind: String,
    id: StixId,
    #[serde(default)]
    objects: Vec<StixObject>,
}

impl Bundle {
    /// Wrap `objects`, deriving the bundle id from their ids.
    pub fn new(objects: Vec<StixObject>) -> Self {
        let seed: Vec<&str> = objects.iter().map(|o| o.id().as_str()).collect();
        Self {
            kind: BUNDLE_TYPE.to_string(),
            id: StixId::derive(BUNDLE_TYPE, seed.join("\n").as_bytes()),
            objects,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ObjectError> {
        serde_json::from_str::<Bundle>(json)?.checked()
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ObjectError> {
        serde_json::from_reader::<_, Bundle>(reader)?.checked()
    }

    fn checked(self) -> Result<Self, ObjectError> {
        if self.kind != BUNDLE_TYPE {
            return Err(ObjectError::UnexpectedType {
                expected: BUNDLE_TYPE,
                found: self.kind,
            });
        }
        Ok(self)
    }

    pub fn id(&self) -> &StixId {
        &self.id
    }

    pub fn objects(&self) -> &[StixObject] {
        &self.objects
    }

    pub fn get(&self, id: &StixId) -> Option<&StixObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn of_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a StixObject> + 'a {
        self.objects.iter().filter(move |o| o.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_bundle_json() {
        let err = Bundle::from_json(
            r#"{"type": "report", "id": "report--f26964ea-5a35-4baa-8fb4-31edded1cbd2"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ObjectError::UnexpectedType { found, .. } if found == "report"));
    }

    #[test]
    fn finds_objects_by_id_and_type() {
        let a = StixObject::new(StixId::parse("campaign--aaaa").unwrap());
        let b = StixObject::new(StixId::parse("identity--bbbb").unwrap());
        let bundle = Bundle::new(vec![a.clone(), b]);

        assert_eq!(bundle.get(a.id()), Some(&a));
        assert_eq!(bundle.of_type("identity").count(), 1);
        assert_eq!(bundle.id().object_type(), "bundle");
    }
}
