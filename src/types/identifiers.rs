use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

/// A STIX identifier of the form `<object-type>--<uuid>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StixId(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StixIdError {
    #[error("Malformed STIX identifier: {0:?}")]
    Malformed(String),
}

impl StixId {
    /// Validate and wrap an identifier string.
    ///
    /// Both the object type and the uuid part must be non-empty. The uuid
    /// part is not checked further; producers in the wild are not uniform.
    pub fn parse(s: impl Into<String>) -> Result<Self, StixIdError> {
        let s = s.into();
        let valid = matches!(
            s.split_once("--"),
            Some((kind, uuid)) if !kind.is_empty() && !uuid.is_empty()
        );
        if !valid {
            return Err(StixIdError::Malformed(s));
        }
        Ok(StixId(s))
    }

    /// A new identifier for `object_type` with a random (v4) uuid part.
    pub fn random(object_type: &str) -> Self {
        StixId(format!("{object_type}--{}", Uuid::new_v4()))
    }

    /// Derive an identifier for `object_type` from seed bytes.
    ///
    /// The uuid part is the first 16 bytes of SHA-256(type || 0x00 || seed),
    /// with version and variant bits set as for a name-based UUID.
    pub fn derive(object_type: &str, seed: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(object_type.as_bytes());
        hasher.update([0u8]);
        hasher.update(seed);
        let hash = hasher.finalize();

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&hash[..16]);
        bytes[6] = (bytes[6] & 0x0f) | 0x50;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        let hex = hex::encode(bytes);
        StixId(format!(
            "{object_type}--{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32],
        ))
    }

    /// The `<object-type>` prefix.
    pub fn object_type(&self) -> &str {
        self.0.split_once("--").map_or(self.0.as_str(), |(kind, _)| kind)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StixId {
    type Error = StixIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StixId::parse(value)
    }
}

impl TryFrom<&str> for StixId {
    type Error = StixIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        StixId::parse(value)
    }
}

impl From<StixId> for String {
    fn from(id: StixId) -> Self {
        id.0
    }
}

impl fmt::Display for StixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
