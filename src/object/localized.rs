use chrono::{DateTime, Utc};

use super::stix_object::ObjectError;
use crate::types::identifiers::StixId;

/// What a resolver reads from a base document.
///
/// Implementors never get mutated through this trait; all writes go to
/// translation layers.
pub trait Localized {
    fn id(&self) -> &StixId;

    /// Version marker used to address translation layers.
    fn modified(&self) -> Option<DateTime<Utc>>;

    /// Document-level language, if the object declares one.
    fn lang(&self) -> Option<&str>;

    /// Text of `field` in the object's own language.
    fn text(&self, field: &str) -> Result<&str, ObjectError>;

    /// Language a field-level annotation assigns to `field`.
    ///
    /// Advisory: any problem reading the annotations yields `None`.
    fn field_lang(&self, _field: &str) -> Option<&str> {
        None
    }
}
