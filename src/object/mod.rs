pub mod bundle;
pub mod localized;
pub mod stix_object;

mod markings;

pub use crate::types::identifiers::StixId;
pub use bundle::Bundle;
pub use localized::Localized;
pub use stix_object::{ObjectError, StixObject};
