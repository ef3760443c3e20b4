pub mod identifiers;
pub mod resolved;
pub mod timestamp;

pub use identifiers::{StixId, StixIdError};
pub use resolved::Resolved;
