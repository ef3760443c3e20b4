//! Language-preference resolution for STIX objects.
//!
//! A [`Resolver`] reads the properties of one STIX object in the caller's
//! preferred languages. It consults field-level `granular_markings`
//! language annotations, the object's own `lang`, and a stack of
//! `language-content` translation layers, most recently attached first.
//! Resolution is a pure, synchronous function of the object, the layers and
//! the preference list; identical inputs always produce identical results.

pub mod layer;
pub mod object;
pub mod resolver;
pub mod types;

pub use layer::{Contents, LanguageContent, LayerError};
pub use object::{Bundle, Localized, ObjectError, StixObject};
pub use resolver::{AttachLayer, Languages, ResolveError, Resolver, ResolverConfig};
pub use types::{Resolved, StixId};
