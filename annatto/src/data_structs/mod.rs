//! Core data structures of the annotation model.
//!
//! - [`annotation`]: the canonical per-sequence annotation model —
//!   [`Feature`], [`FeatureAttributes`] and the owning [`AnnotationSet`].
//! - [`coords`]: the zero-based half-open [`Interval`].
//! - Common enumerations: [`Strand`] and [`Kingdom`].

pub mod annotation;
pub mod coords;
pub mod enums;

pub use annotation::{AnnotationSet, Feature, FeatureAttributes, FeatureId};
pub use coords::Interval;
pub use enums::{Kingdom, Strand};
