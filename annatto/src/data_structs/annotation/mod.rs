mod annot_store;
mod feature;

pub use annot_store::AnnotationSet;
pub use feature::{Feature, FeatureAttributes, FeatureId};

#[cfg(test)]
mod tests;
