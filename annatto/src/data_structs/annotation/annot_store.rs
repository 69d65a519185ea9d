use indexmap::IndexMap;

use crate::data_structs::annotation::Feature;
use crate::error::{Error, Result};

/// The per-sequence collection of [`Feature`]s produced by merging one or
/// more tools' outputs.
///
/// Features are keyed by their identifier and iterate in insertion order.
/// The set owns its features exclusively; it is scoped to exactly one
/// sequence, which pairs it with a sequence id externally.
#[derive(Debug, Clone, Default)]
pub struct AnnotationSet {
    features: IndexMap<String, Feature>,
    next_id:  u64,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a feature, assigning a `feature_N` identifier when the
    /// feature does not declare one.
    ///
    /// Returns the identifier under which the feature was stored. A
    /// duplicate declared identifier is a [`Error::MergeConflict`].
    pub fn insert(
        &mut self,
        mut feature: Feature,
    ) -> Result<String> {
        let id = match feature.id() {
            Some(id) => {
                if self.features.contains_key(id.as_str()) {
                    return Err(Error::MergeConflict(id.as_str().to_string()));
                }
                id.as_str().to_string()
            },
            None => {
                let id = self.fresh_id();
                feature.set_assigned_id(id.clone());
                id
            },
        };
        self.features.insert(id.clone(), feature);
        Ok(id)
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = format!("feature_{}", self.next_id);
            self.next_id += 1;
            if !self.features.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(
        &self,
        id: &str,
    ) -> Option<&Feature> {
        self.features.get(id)
    }

    /// Removes a feature by identifier, preserving the order of the rest.
    pub fn remove(
        &mut self,
        id: &str,
    ) -> Option<Feature> {
        self.features.shift_remove(id)
    }

    /// Replaces an existing feature in place, keeping its position in the
    /// iteration order. The replacement takes over the identifier,
    /// including its declared/assigned status, so later merges still
    /// detect declared-id conflicts.
    pub fn replace(
        &mut self,
        id: &str,
        mut feature: Feature,
    ) -> Result<()> {
        let current = self.features.get(id).ok_or_else(|| {
            Error::Configuration(format!("cannot replace unknown feature `{}`", id))
        })?;
        match current.id() {
            Some(fid) => feature.set_id(fid.clone()),
            None => feature.set_assigned_id(id.to_string()),
        }
        self.features.insert(id.to_string(), feature);
        Ok(())
    }

    /// Iterates features in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Feature)> {
        self.features.iter().map(|(id, f)| (id.as_str(), f))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Feature)> {
        self.features.iter_mut().map(|(id, f)| (id.as_str(), f))
    }

    /// Iterates features matching a metadata predicate.
    pub fn filter<'a, F>(
        &'a self,
        predicate: F,
    ) -> impl Iterator<Item = (&'a str, &'a Feature)>
    where
        F: Fn(&Feature) -> bool + 'a, {
        self.iter().filter(move |(_, f)| predicate(f))
    }

    /// Structural union with another set belonging to the same sequence.
    ///
    /// Features keep their relative order, `other`'s after `self`'s.
    /// Colliding assigned identifiers from `other` are renumbered
    /// deterministically; a collision between two declared identifiers
    /// cannot be resolved automatically and fails the merge.
    pub fn merge(
        &mut self,
        other: AnnotationSet,
    ) -> Result<()> {
        for (id, mut feature) in other.features {
            if self.features.contains_key(&id) {
                match feature.id() {
                    Some(fid) if fid.is_declared() => {
                        return Err(Error::MergeConflict(id));
                    },
                    _ => {
                        feature.clear_id();
                    },
                }
            }
            self.insert(feature)?;
        }
        Ok(())
    }
}
