use std::fmt::{self, Write as _};
use std::str::FromStr;

use hashbrown::HashMap;
use itertools::Itertools;

use crate::data_structs::coords::Interval;
use crate::data_structs::enums::Strand;
use crate::with_field_fn;

/// Metadata attached to a [`Feature`].
///
/// Recognized keys are typed fields; anything a tool reports beyond them is
/// kept verbatim in the open `other` map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureAttributes {
    pub feature_type: Option<String>,
    pub source:       Option<String>,
    pub product:      Option<String>,
    pub db_xref:      Option<String>,
    pub gene_id:      Option<String>,
    pub confidence:   Option<String>,
    pub translation:  Option<String>,
    pub sequence:     Option<String>,
    pub other:        HashMap<String, String>,
}

impl FeatureAttributes {
    with_field_fn!(feature_type, String);

    with_field_fn!(source, String);

    with_field_fn!(product, String);

    with_field_fn!(db_xref, String);

    with_field_fn!(gene_id, String);

    with_field_fn!(confidence, String);

    with_field_fn!(translation, String);

    with_field_fn!(sequence, String);

    pub fn with_other(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.other.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for FeatureAttributes {
    /// Serializes as `key=value;...`, recognized keys first, then the open
    /// map in sorted order.
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut out = String::with_capacity(64);

        macro_rules! write_attr {
            ($field:expr, $key:literal) => {
                if let Some(val) = $field.as_ref() {
                    if !out.is_empty() {
                        out.push(';');
                    }
                    write!(out, "{}={}", $key, val)?;
                }
            };
        }

        write_attr!(self.feature_type, "type");
        write_attr!(self.source, "source");
        write_attr!(self.product, "product");
        write_attr!(self.db_xref, "db_xref");
        write_attr!(self.gene_id, "gene_id");
        write_attr!(self.confidence, "confidence");
        write_attr!(self.translation, "translation");
        write_attr!(self.sequence, "sequence");

        for (k, v) in self.other.iter().sorted_unstable_by_key(|(k, _)| *k) {
            if !out.is_empty() {
                out.push(';');
            }
            write!(out, "{}={}", k, v)?;
        }

        write!(f, "{}", out)
    }
}

impl FromStr for FeatureAttributes {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut attributes = FeatureAttributes::default();
        for pair in s.split(';') {
            if pair.is_empty() {
                continue;
            }
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default().to_string();

            match key {
                "type" => attributes.feature_type = Some(value),
                "source" => attributes.source = Some(value),
                "product" => attributes.product = Some(value),
                "db_xref" => attributes.db_xref = Some(value),
                "gene_id" => attributes.gene_id = Some(value),
                "confidence" => attributes.confidence = Some(value),
                "translation" => attributes.translation = Some(value),
                "sequence" => attributes.sequence = Some(value),
                other => {
                    attributes.other.insert(other.to_string(), value);
                },
            }
        }
        Ok(attributes)
    }
}

/// Identifier of a feature within its owning [`AnnotationSet`].
///
/// Declared ids come from the tool output itself (a TransTermHP terminator
/// label, a gene-finder locus tag); assigned ids are handed out by the set
/// at insertion time. Merge treats the two differently: colliding assigned
/// ids are renumbered, colliding declared ids are a hard conflict.
///
/// [`AnnotationSet`]: super::AnnotationSet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureId {
    Declared(String),
    Assigned(String),
}

impl FeatureId {
    pub fn as_str(&self) -> &str {
        match self {
            FeatureId::Declared(s) | FeatureId::Assigned(s) => s.as_str(),
        }
    }

    pub fn is_declared(&self) -> bool {
        matches!(self, FeatureId::Declared(_))
    }
}

/// One annotated genomic element: an ordered list of intervals (one for
/// contiguous features), a strand, and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    id:         Option<FeatureId>,
    bounds:     Vec<Interval>,
    strand:     Strand,
    attributes: FeatureAttributes,
}

impl Feature {
    /// Creates a feature without an identifier; one is assigned when the
    /// feature is inserted into an [`AnnotationSet`].
    ///
    /// Panics on empty bounds.
    ///
    /// [`AnnotationSet`]: super::AnnotationSet
    pub fn new(
        bounds: Vec<Interval>,
        strand: Strand,
        attributes: FeatureAttributes,
    ) -> Self {
        assert!(!bounds.is_empty(), "A feature must cover at least one interval");
        Self {
            id: None,
            bounds,
            strand,
            attributes,
        }
    }

    /// Creates a feature with a tool-declared identifier.
    pub fn with_id(
        id: impl Into<String>,
        bounds: Vec<Interval>,
        strand: Strand,
        attributes: FeatureAttributes,
    ) -> Self {
        let mut feature = Self::new(bounds, strand, attributes);
        feature.id = Some(FeatureId::Declared(id.into()));
        feature
    }

    pub fn id(&self) -> Option<&FeatureId> {
        self.id.as_ref()
    }

    pub(super) fn set_assigned_id(
        &mut self,
        id: String,
    ) {
        self.id = Some(FeatureId::Assigned(id));
    }

    pub(super) fn set_id(
        &mut self,
        id: FeatureId,
    ) {
        self.id = Some(id);
    }

    pub(super) fn clear_id(&mut self) {
        self.id = None;
    }

    pub fn bounds(&self) -> &[Interval] {
        &self.bounds
    }

    /// Returns the overall span from the first interval's start to the last
    /// interval's end.
    pub fn span(&self) -> Interval {
        Interval::new(
            self.bounds[0].start(),
            self.bounds[self.bounds.len() - 1].end(),
        )
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn attributes(&self) -> &FeatureAttributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut FeatureAttributes {
        &mut self.attributes
    }

    pub fn feature_type(&self) -> Option<&str> {
        self.attributes.feature_type.as_deref()
    }

    pub fn is_cds(&self) -> bool {
        self.feature_type() == Some("CDS")
    }
}
