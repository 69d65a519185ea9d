use std::str::FromStr;

use super::*;
use crate::data_structs::coords::Interval;
use crate::data_structs::enums::Strand;

fn feature(
    start: u64,
    end: u64,
    kind: &str,
) -> Feature {
    Feature::new(
        vec![Interval::new(start, end)],
        Strand::Forward,
        FeatureAttributes::default().with_feature_type(kind),
    )
}

#[test]
fn test_attributes_display() {
    let attrs = FeatureAttributes::default()
        .with_feature_type("rRNA")
        .with_source("Rfam")
        .with_product("16s_rRNA")
        .with_other("ncRNA_class", "SSU_rRNA_bacteria");

    assert_eq!(
        attrs.to_string(),
        "type=rRNA;source=Rfam;product=16s_rRNA;ncRNA_class=SSU_rRNA_bacteria"
    );
}

#[test]
fn test_attributes_from_str() {
    let parsed =
        FeatureAttributes::from_str("type=CDS;db_xref=UniRef100_P0A7G6;note=hypothetical")
            .unwrap();

    assert_eq!(parsed.feature_type.as_deref(), Some("CDS"));
    assert_eq!(parsed.db_xref.as_deref(), Some("UniRef100_P0A7G6"));
    assert_eq!(parsed.other.get("note").map(String::as_str), Some("hypothetical"));
}

#[test]
fn test_insert_assigns_ids_in_order() {
    let mut set = AnnotationSet::new();
    let a = set.insert(feature(0, 10, "CDS")).unwrap();
    let b = set.insert(feature(20, 30, "tRNA")).unwrap();

    assert_eq!(a, "feature_0");
    assert_eq!(b, "feature_1");
    let order: Vec<_> = set.iter().map(|(id, _)| id.to_string()).collect();
    assert_eq!(order, vec!["feature_0", "feature_1"]);
}

#[test]
fn test_declared_id_is_kept() {
    let mut set = AnnotationSet::new();
    let term = Feature::with_id(
        "TERM_1",
        vec![Interval::new(99, 120)],
        Strand::Reverse,
        FeatureAttributes::default().with_feature_type("terminator"),
    );
    assert_eq!(set.insert(term).unwrap(), "TERM_1");
    assert!(set.get("TERM_1").is_some());
}

#[test]
fn test_duplicate_declared_id_conflicts() {
    let mut set = AnnotationSet::new();
    let make = || {
        Feature::with_id(
            "TERM_1",
            vec![Interval::new(0, 5)],
            Strand::Forward,
            FeatureAttributes::default(),
        )
    };
    set.insert(make()).unwrap();
    assert!(matches!(
        set.insert(make()),
        Err(crate::error::Error::MergeConflict(id)) if id == "TERM_1"
    ));
}

#[test]
fn test_filter_by_type() {
    let mut set = AnnotationSet::new();
    set.insert(feature(0, 10, "CDS")).unwrap();
    set.insert(feature(20, 30, "tRNA")).unwrap();
    set.insert(feature(40, 50, "CDS")).unwrap();

    assert_eq!(set.filter(|f| f.is_cds()).count(), 2);
}

#[test]
fn test_merge_renumbers_assigned_ids() {
    let mut left = AnnotationSet::new();
    left.insert(feature(0, 10, "CDS")).unwrap();

    let mut right = AnnotationSet::new();
    right.insert(feature(20, 30, "ncRNA")).unwrap();

    // Both sides assigned "feature_0" independently.
    left.merge(right).unwrap();
    assert_eq!(left.len(), 2);
    let order: Vec<_> = left.iter().map(|(id, _)| id.to_string()).collect();
    assert_eq!(order, vec!["feature_0", "feature_1"]);
    assert_eq!(
        left.get("feature_1").unwrap().feature_type(),
        Some("ncRNA")
    );
}

#[test]
fn test_merge_declared_collision_fails() {
    let declared = || {
        Feature::with_id(
            "gene_7",
            vec![Interval::new(0, 9)],
            Strand::Forward,
            FeatureAttributes::default(),
        )
    };
    let mut left = AnnotationSet::new();
    left.insert(declared()).unwrap();
    let mut right = AnnotationSet::new();
    right.insert(declared()).unwrap();

    assert!(matches!(
        left.merge(right),
        Err(crate::error::Error::MergeConflict(_))
    ));
}

#[test]
fn test_replace_preserves_position() {
    let mut set = AnnotationSet::new();
    set.insert(feature(0, 10, "CDS")).unwrap();
    set.insert(feature(20, 30, "CDS")).unwrap();
    set.insert(feature(40, 50, "CDS")).unwrap();

    let mut updated = feature(20, 30, "CDS");
    updated.attributes_mut().db_xref = Some("UniRef100_X".to_string());
    set.replace("feature_1", updated).unwrap();

    let order: Vec<_> = set.iter().map(|(id, _)| id.to_string()).collect();
    assert_eq!(order, vec!["feature_0", "feature_1", "feature_2"]);
    assert_eq!(
        set.get("feature_1").unwrap().attributes().db_xref.as_deref(),
        Some("UniRef100_X")
    );
}

#[test]
fn test_replace_keeps_declared_status() {
    let gene = || {
        Feature::with_id(
            "seq1_1",
            vec![Interval::new(0, 30)],
            Strand::Forward,
            FeatureAttributes::default().with_feature_type("CDS"),
        )
    };
    let mut set = AnnotationSet::new();
    set.insert(gene()).unwrap();

    let mut updated = gene();
    updated.attributes_mut().db_xref = Some("UniRef100_X".to_string());
    set.replace("seq1_1", updated).unwrap();
    assert!(set.get("seq1_1").unwrap().id().unwrap().is_declared());

    // The replaced feature still conflicts as a declared id when this set
    // is merged into another one, instead of being silently renumbered.
    let mut other = AnnotationSet::new();
    other.insert(gene()).unwrap();
    assert!(matches!(
        other.merge(set),
        Err(crate::error::Error::MergeConflict(_))
    ));
}

#[test]
fn test_remove() {
    let mut set = AnnotationSet::new();
    set.insert(feature(0, 10, "CDS")).unwrap();
    set.insert(feature(20, 30, "CDS")).unwrap();

    assert!(set.remove("feature_0").is_some());
    assert!(set.get("feature_0").is_none());
    assert_eq!(set.len(), 1);
}
