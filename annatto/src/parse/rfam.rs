//! Parser for non-coding RNA scanner output in the flat columnar shape.
//!
//! Every row describes one hit; rows are grouped into records by the query
//! sequence id in field 2 rather than by a head line. Field layout
//! (whitespace-separated): 0 = target/subtype name, 1 = Rfam family
//! accession, 7 = seq-from, 8 = seq-to, 9 = strand. `#` comment lines are
//! ignored.

use crate::data_structs::annotation::{AnnotationSet, Feature, FeatureAttributes};
use crate::data_structs::coords::Interval;
use crate::data_structs::enums::Strand;
use crate::error::{Error, Result};

/// Field position of the query sequence id, the grouping key.
pub const SEQ_ID_FIELD: usize = 2;

const CONTEXT: &str = "ncRNA scanner record";

/// Rfam families reported as `rRNA` rather than generic `ncRNA`.
const RRNA_FAMILIES: [&str; 8] = [
    "RF00001", "RF00002", "RF00177", "RF01959", "RF01960", "RF02540", "RF02541",
    "RF02543",
];

fn classify(fam_id: &str) -> (&'static str, Option<&'static str>) {
    if RRNA_FAMILIES.contains(&fam_id) {
        let product = match fam_id {
            "RF00001" => Some("5s_rRNA"),
            "RF00177" | "RF01959" => Some("16s_rRNA"),
            "RF02540" | "RF02541" => Some("23s_rRNA"),
            _ => None,
        };
        ("rRNA", product)
    }
    else {
        ("ncRNA", None)
    }
}

pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Parses one group of rows sharing a query id into
/// `(sequence_id, AnnotationSet)`.
pub fn parse_record(lines: &[String]) -> Result<(String, AnnotationSet)> {
    let first = lines
        .first()
        .ok_or_else(|| Error::parse(CONTEXT, "empty record group", ""))?;
    let seq_id = first
        .split_whitespace()
        .nth(SEQ_ID_FIELD)
        .ok_or_else(|| Error::parse(CONTEXT, "missing query id field", first.clone()))?
        .to_string();

    let mut set = AnnotationSet::new();
    for line in lines {
        set.insert(parse_row(line)?)?;
    }
    Ok((seq_id, set))
}

fn parse_row(line: &str) -> Result<Feature> {
    let err = |message: &str| Error::parse(CONTEXT, message, line.to_string());

    let items: Vec<&str> = line.split_whitespace().collect();
    if items.len() < 10 {
        return Err(err("row has fewer than 10 fields"));
    }

    let subtype = items[0];
    let fam_id = items[1];
    let from: u64 = items[7]
        .parse()
        .map_err(|_| err("unparseable seq-from coordinate"))?;
    let to: u64 = items[8]
        .parse()
        .map_err(|_| err("unparseable seq-to coordinate"))?;

    // For the reverse strand the tool reports the two coordinates swapped;
    // swap back before the shared 1-based-to-half-open transform.
    let (strand, lo, hi) = match items[9] {
        "+" => (Strand::Forward, from, to),
        "-" => (Strand::Reverse, to, from),
        _ => return Err(err("unknown strand symbol")),
    };
    let start = lo
        .checked_sub(1)
        .ok_or_else(|| err("start coordinate must be positive"))?;
    let interval =
        Interval::checked(start, hi).ok_or_else(|| err("empty or inverted interval"))?;

    let (feature_type, product) = classify(fam_id);
    let mut attributes = FeatureAttributes::default()
        .with_feature_type(feature_type)
        .with_source("Rfam")
        .with_db_xref(fam_id)
        .with_other("ncRNA_class", subtype);
    if let Some(product) = product {
        attributes = attributes.with_product(product);
    }

    Ok(Feature::new(vec![interval], strand, attributes))
}
