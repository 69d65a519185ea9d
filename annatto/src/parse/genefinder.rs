//! Parser for gene-finder output in the descriptor+table shape.
//!
//! One record is a descriptor head line of `key=value` pairs followed by
//! one feature row per predicted gene:
//!
//! ```text
//! # Sequence Data: seqnum=1;seqlen=500;seqhdr="seqA some description"
//! # Model Data: ...
//! >1_3_98_+
//! >2_120_341_-
//! ```
//!
//! Row coordinates are 1-based inclusive and converted to zero-based
//! half-open here; `seqlen` bounds every feature end.

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::data_structs::annotation::{AnnotationSet, Feature, FeatureAttributes};
use crate::data_structs::coords::Interval;
use crate::data_structs::enums::Strand;
use crate::error::{Error, Result};
use crate::utils::unquote;

pub const HEAD_PREFIX: &str = "# Sequence Data:";

const CONTEXT: &str = "gene finder record";

/// Splits on `;` while respecting single- and double-quoted substrings, so
/// a delimiter inside a quoted value is not treated as a separator.
static DESC_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"((?:[^;"']|"[^"]*"|'[^']*')+)"#).expect("descriptor tokenizer pattern is valid")
});

pub fn is_head(line: &str) -> bool {
    line.starts_with(HEAD_PREFIX)
}

/// Parses one record group into `(sequence_id, AnnotationSet)`.
///
/// `source` names the predicting tool in every feature's metadata.
pub fn parse_record(
    lines: &[String],
    source: &str,
) -> Result<(String, AnnotationSet)> {
    let head = lines
        .first()
        .ok_or_else(|| Error::parse(CONTEXT, "empty record group", ""))?;
    let desc = parse_descriptor(head)?;

    let seq_id = desc
        .get("seqhdr")
        .and_then(|h| h.split_whitespace().next())
        .ok_or_else(|| {
            Error::parse(CONTEXT, "missing `seqhdr` key in descriptor line", head.clone())
        })?
        .to_string();
    let seqlen: u64 = desc
        .get("seqlen")
        .ok_or_else(|| {
            Error::parse(CONTEXT, "missing `seqlen` key in descriptor line", head.clone())
        })?
        .parse()
        .map_err(|_| Error::parse(CONTEXT, "unparseable `seqlen` value", head.clone()))?;

    let mut set = AnnotationSet::new();
    for line in &lines[1..] {
        let feature = parse_row(line, &seq_id, seqlen, source)?;
        set.insert(feature)?;
    }
    Ok((seq_id, set))
}

fn parse_descriptor(head: &str) -> Result<HashMap<String, String>> {
    let body = head
        .strip_prefix(HEAD_PREFIX)
        .ok_or_else(|| Error::parse(CONTEXT, "not a descriptor line", head.to_string()))?;

    let mut desc = HashMap::new();
    for token in DESC_TOKEN.find_iter(body.trim()) {
        let pair = token.as_str();
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            Error::parse(CONTEXT, "descriptor pair without `=`", pair.to_string())
        })?;
        desc.insert(key.trim().to_string(), unquote(value).to_string());
    }
    Ok(desc)
}

/// Parses one `>N_start_end_strand` feature row.
fn parse_row(
    line: &str,
    seq_id: &str,
    seqlen: u64,
    source: &str,
) -> Result<Feature> {
    let err = |message: &str| Error::parse(CONTEXT, message, line.to_string());

    let rest = line
        .strip_prefix('>')
        .ok_or_else(|| err("feature row does not start with `>`"))?;
    let mut fields = rest.rsplitn(4, '_');
    let strand_tok = fields.next().ok_or_else(|| err("missing strand field"))?;
    let end: u64 = fields
        .next()
        .ok_or_else(|| err("missing end coordinate"))?
        .parse()
        .map_err(|_| err("unparseable end coordinate"))?;
    let start: u64 = fields
        .next()
        .ok_or_else(|| err("missing start coordinate"))?
        .parse()
        .map_err(|_| err("unparseable start coordinate"))?;
    let number = fields.next().ok_or_else(|| err("missing gene number"))?;
    if number.is_empty() {
        return Err(err("empty gene number"));
    }

    let strand = match strand_tok {
        "+" => Strand::Forward,
        "-" => Strand::Reverse,
        _ => return Err(err("unknown strand symbol")),
    };

    // 1-based inclusive to zero-based half-open.
    let start0 = start
        .checked_sub(1)
        .ok_or_else(|| err("start coordinate must be positive"))?;
    if end > seqlen {
        return Err(err("feature end exceeds declared sequence length"));
    }
    let interval =
        Interval::checked(start0, end).ok_or_else(|| err("empty or inverted interval"))?;

    Ok(Feature::with_id(
        format!("{}_{}", seq_id, number),
        vec![interval],
        strand,
        FeatureAttributes::default()
            .with_feature_type("CDS")
            .with_source(source),
    ))
}
