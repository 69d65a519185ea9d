//! Parser for terminator-prediction output in the nested two-level shape.
//!
//! A record starts with a `SEQUENCE <id> ...` head line. Its body is a list
//! of sub-blocks: an unindented gene header followed by zero or more
//! indented detail-line pairs, each pair being a terminator summary line
//! and a companion hairpin-motif line:
//!
//! ```text
//! SEQUENCE seqA (length 4000)
//! gene1     12 - 340       + | ...
//!   TERM 1      371 - 398  + F  93 -11.5 -3.2 | opp_overlap
//!     CGCCGC     ATCCGGT   TTCGG    ACCGGAT    GCAATCAA
//! gene2    420 - 980       - | ...
//! ```
//!
//! A sub-block with no detail lines (gene with no predicted terminator) is
//! valid and contributes nothing.

use itertools::Itertools;

use crate::data_structs::annotation::{AnnotationSet, Feature, FeatureAttributes};
use crate::data_structs::coords::Interval;
use crate::data_structs::enums::Strand;
use crate::error::{Error, Result};
use crate::parse::splitter::RecordSplitter;

const CONTEXT: &str = "terminator record";

pub fn is_head(line: &str) -> bool {
    line.starts_with("SEQUENCE ")
}

fn is_gene_header(line: &str) -> bool {
    !line.starts_with("  ")
}

/// Parses one record group into `(sequence_id, AnnotationSet)`.
pub fn parse_record(lines: &[String]) -> Result<(String, AnnotationSet)> {
    let head = lines
        .first()
        .ok_or_else(|| Error::parse(CONTEXT, "empty record group", ""))?;
    let seq_id = head
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| Error::parse(CONTEXT, "missing sequence id in head line", head.clone()))?
        .to_string();

    let mut set = AnnotationSet::new();
    let genes = RecordSplitter::new(
        lines[1..].iter().cloned(),
        CONTEXT,
        is_gene_header,
    )
    .with_ignore(|l| l.trim().is_empty());

    for gene in genes {
        let gene = gene?;
        let gene_id = gene[0]
            .split_whitespace()
            .next()
            .ok_or_else(|| Error::parse(CONTEXT, "empty gene header", gene[0].clone()))?
            .to_string();

        if gene.len() % 2 != 1 {
            return Err(Error::parse(
                CONTEXT,
                "terminator line without companion hairpin line",
                gene.last().cloned().unwrap_or_default(),
            ));
        }
        for (term, hairpin) in gene[1..].iter().tuples() {
            set.insert(parse_terminator(term, hairpin, &gene_id)?)?;
        }
    }
    Ok((seq_id, set))
}

fn parse_terminator(
    term: &str,
    hairpin: &str,
    gene_id: &str,
) -> Result<Feature> {
    let err = |message: &str| Error::parse(CONTEXT, message, term.to_string());

    let items: Vec<&str> = term.split_whitespace().collect();
    if items.len() < 8 {
        return Err(err("terminator line has fewer than 8 fields"));
    }

    // The two leading labels form the composite terminator id.
    let term_id = format!("{}_{}", items[0], items[1]);
    let mut start: u64 = items[2]
        .parse()
        .map_err(|_| err("unparseable start coordinate"))?;
    let mut end: u64 = items[4]
        .parse()
        .map_err(|_| err("unparseable end coordinate"))?;
    let strand = match items[5] {
        "+" => Strand::Forward,
        "-" => {
            // Reverse-strand terminators are reported end-first.
            std::mem::swap(&mut start, &mut end);
            Strand::Reverse
        },
        _ => return Err(err("unknown strand symbol")),
    };
    let confidence = items[7];

    let start0 = start
        .checked_sub(1)
        .ok_or_else(|| err("start coordinate must be positive"))?;
    let interval =
        Interval::checked(start0, end).ok_or_else(|| err("empty or inverted interval"))?;

    let motif = hairpin.split_whitespace().join("/");

    Ok(Feature::with_id(
        term_id,
        vec![interval],
        strand,
        FeatureAttributes::default()
            .with_feature_type("terminator")
            .with_source("TransTermHP")
            .with_gene_id(gene_id)
            .with_confidence(confidence)
            .with_sequence(motif),
    ))
}
