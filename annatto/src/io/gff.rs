//! GFF3 output for merged annotation sets.

use std::io::Write;

use itertools::Itertools;

use crate::data_structs::annotation::{AnnotationSet, Feature};
use crate::error::Result;

/// Streaming GFF3 writer. The version pragma is written once, before the
/// first sequence; each sequence gets a `##sequence-region` pragma followed
/// by its feature rows in merge order.
pub struct GffWriter<W: Write> {
    sink:           W,
    header_written: bool,
}

impl<W: Write> GffWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            header_written: false,
        }
    }

    pub fn write_sequence(
        &mut self,
        seq_id: &str,
        seq_length: u64,
        set: &AnnotationSet,
    ) -> Result<()> {
        if !self.header_written {
            writeln!(self.sink, "##gff-version 3")?;
            self.header_written = true;
        }
        writeln!(self.sink, "##sequence-region {} 1 {}", seq_id, seq_length)?;
        for (id, feature) in set.iter() {
            self.write_row(seq_id, id, feature)?;
        }
        self.sink.flush()?;
        Ok(())
    }

    fn write_row(
        &mut self,
        seq_id: &str,
        feature_id: &str,
        feature: &Feature,
    ) -> Result<()> {
        let attrs = feature.attributes();
        let span = feature.span();

        let mut pairs = vec![format!("ID={}", feature_id)];
        if let Some(product) = &attrs.product {
            pairs.push(format!("product={}", product));
        }
        if let Some(db_xref) = &attrs.db_xref {
            pairs.push(format!("db_xref={}", db_xref));
        }
        if let Some(gene_id) = &attrs.gene_id {
            pairs.push(format!("gene_id={}", gene_id));
        }
        if let Some(confidence) = &attrs.confidence {
            pairs.push(format!("confidence={}", confidence));
        }
        pairs.extend(
            attrs
                .other
                .iter()
                .sorted_by_key(|(key, _)| key.as_str())
                .map(|(key, value)| format!("{}={}", key, value)),
        );

        writeln!(
            self.sink,
            "{}\t{}\t{}\t{}\t{}\t.\t{}\t.\t{}",
            seq_id,
            attrs.source.as_deref().unwrap_or("."),
            attrs.feature_type.as_deref().unwrap_or("region"),
            span.start() + 1,
            span.end(),
            char::from(feature.strand()),
            pairs.join(";"),
        )?;
        Ok(())
    }
}
