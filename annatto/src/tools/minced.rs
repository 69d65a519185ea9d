//! MinCED adapter for CRISPR repeat detection.
//!
//! MinCED already emits GFF3, so this adapter reads its output directly
//! instead of going through one of the line-grammar parsers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::Command;

use bio::io::gff;
use indexmap::IndexMap;

use crate::data_structs::annotation::{AnnotationSet, Feature, FeatureAttributes};
use crate::data_structs::coords::Interval;
use crate::data_structs::enums::Strand;
use crate::error::{Error, Result};
use crate::tools::{runner, FeatureIdentify, ToolOutput};

const CONTEXT: &str = "CRISPR record";

pub struct Minced;

impl FeatureIdentify for Minced {
    fn name(&self) -> &'static str {
        "minced"
    }

    fn binary(&self) -> &'static str {
        "minced"
    }

    fn identify(
        &self,
        input: &Path,
        workdir: &Path,
        param: Option<&str>,
    ) -> Result<ToolOutput> {
        if let Some(param) = param {
            return Err(Error::Configuration(format!(
                "minced takes no parameter, got `{}`",
                param
            )));
        }
        let out = workdir.join("minced.gff");

        let mut command = Command::new(self.binary());
        command.arg("-gff").arg(input).arg(&out);
        runner::run(self.name(), &mut command)?;

        Ok(ToolOutput::new(self.name()).with_file("gff", out))
    }

    fn parse(
        &self,
        output: &ToolOutput,
    ) -> Result<Vec<(String, AnnotationSet)>> {
        let mut reader = gff::Reader::new(
            BufReader::new(File::open(output.path("gff")?)?),
            gff::GffType::GFF3,
        );

        let mut by_seq: IndexMap<String, AnnotationSet> = IndexMap::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| Error::parse(CONTEXT, format!("bad GFF row: {}", e), ""))?;

            let start = record.start().checked_sub(1).ok_or_else(|| {
                Error::parse(CONTEXT, "start coordinate must be positive", record.seqname())
            })?;
            let interval = Interval::checked(start, *record.end()).ok_or_else(|| {
                Error::parse(CONTEXT, "empty or inverted interval", record.seqname())
            })?;
            let strand = record
                .strand()
                .map(|s| match s {
                    bio_types::strand::Strand::Forward => Strand::Forward,
                    bio_types::strand::Strand::Reverse => Strand::Reverse,
                    bio_types::strand::Strand::Unknown => Strand::Unknown,
                })
                .unwrap_or(Strand::Unknown);

            let mut attributes = FeatureAttributes::default()
                .with_feature_type(record.feature_type())
                .with_source("minced");
            if let Some(rpt) = record.attributes().get("rpt_family") {
                attributes = attributes.with_other("rpt_family", rpt.as_str());
            }

            let set = by_seq.entry(record.seqname().to_string()).or_default();
            let feature = match record.attributes().get("ID") {
                Some(id) => Feature::with_id(
                    id.clone(),
                    vec![interval],
                    strand,
                    attributes,
                ),
                None => Feature::new(vec![interval], strand, attributes),
            };
            set.insert(feature)?;
        }
        Ok(by_seq.into_iter().collect())
    }
}
