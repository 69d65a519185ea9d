use std::collections::HashSet;
use std::fs;
use std::path::Path;

use annatto::parse::hits::Hit;
use annatto::prelude::*;

/// Identification capability returning canned annotation sets, regardless
/// of the staged input.
pub struct StaticIdentifier {
    pub tool_name: &'static str,
    pub sets:      Vec<(String, AnnotationSet)>,
}

impl FeatureIdentify for StaticIdentifier {
    fn name(&self) -> &'static str {
        self.tool_name
    }

    fn binary(&self) -> &'static str {
        "true"
    }

    fn identify(
        &self,
        _input: &Path,
        _workdir: &Path,
        _param: Option<&str>,
    ) -> Result<ToolOutput> {
        Ok(ToolOutput::new(self.tool_name))
    }

    fn parse(
        &self,
        _output: &ToolOutput,
    ) -> Result<Vec<(String, AnnotationSet)>> {
        Ok(self.sets.clone())
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Identification capability that fails whenever the staged input contains
/// one of the poisoned sequence ids.
pub struct FailingIdentifier {
    pub tool_name: &'static str,
    pub fail_for:  HashSet<String>,
    pub fallback:  Vec<(String, AnnotationSet)>,
}

impl FeatureIdentify for FailingIdentifier {
    fn name(&self) -> &'static str {
        self.tool_name
    }

    fn binary(&self) -> &'static str {
        "true"
    }

    fn identify(
        &self,
        input: &Path,
        _workdir: &Path,
        _param: Option<&str>,
    ) -> Result<ToolOutput> {
        let staged = fs::read_to_string(input)?;
        for id in &self.fail_for {
            if staged.contains(&format!(">{}", id)) {
                return Err(Error::ExternalTool {
                    tool:    self.tool_name.to_string(),
                    message: format!("simulated failure on {}", id),
                });
            }
        }
        Ok(ToolOutput::new(self.tool_name))
    }

    fn parse(
        &self,
        _output: &ToolOutput,
    ) -> Result<Vec<(String, AnnotationSet)>> {
        Ok(self.fallback.clone())
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Search capability with a fixed hit table for every database stem marked
/// present.
pub struct StaticSearcher {
    pub present: HashSet<String>,
    pub hits:    Vec<Hit>,
}

impl HomologySearch for StaticSearcher {
    fn name(&self) -> &'static str {
        "diamond"
    }

    fn binary(&self) -> &'static str {
        "true"
    }

    fn database_exists(
        &self,
        stem: &Path,
    ) -> bool {
        stem.file_name()
            .map(|name| self.present.contains(&name.to_string_lossy().into_owned()))
            .unwrap_or(false)
    }

    fn search(
        &self,
        _query: &Path,
        stem: &Path,
        _workdir: &Path,
    ) -> Result<ToolOutput> {
        Ok(ToolOutput::new("diamond").with_file("db", stem))
    }

    fn parse(
        &self,
        _output: &ToolOutput,
    ) -> Result<Vec<Hit>> {
        Ok(self.hits.clone())
    }

    fn is_available(&self) -> bool {
        true
    }
}

pub fn write_fasta(
    path: &Path,
    records: &[(&str, &str)],
) {
    let records: Vec<SeqRecord> = records
        .iter()
        .map(|(id, seq)| SeqRecord::new(*id, *seq))
        .collect();
    write_sequences(path, &records).unwrap();
}

pub fn cds_with_translation(
    id: &str,
    start: u64,
    end: u64,
    translation: &str,
) -> Feature {
    Feature::with_id(
        id,
        vec![Interval::new(start, end)],
        Strand::Forward,
        FeatureAttributes::default()
            .with_feature_type("CDS")
            .with_source("mock")
            .with_translation(translation),
    )
}
