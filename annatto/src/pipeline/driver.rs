//! Pipeline driver tying configuration, tools and output together.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;
use log::{info, warn};
use rayon::prelude::*;

use crate::data_structs::annotation::AnnotationSet;
use crate::error::{Error, Result};
use crate::io::{read_sequences, GffWriter, SeqRecord};
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::identify::identify_features;
use crate::pipeline::reannotate::{reannotate_cds, DbCatalog};
use crate::tools::ToolRegistry;

/// One sequence that could not be annotated.
#[derive(Debug)]
pub struct SequenceFailure {
    pub id:    String,
    pub error: Error,
}

/// Per-sequence outcome for the run report.
#[derive(Debug)]
pub struct SequenceReport {
    pub id:     String,
    pub length: u64,
    /// Feature counts keyed by feature type, in first-seen order.
    pub counts: IndexMap<String, usize>,
}

/// Aggregate outcome of one pipeline run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub sequences: Vec<SequenceReport>,
    pub failures:  Vec<SequenceFailure>,
    /// The GFF3 file the annotations were written to.
    pub output:    PathBuf,
}

impl RunSummary {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Pipeline {
    config:   PipelineConfig,
    registry: ToolRegistry,
}

impl Pipeline {
    pub fn new(
        config: PipelineConfig,
        registry: ToolRegistry,
    ) -> Self {
        Self { config, registry }
    }

    /// Checks that every configured tool is registered before any sequence
    /// is touched.
    pub fn validate(&self) -> Result<()> {
        for (name, _) in self.config.enabled_features() {
            self.registry.identifier(name)?;
        }
        for name in self.config.cds.keys() {
            self.registry.searcher(name)?;
        }
        Ok(())
    }

    /// Annotates every sequence of `input`, writing a GFF3 file named after
    /// the input under `out_dir`.
    ///
    /// Sequences are processed in parallel but written in input order, each
    /// flushed as soon as it is serialized. Tool and parse failures skip
    /// the affected sequence and are reported in the summary;
    /// configuration errors abort the run after the flush.
    pub fn run_file(
        &self,
        input: &Path,
        out_dir: &Path,
    ) -> Result<RunSummary> {
        self.run_file_with_progress(input, out_dir, |_, _| {})
    }

    /// Same as [`Pipeline::run_file`], reporting progress as sequences
    /// complete: `progress(done, total)` is called once before any work
    /// starts and again after each sequence finishes, possibly from worker
    /// threads.
    pub fn run_file_with_progress(
        &self,
        input: &Path,
        out_dir: &Path,
        progress: impl Fn(usize, usize) + Sync,
    ) -> Result<RunSummary> {
        self.validate()?;
        fs::create_dir_all(out_dir)?;

        let sequences = read_sequences(input)?;
        info!(
            "annotating {} sequences from {}",
            sequences.len(),
            input.display()
        );

        let total = sequences.len();
        progress(0, total);
        let done = AtomicUsize::new(0);
        let results: Vec<Result<AnnotationSet>> = sequences
            .par_iter()
            .map(|seq| {
                let result = self.annotate_sequence(seq, out_dir);
                progress(done.fetch_add(1, Ordering::Relaxed) + 1, total);
                result
            })
            .collect();

        let out_path = self.output_path(input, out_dir);
        let mut writer = GffWriter::new(BufWriter::new(File::create(&out_path)?));

        let mut summary = RunSummary {
            output: out_path,
            ..RunSummary::default()
        };
        for (seq, result) in sequences.iter().zip(results) {
            match result {
                Ok(set) => {
                    writer.write_sequence(&seq.id, seq.len(), &set)?;
                    summary.sequences.push(report(seq, &set));
                },
                Err(error @ Error::Configuration(_)) => return Err(error),
                Err(error) => {
                    warn!("skipping {}: {}", seq.id, error);
                    summary.failures.push(SequenceFailure {
                        id: seq.id.clone(),
                        error,
                    });
                },
            }
        }
        Ok(summary)
    }

    /// Runs all configured stages for one sequence inside its own working
    /// subdirectory.
    pub fn annotate_sequence(
        &self,
        seq: &SeqRecord,
        out_dir: &Path,
    ) -> Result<AnnotationSet> {
        let workdir = out_dir.join(&seq.id);
        fs::create_dir_all(&workdir)?;

        let mut set =
            identify_features(&self.registry, &self.config.features, seq, &workdir)?;

        if !self.config.cds.is_empty() {
            match &self.config.general.db_dir {
                Some(db_dir) => {
                    let catalog = DbCatalog::new(db_dir);
                    reannotate_cds(
                        &mut set,
                        self.config.general.kingdom,
                        &self.config.cds,
                        &self.registry,
                        &catalog,
                        &workdir,
                    )?;
                },
                None => {
                    warn!("no db_dir configured; CDS reannotation skipped");
                },
            }
        }
        Ok(set)
    }

    fn output_path(
        &self,
        input: &Path,
        out_dir: &Path,
    ) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "annotation".to_string());
        out_dir.join(format!("{}.gff", stem))
    }
}

fn report(
    seq: &SeqRecord,
    set: &AnnotationSet,
) -> SequenceReport {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for (_, feature) in set.iter() {
        let key = feature.feature_type().unwrap_or("unknown").to_string();
        *counts.entry(key).or_default() += 1;
    }
    SequenceReport {
        id: seq.id.clone(),
        length: seq.len(),
        counts,
    }
}
