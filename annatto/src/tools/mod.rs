//! Capabilities wrapping the external prediction and search tools.
//!
//! Each adapter implements one of two capability traits: a
//! [`FeatureIdentify`] tool predicts features on a nucleotide sequence, a
//! [`HomologySearch`] tool matches protein queries against a reference
//! database. A [`ToolRegistry`] maps the tool names used in the pipeline
//! configuration to these implementations; registration happens at process
//! start and a failed lookup is a [`Error::Configuration`].

pub mod runner;

mod cmscan;
mod diamond;
mod minced;
mod prodigal;
mod transterm;


pub use cmscan::Cmscan;
pub use diamond::Diamond;
pub use minced::Minced;
pub use prodigal::Prodigal;
pub use transterm::TransTermHp;

use std::path::{Path, PathBuf};

use hashbrown::HashMap;

use crate::data_structs::annotation::AnnotationSet;
use crate::error::{Error, Result};
use crate::parse::hits::Hit;

/// Output handles of one external tool invocation, keyed by kind
/// (`"sco"`, `"faa"`, `"gff"`, ...).
#[derive(Debug, Clone)]
pub struct ToolOutput {
    tool:  String,
    files: HashMap<String, PathBuf>,
}

impl ToolOutput {
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool:  tool.into(),
            files: HashMap::new(),
        }
    }

    pub fn with_file(
        mut self,
        kind: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.files.insert(kind.into(), path.into());
        self
    }

    /// Returns the path registered for `kind`; a missing expected output is
    /// an external-tool failure.
    pub fn path(
        &self,
        kind: &str,
    ) -> Result<&Path> {
        self.files
            .get(kind)
            .map(PathBuf::as_path)
            .ok_or_else(|| {
                Error::tool(&self.tool, format!("missing expected output `{}`", kind))
            })
    }
}

/// A feature-identification capability: run the tool on a FASTA input, then
/// parse its raw output into per-sequence annotation sets.
pub trait FeatureIdentify: Send + Sync {
    /// The name under which the capability registers.
    fn name(&self) -> &'static str;

    /// The executable the capability shells out to.
    fn binary(&self) -> &'static str;

    /// Runs the tool against `input`, placing raw output under `workdir`.
    /// `param` carries the configured string parameter, if any.
    fn identify(
        &self,
        input: &Path,
        workdir: &Path,
        param: Option<&str>,
    ) -> Result<ToolOutput>;

    /// Parses the tool's raw output into `(sequence_id, AnnotationSet)`
    /// pairs, one per record.
    fn parse(
        &self,
        output: &ToolOutput,
    ) -> Result<Vec<(String, AnnotationSet)>>;

    fn is_available(&self) -> bool {
        runner::find_in_path(self.binary()).is_some()
    }
}

/// A homology-search capability used by CDS reannotation.
pub trait HomologySearch: Send + Sync {
    fn name(&self) -> &'static str;

    fn binary(&self) -> &'static str;

    /// Whether the database behind `stem` is present on disk.
    fn database_exists(
        &self,
        stem: &Path,
    ) -> bool;

    /// Searches the protein queries in `query` against the database behind
    /// `stem`.
    fn search(
        &self,
        query: &Path,
        stem: &Path,
        workdir: &Path,
    ) -> Result<ToolOutput>;

    fn parse(
        &self,
        output: &ToolOutput,
    ) -> Result<Vec<Hit>>;

    fn is_available(&self) -> bool {
        runner::find_in_path(self.binary()).is_some()
    }
}

/// Registry mapping tool names to capability implementations.
#[derive(Default)]
pub struct ToolRegistry {
    identifiers: HashMap<String, Box<dyn FeatureIdentify>>,
    searchers:   HashMap<String, Box<dyn HomologySearch>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in adapter registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_identifier(Box::new(Prodigal));
        registry.register_identifier(Box::new(Cmscan));
        registry.register_identifier(Box::new(TransTermHp));
        registry.register_identifier(Box::new(Minced));
        registry.register_searcher(Box::new(Diamond));
        registry
    }

    pub fn register_identifier(
        &mut self,
        tool: Box<dyn FeatureIdentify>,
    ) {
        self.identifiers.insert(tool.name().to_string(), tool);
    }

    pub fn register_searcher(
        &mut self,
        tool: Box<dyn HomologySearch>,
    ) {
        self.searchers.insert(tool.name().to_string(), tool);
    }

    pub fn identifier(
        &self,
        name: &str,
    ) -> Result<&dyn FeatureIdentify> {
        self.identifiers
            .get(name)
            .map(|tool| tool.as_ref())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "feature identification with `{}` is not available",
                    name
                ))
            })
    }

    pub fn searcher(
        &self,
        name: &str,
    ) -> Result<&dyn HomologySearch> {
        self.searchers
            .get(name)
            .map(|tool| tool.as_ref())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "homology search with `{}` is not available",
                    name
                ))
            })
    }
}
