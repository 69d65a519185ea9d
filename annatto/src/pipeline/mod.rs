//! Orchestration: configuration, per-sequence stages and the run driver.

pub mod config;
pub mod driver;
pub mod identify;
pub mod reannotate;

pub use config::{PipelineConfig, ToolSetting};
pub use driver::{Pipeline, RunSummary, SequenceFailure, SequenceReport};
pub use identify::identify_features;
pub use reannotate::{reannotate_cds, DbCatalog};
