//! Feature-identification orchestrator: runs the configured identification
//! tools against one sequence and merges their annotations.

use std::path::Path;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::data_structs::annotation::AnnotationSet;
use crate::error::Result;
use crate::io::SeqRecord;
use crate::pipeline::config::ToolSetting;
use crate::tools::ToolRegistry;

/// Runs every enabled tool in order against `seq` and returns the union of
/// their annotations.
///
/// The sequence is staged once as a FASTA file that all tools share. No
/// cross-tool deduplication happens here; the merged set is the raw union,
/// conflicting declared identifiers aside.
pub fn identify_features(
    registry: &ToolRegistry,
    tools: &IndexMap<String, ToolSetting>,
    seq: &SeqRecord,
    workdir: &Path,
) -> Result<AnnotationSet> {
    let mut staged = tempfile::Builder::new()
        .prefix("input-")
        .suffix(".fa")
        .tempfile_in(workdir)?;
    {
        let mut writer = bio::io::fasta::Writer::new(&mut staged);
        writer.write(&seq.id, seq.desc.as_deref(), seq.seq.as_bytes())?;
        writer.flush()?;
    }

    let mut merged = AnnotationSet::new();
    for (name, setting) in tools {
        if !setting.is_enabled() {
            continue;
        }
        let tool = registry.identifier(name)?;
        debug!("identifying features on {} with {}", seq.id, name);

        let output = tool.identify(staged.path(), workdir, setting.param())?;
        for (sid, set) in tool.parse(&output)? {
            if sid == seq.id {
                merged.merge(set)?;
            }
            else {
                warn!(
                    "{} reported {} features for foreign sequence {}; ignored",
                    name,
                    set.len(),
                    sid
                );
            }
        }
    }
    Ok(merged)
}
