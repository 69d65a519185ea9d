//! Infernal `cmscan` adapter for non-coding RNA detection.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::Command;

use crate::data_structs::annotation::AnnotationSet;
use crate::error::{Error, Result};
use crate::parse::{group_by_field, read_lines, rfam};
use crate::tools::{runner, FeatureIdentify, ToolOutput};

pub struct Cmscan;

impl FeatureIdentify for Cmscan {
    fn name(&self) -> &'static str {
        "cmscan"
    }

    fn binary(&self) -> &'static str {
        "cmscan"
    }

    fn identify(
        &self,
        input: &Path,
        workdir: &Path,
        param: Option<&str>,
    ) -> Result<ToolOutput> {
        let cm_db = param.ok_or_else(|| {
            Error::Configuration(
                "cmscan requires a covariance model database path".to_string(),
            )
        })?;
        let tblout = workdir.join("cmscan.tbl");

        let mut command = Command::new(self.binary());
        command
            .arg("--tblout")
            .arg(&tblout)
            .arg("--noali")
            .arg(cm_db)
            .arg(input);
        runner::run(self.name(), &mut command)?;

        Ok(ToolOutput::new(self.name()).with_file("tbl", tblout))
    }

    fn parse(
        &self,
        output: &ToolOutput,
    ) -> Result<Vec<(String, AnnotationSet)>> {
        let lines = read_lines(BufReader::new(File::open(output.path("tbl")?)?))?;
        let groups = group_by_field(
            lines.into_iter(),
            rfam::SEQ_ID_FIELD,
            "ncRNA scanner record",
            rfam::is_comment,
        )?;
        groups
            .iter()
            .map(|group| rfam::parse_record(group))
            .collect()
    }
}
