//! TransTermHP adapter for rho-independent terminator prediction.
//!
//! The tool writes its report to stdout, preceded by a free-form preamble;
//! the report proper starts after a marker line and is parsed as nested
//! `SEQUENCE` blocks.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::data_structs::annotation::AnnotationSet;
use crate::error::{Error, Result};
use crate::parse::{read_lines, terminator, RecordSplitter};
use crate::tools::{runner, FeatureIdentify, ToolOutput};

/// Last preamble line; everything after it is the report.
const REPORT_MARKER: &str = "Genes are interspersed";

pub struct TransTermHp;

impl FeatureIdentify for TransTermHp {
    fn name(&self) -> &'static str {
        "transterm"
    }

    fn binary(&self) -> &'static str {
        "transterm"
    }

    fn identify(
        &self,
        input: &Path,
        workdir: &Path,
        param: Option<&str>,
    ) -> Result<ToolOutput> {
        let expterm = param.ok_or_else(|| {
            Error::Configuration(
                "transterm requires the path to its expterm.dat data file".to_string(),
            )
        })?;

        // TransTermHP needs a coordinate file even when run without known
        // genes; an empty one makes it scan the whole sequence.
        let coords = workdir.join("transterm.coords");
        File::create(&coords)?;

        let report = workdir.join("transterm.tt");
        let stdout = File::create(&report)?;

        let mut command = Command::new(self.binary());
        command
            .arg("-p")
            .arg(expterm)
            .arg(input)
            .arg(&coords)
            .stdout(Stdio::from(stdout));
        runner::run(self.name(), &mut command)?;

        Ok(ToolOutput::new(self.name()).with_file("tt", report))
    }

    fn parse(
        &self,
        output: &ToolOutput,
    ) -> Result<Vec<(String, AnnotationSet)>> {
        let lines = read_lines(BufReader::new(File::open(output.path("tt")?)?))?;
        let body_at = lines
            .iter()
            .position(|line| line.contains(REPORT_MARKER))
            .ok_or_else(|| {
                Error::parse(
                    "terminator record",
                    "report marker line not found in output",
                    "",
                )
            })?;

        let mut records = Vec::new();
        let splitter = RecordSplitter::new(
            lines[body_at + 1..].iter().cloned(),
            "terminator record",
            terminator::is_head,
        )
        .with_ignore(|l| l.trim().is_empty());

        for group in splitter {
            records.push(terminator::parse_record(&group?)?);
        }
        Ok(records)
    }
}
