//! DIAMOND adapter for protein homology search.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::Command;

use crate::error::Result;
use crate::parse::hits::{parse_table, Hit};
use crate::parse::read_lines;
use crate::tools::{runner, HomologySearch, ToolOutput};

pub struct Diamond;

impl HomologySearch for Diamond {
    fn name(&self) -> &'static str {
        "diamond"
    }

    fn binary(&self) -> &'static str {
        "diamond"
    }

    fn database_exists(
        &self,
        stem: &Path,
    ) -> bool {
        stem.with_extension("dmnd").is_file()
    }

    fn search(
        &self,
        query: &Path,
        stem: &Path,
        workdir: &Path,
    ) -> Result<ToolOutput> {
        let out = workdir.join(format!(
            "diamond.{}.tsv",
            stem.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "db".to_string())
        ));

        let mut command = Command::new(self.binary());
        command
            .arg("blastp")
            .arg("--db")
            .arg(stem)
            .arg("--query")
            .arg(query)
            .arg("--out")
            .arg(&out)
            .arg("--outfmt")
            .arg("6")
            .arg("--max-target-seqs")
            .arg("1")
            .arg("--quiet");
        runner::run(self.name(), &mut command)?;

        Ok(ToolOutput::new(self.name()).with_file("tsv", out))
    }

    fn parse(
        &self,
        output: &ToolOutput,
    ) -> Result<Vec<Hit>> {
        let lines = read_lines(BufReader::new(File::open(output.path("tsv")?)?))?;
        parse_table(lines.into_iter())
    }
}
