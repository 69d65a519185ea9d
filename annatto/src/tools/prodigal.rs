//! Prodigal gene-finder adapter.
//!
//! Runs `prodigal` in simple-coordinate output mode and pairs the gene
//! table with the translated protein FASTA it writes alongside, so every
//! CDS feature carries the translation the reannotation stage needs.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::Command;

use hashbrown::HashMap;
use log::warn;

use crate::data_structs::annotation::AnnotationSet;
use crate::error::{Error, Result};
use crate::parse::{genefinder, read_lines, RecordSplitter};
use crate::tools::{runner, FeatureIdentify, ToolOutput};

pub struct Prodigal;

impl FeatureIdentify for Prodigal {
    fn name(&self) -> &'static str {
        "prodigal"
    }

    fn binary(&self) -> &'static str {
        "prodigal"
    }

    fn identify(
        &self,
        input: &Path,
        workdir: &Path,
        param: Option<&str>,
    ) -> Result<ToolOutput> {
        if let Some(param) = param {
            return Err(Error::Configuration(format!(
                "prodigal takes no parameter, got `{}`",
                param
            )));
        }
        let sco = workdir.join("prodigal.sco");
        let faa = workdir.join("prodigal.faa");
        let fna = workdir.join("prodigal.fna");

        let mut command = Command::new(self.binary());
        command
            .arg("-i")
            .arg(input)
            .arg("-f")
            .arg("sco")
            .arg("-o")
            .arg(&sco)
            .arg("-a")
            .arg(&faa)
            .arg("-d")
            .arg(&fna)
            .arg("-q");
        runner::run(self.name(), &mut command)?;

        Ok(ToolOutput::new(self.name())
            .with_file("sco", sco)
            .with_file("faa", faa)
            .with_file("fna", fna))
    }

    fn parse(
        &self,
        output: &ToolOutput,
    ) -> Result<Vec<(String, AnnotationSet)>> {
        let lines = read_lines(BufReader::new(File::open(output.path("sco")?)?))?;
        let mut records = Vec::new();
        let splitter = RecordSplitter::new(
            lines.into_iter(),
            "gene finder record",
            genefinder::is_head,
        )
        .with_ignore(|l| l.starts_with('#') && !genefinder::is_head(l));

        for group in splitter {
            records.push(genefinder::parse_record(&group?, "Prodigal")?);
        }

        let translations = read_translations(output.path("faa")?)?;
        for (_, set) in records.iter_mut() {
            for (id, feature) in set.iter_mut() {
                if !feature.is_cds() {
                    continue;
                }
                match translations.get(id) {
                    Some(translation) => {
                        feature.attributes_mut().translation = Some(translation.clone());
                    },
                    None => warn!("no translation found for predicted gene {}", id),
                }
            }
        }
        Ok(records)
    }
}

/// Reads the protein FASTA written by `-a`; record ids match the declared
/// `<seq>_<n>` gene identifiers.
fn read_translations(path: &Path) -> Result<HashMap<String, String>> {
    let reader = bio::io::fasta::Reader::new(BufReader::new(File::open(path)?));
    let mut translations = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let aa = String::from_utf8_lossy(record.seq())
            .trim_end_matches('*')
            .to_string();
        translations.insert(record.id().to_string(), aa);
    }
    Ok(translations)
}
