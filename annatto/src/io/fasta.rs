//! FASTA input.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;

/// One input nucleotide sequence.
#[derive(Debug, Clone)]
pub struct SeqRecord {
    pub id:   String,
    pub desc: Option<String>,
    pub seq:  String,
}

impl SeqRecord {
    pub fn new(
        id: impl Into<String>,
        seq: impl Into<String>,
    ) -> Self {
        Self {
            id:   id.into(),
            desc: None,
            seq:  seq.into(),
        }
    }

    pub fn len(&self) -> u64 {
        self.seq.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Reads every record of a FASTA file, in file order.
pub fn read_sequences(path: &Path) -> Result<Vec<SeqRecord>> {
    let reader = bio::io::fasta::Reader::new(BufReader::new(File::open(path)?));
    let mut sequences = Vec::new();
    for record in reader.records() {
        let record = record?;
        sequences.push(SeqRecord {
            id:   record.id().to_string(),
            desc: record.desc().map(String::from),
            seq:  String::from_utf8_lossy(record.seq()).into_owned(),
        });
    }
    Ok(sequences)
}

/// Writes records as FASTA to `path`.
pub fn write_sequences(
    path: &Path,
    records: &[SeqRecord],
) -> Result<()> {
    let mut writer = bio::io::fasta::Writer::to_file(path)?;
    for record in records {
        writer.write(&record.id, record.desc.as_deref(), record.seq.as_bytes())?;
    }
    Ok(())
}
