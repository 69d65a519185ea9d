//! Sequence input and annotation output.

pub mod fasta;
pub mod gff;

pub use fasta::{read_sequences, write_sequences, SeqRecord};
pub use gff::GffWriter;
