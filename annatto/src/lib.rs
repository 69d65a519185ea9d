//! # annatto
//!
//! `annatto` is a Rust library and command-line tool for annotating
//! microbial nucleotide sequences. It drives a set of external prediction
//! tools (gene finders, non-coding RNA scanners, terminator and CRISPR
//! detectors), parses their heterogeneous output formats into one uniform
//! annotation model, merges the per-tool annotations, and refines coding
//! genes by homology search against an ordered catalog of reference protein
//! databases.
//!
//! ## Key Features
//!
//! * **Uniform annotation model**: half-open, zero-based [`Interval`]s,
//!   [`Feature`]s with typed attributes and an insertion-ordered
//!   [`AnnotationSet`] per sequence, with deterministic merge semantics.
//! * **Three parser grammars**: a descriptor-plus-table shape for gene
//!   finders, a flat columnar shape for ncRNA scanners and a nested
//!   two-level shape for terminator predictors, all built on one generic
//!   record splitter.
//! * **Capability registry**: external tools are wrapped behind
//!   [`FeatureIdentify`] and [`HomologySearch`] traits and resolved by name
//!   from a [`ToolRegistry`], so the pipeline configuration decides what
//!   runs and in which order.
//! * **Kingdom-aware reannotation**: CDS translations are searched against
//!   a tiered UniRef catalog whose order (never its content) depends on the
//!   input's kingdom.
//! * **Parallel driver**: sequences are annotated in parallel with `rayon`
//!   and written in input order as GFF3.
//!
//! ## Structure
//!
//! * [`data_structs`]: intervals, strands, kingdoms, features and the
//!   annotation set.
//! * [`parse`]: the record splitter and the per-grammar parsers.
//! * [`tools`]: capability traits, the registry and the built-in adapters.
//! * [`pipeline`]: configuration, the two orchestrators and the run driver.
//! * [`io`]: FASTA input and GFF3 output.
//!
//! [`Interval`]: data_structs::Interval
//! [`Feature`]: data_structs::Feature
//! [`AnnotationSet`]: data_structs::AnnotationSet
//! [`FeatureIdentify`]: tools::FeatureIdentify
//! [`HomologySearch`]: tools::HomologySearch
//! [`ToolRegistry`]: tools::ToolRegistry

pub mod data_structs;
pub mod error;
pub mod io;
pub mod parse;
pub mod pipeline;
pub mod prelude;
pub mod tools;
pub mod utils;
