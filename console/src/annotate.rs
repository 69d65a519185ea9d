use std::path::PathBuf;
use std::process::exit;

use annatto::data_structs::Kingdom;
use annatto::pipeline::{Pipeline, PipelineConfig};
use annatto::tools::ToolRegistry;
use clap::Args;
use console::style;
use indicatif::ProgressBar;
use itertools::Itertools;

use crate::utils::{init_pbar, UtilsArgs};

#[derive(Args, Debug, Clone)]
pub(crate) struct AnnotateArgs {
    #[arg(help = "Path of the input FASTA file.")]
    input:   PathBuf,
    #[arg(
        short = 'o',
        long,
        required = true,
        help = "Directory for the annotation output and tool working files."
    )]
    output:  PathBuf,
    #[arg(short = 'c', long, help = "Path of the pipeline configuration TOML.")]
    config:  Option<PathBuf>,
    #[arg(
        short,
        long,
        value_enum,
        help = "Kingdom of the input; picks the reference database search order."
    )]
    kingdom: Option<Kingdom>,
    #[arg(long, help = "Root directory of the reference protein databases.")]
    db_dir:  Option<PathBuf>,
}

impl AnnotateArgs {
    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        if !self.input.is_file() {
            eprintln!(
                "Path {} is not a file.",
                style(self.input.display()).red()
            );
            exit(-1);
        }

        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_path(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(kingdom) = self.kingdom {
            config.general.kingdom = kingdom;
        }
        if let Some(db_dir) = &self.db_dir {
            config.general.db_dir = Some(db_dir.clone());
        }

        let pipeline = Pipeline::new(config, ToolRegistry::builtin());
        let progress_bar = if utils.progress {
            init_pbar(0)?
        }
        else {
            ProgressBar::hidden()
        };
        let summary = pipeline.run_file_with_progress(
            &self.input,
            &self.output,
            |done, total| {
                progress_bar.set_length(total as u64);
                progress_bar.set_position(done as u64);
            },
        )?;
        progress_bar.finish_and_clear();

        for report in &summary.sequences {
            let breakdown = report
                .counts
                .iter()
                .map(|(feature_type, n)| format!("{} {}", n, feature_type))
                .join(", ");
            println!(
                "[{}] {} ({} bp): {}",
                style("V").green(),
                style(&report.id).green(),
                report.length,
                if breakdown.is_empty() {
                    "no features".to_string()
                }
                else {
                    breakdown
                }
            );
        }
        for failure in &summary.failures {
            eprintln!(
                "[{}] {}: {} error: {}",
                style("X").red(),
                style(&failure.id).red(),
                failure.error.kind(),
                failure.error
            );
        }

        println!(
            "Annotation written to {}",
            style(summary.output.display()).green()
        );
        if !summary.is_ok() {
            eprintln!(
                "{} of {} sequences failed: {}",
                style(summary.failures.len()).red(),
                summary.sequences.len() + summary.failures.len(),
                summary.failures.iter().map(|f| f.id.as_str()).join(", ")
            );
            exit(-1);
        }
        Ok(())
    }
}
