use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v info, -vv debug, -vvv trace)."
    )]
    pub verbose:  u8,
    #[arg(
        long,
        default_value_t = true,
        action = clap::ArgAction::Set,
        help = "Display progress bar (disable with --progress false)."
    )]
    pub progress: bool,
    #[arg(
        long,
        default_value_t = 1,
        help = "Number of sequences to annotate in parallel."
    )]
    pub threads:  usize,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        pretty_env_logger::formatted_builder()
            .filter_level(level)
            .try_init()?;

        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build_global()?;
        Ok(())
    }
}

pub fn init_pbar(total: usize) -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}, ETA: {eta}] [{bar:40.cyan/blue}] {pos:>5.green}/{len:5} {msg}")?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Annotating...");
    Ok(progress_bar)
}
