use std::path::PathBuf;
use std::process::exit;

use annatto::pipeline::{DbCatalog, PipelineConfig};
use annatto::tools::ToolRegistry;
use clap::Args;
use console::style;

use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct CheckArgs {
    #[arg(short = 'c', long, help = "Path of the pipeline configuration TOML.")]
    config: Option<PathBuf>,
    #[arg(long, help = "Root directory of the reference protein databases.")]
    db_dir: Option<PathBuf>,
}

impl CheckArgs {
    pub fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_path(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(db_dir) = &self.db_dir {
            config.general.db_dir = Some(db_dir.clone());
        }

        let registry = ToolRegistry::builtin();
        let mut missing = 0usize;

        println!("Feature identification tools:");
        for (name, _) in config.enabled_features() {
            match registry.identifier(name) {
                Ok(tool) if tool.is_available() => {
                    println!("  [{}] {}", style("V").green(), name);
                },
                Ok(tool) => {
                    println!(
                        "  [{}] {} (binary `{}` not found in PATH)",
                        style("X").red(),
                        name,
                        tool.binary()
                    );
                    missing += 1;
                },
                Err(_) => {
                    println!("  [{}] {} (unknown tool)", style("X").red(), name);
                    missing += 1;
                },
            }
        }

        println!("Homology search tools:");
        for name in config.cds.keys() {
            match registry.searcher(name) {
                Ok(tool) if tool.is_available() => {
                    println!("  [{}] {}", style("V").green(), name);

                    if let Some(db_dir) = &config.general.db_dir {
                        let catalog = DbCatalog::new(db_dir);
                        for stem in catalog.ordered(config.general.kingdom)? {
                            if tool.database_exists(&stem) {
                                println!(
                                    "    [{}] {}",
                                    style("V").green(),
                                    stem.display()
                                );
                            }
                            else {
                                println!(
                                    "    [{}] {} (will be skipped)",
                                    style("-").yellow(),
                                    stem.display()
                                );
                            }
                        }
                    }
                },
                Ok(tool) => {
                    println!(
                        "  [{}] {} (binary `{}` not found in PATH)",
                        style("X").red(),
                        name,
                        tool.binary()
                    );
                    missing += 1;
                },
                Err(_) => {
                    println!("  [{}] {} (unknown tool)", style("X").red(), name);
                    missing += 1;
                },
            }
        }

        if missing > 0 {
            eprintln!("{} required tools are missing.", style(missing).red());
            exit(-1);
        }
        println!("{}", style("All configured tools are available.").green());
        Ok(())
    }
}
