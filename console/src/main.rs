mod annotate;
mod check;
mod utils;

use annotate::AnnotateArgs;
use check::CheckArgs;
use clap::{Parser, Subcommand};
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    #[command(about = "Annotate the sequences of a FASTA file.")]
    Annotate {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  AnnotateArgs,
    },

    #[command(about = "Check that the configured tools and databases are available.")]
    Check {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  CheckArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Annotate { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Check { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
