// minipix/src/cli.rs
use clap::{ArgAction, Parser};

/// Everything else is asked interactively.
#[derive(Parser, Debug)]
#[command(name = "minipix", disable_help_flag = true)]
pub struct Cli {
    /// Show help information and exit
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,
}
