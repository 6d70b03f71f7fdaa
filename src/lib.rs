mod cli;
mod core;
mod processors;
mod prompt;
mod report;
mod session;
mod utils;

pub use cli::Cli;
pub use crate::core::sweeper::{summarize, Sweeper};
pub use crate::core::{
    FormatStats, ImageRecord, MinipixError, Result, ScanOutcome, ScanRequest, Summary,
    TransferMode, DEFAULT_MIN_SIZE_KB,
};
pub use processors::{extension_of, prune_empty_dirs, FileWalker, ImageFormats, Transferer};
pub use prompt::{is_exit, is_yes, parse_answer, Prompter};
pub use report::{print_help, print_notice, print_pruned, print_summary, HELP_TEXT};
pub use session::Session;
pub use utils::{
    average, bytes_to_kb, destination_dir, destination_name, format_timestamp, TIMESTAMP_FORMAT,
};

pub mod prelude {
    pub use crate::{ImageFormats, Prompter, ScanRequest, Session, Sweeper, TransferMode};
}
