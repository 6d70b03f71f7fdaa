// minipix/src/session.rs
use crate::core::sweeper::Sweeper;
use crate::core::{Result, ScanOutcome, ScanRequest, TransferMode, DEFAULT_MIN_SIZE_KB};
use crate::processors::prune_empty_dirs;
use crate::prompt::{is_exit, Prompter};
use crate::report::{print_notice, print_pruned, print_summary};
use std::io::{BufRead, Write};

const ASK_DIRECTORY: &str = "Enter the directory to scan for images: ";
const ASK_MIN_SIZE: &str = "Enter minimum file size in KB (default: 90KB): ";
const ASK_MOVE: &str = "Do you want to move the original files? (y/n, default: n): ";
const ASK_PRUNE: &str = "Do you want to delete empty directories? (y/n, default: n): ";
const ASK_AGAIN: &str =
    "Do you want to process another directory? (e to exit, any key to continue): ";

/// Drives the interactive loop: ask, sweep, report, optionally prune, repeat.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    sweeper: Sweeper,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(prompter: Prompter<R, W>, sweeper: Sweeper) -> Self {
        Self { prompter, sweeper }
    }

    /// Runs until the operator answers `e`. Returns the number of runs.
    pub fn run(&mut self) -> Result<usize> {
        let mut runs = 0;

        loop {
            self.run_once()?;
            runs += 1;

            let answer: String = self.prompter.ask(ASK_AGAIN, Some("n".to_string()))?;
            if is_exit(&answer) {
                print_notice(self.prompter.output(), "Exiting. Goodbye!")?;
                return Ok(runs);
            }
        }
    }

    /// One full iteration, prompts included.
    pub fn run_once(&mut self) -> Result<ScanOutcome> {
        let request = self.ask_request()?;

        print_notice(self.prompter.output(), "Scanning for images...")?;
        let outcome = self.sweeper.sweep(&request)?;

        let summary = self.sweeper.summarize(&outcome);
        print_summary(self.prompter.output(), &summary)?;

        if self.prompter.confirm(ASK_PRUNE)? {
            let removed = prune_empty_dirs(&request.root)?;
            print_pruned(self.prompter.output(), &removed)?;
        }

        Ok(outcome)
    }

    fn ask_request(&mut self) -> Result<ScanRequest> {
        let root = self.prompter.ask_directory(ASK_DIRECTORY)?;
        let min_size_kb: i64 = self.prompter.ask(ASK_MIN_SIZE, Some(DEFAULT_MIN_SIZE_KB))?;
        let move_files = self.prompter.confirm(ASK_MOVE)?;

        ScanRequest::new(root, min_size_kb, TransferMode::from_move_flag(move_files))
    }
}
