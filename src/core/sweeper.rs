// minipix/src/core/sweeper.rs
use super::{FormatStats, ImageRecord, Result, ScanOutcome, ScanRequest, Summary};
use crate::processors::prelude::*;
use crate::utils::{average, bytes_to_kb, destination_dir, destination_name};
use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Scans a tree, classifies images by size and transfers the small ones.
pub struct Sweeper {
    formats: ImageFormats,
    progress: ProgressBar,
}

impl Sweeper {
    pub fn new(formats: ImageFormats) -> Self {
        Self {
            formats,
            progress: ProgressBar::hidden(),
        }
    }

    /// Shows a spinner on stderr while scanning.
    pub fn with_progress(mut self) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} files {msg}") {
            pb.set_style(style);
        }
        self.progress = pb;
        self
    }

    pub fn sweep(&self, request: &ScanRequest) -> Result<ScanOutcome> {
        self.sweep_at(request, Local::now())
    }

    /// Like [`sweep`](Self::sweep) with an explicit timestamp for the
    /// destination directory.
    pub fn sweep_at(&self, request: &ScanRequest, at: DateTime<Local>) -> Result<ScanOutcome> {
        let destination = destination_dir(&request.root, at);
        std::fs::create_dir_all(&destination)?;

        log::info!(
            "Scanning {} (threshold {} KB, {:?}) into {}",
            request.root.display(),
            request.min_size_kb,
            request.mode,
            destination.display()
        );

        let root_name = request.root_name();
        let transferer = Transferer::new(request.mode);
        let threshold = request.min_size_kb as f64;

        let mut outcome = ScanOutcome {
            destination: destination.clone(),
            ..Default::default()
        };

        self.progress.reset();
        let walker = FileWalker::new(&request.root).excluding(&destination);

        for item in walker.files() {
            let (dir, file_name) = item?;
            self.progress.inc(1);

            let path = dir.join(&file_name);
            let Some(extension) = self.formats.classify(Path::new(&file_name)) else {
                continue;
            };

            let size_kb = bytes_to_kb(std::fs::metadata(&path)?.len());
            log::debug!("Found {} ({:.2} KB)", path.display(), size_kb);

            let record = ImageRecord {
                path,
                extension,
                size_kb,
            };

            if size_kb < threshold {
                let target = destination.join(destination_name(root_name, &file_name));
                transferer.transfer(&record.path, &target)?;
                outcome.moved.push(record.clone());
            }

            outcome.found.push(record);
            self.progress
                .set_message(format!("({} images)", outcome.found.len()));
        }

        self.progress.finish_and_clear();
        Ok(outcome)
    }

    pub fn summarize(&self, outcome: &ScanOutcome) -> Summary {
        summarize(&self.formats, outcome)
    }
}

/// Aggregates counts and averages; formats with no found files are omitted.
pub fn summarize(formats: &ImageFormats, outcome: &ScanOutcome) -> Summary {
    let per_format = formats
        .iter()
        .filter_map(|ext| {
            let found = outcome.found.iter().filter(|r| r.extension == ext).count();
            if found == 0 {
                return None;
            }
            let moved = outcome.moved.iter().filter(|r| r.extension == ext).count();
            Some(FormatStats {
                extension: ext.to_string(),
                found,
                moved,
            })
        })
        .collect();

    Summary {
        total_found: outcome.found.len(),
        total_moved: outcome.moved.len(),
        per_format,
        average_found_kb: average(outcome.found.iter().map(|r| r.size_kb)),
        average_moved_kb: average(outcome.moved.iter().map(|r| r.size_kb)),
    }
}
