// minipix/src/utils/mod.rs
use chrono::{DateTime, Local};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// `<root>/<YYYYMMDD_HHMMSS>` for the given instant.
pub fn destination_dir(root: &Path, at: DateTime<Local>) -> PathBuf {
    root.join(format_timestamp(at))
}

/// `<root name>_<original file name>`, bytes and casing preserved.
pub fn destination_name(root_name: &OsStr, file_name: &OsStr) -> OsString {
    let mut name = OsString::with_capacity(root_name.len() + 1 + file_name.len());
    name.push(root_name);
    name.push("_");
    name.push(file_name);
    name
}

/// Binary kibibytes.
pub fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Arithmetic mean, or 0 for an empty input.
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
