// minipix/src/processors/formats.rs
use image::ImageFormat;
use std::collections::BTreeSet;
use std::path::Path;

/// Always treated as an image even when the codec table lacks it.
const ALWAYS_INCLUDED: &str = ".webp";

/// The set of lowercase, dot-prefixed extensions that count as images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFormats {
    extensions: BTreeSet<String>,
}

impl ImageFormats {
    /// Derives the set from every format the `image` crate can decode.
    pub fn from_registry() -> Self {
        let registered = ImageFormat::all()
            .filter(|format| format.reading_enabled())
            .flat_map(|format| format.extensions_str().iter().copied());

        let formats = Self::from_extensions(registered);
        log::debug!("Recognised image extensions: {:?}", formats.extensions);
        formats
    }

    /// Builds the set from bare or dotted extensions; `.webp` is always added.
    pub fn from_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: BTreeSet<String> = extensions
            .into_iter()
            .map(|ext| normalize(ext.as_ref()))
            .filter(|ext| ext.len() > 1)
            .collect();
        set.insert(ALWAYS_INCLUDED.to_string());

        Self { extensions: set }
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    /// Returns the file's lowercased extension if it names an image format.
    pub fn classify(&self, path: &Path) -> Option<String> {
        let extension = extension_of(path)?;
        self.contains(&extension).then_some(extension)
    }

    /// Extensions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

/// Lowercased `.ext` of a path, or `None` when it has no extension.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

fn normalize(extension: &str) -> String {
    let lower = extension.trim().to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}
