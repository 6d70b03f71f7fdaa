// minipix/src/processors/mod.rs
mod formats;
mod pruner;
mod transfer;
mod walker;

pub use formats::{extension_of, ImageFormats};
pub use pruner::prune_empty_dirs;
pub use transfer::Transferer;
pub use walker::FileWalker;

pub mod prelude {
    pub use super::{FileWalker, ImageFormats, Transferer};
}
