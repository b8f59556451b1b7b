//! despiece-io: Browser I/O for the cutting-file engine.
//!
//! Blob downloads, clipboard writes, analytics events, and the export
//! entry points the surrounding application calls.  Everything pure
//! lives upstream in `despiece-drawing` / `despiece-export`; this crate
//! owns the side effects.

pub mod analytics;
pub mod clipboard;
pub mod download;
pub mod export;

pub use clipboard::ClipboardError;
pub use download::DownloadError;
pub use export::{
    ExportError, copy_cut_file, download_cut_file, download_cutting_archive,
};
