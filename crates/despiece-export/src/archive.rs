//! ZIP packaging of generated cutting files.
//!
//! Bundles every generated document plus the instructions sheet into a
//! single in-memory ZIP under one `archivos_corte/` folder.  The
//! serializer returns bytes and a filename; triggering the actual
//! browser download lives in `despiece-io`.

use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Write};

use despiece_drawing::types::Component;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::filename::{cut_file_name, sanitize_filename};
use crate::readme::cutting_readme;

/// Folder inside the archive holding the cutting files.
pub const ARCHIVE_FOLDER: &str = "archivos_corte";

/// Name of the instructions sheet inside the archive folder.
pub const README_NAME: &str = "LEEME.txt";

/// Project stem used when the project name sanitizes to nothing.
const DEFAULT_PROJECT_STEM: &str = "proyecto";

/// Errors assembling a cutting archive.
///
/// Fatal for the export call that raised them; already-generated
/// drawings remain valid and the caller may retry.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// No drawings were supplied, so there is nothing to package.
    #[error("no cutting files to package")]
    Empty,

    /// The ZIP writer rejected an entry.
    #[error("failed to assemble archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Writing entry bytes failed.
    #[error("failed to write archive data: {0}")]
    Io(#[from] std::io::Error),
}

/// A fully assembled cutting archive, ready to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuttingArchive {
    /// Suggested download filename,
    /// `{sanitized_project}_archivos_corte.zip`.
    pub file_name: String,
    /// Raw ZIP bytes.
    pub bytes: Vec<u8>,
}

/// Package drawings into a ZIP archive.
///
/// One deflated `.svg` entry per drawing id, named from the first
/// component carrying that id (`componente_{id}.svg` when none does),
/// plus the `LEEME.txt` instructions sheet.  Entry order follows the
/// component list, then any orphan drawing ids sorted, so identical
/// inputs produce identical archives.
///
/// # Errors
///
/// [`ArchiveError::Empty`] when `drawings` is empty; [`ArchiveError::Zip`]
/// or [`ArchiveError::Io`] when an entry cannot be written.  A failure
/// here leaves the supplied drawings untouched.
pub fn build_archive(
    drawings: &HashMap<String, String>,
    components: &[Component],
    project_name: &str,
    generated_on: &str,
) -> Result<CuttingArchive, ArchiveError> {
    if drawings.is_empty() {
        return Err(ArchiveError::Empty);
    }

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.add_directory(ARCHIVE_FOLDER, options)?;

    // Component order first; the first component with a given id names
    // the entry even if a later duplicate supplied the drawing.
    let mut written: HashSet<&str> = HashSet::new();
    for component in components {
        if written.contains(component.id.as_str()) {
            continue;
        }
        if let Some(svg) = drawings.get(&component.id) {
            let name = cut_file_name(Some(component), &component.id);
            writer.start_file(format!("{ARCHIVE_FOLDER}/{name}"), options)?;
            writer.write_all(svg.as_bytes())?;
            written.insert(component.id.as_str());
        }
    }

    // Drawings whose id matches no component still ship, under the
    // fallback name, in sorted order.
    let mut orphans: Vec<&str> = drawings
        .keys()
        .map(String::as_str)
        .filter(|id| !written.contains(id))
        .collect();
    orphans.sort_unstable();
    for id in orphans {
        if let Some(svg) = drawings.get(id) {
            let name = cut_file_name(None, id);
            writer.start_file(format!("{ARCHIVE_FOLDER}/{name}"), options)?;
            writer.write_all(svg.as_bytes())?;
        }
    }

    writer.start_file(format!("{ARCHIVE_FOLDER}/{README_NAME}"), options)?;
    writer.write_all(cutting_readme(components, project_name, generated_on).as_bytes())?;

    let cursor = writer.finish()?;

    let mut stem = sanitize_filename(project_name);
    if stem.is_empty() {
        stem = DEFAULT_PROJECT_STEM.to_owned();
    }

    Ok(CuttingArchive {
        file_name: format!("{stem}_{ARCHIVE_FOLDER}.zip"),
        bytes: cursor.into_inner(),
    })
}
