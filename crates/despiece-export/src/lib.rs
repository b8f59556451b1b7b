//! despiece-export: Pure format serializers (sans-IO).
//!
//! Converts component descriptors into distribution-ready outputs: one
//! annotated SVG cutting file per component, the Spanish instructions
//! sheet, and the ZIP archive that bundles them.  Everything here
//! returns in-memory strings/bytes; browser downloads and clipboard
//! writes live in `despiece-io`.

pub mod annotate;
pub mod archive;
pub mod batch;
pub mod document;
pub mod filename;
pub mod readme;

pub use archive::{ArchiveError, CuttingArchive, build_archive};
pub use batch::generate_all;
pub use document::to_cut_svg;
pub use filename::{cut_file_name, sanitize_filename};
pub use readme::cutting_readme;
