//! Export entry points for the surrounding application.
//!
//! Each function takes already-generated data (or generates it), then
//! performs the browser side effect: file download or clipboard write.
//! Failures are typed and returned to the caller for user-visible
//! notification; a failed download or copy never invalidates the
//! in-memory documents, so every operation is retryable.

use despiece_drawing::CanvasConfig;
use despiece_drawing::types::Component;
use despiece_export::archive::ArchiveError;
use despiece_export::{build_archive, cut_file_name, generate_all};
use wasm_bindgen::JsValue;

use crate::analytics;
use crate::clipboard::{self, ClipboardError};
use crate::download::{self, DownloadError};

/// MIME type for single cutting-file downloads.
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// MIME type for archive downloads.
pub const ZIP_MIME_TYPE: &str = "application/zip";

/// Locale used for the generation date on the instructions sheet.
const DATE_LOCALE: &str = "es-MX";

/// Errors from the batch archive export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Assembling the ZIP failed; nothing was downloaded.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// The archive was built but the browser download failed; the
    /// caller may retry without regenerating.
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Download one generated cutting file as
/// `{sanitized_name}_{id}.svg`.
///
/// # Errors
///
/// Returns [`DownloadError`] if the browser download cannot be
/// triggered; the document string remains valid.
pub fn download_cut_file(svg: &str, component: &Component) -> Result<(), DownloadError> {
    let filename = cut_file_name(Some(component), &component.id);
    download::trigger_download(svg, &filename, SVG_MIME_TYPE)?;
    analytics::track_export("svg");
    Ok(())
}

/// Copy one generated cutting file's raw text to the clipboard.
///
/// # Errors
///
/// Returns [`ClipboardError`] if the clipboard is unavailable or the
/// write is rejected (e.g., missing permission).
#[allow(clippy::future_not_send)] // WASM is single-threaded; Clipboard is !Send
pub async fn copy_cut_file(svg: &str) -> Result<(), ClipboardError> {
    clipboard::write_text(svg).await?;
    analytics::track_export("svg_clipboard");
    Ok(())
}

/// Generate every drawing, package the ZIP archive, and download it as
/// `{sanitized_project}_archivos_corte.zip`.
///
/// # Errors
///
/// Returns [`ExportError::Archive`] when packaging fails (e.g., no
/// components) and [`ExportError::Download`] when the browser refuses
/// the download; in the latter case the drawings were still generated
/// and a retry is cheap.
pub fn download_cutting_archive(
    components: &[Component],
    project_name: &str,
    canvas: &CanvasConfig,
) -> Result<(), ExportError> {
    let drawings = generate_all(components, canvas);
    let archive = build_archive(&drawings, components, project_name, &current_date())?;
    download::trigger_download_bytes(&archive.bytes, &archive.file_name, ZIP_MIME_TYPE)?;
    analytics::track_export("zip");
    Ok(())
}

/// Today's date formatted for the instructions sheet, e.g. `15/8/2026`.
fn current_date() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string(DATE_LOCALE, &JsValue::UNDEFINED)
        .into()
}
