//! Component normalization: one explicit defaulting step.
//!
//! Upstream descriptors are best-effort output from a vision model and
//! may arrive with zero, missing, or nonsensical dimensions.  Rather
//! than sprinkling fallbacks through the renderer, the whole default
//! policy lives here: every render starts by building a
//! [`NormalizedComponent`], and the rest of the pipeline consumes only
//! fully-defaulted values.
//!
//! A missing dimension never fails a render; it falls back to a safe
//! non-zero placeholder so the drawing stays reviewable.

use crate::path;
use crate::types::{Component, ShapeKind};

/// Fallback front-view width when `largo` is missing or zero, in cm.
pub const DEFAULT_LENGTH_CM: f64 = 100.0;

/// Fallback front-view height when `alto` is missing or zero, in cm.
pub const DEFAULT_HEIGHT_CM: f64 = 100.0;

/// Fallback depth/thickness when `ancho` is missing or zero, in cm.
pub const DEFAULT_DEPTH_CM: f64 = 10.0;

/// A component with every value the renderer needs already defaulted
/// and converted.  Front-view footprint is in millimetres; depth keeps
/// the declared display unit because it is only ever shown as text.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedComponent {
    /// Component id (unchanged).
    pub id: String,
    /// Component name (unchanged).
    pub name: String,
    /// Front-view width in millimetres.
    pub width_mm: f64,
    /// Front-view height in millimetres.
    pub height_mm: f64,
    /// Depth/thickness in the declared unit, for the info block.
    pub depth: f64,
    /// Display unit label for `depth`.
    pub unit: String,
    /// Normalized shape kind (unknown labels already degraded).
    pub shape: ShapeKind,
    /// Validated, whitespace-optimized cut path, if usable.
    pub cut_path: Option<String>,
    /// Validated fold path; present only alongside a cut path.
    pub fold_path: Option<String>,
    /// Material type label.
    pub material_kind: String,
    /// Material quantity.
    pub quantity: f64,
    /// Unit for `quantity`.
    pub quantity_unit: String,
    /// Free-text notes for the info block.
    pub notes: Option<String>,
}

impl NormalizedComponent {
    /// Build a fully-defaulted view of `component`.
    ///
    /// Applies the dimension fallbacks, converts the front-view
    /// footprint to millimetres, normalizes the shape label, and
    /// validates cut/fold paths.  A path that fails validation is
    /// treated as absent, so an irregular shape without a usable path
    /// degrades to the flagged placeholder instead of embedding
    /// arbitrary text in the document.
    #[must_use]
    pub fn from_component(component: &Component) -> Self {
        let dims = &component.dimensions;
        let length_cm = positive_or(dims.length, DEFAULT_LENGTH_CM);
        let height_cm = positive_or(dims.height, DEFAULT_HEIGHT_CM);
        let depth = positive_or(dims.width, DEFAULT_DEPTH_CM);

        let cut_path = component
            .cut_path
            .as_deref()
            .filter(|p| path::is_valid_path_data(p))
            .map(path::optimize_path_data);
        // A fold line without a cut line has nothing to fold.
        let fold_path = if cut_path.is_some() {
            component
                .fold_path
                .as_deref()
                .filter(|p| path::is_valid_path_data(p))
                .map(path::optimize_path_data)
        } else {
            None
        };

        Self {
            id: component.id.clone(),
            name: component.name.clone(),
            width_mm: length_cm * crate::measure::MM_PER_CM,
            height_mm: height_cm * crate::measure::MM_PER_CM,
            depth,
            unit: dims.unit.clone(),
            shape: ShapeKind::from_label(dims.shape.as_deref()),
            cut_path,
            fold_path,
            material_kind: component.material.kind.clone(),
            quantity: component.material.quantity,
            quantity_unit: component.material.quantity_unit.clone(),
            notes: component.notes.clone(),
        }
    }
}

/// `value` when it is a usable physical dimension, `fallback` otherwise.
fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
