//! Shared types for the despiece drawing pipeline.
//!
//! [`Component`] mirrors the descriptor shape produced by the upstream
//! analysis service and stored in saved production manuals, so the serde
//! field names follow that wire format (`nombre`, `largo`, `tipo`, ...).
//! Components are immutable inputs to the drawing pipeline; nothing in
//! this workspace mutates them after deserialization.

use serde::{Deserialize, Serialize};

/// A single fabrication component: one physical piece to cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Opaque unique identifier, stable across regeneration.  Used as
    /// the key for generated drawings and archive filenames.
    pub id: String,

    /// Human-readable component label.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Free-text description from the upstream analysis.
    #[serde(rename = "descripcion", default)]
    pub description: String,

    /// Real-world dimensions of the piece.
    #[serde(rename = "dimensiones")]
    pub dimensions: ComponentDimensions,

    /// Material the piece is cut from.
    pub material: Material,

    /// Fabrication process steps (informational, not drawn).
    #[serde(rename = "proceso", default)]
    pub process: Vec<String>,

    /// Free-text notes appended to the technical info block.
    #[serde(rename = "notas", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Cut outline for irregular shapes, as SVG path data in the
    /// normalized 0-100 coordinate space (see [`crate::path::PATH_SPACE`]).
    #[serde(rename = "svgPath", default, skip_serializing_if = "Option::is_none")]
    pub cut_path: Option<String>,

    /// Optional fold/score line in the same normalized space.  Only
    /// rendered when a cut path is also present.
    #[serde(rename = "foldPath", default, skip_serializing_if = "Option::is_none")]
    pub fold_path: Option<String>,
}

/// Real-world dimensions of a component, in the declared display unit
/// (centimetres unless the upstream service says otherwise).
///
/// `length` x `height` define the front-view footprint used for layout;
/// `width` is the depth/material thickness, shown only in the technical
/// info text and never drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDimensions {
    /// Front-view width.
    #[serde(rename = "largo", default)]
    pub length: f64,

    /// Depth / material thickness.
    #[serde(rename = "ancho", default)]
    pub width: f64,

    /// Front-view height.
    #[serde(rename = "alto", default)]
    pub height: f64,

    /// Display unit label, e.g. `"cm"`.
    #[serde(rename = "unidad", default = "default_unit")]
    pub unit: String,

    /// Shape label from upstream (`"rectangulo"`, `"circulo"`,
    /// `"triangulo"`, `"L"`, `"irregular"`).  Normalized into
    /// [`ShapeKind`] at the pipeline boundary; anything unrecognized
    /// degrades to a rectangle.
    #[serde(rename = "forma", default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

fn default_unit() -> String {
    "cm".to_owned()
}

impl Default for ComponentDimensions {
    fn default() -> Self {
        Self {
            length: 0.0,
            width: 0.0,
            height: 0.0,
            unit: default_unit(),
            shape: None,
        }
    }
}

/// Material specification for a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material type, e.g. `"MDF 15mm"`.
    #[serde(rename = "tipo")]
    pub kind: String,

    /// Free-text specification summary.
    #[serde(rename = "especificaciones", default)]
    pub spec_summary: String,

    /// How much of the material this piece needs.
    #[serde(rename = "cantidad", default)]
    pub quantity: f64,

    /// Unit for `quantity`, e.g. `"piezas"`.
    #[serde(rename = "unidadCantidad", default)]
    pub quantity_unit: String,
}

/// Logical cut shape of a component's front view.
///
/// A closed set: the shape renderer matches exhaustively on this enum,
/// so adding a kind is a compile-time-checked extension.  Unknown labels
/// from upstream are normalized to [`ShapeKind::Rectangle`] by
/// [`ShapeKind::from_label`] before entering the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned rectangle (the default and the fallback).
    #[default]
    Rectangle,
    /// Ellipse inscribed in the front-view bounding box.
    Circle,
    /// Isosceles triangle, apex centered on the top edge.
    Triangle,
    /// L-shaped outline with arms one third of the bounding box.
    LShape,
    /// Arbitrary outline supplied as a normalized cut path.
    Irregular,
}

impl ShapeKind {
    /// Normalize an upstream shape label into a [`ShapeKind`].
    ///
    /// Absent or unrecognized labels degrade to `Rectangle` rather than
    /// fail: a wrong-but-rectangular drawing is reviewable, a refused
    /// render is not.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("circulo") => Self::Circle,
            Some("triangulo") => Self::Triangle,
            Some("L") => Self::LShape,
            Some("irregular") => Self::Irregular,
            Some(_) | None => Self::Rectangle,
        }
    }
}
