//! despiece-drawing: Pure component model and drawing geometry (sans-IO).
//!
//! Turns fabrication component descriptors into scaled, aspect-correct
//! cut geometry on a fixed canvas:
//! normalize -> fit -> outline.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! descriptors and returns structured data.  Document serialization
//! lives in `despiece-export`; browser interaction in `despiece-io`.

pub mod layout;
pub mod measure;
pub mod normalize;
pub mod path;
pub mod shape;
pub mod types;

pub use layout::{CanvasConfig, FitLayout};
pub use measure::format_measurement;
pub use normalize::NormalizedComponent;
pub use shape::{ShapeOutline, outline};
pub use types::{Component, ComponentDimensions, Material, ShapeKind};
