//! Shape outline computation.
//!
//! Maps a normalized component onto its scaled cut outline inside a
//! [`FitLayout`] box.  The result is plain geometry; serialization into
//! document elements happens downstream in the export crate.

use crate::layout::FitLayout;
use crate::normalize::NormalizedComponent;
use crate::path::PATH_SPACE;
use crate::types::ShapeKind;

/// The computed cut outline of one component, in canvas coordinates.
///
/// One variant per drawable situation; the renderer matches
/// exhaustively, so a new [`ShapeKind`] cannot be forgotten here.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeOutline {
    /// Axis-aligned rectangle filling the drawing box.
    Rectangle {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Box width.
        width: f64,
        /// Box height.
        height: f64,
    },

    /// Ellipse inscribed in the drawing box.  A true circle only when
    /// the footprint is square; the radii follow the real proportions.
    Ellipse {
        /// Center X.
        cx: f64,
        /// Center Y.
        cy: f64,
        /// Horizontal radius (half the box width).
        rx: f64,
        /// Vertical radius (half the box height).
        ry: f64,
    },

    /// Isosceles triangle: apex centered on the top edge, base
    /// spanning the full bottom edge.
    Triangle {
        /// Apex, bottom-left, bottom-right.
        points: [(f64, f64); 3],
    },

    /// L-shaped outline; each arm is one third of the box along its
    /// axis.
    LShape {
        /// Six corners, clockwise from the top-left.
        points: [(f64, f64); 6],
    },

    /// Irregular outline from a normalized cut path, mapped into the
    /// drawing box by translate-then-scale.
    IrregularPath {
        /// Top-left corner of the drawing box.
        origin: (f64, f64),
        /// Horizontal factor from path space to canvas units.
        scale_x: f64,
        /// Vertical factor from path space to canvas units.
        scale_y: f64,
        /// Cut line path data (normalized 0-100 space).
        cut: String,
        /// Optional fold line path data in the same space.
        fold: Option<String>,
    },

    /// An irregular shape with no usable cut path.  Rendered as a
    /// flagged warning placeholder, never as a clean rectangle: an
    /// unspecified cut must be visible to a reviewer before material
    /// is wasted on it.
    MissingPath {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Box width.
        width: f64,
        /// Box height.
        height: f64,
    },
}

/// Compute the cut outline for `component` inside `layout`.
#[must_use]
pub fn outline(component: &NormalizedComponent, layout: &FitLayout) -> ShapeOutline {
    let x = layout.origin_x;
    let y = layout.origin_y;
    let w = layout.draw_width;
    let h = layout.draw_height;

    match component.shape {
        ShapeKind::Rectangle => ShapeOutline::Rectangle {
            x,
            y,
            width: w,
            height: h,
        },
        ShapeKind::Circle => {
            let rx = w / 2.0;
            let ry = h / 2.0;
            ShapeOutline::Ellipse {
                cx: x + rx,
                cy: y + ry,
                rx,
                ry,
            }
        }
        ShapeKind::Triangle => ShapeOutline::Triangle {
            points: [(x + w / 2.0, y), (x, y + h), (x + w, y + h)],
        },
        ShapeKind::LShape => {
            let arm_x = w / 3.0;
            let arm_y = h / 3.0;
            ShapeOutline::LShape {
                points: [
                    (x, y),
                    (x + arm_x, y),
                    (x + arm_x, y + h - arm_y),
                    (x + w, y + h - arm_y),
                    (x + w, y + h),
                    (x, y + h),
                ],
            }
        }
        ShapeKind::Irregular => component.cut_path.as_ref().map_or(
            ShapeOutline::MissingPath {
                x,
                y,
                width: w,
                height: h,
            },
            |cut| ShapeOutline::IrregularPath {
                origin: (x, y),
                scale_x: w / PATH_SPACE,
                scale_y: h / PATH_SPACE,
                cut: cut.clone(),
                fold: component.fold_path.clone(),
            },
        ),
    }
}
