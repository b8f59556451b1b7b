//! Cutting-file document composer.
//!
//! Assembles one complete, self-contained SVG document per component
//! using the [`svg`] crate for document construction and XML escaping.
//! Layer order is fixed (back to front): waste-material background,
//! white contrast panel, cut shape, dimension lines, registration
//! marks, scale bar, technical info, metadata line, outer border.
//! Canvas geometry is shared by every document, so batch tooling can
//! assume a uniform structure.
//!
//! All pattern and marker definitions are local to the document; a
//! file extracted from an archive renders identically on its own.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use despiece_drawing::normalize::NormalizedComponent;
use despiece_drawing::shape::{ShapeOutline, outline};
use despiece_drawing::types::Component;
use despiece_drawing::{CanvasConfig, FitLayout, format_measurement};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{
    Definitions, Ellipse, Group, Line, Marker, Path, Pattern, Polygon, Rectangle, Text, Title,
};

use crate::annotate::{
    FONT_FAMILY, Orientation, dimension_line, registration_mark, scale_bar, technical_info,
};

/// Heading printed at the top center of every cutting file.
pub const DOCUMENT_HEADING: &str = "ARCHIVO DE CORTE - VISTA FRONTAL";

/// Warning shown when an irregular shape has no usable cut path.
pub const MISSING_PATH_WARNING: &str = "⚠ FORMA IRREGULAR";

/// Hint line under the missing-path warning.
pub const MISSING_PATH_HINT: &str = "Definir path SVG para corte preciso";

/// Offset of dimension lines from the measured edges.
const DIMENSION_OFFSET: f64 = 30.0;

/// Inset of the corner registration marks from the canvas edges.
const REGISTRATION_INSET: f64 = 20.0;
const REGISTRATION_SIZE: f64 = 10.0;

const CUT_COLOR: &str = "#000000";
const CUT_STROKE_WIDTH: f64 = 3.0;
const IRREGULAR_STROKE_WIDTH: f64 = 2.0;
const FOLD_COLOR: &str = "#FF0000";
const WARNING_COLOR: &str = "#FF6600";
const USEFUL_FILL: &str = "url(#usefulMaterial)";
const WASTE_FILL: &str = "url(#wasteMaterial)";
const CONTRAST_MARGIN: f64 = 5.0;

/// Serialize one component into a complete cutting-file SVG document.
///
/// The component is normalized (defaults applied, shape label resolved,
/// paths validated), fitted onto the canvas with a single uniform scale
/// factor, and drawn with its annotations.  Output is a UTF-8 XML
/// string with a prepended XML declaration; the canvas `width`/`height`
/// and `viewBox` come from `canvas` (800x600 in production).
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn to_cut_svg(component: &Component, canvas: &CanvasConfig) -> String {
    let normalized = NormalizedComponent::from_component(component);
    let layout = FitLayout::fit(canvas, normalized.width_mm, normalized.height_mm);
    let shape = outline(&normalized, &layout);

    let right = layout.origin_x + layout.draw_width;
    let bottom = layout.origin_y + layout.draw_height;

    let mut doc = Document::new()
        .set("width", canvas.width)
        .set("height", canvas.height)
        .set("viewBox", (0.0, 0.0, canvas.width, canvas.height))
        .add(Title::new(normalized.name.clone()))
        .add(material_defs())
        // Waste-material texture across the whole sheet.
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", canvas.width)
                .set("height", canvas.height)
                .set("fill", WASTE_FILL),
        )
        // White panel behind the piece for contrast.
        .add(
            Rectangle::new()
                .set("x", layout.origin_x - CONTRAST_MARGIN)
                .set("y", layout.origin_y - CONTRAST_MARGIN)
                .set("width", layout.draw_width + 2.0 * CONTRAST_MARGIN)
                .set("height", layout.draw_height + 2.0 * CONTRAST_MARGIN)
                .set("fill", "#ffffff")
                .set("stroke", "none"),
        )
        .add(shape_element(&shape))
        // Bottom edge measures the width, right edge the height; both
        // labels carry real physical measurements.
        .add(dimension_line(
            (layout.origin_x, bottom),
            (right, bottom),
            &format_measurement(normalized.width_mm),
            DIMENSION_OFFSET,
            Orientation::Horizontal,
        ))
        .add(dimension_line(
            (right, layout.origin_y),
            (right, bottom),
            &format_measurement(normalized.height_mm),
            DIMENSION_OFFSET,
            Orientation::Vertical,
        ));

    for (x, y) in [
        (REGISTRATION_INSET, REGISTRATION_INSET),
        (canvas.width - REGISTRATION_INSET, REGISTRATION_INSET),
        (REGISTRATION_INSET, canvas.height - REGISTRATION_INSET),
        (
            canvas.width - REGISTRATION_INSET,
            canvas.height - REGISTRATION_INSET,
        ),
    ] {
        doc = doc.add(registration_mark(x, y, REGISTRATION_SIZE));
    }

    doc = doc
        .add(scale_bar(layout.origin_x, canvas.height - 35.0, layout.scale))
        .add(technical_info(&normalized, 20.0, canvas.height - 120.0))
        .add(
            Text::new(format!("ID: {}", normalized.id))
                .set("x", canvas.width - 20.0)
                .set("y", 15.0)
                .set("font-family", FONT_FAMILY)
                .set("font-size", 10)
                .set("fill", "#666666")
                .set("text-anchor", "end"),
        )
        .add(
            Text::new(DOCUMENT_HEADING)
                .set("x", canvas.width / 2.0)
                .set("y", 15.0)
                .set("font-family", FONT_FAMILY)
                .set("font-size", 12)
                .set("font-weight", "bold")
                .set("fill", CUT_COLOR)
                .set("text-anchor", "middle"),
        )
        // Dashed border marking the printable/cuttable area.
        .add(
            Rectangle::new()
                .set("x", 1)
                .set("y", 1)
                .set("width", canvas.width - 2.0)
                .set("height", canvas.height - 2.0)
                .set("fill", "none")
                .set("stroke", "#cccccc")
                .set("stroke-width", 1)
                .set("stroke-dasharray", "5,5"),
        );

    // The svg crate omits the XML declaration, so we prepend it.
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}

/// Local pattern and marker definitions.
///
/// `usefulMaterial` textures the piece itself, `wasteMaterial` the
/// surrounding sheet, and `foldArrow` marks fold-line direction.
fn material_defs() -> Definitions {
    let grain_line = |y: f64| {
        Line::new()
            .set("x1", 0)
            .set("y1", y)
            .set("x2", 30)
            .set("y2", y)
            .set("stroke", "#e8dcc8")
            .set("stroke-width", 0.5)
    };
    let useful = Pattern::new()
        .set("id", "usefulMaterial")
        .set("x", 0)
        .set("y", 0)
        .set("width", 30)
        .set("height", 30)
        .set("patternUnits", "userSpaceOnUse")
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", 30)
                .set("height", 30)
                .set("fill", "#fef9f3"),
        )
        .add(grain_line(5.0))
        .add(grain_line(15.0))
        .add(grain_line(25.0));

    let waste = Pattern::new()
        .set("id", "wasteMaterial")
        .set("x", 0)
        .set("y", 0)
        .set("width", 20)
        .set("height", 20)
        .set("patternUnits", "userSpaceOnUse")
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", 20)
                .set("height", 20)
                .set("fill", "#f8f8f8"),
        )
        .add(
            Path::new()
                .set("d", Data::new().move_to((20, 0)).line_to((0, 0)).line_to((0, 20)))
                .set("fill", "none")
                .set("stroke", "#e0e0e0")
                .set("stroke-width", 0.5),
        );

    let fold_arrow = Marker::new()
        .set("id", "foldArrow")
        .set("markerWidth", 10)
        .set("markerHeight", 10)
        .set("refX", 5)
        .set("refY", 5)
        .set("orient", "auto")
        .add(
            Path::new()
                .set("d", Data::new().move_to((0, 0)).line_to((10, 5)).line_to((0, 10)).close())
                .set("fill", FOLD_COLOR),
        );

    Definitions::new().add(useful).add(waste).add(fold_arrow)
}

fn points_attribute(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a computed outline as document elements.
///
/// Exhaustive over [`ShapeOutline`]: a new variant is a compile error
/// here, not a silently missing drawing.
fn shape_element(shape: &ShapeOutline) -> Group {
    let group = Group::new().set("class", "cut-shape");
    match shape {
        ShapeOutline::Rectangle { x, y, width, height } => group.add(
            Rectangle::new()
                .set("x", *x)
                .set("y", *y)
                .set("width", *width)
                .set("height", *height)
                .set("fill", USEFUL_FILL)
                .set("stroke", CUT_COLOR)
                .set("stroke-width", CUT_STROKE_WIDTH),
        ),
        ShapeOutline::Ellipse { cx, cy, rx, ry } => group.add(
            Ellipse::new()
                .set("cx", *cx)
                .set("cy", *cy)
                .set("rx", *rx)
                .set("ry", *ry)
                .set("fill", USEFUL_FILL)
                .set("stroke", CUT_COLOR)
                .set("stroke-width", CUT_STROKE_WIDTH),
        ),
        ShapeOutline::Triangle { points } => group.add(
            Polygon::new()
                .set("points", points_attribute(points))
                .set("fill", USEFUL_FILL)
                .set("stroke", CUT_COLOR)
                .set("stroke-width", CUT_STROKE_WIDTH),
        ),
        ShapeOutline::LShape { points } => group.add(
            Polygon::new()
                .set("points", points_attribute(points))
                .set("fill", USEFUL_FILL)
                .set("stroke", CUT_COLOR)
                .set("stroke-width", CUT_STROKE_WIDTH),
        ),
        ShapeOutline::IrregularPath {
            origin,
            scale_x,
            scale_y,
            cut,
            fold,
        } => {
            let mut inner = Group::new().set(
                "transform",
                format!(
                    "translate({}, {}) scale({}, {})",
                    origin.0, origin.1, scale_x, scale_y,
                ),
            );
            // Cut line: solid, filled as usable material.  The stroke
            // must not scale with the path transform.
            inner = inner.add(
                Path::new()
                    .set("d", cut.as_str())
                    .set("fill", USEFUL_FILL)
                    .set("stroke", CUT_COLOR)
                    .set("stroke-width", IRREGULAR_STROKE_WIDTH)
                    .set("vector-effect", "non-scaling-stroke")
                    .set("stroke-linecap", "round")
                    .set("stroke-linejoin", "round"),
            );
            if let Some(fold) = fold {
                // Fold line: dashed, unfilled, direction-marked.
                inner = inner.add(
                    Path::new()
                        .set("d", fold.as_str())
                        .set("fill", "none")
                        .set("stroke", FOLD_COLOR)
                        .set("stroke-width", 1.5)
                        .set("stroke-dasharray", "8,4")
                        .set("vector-effect", "non-scaling-stroke")
                        .set("marker-mid", "url(#foldArrow)"),
                );
            }
            group.add(inner)
        }
        ShapeOutline::MissingPath { x, y, width, height } => group
            .add(
                Rectangle::new()
                    .set("x", *x)
                    .set("y", *y)
                    .set("width", *width)
                    .set("height", *height)
                    .set("fill", USEFUL_FILL)
                    .set("stroke", WARNING_COLOR)
                    .set("stroke-width", CUT_STROKE_WIDTH)
                    .set("stroke-dasharray", "10,5"),
            )
            .add(
                Text::new(MISSING_PATH_WARNING)
                    .set("x", x + width / 2.0)
                    .set("y", y + height / 2.0)
                    .set("font-family", FONT_FAMILY)
                    .set("font-size", 20)
                    .set("font-weight", "bold")
                    .set("fill", WARNING_COLOR)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            )
            .add(
                Text::new(MISSING_PATH_HINT)
                    .set("x", x + width / 2.0)
                    .set("y", y + height / 2.0 + 25.0)
                    .set("font-family", FONT_FAMILY)
                    .set("font-size", 12)
                    .set("fill", "#666666")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use despiece_drawing::types::{ComponentDimensions, Material};

    fn component(shape: Option<&str>, length: f64, height: f64) -> Component {
        Component {
            id: "comp-7".to_owned(),
            name: "Costado <izquierdo>".to_owned(),
            description: String::new(),
            dimensions: ComponentDimensions {
                length,
                width: 1.8,
                height,
                unit: "cm".to_owned(),
                shape: shape.map(str::to_owned),
            },
            material: Material {
                kind: "MDF 18mm".to_owned(),
                spec_summary: String::new(),
                quantity: 1.0,
                quantity_unit: "pieza".to_owned(),
            },
            process: vec![],
            notes: None,
            cut_path: None,
            fold_path: None,
        }
    }

    #[test]
    fn document_has_fixed_canvas_and_declaration() {
        let svg = to_cut_svg(&component(None, 68.0, 48.0), &CanvasConfig::default());
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r#"width="800""#));
        assert!(svg.contains(r#"height="600""#));
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn canvas_is_fixed_regardless_of_component_size() {
        let small = to_cut_svg(&component(None, 5.0, 5.0), &CanvasConfig::default());
        let large = to_cut_svg(&component(None, 500.0, 400.0), &CanvasConfig::default());
        for svg in [&small, &large] {
            assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        }
    }

    #[test]
    fn default_shape_is_a_pattern_filled_rectangle() {
        let svg = to_cut_svg(&component(None, 68.0, 48.0), &CanvasConfig::default());
        assert!(svg.contains(r#"fill="url(#usefulMaterial)""#));
        assert!(svg.contains(r#"x="60""#));
        assert!(svg.contains(r#"width="680""#));
        assert!(svg.contains(r#"height="480""#));
    }

    #[test]
    fn unknown_shape_label_renders_the_rectangle_fallback() {
        let svg = to_cut_svg(
            &component(Some("estrella"), 68.0, 48.0),
            &CanvasConfig::default(),
        );
        assert!(!svg.contains("<ellipse"));
        assert!(!svg.contains("<polygon"));
        assert!(svg.contains(r#"width="680""#));
    }

    #[test]
    fn circle_component_renders_an_aspect_true_ellipse() {
        // 100cm x 50cm: draw box 680x340, so rx=340 and ry=170 (2:1).
        let svg = to_cut_svg(
            &component(Some("circulo"), 100.0, 50.0),
            &CanvasConfig::default(),
        );
        assert!(svg.contains("<ellipse"));
        assert!(svg.contains(r#"rx="340""#));
        assert!(svg.contains(r#"ry="170""#));
    }

    #[test]
    fn triangle_and_l_shape_render_polygons() {
        let triangle = to_cut_svg(
            &component(Some("triangulo"), 68.0, 48.0),
            &CanvasConfig::default(),
        );
        assert!(triangle.contains("<polygon"));
        assert!(triangle.contains("400,60"));

        let l_shape = to_cut_svg(&component(Some("L"), 30.0, 30.0), &CanvasConfig::default());
        assert!(l_shape.contains("<polygon"));
    }

    #[test]
    fn irregular_with_path_is_transformed_not_redrawn() {
        let mut c = component(Some("irregular"), 68.0, 48.0);
        c.cut_path = Some("M0,0 L100,0 L50,100 Z".to_owned());
        c.fold_path = Some("M0,50 L100,50".to_owned());
        let svg = to_cut_svg(&c, &CanvasConfig::default());
        assert!(svg.contains("translate(60, 60) scale(6.8, 4.8)"));
        assert!(svg.contains(r#"d="M0,0L100,0L50,100Z""#));
        assert!(svg.contains(r#"vector-effect="non-scaling-stroke""#));
        // Fold line styling.
        assert!(svg.contains(r##"stroke="#FF0000""##));
        assert!(svg.contains(r#"stroke-dasharray="8,4""#));
        assert!(svg.contains(r#"marker-mid="url(#foldArrow)""#));
    }

    #[test]
    fn irregular_without_path_shows_the_warning_placeholder() {
        let svg = to_cut_svg(
            &component(Some("irregular"), 68.0, 48.0),
            &CanvasConfig::default(),
        );
        assert!(svg.contains(MISSING_PATH_WARNING));
        assert!(svg.contains(MISSING_PATH_HINT));
        assert!(svg.contains(r##"stroke="#FF6600""##));
        assert!(svg.contains(r#"stroke-dasharray="10,5""#));
    }

    #[test]
    fn dimension_labels_show_real_measurements() {
        let svg = to_cut_svg(&component(None, 68.0, 48.0), &CanvasConfig::default());
        assert!(svg.contains("68 cm"));
        assert!(svg.contains("48 cm"));
    }

    #[test]
    fn metre_scale_components_get_metre_labels() {
        let svg = to_cut_svg(&component(None, 240.0, 120.0), &CanvasConfig::default());
        assert!(svg.contains("2.40 m"));
        assert!(svg.contains("1.20 m"));
    }

    #[test]
    fn has_four_registration_marks_and_a_scale_bar() {
        let svg = to_cut_svg(&component(None, 68.0, 48.0), &CanvasConfig::default());
        assert_eq!(svg.matches(r#"class="registration-mark""#).count(), 4);
        assert_eq!(svg.matches(r#"class="scale-bar""#).count(), 1);
        assert!(svg.contains("Escala:"));
    }

    #[test]
    fn metadata_line_carries_id_and_heading() {
        let svg = to_cut_svg(&component(None, 68.0, 48.0), &CanvasConfig::default());
        assert!(svg.contains("ID: comp-7"));
        assert!(svg.contains(DOCUMENT_HEADING));
    }

    #[test]
    fn component_name_is_escaped_in_text_content() {
        let svg = to_cut_svg(&component(None, 68.0, 48.0), &CanvasConfig::default());
        // "Costado <izquierdo>" must not inject markup.
        assert!(svg.contains("Costado &lt;izquierdo&gt;"));
        assert!(!svg.contains("<izquierdo>"));
    }

    #[test]
    fn document_is_self_contained() {
        let mut c = component(Some("irregular"), 68.0, 48.0);
        c.cut_path = Some("M0,0 L100,0 L50,100 Z".to_owned());
        c.fold_path = Some("M0,50 L100,50".to_owned());
        let svg = to_cut_svg(&c, &CanvasConfig::default());
        // Every url(#...) reference resolves to a local definition.
        assert!(svg.contains(r#"id="usefulMaterial""#));
        assert!(svg.contains(r#"id="wasteMaterial""#));
        assert!(svg.contains(r#"id="foldArrow""#));
        // No external resources of any kind.
        assert!(!svg.contains("xlink"));
        assert!(!svg.contains("<image"));
        assert!(!svg.contains("@import"));
    }

    #[test]
    fn alternate_canvas_is_respected() {
        let canvas = CanvasConfig {
            width: 400.0,
            height: 300.0,
            padding: 40.0,
        };
        let svg = to_cut_svg(&component(None, 68.0, 48.0), &canvas);
        assert!(svg.contains(r#"viewBox="0 0 400 300""#));
        assert!(svg.contains(r#"width="400""#));
    }
}
