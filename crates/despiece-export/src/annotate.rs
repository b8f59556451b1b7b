//! Drawing annotation primitives.
//!
//! Dimension lines, registration marks, the graphic scale bar, and the
//! technical info block, built as [`svg`] element groups.  Every
//! function is pure and deterministic; visual constants (colors, stroke
//! widths, font sizes) are fixed so all documents look alike.

use despiece_drawing::format_measurement;
use despiece_drawing::normalize::NormalizedComponent;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path, Rectangle, Text};

/// Font used by every text annotation.
pub const FONT_FAMILY: &str = "Arial";

/// Vertical advance between technical info lines.
pub const INFO_LINE_HEIGHT: f64 = 14.0;

const DIMENSION_COLOR: &str = "#0000FF";
const DIMENSION_STROKE_WIDTH: f64 = 2.0;
const DIMENSION_FONT_SIZE: f64 = 16.0;
const ARROW_SIZE: f64 = 6.0;

const MARK_COLOR: &str = "#000000";
const MARK_STROKE_WIDTH: f64 = 0.5;

const SCALE_BAR_LENGTH: f64 = 100.0;
const SCALE_BAR_SEGMENTS: u32 = 5;
const SCALE_BAR_HEIGHT: f64 = 8.0;

/// Which axis a dimension line measures.
///
/// Selects the layout math: the offset pushes a horizontal line below
/// the measured edge and a vertical line to its right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Measures a horizontal span; label above the line.
    Horizontal,
    /// Measures a vertical span; label beside the line.
    Vertical,
}

fn stroked_line(x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", color)
        .set("stroke-width", width)
}

/// Filled triangular arrowhead with its tip at `tip`.
fn arrowhead(tip: (f64, f64), base_a: (f64, f64), base_b: (f64, f64)) -> Path {
    let data = Data::new().move_to(tip).line_to(base_a).line_to(base_b).close();
    Path::new().set("d", data).set("fill", DIMENSION_COLOR)
}

/// Draw a dimension line between `p1` and `p2` labelled with a real
/// measurement.
///
/// Two extension lines run from the measured endpoints out to the
/// offset dimension line, which carries an arrowhead at each end and a
/// centered label.  `offset` is applied along the axis perpendicular
/// to the measured span, selected by `orientation`.
#[must_use]
pub fn dimension_line(
    p1: (f64, f64),
    p2: (f64, f64),
    label: &str,
    offset: f64,
    orientation: Orientation,
) -> Group {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let group = Group::new().set("class", "dimension");

    match orientation {
        Orientation::Vertical => {
            let x = x1 + offset;
            let mid_y = (y1 + y2) / 2.0;
            group
                .add(stroked_line(x1, y1, x, y1, DIMENSION_COLOR, DIMENSION_STROKE_WIDTH))
                .add(stroked_line(x2, y2, x, y2, DIMENSION_COLOR, DIMENSION_STROKE_WIDTH))
                .add(stroked_line(x, y1, x, y2, DIMENSION_COLOR, DIMENSION_STROKE_WIDTH))
                .add(arrowhead(
                    (x, y1),
                    (x - ARROW_SIZE, y1 + ARROW_SIZE),
                    (x + ARROW_SIZE, y1 + ARROW_SIZE),
                ))
                .add(arrowhead(
                    (x, y2),
                    (x - ARROW_SIZE, y2 - ARROW_SIZE),
                    (x + ARROW_SIZE, y2 - ARROW_SIZE),
                ))
                .add(
                    Text::new(label)
                        .set("x", x + 10.0)
                        .set("y", mid_y)
                        .set("font-family", FONT_FAMILY)
                        .set("font-size", DIMENSION_FONT_SIZE)
                        .set("fill", DIMENSION_COLOR)
                        .set("dominant-baseline", "middle"),
                )
        }
        Orientation::Horizontal => {
            let y = y1 + offset;
            let mid_x = (x1 + x2) / 2.0;
            group
                .add(stroked_line(x1, y1, x1, y, DIMENSION_COLOR, DIMENSION_STROKE_WIDTH))
                .add(stroked_line(x2, y2, x2, y, DIMENSION_COLOR, DIMENSION_STROKE_WIDTH))
                .add(stroked_line(x1, y, x2, y, DIMENSION_COLOR, DIMENSION_STROKE_WIDTH))
                .add(arrowhead(
                    (x1, y),
                    (x1 + ARROW_SIZE, y - ARROW_SIZE),
                    (x1 + ARROW_SIZE, y + ARROW_SIZE),
                ))
                .add(arrowhead(
                    (x2, y),
                    (x2 - ARROW_SIZE, y - ARROW_SIZE),
                    (x2 - ARROW_SIZE, y + ARROW_SIZE),
                ))
                .add(
                    Text::new(label)
                        .set("x", mid_x)
                        .set("y", y - 5.0)
                        .set("font-family", FONT_FAMILY)
                        .set("font-size", DIMENSION_FONT_SIZE)
                        .set("fill", DIMENSION_COLOR)
                        .set("text-anchor", "middle"),
                )
        }
    }
}

/// Corner alignment mark: a small circle with a crosshair through it.
///
/// Purely cosmetic; cutting operators use the four corner marks to
/// verify print-to-cut alignment.
#[must_use]
pub fn registration_mark(x: f64, y: f64, size: f64) -> Group {
    Group::new()
        .set("class", "registration-mark")
        .add(
            Circle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", size / 2.0)
                .set("fill", "none")
                .set("stroke", MARK_COLOR)
                .set("stroke-width", MARK_STROKE_WIDTH),
        )
        .add(stroked_line(x - size, y, x + size, y, MARK_COLOR, MARK_STROKE_WIDTH))
        .add(stroked_line(x, y - size, x, y + size, MARK_COLOR, MARK_STROKE_WIDTH))
}

/// Graphic scale bar: five alternating black/white segments of fixed
/// pixel length, labelled with the real-world length they span.
///
/// `scale` is the document's canvas-units-per-millimetre factor; the
/// label is the bar's pixel length divided by it, formatted as cm/m.
#[must_use]
pub fn scale_bar(x: f64, y: f64, scale: f64) -> Group {
    let segment = SCALE_BAR_LENGTH / f64::from(SCALE_BAR_SEGMENTS);
    let mut group = Group::new().set("class", "scale-bar");

    let mut offset = 0.0;
    let mut dark = true;
    for _ in 0..SCALE_BAR_SEGMENTS {
        group = group.add(
            Rectangle::new()
                .set("x", x + offset)
                .set("y", y)
                .set("width", segment)
                .set("height", SCALE_BAR_HEIGHT)
                .set("fill", if dark { "#000000" } else { "#ffffff" })
                .set("stroke", MARK_COLOR)
                .set("stroke-width", MARK_STROKE_WIDTH),
        );
        offset += segment;
        dark = !dark;
    }

    let real_length_mm = SCALE_BAR_LENGTH / scale;
    group.add(
        Text::new(format!("Escala: {}", format_measurement(real_length_mm)))
            .set("x", x + SCALE_BAR_LENGTH / 2.0)
            .set("y", y + 20.0)
            .set("font-family", FONT_FAMILY)
            .set("font-size", 10)
            .set("fill", MARK_COLOR)
            .set("text-anchor", "middle"),
    )
}

/// One line of a stacked text block.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoLine {
    /// Line content.
    pub text: String,
    /// Font size in canvas units.
    pub font_size: f64,
    /// Whether the line renders bold.
    pub bold: bool,
}

impl InfoLine {
    /// A regular 10pt body line.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 10.0,
            bold: false,
        }
    }

    /// A bold 12pt heading line.
    #[must_use]
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 12.0,
            bold: true,
        }
    }
}

/// Lay out text lines downward from `start_y`, one per `line_height`.
///
/// Returns the positioned `<text>` elements and the next free Y, so
/// callers can continue stacking without tracking a mutable cursor.
#[must_use]
pub fn stack_lines(
    x: f64,
    start_y: f64,
    line_height: f64,
    lines: &[InfoLine],
) -> (Vec<Text>, f64) {
    let mut y = start_y;
    let mut texts = Vec::with_capacity(lines.len());
    for line in lines {
        let mut text = Text::new(line.text.clone())
            .set("x", x)
            .set("y", y)
            .set("font-family", FONT_FAMILY)
            .set("font-size", line.font_size)
            .set("fill", MARK_COLOR);
        if line.bold {
            text = text.set("font-weight", "bold");
        }
        texts.push(text);
        y += line_height;
    }
    (texts, y)
}

/// Technical info block: name, material, thickness, quantity, and the
/// real front-view size, plus any free-text notes.
#[must_use]
pub fn technical_info(component: &NormalizedComponent, x: f64, y: f64) -> Group {
    let mut lines = vec![
        InfoLine::heading("INFORMACIÓN TÉCNICA"),
        InfoLine::new(format!("Componente: {}", component.name)),
        InfoLine::new(format!("Material: {}", component.material_kind)),
        InfoLine::new(format!("Grosor: {} {}", component.depth, component.unit)),
        InfoLine::new(format!(
            "Cantidad: {} {}",
            component.quantity, component.quantity_unit,
        )),
        InfoLine::new(format!(
            "Vista: FRONTAL ({} × {})",
            format_measurement(component.width_mm),
            format_measurement(component.height_mm),
        )),
    ];
    if let Some(notes) = &component.notes {
        lines.push(InfoLine::new(format!("Notas: {notes}")));
    }

    let (texts, _) = stack_lines(x, y, INFO_LINE_HEIGHT, &lines);
    let mut group = Group::new().set("class", "technical-info");
    for text in texts {
        group = group.add(text);
    }
    group
}
