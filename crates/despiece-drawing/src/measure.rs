//! Real-world measurement formatting.
//!
//! All displayed measurements reflect physical dimensions, never the
//! scaled canvas coordinates.  The pipeline works internally in
//! millimetres; labels are rendered in centimetres or metres.

/// Millimetres per centimetre (component dimensions arrive in cm).
pub const MM_PER_CM: f64 = 10.0;

/// Centimetres per metre (threshold for switching the display unit).
pub const CM_PER_M: f64 = 100.0;

/// Format a millimetre value as a human-friendly `cm`/`m` label.
///
/// Values of one metre or more render in metres with up to two decimal
/// places; a trailing `.00` is stripped.  Smaller values render in
/// centimetres with one decimal place; a trailing `.0` is stripped.
/// Only the exact all-zero suffix is removed, so `1.20 m` keeps its
/// trailing zero.
///
/// # Examples
///
/// ```
/// use despiece_drawing::measure::format_measurement;
///
/// assert_eq!(format_measurement(999.0), "99.9 cm");
/// assert_eq!(format_measurement(1000.0), "1 m");
/// assert_eq!(format_measurement(1234.0), "1.23 m");
/// assert_eq!(format_measurement(10.0), "1 cm");
/// ```
#[must_use]
pub fn format_measurement(mm: f64) -> String {
    let cm = mm / MM_PER_CM;
    if cm >= CM_PER_M {
        let metres = format!("{:.2}", cm / CM_PER_M);
        let trimmed = metres.strip_suffix(".00").unwrap_or(&metres);
        format!("{trimmed} m")
    } else {
        let centimetres = format!("{cm:.1}");
        let trimmed = centimetres.strip_suffix(".0").unwrap_or(&centimetres);
        format!("{trimmed} cm")
    }
}
