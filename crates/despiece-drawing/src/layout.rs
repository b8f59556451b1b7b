//! Canvas configuration and uniform-fit layout.
//!
//! Every cutting file shares one fixed canvas; only the drawn shape
//! scales.  The scale factor is uniform (a single `min` of the per-axis
//! factors), so the drawing always preserves the true aspect ratio of
//! the physical piece.  The piece is aligned to the top-left padding
//! corner, simulating nesting against a sheet corner.

/// Canvas geometry shared by every generated document.
///
/// Passed explicitly into the renderer rather than read from module
/// state, so tests can render at alternate sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Document width in canvas units.
    pub width: f64,
    /// Document height in canvas units.
    pub height: f64,
    /// Clearance kept on every side for dimension lines and annotations.
    pub padding: f64,
}

impl CanvasConfig {
    /// Widest a shape may draw, after padding on both sides.
    #[must_use]
    pub const fn max_draw_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Tallest a shape may draw, after padding on both sides.
    #[must_use]
    pub const fn max_draw_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }
}

impl Default for CanvasConfig {
    /// The production canvas: 800x600 with 60 units of padding.
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 60.0,
        }
    }
}

/// Result of fitting a real-world footprint onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitLayout {
    /// Canvas units per millimetre.
    pub scale: f64,
    /// Scaled shape width in canvas units.
    pub draw_width: f64,
    /// Scaled shape height in canvas units.
    pub draw_height: f64,
    /// Left edge of the drawing box (the padding offset).
    pub origin_x: f64,
    /// Top edge of the drawing box (the padding offset).
    pub origin_y: f64,
}

impl FitLayout {
    /// Fit a `real_width_mm` x `real_height_mm` footprint into the
    /// padded drawing area of `canvas`.
    ///
    /// The scale factor is `min(scale_x, scale_y)`: never an
    /// independent stretch per axis, so `draw_width / draw_height`
    /// equals the physical aspect ratio and neither dimension can
    /// overflow the padded area.  Callers pass normalized (non-zero)
    /// dimensions; see [`crate::normalize`].
    #[must_use]
    pub fn fit(canvas: &CanvasConfig, real_width_mm: f64, real_height_mm: f64) -> Self {
        let scale_x = canvas.max_draw_width() / real_width_mm;
        let scale_y = canvas.max_draw_height() / real_height_mm;
        let scale = scale_x.min(scale_y);

        Self {
            scale,
            draw_width: real_width_mm * scale,
            draw_height: real_height_mm * scale,
            origin_x: canvas.padding,
            origin_y: canvas.padding,
        }
    }
}
