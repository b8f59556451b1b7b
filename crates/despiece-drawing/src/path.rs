//! Normalized cut-path helpers.
//!
//! Irregular components carry their outline as SVG path data authored
//! in a normalized coordinate space of [`PATH_SPACE`] x [`PATH_SPACE`]
//! units.  The shape renderer maps that space onto the scaled drawing
//! box, so the same path works for any real-world footprint.
//!
//! Validation is a character whitelist: path data that passes cannot
//! close an attribute or open an element, so it is safe to embed in a
//! generated document verbatim.

/// Side length of the normalized coordinate space cut paths are
/// authored in (both axes run 0..=100).
pub const PATH_SPACE: f64 = 100.0;

/// Whether `path` looks like plain SVG path data.
///
/// Accepts the standard path commands plus digits, whitespace, commas,
/// periods, and minus signs.  Empty strings are rejected.
#[must_use]
pub fn is_valid_path_data(path: &str) -> bool {
    !path.is_empty()
        && path.chars().all(|c| {
            matches!(
                c,
                'M' | 'm'
                    | 'L' | 'l'
                    | 'H' | 'h'
                    | 'V' | 'v'
                    | 'C' | 'c'
                    | 'S' | 's'
                    | 'Q' | 'q'
                    | 'T' | 't'
                    | 'A' | 'a'
                    | 'Z' | 'z'
                    | '0'..='9'
                    | ',' | '.' | '-'
            ) || c.is_whitespace()
        })
}

/// Collapse redundant whitespace in path data.
///
/// Runs of whitespace become a single space, and spaces disappear
/// entirely after commas and around command letters, matching how the
/// paths are authored upstream.  Idempotent; callers validate with
/// [`is_valid_path_data`] first.
#[must_use]
pub fn optimize_path_data(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut pending_space = false;
    for ch in path.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            let after_separator = out
                .chars()
                .next_back()
                .is_some_and(|prev| prev == ',' || prev.is_ascii_alphabetic());
            if !ch.is_ascii_alphabetic() && !after_separator && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(ch);
    }
    out
}
