//! Archive-safe filename derivation.

use despiece_drawing::types::Component;

/// Maximum length of a sanitized name stem, in characters.
pub const MAX_STEM_LENGTH: usize = 50;

/// Stem used when a component name sanitizes to nothing or no matching
/// component exists for a drawing id.
const FALLBACK_STEM: &str = "componente";

/// Reduce a free-form name to a filesystem-safe stem.
///
/// Lowercases, collapses every run of non-alphanumeric characters to a
/// single underscore, strips leading/trailing underscores, and
/// truncates to [`MAX_STEM_LENGTH`] characters.  Idempotent: the
/// trailing underscore a truncation can expose is stripped again, so
/// `sanitize_filename(sanitize_filename(x)) == sanitize_filename(x)`.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            stem.push(ch);
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }

    let trimmed = stem.trim_matches('_');
    let truncated: String = trimmed.chars().take(MAX_STEM_LENGTH).collect();
    truncated.trim_end_matches('_').to_owned()
}

/// Filename for one component's cutting file inside the archive.
///
/// `sanitize(name)_{id}.svg` when a component is known for the drawing
/// id, `componente_{id}.svg` otherwise (or when the name sanitizes to
/// nothing).  Ids keep filenames distinct even when names collide
/// after sanitization.
#[must_use]
pub fn cut_file_name(component: Option<&Component>, id: &str) -> String {
    let stem = component
        .map(|c| sanitize_filename(&c.name))
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| FALLBACK_STEM.to_owned());
    format!("{stem}_{id}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use despiece_drawing::types::{ComponentDimensions, Material};

    fn named(name: &str) -> Component {
        Component {
            id: "x1".to_owned(),
            name: name.to_owned(),
            description: String::new(),
            dimensions: ComponentDimensions::default(),
            material: Material {
                kind: "MDF".to_owned(),
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
    fn collapses_punctuation_runs_to_single_underscores() {
        assert_eq!(sanitize_filename("Panel A"), "panel_a");
        assert_eq!(sanitize_filename("Base!!"), "base");
        assert_eq!(sanitize_filename("Tapa -- superior (v2)"), "tapa_superior_v2");
    }

    #[test]
    fn strips_leading_and_trailing_separators() {
        assert_eq!(sanitize_filename("  ¡Hola!  "), "hola");
        assert_eq!(sanitize_filename("___x___"), "x");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(sanitize_filename("Cajón nórdico"), "caj_n_n_rdico");
    }

    #[test]
    fn truncates_to_fifty_characters() {
        let long = "a".repeat(80);
        assert_eq!(sanitize_filename(&long).len(), MAX_STEM_LENGTH);
    }

    #[test]
    fn truncation_cannot_expose_a_trailing_separator() {
        // 49 alphanumerics, then punctuation, then more: the cut falls
        // exactly on the separator.
        let tricky = format!("{}!{}", "a".repeat(49), "b".repeat(10));
        let stem = sanitize_filename(&tricky);
        assert!(!stem.ends_with('_'));
        assert!(stem.len() <= MAX_STEM_LENGTH);
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            "Panel A",
            "Base!!",
            "  ¡Ángulo! 45° ",
            &format!("{}!{}", "a".repeat(49), "b".repeat(10)),
            "",
            "____",
        ];
        for input in inputs {
            let once = sanitize_filename(input);
            assert_eq!(sanitize_filename(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn output_alphabet_is_restricted() {
        let stem = sanitize_filename("Möbel & Stück #42 (prototipo)");
        assert!(
            stem.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "unexpected characters in {stem:?}",
        );
        assert!(!stem.contains("__"));
    }

    #[test]
    fn file_name_includes_component_id() {
        let c = named("Panel A");
        assert_eq!(cut_file_name(Some(&c), "id9"), "panel_a_id9.svg");
    }

    #[test]
    fn file_name_falls_back_without_a_component() {
        assert_eq!(cut_file_name(None, "id9"), "componente_id9.svg");
    }

    #[test]
    fn file_name_falls_back_when_the_name_sanitizes_away() {
        let c = named("!!!");
        assert_eq!(cut_file_name(Some(&c), "id9"), "componente_id9.svg");
    }
}
