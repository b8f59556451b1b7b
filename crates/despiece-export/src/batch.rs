//! Batch drawing generation.

use std::collections::HashMap;

use despiece_drawing::CanvasConfig;
use despiece_drawing::types::Component;

use crate::document::to_cut_svg;

/// Generate one cutting-file document per component, keyed by id.
///
/// A pure map: iteration order does not affect the result.  Duplicate
/// ids overwrite, keeping the last-seen component's drawing; this is
/// documented behavior, not an error, since upstream ids are expected
/// to be unique and a stale duplicate should lose.
#[must_use]
pub fn generate_all(components: &[Component], canvas: &CanvasConfig) -> HashMap<String, String> {
    components
        .iter()
        .map(|component| (component.id.clone(), to_cut_svg(component, canvas)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use despiece_drawing::types::{ComponentDimensions, Material};

    fn component(id: &str, name: &str, length: f64) -> Component {
        Component {
            id: id.to_owned(),
            name: name.to_owned(),
            description: String::new(),
            dimensions: ComponentDimensions {
                length,
                width: 2.0,
                height: 40.0,
                ..ComponentDimensions::default()
            },
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
    fn one_entry_per_unique_id() {
        let components = vec![
            component("a", "Base", 60.0),
            component("b", "Tapa", 60.0),
            component("c", "Costado", 40.0),
        ];
        let drawings = generate_all(&components, &CanvasConfig::default());
        assert_eq!(drawings.len(), 3);
        for c in &components {
            assert!(drawings.contains_key(&c.id), "missing drawing for {}", c.id);
        }
    }

    #[test]
    fn duplicate_ids_keep_the_last_drawing() {
        let components = vec![
            component("a", "Version vieja", 60.0),
            component("b", "Tapa", 60.0),
            component("a", "Version nueva", 60.0),
        ];
        let drawings = generate_all(&components, &CanvasConfig::default());
        assert_eq!(drawings.len(), 2);
        let drawing = &drawings["a"];
        assert!(drawing.contains("Version nueva"));
        assert!(!drawing.contains("Version vieja"));
    }

    #[test]
    fn empty_input_produces_an_empty_map() {
        let drawings = generate_all(&[], &CanvasConfig::default());
        assert!(drawings.is_empty());
    }

    #[test]
    fn every_drawing_is_a_complete_document() {
        let components = vec![component("a", "Base", 60.0), component("b", "Tapa", 30.0)];
        let drawings = generate_all(&components, &CanvasConfig::default());
        for svg in drawings.values() {
            assert!(svg.starts_with("<?xml"));
            assert!(svg.contains("</svg>"));
        }
    }
}
