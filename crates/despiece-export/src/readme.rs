//! Instructions sheet (`LEEME.txt`) generation.
//!
//! Plain text with fixed sections: header with project name and date,
//! numbered component list, and fixed usage/legend notes.  Output is
//! deterministic given the component list, project name, and the
//! caller-supplied date string, so it stays testable; only the I/O
//! layer touches the clock.

use std::fmt::Write;

use despiece_drawing::types::Component;

/// Section divider, sized to a classic 63-column sheet.
const RULE: &str = "═══════════════════════════════════════════════════════════════";

/// Fixed usage and legend sections of the instructions sheet.
const USAGE_NOTES: &str = "\
INSTRUCCIONES DE USO:

1. VISTA FRONTAL
   Todos los archivos SVG están en VISTA FRONTAL (largo × alto).
   Esto optimiza la captura de formas irregulares.

2. DIMENSIONES
   Las dimensiones reales están indicadas en cada archivo SVG.
   Verificar escala antes de cortar.

3. MARCAS DE REGISTRO
   Las marcas en las esquinas sirven para alineación.
   Usar como referencia para posicionamiento preciso.

4. LÍNEAS DE CORTE
   - Negro sólido: Líneas de corte
   - Rojo punteado: Líneas de plegado (si aplica)

5. INFORMACIÓN TÉCNICA
   Cada archivo incluye:
   - Nombre del componente
   - Material y grosor
   - Cantidad requerida
   - Dimensiones exactas

6. SOFTWARE COMPATIBLE
   - Adobe Illustrator
   - Inkscape (gratis)
   - CorelDRAW
   - AutoCAD
   - Software CNC/Plotter";

const IMPORTANT_NOTES: &str = "\
NOTAS IMPORTANTES:
- Verificar escala antes de cortar (1:1)
- Respetar dirección de veta del material
- Considerar tolerancias de corte según máquina
- Guardar material sobrante para ajustes";

const FOOTER: &str = "Para más información, consultar el manual de producción completo.";

/// Build the `LEEME.txt` content for a cutting archive.
///
/// `generated_on` is a preformatted date string (e.g. `12/3/2026`);
/// the serializer never reads the clock itself.
#[must_use]
pub fn cutting_readme(components: &[Component], project_name: &str, generated_on: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "ARCHIVOS DE CORTE - {}", project_name.to_uppercase());
    let _ = writeln!(out, "Generado: {generated_on}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "CONTENIDO:");
    for (index, component) in components.iter().enumerate() {
        let _ = writeln!(out, "{}. {} ({}.svg)", index + 1, component.name, component.id);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{USAGE_NOTES}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{IMPORTANT_NOTES}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{FOOTER}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use despiece_drawing::types::{ComponentDimensions, Material};

    fn component(id: &str, name: &str) -> Component {
        Component {
            id: id.to_owned(),
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
    fn header_carries_uppercased_project_and_date() {
        let readme = cutting_readme(&[], "Mesa auxiliar", "12/3/2026");
        assert!(readme.starts_with("ARCHIVOS DE CORTE - MESA AUXILIAR\n"));
        assert!(readme.contains("Generado: 12/3/2026"));
    }

    #[test]
    fn components_are_listed_numbered_with_ids() {
        let readme = cutting_readme(
            &[component("a1", "Base"), component("b2", "Costado")],
            "proyecto",
            "1/1/2026",
        );
        assert!(readme.contains("1. Base (a1.svg)"));
        assert!(readme.contains("2. Costado (b2.svg)"));
    }

    #[test]
    fn fixed_sections_are_present() {
        let readme = cutting_readme(&[], "proyecto", "1/1/2026");
        assert!(readme.contains("INSTRUCCIONES DE USO:"));
        assert!(readme.contains("VISTA FRONTAL"));
        assert!(readme.contains("Negro sólido: Líneas de corte"));
        assert!(readme.contains("Rojo punteado: Líneas de plegado"));
        assert!(readme.contains("NOTAS IMPORTANTES:"));
        assert!(readme.contains("Verificar escala antes de cortar (1:1)"));
        assert_eq!(readme.matches(RULE).count(), 4);
    }

    #[test]
    fn output_is_deterministic() {
        let components = [component("a1", "Base")];
        let first = cutting_readme(&components, "proyecto", "9/9/2026");
        let second = cutting_readme(&components, "proyecto", "9/9/2026");
        assert_eq!(first, second);
    }
}
