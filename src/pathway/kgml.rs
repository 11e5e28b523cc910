use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{PathlapseError, PathlapseResult};
use crate::pathway::model::{AssociationTable, Entity, EntityKind, Pathway, ShapeKind, VisualElement};

/// Read and parse a KGML file.
pub fn load_kgml(path: &Path) -> PathlapseResult<Pathway> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read KGML '{}'", path.display()))
        .map_err(|e| PathlapseError::resource(format!("{e:#}")))?;
    parse_kgml(&text)
}

/// Parse a KGML document into a [`Pathway`].
///
/// Only `gene` and `compound` entries drawn as `rectangle` or `circle` are kept. KGML places
/// `x`/`y` at the shape centre; bounds are derived from `width`/`height`.
pub fn parse_kgml(xml: &str) -> PathlapseResult<Pathway> {
    // KGML files ship with a DOCTYPE; roxmltree rejects DTDs unless asked not to.
    let opts = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, opts)
        .map_err(|e| PathlapseError::validation(format!("KGML is not well-formed XML: {e}")))?;
    let root = doc.root_element();
    if !root.has_tag_name("pathway") {
        return Err(PathlapseError::validation(format!(
            "KGML root element must be <pathway>, got <{}>",
            root.tag_name().name()
        )));
    }

    let organism = root
        .attribute("org")
        .ok_or_else(|| PathlapseError::validation("KGML <pathway> is missing 'org'"))?
        .to_string();

    let mut associations = AssociationTable::new();
    let mut skipped = 0usize;
    for entry in root.children().filter(|n| n.has_tag_name("entry")) {
        let Some(kind) = entry.attribute("type").and_then(EntityKind::from_kgml) else {
            skipped += 1;
            continue;
        };
        let entry_id = entry.attribute("id").unwrap_or("?");

        for graphics in entry.children().filter(|n| n.has_tag_name("graphics")) {
            let Some(shape) = graphics.attribute("type").and_then(ShapeKind::from_kgml) else {
                skipped += 1;
                continue;
            };
            let element = element_bounds(shape, graphics, entry_id)?;
            for name in entry.attribute("name").unwrap_or("").split_whitespace() {
                associations.link(element, Entity::new(name, kind));
            }
        }
    }

    tracing::debug!(
        organism = %organism,
        elements = associations.len(),
        skipped,
        "parsed KGML"
    );

    Ok(Pathway {
        name: root.attribute("name").unwrap_or_default().to_string(),
        organism,
        title: root.attribute("title").map(str::to_string),
        associations,
    })
}

fn element_bounds(
    shape: ShapeKind,
    graphics: roxmltree::Node<'_, '_>,
    entry_id: &str,
) -> PathlapseResult<VisualElement> {
    let num = |attr: &str| -> PathlapseResult<f64> {
        let raw = graphics.attribute(attr).ok_or_else(|| {
            PathlapseError::validation(format!("KGML entry {entry_id}: graphics missing '{attr}'"))
        })?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                PathlapseError::validation(format!(
                    "KGML entry {entry_id}: graphics '{attr}'='{raw}' is not a number"
                ))
            })
    };

    let (x, y, w, h) = (num("x")?, num("y")?, num("width")?, num("height")?);
    if w < 0.0 || h < 0.0 {
        return Err(PathlapseError::validation(format!(
            "KGML entry {entry_id}: graphics width/height must be >= 0"
        )));
    }
    let x0 = (x - w / 2.0).round() as i64;
    let y0 = (y - h / 2.0).round() as i64;
    Ok(VisualElement::new(
        shape,
        x0,
        y0,
        x0 + w.round() as i64,
        y0 + h.round() as i64,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/pathway/kgml.rs"]
mod tests;
