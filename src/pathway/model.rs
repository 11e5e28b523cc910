use std::collections::HashMap;

/// Kind of biological object an [`Entity`] refers to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Gene,
    Compound,
}

impl EntityKind {
    /// Parse the KGML `entry/@type` value. Returns `None` for kinds the renderer ignores.
    pub fn from_kgml(s: &str) -> Option<Self> {
        match s {
            "gene" => Some(Self::Gene),
            "compound" => Some(Self::Compound),
            _ => None,
        }
    }
}

/// A gene or compound with its own measured level series.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    pub id: String,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn gene(id: impl Into<String>) -> Self {
        Self::new(id, EntityKind::Gene)
    }

    pub fn compound(id: impl Into<String>) -> Self {
        Self::new(id, EntityKind::Compound)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl ShapeKind {
    /// Parse the KGML `graphics/@type` value. Other shapes (lines, round rectangles) are dropped.
    pub fn from_kgml(s: &str) -> Option<Self> {
        match s {
            "rectangle" => Some(Self::Rectangle),
            "circle" => Some(Self::Circle),
            _ => None,
        }
    }
}

/// A shape on the diagram in background pixel space. `x1`/`y1` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualElement {
    pub shape: ShapeKind,
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl VisualElement {
    pub fn new(shape: ShapeKind, x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self {
            shape,
            x0,
            y0,
            x1,
            y1,
        }
    }

    pub fn width(&self) -> i64 {
        (self.x1 - self.x0).max(0)
    }

    pub fn height(&self) -> i64 {
        (self.y1 - self.y0).max(0)
    }
}

/// Dense index of a [`VisualElement`] inside an [`AssociationTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

/// Visual elements in first-seen order, each with the ordered set of entities drawn there.
///
/// Declaring the same element twice merges the entity lists; an entity is never listed twice for
/// one element.
#[derive(Clone, Debug, Default)]
pub struct AssociationTable {
    elements: Vec<VisualElement>,
    entities: Vec<Vec<Entity>>,
    index: HashMap<VisualElement, ElementId>,
}

impl AssociationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link `entity` to `element`, creating the element on first use.
    pub fn link(&mut self, element: VisualElement, entity: Entity) -> ElementId {
        let id = match self.index.get(&element) {
            Some(id) => *id,
            None => {
                let id = ElementId(self.elements.len());
                self.elements.push(element);
                self.entities.push(Vec::new());
                self.index.insert(element, id);
                id
            }
        };
        let linked = &mut self.entities[id.0];
        if !linked.contains(&entity) {
            linked.push(entity);
        }
        id
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: ElementId) -> Option<&VisualElement> {
        self.elements.get(id.0)
    }

    pub fn entities(&self, id: ElementId) -> &[Entity] {
        self.entities.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn id_of(&self, element: &VisualElement) -> Option<ElementId> {
        self.index.get(element).copied()
    }

    /// Iterate elements in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &VisualElement, &[Entity])> + '_ {
        self.elements
            .iter()
            .zip(&self.entities)
            .enumerate()
            .map(|(i, (el, ents))| (ElementId(i), el, ents.as_slice()))
    }
}

/// A parsed pathway ready for rendering.
#[derive(Clone, Debug, Default)]
pub struct Pathway {
    /// KGML `pathway/@name`, e.g. `path:hsa00010`.
    pub name: String,
    /// Organism code used to resolve bare gene identifiers, e.g. `hsa`.
    pub organism: String,
    pub title: Option<String>,
    pub associations: AssociationTable,
}

#[cfg(test)]
#[path = "../../tests/unit/pathway/model.rs"]
mod tests;
