//! Pathway diagram structure: entities, the shapes that render them, and KGML loading.

/// KGML pathway parsing.
pub mod kgml;
/// Entity / visual element model and the association table between them.
pub mod model;
