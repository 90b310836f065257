//! Section model, render nodes, and document composition.

/// Composition of sections into a render-node document.
pub mod compose;
/// Host-renderable render nodes and their content.
pub mod node;
/// Section model: styled text, static, and animated image sections.
pub mod section;
