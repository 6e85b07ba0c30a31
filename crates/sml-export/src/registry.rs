//! Run-scoped dedup registry for shared datablocks and materials.

use std::collections::HashSet;

/// Tracks which datablock and material names have already been emitted.
///
/// The two namespaces are independent: a material and a datablock may share a
/// name without colliding. Names are compared exactly as given, case
/// sensitive, and membership is monotonic — once marked, a name stays marked
/// for the rest of the export run.
#[derive(Debug, Default)]
pub struct DedupRegistry {
    contents: HashSet<String>,
    materials: HashSet<String>,
}

impl DedupRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a datablock name has been emitted.
    pub fn has_content(&self, name: &str) -> bool {
        self.contents.contains(name)
    }

    /// Mark a datablock name as emitted. Returns `true` on first marking.
    pub fn mark_content(&mut self, name: &str) -> bool {
        self.contents.insert(name.to_string())
    }

    /// Whether a material name has been emitted.
    pub fn has_material(&self, name: &str) -> bool {
        self.materials.contains(name)
    }

    /// Mark a material name as emitted. Returns `true` on first marking.
    pub fn mark_material(&mut self, name: &str) -> bool {
        self.materials.insert(name.to_string())
    }
}
