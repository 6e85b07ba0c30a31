//! Cosmetic layout settings for the exporter.

use serde::{Deserialize, Serialize};

/// Line-wrapping widths for grouped tuple lists.
///
/// These only affect where newlines fall inside vertex, face, and UV lists;
/// any width produces the same document to a reader of the grammar. The
/// defaults match the historical layout (3 vertices, 5 faces, 4 UVs per
/// line).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Vertex tuples per line.
    pub vertex_row: usize,
    /// Face index lists per line.
    pub face_row: usize,
    /// Per-vertex UV tuples per line.
    pub uv_row: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            vertex_row: 3,
            face_row: 5,
            uv_row: 4,
        }
    }
}

impl ExportSettings {
    /// Clamp all widths to at least one tuple per line.
    pub fn sanitized(mut self) -> Self {
        self.vertex_row = self.vertex_row.max(1);
        self.face_row = self.face_row.max(1);
        self.uv_row = self.uv_row.max(1);
        self
    }
}
