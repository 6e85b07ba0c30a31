//! Geometry and lighting datablock payloads.

use serde::{Deserialize, Serialize};

use crate::material::MaterialData;

/// Mesh datablock: vertex positions, faces, and optional per-layer data.
///
/// Faces index into the vertex list and have 3 or 4 corners. The optional
/// color/UV layers are parallel to the face list (one entry per face, one
/// tuple per face corner, in the face's own winding order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Smoothing-angle threshold in degrees.
    pub max_smooth_angle: f64,
    /// Vertex positions.
    pub vertices: Vec<[f64; 3]>,
    /// Name of the color layer used at render time, if any.
    pub render_color_layer: Option<String>,
    /// Per-face corner colors (RGB), parallel to `faces`.
    pub vertex_colors: Option<Vec<Vec<[f64; 3]>>>,
    /// Name of the UV layer used at render time, if any.
    pub render_uv_layer: Option<String>,
    /// Per-vertex UV coordinates ("sticky" UVs), parallel to `vertices`.
    pub vertex_uv: Option<Vec<[f64; 2]>>,
    /// Per-face corner UV coordinates, parallel to `faces`.
    pub face_uv: Option<Vec<Vec<[f64; 2]>>>,
    /// Faces as lists of vertex indices (length 3 or 4).
    pub faces: Vec<Vec<u32>>,
    /// Materials assigned to this mesh, in slot order.
    pub materials: Vec<MaterialData>,
}

/// A single Bezier control point: in-handle, knot, out-handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezTriple {
    /// Incoming handle position.
    pub handle_left: [f64; 3],
    /// Control vertex position.
    pub knot: [f64; 3],
    /// Outgoing handle position.
    pub handle_right: [f64; 3],
}

/// One sub-curve of a [`CurveData`] block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Spline {
    /// NURBS sub-curve: plain control vertices.
    Nurbs {
        /// Control vertex positions.
        points: Vec<[f64; 3]>,
    },
    /// Bezier sub-curve: handle/knot/handle triples.
    Bezier {
        /// Control point triples.
        points: Vec<BezTriple>,
    },
}

/// Curve datablock: bevel/extrude parameters plus sub-curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveData {
    /// Bevel resolution.
    pub bevel_resolution: i32,
    /// Extrude depth (bevels only).
    pub extrude: f64,
    /// Bevel depth (bevels only).
    pub bevel_depth: f64,
    /// Curve size per axis.
    pub size: [f64; 3],
    /// Path length in frames.
    pub path_length: i32,
    /// Surface resolution in U.
    pub resolution_u: i32,
    /// Surface resolution in V.
    pub resolution_v: i32,
    /// Sub-curves in order.
    pub splines: Vec<Spline>,
}

/// Camera projection, with the parameters specific to each kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CameraProjection {
    /// Orthographic projection.
    Ortho {
        /// Orthographic scale.
        scale: f64,
    },
    /// Perspective projection.
    Persp {
        /// Field of view in degrees.
        angle: f64,
        /// Focal length in millimeters.
        lens: f64,
    },
}

/// Camera datablock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraData {
    /// Near clipping distance.
    pub clip_start: f64,
    /// Far clipping distance.
    pub clip_end: f64,
    /// Depth-of-field focus distance.
    pub dof_distance: f64,
    /// Horizontal/vertical lens shift.
    pub shift: [f64; 2],
    /// Projection kind and its parameters.
    pub projection: CameraProjection,
}

/// Distance falloff of a lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LampFalloff {
    /// Constant intensity.
    Constant,
    /// Inverse linear falloff.
    InverseLinear,
    /// Inverse square falloff.
    InverseSquare,
    /// User-defined falloff curve.
    CustomCurve,
    /// Linear/quadratic weighted falloff.
    LinQuadWeighted,
}

impl LampFalloff {
    /// Canonical wire tag for this falloff.
    pub fn as_str(&self) -> &'static str {
        match self {
            LampFalloff::Constant => "constant",
            LampFalloff::InverseLinear => "inverse_linear",
            LampFalloff::InverseSquare => "inverse_square",
            LampFalloff::CustomCurve => "custom_curve",
            LampFalloff::LinQuadWeighted => "Lin/Quad weighted",
        }
    }
}

/// Lamp kind, with the parameters specific to each kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LampKind {
    /// Omnidirectional point lamp.
    Lamp,
    /// Directional sun lamp.
    Sun,
    /// Spot lamp with a cone.
    Spot {
        /// Softness of the spot edge.
        blend: f64,
        /// Cone angle in degrees.
        size: f64,
    },
    /// Hemisphere lamp.
    Hemi,
    /// Area lamp.
    Area {
        /// Area size along X.
        size_x: f64,
        /// Area size along Y.
        size_y: f64,
    },
    /// Photon lamp.
    Photon,
}

impl LampKind {
    /// Canonical wire tag for this lamp kind.
    pub fn name(&self) -> &'static str {
        match self {
            LampKind::Lamp => "Lamp",
            LampKind::Sun => "Sun",
            LampKind::Spot { .. } => "Spot",
            LampKind::Hemi => "Hemi",
            LampKind::Area { .. } => "Area",
            LampKind::Photon => "Photon",
        }
    }
}

/// Lamp datablock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LampData {
    /// Lamp color (RGB).
    pub color: [f64; 3],
    /// Shadow bias.
    pub bias: f64,
    /// Shadow softness.
    pub softness: f64,
    /// Shadow buffer near clip.
    pub clip_start: f64,
    /// Shadow buffer far clip.
    pub clip_end: f64,
    /// Lamp energy.
    pub energy: f64,
    /// Raw mode bitmask (bit 0 = shadows enabled).
    pub modes: u32,
    /// Distance falloff.
    pub falloff: LampFalloff,
    /// Lamp kind and its parameters.
    pub kind: LampKind,
}

impl LampData {
    /// Bit of the `modes` mask that enables shadow casting.
    pub const MODE_SHADOWS: u32 = 1;

    /// Whether the shadow bit is set in the mode mask.
    pub fn has_shadows(&self) -> bool {
        self.modes & Self::MODE_SHADOWS != 0
    }
}

/// Primitive kind of a metaball element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetaElementKind {
    /// Spherical element.
    Ball,
    /// Tube element.
    Tube,
    /// Planar element.
    Plane,
    /// Ellipsoid element.
    Elipsoid,
    /// Cubic element.
    Cube,
}

impl MetaElementKind {
    /// Canonical wire tag for this element kind.
    ///
    /// `elipsoid` keeps the host's historical spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaElementKind::Ball => "ball",
            MetaElementKind::Tube => "tube",
            MetaElementKind::Plane => "plane",
            MetaElementKind::Elipsoid => "elipsoid",
            MetaElementKind::Cube => "cube",
        }
    }
}

/// One element of a metaball datablock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetaElement {
    /// Primitive kind.
    pub kind: MetaElementKind,
    /// Element radius.
    pub radius: f64,
    /// Element position.
    pub position: [f64; 3],
    /// Per-axis expansion.
    pub dims: [f64; 3],
    /// Orientation quaternion (w, x, y, z).
    pub quat: [f64; 4],
    /// Field stiffness.
    pub stiffness: f64,
}

/// Metaball datablock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaballData {
    /// Wireframe display resolution.
    pub wire_size: f64,
    /// Render resolution.
    pub render_size: f64,
    /// Influence threshold.
    pub threshold: f64,
    /// Materials assigned to this metaball.
    pub materials: Vec<MaterialData>,
    /// Elements in order.
    pub elements: Vec<MetaElement>,
}

/// Paragraph alignment of a 3D text body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlignment {
    /// Left-aligned.
    Left,
    /// Right-aligned.
    Right,
    /// Centered.
    Middle,
    /// Justified.
    Flush,
}

impl TextAlignment {
    /// Canonical wire tag for this alignment.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlignment::Left => "left",
            TextAlignment::Right => "right",
            TextAlignment::Middle => "middle",
            TextAlignment::Flush => "flush",
        }
    }
}

/// 3D text datablock.
///
/// The font is recorded as a bare filename reference; font content is never
/// embedded or deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextData {
    /// Text body.
    pub text: String,
    /// Italic-style shear factor.
    pub shear: f64,
    /// Number of text frames.
    pub total_frames: i32,
    /// Frame height.
    pub frame_height: f64,
    /// Frame width.
    pub frame_width: f64,
    /// Frame origin.
    pub frame_xy: [f64; 2],
    /// Paragraph alignment.
    pub alignment: TextAlignment,
    /// Bevel amount.
    pub bevel_amount: f64,
    /// Depth of the extrusion bevel.
    pub extrude_bevel_depth: f64,
    /// Extrusion depth.
    pub extrude_depth: f64,
    /// Filename of the referenced font.
    pub font: String,
    /// Character width scale.
    pub width: f64,
    /// Character size.
    pub size: f64,
    /// Character spacing.
    pub spacing: f64,
    /// X/Y offset of the text body.
    pub offset: [f64; 2],
    /// Line separation factor.
    pub line_separation: f64,
}
