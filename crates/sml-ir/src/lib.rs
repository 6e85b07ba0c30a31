#![warn(missing_docs)]

//! Intermediate representation for the smlscene toolchain.
//!
//! This crate defines the scene model consumed by the SML exporter: scenes,
//! placed objects, and the shared datablocks (meshes, curves, cameras, lamps,
//! metaballs, 3D text, armatures) they reference.
//!
//! The IR is purely declarative. Objects reference their datablock by name,
//! not by ownership — several objects naming the same datablock denote the
//! identical block, which is what lets the exporter collapse shared content
//! into a single definition.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod armature;
pub mod geometry;
pub mod material;

pub use armature::{ArmatureData, Bone, Constraint, IkSettings, Matrix, Pose, PoseBone};
pub use geometry::{
    BezTriple, CameraData, CameraProjection, CurveData, LampData, LampFalloff, LampKind,
    MeshData, MetaElement, MetaElementKind, MetaballData, Spline, TextAlignment, TextData,
};
pub use material::{DiffuseShader, MaterialData, SpecShader};

/// Kind tag of a placed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Mesh object.
    Mesh,
    /// Curve object.
    Curve,
    /// Camera object.
    Camera,
    /// Lamp object.
    Lamp,
    /// Metaball object.
    Metaball,
    /// 3D text object.
    Text,
    /// Armature object.
    Armature,
    /// Any other object kind (e.g. an empty); carries no datablock.
    Other,
}

impl ObjectKind {
    /// Canonical wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Mesh => "Mesh",
            ObjectKind::Curve => "Curve",
            ObjectKind::Camera => "Camera",
            ObjectKind::Lamp => "Lamp",
            ObjectKind::Metaball => "Metaball",
            ObjectKind::Text => "Text",
            ObjectKind::Armature => "Armature",
            ObjectKind::Other => "Other",
        }
    }
}

/// A shared datablock payload, discriminated by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Mesh geometry.
    Mesh(MeshData),
    /// Curve geometry.
    Curve(CurveData),
    /// Camera settings.
    Camera(CameraData),
    /// Lamp settings.
    Lamp(LampData),
    /// Metaball field.
    Metaball(MetaballData),
    /// 3D text body.
    Text(TextData),
    /// Armature rig.
    Armature(ArmatureData),
}

/// Value of a custom game property, discriminated by the host's type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PropertyValue {
    /// Integer property.
    Int(i64),
    /// Float property.
    Float(f64),
    /// String property.
    String(String),
    /// Boolean property.
    Bool(bool),
    /// Time property (seconds).
    Time(f64),
    /// Any other host type; kept as its tag plus a textual rendering.
    Other {
        /// The host's type tag.
        tag: String,
        /// Textual rendering of the value.
        data: String,
    },
}

impl PropertyValue {
    /// The host's type tag for this value.
    pub fn type_tag(&self) -> &str {
        match self {
            PropertyValue::Int(_) => "INT",
            PropertyValue::Float(_) => "FLOAT",
            PropertyValue::String(_) => "STRING",
            PropertyValue::Bool(_) => "BOOL",
            PropertyValue::Time(_) => "TIME",
            PropertyValue::Other { tag, .. } => tag,
        }
    }
}

/// A custom game property attached to an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Typed value.
    pub value: PropertyValue,
}

/// One Bezier keyframe of an animation curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Keyframe weight.
    pub weight: f64,
    /// Keyframe tilt.
    pub tilt: f64,
    /// Incoming handle.
    pub handle_left: [f64; 3],
    /// Control point.
    pub knot: [f64; 3],
    /// Outgoing handle.
    pub handle_right: [f64; 3],
}

/// One named channel of an animation curve set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpoCurve {
    /// Channel name (e.g. "LocX").
    pub name: String,
    /// Bezier keyframes in time order.
    pub points: Vec<Keyframe>,
}

/// An animation curve set (ipo) attached to an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ipo {
    /// Channels in order.
    pub curves: Vec<IpoCurve>,
}

/// Output image/container format of the render settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ImageType {
    AviRaw,
    AviJpeg,
    AviCodec,
    QuickTime,
    Targa,
    RawTga,
    Png,
    Bmp,
    Jpeg,
    HamX,
    Iris,
}

impl ImageType {
    /// Canonical wire tag for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::AviRaw => "aviraw",
            ImageType::AviJpeg => "avijpeg",
            ImageType::AviCodec => "avicodec",
            ImageType::QuickTime => "quicktime",
            ImageType::Targa => "targa",
            ImageType::RawTga => "rawtga",
            ImageType::Png => "png",
            ImageType::Bmp => "bmp",
            ImageType::Jpeg => "jpeg",
            ImageType::HamX => "hamx",
            ImageType::Iris => "iris",
        }
    }
}

/// Render settings of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Output image size (width, height).
    pub image_size: [f64; 2],
    /// Output image/container format.
    pub image_type: ImageType,
    /// First frame of the range.
    pub start_frame: i32,
    /// Last frame of the range.
    pub end_frame: i32,
    /// Frames per second.
    pub fps: f64,
    /// FPS base divisor.
    pub fps_base: f64,
    /// Toon shading toggle.
    pub toon_shading: bool,
    /// Shadow rendering toggle.
    pub shadow: bool,
    /// Motion blur factor, if motion blur is enabled.
    pub motion_blur: Option<f64>,
}

/// A placed object inside a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Kind tag.
    pub kind: ObjectKind,
    /// Object name.
    pub name: String,
    /// Location.
    pub location: [f64; 3],
    /// Euler rotation.
    pub rotation: [f64; 3],
    /// Scale.
    pub scale: [f64; 3],
    /// Layers this object is on.
    pub layers: Vec<u32>,
    /// Custom game properties (empty if none).
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Animation curve set, if any.
    #[serde(default)]
    pub ipo: Option<Ipo>,
    /// Name of the referenced datablock in [`Document::datablocks`].
    ///
    /// `None` for objects without content (kind [`ObjectKind::Other`]).
    #[serde(default)]
    pub content: Option<String>,
    /// Pose, for armature objects only.
    #[serde(default)]
    pub pose: Option<Pose>,
}

/// A scene: render settings plus an ordered list of objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name, unique within the document.
    pub name: String,
    /// Active layers of the scene.
    pub layers: Vec<u32>,
    /// Render settings.
    pub render: RenderSettings,
    /// Objects in scene order.
    pub objects: Vec<Object>,
}

/// A complete scene model — the root of the IR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Name of the currently active scene.
    pub active_scene: String,
    /// Scenes in model order.
    pub scenes: Vec<Scene>,
    /// Shared datablocks, keyed by name.
    pub datablocks: HashMap<String, Content>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
