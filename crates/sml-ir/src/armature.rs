//! Armature, bone, and pose datablocks.
//!
//! Bones form a tree, but parent/child links are stored as name references
//! into the armature's flat bone map, never as owning pointers. That keeps
//! the structure acyclic by construction: encoders walk the map, not the
//! links.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A matrix as literal rows (3x3 or 4x4 depending on the space).
pub type Matrix = Vec<Vec<f64>>;

/// One bone of an armature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    /// Bone name, unique within the armature.
    pub name: String,
    /// Envelope radius at the head.
    pub head_radius: f64,
    /// Envelope radius at the tail.
    pub tail_radius: f64,
    /// Deform weight.
    pub weight: f64,
    /// B-bone subdivision count.
    pub subdivisions: i32,
    /// Bone length.
    pub length: f64,
    /// Envelope deform distance.
    pub deform_dist: f64,
    /// Layer visibility bitmask.
    pub layer_mask: u32,
    /// Head position per coordinate space (name -> 4-vector).
    pub head: BTreeMap<String, [f64; 4]>,
    /// Tail position per coordinate space (name -> 4-vector).
    pub tail: BTreeMap<String, [f64; 4]>,
    /// Roll angle per coordinate space.
    pub roll: BTreeMap<String, f64>,
    /// Transform matrix per coordinate space.
    pub matrix: BTreeMap<String, Matrix>,
    /// Parent bone name, if any.
    pub parent: Option<String>,
    /// Child bone names, in order.
    pub children: Vec<String>,
}

/// Armature datablock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmatureData {
    /// Whether vertex groups drive deformation.
    pub vertex_groups: bool,
    /// Whether envelopes drive deformation.
    pub envelopes: bool,
    /// Visible armature layers.
    pub layers: Vec<u32>,
    /// All bones, keyed by name. Sorted iteration keeps output stable.
    pub bones: BTreeMap<String, Bone>,
}

/// Inverse-kinematics settings of a posed bone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IkSettings {
    /// Limit rotation around X.
    pub limit_x: bool,
    /// Limit rotation around Y.
    pub limit_y: bool,
    /// Limit rotation around Z.
    pub limit_z: bool,
    /// Upper rotation limits per axis.
    pub limit_max: [f64; 3],
    /// Lower rotation limits per axis.
    pub limit_min: [f64; 3],
    /// Lock rotation around X.
    pub lock_x_rot: bool,
    /// Lock rotation around Y.
    pub lock_y_rot: bool,
    /// Lock rotation around Z.
    pub lock_z_rot: bool,
    /// Rotation stiffness per axis.
    pub stiffness: [f64; 3],
    /// Stretch factor toward the IK target.
    pub stretch: f64,
}

/// A constraint on a posed bone.
///
/// Constraint internals are not modeled; only their presence and order are
/// recorded, and they serialize as empty placeholder blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Constraint name.
    pub name: String,
}

/// One bone of a pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseBone {
    /// Name of the posed bone.
    pub name: String,
    /// IK settings, if IK is active for this bone.
    pub ik: Option<IkSettings>,
    /// Constraints in evaluation order.
    pub constraints: Vec<Constraint>,
}

/// Pose of an armature object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Posed bones, keyed by bone name.
    pub bones: BTreeMap<String, PoseBone>,
}
