//! Armature, bone, and pose encoders.
//!
//! Bones are emitted by walking the armature's flat name-keyed map; the
//! parent and child fields are written as name strings and never followed,
//! so cross-links cannot send the encoder into a loop.

use std::collections::BTreeMap;
use std::io::Write;

use sml_ir::{ArmatureData, Bone, Matrix, Pose, PoseBone};

use crate::error::ExportError;
use crate::scene::Exporter;
use crate::writer::Gf;

impl<W: Write> Exporter<'_, W> {
    pub(crate) fn armature(&mut self, arm: &ArmatureData) -> Result<(), ExportError> {
        self.w.open("armature")?;
        self.w.boolean("vertex_groups", arm.vertex_groups)?;
        self.w.boolean("envelopes", arm.envelopes)?;
        self.w.int_group("layers", &arm.layers)?;
        for bone in arm.bones.values() {
            self.bone(bone)?;
        }
        self.w.close()?;
        Ok(())
    }

    fn bone(&mut self, bone: &Bone) -> Result<(), ExportError> {
        self.w.open("bone")?;
        self.w.text("bone_name", &bone.name)?;
        self.w.num("head_radius", bone.head_radius)?;
        self.w.num("tail_radius", bone.tail_radius)?;
        self.w.num("weight", bone.weight)?;
        self.w.int("subdivisions", bone.subdivisions.into())?;
        self.w.num("length", bone.length)?;
        self.w.num("deform_dist", bone.deform_dist)?;
        self.w.int("layer_mask", bone.layer_mask.into())?;
        self.extremity("head", &bone.head)?;
        self.extremity("tail", &bone.tail)?;
        self.roll(&bone.roll)?;
        self.matrices(&bone.matrix)?;
        if let Some(parent) = &bone.parent {
            self.w.text("parent_name", parent)?;
        }
        if !bone.children.is_empty() {
            self.w.open("children")?;
            for child in &bone.children {
                self.w.text("child_name", child)?;
            }
            self.w.close()?;
        }
        self.w.close()?;
        Ok(())
    }

    /// Head or tail block: one named 4-vector per coordinate space.
    fn extremity(
        &mut self,
        label: &str,
        spaces: &BTreeMap<String, [f64; 4]>,
    ) -> Result<(), ExportError> {
        self.w.open(label)?;
        for (space, vec) in spaces {
            self.w.nums(&space.to_lowercase(), vec)?;
        }
        self.w.close()?;
        Ok(())
    }

    fn roll(&mut self, rolls: &BTreeMap<String, f64>) -> Result<(), ExportError> {
        self.w.open("roll")?;
        for (space, value) in rolls {
            self.w.num(&space.to_lowercase(), *value)?;
        }
        self.w.close()?;
        Ok(())
    }

    fn matrices(&mut self, matrices: &BTreeMap<String, Matrix>) -> Result<(), ExportError> {
        self.w.open("matrix")?;
        for (space, matrix) in matrices {
            self.w.open(&space.to_lowercase())?;
            for row in matrix {
                self.w.raw_fmt(format_args!("("))?;
                let mut sep = "";
                for v in row {
                    self.w.raw_fmt(format_args!("{sep}{}", Gf(*v)))?;
                    sep = " ";
                }
                self.w.raw_fmt(format_args!(")\n"))?;
            }
            self.w.close()?;
        }
        self.w.close()?;
        Ok(())
    }

    pub(crate) fn pose(&mut self, pose: &Pose) -> Result<(), ExportError> {
        self.w.open("pose")?;
        for bone in pose.bones.values() {
            self.pose_bone(bone)?;
        }
        self.w.close()?;
        Ok(())
    }

    fn pose_bone(&mut self, bone: &PoseBone) -> Result<(), ExportError> {
        self.w.open("pose_bone")?;
        self.w.text("name", &bone.name)?;
        if let Some(ik) = &bone.ik {
            self.w.open("ik")?;
            self.w.boolean("limit_x", ik.limit_x)?;
            self.w.boolean("limit_y", ik.limit_y)?;
            self.w.boolean("limit_z", ik.limit_z)?;
            self.w.nums("limit_max", &ik.limit_max)?;
            self.w.nums("limit_min", &ik.limit_min)?;
            self.w.boolean("lock_x_rot", ik.lock_x_rot)?;
            self.w.boolean("lock_y_rot", ik.lock_y_rot)?;
            self.w.boolean("lock_z_rot", ik.lock_z_rot)?;
            self.w.nums("stiff", &ik.stiffness)?;
            self.w.num("stretch", ik.stretch)?;
            self.w.close()?;
        }
        if !bone.constraints.is_empty() {
            self.w.open("constraints")?;
            for _ in &bone.constraints {
                // Constraint internals are not modeled; keep the slot.
                self.w.open("const")?;
                self.w.close()?;
            }
            self.w.close()?;
        }
        self.w.close()?;
        Ok(())
    }
}
