//! Datablock encoders: mesh, curve, camera, lamp, metaball, 3D text,
//! and materials.

use std::io::Write;

use sml_ir::{
    CameraData, CameraProjection, CurveData, DiffuseShader, LampData, LampKind, MaterialData,
    MeshData, MetaballData, Spline, SpecShader, TextData,
};

use crate::error::ExportError;
use crate::scene::Exporter;
use crate::writer::Gf;

/// Separator after the tuple at `index`: a newline every `width` tuples and
/// after the last one, a space otherwise.
fn row_sep(index: usize, len: usize, width: usize) -> &'static str {
    if (index + 1) % width == 0 || index + 1 == len {
        "\n"
    } else {
        " "
    }
}

impl<W: Write> Exporter<'_, W> {
    pub(crate) fn mesh(&mut self, mesh: &MeshData) -> Result<(), ExportError> {
        self.w.open("mesh")?;
        self.w.num("max_smooth_angle", mesh.max_smooth_angle)?;

        let vertex_row = self.settings.vertex_row;
        self.w.begin_list("vertices")?;
        for (i, v) in mesh.vertices.iter().enumerate() {
            self.w.raw_fmt(format_args!(
                "({} {} {}){}",
                Gf(v[0]),
                Gf(v[1]),
                Gf(v[2]),
                row_sep(i, mesh.vertices.len(), vertex_row)
            ))?;
        }
        self.w.end_list()?;

        if let Some(layer) = &mesh.render_color_layer {
            self.w.text("render_color_layer", layer)?;
        }
        if let Some(colors) = &mesh.vertex_colors {
            self.w.begin_list("vertex_colors")?;
            for face in colors {
                self.w.raw_fmt(format_args!("("))?;
                let mut sep = "";
                for c in face {
                    self.w.raw_fmt(format_args!(
                        "{sep}({} {} {})",
                        Gf(c[0]),
                        Gf(c[1]),
                        Gf(c[2])
                    ))?;
                    sep = " ";
                }
                self.w.raw_fmt(format_args!(")\n"))?;
            }
            self.w.end_list()?;
        }

        if let Some(layer) = &mesh.render_uv_layer {
            self.w.text("render_uv_layer", layer)?;
        }
        if let Some(uvs) = &mesh.vertex_uv {
            let uv_row = self.settings.uv_row;
            self.w.begin_list("vertex_uv")?;
            for (i, uv) in uvs.iter().enumerate() {
                self.w.raw_fmt(format_args!(
                    "({} {}){}",
                    Gf(uv[0]),
                    Gf(uv[1]),
                    row_sep(i, uvs.len(), uv_row)
                ))?;
            }
            self.w.end_list()?;
        }
        if let Some(face_uvs) = &mesh.face_uv {
            self.w.begin_list("face_uv")?;
            for face in face_uvs {
                self.w.raw_fmt(format_args!("("))?;
                let mut sep = "";
                for uv in face {
                    self.w
                        .raw_fmt(format_args!("{sep}({} {})", Gf(uv[0]), Gf(uv[1])))?;
                    sep = " ";
                }
                self.w.raw_fmt(format_args!(")\n"))?;
            }
            self.w.end_list()?;
        }

        let face_row = self.settings.face_row;
        self.w.begin_list("faces")?;
        for (i, face) in mesh.faces.iter().enumerate() {
            self.w.raw_fmt(format_args!("("))?;
            let mut sep = "";
            for index in face {
                self.w.raw_fmt(format_args!("{sep}{index}"))?;
                sep = " ";
            }
            self.w
                .raw_fmt(format_args!("){}", row_sep(i, mesh.faces.len(), face_row)))?;
        }
        self.w.end_list()?;

        self.materials(&mesh.materials)?;
        self.w.close()?;
        Ok(())
    }

    pub(crate) fn curve(&mut self, curve: &CurveData) -> Result<(), ExportError> {
        self.w.open("curve")?;
        self.w.int("bevresol", curve.bevel_resolution.into())?;
        self.w.num("extrude", curve.extrude)?;
        self.w.num("bevel_depth", curve.bevel_depth)?;
        self.w.vector("size", &curve.size)?;
        self.w.int("path_length", curve.path_length.into())?;
        self.w.int("u_resolution", curve.resolution_u.into())?;
        self.w.int("v_resolution", curve.resolution_v.into())?;
        for spline in &curve.splines {
            match spline {
                Spline::Nurbs { points } => {
                    self.w.open("nurbs_curve")?;
                    for p in points {
                        self.w.nums("point", p)?;
                    }
                    self.w.close()?;
                }
                Spline::Bezier { points } => {
                    self.w.open("bezier_curve")?;
                    for triple in points {
                        self.w.open("triple")?;
                        for row in [&triple.handle_left, &triple.knot, &triple.handle_right] {
                            self.w.raw_fmt(format_args!(
                                "({} {} {})\n",
                                Gf(row[0]),
                                Gf(row[1]),
                                Gf(row[2])
                            ))?;
                        }
                        self.w.close()?;
                    }
                    self.w.close()?;
                }
            }
        }
        self.w.close()?;
        Ok(())
    }

    pub(crate) fn camera(&mut self, camera: &CameraData) -> Result<(), ExportError> {
        self.w.open("camera")?;
        self.w.num("clip_start", camera.clip_start)?;
        self.w.num("clip_end", camera.clip_end)?;
        self.w.num("dof_dist", camera.dof_distance)?;
        self.w.nums("shift", &camera.shift)?;
        match camera.projection {
            CameraProjection::Ortho { scale } => {
                self.w
                    .raw_fmt(format_args!("(cam_type ortho (scale {}))\n", Gf(scale)))?;
            }
            CameraProjection::Persp { angle, lens } => {
                self.w.raw_fmt(format_args!(
                    "(cam_type persp (angle {}) (lens {}))\n",
                    Gf(angle),
                    Gf(lens)
                ))?;
            }
        }
        self.w.close()?;
        Ok(())
    }

    pub(crate) fn lamp(&mut self, lamp: &LampData) -> Result<(), ExportError> {
        self.w.open("lamp")?;
        self.w.nums("lamp_color", &lamp.color)?;
        self.w.num("bias", lamp.bias)?;
        self.w.num("softness", lamp.softness)?;
        self.w.num("clip_start", lamp.clip_start)?;
        self.w.num("clip_end", lamp.clip_end)?;
        self.w.num("energy", lamp.energy)?;
        self.w.int("modes", lamp.modes.into())?;
        self.w.boolean("shadows", lamp.has_shadows())?;
        self.w.text("falloff_type", lamp.falloff.as_str())?;
        self.w.text("lamp_type", lamp.kind.name())?;
        match lamp.kind {
            LampKind::Spot { blend, size } => {
                self.w.num("spot_blend", blend)?;
                self.w.num("spot_size", size)?;
            }
            LampKind::Area { size_x, size_y } => {
                self.w.nums("area_size", &[size_x, size_y])?;
            }
            LampKind::Lamp | LampKind::Sun | LampKind::Hemi | LampKind::Photon => {}
        }
        self.w.close()?;
        Ok(())
    }

    pub(crate) fn metaball(&mut self, mball: &MetaballData) -> Result<(), ExportError> {
        self.w.open("metaball")?;
        self.w.num("wiresize", mball.wire_size)?;
        self.w.num("rendersize", mball.render_size)?;
        self.w.num("thresh", mball.threshold)?;
        self.materials(&mball.materials)?;
        for elem in &mball.elements {
            self.w.open("element")?;
            self.w.atom("type", elem.kind.as_str())?;
            self.w.num("radius", elem.radius)?;
            self.w.nums("coords", &elem.position)?;
            self.w.nums("dims", &elem.dims)?;
            self.w.nums("quat", &elem.quat)?;
            self.w.num("stiffness", elem.stiffness)?;
            self.w.close()?;
        }
        self.w.close()?;
        Ok(())
    }

    pub(crate) fn text3d(&mut self, text: &TextData) -> Result<(), ExportError> {
        self.w.open("text3d")?;
        self.w.text("text", &text.text)?;
        self.w.num("shear", text.shear)?;
        self.w.int("total_frames", text.total_frames.into())?;
        self.w.num("frame_height", text.frame_height)?;
        self.w.num("frame_width", text.frame_width)?;
        self.w.nums("frame_xy", &text.frame_xy)?;
        self.w.atom("alignment", text.alignment.as_str())?;
        self.w.num("bevel_amount", text.bevel_amount)?;
        self.w.num("extrude_bevel_depth", text.extrude_bevel_depth)?;
        self.w.num("extrude_depth", text.extrude_depth)?;
        self.w.text("font", &text.font)?;
        self.w.num("width", text.width)?;
        self.w.num("size", text.size)?;
        self.w.num("spacing", text.spacing)?;
        self.w.nums("xy_offset", &text.offset)?;
        self.w.num("line_separation", text.line_separation)?;
        self.w.close()?;
        Ok(())
    }

    /// Emit a material list, defining each material on first use anywhere in
    /// the document and citing it by name afterwards.
    pub(crate) fn materials(&mut self, materials: &[MaterialData]) -> Result<(), ExportError> {
        self.w.open("materials")?;
        for m in materials {
            if self.registry.mark_material(&m.name) {
                self.material(m)?;
            } else {
                self.w.text("use_material", &m.name)?;
            }
        }
        self.w.close()?;
        Ok(())
    }

    fn material(&mut self, m: &MaterialData) -> Result<(), ExportError> {
        self.w.open("material")?;
        self.w.text("material_name", &m.name)?;
        self.w
            .nums("color", &[m.color[0], m.color[1], m.color[2], m.alpha])?;
        self.w.num("anisotropy", m.anisotropy)?;
        self.w.num("translucency", m.translucency)?;
        self.w.num("amb", m.ambient)?;
        self.w.num("emit", m.emit)?;
        self.w.int("hard", m.hardness.into())?;
        self.w.num("add", m.add)?;
        self.w.num("spec", m.spec)?;
        self.w.nums("spec_color", &m.spec_color)?;
        self.w.nums("mirror_color", &m.mirror_color)?;
        self.w.num("reflections_threshold", m.reflections_threshold)?;
        self.w.num("refractions_threshold", m.refractions_threshold)?;
        self.w.num("amount_of_reflections", m.reflection_amount)?;
        self.w.int("trans_depth", m.trans_depth.into())?;

        self.w.text("diffuse_shader", m.diffuse_shader.as_str())?;
        match m.diffuse_shader {
            DiffuseShader::Lambert => {}
            DiffuseShader::OrenNayar { roughness } => self.w.num("roughness", roughness)?,
            DiffuseShader::Toon { size, smooth } => {
                self.w.num("diffuseSize", size)?;
                self.w.num("diffuseSmooth", smooth)?;
            }
            DiffuseShader::Minnaert { darkness } => self.w.num("diffuseDarkness", darkness)?,
        }

        self.w.text("spec_shader", m.spec_shader.as_str())?;
        match m.spec_shader {
            SpecShader::CookTorr | SpecShader::Phong => {}
            SpecShader::WardIso { slope_std_dev } => {
                self.w.num("surf_slope_std_dev", slope_std_dev)?;
            }
            SpecShader::Toon { size } => self.w.num("spec_size", size)?,
            SpecShader::Blinn { refraction_index } => {
                self.w.num("refrac_index", refraction_index)?;
            }
        }
        self.w.close()?;
        Ok(())
    }
}
