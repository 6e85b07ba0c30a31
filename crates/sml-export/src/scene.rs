//! Document walker: scenes, objects, render settings, properties, animation.

use std::io::Write;

use sml_ir::{Content, Document, Ipo, Keyframe, Object, Property, PropertyValue, RenderSettings, Scene};

use crate::error::ExportError;
use crate::registry::DedupRegistry;
use crate::settings::ExportSettings;
use crate::writer::{Gf, SexprWriter};

/// One export run: owns the output sink and the dedup state, borrows the
/// document.
///
/// The walk is a single sequential pass in model order. Which object gets to
/// emit a shared datablock's full definition is decided by that order, so the
/// output is deterministic for a given document.
pub struct Exporter<'a, W: Write> {
    pub(crate) w: SexprWriter<W>,
    pub(crate) registry: DedupRegistry,
    pub(crate) settings: ExportSettings,
    doc: &'a Document,
}

impl<'a, W: Write> Exporter<'a, W> {
    /// Create an exporter with default layout settings.
    pub fn new(doc: &'a Document, out: W) -> Self {
        Self::with_settings(doc, out, ExportSettings::default())
    }

    /// Create an exporter with explicit layout settings.
    pub fn with_settings(doc: &'a Document, out: W, settings: ExportSettings) -> Self {
        Self {
            w: SexprWriter::new(out),
            registry: DedupRegistry::new(),
            settings: settings.sanitized(),
            doc,
        }
    }

    /// Run the export and hand back the sink.
    ///
    /// On error the sink holds a partial document the caller must discard.
    pub fn export(mut self) -> Result<W, ExportError> {
        self.w.open("blend")?;
        for scene in &self.doc.scenes {
            self.scene(scene)?;
        }
        self.w.close()?;
        Ok(self.w.into_inner())
    }

    fn scene(&mut self, scene: &Scene) -> Result<(), ExportError> {
        self.w.open("scene")?;
        self.w.text("name", &scene.name)?;
        self.w
            .boolean("active_scene", scene.name == self.doc.active_scene)?;
        self.w.int_group("layers", &scene.layers)?;
        self.render(&scene.render)?;
        for obj in &scene.objects {
            self.object(obj)?;
        }
        self.w.close()?;
        Ok(())
    }

    fn render(&mut self, render: &RenderSettings) -> Result<(), ExportError> {
        self.w.open("render")?;
        self.w.nums("image_size", &render.image_size)?;
        self.w.atom("image_type", render.image_type.as_str())?;
        self.w.int("start_frame", render.start_frame.into())?;
        self.w.int("end_frame", render.end_frame.into())?;
        self.w.num("fps", render.fps)?;
        self.w.num("fps_base", render.fps_base)?;
        self.w.boolean("toon_shading", render.toon_shading)?;
        self.w.boolean("shadow", render.shadow)?;
        match render.motion_blur {
            Some(factor) => {
                self.w.boolean("motion_blur", true)?;
                self.w.num("motion_blur_factor", factor)?;
            }
            None => self.w.boolean("motion_blur", false)?,
        }
        self.w.close()?;
        Ok(())
    }

    fn object(&mut self, obj: &Object) -> Result<(), ExportError> {
        self.w.open("obj")?;
        self.w.text("type", obj.kind.as_str())?;
        self.w.text("datablock_name", &obj.name)?;
        self.w.vector("location", &obj.location)?;
        self.w.vector("rotation", &obj.rotation)?;
        self.w.vector("scale", &obj.scale)?;
        self.w.int_group("layers", &obj.layers)?;
        if !obj.properties.is_empty() {
            self.properties(&obj.properties)?;
        }
        if let Some(ipo) = &obj.ipo {
            self.ipo(ipo)?;
        }
        if let Some(name) = &obj.content {
            self.content_block(obj, name)?;
        }
        if let Some(pose) = &obj.pose {
            self.pose(pose)?;
        }
        self.w.close()?;
        Ok(())
    }

    /// Emit the content block, defining the datablock on first reference and
    /// citing it by name afterwards.
    fn content_block(&mut self, obj: &Object, name: &str) -> Result<(), ExportError> {
        self.w.open("content")?;
        if self.registry.mark_content(name) {
            self.w.text("content_name", name)?;
            let block =
                self.doc
                    .datablocks
                    .get(name)
                    .ok_or_else(|| ExportError::UnknownDatablock {
                        object: obj.name.clone(),
                        name: name.to_string(),
                    })?;
            match block {
                Content::Mesh(mesh) => self.mesh(mesh)?,
                Content::Curve(curve) => self.curve(curve)?,
                Content::Camera(camera) => self.camera(camera)?,
                Content::Lamp(lamp) => self.lamp(lamp)?,
                Content::Metaball(mball) => self.metaball(mball)?,
                Content::Text(text) => self.text3d(text)?,
                Content::Armature(arm) => self.armature(arm)?,
            }
        } else {
            self.w.text("use_content", name)?;
        }
        self.w.close()?;
        Ok(())
    }

    fn properties(&mut self, props: &[Property]) -> Result<(), ExportError> {
        self.w.open("game_properties")?;
        for prop in props {
            self.w.open("property")?;
            self.w.text("name", &prop.name)?;
            self.w.text("type", prop.value.type_tag())?;
            match &prop.value {
                PropertyValue::Int(v) => self.w.int("data", *v)?,
                PropertyValue::Float(v) | PropertyValue::Time(v) => self.w.num("data", *v)?,
                PropertyValue::String(v) => self.w.text("data", v)?,
                PropertyValue::Bool(v) => self.w.boolean("data", *v)?,
                PropertyValue::Other { data, .. } => self.w.text("data", data)?,
            }
            self.w.close()?;
        }
        self.w.close()?;
        Ok(())
    }

    fn ipo(&mut self, ipo: &Ipo) -> Result<(), ExportError> {
        self.w.begin_list("ipo")?;
        for curve in &ipo.curves {
            self.w.open("curve")?;
            self.w.text("name", &curve.name)?;
            self.w.begin_list("bezier_points")?;
            for point in &curve.points {
                self.keyframe(point)?;
            }
            self.w.end_list()?;
            self.w.close()?;
        }
        self.w.end_list()?;
        Ok(())
    }

    fn keyframe(&mut self, point: &Keyframe) -> Result<(), ExportError> {
        self.w.open("bez_triple")?;
        self.w.num("weight", point.weight)?;
        self.w.num("tilt", point.tilt)?;
        for row in [&point.handle_left, &point.knot, &point.handle_right] {
            self.w.raw_fmt(format_args!(
                "({} {} {})\n",
                Gf(row[0]),
                Gf(row[1]),
                Gf(row[2])
            ))?;
        }
        self.w.close()?;
        Ok(())
    }
}
