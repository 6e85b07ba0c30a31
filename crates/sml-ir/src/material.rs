//! Material datablocks and shader variants.

use serde::{Deserialize, Serialize};

/// Diffuse shading model, with the parameters specific to each variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DiffuseShader {
    /// Lambert diffuse (no extra parameters).
    Lambert,
    /// Oren-Nayar diffuse.
    OrenNayar {
        /// Surface roughness.
        roughness: f64,
    },
    /// Toon diffuse.
    Toon {
        /// Size of the lit area.
        size: f64,
        /// Softness of the lit/unlit boundary.
        smooth: f64,
    },
    /// Minnaert diffuse.
    Minnaert {
        /// Darkness of the surface.
        darkness: f64,
    },
}

impl DiffuseShader {
    /// Canonical wire tag for this shader.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffuseShader::Lambert => "diffuse_lambert",
            DiffuseShader::OrenNayar { .. } => "diffuse_orennayar",
            DiffuseShader::Toon { .. } => "diffuse_toon",
            DiffuseShader::Minnaert { .. } => "diffuse_minnaert",
        }
    }
}

/// Specular shading model, with the parameters specific to each variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpecShader {
    /// Cook-Torrance specular (no extra parameters).
    CookTorr,
    /// Phong specular (no extra parameters).
    Phong,
    /// Blinn specular.
    Blinn {
        /// Index of refraction.
        refraction_index: f64,
    },
    /// Toon specular.
    Toon {
        /// Size of the specular spot.
        size: f64,
    },
    /// Ward isotropic specular.
    WardIso {
        /// Surface slope standard deviation.
        slope_std_dev: f64,
    },
}

impl SpecShader {
    /// Canonical wire tag for this shader.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecShader::CookTorr => "spec_cooktorr",
            SpecShader::Phong => "spec_phong",
            SpecShader::Blinn { .. } => "spec_blinn",
            SpecShader::Toon { .. } => "spec_toon",
            SpecShader::WardIso { .. } => "spec_wardiso",
        }
    }
}

/// Material datablock.
///
/// Materials are shared by name: every mesh or metaball that lists a material
/// with the same name denotes the same material, and the exporter emits the
/// full definition only once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialData {
    /// Material name (the dedup key).
    pub name: String,
    /// Base color (RGB).
    pub color: [f64; 3],
    /// Opacity in 0.0..1.0.
    pub alpha: f64,
    /// Anisotropy of the surface.
    pub anisotropy: f64,
    /// Translucency amount.
    pub translucency: f64,
    /// Ambient light factor.
    pub ambient: f64,
    /// Emission amount.
    pub emit: f64,
    /// Specular hardness.
    pub hardness: i32,
    /// Additive transparency glow.
    pub add: f64,
    /// Specular intensity.
    pub spec: f64,
    /// Specular color (RGB).
    pub spec_color: [f64; 3],
    /// Mirror color (RGB).
    pub mirror_color: [f64; 3],
    /// Threshold for mirrored reflections.
    pub reflections_threshold: f64,
    /// Threshold for refractions.
    pub refractions_threshold: f64,
    /// Amount of mirrored reflection.
    pub reflection_amount: f64,
    /// Maximum transparent ray depth.
    pub trans_depth: i32,
    /// Diffuse shading model.
    pub diffuse_shader: DiffuseShader,
    /// Specular shading model.
    pub spec_shader: SpecShader,
}
