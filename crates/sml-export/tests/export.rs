//! End-to-end export tests over complete documents.

use std::collections::BTreeMap;

use sml_export::{export_to_string, ExportSettings, Exporter};
use sml_ir::{
    ArmatureData, BezTriple, Bone, CameraProjection, Constraint, Content, CurveData, DiffuseShader,
    Document, IkSettings, ImageType, Ipo, IpoCurve, Keyframe, LampData, LampFalloff, LampKind,
    MaterialData, MeshData, MetaElement, MetaElementKind, MetaballData, Object, ObjectKind, Pose,
    PoseBone, Property, PropertyValue, RenderSettings, Scene, SpecShader, Spline, TextAlignment,
    TextData,
};

fn render_settings() -> RenderSettings {
    RenderSettings {
        image_size: [800.0, 600.0],
        image_type: ImageType::Png,
        start_frame: 1,
        end_frame: 250,
        fps: 25.0,
        fps_base: 1.0,
        toon_shading: false,
        shadow: true,
        motion_blur: None,
    }
}

fn material(name: &str) -> MaterialData {
    MaterialData {
        name: name.to_string(),
        color: [1.0, 0.0, 0.0],
        alpha: 1.0,
        anisotropy: 0.0,
        translucency: 0.0,
        ambient: 0.5,
        emit: 0.0,
        hardness: 50,
        add: 0.0,
        spec: 0.5,
        spec_color: [1.0, 1.0, 1.0],
        mirror_color: [1.0, 1.0, 1.0],
        reflections_threshold: 0.005,
        refractions_threshold: 0.005,
        reflection_amount: 0.8,
        trans_depth: 2,
        diffuse_shader: DiffuseShader::Lambert,
        spec_shader: SpecShader::CookTorr,
    }
}

/// Unit cube: 8 vertices, 6 quad faces.
fn cube_mesh(materials: Vec<MaterialData>) -> MeshData {
    MeshData {
        max_smooth_angle: 30.0,
        vertices: vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ],
        render_color_layer: None,
        vertex_colors: None,
        render_uv_layer: None,
        vertex_uv: None,
        face_uv: None,
        faces: vec![
            vec![0, 1, 2, 3],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![1, 2, 6, 5],
            vec![2, 3, 7, 6],
            vec![3, 0, 4, 7],
        ],
        materials,
    }
}

fn object(kind: ObjectKind, name: &str, content: Option<&str>) -> Object {
    Object {
        kind,
        name: name.to_string(),
        location: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0],
        scale: [1.0, 1.0, 1.0],
        layers: vec![1],
        properties: Vec::new(),
        ipo: None,
        content: content.map(str::to_string),
        pose: None,
    }
}

fn single_scene_doc(objects: Vec<Object>) -> Document {
    let mut doc = Document::new();
    doc.active_scene = "Main".to_string();
    doc.scenes.push(Scene {
        name: "Main".to_string(),
        layers: vec![1],
        render: render_settings(),
        objects,
    });
    doc
}

#[test]
fn shared_mesh_is_defined_once() {
    let mut doc = single_scene_doc(vec![
        object(ObjectKind::Mesh, "Cube", Some("CubeMesh")),
        object(ObjectKind::Mesh, "CubeCopy", Some("CubeMesh")),
    ]);
    doc.datablocks.insert(
        "CubeMesh".to_string(),
        Content::Mesh(cube_mesh(vec![material("Red")])),
    );

    let out = export_to_string(&doc).unwrap();

    assert_eq!(out.matches("(mesh\n").count(), 1);
    assert_eq!(out.matches("(material\n").count(), 1);
    assert_eq!(out.matches("(content_name \"CubeMesh\")").count(), 1);
    assert_eq!(out.matches("(use_content \"CubeMesh\")").count(), 1);

    // The definition belongs to the first object in scene order.
    let definition = out.find("(content_name \"CubeMesh\")").unwrap();
    let reference = out.find("(use_content \"CubeMesh\")").unwrap();
    assert!(definition < reference);
}

#[test]
fn material_shared_across_datablocks_is_defined_once() {
    let mut doc = single_scene_doc(vec![
        object(ObjectKind::Mesh, "A", Some("MeshA")),
        object(ObjectKind::Mesh, "B", Some("MeshB")),
    ]);
    doc.datablocks.insert(
        "MeshA".to_string(),
        Content::Mesh(cube_mesh(vec![material("Red")])),
    );
    doc.datablocks.insert(
        "MeshB".to_string(),
        Content::Mesh(cube_mesh(vec![material("Red")])),
    );

    let out = export_to_string(&doc).unwrap();
    assert_eq!(out.matches("(material_name \"Red\")").count(), 1);
    assert_eq!(out.matches("(use_material \"Red\")").count(), 1);
}

#[test]
fn export_is_deterministic() {
    let mut doc = single_scene_doc(vec![
        object(ObjectKind::Mesh, "Cube", Some("CubeMesh")),
        object(ObjectKind::Mesh, "CubeCopy", Some("CubeMesh")),
    ]);
    doc.datablocks.insert(
        "CubeMesh".to_string(),
        Content::Mesh(cube_mesh(vec![material("Red")])),
    );

    let first = export_to_string(&doc).unwrap();
    let second = export_to_string(&doc).unwrap();
    assert_eq!(first, second);
}

#[test]
fn cube_fixture_face_indices_are_in_bounds() {
    let mesh = cube_mesh(vec![]);
    for face in &mesh.faces {
        assert!(face.len() == 3 || face.len() == 4);
        for &index in face {
            assert!((index as usize) < mesh.vertices.len());
        }
    }
}

#[test]
fn spot_lamp_emits_spot_fields_only() {
    let mut doc = single_scene_doc(vec![object(ObjectKind::Lamp, "Key", Some("KeyLamp"))]);
    doc.datablocks.insert(
        "KeyLamp".to_string(),
        Content::Lamp(LampData {
            color: [1.0, 0.95, 0.9],
            bias: 1.0,
            softness: 3.0,
            clip_start: 0.5,
            clip_end: 40.0,
            energy: 1.0,
            modes: 1,
            falloff: LampFalloff::InverseSquare,
            kind: LampKind::Spot {
                blend: 0.15,
                size: 45.0,
            },
        }),
    );

    let out = export_to_string(&doc).unwrap();
    assert!(out.contains("(lamp_type \"Spot\")"));
    assert!(out.contains("(falloff_type \"inverse_square\")"));
    assert!(out.contains("(spot_blend 0.15)"));
    assert!(out.contains("(spot_size 45)"));
    assert!(out.contains("(shadows true)"));
    assert!(!out.contains("(area_size"));
}

#[test]
fn empty_scene_emits_no_object_blocks() {
    let mut doc = Document::new();
    doc.active_scene = "Main".to_string();
    doc.scenes.push(Scene {
        name: "Empty".to_string(),
        layers: vec![1, 2],
        render: render_settings(),
        objects: Vec::new(),
    });

    let out = export_to_string(&doc).unwrap();
    assert!(out.contains("(name \"Empty\")"));
    assert!(out.contains("(active_scene false)"));
    assert!(out.contains("(layers (1 2))"));
    assert!(out.contains("(render\n"));
    assert!(!out.contains("(obj\n"));
}

#[test]
fn active_scene_flag_follows_document() {
    let mut doc = Document::new();
    doc.active_scene = "Second".to_string();
    for name in ["First", "Second"] {
        doc.scenes.push(Scene {
            name: name.to_string(),
            layers: vec![1],
            render: render_settings(),
            objects: Vec::new(),
        });
    }

    let out = export_to_string(&doc).unwrap();
    let first = out.find("(name \"First\")").unwrap();
    let second = out.find("(name \"Second\")").unwrap();
    assert!(first < second);
    assert_eq!(out.matches("(active_scene true)").count(), 1);
    assert_eq!(out.matches("(active_scene false)").count(), 1);
}

#[test]
fn shader_variants_emit_their_fields_exclusively() {
    let mut lambert = material("Plain");
    lambert.diffuse_shader = DiffuseShader::Lambert;

    let mut toon = material("Cel");
    toon.diffuse_shader = DiffuseShader::Toon {
        size: 0.3,
        smooth: 0.1,
    };
    toon.spec_shader = SpecShader::Blinn {
        refraction_index: 1.45,
    };

    let mut doc = single_scene_doc(vec![
        object(ObjectKind::Mesh, "A", Some("MeshA")),
        object(ObjectKind::Mesh, "B", Some("MeshB")),
    ]);
    doc.datablocks
        .insert("MeshA".to_string(), Content::Mesh(cube_mesh(vec![lambert])));
    doc.datablocks
        .insert("MeshB".to_string(), Content::Mesh(cube_mesh(vec![toon])));

    let out = export_to_string(&doc).unwrap();

    let plain_start = out.find("(material_name \"Plain\")").unwrap();
    let cel_start = out.find("(material_name \"Cel\")").unwrap();
    let (plain_block, cel_block) = if plain_start < cel_start {
        (&out[plain_start..cel_start], &out[cel_start..])
    } else {
        (&out[plain_start..], &out[cel_start..plain_start])
    };

    assert!(plain_block.contains("(diffuse_shader \"diffuse_lambert\")"));
    assert!(!plain_block.contains("(roughness"));
    assert!(!plain_block.contains("(diffuseSize"));

    assert!(cel_block.contains("(diffuse_shader \"diffuse_toon\")"));
    assert!(cel_block.contains("(diffuseSize 0.3)"));
    assert!(cel_block.contains("(diffuseSmooth 0.1)"));
    assert!(cel_block.contains("(spec_shader \"spec_blinn\")"));
    assert!(cel_block.contains("(refrac_index 1.45)"));
}

fn simple_bone(name: &str, parent: Option<&str>, children: &[&str]) -> Bone {
    let mut head = BTreeMap::new();
    head.insert("ARMATURESPACE".to_string(), [0.0, 0.0, 0.0, 1.0]);
    let mut tail = BTreeMap::new();
    tail.insert("ARMATURESPACE".to_string(), [0.0, 1.0, 0.0, 1.0]);
    let mut roll = BTreeMap::new();
    roll.insert("ARMATURESPACE".to_string(), 0.0);
    let mut matrix = BTreeMap::new();
    matrix.insert(
        "BONESPACE".to_string(),
        vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ],
    );
    Bone {
        name: name.to_string(),
        head_radius: 0.1,
        tail_radius: 0.05,
        weight: 1.0,
        subdivisions: 1,
        length: 1.0,
        deform_dist: 0.25,
        layer_mask: 1,
        head,
        tail,
        roll,
        matrix,
        parent: parent.map(str::to_string),
        children: children.iter().map(|c| c.to_string()).collect(),
    }
}

#[test]
fn armature_bone_links_are_symmetric_in_output() {
    let mut bones = BTreeMap::new();
    bones.insert("root".to_string(), simple_bone("root", None, &["tip"]));
    bones.insert("tip".to_string(), simple_bone("tip", Some("root"), &[]));

    let mut pose_bones = BTreeMap::new();
    pose_bones.insert(
        "tip".to_string(),
        PoseBone {
            name: "tip".to_string(),
            ik: Some(IkSettings {
                limit_x: true,
                limit_y: false,
                limit_z: false,
                limit_max: [45.0, 0.0, 0.0],
                limit_min: [-45.0, 0.0, 0.0],
                lock_x_rot: false,
                lock_y_rot: true,
                lock_z_rot: false,
                stiffness: [0.5, 0.5, 0.5],
                stretch: 0.0,
            }),
            constraints: vec![Constraint {
                name: "follow".to_string(),
            }],
        },
    );

    let mut rig = object(ObjectKind::Armature, "Rig", Some("RigData"));
    rig.pose = Some(Pose { bones: pose_bones });

    let mut doc = single_scene_doc(vec![rig]);
    doc.datablocks.insert(
        "RigData".to_string(),
        Content::Armature(ArmatureData {
            vertex_groups: true,
            envelopes: false,
            layers: vec![1],
            bones,
        }),
    );

    let out = export_to_string(&doc).unwrap();

    // Parent reference and child list mirror each other.
    assert!(out.contains("(parent_name \"root\")"));
    assert!(out.contains("(child_name \"tip\")"));
    assert_eq!(out.matches("(bone\n").count(), 2);

    // Space keys come out lowercased.
    assert!(out.contains("(armaturespace 0 0 0 1)"));
    assert!(out.contains("(bonespace\n"));

    // Pose with IK and a placeholder constraint.
    assert!(out.contains("(pose\n"));
    assert!(out.contains("(ik\n"));
    assert!(out.contains("(limit_x true)"));
    assert!(out.contains("(lock_y_rot true)"));
    assert!(out.contains("(stiff 0.5 0.5 0.5)"));
    assert_eq!(out.matches("(const\n").count(), 1);
}

#[test]
fn camera_projection_variants() {
    let mut doc = single_scene_doc(vec![
        object(ObjectKind::Camera, "Cam", Some("MainCam")),
        object(ObjectKind::Camera, "Iso", Some("IsoCam")),
    ]);
    doc.datablocks.insert(
        "MainCam".to_string(),
        Content::Camera(sml_ir::CameraData {
            clip_start: 0.1,
            clip_end: 100.0,
            dof_distance: 0.0,
            shift: [0.0, 0.0],
            projection: CameraProjection::Persp {
                angle: 49.13,
                lens: 35.0,
            },
        }),
    );
    doc.datablocks.insert(
        "IsoCam".to_string(),
        Content::Camera(sml_ir::CameraData {
            clip_start: 0.1,
            clip_end: 100.0,
            dof_distance: 0.0,
            shift: [0.1, -0.1],
            projection: CameraProjection::Ortho { scale: 7.5 },
        }),
    );

    let out = export_to_string(&doc).unwrap();
    assert!(out.contains("(cam_type persp (angle 49.13) (lens 35))"));
    assert!(out.contains("(cam_type ortho (scale 7.5))"));
    assert!(out.contains("(shift 0.1 -0.1)"));
}

#[test]
fn properties_and_ipo_blocks_are_optional() {
    let mut with_extras = object(ObjectKind::Mesh, "Rich", Some("MeshA"));
    with_extras.properties = vec![
        Property {
            name: "health".to_string(),
            value: PropertyValue::Int(100),
        },
        Property {
            name: "tag".to_string(),
            value: PropertyValue::String("enemy".to_string()),
        },
        Property {
            name: "mystery".to_string(),
            value: PropertyValue::Other {
                tag: "VECTOR".to_string(),
                data: "(1, 2, 3)".to_string(),
            },
        },
    ];
    with_extras.ipo = Some(Ipo {
        curves: vec![IpoCurve {
            name: "LocZ".to_string(),
            points: vec![Keyframe {
                weight: 1.0,
                tilt: 0.0,
                handle_left: [0.0, 0.0, 0.0],
                knot: [1.0, 2.0, 0.0],
                handle_right: [2.0, 4.0, 0.0],
            }],
        }],
    });
    let bare = object(ObjectKind::Mesh, "Bare", Some("MeshA"));

    let mut doc = single_scene_doc(vec![with_extras, bare]);
    doc.datablocks
        .insert("MeshA".to_string(), Content::Mesh(cube_mesh(vec![])));

    let out = export_to_string(&doc).unwrap();
    assert_eq!(out.matches("(game_properties\n").count(), 1);
    assert_eq!(out.matches("(ipo (").count(), 1);
    assert!(out.contains("(type \"INT\")"));
    assert!(out.contains("(data 100)"));
    assert!(out.contains("(type \"STRING\")"));
    assert!(out.contains("(data \"enemy\")"));
    assert!(out.contains("(type \"VECTOR\")"));
    assert!(out.contains("(data \"(1, 2, 3)\")"));
    assert!(out.contains("(name \"LocZ\")"));
    assert!(out.contains("(bez_triple\n"));
}

#[test]
fn names_with_quotes_are_escaped() {
    let mut doc = single_scene_doc(vec![object(
        ObjectKind::Mesh,
        "the \"cube\"",
        Some("MeshA"),
    )]);
    doc.datablocks
        .insert("MeshA".to_string(), Content::Mesh(cube_mesh(vec![])));

    let out = export_to_string(&doc).unwrap();
    assert!(out.contains(r#"(datablock_name "the \"cube\"")"#));
}

#[test]
fn curve_splines_branch_on_kind() {
    let mut doc = single_scene_doc(vec![object(ObjectKind::Curve, "Path", Some("PathCurve"))]);
    doc.datablocks.insert(
        "PathCurve".to_string(),
        Content::Curve(CurveData {
            bevel_resolution: 4,
            extrude: 0.2,
            bevel_depth: 0.05,
            size: [1.0, 1.0, 1.0],
            path_length: 100,
            resolution_u: 12,
            resolution_v: 1,
            splines: vec![
                Spline::Nurbs {
                    points: vec![[0.0, 0.0, 0.0], [1.0, 0.5, 0.0], [2.0, 0.0, 0.0]],
                },
                Spline::Bezier {
                    points: vec![BezTriple {
                        handle_left: [-1.0, 0.0, 0.0],
                        knot: [0.0, 0.0, 0.0],
                        handle_right: [1.0, 0.0, 0.0],
                    }],
                },
            ],
        }),
    );

    let out = export_to_string(&doc).unwrap();
    assert!(out.contains("(curve\n"));
    assert!(out.contains("(bevresol 4)"));
    assert!(out.contains("(extrude 0.2)"));
    assert!(out.contains("(bevel_depth 0.05)"));
    assert!(out.contains("(size (1 1 1))"));
    assert!(out.contains("(path_length 100)"));
    assert!(out.contains("(u_resolution 12)"));
    assert!(out.contains("(v_resolution 1)"));

    // NURBS points are bare vertices; bezier points carry full triples.
    assert!(out.contains("(nurbs_curve\n"));
    assert!(out.contains("(point 0 0 0)"));
    assert!(out.contains("(point 1 0.5 0)"));
    assert!(out.contains("(bezier_curve\n"));
    assert!(out.contains("(triple\n(-1 0 0)\n(0 0 0)\n(1 0 0)\n)\n"));
    assert_eq!(out.matches("(point ").count(), 3);
    assert_eq!(out.matches("(triple\n").count(), 1);
}

#[test]
fn metaball_elements_and_shared_material() {
    let mut doc = single_scene_doc(vec![
        object(ObjectKind::Mesh, "Cube", Some("CubeMesh")),
        object(ObjectKind::Metaball, "Blob", Some("BlobBall")),
    ]);
    doc.datablocks.insert(
        "CubeMesh".to_string(),
        Content::Mesh(cube_mesh(vec![material("Red")])),
    );
    doc.datablocks.insert(
        "BlobBall".to_string(),
        Content::Metaball(MetaballData {
            wire_size: 0.4,
            render_size: 0.2,
            threshold: 0.6,
            materials: vec![material("Red")],
            elements: vec![
                MetaElement {
                    kind: MetaElementKind::Ball,
                    radius: 2.0,
                    position: [0.0, 0.0, 1.0],
                    dims: [1.0, 1.0, 1.0],
                    quat: [1.0, 0.0, 0.0, 0.0],
                    stiffness: 2.0,
                },
                MetaElement {
                    kind: MetaElementKind::Elipsoid,
                    radius: 1.5,
                    position: [0.5, 0.0, 1.0],
                    dims: [2.0, 1.0, 1.0],
                    quat: [1.0, 0.0, 0.0, 0.0],
                    stiffness: 1.0,
                },
            ],
        }),
    );

    let out = export_to_string(&doc).unwrap();
    assert!(out.contains("(metaball\n"));
    assert!(out.contains("(wiresize 0.4)"));
    assert!(out.contains("(rendersize 0.2)"));
    assert!(out.contains("(thresh 0.6)"));
    assert_eq!(out.matches("(element\n").count(), 2);
    assert!(out.contains("(type ball)"));
    assert!(out.contains("(type elipsoid)"));
    assert!(out.contains("(coords 0 0 1)"));
    assert!(out.contains("(dims 2 1 1)"));
    assert!(out.contains("(quat 1 0 0 0)"));
    assert!(out.contains("(stiffness 2)"));

    // The mesh defined "Red" first; the metaball cites it by name.
    assert_eq!(out.matches("(material_name \"Red\")").count(), 1);
    assert_eq!(out.matches("(use_material \"Red\")").count(), 1);
    let metaball_start = out.find("(metaball\n").unwrap();
    let reference = out.find("(use_material \"Red\")").unwrap();
    assert!(out.find("(material_name \"Red\")").unwrap() < metaball_start);
    assert!(metaball_start < reference);
}

#[test]
fn text3d_fields_and_bare_font_reference() {
    let title = TextData {
        text: "Hello".to_string(),
        shear: 0.1,
        total_frames: 1,
        frame_height: 0.0,
        frame_width: 0.0,
        frame_xy: [0.0, 0.0],
        alignment: TextAlignment::Middle,
        bevel_amount: 0.02,
        extrude_bevel_depth: 0.01,
        extrude_depth: 0.1,
        font: "arial.ttf".to_string(),
        width: 1.0,
        size: 1.0,
        spacing: 1.0,
        offset: [0.0, -0.1],
        line_separation: 1.0,
    };
    let mut subtitle = title.clone();
    subtitle.text = "World".to_string();
    subtitle.alignment = TextAlignment::Left;

    let mut doc = single_scene_doc(vec![
        object(ObjectKind::Text, "Title", Some("TitleText")),
        object(ObjectKind::Text, "Subtitle", Some("SubtitleText")),
    ]);
    doc.datablocks
        .insert("TitleText".to_string(), Content::Text(title));
    doc.datablocks
        .insert("SubtitleText".to_string(), Content::Text(subtitle));

    let out = export_to_string(&doc).unwrap();
    assert_eq!(out.matches("(text3d\n").count(), 2);
    assert!(out.contains("(text \"Hello\")"));
    assert!(out.contains("(text \"World\")"));
    assert!(out.contains("(shear 0.1)"));
    assert!(out.contains("(alignment middle)"));
    assert!(out.contains("(alignment left)"));
    assert!(out.contains("(bevel_amount 0.02)"));
    assert!(out.contains("(extrude_depth 0.1)"));
    assert!(out.contains("(xy_offset 0 -0.1)"));
    assert!(out.contains("(line_separation 1)"));

    // Fonts are bare name references, never deduplicated.
    assert_eq!(out.matches("(font \"arial.ttf\")").count(), 2);
}

#[test]
fn mesh_optional_layers_follow_face_winding() {
    let mut doc = single_scene_doc(vec![object(ObjectKind::Mesh, "Patch", Some("PatchMesh"))]);
    doc.datablocks.insert(
        "PatchMesh".to_string(),
        Content::Mesh(MeshData {
            max_smooth_angle: 30.0,
            vertices: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
                [2.0, 0.5, 0.0],
            ],
            render_color_layer: Some("Col".to_string()),
            // One color per face corner, in the face's own winding order.
            vertex_colors: Some(vec![
                vec![
                    [0.1, 0.0, 0.0],
                    [0.2, 0.0, 0.0],
                    [0.3, 0.0, 0.0],
                    [0.4, 0.0, 0.0],
                ],
                vec![[0.5, 0.0, 0.0], [0.6, 0.0, 0.0], [0.7, 0.0, 0.0]],
            ]),
            render_uv_layer: Some("UVMap".to_string()),
            vertex_uv: Some(vec![
                [0.0, 0.0],
                [0.25, 0.0],
                [0.5, 0.0],
                [0.75, 0.0],
                [1.0, 1.0],
            ]),
            face_uv: Some(vec![
                vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
                vec![[0.0, 0.0], [1.0, 1.0], [0.5, 0.5]],
            ]),
            faces: vec![vec![0, 1, 2, 3], vec![0, 2, 4]],
            materials: Vec::new(),
        }),
    );

    let out = export_to_string(&doc).unwrap();
    assert!(out.contains("(render_color_layer \"Col\")"));
    assert!(out.contains("(render_uv_layer \"UVMap\")"));

    // Corner tuples come out one face per line, tracking each face's corner
    // count and order (4 for the quad, 3 for the triangle).
    let quad_colors = "((0.1 0 0) (0.2 0 0) (0.3 0 0) (0.4 0 0))\n";
    let tri_colors = "((0.5 0 0) (0.6 0 0) (0.7 0 0))\n";
    assert!(out.contains(quad_colors));
    assert!(out.contains(tri_colors));
    assert!(out.find(quad_colors).unwrap() < out.find(tri_colors).unwrap());

    let quad_uv = "((0 0) (1 0) (1 1) (0 1))\n";
    let tri_uv = "((0 0) (1 1) (0.5 0.5))\n";
    assert!(out.contains(quad_uv));
    assert!(out.contains(tri_uv));
    assert!(out.find(quad_uv).unwrap() < out.find(tri_uv).unwrap());

    // Per-vertex UVs wrap at four tuples per line by default.
    assert!(out.contains("(vertex_uv (\n"));
    assert!(out.contains("(0 0) (0.25 0) (0.5 0) (0.75 0)\n(1 1)\n"));
}

#[test]
fn grouping_width_is_cosmetic() {
    let mut doc = single_scene_doc(vec![object(ObjectKind::Mesh, "Cube", Some("CubeMesh"))]);
    doc.datablocks
        .insert("CubeMesh".to_string(), Content::Mesh(cube_mesh(vec![])));

    let narrow = ExportSettings {
        vertex_row: 1,
        face_row: 1,
        uv_row: 1,
    };
    let default_out = export_to_string(&doc).unwrap();
    let narrow_out = String::from_utf8(
        Exporter::with_settings(&doc, Vec::new(), narrow)
            .export()
            .unwrap(),
    )
    .unwrap();

    // Same tokens, different line wrapping.
    let squash = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");
    assert_ne!(default_out, narrow_out);
    assert_eq!(squash(&default_out), squash(&narrow_out));
}
