//! This demo exports a flat-shaded unit quad as 2 triangle-centroid splats.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example export-quad -- "path/to/output.ply"
//! ```

use glam::*;
use mesh_3dgs_export as gs;

fn main() {
    let model_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "target/quad_gs.ply".to_string());

    let scene = gs::SceneGeometry {
        meshes: vec![gs::MeshData {
            vertices: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            normals: Some(vec![Vec3::Z; 4]),
            uvs: Some(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ]),
            colors: None,
            indices: vec![0, 1, 2, 0, 2, 3],
        }],
        materials: vec![gs::MaterialSource {
            texture: None,
            color: Some(Vec4::new(1.0, 0.0, 0.0, 1.0)),
        }],
    };

    let options = gs::ExportOptions {
        mode: gs::SampleMode::TriangleCentroid,
        alpha: 0.5,
        sigma: gs::Sigma::Manual(Vec3::new(0.01, 0.01, 1e-6)),
        ..Default::default()
    };

    let count = gs::export_ply_file(&scene, &options, &model_path).expect("export PLY file");

    println!("Wrote {count} splats to {model_path}");
}
