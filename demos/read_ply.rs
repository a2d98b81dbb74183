//! This demo reads back a 3DGS PLY produced by this crate and prints a
//! summary per splat.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example read-ply -- "path/to/input.ply"
//! ```

use mesh_3dgs_export as gs;

fn main() {
    let model_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "target/quad_gs.ply".to_string());

    let splats = gs::PlySplats::read_ply_file(&model_path).expect("read PLY file");

    println!("Read {} splats from {model_path}", splats.len());

    for (i, splat) in splats.iter().enumerate() {
        println!(
            "#{i}: pos {:?} f_dc {:?} opacity {} scale {:?} rot {:?}",
            splat.pos, splat.color, splat.opacity, splat.scale, splat.rot
        );
    }
}
